//! Error types for wireframe construction and scene configuration
use thiserror::Error;

/// Errors raised while building a wireframe or validating a scene config
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error("wireframe has no vertices")]
    EmptyWireframe,

    #[error("edge {edge} references vertex {index}, but only {len} vertices exist")]
    EdgeOutOfRange { edge: usize, index: usize, len: usize },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, Error>;
