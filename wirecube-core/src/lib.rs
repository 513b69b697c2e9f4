//! wirecube core library - wireframe geometry, rotation, projection and
//! rasterization.
//!
//! Everything here is pure computation; drawing to a terminal lives in
//! `wirecube-terminal`.

pub mod error;
pub mod geometry;
pub mod projection;
pub mod raster;
pub mod scene;
pub mod transform;

// Re-export commonly used types
pub use error::{Error, Result};
pub use geometry::{Edge, Vertex, Wireframe};
pub use projection::{ProjectedPoint, Projector};
pub use raster::Grid;
pub use scene::{Scene, SceneConfig};
pub use transform::RotationState;
