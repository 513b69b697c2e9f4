//! Owned animation state: the rotating wireframe and how it is drawn
use log::trace;

use crate::error::{Error, Result};
use crate::geometry::Wireframe;
use crate::projection::{Projector, DEFAULT_CAMERA_DISTANCE};
use crate::raster::{draw_line, Grid};
use crate::transform::RotationState;

pub const DEFAULT_SCALE: usize = 70;

/// Largest accepted grid side
pub const MAX_SCALE: usize = 4096;

/// Radians added to every axis after each frame
pub const DEFAULT_THETA: f64 = 0.001333;

/// Knobs for the geometry pipeline
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneConfig {
    /// Grid side length and projection scale
    pub scale: usize,
    pub theta: f64,
    pub camera_distance: f64,
}

impl SceneConfig {
    pub fn validate(&self) -> Result<()> {
        if self.scale == 0 || self.scale > MAX_SCALE {
            return Err(Error::InvalidConfig(format!(
                "scale must be between 1 and {}, got {}",
                MAX_SCALE, self.scale
            )));
        }
        if !self.theta.is_finite() {
            return Err(Error::InvalidConfig(format!(
                "theta must be finite, got {}",
                self.theta
            )));
        }
        if !(self.camera_distance.is_finite() && self.camera_distance > 0.0) {
            return Err(Error::InvalidConfig(format!(
                "camera distance must be a positive number, got {}",
                self.camera_distance
            )));
        }
        Ok(())
    }
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            scale: DEFAULT_SCALE,
            theta: DEFAULT_THETA,
            camera_distance: DEFAULT_CAMERA_DISTANCE,
        }
    }
}

/// The wireframe together with its running rotation
///
/// Rotation is cumulative: each frame rotates the already-rotated vertices
/// by the current angles, which then grow by `theta`.
#[derive(Debug, Clone)]
pub struct Scene {
    wireframe: Wireframe,
    rotation: RotationState,
    projector: Projector,
    theta: f64,
    frame: u64,
}

impl Scene {
    /// A unit cube scene
    pub fn new(config: SceneConfig) -> Result<Self> {
        Self::with_wireframe(Wireframe::cube(), config)
    }

    /// Fails unless every vertex stays in front of the camera at any
    /// rotation, i.e. `camera_distance > radius - centroid.z`.
    pub fn with_wireframe(wireframe: Wireframe, config: SceneConfig) -> Result<Self> {
        config.validate()?;

        let nearest = wireframe.centroid().z - wireframe.radius();
        if !(nearest.is_finite() && config.camera_distance + nearest > 0.0) {
            return Err(Error::InvalidConfig(format!(
                "camera distance must exceed {:.4} for this wireframe, got {}",
                -nearest, config.camera_distance
            )));
        }

        Ok(Self {
            wireframe,
            rotation: RotationState::zero(),
            projector: Projector::new(config.scale, config.camera_distance),
            theta: config.theta,
            frame: 0,
        })
    }

    pub fn wireframe(&self) -> &Wireframe {
        &self.wireframe
    }

    pub fn rotation(&self) -> RotationState {
        self.rotation
    }

    pub fn scale(&self) -> usize {
        self.projector.scale
    }

    /// Frames produced so far
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Rotate the vertices by the current angles about their live centroid
    pub fn rotate(&mut self) {
        self.rotation.apply(&mut self.wireframe.vertices);
    }

    /// Project the current vertices and draw every edge into a fresh grid
    pub fn rasterize(&self) -> Grid {
        let projected = self.projector.project(&self.wireframe.vertices);
        let mut grid = Grid::new(self.projector.scale);

        for edge in self.wireframe.edges() {
            let (from, to) = (&projected[edge.0], &projected[edge.1]);
            if self.projector.in_front(from) && self.projector.in_front(to) {
                draw_line(&mut grid, from, to);
            }
        }

        grid
    }

    pub fn advance(&mut self) {
        self.rotation.advance(self.theta);
        self.frame += 1;
    }

    /// One animation step: rotate, rasterize, then advance the angles
    pub fn step(&mut self) -> Grid {
        self.rotate();
        let grid = self.rasterize();
        trace!("frame {}: {} cells filled", self.frame, grid.filled());
        self.advance();
        grid
    }
}
