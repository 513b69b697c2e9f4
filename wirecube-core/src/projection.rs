//! Weak-perspective projection onto the square character grid
use crate::geometry::{centroid, Vertex};

/// Distance added to every z before the perspective divide
pub const DEFAULT_CAMERA_DISTANCE: f64 = 2.0;

/// A vertex mapped to screen space; `z` is carried through untouched
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectedPoint {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// Maps 3D points onto a `scale × scale` screen, keeping the shape's
/// centroid at the screen's center
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projector {
    pub scale: usize,
    pub camera_distance: f64,
}

impl Projector {
    pub fn new(scale: usize, camera_distance: f64) -> Self {
        Self {
            scale,
            camera_distance,
        }
    }

    /// Screen-space offset that lands `center` on (scale/2, scale/2)
    pub fn offset(&self, center: &Vertex) -> (f64, f64) {
        let scale = self.scale as f64;
        let half = scale / 2.0;
        let depth = center.z + self.camera_distance;

        (half - center.x * scale / depth, half - center.y * scale / depth)
    }

    /// Project a single point using a precomputed offset
    pub fn project_point(&self, vertex: &Vertex, offset: (f64, f64)) -> ProjectedPoint {
        let scale = self.scale as f64;
        let depth = vertex.z + self.camera_distance;

        ProjectedPoint {
            x: vertex.x * scale / depth + offset.0,
            y: vertex.y * scale / depth + offset.1,
            z: vertex.z,
        }
    }

    /// Whether the point sat strictly in front of the camera when projected
    pub fn in_front(&self, point: &ProjectedPoint) -> bool {
        let depth = point.z + self.camera_distance;
        depth.is_finite() && depth > 0.0
    }

    /// Project every vertex, centering on the vertices' current centroid
    pub fn project(&self, vertices: &[Vertex]) -> Vec<ProjectedPoint> {
        if vertices.is_empty() {
            return Vec::new();
        }

        let offset = self.offset(&centroid(vertices));
        vertices
            .iter()
            .map(|v| self.project_point(v, offset))
            .collect()
    }
}

impl Default for Projector {
    fn default() -> Self {
        Self::new(70, DEFAULT_CAMERA_DISTANCE)
    }
}
