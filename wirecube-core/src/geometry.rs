//! Geometry primitives for wireframe rendering
use nalgebra::{Point3, Vector3};

use crate::error::{Error, Result};

/// A 3D vertex position
pub type Vertex = Point3<f64>;

/// An unordered pair of indices into a wireframe's vertex list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge(pub usize, pub usize);

/// Corners of the unit cube spanning [0, 1] on every axis
pub static CUBE_VERTICES: [[f64; 3]; 8] = [
    [0.0, 0.0, 0.0],
    [1.0, 0.0, 0.0],
    [1.0, 1.0, 0.0],
    [0.0, 1.0, 0.0],
    [0.0, 0.0, 1.0],
    [1.0, 0.0, 1.0],
    [1.0, 1.0, 1.0],
    [0.0, 1.0, 1.0],
];

pub static CUBE_EDGES: [Edge; 12] = [
    // Back face
    Edge(0, 1),
    Edge(1, 2),
    Edge(2, 3),
    Edge(3, 0),
    // Front face
    Edge(4, 5),
    Edge(5, 6),
    Edge(6, 7),
    Edge(7, 4),
    // Connecting edges
    Edge(0, 4),
    Edge(1, 5),
    Edge(2, 6),
    Edge(3, 7),
];

/// A set of vertices joined by straight edges
///
/// Vertices are owned and mutated in place by rotation; edges are a fixed table.
#[derive(Debug, Clone)]
pub struct Wireframe {
    pub vertices: Vec<Vertex>,
    edges: &'static [Edge],
}

impl Wireframe {
    /// Build a wireframe, checking that every edge points at an existing vertex
    pub fn new(vertices: Vec<Vertex>, edges: &'static [Edge]) -> Result<Self> {
        if vertices.is_empty() {
            return Err(Error::EmptyWireframe);
        }

        let len = vertices.len();
        for (i, edge) in edges.iter().enumerate() {
            for index in [edge.0, edge.1] {
                if index >= len {
                    return Err(Error::EdgeOutOfRange { edge: i, index, len });
                }
            }
        }

        Ok(Self { vertices, edges })
    }

    /// The unit cube from the static tables
    pub fn cube() -> Self {
        let vertices = CUBE_VERTICES
            .iter()
            .map(|&[x, y, z]| Vertex::new(x, y, z))
            .collect();

        Self {
            vertices,
            edges: &CUBE_EDGES,
        }
    }

    pub fn edges(&self) -> &[Edge] {
        self.edges
    }

    /// Arithmetic mean of the current vertex positions
    pub fn centroid(&self) -> Vertex {
        centroid(&self.vertices)
    }

    /// Largest distance from the centroid to any vertex
    ///
    /// Rotation about the centroid never moves a vertex beyond this.
    pub fn radius(&self) -> f64 {
        let center = self.centroid();
        self.vertices
            .iter()
            .map(|v| (v - center).norm())
            .fold(0.0, f64::max)
    }
}

/// Arithmetic mean of a non-empty point list
pub fn centroid(vertices: &[Vertex]) -> Vertex {
    let sum = vertices
        .iter()
        .fold(Vector3::zeros(), |acc: Vector3<f64>, v| acc + v.coords);

    Vertex::from(sum / vertices.len() as f64)
}
