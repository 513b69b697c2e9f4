//! Rotation about an arbitrary center and the running rotation state
use std::f64::consts::TAU;

use crate::geometry::{centroid, Vertex};

/// Rotate `vertex` in place about the X axis passing through `center`
pub fn rotate_x(vertex: &mut Vertex, theta: f64, center: &Vertex) {
    let (sin, cos) = theta.sin_cos();
    let y = vertex.y - center.y;
    let z = vertex.z - center.z;

    vertex.y = (y * cos - z * sin) + center.y;
    vertex.z = (y * sin + z * cos) + center.z;
}

/// Rotate `vertex` in place about the Y axis passing through `center`
pub fn rotate_y(vertex: &mut Vertex, theta: f64, center: &Vertex) {
    let (sin, cos) = theta.sin_cos();
    let x = vertex.x - center.x;
    let z = vertex.z - center.z;

    vertex.x = (x * cos + z * sin) + center.x;
    vertex.z = (-x * sin + z * cos) + center.z;
}

/// Rotate `vertex` in place about the Z axis passing through `center`
pub fn rotate_z(vertex: &mut Vertex, theta: f64, center: &Vertex) {
    let (sin, cos) = theta.sin_cos();
    let x = vertex.x - center.x;
    let y = vertex.y - center.y;

    vertex.x = (x * cos - y * sin) + center.x;
    vertex.y = (x * sin + y * cos) + center.y;
}

/// Rotation state around three axes (in radians)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotationState {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl RotationState {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn zero() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            z: 0.0,
        }
    }

    /// Advance every axis by `delta`, wrapping each angle into [0, 2π)
    pub fn advance(&mut self, delta: f64) {
        self.x = (self.x + delta).rem_euclid(TAU);
        self.y = (self.y + delta).rem_euclid(TAU);
        self.z = (self.z + delta).rem_euclid(TAU);
    }

    /// Rotate every vertex X, then Y, then Z about the centroid of the
    /// positions as they are before this call.
    pub fn apply(&self, vertices: &mut [Vertex]) {
        if vertices.is_empty() {
            return;
        }

        let center = centroid(vertices);
        for vertex in vertices.iter_mut() {
            rotate_x(vertex, self.x, &center);
            rotate_y(vertex, self.y, &center);
            rotate_z(vertex, self.z, &center);
        }
    }
}

impl Default for RotationState {
    fn default() -> Self {
        Self::zero()
    }
}
