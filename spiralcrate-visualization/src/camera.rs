//! Camera utilities for 3D visualization

use nalgebra::{Matrix4, Point3, Vector3};
use spiralcrate_core::Point3d;

/// A 3D camera looking at the chart scene
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    pub position: Point3<f64>,
    pub target: Point3<f64>,
    pub up: Vector3<f64>,
}

impl Camera {
    /// Create a new camera
    pub fn new(position: Point3<f64>, target: Point3<f64>, up: Vector3<f64>) -> Self {
        Self { position, target, up }
    }

    /// Move the camera to `location`, keeping it aimed at its target
    pub fn set_location(&mut self, location: Point3d) {
        self.position = location;
    }

    /// Distance from the camera to its target
    pub fn distance_to_target(&self) -> f64 {
        (self.position - self.target).norm()
    }

    /// Get the view matrix
    pub fn view_matrix(&self) -> Matrix4<f64> {
        Matrix4::look_at_rh(&self.position, &self.target, &self.up)
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(
            Point3::new(0.0, 0.0, 5.0),
            Point3::new(0.0, 0.0, 0.0),
            Vector3::new(0.0, 1.0, 0.0),
        )
    }
}
