//! Point types and related functionality

use nalgebra::Point3;
use bytemuck::{Pod, Zeroable};

/// A 3D point with double precision coordinates
pub type Point3d = Point3<f64>;

/// GPU-ready vertex layout for a single point.
///
/// Renderers consume positions as tightly packed `f32` triples, so generated
/// points are narrowed to this layout before being uploaded.
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable)]
#[repr(C)]
pub struct PointVertex {
    pub position: [f32; 3],
}

impl PointVertex {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { position: [x, y, z] }
    }
}

impl From<&Point3d> for PointVertex {
    fn from(point: &Point3d) -> Self {
        Self::new(point.x as f32, point.y as f32, point.z as f32)
    }
}

impl From<Point3d> for PointVertex {
    fn from(point: Point3d) -> Self {
        Self::from(&point)
    }
}

/// Returns true when all three coordinates are finite
pub fn is_finite_point(point: &Point3d) -> bool {
    point.x.is_finite() && point.y.is_finite() && point.z.is_finite()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_from_point() {
        let vertex = PointVertex::from(Point3d::new(1.5, -2.0, 0.25));
        assert_eq!(vertex.position, [1.5, -2.0, 0.25]);
    }

    #[test]
    fn test_vertex_is_tightly_packed() {
        assert_eq!(std::mem::size_of::<PointVertex>(), 12);
        let vertices = [PointVertex::new(1.0, 2.0, 3.0), PointVertex::new(4.0, 5.0, 6.0)];
        let bytes: &[u8] = bytemuck::cast_slice(&vertices);
        assert_eq!(bytes.len(), 24);
    }

    #[test]
    fn test_is_finite_point() {
        assert!(is_finite_point(&Point3d::new(0.0, 1.0, -1.0)));
        assert!(!is_finite_point(&Point3d::new(f64::NAN, 0.0, 0.0)));
        assert!(!is_finite_point(&Point3d::new(0.0, 0.0, f64::INFINITY)));
    }
}
