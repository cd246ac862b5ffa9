//! Core traits for spiralcrate

use crate::{point::*, point_cloud::*};

/// Trait for drawable/renderable objects
pub trait Drawable {
    /// Get the bounding box of the object
    fn bounding_box(&self) -> (Point3d, Point3d);
    
    /// Get the center point of the object
    fn center(&self) -> Point3d {
        let (min, max) = self.bounding_box();
        Point3d::new(
            (min.x + max.x) / 2.0,
            (min.y + max.y) / 2.0,
            (min.z + max.z) / 2.0,
        )
    }
}

impl Drawable for PointCloud<Point3d> {
    fn bounding_box(&self) -> (Point3d, Point3d) {
        if self.is_empty() {
            return (Point3d::origin(), Point3d::origin());
        }
        
        let mut min = self.points[0];
        let mut max = self.points[0];
        
        for point in &self.points {
            min.x = min.x.min(point.x);
            min.y = min.y.min(point.y);
            min.z = min.z.min(point.z);
            
            max.x = max.x.max(point.x);
            max.y = max.y.max(point.y);
            max.z = max.z.max(point.z);
        }
        
        (min, max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_bounding_box_and_center() {
        let cloud = PointCloud::from_points(vec![
            Point3d::new(-1.0, 0.0, 2.0),
            Point3d::new(3.0, -4.0, 0.0),
            Point3d::new(0.0, 2.0, 1.0),
        ]);
        let (min, max) = cloud.bounding_box();
        assert_eq!(min, Point3d::new(-1.0, -4.0, 0.0));
        assert_eq!(max, Point3d::new(3.0, 2.0, 2.0));

        let center = cloud.center();
        assert_relative_eq!(center.x, 1.0);
        assert_relative_eq!(center.y, -1.0);
        assert_relative_eq!(center.z, 1.0);
    }

    #[test]
    fn test_empty_bounding_box_is_origin() {
        let cloud = PointCloud3d::new();
        assert_eq!(cloud.bounding_box(), (Point3d::origin(), Point3d::origin()));
    }
}
