//! Spiral point cloud generation

use serde::Deserialize;
use spiralcrate_core::{Error, Point3d, PointCloud, RandomSource, Result};
use std::f64::consts::PI;

/// Shape parameters for [`generate_spiral`]
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SpiralParams {
    /// Number of points to generate
    pub point_count: usize,
    pub center_x: f64,
    pub center_z: f64,
    /// Base radius; the randomized radius of each point falls in `[0, radius]`
    pub radius: f64,
    /// Angle added after each point, in radians
    pub angle_step: f64,
    /// Jitter amplitude, also the vertical wave amplitude and lift
    pub a: f64,
    /// Paraboloid coefficient applied to the squared radius
    pub b: f64,
    /// Vertical wave frequency
    pub c: f64,
    /// Divisor applied to all three coordinates
    pub scale: f64,
    /// Added to `y` after scaling
    pub y_offset: f64,
}

impl Default for SpiralParams {
    fn default() -> Self {
        Self {
            point_count: 50_000,
            center_x: 0.5,
            center_z: -0.5,
            radius: 40.0,
            angle_step: PI / 1000.0,
            a: 20.0,
            b: 0.025,
            c: 5.0,
            scale: 10.0,
            y_offset: -0.5,
        }
    }
}

impl SpiralParams {
    /// Default shape with a different point count
    pub fn with_point_count(point_count: usize) -> Self {
        Self {
            point_count,
            ..Self::default()
        }
    }

    /// Reject non-finite parameters and a zero scale
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("center_x", self.center_x),
            ("center_z", self.center_z),
            ("radius", self.radius),
            ("angle_step", self.angle_step),
            ("a", self.a),
            ("b", self.b),
            ("c", self.c),
            ("scale", self.scale),
            ("y_offset", self.y_offset),
        ];
        for (name, value) in fields {
            if !value.is_finite() {
                return Err(Error::invalid_config(format!("{name} must be finite, got {value}")));
            }
        }
        if self.scale == 0.0 {
            return Err(Error::invalid_config("scale must be non-zero"));
        }
        Ok(())
    }
}

/// Generate a jittered spiral point cloud.
///
/// Points wind around the Y axis while the angle advances by
/// `params.angle_step` per point. Each point consumes four draws from `rng`,
/// in order: radius, x jitter, y jitter, z jitter. The randomized radius is
/// `radius + (r - 1) * radius`, which lands in `[0, radius]` rather than
/// around `radius`; the cloud's shape depends on that bias.
///
/// # Arguments
/// * `params` - Shape parameters, validated before any point is produced
/// * `rng` - Uniform source in `[0, 1)`
///
/// # Returns
/// * `Result<PointCloud<Point3d>>` - Exactly `params.point_count` points
pub fn generate_spiral<R: RandomSource + ?Sized>(
    params: &SpiralParams,
    rng: &mut R,
) -> Result<PointCloud<Point3d>> {
    params.validate()?;

    let SpiralParams { point_count, center_x, center_z, radius, angle_step, a, b, c, scale, y_offset } =
        *params;

    let mut points = Vec::new();
    points.try_reserve_exact(point_count).map_err(|e| {
        Error::invalid_config(format!("cannot allocate {point_count} points: {e}"))
    })?;
    let mut cloud = PointCloud::from_points(points);
    let mut angle = 0.0_f64;

    for _ in 0..point_count {
        let random_radius = radius + (rng.next_unit() - 1.0) * radius;
        let x = center_x + random_radius * angle.cos() + a * (rng.next_unit() - 0.5);
        let y = random_radius * random_radius * b
            + a * (angle * c).sin()
            + (rng.next_unit() - 0.5) * a
            + a;
        let z = center_z + random_radius * angle.sin() + a * (rng.next_unit() - 0.5);

        cloud.push(Point3d::new(x / scale, y / scale + y_offset, z / scale));
        angle += angle_step;
    }

    tracing::debug!(points = cloud.len(), final_angle = angle, "generated spiral point cloud");

    Ok(cloud)
}
