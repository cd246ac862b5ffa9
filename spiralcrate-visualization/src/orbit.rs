//! Camera orbit animation
//!
//! The orbit is a pure per-frame transition: the frame driver owns the
//! [`OrbitState`] and threads it through [`OrbitState::tick`] once per
//! display refresh.

use crate::camera::Camera;
use serde::Deserialize;
use spiralcrate_core::{Error, Point3d, Result};

/// Fixed geometry of the orbit circle
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct OrbitConfig {
    /// Radius of the circle in the XZ plane
    pub distance: f64,
    /// Constant camera height
    pub height: f64,
    /// Radians advanced per enabled tick
    pub step: f64,
}

impl Default for OrbitConfig {
    fn default() -> Self {
        Self {
            distance: 1.5,
            height: 0.5,
            step: 0.005,
        }
    }
}

impl OrbitConfig {
    /// Reject non-finite circle geometry
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [("distance", self.distance), ("height", self.height), ("step", self.step)] {
            if !value.is_finite() {
                return Err(Error::invalid_config(format!("orbit {name} must be finite, got {value}")));
            }
        }
        Ok(())
    }

    /// Camera location for a given orbit angle
    pub fn position_at(&self, angle: f64) -> Point3d {
        Point3d::new(angle.cos() * self.distance, self.height, angle.sin() * self.distance)
    }
}

/// Accumulated orbit angle in radians.
///
/// The angle is never wrapped; positions are periodic through `cos`/`sin`
/// and `f64` keeps the accumulation precise for any practical runtime.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct OrbitState {
    pub angle: f64,
}

impl OrbitState {
    pub fn new(angle: f64) -> Self {
        Self { angle }
    }

    /// Advance one frame.
    ///
    /// When `enabled`, returns the camera position for the current angle and
    /// the state advanced by `config.step`. When disabled, the state is
    /// returned untouched and no position is produced.
    pub fn tick(self, enabled: bool, config: &OrbitConfig) -> (OrbitState, Option<Point3d>) {
        if !enabled {
            return (self, None);
        }

        let position = config.position_at(self.angle);
        (OrbitState { angle: self.angle + config.step }, Some(position))
    }

    /// Tick in place and hand the resulting position to `camera`.
    ///
    /// Returns whether the camera moved.
    pub fn advance(&mut self, enabled: bool, config: &OrbitConfig, camera: &mut Camera) -> bool {
        let (next, position) = self.tick(enabled, config);
        *self = next;
        match position {
            Some(location) => {
                camera.set_location(location);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn run(state: OrbitState, enabled: bool, ticks: usize) -> (OrbitState, Option<Point3d>) {
        let config = OrbitConfig::default();
        let mut state = state;
        let mut last = None;
        for _ in 0..ticks {
            let (next, position) = state.tick(enabled, &config);
            state = next;
            last = position;
        }
        (state, last)
    }

    #[test]
    fn test_disabled_ticks_do_nothing() {
        let (state, position) = run(OrbitState::default(), false, 250);
        assert_eq!(state.angle, 0.0);
        assert!(position.is_none());
    }

    #[test]
    fn test_enabled_ticks_accumulate_step() {
        for k in [1usize, 10, 600] {
            let (state, _) = run(OrbitState::default(), true, k);
            assert_relative_eq!(state.angle, 0.005 * k as f64, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_position_uses_angle_at_start_of_tick() {
        let k = 120;
        let (state, _) = run(OrbitState::default(), true, k);
        let (_, position) = state.tick(true, &OrbitConfig::default());
        let position = position.unwrap();
        let expected = 0.005 * k as f64;
        assert_relative_eq!(position.x, expected.cos() * 1.5, epsilon = 1e-9);
        assert_relative_eq!(position.y, 0.5);
        assert_relative_eq!(position.z, expected.sin() * 1.5, epsilon = 1e-9);
    }

    #[test]
    fn test_first_tick_starts_on_positive_x() {
        let (state, position) = OrbitState::default().tick(true, &OrbitConfig::default());
        assert_eq!(position, Some(Point3d::new(1.5, 0.5, 0.0)));
        assert_relative_eq!(state.angle, 0.005);
    }

    #[test]
    fn test_pause_preserves_angle() {
        let (state, _) = run(OrbitState::default(), true, 40);
        let (paused, _) = run(state, false, 100);
        assert_eq!(paused.angle, state.angle);
        let (resumed, _) = run(paused, true, 60);
        assert_relative_eq!(resumed.angle, 0.005 * 100.0, epsilon = 1e-9);
    }

    #[test]
    fn test_advance_moves_camera_only_when_enabled() {
        let config = OrbitConfig::default();
        let mut camera = Camera::default();
        let original = camera.position;
        let mut state = OrbitState::default();

        assert!(!state.advance(false, &config, &mut camera));
        assert_eq!(camera.position, original);

        assert!(state.advance(true, &config, &mut camera));
        assert_eq!(camera.position, Point3d::new(1.5, 0.5, 0.0));
        assert_relative_eq!(state.angle, 0.005);
    }

    #[test]
    fn test_validate_rejects_non_finite_geometry() {
        assert!(OrbitConfig::default().validate().is_ok());

        let config = OrbitConfig { step: f64::NAN, ..OrbitConfig::default() };
        assert!(matches!(config.validate(), Err(Error::InvalidConfiguration(_))));

        let config = OrbitConfig { distance: f64::INFINITY, ..OrbitConfig::default() };
        assert!(config.validate().is_err());

        let config = OrbitConfig { height: f64::NEG_INFINITY, ..OrbitConfig::default() };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_large_angles_stay_on_circle() {
        let config = OrbitConfig::default();
        let position = config.position_at(1.0e6);
        let radius = (position.x * position.x + position.z * position.z).sqrt();
        assert_relative_eq!(radius, config.distance, epsilon = 1e-9);
    }
}
