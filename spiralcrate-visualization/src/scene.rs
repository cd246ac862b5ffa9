//! Frame-driven chart scene

use crate::camera::Camera;
use crate::controls::{AxisInterval, ChartCommand, ChartControls, ControlEvent, PointShape};
use crate::orbit::{OrbitConfig, OrbitState};
use serde::Deserialize;
use spiralcrate_algorithms::{generate_spiral, SpiralParams};
use spiralcrate_core::{Drawable, Point3d, PointCloud, PointVertex, RandomSource, Result};

/// Everything needed to build a [`Scene`]
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub spiral: SpiralParams,
    pub orbit: OrbitConfig,
}

/// A generated point cloud together with the chart state that displays it.
///
/// The scene owns all mutable chart state; the frame driver only calls
/// [`Scene::frame`] once per refresh and forwards UI switches to
/// [`Scene::toggle`].
#[derive(Debug, Clone)]
pub struct Scene {
    cloud: PointCloud<Point3d>,
    controls: ChartControls,
    camera: Camera,
    orbit: OrbitState,
    orbit_config: OrbitConfig,
    y_interval: AxisInterval,
    frames: u64,
}

impl Scene {
    /// Generate the point cloud and set up the chart around it
    pub fn new<R: RandomSource + ?Sized>(config: &SceneConfig, rng: &mut R) -> Result<Self> {
        config.orbit.validate()?;
        let cloud = generate_spiral(&config.spiral, rng)?;
        let (min, max) = cloud.bounding_box();
        tracing::info!(
            points = cloud.len(),
            min = ?min,
            max = ?max,
            "scene created"
        );

        Ok(Self {
            cloud,
            controls: ChartControls::new(),
            camera: Camera::default(),
            orbit: OrbitState::default(),
            orbit_config: config.orbit,
            y_interval: AxisInterval::new(min.y, max.y),
            frames: 0,
        })
    }

    /// Commands for a freshly attached chart
    pub fn initial_commands(&self) -> Vec<ChartCommand> {
        self.controls.initial_commands()
    }

    /// Forward a UI switch, tracking the Y interval it sets
    pub fn toggle(&mut self, event: ControlEvent) -> Vec<ChartCommand> {
        let commands = self.controls.apply(event, self.y_interval);
        for command in &commands {
            if let ChartCommand::SetYInterval { interval, .. } = command {
                self.y_interval = *interval;
            }
        }
        commands
    }

    /// Run one display refresh; returns the new camera location if it moved
    pub fn frame(&mut self) -> Option<Point3d> {
        self.frames += 1;
        if self.orbit.advance(self.controls.rotate_camera, &self.orbit_config, &mut self.camera) {
            Some(self.camera.position)
        } else {
            None
        }
    }

    pub fn cloud(&self) -> &PointCloud<Point3d> {
        &self.cloud
    }

    /// Vertices for the point series; both shapes share the same data
    pub fn vertices(&self) -> Vec<PointVertex> {
        self.cloud.to_vertices()
    }

    pub fn visible_series(&self) -> PointShape {
        self.controls.point_shape
    }

    pub fn controls(&self) -> &ChartControls {
        &self.controls
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn orbit(&self) -> OrbitState {
        self.orbit
    }

    pub fn y_interval(&self) -> AxisInterval {
        self.y_interval
    }

    /// Number of frames run so far
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use spiralcrate_core::RngSource;

    fn small_scene() -> Scene {
        let config = SceneConfig {
            spiral: SpiralParams::with_point_count(256),
            ..SceneConfig::default()
        };
        Scene::new(&config, &mut RngSource::seeded(3)).unwrap()
    }

    #[test]
    fn test_new_scene_fits_y_interval_to_cloud() {
        let scene = small_scene();
        let (min, max) = scene.cloud().bounding_box();
        assert_eq!(scene.y_interval(), AxisInterval::new(min.y, max.y));
        assert_eq!(scene.vertices().len(), 256);
        assert_eq!(scene.visible_series(), PointShape::Cube);
    }

    #[test]
    fn test_frames_without_rotation_keep_camera() {
        let mut scene = small_scene();
        let before = scene.camera().clone();
        for _ in 0..10 {
            assert!(scene.frame().is_none());
        }
        assert_eq!(scene.camera(), &before);
        assert_eq!(scene.orbit().angle, 0.0);
        assert_eq!(scene.frames(), 10);
    }

    #[test]
    fn test_scale_toggle_updates_tracked_interval() {
        let mut scene = small_scene();
        let auto_fit = scene.y_interval();
        scene.toggle(ControlEvent::ChangeScale(true));
        assert_eq!(scene.y_interval(), crate::controls::ZOOMED_Y_INTERVAL);
        scene.toggle(ControlEvent::ChangeScale(false));
        assert_eq!(scene.y_interval(), auto_fit);
    }

    #[test]
    fn test_non_finite_orbit_fails_scene_creation() {
        let config = SceneConfig {
            spiral: SpiralParams::with_point_count(16),
            orbit: OrbitConfig { step: f64::NAN, distance: f64::INFINITY, ..OrbitConfig::default() },
        };
        assert!(matches!(
            Scene::new(&config, &mut RngSource::seeded(0)),
            Err(spiralcrate_core::Error::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_invalid_params_fail_scene_creation() {
        let config = SceneConfig {
            spiral: SpiralParams { scale: 0.0, ..SpiralParams::default() },
            ..SceneConfig::default()
        };
        assert!(Scene::new(&config, &mut RngSource::seeded(0)).is_err());
    }
}
