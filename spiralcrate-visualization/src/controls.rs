//! Chart toggle state
//!
//! [`ChartControls`] is the state behind the chart's four check boxes. It does
//! not draw anything: each switch is reduced to a list of [`ChartCommand`]s
//! for whatever chart implementation is attached.

use std::time::Duration;

/// Y interval used while "Change scale" is on
pub const ZOOMED_Y_INTERVAL: AxisInterval = AxisInterval { min: -5.0, max: 15.0 };

/// Length of the Y interval animation
pub const SCALE_ANIMATION: Duration = Duration::from_millis(2000);

pub const AXIS_TITLES: [(Axis, &str); 3] = [
    (Axis::X, "Axis X"),
    (Axis::Y, "Axis Y"),
    (Axis::Z, "Axis Z"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];
}

/// Shape used to draw each point; one series exists per shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PointShape {
    #[default]
    Cube,
    Sphere,
}

impl PointShape {
    pub fn other(self) -> Self {
        match self {
            PointShape::Cube => PointShape::Sphere,
            PointShape::Sphere => PointShape::Cube,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickStrategy {
    Numeric,
    Empty,
}

impl TickStrategy {
    fn enabled(enabled: bool) -> Self {
        if enabled {
            TickStrategy::Numeric
        } else {
            TickStrategy::Empty
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisInterval {
    pub min: f64,
    pub max: f64,
}

impl AxisInterval {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }
}

/// A check box switch coming from the UI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlEvent {
    ChangeScale(bool),
    /// `true` shows cubes, `false` shows spheres
    ChangePointShape(bool),
    RotateCamera(bool),
    AxisTicks(bool),
}

/// Instruction for the attached chart
#[derive(Debug, Clone, PartialEq)]
pub enum ChartCommand {
    SetAxisTitle { axis: Axis, title: &'static str },
    SetTickStrategy { axis: Axis, strategy: TickStrategy },
    /// Animate the Y axis to `interval`; `stop_axis_after` stops auto-fitting
    SetYInterval { interval: AxisInterval, animation: Duration, stop_axis_after: bool },
    RestoreSeries(PointShape),
    DisposeSeries(PointShape),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartControls {
    pub change_scale: bool,
    pub point_shape: PointShape,
    pub rotate_camera: bool,
    pub axis_ticks: bool,
    /// Interval to return to when "Change scale" is switched off
    saved_y_interval: Option<AxisInterval>,
}

impl Default for ChartControls {
    fn default() -> Self {
        Self {
            change_scale: false,
            point_shape: PointShape::Cube,
            rotate_camera: false,
            axis_ticks: false,
            saved_y_interval: None,
        }
    }
}

impl ChartControls {
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands that bring a fresh chart in line with the current toggles
    pub fn initial_commands(&self) -> Vec<ChartCommand> {
        let mut commands: Vec<ChartCommand> = AXIS_TITLES
            .iter()
            .map(|&(axis, title)| ChartCommand::SetAxisTitle { axis, title })
            .collect();
        commands.extend(tick_commands(self.axis_ticks));
        commands.push(ChartCommand::DisposeSeries(self.point_shape.other()));
        commands
    }

    /// Apply a switch and return the chart commands it causes.
    ///
    /// `current_y` is the Y interval the chart shows right now; it is saved
    /// when zooming in and restored when zooming back out. Switching a toggle
    /// to the state it already has produces no commands.
    pub fn apply(&mut self, event: ControlEvent, current_y: AxisInterval) -> Vec<ChartCommand> {
        match event {
            ControlEvent::ChangeScale(on) => {
                if on == self.change_scale {
                    return Vec::new();
                }
                self.change_scale = on;
                let target = if on {
                    self.saved_y_interval = Some(current_y);
                    Some(ZOOMED_Y_INTERVAL)
                } else {
                    self.saved_y_interval.take()
                };
                tracing::debug!(on, ?target, "change scale");
                target
                    .map(|interval| ChartCommand::SetYInterval {
                        interval,
                        animation: SCALE_ANIMATION,
                        stop_axis_after: on,
                    })
                    .into_iter()
                    .collect()
            }
            ControlEvent::ChangePointShape(cubes) => {
                let shape = if cubes { PointShape::Cube } else { PointShape::Sphere };
                if shape == self.point_shape {
                    return Vec::new();
                }
                self.point_shape = shape;
                tracing::debug!(?shape, "change point shape");
                vec![
                    ChartCommand::RestoreSeries(shape),
                    ChartCommand::DisposeSeries(shape.other()),
                ]
            }
            ControlEvent::RotateCamera(on) => {
                self.rotate_camera = on;
                tracing::debug!(on, "rotate camera");
                Vec::new()
            }
            ControlEvent::AxisTicks(on) => {
                if on == self.axis_ticks {
                    return Vec::new();
                }
                self.axis_ticks = on;
                tracing::debug!(on, "axis ticks");
                tick_commands(on).collect()
            }
        }
    }
}

fn tick_commands(enabled: bool) -> impl Iterator<Item = ChartCommand> {
    let strategy = TickStrategy::enabled(enabled);
    Axis::ALL
        .into_iter()
        .map(move |axis| ChartCommand::SetTickStrategy { axis, strategy })
}
