//! Spiral point cloud chart demo
//! 
//! Builds the spiral scene headlessly and drives it for a number of frames,
//! the way a display refresh loop would:
//! - Generates the point cloud
//! - Applies the chart toggles given on the command line
//! - Orbits the camera while "rotate camera" is on

use anyhow::Context;
use clap::Parser;
use spiralcrate_core::{Drawable, RandomSource, RngSource};
use spiralcrate_visualization::{ControlEvent, Scene, SceneConfig};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "spiral_chart", about = "Drive a spiral point cloud chart headlessly")]
struct Args {
    /// TOML file with `[spiral]` and `[orbit]` tables
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of points, overriding the config file
    #[arg(long)]
    points: Option<usize>,

    /// Number of display refreshes to simulate
    #[arg(long, default_value_t = 600)]
    frames: u64,

    /// Seed for reproducible point clouds
    #[arg(long)]
    seed: Option<u64>,

    /// Turn on "Rotate camera"
    #[arg(long)]
    rotate: bool,

    /// Turn on "Axis ticks enabled"
    #[arg(long)]
    ticks: bool,

    /// Turn on "Change scale"
    #[arg(long)]
    change_scale: bool,

    /// Show spheres instead of cubes
    #[arg(long)]
    sphere: bool,
}

fn load_config(args: &Args) -> anyhow::Result<SceneConfig> {
    let mut config = match &args.config {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            toml::from_str(&text).with_context(|| format!("parsing {}", path.display()))?
        }
        None => SceneConfig::default(),
    };
    if let Some(points) = args.points {
        config.spiral.point_count = points;
    }
    Ok(config)
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let config = load_config(&args)?;

    let mut rng: Box<dyn RandomSource> = match args.seed {
        Some(seed) => Box::new(RngSource::seeded(seed)),
        None => Box::new(RngSource::from_entropy()),
    };
    let mut scene = Scene::new(&config, rng.as_mut())?;

    let mut commands = scene.initial_commands();
    commands.extend(scene.toggle(ControlEvent::ChangePointShape(!args.sphere)));
    commands.extend(scene.toggle(ControlEvent::AxisTicks(args.ticks)));
    commands.extend(scene.toggle(ControlEvent::ChangeScale(args.change_scale)));
    scene.toggle(ControlEvent::RotateCamera(args.rotate));
    for command in &commands {
        tracing::debug!(?command, "chart command");
    }

    let mut moves = 0u64;
    for _ in 0..args.frames {
        if scene.frame().is_some() {
            moves += 1;
        }
    }

    let (min, max) = scene.cloud().bounding_box();
    let vertex_bytes = std::mem::size_of_val(scene.vertices().as_slice());
    tracing::info!(
        points = scene.cloud().len(),
        vertex_bytes,
        series = ?scene.visible_series(),
        "point series ready"
    );
    tracing::info!(min = ?min, max = ?max, y_interval = ?scene.y_interval(), "bounds");
    tracing::info!(
        frames = scene.frames(),
        camera_moves = moves,
        angle = scene.orbit().angle,
        camera = ?scene.camera().position,
        "animation finished"
    );

    Ok(())
}
