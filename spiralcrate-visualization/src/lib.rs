//! Visualization state for spiral point cloud charts
//! 
//! This crate holds everything between the generated point cloud and an
//! external chart renderer:
//! - Camera and orbit animation
//! - Chart toggle controls
//! - A frame-driven scene tying them together

pub mod camera;
pub mod orbit;
pub mod controls;
pub mod scene;

pub use camera::*;
pub use orbit::*;
pub use controls::*;
pub use scene::*;
