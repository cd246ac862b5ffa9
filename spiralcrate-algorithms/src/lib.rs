//! # SpiralCrate Algorithms
//!
//! Procedural point cloud generation for spiralcrate.
//!
//! The generator is a pure function of its parameters and an injected
//! [`spiralcrate_core::RandomSource`].

pub mod generation;

// Re-export commonly used items
pub use generation::*;
