//! Core data structures and traits for spiralcrate
//! 
//! This crate provides the fundamental types shared by the generator and the
//! chart: points, point clouds, the injectable random source and the error type.

pub mod point;
pub mod point_cloud;
pub mod random;
pub mod traits;
pub mod error;

pub use point::*;
pub use point_cloud::*;
pub use random::*;
pub use traits::*;
pub use error::*;
