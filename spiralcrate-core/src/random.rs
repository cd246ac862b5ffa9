//! Injectable uniform random sources
//!
//! Generators take a [`RandomSource`] instead of reaching for an ambient RNG,
//! so tests can pin every draw with [`ConstantSource`] or a seeded
//! [`RngSource`].

use crate::{Error, Result};
use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};

/// A source of uniform draws in `[0, 1)`
pub trait RandomSource {
    /// Draw the next uniform value in `[0, 1)`
    fn next_unit(&mut self) -> f64;
}

impl<S: RandomSource + ?Sized> RandomSource for &mut S {
    fn next_unit(&mut self) -> f64 {
        (**self).next_unit()
    }
}

/// Adapter exposing any `rand` generator as a [`RandomSource`]
#[derive(Debug, Clone)]
pub struct RngSource<R> {
    rng: R,
}

impl<R: RngCore> RngSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngSource<StdRng> {
    /// Reproducible source: the same seed yields the same draw sequence
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: RngCore> RandomSource for RngSource<R> {
    fn next_unit(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }
}

/// Returns the same value for every draw
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstantSource {
    value: f64,
}

impl ConstantSource {
    /// Create a constant source; `value` must lie in `[0, 1)`
    pub fn new(value: f64) -> Result<Self> {
        if !(0.0..1.0).contains(&value) {
            return Err(Error::invalid_config(format!(
                "constant random value must be in [0, 1), got {value}"
            )));
        }
        Ok(Self { value })
    }

    pub fn value(&self) -> f64 {
        self.value
    }
}

impl RandomSource for ConstantSource {
    fn next_unit(&mut self) -> f64 {
        self.value
    }
}
