//! Seed sources for the demo.
//!
//! The kernel never draws random numbers; the shell picks starting numbers
//! through a [`SeedSource`] and hands them to the kernel. Use a seeded
//! [`RandSource`] for reproducible demos.

use std::ops::RangeInclusive;

use kaprekar_kernel::Width;
use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};

/// Supplies starting numbers.
pub trait SeedSource {
    /// Returns a value in `range` (inclusive on both ends).
    fn next_in_range(&mut self, range: RangeInclusive<u32>) -> u32;

    /// Returns a starting number for `width`.
    #[inline]
    fn seed_for(&mut self, width: Width) -> u32 {
        self.next_in_range(width.seed_range())
    }
}

/// Uniform seeds from any `rand` generator.
pub struct RandSource<R> {
    inner: R,
}

impl<R: RngCore> RandSource<R> {
    pub fn new(inner: R) -> Self {
        Self { inner }
    }
}

impl RandSource<StdRng> {
    /// Creates a source seeded from OS entropy.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    /// Creates a reproducible source: the same seed gives the same numbers.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: RngCore> SeedSource for RandSource<R> {
    fn next_in_range(&mut self, range: RangeInclusive<u32>) -> u32 {
        self.inner.gen_range(range)
    }
}

/// Replays a fixed list of values, ignoring the requested range.
#[cfg(test)]
pub struct FixedSource {
    values: std::collections::VecDeque<u32>,
}

#[cfg(test)]
impl FixedSource {
    pub fn new(values: impl IntoIterator<Item = u32>) -> Self {
        Self {
            values: values.into_iter().collect(),
        }
    }
}

#[cfg(test)]
impl SeedSource for FixedSource {
    fn next_in_range(&mut self, _range: RangeInclusive<u32>) -> u32 {
        self.values.pop_front().expect("fixed source exhausted")
    }
}
