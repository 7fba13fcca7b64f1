//! RNG module - uniform random shape selection
//!
//! Every spawn picks one of the eight catalog shapes uniformly at random, with
//! replacement (the same shape can come up any number of times in a row).
//!
//! Uses a simple seeded LCG so a game can be replayed from its seed.

use crate::types::{ShapeKind, SHAPE_COUNT};

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    ///
    /// Scales by the high bits: the low bits of a power-of-two LCG have short periods.
    pub fn next_range(&mut self, max: u32) -> u32 {
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }

    /// Current internal state (feeding it back into `new` resumes the sequence)
    pub fn state(&self) -> u32 {
        self.state
    }
}

/// Uniform shape picker over the catalog
#[derive(Debug, Clone)]
pub struct ShapeRandomizer {
    rng: SimpleRng,
}

impl ShapeRandomizer {
    /// Create a new randomizer with the given seed
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
        }
    }

    /// Draw the next shape
    pub fn draw(&mut self) -> ShapeKind {
        let idx = self.rng.next_range(SHAPE_COUNT as u32) as usize;
        ShapeKind::ALL[idx]
    }

    /// Peek at the next shape without consuming it
    pub fn peek(&self) -> ShapeKind {
        self.clone().draw()
    }

    /// Current RNG state (feeding it back into `new` resumes the sequence)
    pub fn state(&self) -> u32 {
        self.rng.state()
    }
}

impl Default for ShapeRandomizer {
    fn default() -> Self {
        Self::new(1)
    }
}
