//! RNG module - deterministic pair dealing
//!
//! [`ColorQueue`] deals pairs from the first `n` colors using an explicit,
//! seeded [`SimpleRng`]; nothing is global, so the same seed always yields the
//! same sequence of pairs.

use crate::pair::PuyoPair;
use crate::types::{Color, DEFAULT_COLOR_COUNT};

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
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        // High bits of an LCG are better distributed than the low ones
        (self.next_u32() >> 16) % max.max(1)
    }

    pub fn state(&self) -> u32 {
        self.state
    }
}

/// Pair generator with a two-pair preview
#[derive(Debug, Clone)]
pub struct ColorQueue {
    rng: SimpleRng,
    color_count: u8,
    preview: [PuyoPair; 2],
}

impl ColorQueue {
    /// Queue dealing from the first `color_count` colors (clamped to 1..=5)
    pub fn new(seed: u32, color_count: u8) -> Self {
        let color_count = color_count.clamp(1, Color::ALL.len() as u8);
        let mut rng = SimpleRng::new(seed);
        let first = Self::deal(&mut rng, color_count);
        let second = Self::deal(&mut rng, color_count);
        Self {
            rng,
            color_count,
            preview: [first, second],
        }
    }

    fn deal(rng: &mut SimpleRng, color_count: u8) -> PuyoPair {
        let axis = Color::ALL[rng.next_range(color_count as u32) as usize];
        let child = Color::ALL[rng.next_range(color_count as u32) as usize];
        PuyoPair::new(axis, child)
    }

    pub fn color_count(&self) -> u8 {
        self.color_count
    }

    /// The next two pairs, in draw order
    pub fn peek(&self) -> &[PuyoPair; 2] {
        &self.preview
    }

    /// Take the next pair and deal a new one into the preview
    pub fn draw(&mut self) -> PuyoPair {
        let next = Self::deal(&mut self.rng, self.color_count);
        let drawn = self.preview[0];
        self.preview = [self.preview[1], next];
        drawn
    }
}

impl Default for ColorQueue {
    fn default() -> Self {
        Self::new(1, DEFAULT_COLOR_COUNT)
    }
}
