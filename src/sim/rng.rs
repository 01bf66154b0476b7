//! Seeded randomness for wander headings

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use std::f32::consts::TAU;

/// Source of wander headings, uniform in [0, 2π)
pub trait HeadingSource {
    fn next_heading(&mut self) -> f32;
}

/// Deterministic PCG32-backed heading source
#[derive(Debug, Clone)]
pub struct GameRng {
    seed: u64,
    rng: Pcg32,
}

impl GameRng {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

impl HeadingSource for GameRng {
    fn next_heading(&mut self) -> f32 {
        self.rng.random_range(0.0..TAU)
    }
}

/// Replays a fixed list of headings, cycling when exhausted
#[derive(Debug, Clone)]
pub struct HeadingSequence {
    headings: Vec<f32>,
    next: usize,
}

impl HeadingSequence {
    pub fn new(headings: Vec<f32>) -> Self {
        Self { headings, next: 0 }
    }

    /// Always returns the same heading
    pub fn constant(heading: f32) -> Self {
        Self::new(vec![heading])
    }

    /// Number of headings handed out so far
    pub fn drawn(&self) -> usize {
        self.next
    }
}

impl HeadingSource for HeadingSequence {
    fn next_heading(&mut self) -> f32 {
        if self.headings.is_empty() {
            return 0.0;
        }
        let heading = self.headings[self.next % self.headings.len()];
        self.next += 1;
        heading
    }
}
