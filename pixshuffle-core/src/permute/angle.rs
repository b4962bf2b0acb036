use std::f64::consts::PI;

use crate::{
    foundation::core::Dimensions,
    permute::hash::{START_MODULUS, START_MULTIPLIER, STEP_MODULUS, STEP_MULTIPLIER, seeded_hash},
    seed::Seed,
};

/// Suffix appended to the seed for the angle-increment draw.
const STEP_SUFFIX: &str = "_step";

/// Parameters of the sinusoid that produces per-pixel sort keys.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AngleSequence {
    /// `hash(seed) * 2π`.
    pub start_angle: f64,
    /// `hash(seed + "_step") * π / max(W, H)`.
    pub angle_increment: f64,
    len: usize,
}

impl AngleSequence {
    /// Derive the sequence for `seed` over a grid of `dims`.
    pub fn new(seed: &Seed, dims: Dimensions) -> Self {
        let start = seeded_hash(seed.as_str(), START_MULTIPLIER, START_MODULUS);
        let step_input = format!("{}{STEP_SUFFIX}", seed.as_str());
        let step = seeded_hash(&step_input, STEP_MULTIPLIER, STEP_MODULUS);

        // Evaluation order is part of the bit-level contract: (start * π) * 2 and
        // (step * π) / max(W, H).
        Self {
            start_angle: start * PI * 2.0,
            angle_increment: step * PI / f64::from(dims.max_side()),
            len: dims.len(),
        }
    }

    /// Number of keys, `N = W * H`.
    pub fn len(&self) -> usize {
        self.len
    }

    /// `true` when the sequence has no keys.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// `sin(start_angle + i * angle_increment)`.
    pub fn key(&self, i: usize) -> f64 {
        (self.start_angle + i as f64 * self.angle_increment).sin()
    }

    /// Materialize `key(0..N)`.
    pub fn keys(&self) -> Vec<f64> {
        (0..self.len).map(|i| self.key(i)).collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/permute/angle.rs"]
mod tests;
