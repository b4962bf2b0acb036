//! Seeded permutation of pixel linear indices.
//!
//! `seed -> hash draws -> sinusoid keys -> tie-broken rank sort -> (forward, inverse)`.

/// Angle parameters and per-pixel sort keys.
pub mod angle;
/// Polynomial string hash into `[0, 1)`.
pub mod hash;
/// Permutation type and the seeded builder.
pub mod permutation;
