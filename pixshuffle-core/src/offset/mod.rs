//! Offset maps: per-pixel normalized displacement fields derived from a permutation.

/// Shuffle / unshuffle map computation from a permutation.
pub mod compute;
/// `generate_offset_maps`, the seeded end-to-end entry point.
pub mod generate;
/// Offset vector and grid types.
pub mod map;
