//! 8-bit raster encoding of offset maps.
//!
//! Each vector becomes one RGB8 pixel: R and G carry the quantized `dx` and `dy`, B is 0.

/// Per-component quantization rules.
pub mod quantize;
/// Encoded raster type and map encode/decode.
pub mod raster;
