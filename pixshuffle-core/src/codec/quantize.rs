/// Quantize an offset component in `(-1, 1)` to a channel byte.
///
/// `clamp(trunc(((v + 1) / 2) * 255), 0, 255)`. Truncation toward zero is the
/// contract: `0.0` maps to `127`, not `128`.
pub fn quantize_component(v: f64) -> u8 {
    let scaled = ((v + 1.0) / 2.0) * 255.0;
    let truncated = scaled.trunc();
    if truncated.is_nan() {
        return 0;
    }
    truncated.clamp(0.0, 255.0) as u8
}

/// Map a channel byte back to the center of its quantization bucket.
///
/// `((c + 0.5) / 255) * 2 - 1`, capped at [`MAX_DECODED_COMPONENT`] so every byte decodes
/// strictly inside `(-1, 1)`. Byte `255` only comes from clamped inputs `>= 1`, so the cap
/// never widens the round-trip error for `v` in `(-1, 1)`: it stays within `1/255`.
pub fn dequantize_component(c: u8) -> f64 {
    (((f64::from(c) + 0.5) / 255.0) * 2.0 - 1.0).min(MAX_DECODED_COMPONENT)
}

/// Largest value [`dequantize_component`] returns; `254/255`, the center of bucket `254`.
pub const MAX_DECODED_COMPONENT: f64 = 254.0 / 255.0;

/// Largest per-axis error of a quantize/dequantize round trip over `(-1, 1)`.
pub const MAX_ROUND_TRIP_ERROR: f64 = 1.0 / 255.0;

#[cfg(test)]
#[path = "../../tests/unit/codec/quantize.rs"]
mod tests;
