use std::num::NonZeroU32;

/// Multiplier used for the start-angle draw.
pub const START_MULTIPLIER: u32 = 31;
/// Modulus used for the start-angle draw (`2^32 - 1`).
pub const START_MODULUS: NonZeroU32 = NonZeroU32::MAX;
/// Multiplier used for the angle-increment draw.
pub const STEP_MULTIPLIER: u32 = 37;
/// Modulus used for the angle-increment draw (`2^32 - 2`).
pub const STEP_MODULUS: NonZeroU32 = match NonZeroU32::new(u32::MAX - 1) {
    Some(m) => m,
    None => unreachable!(),
};

/// Polynomial string hash mapped into `[0, 1)`.
///
/// Accumulates `h = (h * multiplier + codepoint(c)) mod modulus` over the Unicode scalar
/// values of `s`, starting from `h = 0`, and returns `h / modulus`. The empty string
/// hashes to `0.0`.
pub fn seeded_hash(s: &str, multiplier: u32, modulus: NonZeroU32) -> f64 {
    let m = u128::from(modulus.get());
    let mul = u128::from(multiplier);
    let mut h = 0u128;
    for c in s.chars() {
        h = (h * mul + u128::from(u32::from(c))) % m;
    }
    // h < modulus <= u32::MAX, so both conversions are exact.
    h as f64 / f64::from(modulus.get())
}

#[cfg(test)]
#[path = "../../tests/unit/permute/hash.rs"]
mod tests;
