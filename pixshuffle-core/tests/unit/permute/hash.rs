use super::*;

fn modulus(m: u32) -> NonZeroU32 {
    NonZeroU32::new(m).unwrap()
}

#[test]
fn empty_string_hashes_to_zero() {
    assert_eq!(seeded_hash("", 31, START_MODULUS), 0.0);
    assert_eq!(seeded_hash("", 37, STEP_MODULUS), 0.0);
}

#[test]
fn accumulates_polynomially() {
    // "AB" = (65 * 31 + 66) mod 1000 = 2081 mod 1000 = 81
    assert_eq!(seeded_hash("AB", 31, modulus(1000)), 0.081);
    // single char: 65 / 2^32-1
    assert_eq!(
        seeded_hash("A", START_MULTIPLIER, START_MODULUS),
        65.0 / 4_294_967_295.0
    );
}

#[test]
fn uses_unicode_scalar_values() {
    // U+00E9 = 233, a two-byte UTF-8 sequence that must count as one character.
    assert_eq!(seeded_hash("\u{e9}", 1, modulus(1000)), 0.233);
}

#[test]
fn output_is_in_unit_interval_and_deterministic() {
    for s in ["seed", "my_secret_seed_123", "ZZZZZZZZZZZZZZZZZZZZ", "\u{1f600}x"] {
        let a = seeded_hash(s, STEP_MULTIPLIER, STEP_MODULUS);
        let b = seeded_hash(s, STEP_MULTIPLIER, STEP_MODULUS);
        assert_eq!(a.to_bits(), b.to_bits());
        assert!((0.0..1.0).contains(&a));
    }
}

#[test]
fn large_multiplier_does_not_overflow() {
    let v = seeded_hash("\u{10ffff}\u{10ffff}\u{10ffff}", u32::MAX, START_MODULUS);
    assert!((0.0..1.0).contains(&v));
}

#[test]
fn step_modulus_is_two_below_word() {
    assert_eq!(STEP_MODULUS.get(), 4_294_967_294);
    assert_eq!(START_MODULUS.get(), 4_294_967_295);
}
