use super::*;

fn seed(s: &str) -> Seed {
    Seed::new(s).unwrap()
}

#[test]
fn parameters_follow_hash_draws() {
    let dims = Dimensions::new(8, 4).unwrap();
    let seq = AngleSequence::new(&seed("A"), dims);

    let start = seeded_hash("A", 31, START_MODULUS);
    let step = seeded_hash("A_step", 37, STEP_MODULUS);
    assert_eq!(seq.start_angle, start * PI * 2.0);
    assert_eq!(seq.angle_increment, step * PI / 8.0);
    assert_eq!(seq.len(), 32);
}

#[test]
fn increment_scales_with_longest_side() {
    let wide = AngleSequence::new(&seed("k"), Dimensions::new(10, 2).unwrap());
    let tall = AngleSequence::new(&seed("k"), Dimensions::new(2, 10).unwrap());
    assert_eq!(wide.angle_increment, tall.angle_increment);
    assert_eq!(wide.start_angle, tall.start_angle);
}

#[test]
fn keys_are_bounded_sines_and_deterministic() {
    let dims = Dimensions::new(7, 5).unwrap();
    let a = AngleSequence::new(&seed("stable"), dims).keys();
    let b = AngleSequence::new(&seed("stable"), dims).keys();
    assert_eq!(a.len(), 35);
    for (x, y) in a.iter().zip(&b) {
        assert_eq!(x.to_bits(), y.to_bits());
        assert!((-1.0..=1.0).contains(x));
    }
}

#[test]
fn first_key_is_sine_of_start_angle() {
    let seq = AngleSequence::new(&seed("zz"), Dimensions::new(1, 1).unwrap());
    assert_eq!(seq.keys(), vec![seq.start_angle.sin()]);
}
