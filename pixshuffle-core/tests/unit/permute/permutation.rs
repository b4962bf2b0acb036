use super::*;

fn assert_mutual_inverses(p: &Permutation) {
    let n = p.len();
    let mut sorted = p.forward().to_vec();
    sorted.sort_unstable();
    assert_eq!(sorted, (0..n).collect::<Vec<_>>());
    for i in 0..n {
        assert_eq!(p.inverse()[p.forward()[i]], i);
        assert_eq!(p.forward()[p.inverse()[i]], i);
    }
}

#[test]
fn ranks_keys_ascending() {
    let p = Permutation::from_keys(&[0.5, -0.25, 0.9, 0.0]);
    assert_eq!(p.forward(), &[2, 0, 3, 1]);
    assert_eq!(p.inverse(), &[1, 3, 0, 2]);
    assert_mutual_inverses(&p);
}

#[test]
fn equal_keys_keep_original_index_order() {
    let p = Permutation::from_keys(&[0.3, 0.1, 0.3, 0.1, 0.3]);
    assert_eq!(p.forward(), &[2, 0, 3, 1, 4]);
    assert_mutual_inverses(&p);

    let flat = Permutation::from_keys(&[0.7; 6]);
    assert!(flat.is_identity());
}

#[test]
fn single_cell_is_identity() {
    let seed = Seed::new("only").unwrap();
    let p = build_permutation(&seed, Dimensions::new(1, 1).unwrap());
    assert_eq!(p.forward(), &[0]);
    assert_eq!(p.inverse(), &[0]);
}

#[test]
fn seeded_permutation_is_bijective_and_deterministic() {
    let seed = Seed::new("my_secret_seed_123").unwrap();
    let dims = Dimensions::new(17, 9).unwrap();
    let a = build_permutation(&seed, dims);
    let b = build_permutation(&seed, dims);
    assert_eq!(a, b);
    assert_eq!(a.len(), 153);
    assert_mutual_inverses(&a);
}

#[test]
fn different_seeds_give_different_permutations() {
    let dims = Dimensions::new(4, 4).unwrap();
    let a = build_permutation(&Seed::new("alpha").unwrap(), dims);
    let b = build_permutation(&Seed::new("beta").unwrap(), dims);
    assert_ne!(a.forward(), b.forward());
}

#[test]
fn matches_reference_vectors() {
    let dims = Dimensions::new(4, 4).unwrap();
    let p = build_permutation(&Seed::new("alpha").unwrap(), dims);
    assert_eq!(
        p.forward(),
        &[6, 8, 10, 12, 14, 15, 13, 11, 9, 7, 5, 4, 3, 2, 1, 0]
    );

    let p = build_permutation(
        &Seed::new("my_secret_seed_123").unwrap(),
        Dimensions::new(3, 2).unwrap(),
    );
    assert_eq!(p.forward(), &[4, 5, 3, 2, 0, 1]);
    assert_eq!(p.inverse(), &[4, 5, 3, 2, 0, 1]);
}

#[test]
fn from_forward_validates_bijection() {
    let p = Permutation::from_forward(vec![2, 0, 1]).unwrap();
    assert_eq!(p.inverse(), &[1, 2, 0]);

    assert!(matches!(
        Permutation::from_forward(vec![0, 3, 1]),
        Err(PixshuffleError::InvalidInput(_))
    ));
    assert!(matches!(
        Permutation::from_forward(vec![1, 1, 0]),
        Err(PixshuffleError::InvalidInput(_))
    ));
}

#[test]
fn composing_with_inverse_is_identity() {
    let seed = Seed::new("compose").unwrap();
    let p = build_permutation(&seed, Dimensions::new(6, 5).unwrap());
    assert!(p.then(&p.inverted()).unwrap().is_identity());
    assert!(p.inverted().then(&p).unwrap().is_identity());
    assert_mutual_inverses(&p.then(&p).unwrap());
    assert!(p.then(&Permutation::identity(3)).is_err());
}
