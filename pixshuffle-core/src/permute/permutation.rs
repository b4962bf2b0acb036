use std::cmp::Ordering;

use crate::{
    foundation::core::Dimensions,
    foundation::error::{PixshuffleError, PixshuffleResult},
    permute::angle::AngleSequence,
    seed::Seed,
};

/// A bijection on `[0, N)` together with its exact inverse.
///
/// `forward[i]` is the shuffled position of original index `i`;
/// `inverse[forward[i]] == i` for every `i`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Permutation {
    forward: Vec<usize>,
    inverse: Vec<usize>,
}

impl Permutation {
    /// The identity on `[0, n)`.
    pub fn identity(n: usize) -> Self {
        let forward: Vec<usize> = (0..n).collect();
        Self {
            inverse: forward.clone(),
            forward,
        }
    }

    /// Rank `keys` ascending and use the ranks as the forward mapping.
    ///
    /// Ties are broken by ascending original index, so the order is total even when
    /// two keys compare equal.
    pub fn from_keys(keys: &[f64]) -> Self {
        let mut order: Vec<usize> = (0..keys.len()).collect();
        order.sort_unstable_by(|&a, &b| compare_keys(keys[a], keys[b]).then(a.cmp(&b)));

        let mut forward = vec![0usize; keys.len()];
        for (rank, &original) in order.iter().enumerate() {
            forward[original] = rank;
        }
        // `order` already lists original indices by rank, i.e. it is the inverse.
        Self {
            forward,
            inverse: order,
        }
    }

    /// Validate that `forward` is a bijection on `[0, len)` and build its inverse.
    pub fn from_forward(forward: Vec<usize>) -> PixshuffleResult<Self> {
        let n = forward.len();
        let mut inverse = vec![usize::MAX; n];
        for (i, &f) in forward.iter().enumerate() {
            if f >= n {
                return Err(PixshuffleError::invalid_input(format!(
                    "permutation entry {f} at index {i} is out of range 0..{n}"
                )));
            }
            if inverse[f] != usize::MAX {
                return Err(PixshuffleError::invalid_input(format!(
                    "permutation maps both {} and {i} to {f}",
                    inverse[f]
                )));
            }
            inverse[f] = i;
        }
        Ok(Self { forward, inverse })
    }

    /// Number of positions `N`.
    pub fn len(&self) -> usize {
        self.forward.len()
    }

    /// `true` for the permutation of the empty set.
    pub fn is_empty(&self) -> bool {
        self.forward.is_empty()
    }

    /// Original index -> shuffled position.
    pub fn forward(&self) -> &[usize] {
        &self.forward
    }

    /// Shuffled position -> original index.
    pub fn inverse(&self) -> &[usize] {
        &self.inverse
    }

    /// The permutation mapping shuffled positions back to original indices.
    pub fn inverted(&self) -> Self {
        Self {
            forward: self.inverse.clone(),
            inverse: self.forward.clone(),
        }
    }

    /// `i -> other[self[i]]`: apply `self` first, then `other`.
    pub fn then(&self, other: &Self) -> PixshuffleResult<Self> {
        if self.len() != other.len() {
            return Err(PixshuffleError::invalid_input(format!(
                "cannot compose permutations of length {} and {}",
                self.len(),
                other.len()
            )));
        }
        let forward = self.forward.iter().map(|&s| other.forward[s]).collect();
        let inverse = other.inverse.iter().map(|&s| self.inverse[s]).collect();
        Ok(Self { forward, inverse })
    }

    /// `true` when every index maps to itself.
    pub fn is_identity(&self) -> bool {
        self.forward.iter().enumerate().all(|(i, &f)| i == f)
    }
}

/// Sine keys are never NaN; `total_cmp` keeps the comparator total regardless.
fn compare_keys(a: f64, b: f64) -> Ordering {
    a.total_cmp(&b)
}

/// Derive the seeded permutation for a grid: angle keys, then a tie-broken rank sort.
#[tracing::instrument(skip(seed), fields(width = dims.width(), height = dims.height()))]
pub fn build_permutation(seed: &Seed, dims: Dimensions) -> Permutation {
    let keys = AngleSequence::new(seed, dims).keys();
    let perm = Permutation::from_keys(&keys);
    tracing::debug!(n = perm.len(), "permutation built");
    perm
}

#[cfg(test)]
#[path = "../../tests/unit/permute/permutation.rs"]
mod tests;
