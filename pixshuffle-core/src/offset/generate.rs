use crate::{
    foundation::core::Dimensions,
    foundation::error::PixshuffleResult,
    offset::compute::{shuffle_map, unshuffle_map},
    offset::map::{OffsetKind, OffsetMap},
    permute::permutation::build_permutation,
    seed::Seed,
};

/// Output of [`generate_offset_maps`]: both directions plus the seed that produced them.
#[derive(Clone, Debug, PartialEq)]
pub struct GeneratedMaps {
    /// Seed echo; hand this token to consumers that need to regenerate the maps.
    pub seed: Seed,
    /// Grid size of both maps.
    pub dims: Dimensions,
    /// Destination-keyed map that scrambles a grid.
    pub shuffle: OffsetMap,
    /// Original-keyed map that restores a scrambled grid.
    pub unshuffle: OffsetMap,
}

impl GeneratedMaps {
    /// The map for `kind`.
    pub fn map(&self, kind: OffsetKind) -> &OffsetMap {
        match kind {
            OffsetKind::Shuffle => &self.shuffle,
            OffsetKind::Unshuffle => &self.unshuffle,
        }
    }
}

/// Generate the shuffle and unshuffle offset maps for a `width x height` grid.
///
/// Pure function of `(seed, width, height)`. Fails with
/// [`PixshuffleError::InvalidInput`](crate::PixshuffleError::InvalidInput) when either
/// side is zero or `seed` is empty; nothing is computed in that case.
#[tracing::instrument(skip(seed))]
pub fn generate_offset_maps(
    width: u32,
    height: u32,
    seed: &str,
) -> PixshuffleResult<GeneratedMaps> {
    let dims = Dimensions::new(width, height)?;
    let seed = Seed::new(seed)?;
    generate_for(&seed, dims)
}

/// [`generate_offset_maps`] over already-validated inputs.
pub fn generate_for(seed: &Seed, dims: Dimensions) -> PixshuffleResult<GeneratedMaps> {
    let perm = build_permutation(seed, dims);
    let shuffle = shuffle_map(&perm, dims)?;
    let unshuffle = unshuffle_map(&perm, dims)?;
    tracing::debug!(cells = dims.len(), "offset maps generated");
    Ok(GeneratedMaps {
        seed: seed.clone(),
        dims,
        shuffle,
        unshuffle,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/offset/generate.rs"]
mod tests;
