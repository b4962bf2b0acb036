use crate::{
    foundation::core::Dimensions,
    foundation::error::{PixshuffleError, PixshuffleResult},
    offset::map::{OffsetMap, OffsetVector},
    permute::permutation::Permutation,
};

/// Unshuffle map, keyed by original coordinate `(ox, oy)`.
///
/// Each vector points from `(ox, oy)` to the shuffled cell `forward[oy * W + ox]`,
/// i.e. where the content belonging at `(ox, oy)` now lives in the scrambled grid.
pub fn unshuffle_map(perm: &Permutation, dims: Dimensions) -> PixshuffleResult<OffsetMap> {
    directed_map(perm.forward(), dims)
}

/// Shuffle map, keyed by destination coordinate `(tx, ty)`.
///
/// Each vector points from `(tx, ty)` to the original cell `inverse[ty * W + tx]`,
/// i.e. where to sample the original grid to fill this destination.
pub fn shuffle_map(perm: &Permutation, dims: Dimensions) -> PixshuffleResult<OffsetMap> {
    directed_map(perm.inverse(), dims)
}

fn directed_map(mapping: &[usize], dims: Dimensions) -> PixshuffleResult<OffsetMap> {
    if mapping.len() != dims.len() {
        return Err(PixshuffleError::invalid_input(format!(
            "permutation of length {} does not cover a {}x{} grid",
            mapping.len(),
            dims.width(),
            dims.height()
        )));
    }
    let cells = mapping
        .iter()
        .enumerate()
        .map(|(from, &to)| OffsetVector::between(dims, dims.coord_of(from), dims.coord_of(to)))
        .collect();
    OffsetMap::new(dims, cells)
}

#[cfg(test)]
#[path = "../../tests/unit/offset/compute.rs"]
mod tests;
