//! pixshuffle generates deterministic, seed-driven pixel permutations and serializes them as
//! a pair of mutually-inverse offset maps for scrambling and unscrambling video frames.
//!
//! # Pipeline overview
//!
//! 1. **Hash**: `seed -> (start, step)` via [`seeded_hash`]
//! 2. **Keys**: `(start, step, W, H) -> sin(start_angle + i * angle_increment)` ([`AngleSequence`])
//! 3. **Permute**: rank the keys, ties by index, into `forward` / `inverse` ([`Permutation`])
//! 4. **Offsets**: `Permutation -> (shuffle, unshuffle)` [`OffsetMap`]s
//! 5. **Encode**: quantize each vector into an RGB8 pixel ([`encode_offset_map`]) and persist
//!    as PNG ([`write_offset_maps`])
//!
//! Steps 1-4 are pure functions of `(seed, width, height)`; only step 5 touches the
//! filesystem. The permutation is reproducible, not secret: it is not a cryptographic
//! construction.
//!
//! [`remap_frame`] is a CPU reference of the texture-sampling consumer: it applies an
//! encoded map to an RGBA frame with nearest-neighbor sampling.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod codec;
mod foundation;
mod offset;
mod permute;
mod remap;
mod seed;
mod store;

pub use codec::quantize::{
    MAX_DECODED_COMPONENT, MAX_ROUND_TRIP_ERROR, dequantize_component, quantize_component,
};
pub use codec::raster::{EncodedImage, decode_offset_map, encode_offset_map};
pub use foundation::core::Dimensions;
pub use foundation::error::{PixshuffleError, PixshuffleResult};
pub use offset::compute::{shuffle_map, unshuffle_map};
pub use offset::generate::{GeneratedMaps, generate_for, generate_offset_maps};
pub use offset::map::{OffsetKind, OffsetMap, OffsetVector};
pub use permute::angle::AngleSequence;
pub use permute::hash::{
    START_MODULUS, START_MULTIPLIER, STEP_MODULUS, STEP_MULTIPLIER, seeded_hash,
};
pub use permute::permutation::{Permutation, build_permutation};
pub use remap::cpu::{FrameRgba8, RemapOpts, remap_frame};
pub use seed::Seed;
pub use store::files::{
    MANIFEST_FILE_NAME, MapManifest, WrittenMaps, ensure_dir, read_encoded_png, read_manifest,
    write_encoded_png, write_manifest, write_offset_maps,
};
