use std::{
    fs::File,
    io::{BufReader, BufWriter, Write},
    path::{Path, PathBuf},
};

use anyhow::Context as _;

use crate::{
    codec::raster::{EncodedImage, encode_offset_map},
    foundation::error::{PixshuffleError, PixshuffleResult},
    offset::generate::GeneratedMaps,
    offset::map::OffsetKind,
    seed::Seed,
};

/// File name of the JSON manifest written next to the two maps.
pub const MANIFEST_FILE_NAME: &str = "manifest.json";

/// Token describing a persisted pair of maps; enough to regenerate them.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct MapManifest {
    /// Seed the maps were generated from.
    pub seed: Seed,
    /// Grid width.
    pub width: u32,
    /// Grid height.
    pub height: u32,
    /// File name of the shuffle map, relative to the manifest.
    pub shuffle: String,
    /// File name of the unshuffle map, relative to the manifest.
    pub unshuffle: String,
}

impl MapManifest {
    /// Manifest for `maps` using the canonical file names.
    pub fn for_maps(maps: &GeneratedMaps) -> Self {
        Self {
            seed: maps.seed.clone(),
            width: maps.dims.width(),
            height: maps.dims.height(),
            shuffle: OffsetKind::Shuffle.file_name().to_string(),
            unshuffle: OffsetKind::Unshuffle.file_name().to_string(),
        }
    }

    /// File name recorded for `kind`.
    pub fn file_name(&self, kind: OffsetKind) -> &str {
        match kind {
            OffsetKind::Shuffle => &self.shuffle,
            OffsetKind::Unshuffle => &self.unshuffle,
        }
    }
}

/// Paths produced by [`write_offset_maps`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WrittenMaps {
    /// Encoded shuffle map.
    pub shuffle: PathBuf,
    /// Encoded unshuffle map.
    pub unshuffle: PathBuf,
    /// JSON manifest.
    pub manifest: PathBuf,
}

/// Encode both maps and write them, plus `manifest.json`, into `out_dir`.
///
/// Both maps are encoded before anything touches the filesystem, so a
/// [`PixshuffleError::DimensionMismatch`] never leaves partial output. `out_dir` is created
/// when missing; failure to create it or to write any file is a [`PixshuffleError::Io`].
///
/// Every file is first written in full to a `.tmp` sibling. Only when all three are staged
/// are they renamed into place, shuffle map first and manifest last, so a failed write
/// leaves previously persisted maps untouched and no staging files behind.
#[tracing::instrument(
    skip(maps),
    fields(seed = %maps.seed, width = maps.dims.width(), height = maps.dims.height())
)]
pub fn write_offset_maps(maps: &GeneratedMaps, out_dir: &Path) -> PixshuffleResult<WrittenMaps> {
    let (w, h) = maps.dims.as_tuple();
    let shuffle = encode_offset_map(&maps.shuffle, w, h)?;
    let unshuffle = encode_offset_map(&maps.unshuffle, w, h)?;

    ensure_dir(out_dir)?;

    let shuffle_path = out_dir.join(OffsetKind::Shuffle.file_name());
    let unshuffle_path = out_dir.join(OffsetKind::Unshuffle.file_name());
    let manifest_path = out_dir.join(MANIFEST_FILE_NAME);
    let manifest = MapManifest::for_maps(maps);

    let staged = [
        stage_with(&shuffle_path, |w| shuffle.write_png(w))?,
        stage_with(&unshuffle_path, |w| unshuffle.write_png(w))?,
        stage_with(&manifest_path, |w| manifest_body(&manifest, w))?,
    ];
    for file in staged {
        file.commit()?;
    }

    tracing::debug!(dir = %out_dir.display(), "offset maps written");
    Ok(WrittenMaps {
        shuffle: shuffle_path,
        unshuffle: unshuffle_path,
        manifest: manifest_path,
    })
}

/// Create `dir` and its parents when missing.
pub fn ensure_dir(dir: &Path) -> PixshuffleResult<()> {
    std::fs::create_dir_all(dir).map_err(|e| {
        PixshuffleError::io(
            format!("failed to create output directory '{}'", dir.display()),
            e,
        )
    })
}

/// Write one encoded map as PNG to `path`.
pub fn write_encoded_png(image: &EncodedImage, path: &Path) -> PixshuffleResult<()> {
    stage_with(path, |w| image.write_png(w))?.commit()
}

/// Load an encoded map from an image file.
pub fn read_encoded_png(path: &Path) -> PixshuffleResult<EncodedImage> {
    let bytes = std::fs::read(path)
        .map_err(|e| PixshuffleError::io(format!("failed to read '{}'", path.display()), e))?;
    EncodedImage::from_png_bytes(&bytes)
}

/// Serialize `manifest` as pretty JSON to `path`.
pub fn write_manifest(manifest: &MapManifest, path: &Path) -> PixshuffleResult<()> {
    stage_with(path, |w| manifest_body(manifest, w))?.commit()
}

fn manifest_body(manifest: &MapManifest, w: &mut BufWriter<File>) -> PixshuffleResult<()> {
    serde_json::to_writer_pretty(w, manifest).context("serialize map manifest")?;
    Ok(())
}

/// Read the manifest stored in `dir`.
pub fn read_manifest(dir: &Path) -> PixshuffleResult<MapManifest> {
    let path = dir.join(MANIFEST_FILE_NAME);
    let f = File::open(&path)
        .map_err(|e| PixshuffleError::io(format!("failed to open '{}'", path.display()), e))?;
    let manifest = serde_json::from_reader(BufReader::new(f))
        .with_context(|| format!("parse map manifest '{}'", path.display()))?;
    Ok(manifest)
}

/// Suffix appended to a file name while its contents are being staged.
const STAGING_SUFFIX: &str = ".tmp";

/// A fully written staging file waiting to be renamed over its destination.
struct StagedFile {
    dest: PathBuf,
    tmp: TempFileGuard,
}

impl StagedFile {
    /// Rename the staging file into place.
    fn commit(mut self) -> PixshuffleResult<()> {
        let Some(tmp) = self.tmp.0.take() else {
            return Ok(());
        };
        std::fs::rename(&tmp, &self.dest).map_err(|e| {
            let _ = std::fs::remove_file(&tmp);
            PixshuffleError::io(
                format!("failed to move '{}' into place", self.dest.display()),
                e,
            )
        })
    }
}

/// Removes the staging file on drop unless it was committed.
struct TempFileGuard(Option<PathBuf>);

impl Drop for TempFileGuard {
    fn drop(&mut self) {
        if let Some(path) = self.0.take() {
            let _ = std::fs::remove_file(path);
        }
    }
}

fn staging_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(STAGING_SUFFIX);
    path.with_file_name(name)
}

/// Write `body` to a staging sibling of `path`, flushing before the handle drops.
fn stage_with(
    path: &Path,
    body: impl FnOnce(&mut BufWriter<File>) -> PixshuffleResult<()>,
) -> PixshuffleResult<StagedFile> {
    let tmp_path = staging_path(path);
    let f = File::create(&tmp_path)
        .map_err(|e| PixshuffleError::io(format!("failed to create '{}'", path.display()), e))?;
    let tmp = TempFileGuard(Some(tmp_path));
    let mut w = BufWriter::new(f);
    let context = || format!("failed to write '{}'", path.display());
    body(&mut w).map_err(|e| match e {
        PixshuffleError::Other(source) => PixshuffleError::io(context(), source),
        other => other,
    })?;
    w.flush().map_err(|e| PixshuffleError::io(context(), e))?;
    drop(w);
    Ok(StagedFile {
        dest: path.to_path_buf(),
        tmp,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/store/files.rs"]
mod tests;
