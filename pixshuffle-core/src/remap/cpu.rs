use rayon::prelude::*;

use crate::{
    codec::raster::EncodedImage,
    foundation::error::{PixshuffleError, PixshuffleResult},
};

/// A straight-alpha RGBA8 frame.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameRgba8 {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// RGBA8 bytes, tightly packed, row-major.
    pub data: Vec<u8>,
}

impl FrameRgba8 {
    /// Check that the frame is non-empty and `data` matches `width * height * 4`.
    pub fn validate(&self) -> PixshuffleResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(PixshuffleError::invalid_input(format!(
                "frame must be non-empty, got {}x{}",
                self.width, self.height
            )));
        }
        let expected = self.width as usize * self.height as usize * 4;
        if self.data.len() != expected {
            return Err(PixshuffleError::invalid_input(format!(
                "frame {}x{} needs {expected} bytes, got {}",
                self.width,
                self.height,
                self.data.len()
            )));
        }
        Ok(())
    }

    /// Wrap an `image` RGBA buffer.
    pub fn from_rgba_image(img: image::RgbaImage) -> Self {
        let (width, height) = img.dimensions();
        Self {
            width,
            height,
            data: img.into_raw(),
        }
    }

    /// Convert into an `image` RGBA buffer.
    pub fn into_rgba_image(self) -> PixshuffleResult<image::RgbaImage> {
        self.validate()?;
        image::RgbaImage::from_raw(self.width, self.height, self.data)
            .ok_or_else(|| PixshuffleError::invalid_input("frame buffer does not match its size"))
    }
}

/// Sampling options for [`remap_frame`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RemapOpts {
    /// Write `255 - c` for the color channels; alpha is untouched.
    pub invert_rgb: bool,
}

/// Resample `src` through an encoded offset map.
///
/// For every destination pixel the fragment center is normalized to `[0, 1)²`, the
/// offset texel under it is fetched nearest-neighbor and decoded, and `src` is sampled
/// nearest-neighbor (clamped to edge) at the displaced coordinate. `map` and `src` may
/// differ in size.
#[tracing::instrument(skip(src, map), fields(width = src.width, height = src.height))]
pub fn remap_frame(
    src: &FrameRgba8,
    map: &EncodedImage,
    opts: RemapOpts,
) -> PixshuffleResult<FrameRgba8> {
    src.validate()?;

    let width = src.width;
    let height = src.height;
    let row_bytes = width as usize * 4;
    let mut data = vec![0u8; src.data.len()];

    data.par_chunks_mut(row_bytes)
        .enumerate()
        .for_each(|(y, row)| {
            let v = (y as f64 + 0.5) / f64::from(height);
            for x in 0..width {
                let u = (f64::from(x) + 0.5) / f64::from(width);
                let (sx, sy) = sample_coord(map, u, v, width, height);
                let si = (sy as usize * width as usize + sx as usize) * 4;
                let di = x as usize * 4;
                row[di..di + 4].copy_from_slice(&src.data[si..si + 4]);
                if opts.invert_rgb {
                    for c in &mut row[di..di + 3] {
                        *c = 255 - *c;
                    }
                }
            }
        });

    Ok(FrameRgba8 {
        width,
        height,
        data,
    })
}

/// Source texel for the normalized destination coordinate `(u, v)`.
fn sample_coord(map: &EncodedImage, u: f64, v: f64, width: u32, height: u32) -> (u32, u32) {
    let mx = texel(u, map.width());
    let my = texel(v, map.height());
    let offset = map.offset_at(mx, my).unwrap_or_default();
    (texel(u + offset.dx, width), texel(v + offset.dy, height))
}

/// Nearest texel index for normalized `t` along an axis of `size` texels, clamped to edge.
fn texel(t: f64, size: u32) -> u32 {
    let max = f64::from(size - 1);
    (t * f64::from(size)).floor().clamp(0.0, max) as u32
}

#[cfg(test)]
#[path = "../../tests/unit/remap/cpu.rs"]
mod tests;
