use std::io::Write;

use anyhow::Context as _;
use image::ImageEncoder as _;

use crate::{
    codec::quantize::{dequantize_component, quantize_component},
    foundation::core::Dimensions,
    foundation::error::{PixshuffleError, PixshuffleResult},
    offset::map::{OffsetMap, OffsetVector},
};

/// An encoded offset map: `H x W` RGB8 pixels, tightly packed, row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EncodedImage {
    dims: Dimensions,
    rgb: Vec<u8>,
}

impl EncodedImage {
    /// Wrap raw RGB8 bytes; `rgb.len()` must equal `W * H * 3`.
    pub fn new(dims: Dimensions, rgb: Vec<u8>) -> PixshuffleResult<Self> {
        if rgb.len() != dims.len() * 3 {
            return Err(PixshuffleError::invalid_input(format!(
                "rgb buffer for {}x{} needs {} bytes, got {}",
                dims.width(),
                dims.height(),
                dims.len() * 3,
                rgb.len()
            )));
        }
        Ok(Self { dims, rgb })
    }

    /// Image size.
    pub fn dimensions(&self) -> Dimensions {
        self.dims
    }

    /// Image width.
    pub fn width(&self) -> u32 {
        self.dims.width()
    }

    /// Image height.
    pub fn height(&self) -> u32 {
        self.dims.height()
    }

    /// Raw RGB8 bytes.
    pub fn as_raw(&self) -> &[u8] {
        &self.rgb
    }

    /// `[r, g, b]` at `(x, y)`, or `None` outside the image.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 3]> {
        if x >= self.dims.width() || y >= self.dims.height() {
            return None;
        }
        let i = self.dims.index_of(x, y) * 3;
        Some([self.rgb[i], self.rgb[i + 1], self.rgb[i + 2]])
    }

    /// Decoded offset stored at `(x, y)`; the blue channel is ignored.
    pub fn offset_at(&self, x: u32, y: u32) -> Option<OffsetVector> {
        let [r, g, _] = self.pixel(x, y)?;
        Some(OffsetVector::new(
            dequantize_component(r),
            dequantize_component(g),
        ))
    }

    /// Convert into an `image` buffer.
    pub fn into_rgb_image(self) -> PixshuffleResult<image::RgbImage> {
        let Self { dims, rgb } = self;
        image::RgbImage::from_raw(dims.width(), dims.height(), rgb).ok_or_else(|| {
            PixshuffleError::invalid_input("rgb buffer does not match image dimensions")
        })
    }

    /// Take any decoded image, converting to RGB8.
    pub fn from_dynamic(img: image::DynamicImage) -> PixshuffleResult<Self> {
        let rgb = img.into_rgb8();
        let (width, height) = rgb.dimensions();
        let dims = Dimensions::new(width, height)?;
        Self::new(dims, rgb.into_raw())
    }

    /// Stream as PNG (lossless, 8 bits per channel) into `w`.
    pub fn write_png<W: Write>(&self, w: W) -> PixshuffleResult<()> {
        image::codecs::png::PngEncoder::new(w)
            .write_image(
                &self.rgb,
                self.dims.width(),
                self.dims.height(),
                image::ExtendedColorType::Rgb8,
            )
            .context("encode offset map png")?;
        Ok(())
    }

    /// Encode as PNG bytes.
    pub fn to_png_bytes(&self) -> PixshuffleResult<Vec<u8>> {
        let mut buf = Vec::new();
        self.write_png(&mut buf)?;
        Ok(buf)
    }

    /// Decode PNG (or any format `image` recognizes) bytes.
    pub fn from_png_bytes(bytes: &[u8]) -> PixshuffleResult<Self> {
        let img = image::load_from_memory(bytes).context("decode offset map image")?;
        Self::from_dynamic(img)
    }
}

/// Quantize every vector of `map` into an RGB8 raster of the declared size.
///
/// Fails with [`PixshuffleError::DimensionMismatch`] when the map is not `width x height`.
pub fn encode_offset_map(
    map: &OffsetMap,
    width: u32,
    height: u32,
) -> PixshuffleResult<EncodedImage> {
    let dims = map.dimensions();
    if dims.as_tuple() != (width, height) {
        return Err(PixshuffleError::dimension_mismatch((width, height), dims.as_tuple()));
    }

    let mut rgb = Vec::with_capacity(dims.len() * 3);
    for v in map.cells() {
        rgb.extend_from_slice(&[quantize_component(v.dx), quantize_component(v.dy), 0]);
    }
    Ok(EncodedImage { dims, rgb })
}

/// Recover an approximate offset map; each component is within `1/255` of the original
/// and every decoded vector lies strictly inside `(-1, 1)²`.
pub fn decode_offset_map(image: &EncodedImage) -> OffsetMap {
    let cells = image
        .rgb
        .chunks_exact(3)
        .map(|px| OffsetVector::new(dequantize_component(px[0]), dequantize_component(px[1])))
        .collect();
    OffsetMap::from_cells_unchecked(image.dims, cells)
}

#[cfg(test)]
#[path = "../../tests/unit/codec/raster.rs"]
mod tests;
