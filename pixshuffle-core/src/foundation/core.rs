use crate::foundation::error::{PixshuffleError, PixshuffleResult};

/// Validated grid size. Both sides are strictly positive; [`Dimensions::new`] is the only
/// way to build one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Dimensions {
    width: u32,
    height: u32,
}

impl Dimensions {
    /// Validate `width` and `height`; both must be `> 0`.
    pub fn new(width: u32, height: u32) -> PixshuffleResult<Self> {
        if width == 0 || height == 0 {
            return Err(PixshuffleError::invalid_input(format!(
                "width and height must be positive, got {width}x{height}"
            )));
        }
        Ok(Self { width, height })
    }

    /// Grid width `W` in pixels.
    pub fn width(self) -> u32 {
        self.width
    }

    /// Grid height `H` in pixels.
    pub fn height(self) -> u32 {
        self.height
    }

    /// Number of cells `N = W * H`.
    pub fn len(self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Always `false` for a validated value; present for API symmetry with `len`.
    pub fn is_empty(self) -> bool {
        self.len() == 0
    }

    /// `max(W, H)`.
    pub fn max_side(self) -> u32 {
        self.width.max(self.height)
    }

    /// Row-major linear index of `(x, y)`.
    pub fn index_of(self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Inverse of [`Dimensions::index_of`]: `(idx mod W, idx div W)`.
    pub fn coord_of(self, idx: usize) -> (u32, u32) {
        let w = self.width as usize;
        ((idx % w) as u32, (idx / w) as u32)
    }

    /// `(width, height)` tuple, the shape reported in dimension errors.
    pub fn as_tuple(self) -> (u32, u32) {
        (self.width, self.height)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
