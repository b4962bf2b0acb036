use crate::{
    foundation::core::Dimensions,
    foundation::error::{PixshuffleError, PixshuffleResult},
};

/// Normalized displacement `(dx, dy)`; generated vectors lie strictly inside `(-1, 1)²`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct OffsetVector {
    /// Horizontal offset in units of grid width.
    pub dx: f64,
    /// Vertical offset in units of grid height.
    pub dy: f64,
}

impl OffsetVector {
    /// Build a vector from its components.
    pub const fn new(dx: f64, dy: f64) -> Self {
        Self { dx, dy }
    }

    /// Exact offset between two cells of `dims`: `((to.x - from.x) / W, (to.y - from.y) / H)`.
    pub fn between(dims: Dimensions, from: (u32, u32), to: (u32, u32)) -> Self {
        let dx = i64::from(to.0) - i64::from(from.0);
        let dy = i64::from(to.1) - i64::from(from.1);
        Self {
            dx: dx as f64 / f64::from(dims.width()),
            dy: dy as f64 / f64::from(dims.height()),
        }
    }

    /// `true` when both components are strictly inside `(-1, 1)`.
    pub fn is_in_open_unit_square(self) -> bool {
        self.dx > -1.0 && self.dx < 1.0 && self.dy > -1.0 && self.dy < 1.0
    }
}

/// Which direction an offset map is oriented toward.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OffsetKind {
    /// Keyed by destination coordinate; samples the original grid to scramble it.
    Shuffle,
    /// Keyed by original coordinate; samples the scrambled grid to restore it.
    Unshuffle,
}

impl OffsetKind {
    /// Both kinds, shuffle first.
    pub const ALL: [OffsetKind; 2] = [OffsetKind::Shuffle, OffsetKind::Unshuffle];

    /// Canonical on-disk file name for this direction.
    pub const fn file_name(self) -> &'static str {
        match self {
            OffsetKind::Shuffle => "offset_map.png",
            OffsetKind::Unshuffle => "inv_offset_map.png",
        }
    }
}

/// `H x W` grid of [`OffsetVector`] stored row-major.
#[derive(Clone, Debug, PartialEq)]
pub struct OffsetMap {
    dims: Dimensions,
    cells: Vec<OffsetVector>,
}

impl OffsetMap {
    /// Wrap row-major `cells`; `cells.len()` must equal `W * H`.
    pub fn new(dims: Dimensions, cells: Vec<OffsetVector>) -> PixshuffleResult<Self> {
        if cells.len() != dims.len() {
            return Err(PixshuffleError::invalid_input(format!(
                "offset map for {}x{} needs {} cells, got {}",
                dims.width(),
                dims.height(),
                dims.len(),
                cells.len()
            )));
        }
        Ok(Self { dims, cells })
    }

    pub(crate) fn from_cells_unchecked(dims: Dimensions, cells: Vec<OffsetVector>) -> Self {
        debug_assert_eq!(cells.len(), dims.len());
        Self { dims, cells }
    }

    /// Build from nested rows (`rows[y][x]`). Rows must be non-empty and equally long.
    pub fn from_rows(rows: Vec<Vec<OffsetVector>>) -> PixshuffleResult<Self> {
        let height = u32::try_from(rows.len())
            .map_err(|_| PixshuffleError::invalid_input("offset map has too many rows"))?;
        let width = rows.first().map_or(0, Vec::len);
        let width = u32::try_from(width)
            .map_err(|_| PixshuffleError::invalid_input("offset map rows are too long"))?;
        let dims = Dimensions::new(width, height)?;

        let mut cells = Vec::with_capacity(dims.len());
        for (y, row) in rows.into_iter().enumerate() {
            if row.len() != width as usize {
                return Err(PixshuffleError::invalid_input(format!(
                    "offset map row {y} has {} cells, expected {width}",
                    row.len()
                )));
            }
            cells.extend(row);
        }
        Ok(Self { dims, cells })
    }

    /// Grid size.
    pub fn dimensions(&self) -> Dimensions {
        self.dims
    }

    /// Grid width `W`.
    pub fn width(&self) -> u32 {
        self.dims.width()
    }

    /// Grid height `H`.
    pub fn height(&self) -> u32 {
        self.dims.height()
    }

    /// Vector at `(x, y)`, or `None` outside the grid.
    pub fn get(&self, x: u32, y: u32) -> Option<OffsetVector> {
        if x >= self.dims.width() || y >= self.dims.height() {
            return None;
        }
        self.cells.get(self.dims.index_of(x, y)).copied()
    }

    /// Row-major cells.
    pub fn cells(&self) -> &[OffsetVector] {
        &self.cells
    }

    /// Rows top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[OffsetVector]> {
        self.cells.chunks_exact(self.dims.width() as usize)
    }

    /// For each cell, the linear index its vector points at.
    ///
    /// The vector is scaled back to whole cells and rounded, so this also recovers the
    /// mapping from decoded maps as long as the quantization error stays under half a
    /// cell. Fails when a vector points outside the grid.
    pub fn index_mapping(&self) -> PixshuffleResult<Vec<usize>> {
        let w = f64::from(self.dims.width());
        let h = f64::from(self.dims.height());
        let mut out = Vec::with_capacity(self.cells.len());
        for (idx, v) in self.cells.iter().enumerate() {
            let (x, y) = self.dims.coord_of(idx);
            let tx = i64::from(x) + (v.dx * w).round() as i64;
            let ty = i64::from(y) + (v.dy * h).round() as i64;
            let inside = (0..i64::from(self.dims.width())).contains(&tx)
                && (0..i64::from(self.dims.height())).contains(&ty);
            if !inside {
                return Err(PixshuffleError::invalid_input(format!(
                    "offset at ({x}, {y}) points outside the grid to ({tx}, {ty})"
                )));
            }
            out.push(self.dims.index_of(tx as u32, ty as u32));
        }
        Ok(out)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/offset/map.rs"]
mod tests;
