//! Slice grid geometry over margins and spacing

/// Regular-grid slice parameters for one tileset sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SliceSpec {
    /// Tile width in pixels
    pub tile_w: u32,
    /// Tile height in pixels
    pub tile_h: u32,
    /// Pixels before the first column
    pub margin_x: u32,
    /// Pixels before the first row
    pub margin_y: u32,
    /// Pixels between adjacent columns
    pub spacing_x: u32,
    /// Pixels between adjacent rows
    pub spacing_y: u32,
}

impl SliceSpec {
    /// Square tiles with no margin or spacing
    pub const fn square(tile: u32) -> Self {
        Self {
            tile_w: tile,
            tile_h: tile,
            margin_x: 0,
            margin_y: 0,
            spacing_x: 0,
            spacing_y: 0,
        }
    }

    /// Horizontal distance between the left edges of adjacent tiles
    pub const fn step_x(&self) -> u32 {
        self.tile_w + self.spacing_x
    }

    /// Vertical distance between the top edges of adjacent tiles
    pub const fn step_y(&self) -> u32 {
        self.tile_h + self.spacing_y
    }
}

/// Concrete slice grid for a sheet of known pixel dimensions
///
/// A final spacing-sized gap is not required after the last tile, so a
/// sheet fits `(size - margin + spacing) / step` whole tiles per axis.
/// Sheets narrower than their margin hold zero tiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SliceGrid {
    spec: SliceSpec,
    cols: u32,
    rows: u32,
}

impl SliceGrid {
    /// Compute the grid for a sheet of the given pixel dimensions
    pub const fn new(spec: SliceSpec, sheet_w: u32, sheet_h: u32) -> Self {
        let cols = (sheet_w + spec.spacing_x).saturating_sub(spec.margin_x) / spec.step_x();
        let rows = (sheet_h + spec.spacing_y).saturating_sub(spec.margin_y) / spec.step_y();
        Self { spec, cols, rows }
    }

    /// The slice parameters this grid was computed from
    pub const fn spec(&self) -> &SliceSpec {
        &self.spec
    }

    /// Number of whole tile columns
    pub const fn cols(&self) -> u32 {
        self.cols
    }

    /// Number of whole tile rows
    pub const fn rows(&self) -> u32 {
        self.rows
    }

    /// Total number of grid cells
    pub const fn cell_count(&self) -> u64 {
        self.cols as u64 * self.rows as u64
    }

    /// Row-major tile index of the cell at (column, row)
    pub const fn index(&self, col: u32, row: u32) -> u32 {
        row * self.cols + col
    }

    /// Top-left pixel of the cell at (column, row)
    pub const fn origin(&self, col: u32, row: u32) -> (u32, u32) {
        (
            self.spec.margin_x + col * self.spec.step_x(),
            self.spec.margin_y + row * self.spec.step_y(),
        )
    }

    /// Iterate all (column, row) cells in row-major order
    pub fn cells(&self) -> impl Iterator<Item = (u32, u32)> {
        let cols = self.cols;
        (0..self.rows).flat_map(move |row| (0..cols).map(move |col| (col, row)))
    }
}
