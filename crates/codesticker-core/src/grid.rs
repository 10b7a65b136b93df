/// Address of a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellAddress {
    pub row: u32,
    pub col: u32,
}

/// The spatial addressing scheme mapping bit positions to image regions.
///
/// `address` is a total bijection from `[0, columns * rows)` to cells and
/// is used identically for writing bits while rendering and for reading
/// bits while sampling. Both sides must agree on the same grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockGrid {
    pub columns: u32,
    pub rows: u32,
    pub cell_size: u32,
}

impl BlockGrid {
    pub fn new(columns: u32, rows: u32, cell_size: u32) -> Self {
        Self {
            columns,
            rows,
            cell_size,
        }
    }

    /// The largest grid of `cell_size` cells fitting into the given area,
    /// `None` when not even a single cell fits.
    pub fn fit(width: u32, height: u32, cell_size: u32) -> Option<Self> {
        if cell_size == 0 {
            return None;
        }

        let columns = width / cell_size;
        let rows = height / cell_size;
        if columns == 0 || rows == 0 {
            return None;
        }

        Some(Self::new(columns, rows, cell_size))
    }

    /// Number of bits the grid can carry.
    pub fn capacity(&self) -> usize {
        (self.columns as usize) * (self.rows as usize)
    }

    /// Row-major cell address of bit `i`, `None` once the cells are exhausted.
    pub fn address(&self, i: usize) -> Option<CellAddress> {
        if i >= self.capacity() {
            return None;
        }

        Some(CellAddress {
            row: (i / self.columns as usize) as u32,
            col: (i % self.columns as usize) as u32,
        })
    }

    pub fn width(&self) -> u32 {
        self.columns * self.cell_size
    }

    pub fn height(&self) -> u32 {
        self.rows * self.cell_size
    }
}

/// Pixel level knobs of the grid renderer and sampler.
#[derive(Debug, Clone)]
pub struct GridOptions {
    /// top-left pixel of the grid inside the carrier image
    pub origin: (u32, u32),

    /// marker intensity of a 1-bit cell
    pub foreground: u8,

    /// marker intensity of a 0-bit cell
    pub background: u8,

    /// samples within this distance of the threshold count as ambiguous
    pub ambiguity_band: u8,
}

impl Default for GridOptions {
    fn default() -> Self {
        Self {
            origin: (0, 0),
            foreground: 230,
            background: 25,
            ambiguity_band: 24,
        }
    }
}

impl GridOptions {
    /// Classification threshold: the midpoint between the two marker
    /// baseline intensities.
    pub fn threshold(&self) -> u8 {
        (((self.foreground as u16) + (self.background as u16)) / 2) as u8
    }
}
