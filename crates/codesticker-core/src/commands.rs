use std::fs::File;
use std::path::Path;

use image::{Rgba, RgbaImage};
use log::{info, warn};

use crate::cipher::CipherMethod;
use crate::codec::{self, ScanResult};
use crate::error::StickerError;
use crate::grid::{BlockGrid, GridOptions};
use crate::media::image::{render_grid, sample_grid};
use crate::result::Result;

/// Layout of a sticker file. Creating and scanning must agree on the same
/// options, otherwise the bit to cell mapping falls apart.
#[derive(Debug, Clone)]
pub struct StickerOptions {
    pub width: u32,
    pub height: u32,
    /// canvas fill, dark so that unwritten cells classify as 0-bits
    pub canvas_color: [u8; 4],
    pub cell_size: u32,
    pub grid: GridOptions,
}

impl Default for StickerOptions {
    fn default() -> Self {
        Self {
            width: 400,
            height: 400,
            canvas_color: [15, 23, 42, 255],
            cell_size: 8,
            grid: GridOptions::default(),
        }
    }
}

impl StickerOptions {
    /// The largest data grid fitting the area right and below the origin.
    pub fn grid_for(&self, width: u32, height: u32) -> Result<BlockGrid> {
        let (ox, oy) = self.grid.origin;
        if ox >= width || oy >= height {
            return Err(StickerError::ImageTooSmall {
                width,
                height,
                cell_size: self.cell_size,
            });
        }

        BlockGrid::fit(width - ox, height - oy, self.cell_size).ok_or(
            StickerError::ImageTooSmall {
                width,
                height,
                cell_size: self.cell_size,
            },
        )
    }
}

/// Creates a sticker PNG carrying the message.
pub fn create(
    message: &str,
    method: CipherMethod,
    output: &Path,
    opts: &StickerOptions,
) -> Result<()> {
    let bits = codec::encode(message, method)?;
    let grid = opts.grid_for(opts.width, opts.height)?;
    if bits.len() > grid.capacity() {
        return Err(StickerError::GridCapacity {
            cells: grid.capacity(),
            bits: bits.len(),
        });
    }

    let mut canvas = RgbaImage::from_pixel(opts.width, opts.height, Rgba(opts.canvas_color));
    render_grid(&bits, &mut canvas, &grid, &opts.grid)?;

    let mut file =
        File::create(output).map_err(|source| StickerError::WriteError { source })?;
    canvas
        .write_to(&mut file, image::ImageFormat::Png)
        .map_err(|_| StickerError::ImageEncodingError)?;

    info!(
        "hid {} bits with the {} cipher in {output:?}",
        bits.len(),
        method.label()
    );

    Ok(())
}

/// Scans a sticker PNG back into a message.
///
/// The grid is derived from the actual image dimensions with the same
/// options used at creation time.
pub fn scan(
    input: &Path,
    method: Option<CipherMethod>,
    opts: &StickerOptions,
) -> Result<ScanResult> {
    let canvas = image::open(input)
        .map_err(|_| StickerError::InvalidImageMedia)?
        .to_rgba8();

    let grid = opts.grid_for(canvas.width(), canvas.height())?;
    let report = sample_grid(&canvas, &grid, &opts.grid)?;
    if report.is_ambiguous() {
        warn!(
            "{} of {} cells sampled near the threshold, read may be unreliable",
            report.ambiguous,
            grid.capacity()
        );
    }

    let result = codec::decode(&report.bits, method)?;

    Ok(result)
}
