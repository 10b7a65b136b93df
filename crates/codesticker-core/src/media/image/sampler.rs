use image::{Pixel, Rgba, RgbaImage};
use log::debug;

use crate::grid::{BlockGrid, GridOptions};
use crate::media::image::{cell_span, check_bounds};
use crate::result::Result;

/// Result of sampling a grid: one bit per cell plus the number of cells
/// whose intensity fell inside the ambiguity band around the threshold.
///
/// Ambiguous cells are still classified, but callers should treat a
/// non-zero count as a low confidence read instead of silently guessing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleReport {
    pub bits: Vec<u8>,
    pub ambiguous: usize,
}

impl SampleReport {
    pub fn is_ambiguous(&self) -> bool {
        self.ambiguous > 0
    }
}

/// Reads every grid cell back into a bit.
///
/// Returns exactly `grid.rows * grid.columns` bits. Each cell's mean luma
/// over the cell interior is classified against the midpoint threshold
/// between the two marker baseline intensities.
pub fn sample_grid(
    image: &RgbaImage,
    grid: &BlockGrid,
    opts: &GridOptions,
) -> Result<SampleReport> {
    check_bounds(image, grid, opts)?;

    let (ox, oy) = opts.origin;
    let span = cell_span(grid);
    let threshold = i32::from(opts.threshold());
    let band = i32::from(opts.ambiguity_band);

    let mut bits = Vec::with_capacity(grid.capacity());
    let mut ambiguous = 0;

    for i in 0..grid.capacity() {
        if let Some(cell) = grid.address(i) {
            let x0 = ox + cell.col * grid.cell_size;
            let y0 = oy + cell.row * grid.cell_size;

            let mut sum: u64 = 0;
            let mut samples: u64 = 0;
            for y in y0..y0 + span {
                for x in x0..x0 + span {
                    sum += u64::from(luma(image.get_pixel(x, y)));
                    samples += 1;
                }
            }

            let mean = (sum / samples) as i32;
            if (mean - threshold).abs() <= band {
                ambiguous += 1;
            }
            bits.push(if mean > threshold { 1 } else { 0 });
        }
    }

    debug!(
        "sampled {} cells, {} ambiguous",
        bits.len(),
        ambiguous
    );

    Ok(SampleReport { bits, ambiguous })
}

fn luma(pixel: &Rgba<u8>) -> u8 {
    pixel.to_luma().0[0]
}
