use image::{Rgba, RgbaImage};
use log::debug;

use crate::error::StickerError;
use crate::grid::{BlockGrid, GridOptions};
use crate::media::image::{cell_span, check_bounds};
use crate::result::Result;

/// Writes a bit sequence into the carrier image as grid cells.
///
/// A 1-bit becomes a square of the foreground intensity, a 0-bit one of the
/// background intensity, placed at the row-major cell address of the bit.
/// The mapping must match the one used by [`sample_grid`] on the way back.
///
/// [`sample_grid`]: crate::media::image::sample_grid
pub fn render_grid(
    bits: &[u8],
    image: &mut RgbaImage,
    grid: &BlockGrid,
    opts: &GridOptions,
) -> Result<()> {
    if bits.len() > grid.capacity() {
        return Err(StickerError::GridCapacity {
            cells: grid.capacity(),
            bits: bits.len(),
        });
    }
    check_bounds(image, grid, opts)?;

    let (ox, oy) = opts.origin;
    let span = cell_span(grid);

    for (i, bit) in bits.iter().enumerate() {
        if let Some(cell) = grid.address(i) {
            let value = if *bit == 1 {
                opts.foreground
            } else {
                opts.background
            };
            let marker = Rgba([value, value, value, 255]);

            let x0 = ox + cell.col * grid.cell_size;
            let y0 = oy + cell.row * grid.cell_size;
            for y in y0..y0 + span {
                for x in x0..x0 + span {
                    image.put_pixel(x, y, marker);
                }
            }
        }
    }

    debug!(
        "rendered {} bits into a {}x{} grid",
        bits.len(),
        grid.columns,
        grid.rows
    );

    Ok(())
}
