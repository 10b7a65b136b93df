pub mod renderer;
pub mod sampler;

pub use renderer::render_grid;
pub use sampler::{sample_grid, SampleReport};

use crate::error::StickerError;
use crate::grid::{BlockGrid, GridOptions};
use crate::result::Result;
use image::RgbaImage;

/// Rendering paints and sampling reads the cell interior only, the last
/// pixel row and column of each cell is a gutter keeping neighbouring
/// cells separable.
pub(crate) fn cell_span(grid: &BlockGrid) -> u32 {
    if grid.cell_size > 1 {
        grid.cell_size - 1
    } else {
        1
    }
}

pub(crate) fn check_bounds(
    image: &RgbaImage,
    grid: &BlockGrid,
    opts: &GridOptions,
) -> Result<()> {
    let (ox, oy) = opts.origin;
    if ox + grid.width() > image.width() || oy + grid.height() > image.height() {
        return Err(StickerError::GridOutOfBounds {
            width: image.width(),
            height: image.height(),
        });
    }

    Ok(())
}
