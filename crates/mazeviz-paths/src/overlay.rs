//! Per-cell tints drawn while a solver runs.

use mazeviz_core::{MazeCell, MazeGrid};

use crate::config::RenderConfig;
use crate::traits::Surface;

/// Tint `cell` with the path colour when `is_path`, otherwise with the
/// explored colour.
pub fn paint_cell<S: Surface + ?Sized>(
    surface: &mut S,
    cell: &MazeCell,
    is_path: bool,
    config: &RenderConfig,
) {
    let color = if is_path {
        config.path_color
    } else {
        config.explored_color
    };
    surface.fill_rect(cell.rect(), color);
}

/// Tint every cell of `path` with the path colour, in route order.
pub fn paint_path<S: Surface + ?Sized>(
    surface: &mut S,
    grid: &MazeGrid,
    path: &[usize],
    config: &RenderConfig,
) {
    for cell in path.iter().filter_map(|&i| grid.cell(i)) {
        paint_cell(&mut *surface, cell, true, config);
    }
}
