use mazeviz_core::{MazeCell, MazeGrid, Point, Side};

use crate::config::RenderConfig;
use crate::traits::Surface;

/// Wipe every solver annotation and restore the grid's baseline visuals.
///
/// Each cell, exactly once and in storage order, has its solver state reset
/// to idle, its pixel rectangle cleared, and its present walls redrawn.
/// Calling this again on a reset grid changes nothing.
///
/// Cell rectangles share their border pixels with the next cell, so clearing
/// a cell also erases the right and bottom walls already redrawn for its left
/// and upper neighbours. A wall stored on only one side of a shared edge
/// survives only if the later cell in storage order owns it; consistent grids
/// (see [`MazeGrid::open_between`]) are unaffected.
pub fn reset_solver_state<S: Surface + ?Sized>(
    grid: &mut MazeGrid,
    surface: &mut S,
    config: &RenderConfig,
) {
    for cell in grid.iter_mut() {
        cell.solver.reset();
        surface.clear_rect(cell.rect());
        draw_walls(&mut *surface, cell, config);
    }
    log::debug!("reset solver state of {} cells", grid.len());
}

/// End points of the line for `side` of a cell at pixel `origin`.
pub fn wall_segment(origin: Point, size: i32, side: Side) -> (Point, Point) {
    let (x, y, s) = (origin.x, origin.y, size);
    match side {
        Side::Top => (Point::new(x, y), Point::new(x + s, y)),
        Side::Right => (Point::new(x + s, y), Point::new(x + s, y + s)),
        Side::Bottom => (Point::new(x + s, y + s), Point::new(x, y + s)),
        Side::Left => (Point::new(x, y + s), Point::new(x, y)),
    }
}

/// Stroke each wall present on `cell`.
pub fn draw_walls<S: Surface + ?Sized>(surface: &mut S, cell: &MazeCell, config: &RenderConfig) {
    let origin = cell.origin();
    for side in cell.walls.present() {
        let (from, to) = wall_segment(origin, cell.size, side);
        surface.line(from, to, config.wall_color, config.wall_width);
    }
}
