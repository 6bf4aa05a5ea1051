use mazeviz_core::{Color, MazeGrid, Point, Range};

/// Maps cell coordinates to a position in the grid's storage.
///
/// Must agree with the dimensions of the grid it is used with; an indexer
/// that returns a position for a coordinate the grid does not hold yields
/// wrong neighbours, not an error.
pub trait Indexer {
    /// Position of `(i, j)`, or `None` when it lies outside the grid.
    fn index(&self, i: i32, j: i32) -> Option<usize>;
}

impl Indexer for MazeGrid {
    #[inline]
    fn index(&self, i: i32, j: i32) -> Option<usize> {
        MazeGrid::index(self, i, j)
    }
}

/// A dimensions-only row-major indexer.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RowMajor {
    pub width: i32,
    pub height: i32,
}

impl RowMajor {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// An indexer matching `grid`'s dimensions.
    pub fn of(grid: &MazeGrid) -> Self {
        Self::new(grid.width(), grid.height())
    }
}

impl Indexer for RowMajor {
    #[inline]
    fn index(&self, i: i32, j: i32) -> Option<usize> {
        let bounds = Range::new(0, 0, self.width, self.height);
        if !bounds.contains(Point::new(i, j)) {
            return None;
        }
        Some((j as usize) * (self.width as usize) + (i as usize))
    }
}

/// Drawing target for maze visuals. Coordinates are pixels.
///
/// Calls cannot fail; backends that talk to a device buffer the requests
/// and report errors when they flush.
pub trait Surface {
    /// Fill `rect` with `color`, blending if the colour is translucent.
    fn fill_rect(&mut self, rect: Range, color: Color);

    /// Erase `rect` back to the background.
    fn clear_rect(&mut self, rect: Range);

    /// Stroke a straight line between two pixels, both inclusive.
    fn line(&mut self, from: Point, to: Point, color: Color, width: u32);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_major_matches_grid() {
        let g = MazeGrid::new(5, 3, 4).unwrap();
        let rm = RowMajor::of(&g);
        for j in -1..=3 {
            for i in -1..=5 {
                assert_eq!(Indexer::index(&rm, i, j), Indexer::index(&g, i, j));
            }
        }
    }
}
