use mazeviz_core::{MazeCell, MazeGrid, Side};

use crate::traits::Indexer;

/// One entry of the neighbour scan: the coordinate offset and the wall that
/// has to be open for the move.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Step {
    pub dx: i32,
    pub dy: i32,
    pub side: Side,
}

/// Scan order: top, right, bottom, left.
pub const DIRECTIONS: [Step; 4] = [
    Step { dx: 0, dy: -1, side: Side::Top },
    Step { dx: 1, dy: 0, side: Side::Right },
    Step { dx: 0, dy: 1, side: Side::Bottom },
    Step { dx: -1, dy: 0, side: Side::Left },
];

fn scan<I: Indexer + ?Sized>(cell: &MazeCell, indexer: &I, buf: &mut Vec<usize>) {
    for step in DIRECTIONS {
        if cell.walls.is_closed(step.side) {
            continue;
        }
        if let Some(idx) = indexer.index(cell.i() + step.dx, cell.j() + step.dy) {
            buf.push(idx);
        }
    }
}

/// Cells reachable from `cell` in one move, in scan order.
///
/// Only `cell`'s own wall flags are consulted. Open walls that lead off the
/// grid are skipped. Neither the cell nor the grid is modified.
pub fn neighbors<'a, I: Indexer + ?Sized>(
    cell: &MazeCell,
    grid: &'a MazeGrid,
    indexer: &I,
) -> Vec<&'a MazeCell> {
    let mut buf = Vec::with_capacity(4);
    scan(cell, indexer, &mut buf);
    buf.into_iter().filter_map(|idx| grid.cell(idx)).collect()
}

/// Like [`neighbors`] but returns storage positions.
pub fn neighbor_indices<I: Indexer + ?Sized>(cell: &MazeCell, indexer: &I) -> Vec<usize> {
    let mut buf = Vec::with_capacity(4);
    scan(cell, indexer, &mut buf);
    buf
}

/// Reusable neighbour buffer for search loops.
pub struct Neighbors {
    buf: Vec<usize>,
}

impl Default for Neighbors {
    fn default() -> Self {
        Self::new()
    }
}

impl Neighbors {
    pub fn new() -> Self {
        Self {
            buf: Vec::with_capacity(4),
        }
    }

    /// Positions of the cells reachable from `cell`, in scan order. The
    /// slice is overwritten by the next call.
    pub fn open<I: Indexer + ?Sized>(&mut self, cell: &MazeCell, indexer: &I) -> &[usize] {
        self.buf.clear();
        scan(cell, indexer, &mut self.buf);
        &self.buf
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::RowMajor;
    use mazeviz_core::{Point, Walls};

    fn open_grid(w: i32, h: i32) -> MazeGrid {
        MazeGrid::from_walls(w, h, 10, vec![Walls::OPEN; (w * h) as usize]).unwrap()
    }

    fn coords(cells: &[&MazeCell]) -> Vec<Point> {
        cells.iter().map(|c| c.pos).collect()
    }

    #[test]
    fn table_matches_side_deltas() {
        for (k, step) in DIRECTIONS.iter().enumerate() {
            assert_eq!(step.side.index(), k);
            assert_eq!(Point::new(step.dx, step.dy), step.side.delta());
        }
    }

    #[test]
    fn closed_cell_has_no_neighbors() {
        let g = MazeGrid::new(3, 3, 10).unwrap();
        for c in g.iter() {
            assert!(neighbors(c, &g, &g).is_empty());
        }
    }

    #[test]
    fn open_center_lists_all_four_in_order() {
        let g = open_grid(3, 3);
        let center = g.at(Point::new(1, 1)).unwrap();
        assert_eq!(
            coords(&neighbors(center, &g, &g)),
            vec![
                Point::new(1, 0),
                Point::new(2, 1),
                Point::new(1, 2),
                Point::new(0, 1)
            ]
        );
    }

    #[test]
    fn each_open_side_contributes_exactly_its_neighbor() {
        let g = open_grid(3, 3);
        let center = g.at(Point::new(1, 1)).unwrap();
        for side in Side::ALL {
            let mut cell = center.clone();
            cell.walls = Walls::CLOSED;
            cell.walls.set(side, false);
            let got = neighbors(&cell, &g, &g);
            assert_eq!(coords(&got), vec![center.pos + side.delta()]);
        }
    }

    #[test]
    fn corner_skips_off_grid_sides() {
        let g = open_grid(3, 3);
        let corner = g.at(Point::new(0, 0)).unwrap();
        assert_eq!(
            coords(&neighbors(corner, &g, &g)),
            vec![Point::new(1, 0), Point::new(0, 1)]
        );
        let far = g.at(Point::new(2, 2)).unwrap();
        assert_eq!(
            coords(&neighbors(far, &g, &g)),
            vec![Point::new(2, 1), Point::new(1, 2)]
        );
    }

    #[test]
    fn only_the_queried_cells_walls_count() {
        // (0, 0) is open to the right, (1, 0) keeps its left wall.
        let mut walls = vec![Walls::CLOSED; 2];
        walls[0].set(Side::Right, false);
        let g = MazeGrid::from_walls(2, 1, 10, walls).unwrap();
        assert_eq!(neighbor_indices(g.cell(0).unwrap(), &g), vec![1]);
        assert!(neighbor_indices(g.cell(1).unwrap(), &g).is_empty());
    }

    #[test]
    fn does_not_mutate() {
        let g = open_grid(2, 2);
        let before = g.clone();
        for c in g.iter() {
            let _ = neighbors(c, &g, &g);
        }
        assert_eq!(g, before);
    }

    #[test]
    fn reusable_buffer_is_overwritten() {
        let g = open_grid(3, 1);
        let rm = RowMajor::of(&g);
        let mut nb = Neighbors::new();
        assert_eq!(nb.open(g.cell(1).unwrap(), &rm), &[2, 0]);
        assert_eq!(nb.open(g.cell(0).unwrap(), &rm), &[1]);
    }
}
