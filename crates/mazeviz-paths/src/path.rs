use mazeviz_core::{MazeCell, MazeGrid};

/// Rebuild the route that ends at `end` by following parent links.
///
/// Returns storage positions from the root (the first cell without a
/// parent) to `end`. `None` means no path was found and yields an empty
/// route; a cell without a parent yields a route of just that cell.
///
/// The parent chain must be acyclic. A cycle is not detected and makes this
/// loop forever. A parent position outside the grid ends the chain.
pub fn reconstruct_path(grid: &MazeGrid, end: Option<usize>) -> Vec<usize> {
    let mut path = Vec::new();
    let mut cur = end;
    while let Some(ci) = cur {
        let Some(cell) = grid.cell(ci) else {
            log::warn!("parent link to {ci} is outside a grid of {} cells", grid.len());
            break;
        };
        path.push(ci);
        cur = cell.solver.parent;
    }
    path.reverse();
    log::trace!("reconstructed path of {} cells", path.len());
    path
}

/// Resolve positions returned by [`reconstruct_path`] to cells.
pub fn path_cells<'a>(grid: &'a MazeGrid, path: &[usize]) -> Vec<&'a MazeCell> {
    path.iter().filter_map(|&i| grid.cell(i)).collect()
}

/// Flag every cell of `path` as part of the solution.
pub fn mark_path(grid: &mut MazeGrid, path: &[usize]) {
    for &i in path {
        if let Some(cell) = grid.cell_mut(i) {
            cell.solver.in_path = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mazeviz_core::Point;

    /// A 4x1 corridor with parents chained left to right.
    fn corridor() -> MazeGrid {
        let mut g = MazeGrid::new(4, 1, 10).unwrap();
        for i in 1..4 {
            g.cell_mut(i).unwrap().solver.parent = Some(i - 1);
        }
        g
    }

    #[test]
    fn none_is_empty_path() {
        let g = corridor();
        assert!(reconstruct_path(&g, None).is_empty());
    }

    #[test]
    fn root_end_is_single_cell() {
        let g = corridor();
        assert_eq!(reconstruct_path(&g, Some(0)), vec![0]);
    }

    #[test]
    fn chain_of_n_links_gives_n_plus_one_cells() {
        let g = corridor();
        let path = reconstruct_path(&g, Some(3));
        assert_eq!(path, vec![0, 1, 2, 3]);
        let first = g.cell(path[0]).unwrap();
        assert!(first.solver.parent.is_none());
        assert_eq!(*path.last().unwrap(), 3);

        assert_eq!(reconstruct_path(&g, Some(2)).len(), 3);
    }

    #[test]
    fn follows_links_not_storage_order() {
        let mut g = MazeGrid::new(3, 3, 10).unwrap();
        // 8 -> 5 -> 4 -> 1 (root)
        g.cell_mut(8).unwrap().solver.parent = Some(5);
        g.cell_mut(5).unwrap().solver.parent = Some(4);
        g.cell_mut(4).unwrap().solver.parent = Some(1);
        let path = reconstruct_path(&g, Some(8));
        assert_eq!(path, vec![1, 4, 5, 8]);
        let pts: Vec<Point> = path_cells(&g, &path).iter().map(|c| c.pos).collect();
        assert_eq!(
            pts,
            vec![
                Point::new(1, 0),
                Point::new(1, 1),
                Point::new(2, 1),
                Point::new(2, 2)
            ]
        );
    }

    #[test]
    fn dangling_parent_ends_chain() {
        let mut g = MazeGrid::new(2, 1, 10).unwrap();
        g.cell_mut(1).unwrap().solver.parent = Some(99);
        assert_eq!(reconstruct_path(&g, Some(1)), vec![1]);
        assert!(reconstruct_path(&g, Some(42)).is_empty());
    }

    #[test]
    fn mark_path_sets_in_path_only_on_route() {
        let mut g = corridor();
        let path = reconstruct_path(&g, Some(2));
        mark_path(&mut g, &path);
        let flags: Vec<bool> = g.iter().map(|c| c.solver.in_path).collect();
        assert_eq!(flags, vec![true, true, true, false]);
    }
}
