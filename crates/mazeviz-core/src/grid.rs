//! The [`MazeGrid`] type: a row-major grid of [`MazeCell`]s.
//!
//! The grid exclusively owns its cells. Positions returned by
//! [`index`](MazeGrid::index) are stable for the lifetime of the grid, which
//! is what lets [`SolverState::parent`](crate::SolverState::parent) refer to
//! another cell without owning it.

use crate::cell::MazeCell;
use crate::error::GridError;
use crate::geom::{Point, Range};
use crate::walls::{Side, Walls};

/// A `width` × `height` maze.
///
/// Deserializing rebuilds the grid through [`from_walls`](MazeGrid::from_walls),
/// so the stored cell positions and sizes are recomputed and a cell count
/// that does not match the dimensions is rejected.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct MazeGrid {
    cells: Vec<MazeCell>,
    width: i32,
    height: i32,
    cell_size: i32,
}

impl MazeGrid {
    /// Create a grid in which every wall of every cell is present.
    pub fn new(width: i32, height: i32, cell_size: i32) -> Result<Self, GridError> {
        check_dimensions(width, height, cell_size)?;
        let walls = vec![Walls::CLOSED; (width as usize) * (height as usize)];
        Self::from_walls(width, height, cell_size, walls)
    }

    /// Create a grid from explicit wall flags in row-major order.
    pub fn from_walls(
        width: i32,
        height: i32,
        cell_size: i32,
        walls: Vec<Walls>,
    ) -> Result<Self, GridError> {
        check_dimensions(width, height, cell_size)?;
        let expected = (width as usize) * (height as usize);
        if walls.len() != expected {
            return Err(GridError::SizeMismatch {
                expected,
                found: walls.len(),
            });
        }
        let bounds = Range::new(0, 0, width, height);
        let cells = bounds
            .iter()
            .zip(walls)
            .map(|(p, w)| MazeCell::new(p, w, cell_size))
            .collect();
        Ok(Self {
            cells,
            width,
            height,
            cell_size,
        })
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Side length of every cell in pixels.
    #[inline]
    pub fn cell_size(&self) -> i32 {
        self.cell_size
    }

    /// The grid rectangle in cell coordinates.
    #[inline]
    pub fn bounds(&self) -> Range {
        Range::new(0, 0, self.width, self.height)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Position of cell `(i, j)` in storage, or `None` outside the grid.
    #[inline]
    pub fn index(&self, i: i32, j: i32) -> Option<usize> {
        if i >= 0 && j >= 0 && i < self.width && j < self.height {
            Some((j as usize) * (self.width as usize) + (i as usize))
        } else {
            None
        }
    }

    #[inline]
    pub fn cell(&self, idx: usize) -> Option<&MazeCell> {
        self.cells.get(idx)
    }

    #[inline]
    pub fn cell_mut(&mut self, idx: usize) -> Option<&mut MazeCell> {
        self.cells.get_mut(idx)
    }

    /// The cell at `p`, or `None` outside the grid.
    #[inline]
    pub fn at(&self, p: Point) -> Option<&MazeCell> {
        self.index(p.x, p.y).and_then(|i| self.cells.get(i))
    }

    #[inline]
    pub fn at_mut(&mut self, p: Point) -> Option<&mut MazeCell> {
        let idx = self.index(p.x, p.y)?;
        self.cells.get_mut(idx)
    }

    #[inline]
    pub fn cells(&self) -> &[MazeCell] {
        &self.cells
    }

    /// Row-major iterator over the cells.
    pub fn iter(&self) -> std::slice::Iter<'_, MazeCell> {
        self.cells.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, MazeCell> {
        self.cells.iter_mut()
    }

    /// Remove the wall on `side` of the cell at `p` together with the facing
    /// wall of its neighbour. Returns `false` if either cell is outside the
    /// grid, leaving the grid unchanged.
    pub fn open_between(&mut self, p: Point, side: Side) -> bool {
        let q = p + side.delta();
        let (Some(a), Some(b)) = (self.index(p.x, p.y), self.index(q.x, q.y)) else {
            return false;
        };
        if a.max(b) >= self.cells.len() {
            return false;
        }
        self.cells[a].walls.set(side, false);
        self.cells[b].walls.set(side.opposite(), false);
        true
    }

    /// Whether no cell carries solver annotations.
    pub fn is_idle(&self) -> bool {
        self.cells.iter().all(|c| c.solver.is_idle())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for MazeGrid {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(serde::Deserialize)]
        struct Raw {
            cells: Vec<MazeCell>,
            width: i32,
            height: i32,
            cell_size: i32,
        }

        let raw = Raw::deserialize(deserializer)?;
        let walls = raw.cells.iter().map(|c| c.walls).collect();
        MazeGrid::from_walls(raw.width, raw.height, raw.cell_size, walls)
            .map_err(serde::de::Error::custom)
    }
}

fn check_dimensions(width: i32, height: i32, cell_size: i32) -> Result<(), GridError> {
    if width <= 0 || height <= 0 || cell_size <= 0 {
        return Err(GridError::InvalidDimensions {
            width,
            height,
            cell_size,
        });
    }
    Ok(())
}
