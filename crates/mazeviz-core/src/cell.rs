//! The [`MazeCell`] type and its per-solve annotations, [`SolverState`].

use crate::geom::{Point, Range};
use crate::walls::Walls;

/// Annotations written by a search algorithm during one solve pass.
///
/// `parent` is a position in the owning [`MazeGrid`](crate::MazeGrid), not
/// an owning link, so the grid stays the only owner of its cells. Costs are
/// only meaningful to the algorithm that wrote them.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolverState {
    pub visited: bool,
    pub in_frontier: bool,
    pub in_path: bool,
    pub parent: Option<usize>,
    pub distance: f64,
    pub g: f64,
    pub h: f64,
    pub f: f64,
}

impl SolverState {
    /// The state of a cell no solver has touched.
    pub const IDLE: Self = Self {
        visited: false,
        in_frontier: false,
        in_path: false,
        parent: None,
        distance: f64::INFINITY,
        g: f64::INFINITY,
        h: f64::INFINITY,
        f: f64::INFINITY,
    };

    /// Restore every field to its default.
    #[inline]
    pub fn reset(&mut self) {
        *self = Self::IDLE;
    }

    /// Whether every field holds its default.
    pub fn is_idle(&self) -> bool {
        !self.visited
            && !self.in_frontier
            && !self.in_path
            && self.parent.is_none()
            && self.distance == f64::INFINITY
            && self.g == f64::INFINITY
            && self.h == f64::INFINITY
            && self.f == f64::INFINITY
    }
}

impl Default for SolverState {
    #[inline]
    fn default() -> Self {
        Self::IDLE
    }
}

/// A maze cell: coordinates, wall flags, rendering extent and solver state.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MazeCell {
    pub pos: Point,
    pub walls: Walls,
    /// Side length in pixels. Only renderers read it.
    pub size: i32,
    /// Transient; not serialized, and idle after deserializing.
    #[cfg_attr(feature = "serde", serde(skip))]
    pub solver: SolverState,
}

impl MazeCell {
    pub fn new(pos: Point, walls: Walls, size: i32) -> Self {
        Self {
            pos,
            walls,
            size,
            solver: SolverState::IDLE,
        }
    }

    /// Column.
    #[inline]
    pub fn i(&self) -> i32 {
        self.pos.x
    }

    /// Row.
    #[inline]
    pub fn j(&self) -> i32 {
        self.pos.y
    }

    /// Top-left pixel: `(i * size, j * size)`.
    #[inline]
    pub fn origin(&self) -> Point {
        self.pos.scale(self.size)
    }

    /// Pixel rectangle covered by the cell.
    #[inline]
    pub fn rect(&self) -> Range {
        Range::square(self.origin(), self.size)
    }
}
