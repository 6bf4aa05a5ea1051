//! **mazeviz-core** — core types for maze-solving visualizers.
//!
//! This crate provides the data model shared by the *mazeviz* crates:
//! geometry primitives, per-side wall flags, colours, maze cells with their
//! solver annotations, and the grid that owns them.

pub mod cell;
pub mod error;
pub mod geom;
pub mod grid;
pub mod style;
pub mod text;
pub mod walls;

pub use cell::{MazeCell, SolverState};
pub use error::GridError;
pub use geom::{Point, Range};
pub use grid::MazeGrid;
pub use style::Color;
pub use walls::{Side, Walls};
