//! Maze-solving support for visualizers.
//!
//! The pieces a maze visualizer needs around an external search algorithm:
//!
//! - **Neighbour resolution** through open walls ([`neighbors`], [`Neighbors`])
//! - **Path reconstruction** from parent links ([`reconstruct_path`])
//! - **Solver-state reset** with a redraw of the maze ([`reset_solver_state`])
//! - **Overlay tints** for explored and solution cells ([`paint_cell`])
//! - **Solve timing** ([`SolveTimer`])
//!
//! Drawing goes through the [`Surface`] trait and coordinate lookups through
//! the [`Indexer`] trait, so the algorithms stay independent of any backend.
//!
//! # Solver-state lifecycle
//!
//! A grid is *idle* while every cell holds [`SolverState::IDLE`]. A search
//! algorithm moves it to *solving* by writing `visited`, `in_frontier`,
//! `parent` and the cost fields. [`reset_solver_state`] is the only way
//! back to idle.
//!
//! [`SolverState::IDLE`]: mazeviz_core::SolverState::IDLE

mod config;
mod neighbors;
mod overlay;
mod path;
mod record;
mod reset;
mod timer;
mod traits;

pub use config::RenderConfig;
pub use neighbors::{DIRECTIONS, Neighbors, Step, neighbor_indices, neighbors};
pub use overlay::{paint_cell, paint_path};
pub use path::{mark_path, path_cells, reconstruct_path};
pub use record::{DrawCmd, DrawLog};
pub use reset::{draw_walls, reset_solver_state, wall_segment};
pub use timer::{SolveTimer, round_seconds};
pub use traits::{Indexer, RowMajor, Surface};
