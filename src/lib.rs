//! # grid_dijkstra
//!
//! Shortest-path search on a 4-connected grid, built for visualizing how the search unfolds.
//! A [Grid] holds cells with a fixed start and finish and caller-placed walls.
//! [search] expands the grid in order of distance from the start
//! ([Dijkstra's algorithm](https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm) with unit
//! edge costs) and returns the cells in the order they were visited; [reconstruct_path] then
//! follows the predecessor links back from the finish. Ties between equally distant cells are
//! broken in row-major order, so traces are reproducible.
//!
//! Rendering and timing are left to the caller; [AnimationPlan] only computes when each
//! visited or path cell should be shown.
//!
//! ```
//! use grid_dijkstra::{point, run, Grid};
//!
//! let mut grid = Grid::build(3, 3, point(0, 0), point(2, 2)).unwrap();
//! grid.toggle_wall(point(1, 1));
//! let result = run(&grid);
//! assert_eq!(result.path().unwrap().len(), 5);
//! ```
pub mod animation;
pub mod cell;
pub mod config;
pub mod grid;
pub mod path;
pub mod search;

use grid_util::point::Point;

pub use crate::animation::{AnimationPlan, Frame, FrameKind};
pub use crate::cell::Cell;
pub use crate::config::GridConfig;
pub use crate::grid::{Grid, GridError};
pub use crate::path::{is_contiguous, reconstruct_path};
pub use crate::search::{run, search, SearchResult};

/// Distance of a cell the search has not discovered.
pub const UNREACHABLE: u32 = u32::MAX;

/// Position of the cell at `row`, `col`. Positions use `x` for the column and `y` for the row.
/// Coordinates beyond `i32::MAX` saturate, which lies outside every [Grid] since dimensions are
/// capped at `i32::MAX`.
pub fn point(row: usize, col: usize) -> Point {
    let clamp = |v: usize| i32::try_from(v).unwrap_or(i32::MAX);
    Point::new(clamp(col), clamp(row))
}
