use core::fmt;
use std::borrow::Cow;

use grid_util::point::Point;
use itertools::Itertools;
use log::{debug, info};
use petgraph::unionfind::UnionFind;
use smallvec::SmallVec;

use crate::cell::Cell;
use crate::config::GridConfig;

/// Errors raised while constructing a [Grid].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// One of the dimensions is zero.
    EmptyGrid { rows: usize, cols: usize },
    /// The start or finish position lies outside the grid.
    OutOfBounds {
        position: Point,
        rows: usize,
        cols: usize,
    },
    /// Start and finish were given the same position.
    StartIsFinish(Point),
    /// A dimension exceeds what a [Point] coordinate can address.
    TooLarge { rows: usize, cols: usize },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::EmptyGrid { rows, cols } => {
                write!(f, "Grid dimensions {}x{} must both be at least 1", rows, cols)
            }
            GridError::OutOfBounds {
                position,
                rows,
                cols,
            } => write!(
                f,
                "Position (row {}, col {}) is outside the {}x{} grid",
                position.y, position.x, rows, cols
            ),
            GridError::TooLarge { rows, cols } => write!(
                f,
                "Grid dimensions {}x{} exceed the largest addressable size {}",
                rows,
                cols,
                i32::MAX
            ),
            GridError::StartIsFinish(position) => write!(
                f,
                "Start and finish both at (row {}, col {})",
                position.y, position.x
            ),
        }
    }
}

impl std::error::Error for GridError {}

/// [Grid] owns every [Cell] in row-major order. Start and finish are fixed at construction.
/// In addition to the cells it keeps the connected components of the open cells in a
/// [UnionFind] so reachability can be answered without running a search.
#[derive(Clone, Debug)]
pub struct Grid {
    rows: usize,
    cols: usize,
    start: usize,
    finish: usize,
    cells: Vec<Cell>,
    pub components: UnionFind<usize>,
    pub components_dirty: bool,
}

impl Grid {
    /// Builds a wall-free grid with the given start and finish, where `x` is the column and
    /// `y` the row of a position.
    pub fn build(rows: usize, cols: usize, start: Point, finish: Point) -> Result<Grid, GridError> {
        if rows == 0 || cols == 0 {
            return Err(GridError::EmptyGrid { rows, cols });
        }
        if rows > i32::MAX as usize || cols > i32::MAX as usize {
            return Err(GridError::TooLarge { rows, cols });
        }
        for position in [start, finish] {
            if !Self::contains(rows, cols, position) {
                return Err(GridError::OutOfBounds {
                    position,
                    rows,
                    cols,
                });
            }
        }
        if start == finish {
            return Err(GridError::StartIsFinish(start));
        }
        let start_ix = start.y as usize * cols + start.x as usize;
        let finish_ix = finish.y as usize * cols + finish.x as usize;
        let cells = (0..rows)
            .cartesian_product(0..cols)
            .enumerate()
            .map(|(ix, (row, col))| Cell::new(row, col, ix == start_ix, ix == finish_ix))
            .collect::<Vec<_>>();
        let mut grid = Grid {
            rows,
            cols,
            start: start_ix,
            finish: finish_ix,
            cells,
            components: UnionFind::new(rows * cols),
            components_dirty: false,
        };
        grid.generate_components();
        info!(
            "Built {}x{} grid, start at {:?}, finish at {:?}",
            rows, cols, start, finish
        );
        Ok(grid)
    }

    pub fn from_config(config: &GridConfig) -> Result<Grid, GridError> {
        Grid::build(config.rows, config.cols, config.start, config.finish)
    }

    fn contains(rows: usize, cols: usize, p: Point) -> bool {
        p.x >= 0 && p.y >= 0 && (p.y as usize) < rows && (p.x as usize) < cols
    }

    pub fn in_bounds(&self, p: Point) -> bool {
        Self::contains(self.rows, self.cols, p)
    }

    /// Row-major index of a position, [None] when outside the grid.
    pub fn index_of(&self, p: Point) -> Option<usize> {
        self.in_bounds(p)
            .then(|| p.y as usize * self.cols + p.x as usize)
    }

    pub fn point_of(&self, ix: usize) -> Point {
        Point::new((ix % self.cols) as i32, (ix / self.cols) as i32)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }
    pub fn cols(&self) -> usize {
        self.cols
    }
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }
    pub fn cell(&self, p: Point) -> Option<&Cell> {
        self.index_of(p).map(|ix| &self.cells[ix])
    }
    pub(crate) fn cell_at(&self, ix: usize) -> &Cell {
        &self.cells[ix]
    }
    pub(crate) fn cell_at_mut(&mut self, ix: usize) -> &mut Cell {
        &mut self.cells[ix]
    }
    pub fn start(&self) -> Point {
        self.point_of(self.start)
    }
    pub fn finish(&self) -> Point {
        self.point_of(self.finish)
    }
    pub(crate) fn start_ix(&self) -> usize {
        self.start
    }
    pub(crate) fn finish_ix(&self) -> usize {
        self.finish
    }
    /// Whether the last search visited the finish cell.
    pub fn finish_reached(&self) -> bool {
        self.cells[self.finish].is_visited()
    }

    /// Sets the wall flag at a position. Start, finish and positions outside the grid are left
    /// alone. Returns whether the cell changed. Joins newly connected components when a wall is
    /// removed and flags the components as dirty when one is placed, since that may split them.
    pub fn set_wall(&mut self, p: Point, blocked: bool) -> bool {
        let Some(ix) = self.index_of(p) else {
            debug!("Ignoring wall update outside the grid at {:?}", p);
            return false;
        };
        let cell = &self.cells[ix];
        if cell.is_start() || cell.is_finish() || cell.is_wall() == blocked {
            return false;
        }
        self.cells[ix].is_wall = blocked;
        if blocked {
            self.components_dirty = true;
        } else {
            for n in self.neighbor_indices(ix) {
                if !self.cells[n].is_wall() {
                    self.components.union(ix, n);
                }
            }
        }
        true
    }

    /// Flips the wall flag at a position; a no-op on start, finish or outside the grid.
    pub fn toggle_wall(&mut self, p: Point) -> bool {
        match self.cell(p) {
            Some(cell) => {
                let blocked = !cell.is_wall();
                self.set_wall(p, blocked)
            }
            None => false,
        }
    }

    /// Returns a grid identical to this one except for the wall flag at `p`.
    pub fn with_wall_toggled(&self, p: Point) -> Grid {
        let mut grid = self.clone();
        grid.toggle_wall(p);
        grid
    }

    /// Removes every wall and resets the search state.
    pub fn clear_walls(&mut self) {
        for cell in self.cells.iter_mut() {
            cell.is_wall = false;
        }
        self.clean();
        self.generate_components();
    }

    /// Resets distance, visited flag and predecessor of every cell, keeping walls.
    pub fn clean(&mut self) {
        for cell in self.cells.iter_mut() {
            cell.clean();
        }
    }

    /// A copy with the same dimensions and walls, ready to be searched.
    pub fn clean_copy(&self) -> Grid {
        let mut grid = self.clone();
        grid.clean();
        grid
    }

    /// Orthogonal neighbours inside the grid, ordered north, south, west, east.
    pub fn neighbors(&self, p: Point) -> SmallVec<[Point; 4]> {
        match self.index_of(p) {
            Some(ix) => self
                .neighbor_indices(ix)
                .into_iter()
                .map(|n| self.point_of(n))
                .collect(),
            None => SmallVec::new(),
        }
    }

    pub(crate) fn neighbor_indices(&self, ix: usize) -> SmallVec<[usize; 4]> {
        let (row, col) = (ix / self.cols, ix % self.cols);
        let mut neighbors = SmallVec::new();
        if row > 0 {
            neighbors.push(ix - self.cols);
        }
        if row + 1 < self.rows {
            neighbors.push(ix + self.cols);
        }
        if col > 0 {
            neighbors.push(ix - 1);
        }
        if col + 1 < self.cols {
            neighbors.push(ix + 1);
        }
        neighbors
    }

    fn compute_components(&self) -> UnionFind<usize> {
        let mut components = UnionFind::new(self.cells.len());
        for (ix, cell) in self.cells.iter().enumerate() {
            if cell.is_wall() {
                continue;
            }
            // South and east suffice to link every orthogonal pair once.
            let south = ix + self.cols;
            if south < self.cells.len() && !self.cells[south].is_wall() {
                components.union(ix, south);
            }
            if cell.col() + 1 < self.cols && !self.cells[ix + 1].is_wall() {
                components.union(ix, ix + 1);
            }
        }
        components
    }

    /// Generates a new [UnionFind] structure and links up open neighbours to the same components.
    pub fn generate_components(&mut self) {
        debug!("Generating connected components");
        self.components = self.compute_components();
        self.components_dirty = false;
    }

    /// Regenerates the components if they are marked as dirty.
    pub fn update(&mut self) {
        if self.components_dirty {
            self.generate_components();
        }
    }

    /// Retrieves the component id a given position belongs to. Stale while
    /// [components_dirty](Self::components_dirty) is set.
    pub fn get_component(&self, p: Point) -> Option<usize> {
        self.index_of(p).map(|ix| self.components.find(ix))
    }

    /// Checks if two open positions are on the same component. Dirty components are
    /// recomputed for the query without being stored; call [update](Self::update) to cache them.
    pub fn reachable(&self, a: Point, b: Point) -> bool {
        let (Some(a_ix), Some(b_ix)) = (self.index_of(a), self.index_of(b)) else {
            return false;
        };
        if self.cells[a_ix].is_wall() || self.cells[b_ix].is_wall() {
            return false;
        }
        let components = if self.components_dirty {
            Cow::Owned(self.compute_components())
        } else {
            Cow::Borrowed(&self.components)
        };
        components.equiv(a_ix, b_ix)
    }

    /// Checks if two positions are not on the same component.
    pub fn unreachable(&self, a: Point, b: Point) -> bool {
        !self.reachable(a, b)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in self.cells.chunks(self.cols) {
            let line = row
                .iter()
                .map(|cell| {
                    if cell.is_start() {
                        'S'
                    } else if cell.is_finish() {
                        'F'
                    } else if cell.is_wall() {
                        '#'
                    } else if cell.is_visited() {
                        'o'
                    } else {
                        '.'
                    }
                })
                .join("");
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
