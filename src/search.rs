//! Uniform-cost search over a [Grid]. Every edge has cost 1, so this is Dijkstra's algorithm
//! where each cell's distance is fixed the first time it is discovered.
use std::cmp::Ordering;
use std::collections::BinaryHeap;

use grid_util::point::Point;
use log::{debug, info, warn};

use crate::grid::Grid;
use crate::path::reconstruct_path;

struct FrontierEntry {
    distance: u32,
    index: usize,
}

impl Eq for FrontierEntry {}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.distance == other.distance && self.index == other.index
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed so the max-heap pops the smallest distance, ties going to the
        // smallest row-major index.
        match other.distance.cmp(&self.distance) {
            Ordering::Equal => other.index.cmp(&self.index),
            s => s,
        }
    }
}

/// Searches from the grid's start to its finish, mutating distance, visited flag and
/// predecessor of the cells it touches. Returns the visitation trace: positions in the order
/// they were visited. The finish is the last entry if and only if it was reached.
///
/// The grid is expected to be clean (see [Grid::clean_copy]); the search never resets it.
pub fn search(grid: &mut Grid) -> Vec<Point> {
    if grid.cells().iter().any(|c| c.is_visited()) {
        warn!("Searching a grid with visited cells, was it cleaned?");
    }
    let start = grid.start_ix();
    let finish = grid.finish_ix();
    grid.cell_at_mut(start).distance = 0;

    let mut trace = Vec::new();
    let mut frontier = BinaryHeap::new();
    frontier.push(FrontierEntry {
        distance: 0,
        index: start,
    });
    while let Some(FrontierEntry { distance, index }) = frontier.pop() {
        let cell = grid.cell_at(index);
        if cell.is_visited() || cell.is_wall() {
            continue;
        }
        grid.cell_at_mut(index).is_visited = true;
        trace.push(grid.point_of(index));
        if index == finish {
            info!(
                "Reached finish at distance {} after visiting {} cells",
                distance,
                trace.len()
            );
            return trace;
        }
        for n in grid.neighbor_indices(index) {
            let neighbor = grid.cell_at_mut(n);
            if neighbor.is_visited || neighbor.is_wall {
                continue;
            }
            let candidate = distance + 1;
            if candidate < neighbor.distance {
                neighbor.distance = candidate;
                neighbor.previous = Some(index);
                frontier.push(FrontierEntry {
                    distance: candidate,
                    index: n,
                });
            }
        }
    }
    debug!("Frontier exhausted after visiting {} cells", trace.len());
    info!("{:?} is not reachable from {:?}", grid.finish(), grid.start());
    trace
}

/// Outcome of [run]: the searched grid with its trace and reconstructed path.
#[derive(Clone, Debug)]
pub struct SearchResult {
    grid: Grid,
    trace: Vec<Point>,
    path: Vec<Point>,
}

impl SearchResult {
    pub fn reached(&self) -> bool {
        self.grid.finish_reached()
    }
    pub fn trace(&self) -> &[Point] {
        &self.trace
    }
    /// The shortest path from start to finish, [None] if the finish was not reached.
    pub fn path(&self) -> Option<&[Point]> {
        self.reached().then_some(&self.path[..])
    }
    /// The reconstructed sequence as-is, `[finish]` when the finish was not reached.
    pub fn raw_path(&self) -> &[Point] {
        &self.path
    }
    pub fn grid(&self) -> &Grid {
        &self.grid
    }
    pub fn into_grid(self) -> Grid {
        self.grid
    }
    pub fn visited_count(&self) -> usize {
        self.trace.len()
    }
    pub fn path_length(&self) -> usize {
        self.path().map_or(0, |p| p.len())
    }
}

/// Searches a clean copy of `grid` and reconstructs the path to its finish. The input grid is
/// left untouched, so walls can keep being edited between runs.
pub fn run(grid: &Grid) -> SearchResult {
    let mut grid = grid.clean_copy();
    let trace = search(&mut grid);
    let path = reconstruct_path(&grid, grid.finish());
    SearchResult { grid, trace, path }
}
