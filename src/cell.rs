use grid_util::point::Point;

use crate::UNREACHABLE;

/// A single grid position together with its role flags and the search state written by
/// [search](crate::search::search). The predecessor is stored as an index into the owning
/// [Grid](crate::grid::Grid), never as a reference.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cell {
    row: usize,
    col: usize,
    is_start: bool,
    is_finish: bool,
    pub(crate) is_wall: bool,
    pub(crate) distance: u32,
    pub(crate) is_visited: bool,
    pub(crate) previous: Option<usize>,
}

impl Cell {
    pub(crate) fn new(row: usize, col: usize, is_start: bool, is_finish: bool) -> Cell {
        Cell {
            row,
            col,
            is_start,
            is_finish,
            is_wall: false,
            distance: if is_start { 0 } else { UNREACHABLE },
            is_visited: false,
            previous: None,
        }
    }

    /// Resets distance, visited flag and predecessor while keeping the wall flag.
    pub(crate) fn clean(&mut self) {
        self.distance = if self.is_start { 0 } else { UNREACHABLE };
        self.is_visited = false;
        self.previous = None;
    }

    pub fn row(&self) -> usize {
        self.row
    }
    pub fn col(&self) -> usize {
        self.col
    }
    /// Position of the cell, with `x` the column and `y` the row.
    pub fn position(&self) -> Point {
        Point::new(self.col as i32, self.row as i32)
    }
    pub fn is_start(&self) -> bool {
        self.is_start
    }
    pub fn is_finish(&self) -> bool {
        self.is_finish
    }
    pub fn is_wall(&self) -> bool {
        self.is_wall
    }
    pub fn is_visited(&self) -> bool {
        self.is_visited
    }
    /// Raw distance, [UNREACHABLE] if the cell has not been discovered.
    pub fn distance(&self) -> u32 {
        self.distance
    }
    /// Distance from the start, [None] while the cell is unreachable.
    pub fn reached_distance(&self) -> Option<u32> {
        (self.distance != UNREACHABLE).then_some(self.distance)
    }
    /// Row-major index of the predecessor on the shortest discovered path.
    pub fn previous(&self) -> Option<usize> {
        self.previous
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_begins_at_zero() {
        let start = Cell::new(0, 0, true, false);
        let other = Cell::new(0, 1, false, false);
        assert_eq!(start.reached_distance(), Some(0));
        assert_eq!(other.distance(), UNREACHABLE);
        assert_eq!(other.reached_distance(), None);
    }

    #[test]
    fn clean_keeps_wall() {
        let mut cell = Cell::new(2, 3, false, false);
        cell.is_wall = true;
        cell.distance = 4;
        cell.is_visited = true;
        cell.previous = Some(7);
        cell.clean();
        assert!(cell.is_wall());
        assert!(!cell.is_visited());
        assert_eq!(cell.previous(), None);
        assert_eq!(cell.distance(), UNREACHABLE);
        assert_eq!(cell.position(), Point::new(3, 2));
    }
}
