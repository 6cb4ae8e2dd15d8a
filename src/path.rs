use grid_util::point::Point;
use itertools::Itertools;

use crate::grid::Grid;

/// Follows the predecessor links from `target` back to a cell without predecessor and returns
/// the positions in start-to-target order. After a successful search this is the shortest path
/// from start to finish; if the target was never reached the result is just `[target]`.
/// Positions outside the grid give an empty path.
pub fn reconstruct_path(grid: &Grid, target: Point) -> Vec<Point> {
    let Some(target_ix) = grid.index_of(target) else {
        return Vec::new();
    };
    let mut path: Vec<Point> =
        std::iter::successors(Some(target_ix), |&ix| grid.cell_at(ix).previous())
            .take(grid.cell_count())
            .map(|ix| grid.point_of(ix))
            .collect();
    path.reverse();
    path
}

/// Whether each consecutive pair of positions differs by exactly one row or one column.
pub fn is_contiguous(path: &[Point]) -> bool {
    path.iter()
        .tuple_windows()
        .all(|(a, b)| (a.x - b.x).abs() + (a.y - b.y).abs() == 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{point, search::search};

    #[test]
    fn shortest_path_3x3() {
        let mut grid = Grid::build(3, 3, point(0, 0), point(2, 2)).unwrap();
        search(&mut grid);
        let path = reconstruct_path(&grid, grid.finish());
        assert_eq!(path.len(), 5);
        assert_eq!(path.first(), Some(&point(0, 0)));
        assert_eq!(path.last(), Some(&point(2, 2)));
        assert!(is_contiguous(&path));
        let distance = grid.cell(grid.finish()).unwrap().distance();
        assert_eq!(path.len() as u32, distance + 1);
    }

    #[test]
    fn unreached_target_is_alone() {
        let mut grid = Grid::build(2, 2, point(0, 0), point(1, 1)).unwrap();
        grid.set_wall(point(0, 1), true);
        grid.set_wall(point(1, 0), true);
        search(&mut grid);
        assert_eq!(reconstruct_path(&grid, grid.finish()), vec![point(1, 1)]);
    }

    #[test]
    fn outside_target() {
        let grid = Grid::build(2, 2, point(0, 0), point(1, 1)).unwrap();
        assert!(reconstruct_path(&grid, point(4, 4)).is_empty());
    }

    #[test]
    fn contiguity() {
        assert!(is_contiguous(&[]));
        assert!(is_contiguous(&[point(0, 0), point(0, 1), point(1, 1)]));
        assert!(!is_contiguous(&[point(0, 0), point(1, 1)]));
        assert!(!is_contiguous(&[point(0, 0), point(0, 0)]));
    }
}
