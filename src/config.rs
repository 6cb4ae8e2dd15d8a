use std::time::Duration;

use grid_util::point::Point;

use crate::point;

pub const DEFAULT_ROWS: usize = 20;
pub const DEFAULT_COLS: usize = 50;
pub const DEFAULT_START: (usize, usize) = (10, 15);
pub const DEFAULT_FINISH: (usize, usize) = (10, 35);
/// Delay between two visited cells during playback.
pub const DEFAULT_VISIT_DELAY: Duration = Duration::from_millis(10);
/// Delay between two path cells during playback.
pub const DEFAULT_PATH_DELAY: Duration = Duration::from_millis(50);

/// Caller-facing options. The delays only feed [AnimationPlan](crate::animation::AnimationPlan)
/// and have no effect on the search itself.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridConfig {
    pub rows: usize,
    pub cols: usize,
    pub start: Point,
    pub finish: Point,
    pub visit_delay: Duration,
    pub path_delay: Duration,
}

impl Default for GridConfig {
    fn default() -> GridConfig {
        GridConfig {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            start: point(DEFAULT_START.0, DEFAULT_START.1),
            finish: point(DEFAULT_FINISH.0, DEFAULT_FINISH.1),
            visit_delay: DEFAULT_VISIT_DELAY,
            path_delay: DEFAULT_PATH_DELAY,
        }
    }
}

impl GridConfig {
    pub fn with_dimensions(mut self, rows: usize, cols: usize) -> GridConfig {
        self.rows = rows;
        self.cols = cols;
        self
    }
    pub fn with_start(mut self, row: usize, col: usize) -> GridConfig {
        self.start = point(row, col);
        self
    }
    pub fn with_finish(mut self, row: usize, col: usize) -> GridConfig {
        self.finish = point(row, col);
        self
    }
    pub fn with_delays(mut self, visit_delay: Duration, path_delay: Duration) -> GridConfig {
        self.visit_delay = visit_delay;
        self.path_delay = path_delay;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_fit_in_grid() {
        let config = GridConfig::default();
        assert!((config.start.y as usize) < config.rows);
        assert!((config.finish.x as usize) < config.cols);
        assert_ne!(config.start, config.finish);
    }

    #[test]
    fn builder_overrides() {
        let config = GridConfig::default()
            .with_dimensions(3, 4)
            .with_start(0, 0)
            .with_finish(2, 3)
            .with_delays(Duration::ZERO, Duration::from_millis(5));
        assert_eq!((config.rows, config.cols), (3, 4));
        assert_eq!(config.finish, Point::new(3, 2));
        assert_eq!(config.visit_delay, Duration::ZERO);
        assert_eq!(config.path_delay, Duration::from_millis(5));
    }

    #[test]
    fn oversized_start_is_out_of_bounds() {
        let config = GridConfig::default().with_start(usize::MAX, 0);
        assert!(matches!(
            crate::Grid::from_config(&config),
            Err(crate::GridError::OutOfBounds { .. })
        ));
    }
}
