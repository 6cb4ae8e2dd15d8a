//! Playback schedule for a finished search. The crate never sleeps or renders: a presentation
//! layer walks [AnimationPlan::frames] and applies each frame once its offset has elapsed.
use std::time::Duration;

use grid_util::point::Point;

use crate::config::GridConfig;
use crate::grid::Grid;
use crate::search::SearchResult;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameKind {
    Visited,
    Path,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Frame {
    /// Offset from the start of playback.
    pub at: Duration,
    pub position: Point,
    pub kind: FrameKind,
}

impl Frame {
    /// Whether the cell should be restyled; start and finish keep their own look.
    pub fn decorated(&self, grid: &Grid) -> bool {
        grid.cell(self.position)
            .is_some_and(|cell| !cell.is_start() && !cell.is_finish())
    }
}

#[derive(Clone, Debug, Default)]
pub struct AnimationPlan {
    frames: Vec<Frame>,
    total: Duration,
}

impl AnimationPlan {
    /// Visited frames come first, `visit_delay` apart. Path frames follow once every visited
    /// frame has been shown, `path_delay` apart, and only when the finish was reached.
    pub fn new(result: &SearchResult, config: &GridConfig) -> AnimationPlan {
        let mut frames = result
            .trace()
            .iter()
            .enumerate()
            .map(|(i, &position)| Frame {
                at: config.visit_delay * i as u32,
                position,
                kind: FrameKind::Visited,
            })
            .collect::<Vec<_>>();
        let path_start = config.visit_delay * result.trace().len() as u32;
        let mut total = path_start;
        if let Some(path) = result.path() {
            frames.extend(path.iter().enumerate().map(|(j, &position)| Frame {
                at: path_start + config.path_delay * j as u32,
                position,
                kind: FrameKind::Path,
            }));
            total = path_start + config.path_delay * path.len().saturating_sub(1) as u32;
        }
        AnimationPlan { frames, total }
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    pub fn visited_frames(&self) -> impl Iterator<Item = &Frame> {
        self.frames.iter().filter(|f| f.kind == FrameKind::Visited)
    }

    pub fn path_frames(&self) -> impl Iterator<Item = &Frame> {
        self.frames.iter().filter(|f| f.kind == FrameKind::Path)
    }

    /// Offset at which playback is complete.
    pub fn total_duration(&self) -> Duration {
        self.total
    }

    /// Frames due in the window `[from, to)`, for callers polling on a timer. Consecutive
    /// windows starting at zero hand out every frame exactly once.
    pub fn due(&self, from: Duration, to: Duration) -> impl Iterator<Item = &Frame> {
        self.frames
            .iter()
            .filter(move |f| f.at >= from && f.at < to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{point, search::run};

    fn config() -> GridConfig {
        GridConfig::default()
            .with_dimensions(3, 3)
            .with_start(0, 0)
            .with_finish(2, 2)
    }

    #[test]
    fn visited_then_path() {
        let config = config();
        let grid = Grid::from_config(&config).unwrap();
        let result = run(&grid);
        let plan = AnimationPlan::new(&result, &config);
        assert_eq!(plan.visited_frames().count(), result.trace().len());
        assert_eq!(plan.path_frames().count(), 5);
        let visited = result.trace().len() as u32;
        let first_path = plan.path_frames().next().unwrap();
        assert_eq!(first_path.at, Duration::from_millis(10) * visited);
        assert_eq!(
            plan.total_duration(),
            Duration::from_millis(10) * visited + Duration::from_millis(200)
        );
        assert!(plan.frames().windows(2).all(|w| w[0].at <= w[1].at));
    }

    #[test]
    fn no_path_frames_when_unreached() {
        let config = config();
        let mut grid = Grid::from_config(&config).unwrap();
        grid.set_wall(point(1, 0), true);
        grid.set_wall(point(0, 1), true);
        let plan = AnimationPlan::new(&run(&grid), &config);
        assert_eq!(plan.frames().len(), 1);
        assert_eq!(plan.path_frames().count(), 0);
        assert_eq!(plan.total_duration(), Duration::from_millis(10));
    }

    #[test]
    fn start_and_finish_not_decorated() {
        let config = config();
        let grid = Grid::from_config(&config).unwrap();
        let result = run(&grid);
        let plan = AnimationPlan::new(&result, &config);
        let decorated = plan
            .path_frames()
            .filter(|f| f.decorated(result.grid()))
            .count();
        assert_eq!(decorated, 3);
    }

    #[test]
    fn due_window() {
        let config = config();
        let plan = AnimationPlan::new(&run(&Grid::from_config(&config).unwrap()), &config);
        let due = plan
            .due(Duration::ZERO, Duration::from_millis(20))
            .collect::<Vec<_>>();
        assert_eq!(due.len(), 2);
        assert_eq!(due[0].position, point(0, 0));
    }

    /// Polling back-to-back windows from zero past the end sees each frame once.
    #[test]
    fn polling_covers_every_frame() {
        let config = config();
        let plan = AnimationPlan::new(&run(&Grid::from_config(&config).unwrap()), &config);
        let step = Duration::from_millis(5);
        let mut seen = Vec::new();
        let mut from = Duration::ZERO;
        while from <= plan.total_duration() {
            seen.extend(plan.due(from, from + step).copied());
            from += step;
        }
        assert_eq!(seen.len(), plan.frames().len());
        assert_eq!(seen, plan.frames());
    }
}
