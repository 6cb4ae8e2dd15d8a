use grid_dijkstra::{point, run, AnimationPlan, FrameKind, Grid, GridConfig};

// In this example a path is found on a 5x7 grid with shape
//  _______
// |S  #   |
// |   #   |
// |   #  F|
// |       |
// |   #   |
//  _______
// where
// - # marks a wall
// - S marks the start
// - F marks the finish
//
// Cells have a 4-neighborhood

fn main() {
    let config = GridConfig::default()
        .with_dimensions(5, 7)
        .with_start(0, 0)
        .with_finish(2, 6);
    let mut grid = Grid::from_config(&config).unwrap();
    for row in [0, 1, 2, 4] {
        grid.toggle_wall(point(row, 3));
    }
    println!("{}", grid);
    let result = run(&grid);
    println!("Visited {} cells:\n{}", result.visited_count(), result.grid());
    match result.path() {
        Some(path) => {
            println!("Path:");
            for p in path {
                println!("{:?}", p);
            }
        }
        None => println!("Finish is unreachable"),
    }
    let plan = AnimationPlan::new(&result, &config);
    for frame in plan.frames().iter().filter(|f| f.decorated(result.grid())) {
        let label = match frame.kind {
            FrameKind::Visited => "visit",
            FrameKind::Path => "path",
        };
        println!("{:>6?} {} {:?}", frame.at, label, frame.position);
    }
    println!("Playback takes {:?}", plan.total_duration());
}
