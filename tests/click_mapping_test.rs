//! Mouse clicks map to the tile drawn under the pointer.

use tui_maze::core::{Level, Maze};
use tui_maze::term::{MazeView, Viewport};
use tui_maze::types::{GridPos, MazeAction};

fn maze() -> Maze {
    let level = Level::from_rows(
        "grid",
        vec![
            vec![2, 0, 0, 0, 0],
            vec![0, 1, 1, 1, 0],
            vec![0, 0, 0, 0, 3],
        ],
    )
    .unwrap();
    Maze::new(vec![level]).unwrap()
}

#[test]
fn hit_test_matches_rendered_tiles() {
    let maze = maze();
    let view = MazeView::default();
    let vp = Viewport::new(40, 12);
    let layout = view.layout(&maze, vp);

    for y in 0..3 {
        for x in 0..5 {
            let pos = GridPos::new(x, y);
            let (px, py) = layout.cell_origin(pos);
            assert_eq!(view.hit_test(&maze, vp, px, py), Some(pos));
            assert_eq!(view.hit_test(&maze, vp, px + 1, py), Some(pos));
        }
    }
}

#[test]
fn hit_test_misses_border_and_outside() {
    let maze = maze();
    let view = MazeView::default();
    let vp = Viewport::new(12, 5);
    // Frame fills the viewport exactly: border at x=0 and y=0.
    assert_eq!(view.hit_test(&maze, vp, 0, 0), None);
    assert_eq!(view.hit_test(&maze, vp, 0, 1), None);
    assert_eq!(view.hit_test(&maze, vp, 11, 1), None);
    assert_eq!(view.hit_test(&maze, vp, 1, 4), None);
    assert_eq!(view.hit_test(&maze, vp, 50, 50), None);
    assert_eq!(view.hit_test(&maze, vp, 1, 1), Some(GridPos::new(0, 0)));
    assert_eq!(view.hit_test(&maze, vp, 10, 3), Some(GridPos::new(4, 2)));
}

#[test]
fn click_toggles_paint_through_action() {
    let mut maze = maze();
    let view = MazeView::default();
    let vp = Viewport::new(12, 5);

    let pos = view.hit_test(&maze, vp, 4, 2).unwrap();
    assert_eq!(pos, GridPos::new(1, 1));
    assert!(maze.apply_action(MazeAction::PaintAt(pos)));
    assert!(maze.active_level().is_painted(pos));

    let fb = view.render(&maze, vp);
    let painted_bg = fb.get(3, 2).unwrap().style.bg;
    let plain_bg = fb.get(5, 2).unwrap().style.bg;
    assert_ne!(painted_bg, plain_bg);
}
