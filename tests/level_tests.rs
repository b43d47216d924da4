//! Level tests - grid construction, bounds, tile queries, paint

use tui_maze::core::{Level, LevelError, MAX_LEVEL_SIDE};
use tui_maze::types::{GridPos, Tile, FALLBACK_SPAWN};

fn boxed() -> Level {
    Level::from_rows(
        "boxed",
        vec![
            vec![1, 1, 1, 1, 1],
            vec![1, 0, 0, 3, 1],
            vec![1, 2, 1, 0, 1],
            vec![1, 1, 1, 1, 1],
        ],
    )
    .unwrap()
}

#[test]
fn test_level_dimensions() {
    let level = boxed();
    assert_eq!(level.width(), 5);
    assert_eq!(level.height(), 4);
    assert_eq!(level.name(), "boxed");
    assert_eq!(level.rows().count(), 4);
    assert!(level.rows().all(|r| r.len() == 5));
}

#[test]
fn test_level_in_bounds() {
    let level = boxed();
    assert!(level.in_bounds(0, 0));
    assert!(level.in_bounds(4, 3));
    assert!(!level.in_bounds(-1, 0));
    assert!(!level.in_bounds(0, -1));
    assert!(!level.in_bounds(5, 0));
    assert!(!level.in_bounds(0, 4));
}

#[test]
fn test_level_tile_lookup() {
    let level = boxed();
    assert_eq!(level.tile(0, 0), Some(Tile::Wall));
    assert_eq!(level.tile(1, 1), Some(Tile::Floor));
    assert_eq!(level.tile(3, 1), Some(Tile::Goal));
    assert_eq!(level.tile(1, 2), Some(Tile::Start));
    assert_eq!(level.tile(5, 1), None);
    assert_eq!(level.tile_at(GridPos::new(3, 1)), Some(Tile::Goal));
}

#[test]
fn test_level_semantic_queries() {
    let level = boxed();
    assert!(level.is_wall(0, 0));
    assert!(!level.is_wall(1, 1));
    // Outside the grid behaves like a wall and is never a goal.
    assert!(level.is_wall(-1, 2));
    assert!(level.is_wall(9, 9));
    assert!(!level.is_goal(-1, 2));

    assert!(level.is_goal(3, 1));
    assert!(!level.is_goal(1, 1));

    assert!(level.is_walkable(1, 2));
    assert!(level.is_walkable(3, 1));
    assert!(!level.is_walkable(2, 2));
    assert!(!level.is_walkable(-1, -1));
    assert_eq!(level.goal_count(), 1);
}

#[test]
fn test_start_discovery() {
    let level = boxed();
    assert_eq!(level.start(), Some(GridPos::new(1, 2)));
    assert_eq!(level.spawn(), GridPos::new(1, 2));
}

#[test]
fn test_first_start_wins() {
    let level = Level::from_rows("two", vec![vec![0, 0, 2], vec![2, 0, 0]]).unwrap();
    assert_eq!(level.start(), Some(GridPos::new(2, 0)));
    // Later starts are plain floor.
    assert_eq!(level.tile(0, 1), Some(Tile::Floor));
    assert!(level.is_walkable(0, 1));
    assert_eq!(level.tile(2, 0), Some(Tile::Start));
}

#[test]
fn test_missing_start_uses_fallback_spawn() {
    let level = Level::from_rows("open", vec![vec![0, 0, 0]; 3]).unwrap();
    assert_eq!(level.start(), None);
    assert_eq!(level.spawn(), FALLBACK_SPAWN);
}

#[test]
fn test_fallback_clamps_on_tiny_levels() {
    let level = Level::from_rows("tiny", vec![vec![0]]).unwrap();
    assert_eq!(level.spawn(), GridPos::new(0, 0));

    let strip = Level::from_rows("strip", vec![vec![0, 0, 0, 0]]).unwrap();
    assert_eq!(strip.spawn(), GridPos::new(0, 0));
}

#[test]
fn test_rejects_empty_grids() {
    assert_eq!(Level::from_rows("e", vec![]), Err(LevelError::Empty));
    assert_eq!(Level::from_rows("e", vec![vec![]]), Err(LevelError::Empty));
}

#[test]
fn test_rejects_ragged_rows() {
    let err = Level::from_rows("r", vec![vec![0, 0, 0], vec![0, 0], vec![0, 0, 0]]).unwrap_err();
    assert_eq!(
        err,
        LevelError::Ragged {
            row: 1,
            expected: 3,
            found: 2
        }
    );
}

#[test]
fn test_rejects_unknown_tile_codes() {
    let err = Level::from_rows("u", vec![vec![0, 0], vec![0, 7]]).unwrap_err();
    assert_eq!(err, LevelError::UnknownTile { x: 1, y: 1, code: 7 });
    assert_eq!(err.to_string(), "unknown tile code 7 at (1, 1)");
}

#[test]
fn test_rejects_oversized_grids() {
    let rows = vec![vec![0u8; MAX_LEVEL_SIDE + 1]; 1];
    assert!(matches!(
        Level::from_rows("big", rows),
        Err(LevelError::TooLarge { .. })
    ));
}

#[test]
fn test_paint_toggle() {
    let mut level = boxed();
    let pos = GridPos::new(2, 1);
    assert!(!level.is_painted(pos));

    assert_eq!(level.toggle_paint(pos), Some(true));
    assert!(level.is_painted(pos));
    assert_eq!(level.painted_count(), 1);

    assert_eq!(level.toggle_paint(pos), Some(false));
    assert!(!level.is_painted(pos));
    assert_eq!(level.painted_count(), 0);
}

#[test]
fn test_paint_walls_and_out_of_bounds() {
    let mut level = boxed();
    assert_eq!(level.toggle_paint(GridPos::new(0, 0)), Some(true));
    assert_eq!(level.toggle_paint(GridPos::new(5, 0)), None);
    assert!(!level.is_painted(GridPos::new(5, 0)));
    assert_eq!(level.painted_count(), 1);
}

#[test]
fn test_clear_paint() {
    let mut level = boxed();
    level.toggle_paint(GridPos::new(1, 1));
    level.toggle_paint(GridPos::new(2, 1));
    level.toggle_paint(GridPos::new(3, 2));
    assert_eq!(level.painted_count(), 3);
    level.clear_paint();
    assert_eq!(level.painted_count(), 0);
}
