//! Maze core - levels, tile semantics, and viewer state
//!
//! This crate holds everything about a maze that is not terminal I/O:
//!
//! - **Levels**: rectangular tile grids with bounds checks, wall/goal queries,
//!   start-tile discovery, and per-tile paint flags
//! - **Geometry**: mapping screen points to grid cells (click hit-testing)
//! - **Loading**: JSON level documents, plus a built-in set
//! - **Maze**: the active level index and player position
//!
//! # Module Structure
//!
//! - [`level`]: single grid container
//! - [`geometry`]: tile rectangles and click mapping
//! - [`loader`]: JSON parsing and file loading
//! - [`maze`]: level cycling, player movement, action dispatch
//! - [`config`]: environment configuration
//!
//! # Example
//!
//! ```
//! use tui_maze_core::{Level, Maze};
//! use tui_maze_types::{Direction, GridPos, MazeAction};
//!
//! let level = Level::from_rows(
//!     "demo",
//!     vec![
//!         vec![1, 1, 1, 1],
//!         vec![1, 2, 3, 1],
//!         vec![1, 1, 1, 1],
//!     ],
//! )
//! .unwrap();
//! assert_eq!(level.start(), Some(GridPos::new(1, 1)));
//!
//! let mut maze = Maze::new(vec![level]).unwrap();
//! assert!(maze.apply_action(MazeAction::Move(Direction::Right)));
//! assert!(maze.active_level().is_goal(2, 1));
//! assert!(!maze.apply_action(MazeAction::Move(Direction::Right))); // wall
//! ```

pub mod config;
pub mod error;
pub mod geometry;
pub mod hash;
pub mod level;
pub mod loader;
pub mod maze;

pub use tui_maze_types as types;

pub use config::ViewerConfig;
pub use error::LevelError;
pub use geometry::TileGeometry;
pub use level::{Level, MAX_LEVEL_SIDE};
pub use loader::{builtin_levels, load_levels, parse_levels};
pub use maze::Maze;
