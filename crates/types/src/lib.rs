//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (level logic, terminal rendering, input mapping).
//!
//! # Tile Codes
//!
//! Level files store tiles as small integers:
//!
//! | Code | Tile | Meaning |
//! |------|------|---------|
//! | 0 | `Floor` | Open cell |
//! | 1 | `Wall` | Blocks the player |
//! | 2 | `Start` | Spawn point (first one in row-major order wins) |
//! | 3 | `Goal` | Marked target cell |
//!
//! # Coordinates
//!
//! `GridPos { x, y }` where `x` is the column (left to right) and `y` is the
//! row (top to bottom). Grids are stored row-major.
//!
//! # Examples
//!
//! ```
//! use tui_maze_types::{Direction, GridPos, MazeAction, Tile};
//!
//! assert_eq!(Tile::from_code(1), Some(Tile::Wall));
//! assert!(Tile::Goal.is_walkable());
//!
//! let action = MazeAction::from_str("nextLevel").unwrap();
//! assert_eq!(action, MazeAction::NextLevel);
//!
//! assert_eq!(Direction::Left.delta(), (-1, 0));
//! assert_eq!(GridPos::new(3, 4).x, 3);
//! ```

/// Spawn cell used when a level has no start tile.
///
/// Callers clamp to (0, 0) when the level is smaller than this.
pub const FALLBACK_SPAWN: GridPos = GridPos { x: 1, y: 1 };

/// Default tile width in terminal columns (2 compensates for glyph aspect ratio).
pub const DEFAULT_TILE_W: u16 = 2;

/// Default tile height in terminal rows.
pub const DEFAULT_TILE_H: u16 = 1;

/// Input poll timeout for the draw loop.
pub const POLL_MS: u64 = 50;

/// Maximum interval between redraws of an unchanged scene.
pub const STATIC_REDRAW_MS: u64 = 250;


/// A single grid cell's semantic value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tile {
    #[default]
    Floor,
    Wall,
    Start,
    Goal,
}

impl Tile {
    /// Decode an integer tile code from level data
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_maze_types::Tile;
    ///
    /// assert_eq!(Tile::from_code(0), Some(Tile::Floor));
    /// assert_eq!(Tile::from_code(2), Some(Tile::Start));
    /// assert_eq!(Tile::from_code(9), None);
    /// ```
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Tile::Floor),
            1 => Some(Tile::Wall),
            2 => Some(Tile::Start),
            3 => Some(Tile::Goal),
            _ => None,
        }
    }

    /// Integer code as stored in level files
    pub fn code(&self) -> u8 {
        match self {
            Tile::Floor => 0,
            Tile::Wall => 1,
            Tile::Start => 2,
            Tile::Goal => 3,
        }
    }

    /// Lowercase name, used by the HUD
    pub fn as_str(&self) -> &'static str {
        match self {
            Tile::Floor => "floor",
            Tile::Wall => "wall",
            Tile::Start => "start",
            Tile::Goal => "goal",
        }
    }

    pub fn is_wall(&self) -> bool {
        matches!(self, Tile::Wall)
    }

    pub fn is_goal(&self) -> bool {
        matches!(self, Tile::Goal)
    }

    /// Everything except walls can be occupied by the player
    pub fn is_walkable(&self) -> bool {
        !self.is_wall()
    }
}

/// Grid coordinate: `x` is the column, `y` the row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct GridPos {
    pub x: u16,
    pub y: u16,
}

impl GridPos {
    pub const fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }

    /// Neighbor one step in `dir`, or `None` if it would go negative
    pub fn step(&self, dir: Direction) -> Option<Self> {
        let (dx, dy) = dir.delta();
        let x = i32::from(self.x) + dx;
        let y = i32::from(self.y) + dy;
        if x < 0 || y < 0 || x > i32::from(u16::MAX) || y > i32::from(u16::MAX) {
            return None;
        }
        Some(Self::new(x as u16, y as u16))
    }
}

/// Cardinal movement direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Column/row offset for one step
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

/// Viewer actions that modify maze state
///
/// Produced by keyboard and mouse input; applied by the maze orchestrator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MazeAction {
    /// Move the player one cell (blocked by walls and grid edges)
    Move(Direction),
    /// Toggle paint on the tile under the player
    TogglePaint,
    /// Toggle paint on a specific tile (mouse click)
    PaintAt(GridPos),
    /// Clear all paint on the active level
    ClearPaint,
    /// Switch to the next level (wraps)
    NextLevel,
    /// Switch to the previous level (wraps)
    PrevLevel,
    /// Return the player to the level's spawn cell
    ResetPlayer,
}

impl MazeAction {
    /// Parse an action name (case-insensitive)
    ///
    /// `PaintAt` carries a position and has no textual form.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_maze_types::{Direction, MazeAction};
    ///
    /// assert_eq!(MazeAction::from_str("moveUp"), Some(MazeAction::Move(Direction::Up)));
    /// assert_eq!(MazeAction::from_str("togglepaint"), Some(MazeAction::TogglePaint));
    /// assert_eq!(MazeAction::from_str("jump"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveup" => Some(MazeAction::Move(Direction::Up)),
            "movedown" => Some(MazeAction::Move(Direction::Down)),
            "moveleft" => Some(MazeAction::Move(Direction::Left)),
            "moveright" => Some(MazeAction::Move(Direction::Right)),
            "togglepaint" => Some(MazeAction::TogglePaint),
            "clearpaint" => Some(MazeAction::ClearPaint),
            "nextlevel" => Some(MazeAction::NextLevel),
            "prevlevel" => Some(MazeAction::PrevLevel),
            "resetplayer" => Some(MazeAction::ResetPlayer),
            _ => None,
        }
    }

    /// camelCase name, used for logging
    pub fn as_str(&self) -> &'static str {
        match self {
            MazeAction::Move(Direction::Up) => "moveUp",
            MazeAction::Move(Direction::Down) => "moveDown",
            MazeAction::Move(Direction::Left) => "moveLeft",
            MazeAction::Move(Direction::Right) => "moveRight",
            MazeAction::TogglePaint => "togglePaint",
            MazeAction::PaintAt(_) => "paintAt",
            MazeAction::ClearPaint => "clearPaint",
            MazeAction::NextLevel => "nextLevel",
            MazeAction::PrevLevel => "prevLevel",
            MazeAction::ResetPlayer => "resetPlayer",
        }
    }
}
