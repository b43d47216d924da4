//! Terminal input module.
//!
//! Maps `crossterm` key and mouse events into [`crate::types::MazeAction`]s
//! and screen click points. Turning a click point into a grid cell needs the
//! current layout, so that step lives with the view.

pub mod map;
pub mod mouse;

pub use tui_maze_types as types;

pub use map::{handle_key_event, should_quit};
pub use mouse::{click_point, DragTracker};
