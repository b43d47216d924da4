//! Terminal rendering for the maze viewer.
//!
//! A small, game-oriented rendering layer: the view draws into a plain
//! framebuffer, and the renderer flushes only what changed to the terminal.
//! No widget or layout library is involved.
//!
//! Goals:
//! - Keep `core` free of terminal concerns
//! - Share one layout between drawing and mouse hit-testing
//! - Allow control over tile aspect ratio (e.g. 2 columns wide per tile)

pub mod fb;
pub mod maze_view;
pub mod render_throttle;
pub mod renderer;

pub use tui_maze_core as core;
pub use tui_maze_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use maze_view::{AnchorY, MazeView, Viewport};
pub use render_throttle::RenderThrottle;
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
