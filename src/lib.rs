//! TUI maze viewer (workspace facade crate).
//!
//! Re-exports the workspace crates as `tui_maze::{core, input, term, types}`
//! so the binary, tests, and benches share one import path.

pub use tui_maze_core as core;
pub use tui_maze_input as input;
pub use tui_maze_term as term;
pub use tui_maze_types as types;
