//! Viewer configuration from environment variables.
//!
//! - `MAZE_LEVELS_PATH`: JSON levels file (built-in levels when unset)
//! - `MAZE_START_LEVEL`: initial level index (clamped to the level count)
//! - `MAZE_TILE_W` / `MAZE_TILE_H`: tile size in terminal cells (minimum 1)
//! - `MAZE_LOG_PATH`: log file; logging is off when unset
//! - `MAZE_LOG`: log filter (default `info`)

use std::env;
use std::path::PathBuf;

use crate::types::{DEFAULT_TILE_H, DEFAULT_TILE_W};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewerConfig {
    pub levels_path: Option<PathBuf>,
    pub start_level: usize,
    pub tile_w: u16,
    pub tile_h: u16,
    pub log_path: Option<PathBuf>,
    pub log_filter: String,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            levels_path: None,
            start_level: 0,
            tile_w: DEFAULT_TILE_W,
            tile_h: DEFAULT_TILE_H,
            log_path: None,
            log_filter: "info".to_string(),
        }
    }
}

impl ViewerConfig {
    /// Read from the process environment; unparsable values fall back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`ViewerConfig::from_env`] with an injectable lookup, for tests.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let path = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .and_then(|s| if s.is_empty() { None } else { Some(PathBuf::from(s)) })
        };
        let tile = |key: &str, default: u16| {
            lookup(key)
                .and_then(|s| s.trim().parse::<u16>().ok())
                .unwrap_or(default)
                .max(1)
        };

        let start_level = lookup("MAZE_START_LEVEL")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.start_level);

        let log_filter = lookup("MAZE_LOG")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or(defaults.log_filter);

        Self {
            levels_path: path("MAZE_LEVELS_PATH"),
            start_level,
            tile_w: tile("MAZE_TILE_W", defaults.tile_w),
            tile_h: tile("MAZE_TILE_H", defaults.tile_h),
            log_path: path("MAZE_LOG_PATH"),
            log_filter,
        }
    }

    /// A positional levels path given on the command line wins over the environment.
    ///
    /// Arguments starting with `-` are options, not paths, and are skipped.
    pub fn with_args(mut self, mut args: impl Iterator<Item = String>) -> Self {
        if let Some(arg) = args.find(|a| !a.trim().is_empty() && !a.starts_with('-')) {
            self.levels_path = Some(PathBuf::from(arg));
        }
        self
    }
}
