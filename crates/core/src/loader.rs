//! JSON level loading.
//!
//! Two document shapes are accepted:
//!
//! ```text
//! {"levels": [{"name": "Corridor", "grid": [[1,1,1],[1,2,1],[1,1,1]]}, ...]}
//! [[[1,1,1],[1,2,1],[1,1,1]], ...]
//! ```
//!
//! Unnamed levels are called `Level N` (1-based).

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use log::info;
use serde::Deserialize;

use crate::error::LevelError;
use crate::level::Level;

const BUILTIN_LEVELS: &str = include_str!("../levels/builtin.json");

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum LevelDocument {
    Named { levels: Vec<LevelDef> },
    Bare(Vec<Vec<Vec<u8>>>),
}

#[derive(Debug, Deserialize)]
struct LevelDef {
    #[serde(default)]
    name: Option<String>,
    grid: Vec<Vec<u8>>,
}

/// Parse a levels document into validated levels.
pub fn parse_levels(json: &str) -> Result<Vec<Level>, LevelError> {
    let doc: LevelDocument = serde_json::from_str(json)?;
    let defs: Vec<LevelDef> = match doc {
        LevelDocument::Named { levels } => levels,
        LevelDocument::Bare(grids) => grids
            .into_iter()
            .map(|grid| LevelDef { name: None, grid })
            .collect(),
    };
    if defs.is_empty() {
        return Err(LevelError::NoLevels);
    }

    defs.into_iter()
        .enumerate()
        .map(|(index, def)| {
            let name = def
                .name
                .filter(|n| !n.trim().is_empty())
                .unwrap_or_else(|| format!("Level {}", index + 1));
            Level::from_rows(name, def.grid).map_err(|e| LevelError::InLevel {
                index,
                cause: Box::new(e),
            })
        })
        .collect()
}

/// Read and parse a levels file.
pub fn load_levels(path: impl AsRef<Path>) -> Result<Vec<Level>> {
    let path = path.as_ref();
    let json = fs::read_to_string(path)
        .with_context(|| format!("reading levels from {}", path.display()))?;
    let levels =
        parse_levels(&json).with_context(|| format!("parsing levels in {}", path.display()))?;
    info!("loaded {} levels from {}", levels.len(), path.display());
    Ok(levels)
}

/// Levels bundled with the binary.
pub fn builtin_levels() -> Result<Vec<Level>, LevelError> {
    let levels = parse_levels(BUILTIN_LEVELS)?;
    info!("loaded {} built-in levels", levels.len());
    Ok(levels)
}
