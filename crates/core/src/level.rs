//! Level module - a single maze grid
//!
//! A level is a rectangular grid of tiles stored as flat row-major arrays,
//! with a parallel array of paint flags toggled by the user.
//! Coordinates: (x, y) where x is the column (left to right), y is the row (top to bottom).
//! The start tile is discovered once, at construction, by a linear scan.

use std::hash::{Hash, Hasher};

use log::{debug, warn};

use crate::error::LevelError;
use crate::hash::Fnv1aHasher;
use crate::types::{GridPos, Tile, FALLBACK_SPAWN};

/// Largest accepted width or height, in tiles
pub const MAX_LEVEL_SIDE: usize = 1024;

/// One maze grid plus its in-memory paint state
#[derive(Debug, Clone, PartialEq)]
pub struct Level {
    name: String,
    width: u16,
    height: u16,
    /// Flat array of tiles, row-major order (y * width + x)
    tiles: Vec<Tile>,
    /// Paint flags, same layout as `tiles`
    painted: Vec<bool>,
    start: Option<GridPos>,
}

impl Level {
    /// Build a level from rows of integer tile codes.
    ///
    /// Every row must have the same length, and every code must be a known tile.
    /// If several start tiles are present, the first in row-major order wins
    /// and the others are stored as floor.
    pub fn from_rows(name: impl Into<String>, rows: Vec<Vec<u8>>) -> Result<Self, LevelError> {
        let name = name.into();
        let height = rows.len();
        let width = rows.first().map(|r| r.len()).unwrap_or(0);
        if height == 0 || width == 0 {
            return Err(LevelError::Empty);
        }
        if width > MAX_LEVEL_SIDE || height > MAX_LEVEL_SIDE {
            return Err(LevelError::TooLarge {
                width,
                height,
                max: MAX_LEVEL_SIDE,
            });
        }

        let mut tiles = Vec::with_capacity(width * height);
        for (y, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(LevelError::Ragged {
                    row: y,
                    expected: width,
                    found: row.len(),
                });
            }
            for (x, &code) in row.iter().enumerate() {
                let tile = Tile::from_code(code).ok_or(LevelError::UnknownTile { x, y, code })?;
                tiles.push(tile);
            }
        }

        let mut level = Self {
            name,
            width: width as u16,
            height: height as u16,
            painted: vec![false; tiles.len()],
            tiles,
            start: None,
        };
        level.start = level.find_start();
        if level.start.is_none() {
            let spawn = level.spawn();
            warn!(
                "level '{}' has no start tile, spawning at ({}, {})",
                level.name, spawn.x, spawn.y
            );
        }
        Ok(level)
    }

    /// Single row-major scan for the first start tile. Later start tiles become floor.
    fn find_start(&mut self) -> Option<GridPos> {
        let mut found = None;
        let mut extra = 0usize;
        for idx in 0..self.tiles.len() {
            if self.tiles[idx] != Tile::Start {
                continue;
            }
            if found.is_none() {
                found = Some(self.pos_of(idx));
            } else {
                self.tiles[idx] = Tile::Floor;
                extra += 1;
            }
        }
        if extra > 0 {
            warn!(
                "level '{}' has {} extra start tiles; using the first",
                self.name, extra
            );
        }
        found
    }

    #[inline(always)]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if !self.in_bounds(x, y) {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    #[inline(always)]
    fn pos_of(&self, idx: usize) -> GridPos {
        let w = self.width as usize;
        GridPos::new((idx % w) as u16, (idx / w) as u16)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Signed so callers can probe neighbors past the edges.
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && x < self.width as i32 && y < self.height as i32
    }

    /// Tile at (x, y), or None if out of bounds
    pub fn tile(&self, x: i32, y: i32) -> Option<Tile> {
        self.index(x, y).map(|idx| self.tiles[idx])
    }

    pub fn tile_at(&self, pos: GridPos) -> Option<Tile> {
        self.tile(pos.x as i32, pos.y as i32)
    }

    /// Out-of-bounds counts as wall.
    pub fn is_wall(&self, x: i32, y: i32) -> bool {
        self.tile(x, y).map_or(true, |t| t.is_wall())
    }

    /// Out-of-bounds is never a goal.
    pub fn is_goal(&self, x: i32, y: i32) -> bool {
        self.tile(x, y).map_or(false, |t| t.is_goal())
    }

    pub fn is_walkable(&self, x: i32, y: i32) -> bool {
        self.tile(x, y).map_or(false, |t| t.is_walkable())
    }

    pub fn start(&self) -> Option<GridPos> {
        self.start
    }

    /// Where the player appears: the start tile, else the fallback cell,
    /// else the top-left corner for levels too small to hold the fallback.
    pub fn spawn(&self) -> GridPos {
        if let Some(start) = self.start {
            return start;
        }
        if self.in_bounds(FALLBACK_SPAWN.x as i32, FALLBACK_SPAWN.y as i32) {
            FALLBACK_SPAWN
        } else {
            GridPos::new(0, 0)
        }
    }

    pub fn goal_count(&self) -> usize {
        self.tiles.iter().filter(|t| t.is_goal()).count()
    }

    pub fn is_painted(&self, pos: GridPos) -> bool {
        self.index(pos.x as i32, pos.y as i32)
            .map_or(false, |idx| self.painted[idx])
    }

    /// Flip the paint flag at `pos`.
    ///
    /// Returns the new state, or None if `pos` is out of bounds.
    pub fn toggle_paint(&mut self, pos: GridPos) -> Option<bool> {
        let idx = self.index(pos.x as i32, pos.y as i32)?;
        self.painted[idx] = !self.painted[idx];
        debug!(
            "level '{}': paint ({}, {}) -> {}",
            self.name, pos.x, pos.y, self.painted[idx]
        );
        Some(self.painted[idx])
    }

    pub fn clear_paint(&mut self) {
        self.painted.fill(false);
    }

    pub fn painted_count(&self) -> usize {
        self.painted.iter().filter(|p| **p).count()
    }

    /// Rows of tiles, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Tile]> + '_ {
        self.tiles.chunks(self.width as usize)
    }

    /// Stable hash of tiles and paint state.
    pub fn fingerprint(&self) -> u64 {
        let mut h = Fnv1aHasher::new();
        self.hash_into(&mut h);
        h.finish()
    }

    pub(crate) fn hash_into<H: Hasher>(&self, h: &mut H) {
        self.width.hash(h);
        self.height.hash(h);
        for tile in &self.tiles {
            h.write_u8(tile.code());
        }
        for &p in &self.painted {
            h.write_u8(p as u8);
        }
    }
}
