//! Maze orchestrator: the set of levels, the active level, and the player.
//!
//! The only state beyond the levels themselves is which level is active and
//! where the player stands on it. Paint lives on each `Level`, so switching
//! away and back keeps it.

use std::hash::Hasher;

use log::{debug, info};

use crate::error::LevelError;
use crate::hash::Fnv1aHasher;
use crate::level::Level;
use crate::types::{Direction, GridPos, MazeAction, Tile};

#[derive(Debug, Clone)]
pub struct Maze {
    levels: Vec<Level>,
    active: usize,
    player: GridPos,
}

impl Maze {
    /// Create a maze starting on the first level.
    pub fn new(levels: Vec<Level>) -> Result<Self, LevelError> {
        let first = levels.first().ok_or(LevelError::NoLevels)?;
        let player = first.spawn();
        info!(
            "maze ready: {} levels, starting on '{}'",
            levels.len(),
            first.name()
        );
        Ok(Self {
            levels,
            active: 0,
            player,
        })
    }

    /// Start on `index` instead, clamped to the last level.
    pub fn with_active(mut self, index: usize) -> Self {
        let index = index.min(self.levels.len() - 1);
        self.activate(index);
        self
    }

    pub fn levels(&self) -> &[Level] {
        &self.levels
    }

    pub fn level_count(&self) -> usize {
        self.levels.len()
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn active_level(&self) -> &Level {
        &self.levels[self.active]
    }

    pub fn active_level_mut(&mut self) -> &mut Level {
        &mut self.levels[self.active]
    }

    pub fn player(&self) -> GridPos {
        self.player
    }

    /// Tile under the player.
    pub fn player_tile(&self) -> Option<Tile> {
        self.active_level().tile_at(self.player)
    }

    fn activate(&mut self, index: usize) {
        self.active = index;
        self.player = self.levels[index].spawn();
        debug!(
            "active level {} '{}', player at ({}, {})",
            index,
            self.levels[index].name(),
            self.player.x,
            self.player.y
        );
    }

    /// Cycle forward, wrapping to the first level.
    pub fn next_level(&mut self) {
        let next = (self.active + 1) % self.levels.len();
        self.activate(next);
    }

    /// Cycle backward, wrapping to the last level.
    pub fn prev_level(&mut self) {
        let prev = (self.active + self.levels.len() - 1) % self.levels.len();
        self.activate(prev);
    }

    /// Returns false if `index` is out of range.
    pub fn select_level(&mut self, index: usize) -> bool {
        if index >= self.levels.len() {
            return false;
        }
        self.activate(index);
        true
    }

    pub fn reset_player(&mut self) {
        self.player = self.active_level().spawn();
    }

    /// Step one cell in `dir` if the target is walkable.
    pub fn move_player(&mut self, dir: Direction) -> bool {
        let Some(target) = self.player.step(dir) else {
            return false;
        };
        if !self
            .active_level()
            .is_walkable(target.x as i32, target.y as i32)
        {
            return false;
        }
        self.player = target;
        true
    }

    /// Toggle paint on the active level; None if `pos` is out of bounds.
    pub fn toggle_paint_at(&mut self, pos: GridPos) -> Option<bool> {
        self.active_level_mut().toggle_paint(pos)
    }

    /// Apply an action; returns true when any state changed.
    pub fn apply_action(&mut self, action: MazeAction) -> bool {
        match action {
            MazeAction::Move(dir) => self.move_player(dir),
            MazeAction::TogglePaint => {
                let pos = self.player;
                self.toggle_paint_at(pos).is_some()
            }
            MazeAction::PaintAt(pos) => self.toggle_paint_at(pos).is_some(),
            MazeAction::ClearPaint => {
                let had_paint = self.active_level().painted_count() > 0;
                self.active_level_mut().clear_paint();
                had_paint
            }
            MazeAction::NextLevel => {
                let before = (self.active, self.player);
                self.next_level();
                before != (self.active, self.player)
            }
            MazeAction::PrevLevel => {
                let before = (self.active, self.player);
                self.prev_level();
                before != (self.active, self.player)
            }
            MazeAction::ResetPlayer => {
                let before = self.player;
                self.reset_player();
                before != self.player
            }
        }
    }

    /// Stable hash of everything the view draws.
    pub fn fingerprint(&self) -> u64 {
        let mut h = Fnv1aHasher::new();
        h.write_usize(self.active);
        h.write_u16(self.player.x);
        h.write_u16(self.player.y);
        self.active_level().hash_into(&mut h);
        h.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn levels() -> Vec<Level> {
        vec![
            Level::from_rows("a", vec![vec![1, 1, 1], vec![1, 2, 1], vec![1, 1, 1]]).unwrap(),
            Level::from_rows("b", vec![vec![0, 0], vec![0, 0]]).unwrap(),
        ]
    }

    #[test]
    fn new_rejects_empty_level_list() {
        assert_eq!(Maze::new(Vec::new()).unwrap_err(), LevelError::NoLevels);
    }

    #[test]
    fn with_active_clamps() {
        let maze = Maze::new(levels()).unwrap().with_active(9);
        assert_eq!(maze.active_index(), 1);
        assert_eq!(maze.player(), GridPos::new(1, 1));
    }

    #[test]
    fn fingerprint_changes_with_player() {
        let mut maze = Maze::new(levels()).unwrap().with_active(1);
        let before = maze.fingerprint();
        assert!(maze.move_player(Direction::Left));
        assert_ne!(maze.fingerprint(), before);
    }
}
