//! Key mapping from terminal events to maze actions.

use crate::types::{Direction, MazeAction};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to maze actions.
pub fn handle_key_event(key: KeyEvent) -> Option<MazeAction> {
    match key.code {
        // Movement
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::Char('a') | KeyCode::Char('A') => {
            Some(MazeAction::Move(Direction::Left))
        }
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') | KeyCode::Char('d') | KeyCode::Char('D') => {
            Some(MazeAction::Move(Direction::Right))
        }
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') | KeyCode::Char('w') | KeyCode::Char('W') => {
            Some(MazeAction::Move(Direction::Up))
        }
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') | KeyCode::Char('s') | KeyCode::Char('S') => {
            Some(MazeAction::Move(Direction::Down))
        }

        // Paint
        KeyCode::Char(' ') | KeyCode::Enter => Some(MazeAction::TogglePaint),
        KeyCode::Char('c') | KeyCode::Char('C') if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(MazeAction::ClearPaint)
        }

        // Levels
        KeyCode::Tab | KeyCode::Char('n') | KeyCode::Char('N') => Some(MazeAction::NextLevel),
        KeyCode::BackTab | KeyCode::Char('b') | KeyCode::Char('B') => Some(MazeAction::PrevLevel),

        KeyCode::Char('r') | KeyCode::Char('R') => Some(MazeAction::ResetPlayer),

        _ => None,
    }
}

/// Check if key should quit the viewer.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
