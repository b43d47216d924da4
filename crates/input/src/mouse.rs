//! Mouse click and drag handling.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::types::GridPos;

/// Screen (column, row) of a left-button press or drag.
pub fn click_point(event: MouseEvent) -> Option<(u16, u16)> {
    match event.kind {
        MouseEventKind::Down(MouseButton::Left) | MouseEventKind::Drag(MouseButton::Left) => {
            Some((event.column, event.row))
        }
        _ => None,
    }
}

/// Collapses a drag stroke so each tile is toggled once per entry.
///
/// Terminals report a drag event for every screen cell the pointer crosses,
/// and a tile is usually wider than one cell.
#[derive(Debug, Clone, Default)]
pub struct DragTracker {
    last: Option<GridPos>,
}

impl DragTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed a mouse event and the grid cell under it (if any).
    ///
    /// Returns the cell to toggle, or None when the event should be ignored.
    pub fn track(&mut self, event: &MouseEvent, cell: Option<GridPos>) -> Option<GridPos> {
        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.last = cell;
                cell
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                if cell == self.last {
                    return None;
                }
                // Leaving the grid ends the current entry.
                self.last = cell;
                cell
            }
            MouseEventKind::Up(MouseButton::Left) => {
                self.last = None;
                None
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn ev(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn left_press_and_drag_are_clicks() {
        assert_eq!(
            click_point(ev(MouseEventKind::Down(MouseButton::Left), 4, 7)),
            Some((4, 7))
        );
        assert_eq!(
            click_point(ev(MouseEventKind::Drag(MouseButton::Left), 5, 7)),
            Some((5, 7))
        );
    }

    #[test]
    fn other_buttons_and_motion_are_ignored() {
        assert_eq!(click_point(ev(MouseEventKind::Down(MouseButton::Right), 1, 1)), None);
        assert_eq!(click_point(ev(MouseEventKind::Up(MouseButton::Left), 1, 1)), None);
        assert_eq!(click_point(ev(MouseEventKind::Moved, 1, 1)), None);
        assert_eq!(click_point(ev(MouseEventKind::ScrollDown, 1, 1)), None);
    }

    #[test]
    fn drag_within_one_tile_toggles_once() {
        let mut t = DragTracker::new();
        let a = Some(GridPos::new(2, 3));
        let b = Some(GridPos::new(3, 3));

        assert_eq!(t.track(&ev(MouseEventKind::Down(MouseButton::Left), 0, 0), a), a);
        assert_eq!(t.track(&ev(MouseEventKind::Drag(MouseButton::Left), 1, 0), a), None);
        assert_eq!(t.track(&ev(MouseEventKind::Drag(MouseButton::Left), 2, 0), b), b);
        assert_eq!(t.track(&ev(MouseEventKind::Drag(MouseButton::Left), 3, 0), b), None);
        assert_eq!(t.track(&ev(MouseEventKind::Up(MouseButton::Left), 3, 0), b), None);
        assert_eq!(t.track(&ev(MouseEventKind::Down(MouseButton::Left), 3, 0), b), b);
    }

    #[test]
    fn drag_back_onto_grid_toggles_again() {
        let mut t = DragTracker::new();
        let a = Some(GridPos::new(0, 0));
        t.track(&ev(MouseEventKind::Down(MouseButton::Left), 0, 0), a);
        assert_eq!(t.track(&ev(MouseEventKind::Drag(MouseButton::Left), 9, 9), None), None);
        assert_eq!(t.track(&ev(MouseEventKind::Drag(MouseButton::Left), 9, 8), None), None);
        // Re-entering the same tile is a new entry.
        assert_eq!(t.track(&ev(MouseEventKind::Drag(MouseButton::Left), 0, 0), a), a);
        assert_eq!(t.track(&ev(MouseEventKind::Drag(MouseButton::Left), 1, 0), a), None);
    }
}
