//! MazeView: maps the active level of a `Maze` into a terminal framebuffer.
//!
//! This module is pure (no I/O). Layout is computed once per frame and shared
//! with click hit-testing, so a click always lands on the tile drawn under it.
//! Levels that do not fit scroll so the player stays on screen.

use crate::core::{Maze, TileGeometry};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{GridPos, Tile, DEFAULT_TILE_H, DEFAULT_TILE_W};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// Width reserved for the HUD panel, including its left gap.
const PANEL_W: u16 = 22;

const BOARD_BG: Rgb = Rgb::new(30, 30, 40);
const PAINT_BG: Rgb = Rgb::new(150, 60, 170);

/// Smallest board width kept beside the HUD before the HUD is dropped.
const MIN_BOARD_W: u16 = 12;

/// Screen layout for one frame.
///
/// Levels larger than the viewport are shown through a window of `cols` by
/// `rows` tiles starting at grid cell `scroll`. `tiles` maps window-local cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Layout {
    frame_x: u16,
    frame_y: u16,
    frame_w: u16,
    frame_h: u16,
    panel_x: Option<u16>,
    scroll: GridPos,
    cols: u16,
    rows: u16,
    tiles: TileGeometry,
}

/// A lightweight terminal renderer for maze levels.
pub struct MazeView {
    /// Tile width in terminal columns.
    tile_w: u16,
    /// Tile height in terminal rows.
    tile_h: u16,
    anchor_y: AnchorY,
}

impl Default for MazeView {
    fn default() -> Self {
        Self::new(DEFAULT_TILE_W, DEFAULT_TILE_H)
    }
}

impl MazeView {
    /// Tile sizes below 1 are raised to 1.
    pub fn new(tile_w: u16, tile_h: u16) -> Self {
        Self {
            tile_w: tile_w.max(1),
            tile_h: tile_h.max(1),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    fn compute_layout(&self, maze: &Maze, viewport: Viewport) -> Layout {
        let level = maze.active_level();
        let unit = TileGeometry::new(0, 0, self.tile_w, self.tile_h);
        let (full_w, _) = unit.extent(level.width(), level.height());

        let show_panel =
            viewport.width >= PANEL_W.saturating_add(full_w.saturating_add(2).min(MIN_BOARD_W));
        let board_w = if show_panel {
            viewport.width - PANEL_W
        } else {
            viewport.width
        };

        let cols = visible_span(level.width(), board_w, self.tile_w);
        let rows = visible_span(level.height(), viewport.height, self.tile_h);
        let player = maze.player();
        let scroll = GridPos::new(
            scroll_start(player.x, cols, level.width()),
            scroll_start(player.y, rows, level.height()),
        );

        let (grid_w, grid_h) = unit.extent(cols, rows);
        let frame_w = grid_w.saturating_add(2);
        let frame_h = grid_h.saturating_add(2);
        let block_w = if show_panel {
            frame_w.saturating_add(PANEL_W)
        } else {
            frame_w
        };

        let frame_x = viewport.width.saturating_sub(block_w) / 2;
        let frame_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(frame_h) / 2,
            AnchorY::Top => 0,
        };

        Layout {
            frame_x,
            frame_y,
            frame_w,
            frame_h,
            panel_x: show_panel.then(|| frame_x.saturating_add(frame_w).saturating_add(2)),
            scroll,
            cols,
            rows,
            tiles: TileGeometry::new(
                frame_x.saturating_add(1),
                frame_y.saturating_add(1),
                self.tile_w,
                self.tile_h,
            ),
        }
    }

    /// Tile geometry of the visible window; its cell (0, 0) is the grid cell at [`Self::scroll`].
    pub fn layout(&self, maze: &Maze, viewport: Viewport) -> TileGeometry {
        self.compute_layout(maze, viewport).tiles
    }

    /// First visible grid cell. Non-zero only when the level does not fit the viewport.
    pub fn scroll(&self, maze: &Maze, viewport: Viewport) -> GridPos {
        self.compute_layout(maze, viewport).scroll
    }

    /// Map a screen click to a tile of the active level.
    pub fn hit_test(&self, maze: &Maze, viewport: Viewport, px: u16, py: u16) -> Option<GridPos> {
        if px >= viewport.width || py >= viewport.height {
            return None;
        }
        let layout = self.compute_layout(maze, viewport);
        let local = layout.tiles.cell_at(px, py, layout.cols, layout.rows)?;
        Some(GridPos::new(
            local.x.saturating_add(layout.scroll.x),
            local.y.saturating_add(layout.scroll.y),
        ))
    }

    /// Render the active level into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames; it is resized to the viewport.
    pub fn render_into(&self, maze: &Maze, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        let level = maze.active_level();
        let layout = self.compute_layout(maze, viewport);

        let border = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
        self.draw_border(
            fb,
            layout.frame_x,
            layout.frame_y,
            layout.frame_w,
            layout.frame_h,
            border,
        );

        for ly in 0..layout.rows {
            for lx in 0..layout.cols {
                let pos = GridPos::new(layout.scroll.x + lx, layout.scroll.y + ly);
                let tile = level.tile_at(pos).unwrap_or_default();
                let (ch, style) = tile_glyph(tile, level.is_painted(pos));
                self.fill_tile(fb, &layout.tiles, GridPos::new(lx, ly), ch, style);
            }
        }

        self.draw_player(fb, &layout, maze);

        if let Some(panel_x) = layout.panel_x {
            self.draw_panel(fb, maze, viewport, panel_x, layout.frame_y);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, maze: &Maze, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(maze, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }
        let right = x.saturating_add(w - 1);
        let bottom = y.saturating_add(h - 1);

        fb.put_char(x, y, '┌', style);
        fb.put_char(right, y, '┐', style);
        fb.put_char(x, bottom, '└', style);
        fb.put_char(right, bottom, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(x.saturating_add(dx), y, '─', style);
            fb.put_char(x.saturating_add(dx), bottom, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y.saturating_add(dy), '│', style);
            fb.put_char(right, y.saturating_add(dy), '│', style);
        }
    }

    fn fill_tile(
        &self,
        fb: &mut FrameBuffer,
        tiles: &TileGeometry,
        pos: GridPos,
        ch: char,
        style: CellStyle,
    ) {
        let (px, py) = tiles.cell_origin(pos);
        fb.fill_rect(px, py, self.tile_w, self.tile_h, ch, style);
    }

    fn draw_player(&self, fb: &mut FrameBuffer, layout: &Layout, maze: &Maze) {
        let pos = maze.player();
        let level = maze.active_level();
        let bg = if level.is_painted(pos) { PAINT_BG } else { BOARD_BG };
        let style = CellStyle::new(Rgb::new(255, 255, 255), bg).bold();

        let (Some(lx), Some(ly)) = (
            pos.x.checked_sub(layout.scroll.x),
            pos.y.checked_sub(layout.scroll.y),
        ) else {
            return;
        };
        let local = GridPos::new(lx, ly);
        self.fill_tile(fb, &layout.tiles, local, ' ', style);
        let (px, py) = layout.tiles.cell_origin(local);
        fb.put_char(
            px.saturating_add((self.tile_w - 1) / 2),
            py.saturating_add((self.tile_h - 1) / 2),
            '@',
            style,
        );
    }

    fn draw_panel(&self, fb: &mut FrameBuffer, maze: &Maze, viewport: Viewport, x: u16, top: u16) {
        let label = CellStyle::new(Rgb::new(220, 220, 220), Rgb::new(0, 0, 0)).bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
        let hint = value.dim();
        let level = maze.active_level();
        let name_w = (viewport.width.saturating_sub(x)) as usize;

        let mut y = top;
        fb.put_str(x, y, "LEVEL", label);
        y = y.saturating_add(1);
        fb.put_u32(x, y, (maze.active_index() + 1) as u32, value);
        let idx_w = digits(maze.active_index() + 1);
        fb.put_char(x.saturating_add(idx_w), y, '/', value);
        fb.put_u32(x.saturating_add(idx_w + 1), y, maze.level_count() as u32, value);
        y = y.saturating_add(1);
        let name: String = level.name().chars().take(name_w).collect();
        fb.put_str(x, y, &name, value);
        y = y.saturating_add(2);

        fb.put_str(x, y, "PLAYER", label);
        y = y.saturating_add(1);
        let player = maze.player();
        fb.put_u32(x, y, player.x as u32, value);
        let px_w = digits(player.x as usize);
        fb.put_char(x.saturating_add(px_w), y, ',', value);
        fb.put_u32(x.saturating_add(px_w + 1), y, player.y as u32, value);
        y = y.saturating_add(1);
        fb.put_str(x, y, maze.player_tile().map_or("-", |t| t.as_str()), value);
        if level.start().is_none() {
            y = y.saturating_add(1);
            fb.put_str(x, y, "no start tile", hint);
        }
        y = y.saturating_add(2);

        fb.put_str(x, y, "PAINTED", label);
        y = y.saturating_add(1);
        fb.put_u32(x, y, level.painted_count() as u32, value);
        y = y.saturating_add(2);

        fb.put_str(x, y, "GOALS", label);
        y = y.saturating_add(1);
        fb.put_u32(x, y, level.goal_count() as u32, value);
        y = y.saturating_add(2);

        for (tile, name) in [
            (Tile::Wall, "wall"),
            (Tile::Start, "start"),
            (Tile::Goal, "goal"),
        ] {
            let (ch, style) = tile_glyph(tile, false);
            fb.put_char(x, y, ch, style);
            fb.put_char(x.saturating_add(1), y, ch, style);
            fb.put_str(x.saturating_add(3), y, name, hint);
            y = y.saturating_add(1);
        }
        let (ch, style) = tile_glyph(Tile::Floor, true);
        fb.put_char(x, y, ch, style);
        fb.put_char(x.saturating_add(1), y, ch, style);
        fb.put_str(x.saturating_add(3), y, "painted", hint);
        y = y.saturating_add(2);

        for line in [
            "arrows/wasd move",
            "space  paint here",
            "click  paint tile",
            "n/b    level",
            "c      clear paint",
            "r      reset",
            "q      quit",
        ] {
            if y >= viewport.height {
                break;
            }
            fb.put_str(x, y, line, hint);
            y = y.saturating_add(1);
        }
    }
}

/// Number of tiles of a `len`-tile axis that fit in `space` cells inside the border.
fn visible_span(len: u16, space: u16, tile: u16) -> u16 {
    len.min((space.saturating_sub(2) / tile).max(1))
}

/// First visible index so that `focus` sits mid-window, clamped to the grid.
fn scroll_start(focus: u16, span: u16, len: u16) -> u16 {
    focus.saturating_sub(span / 2).min(len.saturating_sub(span))
}

/// Glyph and style for a tile, with the paint overlay applied.
fn tile_glyph(tile: Tile, painted: bool) -> (char, CellStyle) {
    let (ch, fg) = match tile {
        Tile::Floor => ('·', Rgb::new(90, 90, 100)),
        Tile::Wall => ('█', Rgb::new(120, 120, 140)),
        Tile::Start => ('▒', Rgb::new(100, 220, 120)),
        Tile::Goal => ('▒', Rgb::new(240, 200, 60)),
    };
    if painted {
        // Solid blocks would hide the paint background.
        let ch = if ch == '█' { '▓' } else { ch };
        return (ch, CellStyle::new(fg, PAINT_BG));
    }
    let style = CellStyle::new(fg, BOARD_BG);
    match tile {
        Tile::Floor => (ch, style.dim()),
        _ => (ch, style),
    }
}

fn digits(mut n: usize) -> u16 {
    let mut d = 1;
    while n >= 10 {
        n /= 10;
        d += 1;
    }
    d
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_counts_decimal_width() {
        assert_eq!(digits(0), 1);
        assert_eq!(digits(9), 1);
        assert_eq!(digits(10), 2);
        assert_eq!(digits(1024), 4);
    }

    #[test]
    fn visible_span_fits_inside_border() {
        assert_eq!(visible_span(4, 10, 2), 4);
        assert_eq!(visible_span(200, 40, 2), 19);
        assert_eq!(visible_span(200, 1, 2), 1);
    }

    #[test]
    fn scroll_start_centers_then_clamps() {
        assert_eq!(scroll_start(0, 9, 100), 0);
        assert_eq!(scroll_start(50, 9, 100), 46);
        assert_eq!(scroll_start(99, 9, 100), 91);
        assert_eq!(scroll_start(3, 5, 5), 0);
    }

    #[test]
    fn painted_walls_let_background_show() {
        let (ch, style) = tile_glyph(Tile::Wall, true);
        assert_eq!(ch, '▓');
        assert_eq!(style.bg, PAINT_BG);
        let (ch, style) = tile_glyph(Tile::Wall, false);
        assert_eq!(ch, '█');
        assert_eq!(style.bg, BOARD_BG);
    }
}
