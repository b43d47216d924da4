//! Terminal maze viewer (default binary).
//!
//! Loads levels (a JSON file or the built-in set), then runs a draw loop:
//! keyboard moves the player and switches levels, mouse clicks toggle paint.
//! Rendering goes through the framebuffer renderer; the scene is redrawn only
//! when it changes.
//!
//! Usage: `tui-maze [LEVELS.json]`. See `ViewerConfig` for environment variables.

use std::fs::OpenOptions;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use log::{debug, info};

use tui_maze::core::{builtin_levels, load_levels, Maze, ViewerConfig};
use tui_maze::input::{click_point, handle_key_event, should_quit, DragTracker};
use tui_maze::term::{FrameBuffer, MazeView, RenderThrottle, TerminalRenderer, Viewport};
use tui_maze::types::{MazeAction, POLL_MS, STATIC_REDRAW_MS};

fn main() -> Result<()> {
    let config = ViewerConfig::from_env().with_args(std::env::args().skip(1));
    init_logging(&config)?;

    let levels = match &config.levels_path {
        Some(path) => load_levels(path)?,
        None => builtin_levels().context("built-in levels")?,
    };
    let maze = Maze::new(levels)?.with_active(config.start_level);

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, maze, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    info!("viewer exiting");
    result
}

/// Logs go to a file: the terminal belongs to the viewer.
fn init_logging(config: &ViewerConfig) -> Result<()> {
    let Some(path) = &config.log_path else {
        return Ok(());
    };
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening log file {}", path.display()))?;
    env_logger::Builder::new()
        .parse_filters(&config.log_filter)
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

fn run(term: &mut TerminalRenderer, mut maze: Maze, config: &ViewerConfig) -> Result<()> {
    let view = MazeView::new(config.tile_w, config.tile_h);
    let mut fb = FrameBuffer::new(0, 0);
    let mut throttle = RenderThrottle::new(STATIC_REDRAW_MS);
    let mut drag = DragTracker::new();
    let started = Instant::now();
    let poll = Duration::from_millis(POLL_MS);

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let viewport = Viewport::new(w, h);

        let now_ms = started.elapsed().as_millis() as u64;
        if throttle.should_render(now_ms, maze.fingerprint()) {
            view.render_into(&maze, viewport, &mut fb);
            term.draw_swap(&mut fb)?;
        }

        if !event::poll(poll)? {
            continue;
        }

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if should_quit(key) {
                    return Ok(());
                }
                if let Some(action) = handle_key_event(key) {
                    let changed = maze.apply_action(action);
                    debug!("{} changed={}", action.as_str(), changed);
                }
            }
            Event::Mouse(mouse) => {
                let cell = click_point(mouse)
                    .and_then(|(px, py)| view.hit_test(&maze, viewport, px, py));
                if let Some(pos) = drag.track(&mouse, cell) {
                    maze.apply_action(MazeAction::PaintAt(pos));
                }
            }
            Event::Resize(_, _) => {
                term.invalidate();
                throttle.reset();
            }
            _ => {}
        }
    }
}
