//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the canvas
//! plus the status overlay, and translates keyboard and mouse events into
//! core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Loop Shape
//!
//! One iteration = draw the current frame, block for the next input
//! event, dispatch it through `update()`. There is no animation and no
//! background work, so the loop simply sleeps in `event::read()` between
//! inputs. A resize forces a full clear so the next draw repaints the
//! whole resized surface.

mod event;
mod ui;

use log::{debug, info};
use std::io::stdout;

use crossterm::cursor::{Hide, Show};
use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
};
use crossterm::execute;

use crate::core::action::{Action, Effect, key_action, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::App;
use crate::tui::event::{TuiEvent, next_event};

/// Enables the terminal capabilities the session needs and guarantees
/// they are popped on every exit path, panics included.
struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableMouseCapture, EnableBracketedPaste, Hide)?;
        info!("Terminal modes enabled (mouse, bracketed paste, hidden cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(
            stdout(),
            DisableMouseCapture,
            DisableBracketedPaste,
            Show
        );
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let mut app = App::from_config(&config);

    // Raw mode and the alternate screen; init installs a panic hook that
    // restores the terminal if anything unwinds past this point.
    let mut terminal = ratatui::init();

    // The terminal must be restored whether the loop quits or fails.
    let result =
        TerminalModeGuard::new().and_then(|_guard| event_loop(&mut terminal, &mut app));

    info!("Session ended, restoring terminal");
    ratatui::restore();
    result
}

fn event_loop(terminal: &mut ratatui::DefaultTerminal, app: &mut App) -> std::io::Result<()> {
    loop {
        terminal.draw(|frame| ui::draw_ui(frame, app))?;

        match next_event()? {
            TuiEvent::Resize => {
                // Re-sync: the next draw repaints into the resized buffers.
                terminal.clear()?;
            }
            TuiEvent::ForceQuit => {
                debug!("Force quit");
                if update(app, Action::Quit) == Effect::Quit {
                    return Ok(());
                }
            }
            TuiEvent::Key(key) => {
                if let Some(action) = key_action(key) {
                    debug!("Dispatching {:?}", action);
                    if update(app, action) == Effect::Quit {
                        return Ok(());
                    }
                }
            }
            TuiEvent::Pointer { column, row, primary } => {
                update(app, Action::Pointer { x: column, y: row, paint: primary });
            }
        }
    }
}
