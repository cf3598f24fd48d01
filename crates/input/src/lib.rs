//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into validated board coordinates or a quit signal;
//! the engine never sees a raw key event or an out-of-range value.

pub mod map;

pub use map::{map_key, should_quit};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

/// A validated input: either an in-range board coordinate or a request to
/// quit the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Coord(usize),
    Quit,
}

/// Block until the player presses a digit inside `[0, board_size)` or a quit
/// key. Unmapped keys are ignored and the wait continues.
pub fn read_coord(board_size: usize) -> Result<InputEvent> {
    loop {
        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if should_quit(key) {
                return Ok(InputEvent::Quit);
            }
            if let Some(value) = map_key(key.code, board_size) {
                return Ok(InputEvent::Coord(value));
            }
        }
    }
}

/// Block until any key press. Used for the end-of-game screen.
pub fn wait_for_key() -> Result<()> {
    loop {
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                return Ok(());
            }
        }
    }
}
