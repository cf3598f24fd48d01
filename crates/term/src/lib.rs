//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer for terminal gameplay:
//!
//! - [`game_view`] maps engine state into plain text lines (pure, testable)
//! - [`renderer`] flushes those lines to a real terminal via crossterm
//!
//! Keeping the view pure means `core` stays deterministic and the full
//! screen layout can be asserted in unit tests.

pub mod game_view;
pub mod renderer;

pub use tui_tictactoe_core as core;
pub use tui_tictactoe_types as types;

pub use game_view::GameView;
pub use renderer::TerminalRenderer;
