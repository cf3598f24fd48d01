//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the board, the winning-combination table, and the
//! game engine. It has **zero dependencies** on UI or I/O, making it:
//!
//! - **Deterministic**: the same move sequence produces the same outcome
//! - **Testable**: comprehensive unit tests for all game rules
//! - **Portable**: can run in any environment (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`board`]: N×N grid storage with cell access and full-board detection
//! - [`combos`]: exhaustive enumeration of every winning shape for a board size
//! - [`game`]: move validation, win/tie detection, and player rotation
//!
//! # Game Rules
//!
//! This variant extends the classic win condition. A player wins by fully
//! occupying any one of:
//!
//! - a row or a column (length N)
//! - either main diagonal (length N)
//! - any 2×2 sub-square ((N−1)² of them)
//! - the four board corners
//!
//! When one move completes several shapes at once, only the first shape in
//! the fixed scan order (rows, columns, diagonals, 2×2 blocks, corners) is
//! recorded as the winner.
//!
//! # Example
//!
//! ```
//! use tui_tictactoe_core::GameEngine;
//! use tui_tictactoe_types::{default_players, Move};
//!
//! let mut game = GameEngine::new(default_players(), 4);
//!
//! let mv = Move::new(0, 0, 'X');
//! assert!(game.is_valid_move(&mv));
//! game.process_move(mv);
//!
//! assert!(!game.has_winner());
//! assert!(!game.is_tied());
//! ```

pub mod board;
pub mod combos;
pub mod game;

pub use tui_tictactoe_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use combos::{winning_combos, WinningCombo};
pub use game::GameEngine;
