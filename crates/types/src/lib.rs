//! Core types shared across the application
//! This module contains pure data types with no external dependencies

/// Default board dimension (cells per side).
pub const DEFAULT_BOARD_SIZE: usize = 4;

/// Cell on the board (None = empty, Some = occupying player's label)
pub type Cell = Option<char>;

/// Board coordinate as (row, col), zero-based from the top-left corner.
pub type Coord = (usize, usize);

/// One of the two participants in a game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    /// Single-character mark written onto the board (e.g. 'X').
    pub label: char,
    /// Display name used in prompts and end-of-game messages.
    pub name: String,
}

impl Player {
    pub fn new(label: char, name: impl Into<String>) -> Self {
        Self {
            label,
            name: name.into(),
        }
    }
}

/// A requested placement: the target cell plus the mark to write there.
///
/// Moves are immutable once created; replacing a cell's content is how a
/// play is recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub row: usize,
    pub col: usize,
    pub label: char,
}

impl Move {
    pub fn new(row: usize, col: usize, label: char) -> Self {
        Self { row, col, label }
    }
}

/// The classic X/O pairing used by the default binary.
pub fn default_players() -> [Player; 2] {
    [
        Player::new('X', "Player One"),
        Player::new('O', "Player Two"),
    ]
}
