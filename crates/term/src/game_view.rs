//! GameView: maps engine state into terminal text lines.
//!
//! This module is pure (no I/O). It can be unit-tested.

use tui_tictactoe_core::GameEngine;
use tui_tictactoe_types::Coord;

/// Renders the game as plain text lines for the terminal backend.
///
/// The layout follows the classic console grid: a quit hint and welcome
/// banner, a status line, a column-index header, and index-labeled rows with
/// separator lines between them. Cells belonging to the winning combo are
/// marked with asterisks.
#[derive(Debug, Default, Clone, Copy)]
pub struct GameView;

impl GameView {
    pub fn new() -> Self {
        Self
    }

    /// Render the full screen for the current engine state.
    pub fn render(&self, engine: &GameEngine) -> Vec<String> {
        let size = engine.board_size();
        let mut lines = Vec::with_capacity(2 * size + 5);

        lines.push("Press 'q' to quit at any time.".to_string());
        lines.push(format!("Welcome to {size}x{size} Tic-Tac-Toe!"));
        lines.push(self.status_line(engine));
        lines.push(self.header(size));
        lines.push(self.separator(size));
        for row in 0..size {
            lines.push(self.row_line(engine, row));
            lines.push(self.separator(size));
        }

        lines
    }

    /// Turn, win, or tie message.
    ///
    /// The turn loop toggles only after a processed non-terminal move, so on
    /// a win the current player is the player who just won.
    fn status_line(&self, engine: &GameEngine) -> String {
        let player = engine.current_player();
        if engine.has_winner() {
            format!("Player {} - {} wins!", player.name, player.label)
        } else if engine.is_tied() {
            "It's a tie!".to_string()
        } else {
            format!("Player {}'s turn", player.label)
        }
    }

    fn header(&self, size: usize) -> String {
        let indices: Vec<String> = (0..size).map(|col| col.to_string()).collect();
        format!("   {}", indices.join("   "))
    }

    fn separator(&self, size: usize) -> String {
        format!("  {}-", "----".repeat(size))
    }

    fn row_line(&self, engine: &GameEngine, row: usize) -> String {
        let size = engine.board_size();
        let mut line = format!("{row} |");
        for col in 0..size {
            let label = engine.board().get(row, col).unwrap_or(' ');
            let mark = if self.in_winner_combo(engine, (row, col)) {
                '*'
            } else {
                ' '
            };
            line.push(mark);
            line.push(label);
            line.push(mark);
            line.push('|');
        }
        line
    }

    fn in_winner_combo(&self, engine: &GameEngine, coord: Coord) -> bool {
        engine
            .winner_combo()
            .map_or(false, |combo| combo.contains(&coord))
    }
}
