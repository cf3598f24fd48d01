//! Game engine - move validation, win/tie detection, and player rotation
//!
//! The engine owns the board and the precomputed winning-combination table.
//! It exposes no fallible operations: callers gate `process_move` on
//! `is_valid_move`, and the input layer guarantees in-range coordinates.

use arrayvec::ArrayVec;

use crate::board::Board;
use crate::combos::{winning_combos, WinningCombo};
use tui_tictactoe_types::{Cell, Move, Player};

/// Complete game state for one match.
///
/// Each instance is independent: it carries its own board, combo table, and
/// player cycle. There is no process-wide state.
#[derive(Debug, Clone)]
pub struct GameEngine {
    board: Board,
    players: [Player; 2],
    /// Index into `players` of the player about to move.
    current: usize,
    combos: Vec<WinningCombo>,
    winner: Option<WinningCombo>,
}

impl GameEngine {
    /// Create a new game for the given player pair and board size.
    ///
    /// The first player in the pair moves first.
    pub fn new(players: [Player; 2], board_size: usize) -> Self {
        Self {
            board: Board::new(board_size),
            players,
            current: 0,
            combos: winning_combos(board_size),
            winner: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn board_size(&self) -> usize {
        self.board.size()
    }

    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    pub fn current_player(&self) -> &Player {
        &self.players[self.current]
    }

    /// The precomputed winning-combination table, in scan order.
    pub fn combos(&self) -> &[WinningCombo] {
        &self.combos
    }

    /// Check whether a move may be played: the game is still undecided and
    /// the target cell is unoccupied.
    ///
    /// Board bounds are not checked here; out-of-range coordinates are a
    /// caller contract violation.
    pub fn is_valid_move(&self, mv: &Move) -> bool {
        self.winner.is_none() && self.board.is_empty(mv.row, mv.col)
    }

    /// Record a move and scan for a winner.
    ///
    /// Writes the cell unconditionally; callers must have checked
    /// `is_valid_move` first. Combos are scanned in a fixed order (rows,
    /// columns, diagonals, 2×2 blocks, corners); the first combo fully
    /// occupied by a single label becomes the winner and scanning stops, so
    /// a move completing several combos at once records only the first.
    pub fn process_move(&mut self, mv: Move) {
        self.board.set(mv.row, mv.col, Some(mv.label));

        for combo in &self.combos {
            // Distinct labels at the combo's coordinates. A combo wins iff
            // exactly one distinct label remains and it is non-empty.
            let mut seen = ArrayVec::<Cell, 4>::new();
            for &(row, col) in combo {
                let label = self.board.get(row, col);
                if !seen.contains(&label) {
                    let _ = seen.try_push(label);
                }
            }

            if seen.len() == 1 && seen[0].is_some() {
                self.winner = Some(combo.clone());
                break;
            }
        }
    }

    pub fn has_winner(&self) -> bool {
        self.winner.is_some()
    }

    /// The combo that decided the game, if any.
    pub fn winner_combo(&self) -> Option<&WinningCombo> {
        self.winner.as_ref()
    }

    /// True iff the board is full and nobody won.
    pub fn is_tied(&self) -> bool {
        self.winner.is_none() && self.board.is_full()
    }

    /// Advance to the other player. Calling twice returns to the original.
    pub fn toggle_current_player(&mut self) {
        self.current = (self.current + 1) % self.players.len();
    }

    /// Restore the board to its empty state and clear the winner.
    ///
    /// The current player and the combo table are left untouched; the caller
    /// decides separately whether to also reset whose turn it is.
    pub fn reset(&mut self) {
        self.board.clear();
        self.winner = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tui_tictactoe_types::default_players;

    fn engine() -> GameEngine {
        GameEngine::new(default_players(), 4)
    }

    #[test]
    fn test_new_engine_state() {
        let game = engine();

        assert_eq!(game.board_size(), 4);
        assert_eq!(game.current_player().label, 'X');
        assert!(!game.has_winner());
        assert!(!game.is_tied());
        assert!(game.winner_combo().is_none());
        assert_eq!(game.combos().len(), 2 * 4 + 2 + 9 + 1);
    }

    #[test]
    fn test_is_valid_move_rejects_occupied_cell() {
        let mut game = engine();
        let mv = Move::new(2, 2, 'X');

        assert!(game.is_valid_move(&mv));
        game.process_move(mv);

        // Occupied, for either label.
        assert!(!game.is_valid_move(&Move::new(2, 2, 'O')));
        assert!(!game.is_valid_move(&Move::new(2, 2, 'X')));
        // Other cells remain playable.
        assert!(game.is_valid_move(&Move::new(0, 0, 'O')));
    }

    #[test]
    fn test_is_valid_move_rejects_everything_after_win() {
        let mut game = engine();
        for col in 0..4 {
            game.process_move(Move::new(0, col, 'X'));
        }
        assert!(game.has_winner());

        // Even empty cells are no longer valid targets.
        assert!(!game.is_valid_move(&Move::new(3, 3, 'O')));
    }

    #[test]
    fn test_row_win_records_that_row() {
        let mut game = engine();
        for col in 0..4 {
            assert!(!game.has_winner());
            game.process_move(Move::new(0, col, 'X'));
        }

        assert!(game.has_winner());
        assert_eq!(
            game.winner_combo(),
            Some(&vec![(0, 0), (0, 1), (0, 2), (0, 3)])
        );
    }

    #[test]
    fn test_column_win() {
        let mut game = engine();
        for row in 0..4 {
            game.process_move(Move::new(row, 2, 'O'));
        }

        assert!(game.has_winner());
        assert_eq!(
            game.winner_combo(),
            Some(&vec![(0, 2), (1, 2), (2, 2), (3, 2)])
        );
    }

    #[test]
    fn test_mixed_combo_does_not_win() {
        let mut game = engine();
        game.process_move(Move::new(0, 0, 'X'));
        game.process_move(Move::new(0, 1, 'O'));
        game.process_move(Move::new(0, 2, 'X'));
        game.process_move(Move::new(0, 3, 'X'));

        assert!(!game.has_winner());
    }

    #[test]
    fn test_double_completion_records_first_in_scan_order() {
        let mut game = engine();

        // Fill row 0 and column 0, leaving their shared corner for last.
        for col in 1..4 {
            game.process_move(Move::new(0, col, 'X'));
        }
        for row in 1..4 {
            game.process_move(Move::new(row, 0, 'X'));
        }
        assert!(!game.has_winner());

        // (0, 0) completes both; rows are scanned before columns.
        game.process_move(Move::new(0, 0, 'X'));
        assert_eq!(
            game.winner_combo(),
            Some(&vec![(0, 0), (0, 1), (0, 2), (0, 3)])
        );
    }

    #[test]
    fn test_toggle_current_player_round_trips() {
        let mut game = engine();
        assert_eq!(game.current_player().label, 'X');

        game.toggle_current_player();
        assert_eq!(game.current_player().label, 'O');

        game.toggle_current_player();
        assert_eq!(game.current_player().label, 'X');
    }

    #[test]
    fn test_reset_clears_board_and_winner_but_not_turn() {
        let mut game = engine();
        game.toggle_current_player();
        for col in 0..4 {
            game.process_move(Move::new(1, col, 'O'));
        }
        assert!(game.has_winner());

        let combos_before = game.combos().to_vec();
        game.reset();

        assert!(!game.has_winner());
        assert!(game.winner_combo().is_none());
        assert!(game.board().cells().iter().all(|cell| cell.is_none()));
        // Turn and combo table survive a reset.
        assert_eq!(game.current_player().label, 'O');
        assert_eq!(game.combos(), combos_before.as_slice());
    }
}
