//! Winning-combination table.
//!
//! Every way to win on an N×N board, generated once per board size and held
//! immutable by the engine for the game's lifetime. The generation order is
//! the scan order for win detection: rows, columns, first diagonal, second
//! diagonal, 2×2 sub-squares in row-major order, then the four corners.

use tui_tictactoe_types::Coord;

/// An ordered sequence of coordinates that together constitute one winning
/// shape.
pub type WinningCombo = Vec<Coord>;

/// Enumerate every winning shape for a board of the given side length.
///
/// Produces `2N + 2 + (N-1)² + 1` combos: N rows, N columns, both main
/// diagonals, every 2×2 sub-square, and the corner set.
pub fn winning_combos(size: usize) -> Vec<WinningCombo> {
    let mut combos = Vec::with_capacity(2 * size + 2 + (size - 1) * (size - 1) + 1);

    for row in 0..size {
        combos.push((0..size).map(|col| (row, col)).collect());
    }

    for col in 0..size {
        combos.push((0..size).map(|row| (row, col)).collect());
    }

    combos.push((0..size).map(|i| (i, i)).collect());
    combos.push((0..size).map(|i| (i, size - 1 - i)).collect());

    for row in 0..size.saturating_sub(1) {
        for col in 0..size - 1 {
            combos.push(vec![
                (row, col),
                (row, col + 1),
                (row + 1, col),
                (row + 1, col + 1),
            ]);
        }
    }

    combos.push(vec![
        (0, 0),
        (0, size - 1),
        (size - 1, 0),
        (size - 1, size - 1),
    ]);

    combos
}
