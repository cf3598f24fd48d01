//! Terminal tic-tac-toe runner (default binary).
//!
//! Two players share the keyboard. Each coordinate is a single digit key,
//! the renderer redraws the labeled grid after every prompt, and 'q' quits
//! at any point.

use anyhow::Result;

use tui_tictactoe::core::GameEngine;
use tui_tictactoe::input::{self, InputEvent};
use tui_tictactoe::term::{GameView, TerminalRenderer};
use tui_tictactoe::types::{default_players, Move, Player, DEFAULT_BOARD_SIZE};

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let mut engine = GameEngine::new(default_players(), DEFAULT_BOARD_SIZE);
    let view = GameView::new();
    let mut status: Option<String> = None;

    loop {
        // The current player is the one about to move; toggling happens only
        // after a processed, non-terminal move.
        let player = engine.current_player().clone();

        let row = match prompt_coord(term, &view, &engine, status.as_deref(), &player, "row")? {
            InputEvent::Quit => return Ok(()),
            InputEvent::Coord(value) => value,
        };
        status = None;

        let col = match prompt_coord(term, &view, &engine, None, &player, "column")? {
            InputEvent::Quit => return Ok(()),
            InputEvent::Coord(value) => value,
        };

        let mv = Move::new(row, col, player.label);
        if !engine.is_valid_move(&mv) {
            status = Some("Invalid move! Try again.".to_string());
            continue;
        }
        engine.process_move(mv);

        if engine.has_winner() || engine.is_tied() {
            // Final screen: the view itself shows the win/tie message.
            let mut lines = view.render(&engine);
            lines.push("Press any key to exit.".to_string());
            term.draw(&lines)?;
            input::wait_for_key()?;
            return Ok(());
        }

        engine.toggle_current_player();
    }
}

/// Draw the board with an optional status message and a prompt, then block
/// for one validated coordinate (or quit).
fn prompt_coord(
    term: &mut TerminalRenderer,
    view: &GameView,
    engine: &GameEngine,
    status: Option<&str>,
    player: &Player,
    axis: &str,
) -> Result<InputEvent> {
    let mut lines = view.render(engine);
    if let Some(message) = status {
        lines.push(message.to_string());
    }
    lines.push(format!(
        "Player {} - {}, enter {} (0-{}) or 'q' to quit:",
        player.name,
        player.label,
        axis,
        engine.board_size() - 1
    ));
    term.draw(&lines)?;

    input::read_coord(engine.board_size())
}
