//! TUI Tic-Tac-Toe (workspace facade crate).
//!
//! This package keeps the `tui_tictactoe::{core,input,term,types}` public API
//! stable while the implementation lives in dedicated crates under `crates/`.

pub use tui_tictactoe_core as core;
pub use tui_tictactoe_input as input;
pub use tui_tictactoe_term as term;
pub use tui_tictactoe_types as types;
