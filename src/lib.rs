//! Tic-tac-toe game-state engine
//!

/// Board, players and round engine
pub mod tictactoe;

pub use tictactoe::{
    Game, GameError, GameResult, GameStatus, IgnoredMove, MoveOutcome,
    board::{Board, Cell, CellIndex, CellIndexError, mark::Mark},
    config::{GameConfig, ResetPolicy},
    player::{Player, Seat},
};
