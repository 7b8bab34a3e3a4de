//! Tic-Tac-Toe
//! Round engine for a two-player 3x3 game: turn order, win/tie detection and round resets

use std::fmt::Display;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// 3x3 board
pub mod board;

/// Session configuration
pub mod config;

/// Players and seats
pub mod player;

use board::{Board, CellIndex, CellIndexError, mark::Mark};
use config::{GameConfig, ResetPolicy};
use player::{PLAYER_COUNT, Player, Seat};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "type")]
pub enum GameResult {
    Victory { winner: Seat },
    Draw,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "state")]
pub enum GameStatus {
    /// Round in progress, `seat` is to move
    Playing { seat: Seat },
    /// Round over: no move is accepted until a reset
    Finished { result: GameResult },
}

impl GameStatus {
    pub fn is_finished(&self) -> bool {
        matches!(self, GameStatus::Finished { .. })
    }
}

/// Errors that can occur when submitting a move
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid move: {0}")]
    InvalidIndex(#[from] CellIndexError),
}

/// Reason a move left the game untouched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "reason")]
pub enum IgnoredMove {
    /// Target cell already holds a mark
    Occupied { index: CellIndex },
    /// Round already won or tied
    GameOver,
}

/// What a move did to the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "outcome")]
pub enum MoveOutcome {
    /// The mark was placed, `status` is the status right after the move
    Applied { index: CellIndex, status: GameStatus },
    /// Nothing changed
    Ignored(IgnoredMove),
}

#[derive(Debug, Clone, Serialize)]
pub struct Game {
    /// Board state
    board: Board,
    /// Players, in turn order
    players: [Player; PLAYER_COUNT],
    /// Player to move, or the one who made the last move once the round is over
    active: Seat,
    /// Round status
    status: GameStatus,
    /// Moves accepted in the current round
    turns: usize,
    /// Result of the last finished round
    last_result: Option<GameResult>,
    reset_policy: ResetPolicy,
}

impl Game {
    pub fn new(config: GameConfig) -> Self {
        let GameConfig {
            player_names: [first, second],
            reset_policy,
        } = config;
        Self {
            board: Board::new(),
            // Cross starts
            players: [
                Player::new(first, Mark::Cross),
                Player::new(second, Mark::Nought),
            ],
            active: Seat::First,
            status: GameStatus::Playing { seat: Seat::First },
            turns: 0,
            last_result: None,
            reset_policy,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn players(&self) -> &[Player; PLAYER_COUNT] {
        &self.players
    }

    pub fn player(&self, seat: Seat) -> &Player {
        &self.players[seat as usize]
    }

    /// Current turn holder. Once the round is over, the player who made the last move.
    pub fn active_player(&self) -> &Player {
        self.player(self.active)
    }

    pub fn active_seat(&self) -> Seat {
        self.active
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_game_over(&self) -> bool {
        self.status.is_finished()
    }

    pub fn turns(&self) -> usize {
        self.turns
    }

    /// Result of the most recently finished round, kept across resets
    pub fn last_result(&self) -> Option<GameResult> {
        self.last_result
    }

    /// Winner of the current round, if it has been won
    pub fn winner(&self) -> Option<&Player> {
        match self.status {
            GameStatus::Finished {
                result: GameResult::Victory { winner },
            } => Some(self.player(winner)),
            _ => None,
        }
    }

    /// Cells the active player may mark. Empty once the round is over.
    pub fn available_moves(&self) -> Vec<CellIndex> {
        if self.is_game_over() {
            Vec::new()
        } else {
            self.board.empty_cells().collect()
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

impl Game {
    /// Submit a move for the active player at a raw cell index (0-8)
    ///
    /// Out of range indices are rejected with [`GameError::InvalidIndex`] and leave the game untouched.
    /// Moves on an occupied cell or after the round is over are not errors: they are ignored.
    pub fn apply_move(&mut self, index: usize) -> Result<MoveOutcome, GameError> {
        let index = CellIndex::new(index)?;
        Ok(self.play(index))
    }

    /// Submit a move for the active player
    pub fn play(&mut self, index: CellIndex) -> MoveOutcome {
        if self.is_game_over() {
            log::warn!("[Game] Move at {index} ignored: round is over");
            return MoveOutcome::Ignored(IgnoredMove::GameOver);
        }
        if !self.board.is_empty(index) {
            log::warn!("[Game] Move at {index} ignored: cell is occupied");
            return MoveOutcome::Ignored(IgnoredMove::Occupied { index });
        }

        let mark = self.active_player().mark();
        self.board.place(index, mark);
        self.turns += 1;
        log::debug!(
            "[Game] {player} marked cell {index} (turn {turns})",
            player = self.active_player(),
            turns = self.turns
        );

        self.status = self.next_status(mark);
        let status = self.status;

        if let GameStatus::Finished { result } = status {
            self.last_result = Some(result);
            match result {
                GameResult::Victory { .. } => {
                    log::info!("[Game] {} wins after {} moves", self.active_player(), self.turns)
                }
                GameResult::Draw => log::info!("[Game] Draw after {} moves", self.turns),
            }
            log::debug!("[Game] Final board:\n{}", self.board);
            if self.reset_policy == ResetPolicy::Auto {
                self.reset_game();
            }
        }

        MoveOutcome::Applied { index, status }
    }

    /// Status following a move by the active player with `mark`.
    /// Only the mover can have completed a line, so only their mark is checked.
    fn next_status(&mut self, mark: Mark) -> GameStatus {
        if self.board.has_line(mark) {
            GameStatus::Finished {
                result: GameResult::Victory {
                    winner: self.active,
                },
            }
        } else if self.board.is_full() {
            GameStatus::Finished {
                result: GameResult::Draw,
            }
        } else {
            self.active = self.active.opponent();
            GameStatus::Playing { seat: self.active }
        }
    }

    /// Start a new round: empty board, first player to move.
    /// Abandons the current round if it is still in progress.
    pub fn reset_game(&mut self) {
        log::trace!("[Game] Resetting round");
        self.board.reset();
        self.active = Seat::First;
        self.status = GameStatus::Playing { seat: Seat::First };
        self.turns = 0;
    }
}

impl Display for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.board)?;
        match self.status {
            GameStatus::Playing { seat } => {
                write!(f, "{}'s turn | Turn: {}", self.player(seat), self.turns + 1)
            }
            GameStatus::Finished {
                result: GameResult::Victory { winner },
            } => write!(f, "Game over! {} wins!", self.player(winner)),
            GameStatus::Finished {
                result: GameResult::Draw,
            } => write!(f, "Game over! It's a draw!"),
        }
    }
}
