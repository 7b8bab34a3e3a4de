use serde::{Deserialize, Serialize};

use crate::tictactoe::player::PLAYER_COUNT;

/// What happens to the board once a round is won or tied
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResetPolicy {
    /// Keep the finished board until [`Game::reset_game`](crate::tictactoe::Game::reset_game) is called
    #[default]
    Manual,
    /// Start a fresh round as soon as the current one ends
    Auto,
}

/// Session configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Display names, in turn order. The first player marks crosses.
    pub player_names: [String; PLAYER_COUNT],
    pub reset_policy: ResetPolicy,
}

impl GameConfig {
    pub fn with_player_names(
        mut self,
        first: impl Into<String>,
        second: impl Into<String>,
    ) -> Self {
        self.player_names = [first.into(), second.into()];
        self
    }

    pub fn with_reset_policy(mut self, reset_policy: ResetPolicy) -> Self {
        self.reset_policy = reset_policy;
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_names: ["Player 1".to_string(), "Player 2".to_string()],
            reset_policy: ResetPolicy::default(),
        }
    }
}
