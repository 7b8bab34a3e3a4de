use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// Mark placed on the board by a player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    #[serde(rename = "x")]
    Cross,
    #[serde(rename = "o")]
    Nought,
}

impl Mark {
    /// List all mark variants
    pub const fn variants() -> [Mark; 2] {
        [Mark::Cross, Mark::Nought]
    }

    pub const fn opposite(&self) -> Self {
        match self {
            Mark::Cross => Mark::Nought,
            Mark::Nought => Mark::Cross,
        }
    }

    pub const fn symbol(&self) -> char {
        match self {
            Mark::Cross => 'X',
            Mark::Nought => 'O',
        }
    }
}

impl Display for Mark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
