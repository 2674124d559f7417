use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::BoardParseError;

/// One of the two sides. `O` is the maximizing side for the evaluator and the search.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    #[serde(rename = "X")]
    X,
    #[serde(rename = "O")]
    O,
}

impl Player {
    #[inline]
    pub fn opposite(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    #[inline]
    pub fn maximize_score(self) -> bool {
        matches!(self, Player::O)
    }

    pub fn symbol(self) -> char {
        match self {
            Player::X => 'X',
            Player::O => 'O',
        }
    }

    /// Picks a side uniformly at random.
    pub fn random() -> Self {
        if rand::random::<bool>() {
            Player::X
        } else {
            Player::O
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl FromStr for Player {
    type Err = BoardParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "x" => Ok(Player::X),
            "o" => Ok(Player::O),
            "random" => Ok(Player::random()),
            other => Err(BoardParseError::InvalidPlayer {
                input: other.to_string(),
            }),
        }
    }
}

/// The content of a single square. Serialized as `"X"`, `"O"` or `" "`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    #[serde(rename = " ", alias = "")]
    Empty,
    #[serde(rename = "X")]
    X,
    #[serde(rename = "O")]
    O,
}

impl Cell {
    #[inline]
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::X => Some(Player::X),
            Cell::O => Some(Player::O),
        }
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    pub fn to_char(self) -> char {
        match self.player() {
            Some(player) => player.symbol(),
            None => '.',
        }
    }
}

impl From<Player> for Cell {
    fn from(player: Player) -> Self {
        match player {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }
}
