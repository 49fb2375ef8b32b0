pub use quoridor_base::markers::Markers;
pub use quoridor_base::types::{
    Coord, CoordError, CoordParseError, Direction, Fence, FenceParseError, Orientation,
    OrientationParseError, Player,
};

use std::fmt;

use thiserror::Error;

/// Error indicating that the acting player is not allowed to act at all
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum TurnError {
    /// The game is already over
    #[error("player {0} has already won")]
    GameOver(Player),
    /// It's the opponent's turn
    #[error("it is not the turn of player {0}")]
    NotYourTurn(Player),
}

/// State of the game
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum GameStatus {
    /// The game continues, and it's the turn of the given player
    InProgress(Player),
    /// The given player reached its goal row. This state is terminal
    Won(Player),
}

impl GameStatus {
    pub fn winner(&self) -> Option<Player> {
        match *self {
            Self::InProgress(_) => None,
            Self::Won(p) => Some(p),
        }
    }

    pub fn is_finished(&self) -> bool {
        matches!(*self, Self::Won(_))
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        match *self {
            Self::InProgress(p) => write!(f, "player {} to move", p),
            Self::Won(p) => write!(f, "player {} wins", p),
        }
    }
}

/// Result of [`Game::place_fence()`](crate::game::Game::place_fence)
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum PlaceOutcome {
    /// The fence is placed
    Placed,
    /// The fence is illegal, nothing changed
    Rejected,
    /// The fence would cut one of the players off its goal row, nothing changed
    FairPlayViolation,
}

impl PlaceOutcome {
    pub fn is_placed(&self) -> bool {
        matches!(*self, Self::Placed)
    }
}
