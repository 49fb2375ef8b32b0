//! # Quoridor rules engine
//!
//! Two players walk their pawns across a 9×9 board towards the opposite side, and place fences
//! to slow each other down. This crate keeps the game state, checks every action against the
//! rules and detects the winner.
//!
//! # Example
//!
//! ```
//! use quoridor::{Coord, Game, GameStatus, Orientation, PlaceOutcome, Player};
//!
//! let mut game = Game::new();
//! assert!(game.move_pawn(Player::One, Coord::new(4, 1)));
//! assert_eq!(
//!     game.place_fence(Player::Two, Orientation::Horizontal, Coord::new(4, 3)),
//!     PlaceOutcome::Placed,
//! );
//! assert_eq!(game.status(), GameStatus::InProgress(Player::One));
//! ```

pub mod board;
pub mod fences;
pub mod game;
pub mod movegen;
pub mod moves;
pub mod notation;
pub mod path;
pub mod types;

pub use board::{Board, RawBoard};
pub use fences::FenceError;
pub use game::Game;
pub use moves::{Move, MoveError, MoveKind};
pub use notation::{Action, ActionError, ActionParseError};
pub use types::{
    Coord, CoordError, Direction, Fence, GameStatus, Markers, Orientation, PlaceOutcome, Player,
    TurnError,
};
