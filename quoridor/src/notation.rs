//! Text notation for actions
//!
//! A pawn move is written as its target cell, e.g. `e2`. A fence is written as its cell followed
//! by the orientation letter, e.g. `c4h` or `f7v`. Columns are lettered `a` to `i` and rows are
//! numbered `1` to `9`, counting from the side of player 1.

use crate::fences::FenceError;
use crate::moves::MoveError;
use crate::types::{Coord, CoordParseError, Fence, FenceParseError};

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Error parsing an action
#[derive(Debug, Copy, Clone, Error, Eq, PartialEq)]
pub enum ActionParseError {
    /// Bad string length
    #[error("bad string length")]
    BadLength,
    /// Bad pawn target
    #[error("bad pawn target: {0}")]
    BadTarget(#[from] CoordParseError),
    /// Bad fence
    #[error("bad fence: {0}")]
    BadFence(#[from] FenceParseError),
}

/// Error applying an action to a game
#[derive(Debug, Copy, Clone, Error, Eq, PartialEq)]
pub enum ActionError {
    /// Pawn move is not legal
    #[error("invalid move: {0}")]
    Move(#[from] MoveError),
    /// Fence placement is not legal
    #[error("invalid fence: {0}")]
    Fence(#[from] FenceError),
}

/// Single action of a player
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Action {
    /// Move the pawn onto the given cell
    Move(Coord),
    /// Place the given fence
    Fence(Fence),
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        match *self {
            Action::Move(c) => write!(f, "{}", c),
            Action::Fence(fence) => write!(f, "{}", fence),
        }
    }
}

impl FromStr for Action {
    type Err = ActionParseError;

    fn from_str(s: &str) -> Result<Action, Self::Err> {
        match s.len() {
            2 => Ok(Action::Move(s.parse()?)),
            3 => Ok(Action::Fence(s.parse()?)),
            _ => Err(ActionParseError::BadLength),
        }
    }
}

impl From<Fence> for Action {
    #[inline]
    fn from(fence: Fence) -> Action {
        Action::Fence(fence)
    }
}

impl From<Coord> for Action {
    #[inline]
    fn from(c: Coord) -> Action {
        Action::Move(c)
    }
}
