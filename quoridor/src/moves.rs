//! Pawn moves
//!
//! Validation follows a reduced rule set:
//!
//! - a pawn steps one cell orthogonally, unless a fence or the opponent's pawn is in the way;
//! - a pawn jumps straight over the opponent's pawn, but only vertically. Horizontal straight
//!   jumps are never allowed. Only the edge behind the opponent can block a jump;
//! - a pawn jumps diagonally around the opponent's pawn only if the opponent stands directly
//!   above or below it, there is no fence between the pawns, and a fence (or the board edge)
//!   stands right behind the opponent.

use crate::board::Board;
use crate::types::{Coord, CoordError, Direction, Player, TurnError};

use std::fmt;

use thiserror::Error;

/// Move kind
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum MoveKind {
    /// Orthogonal step onto a neighboring cell
    Step = 0,
    /// Vertical jump over the opponent's pawn
    StraightJump = 1,
    /// Diagonal jump around the opponent's pawn
    DiagonalJump = 2,
}

impl fmt::Display for MoveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        match *self {
            Self::Step => write!(f, "step"),
            Self::StraightJump => write!(f, "straight jump"),
            Self::DiagonalJump => write!(f, "diagonal jump"),
        }
    }
}

/// Error indicating that pawn move is invalid
#[derive(Debug, Copy, Clone, Error, Eq, PartialEq)]
pub enum MoveError {
    /// The player is not allowed to act
    #[error("{0}")]
    Turn(#[from] TurnError),
    /// Target cell is outside the board
    #[error("target is off the board: {0}")]
    OutOfBoard(#[from] CoordError),
    /// Target cell is the current cell
    #[error("pawn must move")]
    NoMove,
    /// Target cell is more than two steps away or has unsupported shape
    #[error("target is too far")]
    TooFar,
    /// Two-cell move along a row
    #[error("horizontal jumps are not allowed")]
    HorizontalJump,
    /// Two-cell move along a column without the opponent's pawn in between
    #[error("no pawn to jump over")]
    NoPawnToJump,
    /// Diagonal move while the opponent is not directly above or below
    #[error("opponent is not vertically adjacent")]
    NotVerticallyAdjacent,
    /// Diagonal move away from the opponent's pawn
    #[error("no opponent pawn adjacent in that direction")]
    NoOpponentInDirection,
    /// Diagonal move with a fence between the pawns
    #[error("fence between the pawns")]
    FenceBetweenPawns,
    /// Diagonal move without a fence behind the opponent's pawn
    #[error("no fence behind the opponent pawn")]
    NoFenceBehindOpponent,
    /// A fence blocks the path to the target
    #[error("blocked by fence")]
    BlockedByFence,
    /// Target cell holds the opponent's pawn
    #[error("blocked by pawn")]
    OccupiedByPawn,
}

/// Pawn move
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Move {
    pub player: Player,
    pub kind: MoveKind,
    pub src: Coord,
    pub dst: Coord,
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        write!(f, "{}{}", self.src, self.dst)
    }
}

fn shape(dx: i32, dy: i32) -> Result<MoveKind, MoveError> {
    match (dx.abs(), dy.abs()) {
        (0, 0) => Err(MoveError::NoMove),
        (1, 0) | (0, 1) => Ok(MoveKind::Step),
        (0, 2) => Ok(MoveKind::StraightJump),
        (2, 0) => Err(MoveError::HorizontalJump),
        (1, 1) => Ok(MoveKind::DiagonalJump),
        _ => Err(MoveError::TooFar),
    }
}

fn dir(dx: i32, dy: i32) -> Direction {
    // Callers pass unit vectors only
    match Direction::from_delta(dx.signum(), dy.signum()) {
        Some(d) => d,
        None => unreachable!("not a unit vector: ({}, {})", dx, dy),
    }
}

/// Checks whether `player` may move its pawn onto `target` on board `b`
///
/// Only the board geometry is checked here. Turn order and game end are the concern of
/// [`Game`](crate::game::Game). On success, returns the move with its kind.
pub fn validate(b: &Board, player: Player, target: Coord) -> Result<Move, MoveError> {
    let src = b.pawn(player);
    let opp = b.pawn(player.opponent());
    let (dx, dy) = src.delta_to(target);
    let kind = shape(dx, dy)?;

    match kind {
        MoveKind::Step => {
            if b.is_edge_blocked(src, dir(dx, dy)) {
                return Err(MoveError::BlockedByFence);
            }
        }
        MoveKind::StraightJump => {
            let forward = dir(0, dy);
            if src.step(forward) != Some(opp) {
                return Err(MoveError::NoPawnToJump);
            }
            // Only the edge between the opponent and the target is looked up
            if b.is_edge_blocked(opp, forward) {
                return Err(MoveError::BlockedByFence);
            }
        }
        MoveKind::DiagonalJump => {
            let (ox, oy) = src.delta_to(opp);
            if ox != 0 || oy.abs() != 1 {
                return Err(MoveError::NotVerticallyAdjacent);
            }
            if ox * dx < 0 || oy * dy < 0 {
                return Err(MoveError::NoOpponentInDirection);
            }
            let forward = dir(0, dy);
            if b.is_edge_blocked(src, forward) {
                return Err(MoveError::FenceBetweenPawns);
            }
            if !b.is_edge_blocked(opp, forward) {
                return Err(MoveError::NoFenceBehindOpponent);
            }
            if b.is_edge_blocked(opp, dir(dx, 0)) {
                return Err(MoveError::BlockedByFence);
            }
        }
    }

    if target == opp {
        return Err(MoveError::OccupiedByPawn);
    }

    Ok(Move {
        player,
        kind,
        src,
        dst: target,
    })
}

/// Moves the pawn without any checks
///
/// The move must be obtained from [`validate()`] on the same board.
pub(crate) fn make_unchecked(b: &mut Board, mv: Move) {
    debug_assert_eq!(b.pawn(mv.player), mv.src);
    b.set_pawn(mv.player, mv.dst);
}
