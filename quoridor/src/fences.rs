//! Fence placement
//!
//! A fence is a single marker at a cell. Placing a marker of the same orientation twice at one
//! cell is forbidden, while markers of different orientations may share a cell. A fence is never
//! allowed to cut a player off its goal row.

use crate::board::Board;
use crate::path;
use crate::types::{CoordError, Fence, Player, TurnError};

use thiserror::Error;

/// Error indicating that fence placement is invalid
#[derive(Debug, Copy, Clone, Error, Eq, PartialEq)]
pub enum FenceError {
    /// The player is not allowed to act
    #[error("{0}")]
    Turn(#[from] TurnError),
    /// The player has no fences left
    #[error("player {0} has no fences left")]
    NoFencesLeft(Player),
    /// Fence coordinate is outside the board
    #[error("fence is off the board: {0}")]
    OutOfBoard(#[from] CoordError),
    /// The same marker is already present
    #[error("fence {0} is already placed")]
    AlreadyPlaced(Fence),
    /// The fence would leave the player without a path to its goal row
    #[error("fence breaks the fair play rule: player {0} is walled off")]
    BreaksFairPlay(Player),
}

impl FenceError {
    /// Returns `true` if the error is a fair play violation
    pub fn is_fair_play(&self) -> bool {
        matches!(*self, Self::BreaksFairPlay(_))
    }
}

/// Returns the first player that cannot reach its goal row on board `b`
fn walled_off(b: &Board) -> Option<Player> {
    Player::iter().find(|&p| !path::has_path(b, b.pawn(p), p.goal_row()))
}

/// Tries to add `fence` to the board
///
/// The marker is added tentatively, then both players are checked for a path to their goal
/// rows. If one of them is walled off, the marker is removed again and the board stays intact.
pub(crate) fn place(b: &mut Board, fence: Fence) -> Result<(), FenceError> {
    if b.has_fence(fence) {
        return Err(FenceError::AlreadyPlaced(fence));
    }
    b.put_fence(fence);
    if let Some(p) = walled_off(b) {
        b.take_fence(fence);
        return Err(FenceError::BreaksFairPlay(p));
    }
    Ok(())
}

/// Checks whether `fence` can be placed on board `b`
///
/// Only the board geometry is checked here. Turn order, fence allowance and game end are the
/// concern of [`Game`](crate::game::Game).
pub fn validate(b: &Board, fence: Fence) -> Result<(), FenceError> {
    let mut copy = *b;
    place(&mut copy, fence)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Coord, Orientation};

    fn h(col: u8, row: u8) -> Fence {
        Fence::new(Orientation::Horizontal, Coord::new(col, row))
    }

    fn v(col: u8, row: u8) -> Fence {
        Fence::new(Orientation::Vertical, Coord::new(col, row))
    }

    #[test]
    fn test_overlap() {
        let mut b = Board::initial();
        assert_eq!(place(&mut b, h(3, 3)), Ok(()));
        assert_eq!(place(&mut b, h(3, 3)), Err(FenceError::AlreadyPlaced(h(3, 3))));
        // Other orientation at the same cell is fine
        assert_eq!(place(&mut b, v(3, 3)), Ok(()));
        assert_eq!(place(&mut b, v(3, 3)), Err(FenceError::AlreadyPlaced(v(3, 3))));
    }

    #[test]
    fn test_boundary() {
        let b = Board::initial();
        assert_eq!(validate(&b, h(5, 0)), Err(FenceError::AlreadyPlaced(h(5, 0))));
        assert_eq!(validate(&b, v(0, 5)), Err(FenceError::AlreadyPlaced(v(0, 5))));
        assert_eq!(validate(&b, h(0, 0)), Err(FenceError::AlreadyPlaced(h(0, 0))));
        assert_eq!(validate(&b, v(0, 0)), Err(FenceError::AlreadyPlaced(v(0, 0))));
        assert_eq!(validate(&b, v(5, 0)), Ok(()));
        assert_eq!(validate(&b, h(0, 5)), Ok(()));
    }

    #[test]
    fn test_fair_play() {
        let mut b = Board::initial();
        for col in 0..8 {
            assert_eq!(place(&mut b, h(col, 4)), Ok(()));
        }
        let before = b;
        let err = place(&mut b, h(8, 4)).unwrap_err();
        assert_eq!(err, FenceError::BreaksFairPlay(Player::One));
        assert!(err.is_fair_play());
        assert_eq!(b, before);
        assert!(!b.has_fence(h(8, 4)));
    }

    #[test]
    fn test_fair_play_second_player() {
        let mut b = Board::initial();
        // Box in player 2 around (4, 8), leaving only the step to the left
        assert_eq!(place(&mut b, h(4, 8)), Ok(()));
        assert_eq!(place(&mut b, v(5, 8)), Ok(()));
        assert_eq!(
            place(&mut b, v(4, 8)),
            Err(FenceError::BreaksFairPlay(Player::Two))
        );
        assert_eq!(b.fences().count(), 2);
    }

    #[test]
    fn test_validate_is_pure() {
        let b = Board::initial();
        assert_eq!(validate(&b, h(4, 4)), Ok(()));
        assert_eq!(b, Board::initial());
    }
}
