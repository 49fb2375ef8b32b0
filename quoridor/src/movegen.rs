//! Generation of legal actions

use crate::fences;
use crate::game::Game;
use crate::moves;
use crate::types::{Coord, Fence};

use std::ops::{Deref, DerefMut};
use std::slice;

use arrayvec::ArrayVec;

/// Relative targets which may be legal for a pawn
const PAWN_DELTAS: [(i32, i32); 10] = [
    (0, 1),
    (0, -1),
    (-1, 0),
    (1, 0),
    (0, 2),
    (0, -2),
    (-1, 1),
    (1, 1),
    (-1, -1),
    (1, -1),
];

/// Maximum number of fence markers on the board, including the occupied ones
const FENCE_CAPACITY: usize = 162;

macro_rules! define_list {
    ($(#[$attr:meta])* $name:ident, $item:ty, $cap:expr) => {
        $(#[$attr])*
        #[derive(Default, Debug, Clone, Eq, PartialEq)]
        pub struct $name(ArrayVec<$item, { $cap }>);

        impl Deref for $name {
            type Target = ArrayVec<$item, { $cap }>;

            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }

        impl DerefMut for $name {
            fn deref_mut(&mut self) -> &mut Self::Target {
                &mut self.0
            }
        }

        impl<'a> IntoIterator for &'a $name {
            type Item = &'a $item;
            type IntoIter = slice::Iter<'a, $item>;

            fn into_iter(self) -> Self::IntoIter {
                self.0.iter()
            }
        }

        impl $name {
            pub fn new() -> $name {
                $name(ArrayVec::new())
            }
        }
    };
}

define_list!(
    /// List of legal pawn targets
    PawnMoveList,
    Coord,
    PAWN_DELTAS.len()
);

define_list!(
    /// List of legal fences
    FenceList,
    Fence,
    FENCE_CAPACITY
);

/// Returns all the cells the player to move can move its pawn onto
///
/// The list is empty if the game is over.
pub fn pawn_moves(g: &Game) -> PawnMoveList {
    let mut res = PawnMoveList::new();
    if g.winner().is_some() {
        return res;
    }
    let b = g.board();
    let p = g.current_turn();
    let src = b.pawn(p);
    for (dx, dy) in PAWN_DELTAS {
        if let Some(dst) = src.try_shift(dx, dy) {
            if moves::validate(b, p, dst).is_ok() {
                res.push(dst);
            }
        }
    }
    res
}

/// Returns all the fences the player to move can place
///
/// The list is empty if the game is over or the player has no fences left.
pub fn fences(g: &Game) -> FenceList {
    let mut res = FenceList::new();
    let p = g.current_turn();
    if g.winner().is_some() || g.fence_allowance(p) == 0 {
        return res;
    }
    let b = g.board();
    for fence in Fence::iter() {
        if fences::validate(b, fence).is_ok() {
            res.push(fence);
        }
    }
    res
}

/// Returns the number of legal actions for the player to move
pub fn count_actions(g: &Game) -> usize {
    pawn_moves(g).len() + fences(g).len()
}
