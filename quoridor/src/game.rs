//! Game state machine
//!
//! [`Game`] owns the board, the fence allowances, the side to move and the winner. Any illegal
//! action leaves the game untouched, so the same value stays usable after any number of
//! rejected calls.

use crate::board::Board;
use crate::fences::{self, FenceError};
use crate::moves::{self, Move, MoveError};
use crate::notation::{Action, ActionError};
use crate::path;
use crate::types::{Coord, Fence, GameStatus, Orientation, PlaceOutcome, Player, TurnError};

use quoridor_base::geometry::FENCE_ALLOWANCE;

/// Single game of Quoridor
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Game {
    board: Board,
    fences_left: [u8; 2],
    turn: Player,
    winner: Option<Player>,
}

impl Game {
    /// Starts a new game
    ///
    /// Only the boundary markers are present, pawns stand on their start cells, each player
    /// holds ten fences, and player 1 moves first.
    pub fn new() -> Game {
        Game::from_board(Board::initial(), Player::One)
    }

    /// Starts a game from an arbitrary valid position
    ///
    /// Both players receive the full fence allowance. If one of the pawns already stands on its
    /// goal row, the game is over from the start.
    pub fn from_board(board: Board, turn: Player) -> Game {
        let winner = Player::iter().find(|&p| board.pawn(p).row() == p.goal_row());
        Game {
            board,
            fences_left: [FENCE_ALLOWANCE; 2],
            turn,
            winner,
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player whose action is currently legal
    ///
    /// After the game is over, returns the player who would have moved next.
    #[inline]
    pub fn current_turn(&self) -> Player {
        self.turn
    }

    #[inline]
    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    #[inline]
    pub fn is_winner(&self, p: Player) -> bool {
        self.winner == Some(p)
    }

    #[inline]
    pub fn status(&self) -> GameStatus {
        match self.winner {
            Some(p) => GameStatus::Won(p),
            None => GameStatus::InProgress(self.turn),
        }
    }

    /// Returns the number of fences player `p` may still place
    #[inline]
    pub fn fence_allowance(&self, p: Player) -> u8 {
        self.fences_left[p.index()]
    }

    #[inline]
    pub fn pawn_position(&self, p: Player) -> Coord {
        self.board.pawn(p)
    }

    /// Returns `true` if player `p` can still reach its goal row
    ///
    /// This holds for every position reachable in the game.
    #[inline]
    pub fn has_path(&self, p: Player) -> bool {
        path::has_path(&self.board, self.board.pawn(p), p.goal_row())
    }

    /// Returns the number of steps player `p` needs to reach its goal row if nobody moves
    /// in its way
    #[inline]
    pub fn distance_to_goal(&self, p: Player) -> Option<usize> {
        path::distance(&self.board, self.board.pawn(p), p.goal_row())
    }

    fn check_turn(&self, p: Player) -> Result<(), TurnError> {
        if let Some(w) = self.winner {
            return Err(TurnError::GameOver(w));
        }
        if p != self.turn {
            return Err(TurnError::NotYourTurn(p));
        }
        Ok(())
    }

    fn end_turn(&mut self) {
        self.turn = self.turn.opponent();
    }

    /// Checks whether `p` may move its pawn onto `target`, without changing anything
    pub fn validate_move(&self, p: Player, target: Coord) -> Result<Move, MoveError> {
        self.check_turn(p)?;
        moves::validate(&self.board, p, target)
    }

    /// Moves the pawn of player `p` onto `target`
    ///
    /// On success, returns the move made. Reaching the goal row ends the game.
    pub fn try_move_pawn(&mut self, p: Player, target: Coord) -> Result<Move, MoveError> {
        let mv = self.validate_move(p, target)?;
        moves::make_unchecked(&mut self.board, mv);
        if mv.dst.row() == p.goal_row() {
            self.winner = Some(p);
        }
        self.end_turn();
        Ok(mv)
    }

    /// Same as [`Game::try_move_pawn()`], but takes raw coordinates, which may lie outside
    /// the board
    pub fn try_move_pawn_xy(&mut self, p: Player, col: i32, row: i32) -> Result<Move, MoveError> {
        self.check_turn(p)?;
        let target = Coord::from_xy(col, row)?;
        self.try_move_pawn(p, target)
    }

    /// Moves the pawn of player `p` onto `target`
    ///
    /// Returns `true` if the move was legal and made. See [`Game::try_move_pawn()`] to learn why
    /// the move was rejected.
    #[inline]
    pub fn move_pawn(&mut self, p: Player, target: Coord) -> bool {
        self.try_move_pawn(p, target).is_ok()
    }

    #[inline]
    pub fn move_pawn_xy(&mut self, p: Player, col: i32, row: i32) -> bool {
        self.try_move_pawn_xy(p, col, row).is_ok()
    }

    fn check_fence_turn(&self, p: Player) -> Result<(), FenceError> {
        self.check_turn(p)?;
        if self.fence_allowance(p) == 0 {
            return Err(FenceError::NoFencesLeft(p));
        }
        Ok(())
    }

    /// Checks whether `p` may place `fence`, without changing anything
    pub fn validate_fence(&self, p: Player, fence: Fence) -> Result<(), FenceError> {
        self.check_fence_turn(p)?;
        fences::validate(&self.board, fence)
    }

    /// Places `fence` on behalf of player `p`
    ///
    /// A fence which would cut any of the players off its goal row is rejected with
    /// [`FenceError::BreaksFairPlay`].
    pub fn try_place_fence(&mut self, p: Player, fence: Fence) -> Result<(), FenceError> {
        self.check_fence_turn(p)?;
        fences::place(&mut self.board, fence)?;
        self.fences_left[p.index()] -= 1;
        self.end_turn();
        Ok(())
    }

    /// Same as [`Game::try_place_fence()`], but takes raw coordinates, which may lie outside
    /// the board
    pub fn try_place_fence_xy(
        &mut self,
        p: Player,
        orientation: Orientation,
        col: i32,
        row: i32,
    ) -> Result<(), FenceError> {
        self.check_fence_turn(p)?;
        let coord = Coord::from_xy(col, row)?;
        self.try_place_fence(p, Fence::new(orientation, coord))
    }

    /// Places a fence with orientation `orientation` at `coord` on behalf of player `p`
    ///
    /// Fair play violations are reported separately from the other rejections.
    #[inline]
    pub fn place_fence(
        &mut self,
        p: Player,
        orientation: Orientation,
        coord: Coord,
    ) -> PlaceOutcome {
        Self::outcome(self.try_place_fence(p, Fence::new(orientation, coord)))
    }

    #[inline]
    pub fn place_fence_xy(
        &mut self,
        p: Player,
        orientation: Orientation,
        col: i32,
        row: i32,
    ) -> PlaceOutcome {
        Self::outcome(self.try_place_fence_xy(p, orientation, col, row))
    }

    fn outcome(res: Result<(), FenceError>) -> PlaceOutcome {
        match res {
            Ok(()) => PlaceOutcome::Placed,
            Err(e) if e.is_fair_play() => PlaceOutcome::FairPlayViolation,
            Err(_) => PlaceOutcome::Rejected,
        }
    }

    /// Performs `action` on behalf of player `p`
    pub fn apply(&mut self, p: Player, action: Action) -> Result<(), ActionError> {
        match action {
            Action::Move(target) => {
                self.try_move_pawn(p, target)?;
            }
            Action::Fence(fence) => self.try_place_fence(p, fence)?,
        }
        Ok(())
    }
}

impl Default for Game {
    #[inline]
    fn default() -> Game {
        Game::new()
    }
}
