use crate::types::{Direction, Orientation, Player};

pub const BOARD_SIZE: usize = 9;
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// Number of fences each player holds at the start of the game
pub const FENCE_ALLOWANCE: u8 = 10;

/// Both pawns start in the middle column
pub const START_COLUMN: u8 = (BOARD_SIZE / 2) as u8;

pub const fn start_row(p: Player) -> u8 {
    match p {
        Player::One => 0,
        Player::Two => BOARD_SIZE as u8 - 1,
    }
}

pub const fn goal_row(p: Player) -> u8 {
    start_row(p.opponent())
}

/// Locates the marker which blocks a unit step in direction `dir` from cell `(col, row)`
///
/// Returns the orientation of the marker and the cell where it is recorded. Returns `None`
/// if the step leaves the board, as such steps are always blocked.
///
/// A horizontal marker at `(c, r)` lies between rows `r - 1` and `r`, and a vertical marker
/// at `(c, r)` lies between columns `c - 1` and `c`.
pub const fn blocking_marker(col: u8, row: u8, dir: Direction) -> Option<(Orientation, u8, u8)> {
    let last = BOARD_SIZE as u8 - 1;
    match dir {
        Direction::Left if col > 0 => Some((Orientation::Vertical, col, row)),
        Direction::Right if col < last => Some((Orientation::Vertical, col + 1, row)),
        Direction::Up if row < last => Some((Orientation::Horizontal, col, row + 1)),
        Direction::Down if row > 0 => Some((Orientation::Horizontal, col, row)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows() {
        assert_eq!(start_row(Player::One), 0);
        assert_eq!(start_row(Player::Two), 8);
        assert_eq!(goal_row(Player::One), 8);
        assert_eq!(goal_row(Player::Two), 0);
        assert_eq!(START_COLUMN, 4);
    }

    #[test]
    fn test_blocking_marker() {
        // Destination is one column to the left: marker sits one column right of it
        assert_eq!(
            blocking_marker(4, 4, Direction::Left),
            Some((Orientation::Vertical, 4, 4))
        );
        assert_eq!(
            blocking_marker(4, 4, Direction::Right),
            Some((Orientation::Vertical, 5, 4))
        );
        assert_eq!(
            blocking_marker(4, 4, Direction::Up),
            Some((Orientation::Horizontal, 4, 5))
        );
        assert_eq!(
            blocking_marker(4, 4, Direction::Down),
            Some((Orientation::Horizontal, 4, 4))
        );
        assert_eq!(blocking_marker(0, 3, Direction::Left), None);
        assert_eq!(blocking_marker(8, 3, Direction::Right), None);
        assert_eq!(blocking_marker(3, 8, Direction::Up), None);
        assert_eq!(blocking_marker(3, 0, Direction::Down), None);
    }
}
