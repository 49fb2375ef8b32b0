use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::geometry::{self, BOARD_SIZE, CELL_COUNT};

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum CoordError {
    #[error("column {0} is outside the board")]
    ColumnOutOfBoard(i32),
    #[error("row {0} is outside the board")]
    RowOutOfBoard(i32),
}

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum CoordParseError {
    #[error("unexpected column char {0:?}")]
    UnexpectedColumnChar(char),
    #[error("unexpected row char {0:?}")]
    UnexpectedRowChar(char),
    #[error("invalid string length")]
    BadLength,
}

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum OrientationParseError {
    #[error("unexpected orientation char {0:?}")]
    UnexpectedChar(char),
    #[error("invalid string length")]
    BadLength,
}

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum FenceParseError {
    #[error("bad fence coordinate: {0}")]
    Coord(#[from] CoordParseError),
    #[error("bad fence orientation: {0}")]
    Orientation(#[from] OrientationParseError),
    #[error("invalid string length")]
    BadLength,
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
#[repr(u8)]
pub enum Player {
    One = 1,
    Two = 2,
}

impl Player {
    pub const fn id(&self) -> u8 {
        *self as u8
    }

    pub const fn index(&self) -> usize {
        (*self as u8 - 1) as usize
    }

    pub const fn from_index(val: usize) -> Self {
        assert!(val < 2, "player index must be 0 or 1");
        match val {
            0 => Player::One,
            _ => Player::Two,
        }
    }

    pub const fn from_id(id: u8) -> Option<Self> {
        match id {
            1 => Some(Player::One),
            2 => Some(Player::Two),
            _ => None,
        }
    }

    pub const fn opponent(&self) -> Player {
        match *self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Row this player has to reach in order to win
    pub const fn goal_row(&self) -> u8 {
        geometry::goal_row(*self)
    }

    /// Cell where the pawn of this player starts
    pub const fn start(&self) -> Coord {
        Coord::from_parts(geometry::START_COLUMN, geometry::start_row(*self))
    }

    pub fn iter() -> impl Iterator<Item = Self> {
        [Player::One, Player::Two].into_iter()
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        write!(f, "{}", self.id())
    }
}

#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
#[repr(u8)]
pub enum Orientation {
    Horizontal = 0,
    Vertical = 1,
}

impl Orientation {
    pub const fn index(&self) -> usize {
        *self as u8 as usize
    }

    pub fn as_char(&self) -> char {
        match *self {
            Orientation::Horizontal => 'h',
            Orientation::Vertical => 'v',
        }
    }

    pub fn from_char(c: char) -> Option<Orientation> {
        match c {
            'h' => Some(Orientation::Horizontal),
            'v' => Some(Orientation::Vertical),
            _ => None,
        }
    }

    pub fn iter() -> impl Iterator<Item = Self> {
        [Orientation::Horizontal, Orientation::Vertical].into_iter()
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        write!(f, "{}", self.as_char())
    }
}

impl FromStr for Orientation {
    type Err = OrientationParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 1 {
            return Err(OrientationParseError::BadLength);
        }
        let ch = s.as_bytes()[0] as char;
        Orientation::from_char(ch).ok_or(OrientationParseError::UnexpectedChar(ch))
    }
}

/// Unit step on the board
///
/// `Up` goes towards row 8, i.e. towards the goal of [`Player::One`].
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    pub const fn delta(&self) -> (i32, i32) {
        match *self {
            Direction::Up => (0, 1),
            Direction::Down => (0, -1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    pub const fn from_delta(dx: i32, dy: i32) -> Option<Direction> {
        match (dx, dy) {
            (0, 1) => Some(Direction::Up),
            (0, -1) => Some(Direction::Down),
            (-1, 0) => Some(Direction::Left),
            (1, 0) => Some(Direction::Right),
            _ => None,
        }
    }
}

/// Cell on the 9x9 board
///
/// Always holds a position inside the board. Raw integers coming from the outside
/// must pass through [`Coord::from_xy()`] or [`Coord::try_new()`].
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Coord(u8);

impl Coord {
    pub const fn new(col: u8, row: u8) -> Coord {
        assert!(
            (col as usize) < BOARD_SIZE && (row as usize) < BOARD_SIZE,
            "coordinates must be between 0 and 8"
        );
        Coord::from_parts(col, row)
    }

    pub const fn try_new(col: u8, row: u8) -> Option<Coord> {
        if (col as usize) < BOARD_SIZE && (row as usize) < BOARD_SIZE {
            Some(Coord::from_parts(col, row))
        } else {
            None
        }
    }

    pub fn from_xy(col: i32, row: i32) -> Result<Coord, CoordError> {
        if !(0..BOARD_SIZE as i32).contains(&col) {
            return Err(CoordError::ColumnOutOfBoard(col));
        }
        if !(0..BOARD_SIZE as i32).contains(&row) {
            return Err(CoordError::RowOutOfBoard(row));
        }
        Ok(Coord::from_parts(col as u8, row as u8))
    }

    pub const fn from_index(val: usize) -> Coord {
        assert!(val < CELL_COUNT, "coord must be between 0 and 80");
        Coord(val as u8)
    }

    const fn from_parts(col: u8, row: u8) -> Coord {
        Coord(row * BOARD_SIZE as u8 + col)
    }

    pub const fn col(&self) -> u8 {
        self.0 % BOARD_SIZE as u8
    }

    pub const fn row(&self) -> u8 {
        self.0 / BOARD_SIZE as u8
    }

    pub const fn index(&self) -> usize {
        self.0 as usize
    }

    /// Returns `(target.col - self.col, target.row - self.row)`
    pub const fn delta_to(&self, target: Coord) -> (i32, i32) {
        (
            target.col() as i32 - self.col() as i32,
            target.row() as i32 - self.row() as i32,
        )
    }

    pub fn try_shift(self, delta_col: i32, delta_row: i32) -> Option<Coord> {
        Coord::from_xy(self.col() as i32 + delta_col, self.row() as i32 + delta_row).ok()
    }

    pub fn step(self, dir: Direction) -> Option<Coord> {
        let (dx, dy) = dir.delta();
        self.try_shift(dx, dy)
    }

    pub fn iter() -> impl Iterator<Item = Self> {
        (0..CELL_COUNT as u8).map(Coord)
    }
}

impl fmt::Debug for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        if (self.0 as usize) < CELL_COUNT {
            return write!(f, "Coord({}, {})", self.col(), self.row());
        }
        write!(f, "Coord(?{:?})", self.0)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        write!(
            f,
            "{}{}",
            (b'a' + self.col()) as char,
            (b'1' + self.row()) as char
        )
    }
}

impl TryFrom<(i32, i32)> for Coord {
    type Error = CoordError;

    fn try_from((col, row): (i32, i32)) -> Result<Self, Self::Error> {
        Coord::from_xy(col, row)
    }
}

impl From<Coord> for (u8, u8) {
    fn from(c: Coord) -> (u8, u8) {
        (c.col(), c.row())
    }
}

impl FromStr for Coord {
    type Err = CoordParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 2 {
            return Err(CoordParseError::BadLength);
        }
        let bytes = s.as_bytes();
        let col = match bytes[0] {
            b @ b'a'..=b'i' => b - b'a',
            b => return Err(CoordParseError::UnexpectedColumnChar(b as char)),
        };
        let row = match bytes[1] {
            b @ b'1'..=b'9' => b - b'1',
            b => return Err(CoordParseError::UnexpectedRowChar(b as char)),
        };
        Ok(Coord::from_parts(col, row))
    }
}

/// Single fence segment, as placed by a player
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
pub struct Fence {
    pub orientation: Orientation,
    pub coord: Coord,
}

impl Fence {
    pub const fn new(orientation: Orientation, coord: Coord) -> Fence {
        Fence { orientation, coord }
    }

    pub fn iter() -> impl Iterator<Item = Self> {
        Coord::iter().flat_map(|c| Orientation::iter().map(move |o| Fence::new(o, c)))
    }
}

impl fmt::Display for Fence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        write!(f, "{}{}", self.coord, self.orientation)
    }
}

impl FromStr for Fence {
    type Err = FenceParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 3 || !s.is_char_boundary(2) {
            return Err(FenceParseError::BadLength);
        }
        let (coord, orientation) = s.split_at(2);
        Ok(Fence::new(orientation.parse()?, coord.parse()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player() {
        for (idx, player) in Player::iter().enumerate() {
            assert_eq!(player.index(), idx);
            assert_eq!(Player::from_index(idx), player);
            assert_eq!(Player::from_id(player.id()), Some(player));
            assert_eq!(player.opponent().opponent(), player);
        }
        assert_eq!(Player::from_id(0), None);
        assert_eq!(Player::from_id(3), None);
        assert_eq!(Player::One.goal_row(), 8);
        assert_eq!(Player::Two.goal_row(), 0);
        assert_eq!(Player::One.start(), Coord::new(4, 0));
        assert_eq!(Player::Two.start(), Coord::new(4, 8));
    }

    #[test]
    #[should_panic]
    fn test_bad_player_index() {
        Player::from_index(2);
    }

    #[test]
    fn test_coord() {
        let mut coords = Vec::new();
        for row in 0..9 {
            for col in 0..9 {
                let coord = Coord::new(col, row);
                assert_eq!(coord.col(), col);
                assert_eq!(coord.row(), row);
                coords.push(coord);
            }
        }
        assert_eq!(coords, Coord::iter().collect::<Vec<_>>());
        assert_eq!(Coord::try_new(9, 0), None);
        assert_eq!(Coord::try_new(0, 9), None);
        assert_eq!(Coord::from_xy(-1, 3), Err(CoordError::ColumnOutOfBoard(-1)));
        assert_eq!(Coord::from_xy(3, 9), Err(CoordError::RowOutOfBoard(9)));
        assert_eq!(Coord::try_from((8, 8)), Ok(Coord::new(8, 8)));
    }

    #[test]
    fn test_coord_shift() {
        let c = Coord::new(0, 8);
        assert_eq!(c.step(Direction::Up), None);
        assert_eq!(c.step(Direction::Left), None);
        assert_eq!(c.step(Direction::Down), Some(Coord::new(0, 7)));
        assert_eq!(c.step(Direction::Right), Some(Coord::new(1, 8)));
        assert_eq!(c.delta_to(Coord::new(2, 5)), (2, -3));
        for dir in Direction::ALL {
            let (dx, dy) = dir.delta();
            assert_eq!(Direction::from_delta(dx, dy), Some(dir));
        }
    }

    #[test]
    fn test_coord_str() {
        assert_eq!(Coord::new(4, 0).to_string(), "e1");
        assert_eq!(Coord::new(8, 8).to_string(), "i9");
        assert_eq!(Coord::from_str("a1"), Ok(Coord::new(0, 0)));
        assert_eq!(Coord::from_str("e9"), Ok(Coord::new(4, 8)));
        assert_eq!(
            Coord::from_str("j1"),
            Err(CoordParseError::UnexpectedColumnChar('j'))
        );
        assert_eq!(
            Coord::from_str("a0"),
            Err(CoordParseError::UnexpectedRowChar('0'))
        );
        assert_eq!(Coord::from_str("a10"), Err(CoordParseError::BadLength));
    }

    #[test]
    fn test_fence_str() {
        let fence = Fence::new(Orientation::Horizontal, Coord::new(2, 3));
        assert_eq!(fence.to_string(), "c4h");
        assert_eq!(Fence::from_str("c4h"), Ok(fence));
        assert_eq!(
            Fence::from_str("c4v"),
            Ok(Fence::new(Orientation::Vertical, Coord::new(2, 3)))
        );
        assert_eq!(
            Fence::from_str("c4x"),
            Err(FenceParseError::Orientation(
                OrientationParseError::UnexpectedChar('x')
            ))
        );
        assert_eq!(Fence::from_str("c4"), Err(FenceParseError::BadLength));
        assert_eq!(Fence::iter().count(), 162);
    }
}
