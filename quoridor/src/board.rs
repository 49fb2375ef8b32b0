//! Board and related things

use crate::path;
use crate::types::{Coord, Direction, Fence, Markers, Orientation, Player};

use quoridor_base::geometry::{self, BOARD_SIZE, CELL_COUNT};

use std::fmt;

use thiserror::Error;

/// Board validation error
#[derive(Debug, Copy, Clone, Error, Eq, PartialEq)]
pub enum ValidateError {
    /// Both pawns are located on the same cell
    #[error("both pawns are located on {0}")]
    SameCell(Coord),
    /// One of the boundary markers is missing
    #[error("boundary marker {0} is missing")]
    MissingBoundary(Fence),
    /// Both pawns are already on their goal rows
    #[error("both pawns are on their goal rows")]
    BothOnGoal,
    /// The player cannot reach its goal row
    #[error("player {0} is walled off its goal row")]
    NoPath(Player),
}

/// Raw Quoridor board
///
/// Raw board contains the fence markers and the positions of the pawns. But, unlike [`Board`],
/// it is not validated and may contain an invalid position, e.g. two pawns on one cell or
/// a player walled off its goal row.
///
/// Raw board can be used to build positions programmatically. After changing the necessary
/// fields, it must be converted to [`Board`] via [`Board::try_from()`].
///
/// # Example
///
/// ```
/// # use quoridor::{RawBoard, Board, Coord, Fence, Orientation, Player};
/// #
/// let mut raw = RawBoard::initial();
/// raw.pawns = [Coord::new(4, 4), Coord::new(4, 5)];
/// raw.put(Fence::new(Orientation::Horizontal, Coord::new(4, 6)));
///
/// let board: Board = raw.try_into().unwrap();
/// assert_eq!(board.pawn(Player::Two), Coord::new(4, 5));
/// ```
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct RawBoard {
    /// Fence markers of each cell
    ///
    /// The indices in this array are the indices of coordinates. You might probably want to use
    /// [`RawBoard::put()`] and [`RawBoard::has()`] instead of indexing this array directly.
    pub markers: [Markers; CELL_COUNT],
    /// Pawn positions, indexed by [`Player::index()`]
    pub pawns: [Coord; 2],
}

impl RawBoard {
    /// Returns a board with only the boundary markers and the pawns on their start cells
    pub fn initial() -> RawBoard {
        let mut res = RawBoard {
            markers: [Markers::EMPTY; CELL_COUNT],
            pawns: [Player::One.start(), Player::Two.start()],
        };
        for fence in boundary() {
            res.put(fence);
        }
        res
    }

    /// Returns `true` if the marker described by `fence` is present
    #[inline]
    pub fn has(&self, fence: Fence) -> bool {
        self.markers[fence.coord.index()].has(fence.orientation)
    }

    /// Adds the marker described by `fence`
    #[inline]
    pub fn put(&mut self, fence: Fence) {
        self.markers[fence.coord.index()].set(fence.orientation);
    }

    /// Removes the marker described by `fence`
    #[inline]
    pub fn take(&mut self, fence: Fence) {
        self.markers[fence.coord.index()].unset(fence.orientation);
    }
}

impl Default for RawBoard {
    #[inline]
    fn default() -> RawBoard {
        RawBoard::initial()
    }
}

/// Markers which close the outer edges of the playing field
///
/// Every cell in row 0 carries a horizontal marker, and every cell in column 0 carries
/// a vertical one.
pub fn boundary() -> impl Iterator<Item = Fence> {
    let bottom = (0..BOARD_SIZE as u8)
        .map(|col| Fence::new(Orientation::Horizontal, Coord::new(col, 0)));
    let left = (0..BOARD_SIZE as u8)
        .map(|row| Fence::new(Orientation::Vertical, Coord::new(0, row)));
    bottom.chain(left)
}

/// Returns `true` if `fence` is one of the fixed boundary markers
pub fn is_boundary(fence: Fence) -> bool {
    match fence.orientation {
        Orientation::Horizontal => fence.coord.row() == 0,
        Orientation::Vertical => fence.coord.col() == 0,
    }
}

/// Board that contains a valid position
///
/// The pawns always occupy different cells, the boundary markers are always present, and both
/// players can always reach their goal rows.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Board {
    pub(crate) r: RawBoard,
}

impl Board {
    /// Returns a board with the initial position
    pub fn initial() -> Board {
        Board {
            r: RawBoard::initial(),
        }
    }

    /// Returns the markers recorded at cell `c`
    #[inline]
    pub fn markers(&self, c: Coord) -> Markers {
        self.r.markers[c.index()]
    }

    /// Returns `true` if the marker described by `fence` is present
    ///
    /// Boundary markers are reported as present.
    #[inline]
    pub fn has_fence(&self, fence: Fence) -> bool {
        self.r.has(fence)
    }

    /// Returns the position of the pawn of player `p`
    #[inline]
    pub fn pawn(&self, p: Player) -> Coord {
        self.r.pawns[p.index()]
    }

    /// Returns the player whose pawn stands on `c`, if any
    #[inline]
    pub fn pawn_at(&self, c: Coord) -> Option<Player> {
        Player::iter().find(|&p| self.pawn(p) == c)
    }

    /// Returns `true` if a unit step from `from` in direction `dir` crosses a fence or leaves
    /// the board
    #[inline]
    pub fn is_edge_blocked(&self, from: Coord, dir: Direction) -> bool {
        match geometry::blocking_marker(from.col(), from.row(), dir) {
            Some((orientation, col, row)) => self.markers(Coord::new(col, row)).has(orientation),
            None => true,
        }
    }

    /// Iterates over all the fences placed by players, i.e. excluding the boundary markers
    pub fn fences(&self) -> impl Iterator<Item = Fence> + '_ {
        Fence::iter().filter(move |&f| !is_boundary(f) && self.has_fence(f))
    }

    #[inline]
    pub(crate) fn put_fence(&mut self, fence: Fence) {
        self.r.put(fence);
    }

    #[inline]
    pub(crate) fn take_fence(&mut self, fence: Fence) {
        debug_assert!(!is_boundary(fence), "boundary markers cannot be removed");
        self.r.take(fence);
    }

    #[inline]
    pub(crate) fn set_pawn(&mut self, p: Player, c: Coord) {
        self.r.pawns[p.index()] = c;
    }

    /// Wraps the board to allow pretty-printing with the given style `Style`
    ///
    /// The resulting wrapper implements [`fmt::Display`], so can be used with
    /// `write!()`, `println!()`, or `ToString::to_string`. Row 8 is drawn on top.
    ///
    /// # Example
    ///
    /// ```
    /// # use quoridor::{Board, board::PrettyStyle};
    /// #
    /// let b = Board::initial();
    /// let text = b.pretty(PrettyStyle::Ascii).to_string();
    /// let lines: Vec<&str> = text.lines().collect();
    ///
    /// assert_eq!(lines[0], "9|. . . . 2 . . . .");
    /// assert_eq!(lines[16], "1|. . . . 1 . . . .");
    /// assert_eq!(lines[17], "-+-----------------");
    /// assert_eq!(lines[18], " |a b c d e f g h i");
    /// ```
    #[inline]
    pub fn pretty(&self, style: PrettyStyle) -> Pretty<'_> {
        Pretty { board: self, style }
    }
}

impl Default for Board {
    #[inline]
    fn default() -> Board {
        Board::initial()
    }
}

impl TryFrom<RawBoard> for Board {
    type Error = ValidateError;

    fn try_from(raw: RawBoard) -> Result<Board, ValidateError> {
        let [one, two] = raw.pawns;
        if one == two {
            return Err(ValidateError::SameCell(one));
        }
        if let Some(fence) = boundary().find(|&f| !raw.has(f)) {
            return Err(ValidateError::MissingBoundary(fence));
        }
        if Player::iter().all(|p| raw.pawns[p.index()].row() == p.goal_row()) {
            return Err(ValidateError::BothOnGoal);
        }
        let board = Board { r: raw };
        for p in Player::iter() {
            if !path::has_path(&board, board.pawn(p), p.goal_row()) {
                return Err(ValidateError::NoPath(p));
            }
        }
        Ok(board)
    }
}

/// Style for [`Board::pretty()`]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum PrettyStyle {
    Ascii,
    Utf8,
}

/// Wrapper to pretty-print the board
///
/// See docs for [`Board::pretty()`] for more details.
pub struct Pretty<'a> {
    board: &'a Board,
    style: PrettyStyle,
}

trait StyleTable {
    const HORZ_FRAME: char;
    const VERT_FRAME: char;
    const ANGLE_FRAME: char;
    const EMPTY_CELL: char;
    const HORZ_FENCE: char;
    const VERT_FENCE: char;

    fn pawn(p: Player) -> char;

    fn cell(b: &Board, c: Coord) -> char {
        match b.pawn_at(c) {
            Some(p) => Self::pawn(p),
            None => Self::EMPTY_CELL,
        }
    }

    fn fmt(b: &Board, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        let mut line = String::new();
        for row in (0..BOARD_SIZE as u8).rev() {
            line.clear();
            line.push((b'1' + row) as char);
            line.push(Self::VERT_FRAME);
            for col in 0..BOARD_SIZE as u8 {
                let c = Coord::new(col, row);
                if col != 0 {
                    line.push(if b.markers(c).has(Orientation::Vertical) {
                        Self::VERT_FENCE
                    } else {
                        ' '
                    });
                }
                line.push(Self::cell(b, c));
            }
            writeln!(f, "{}", line.trim_end())?;
            if row == 0 {
                break;
            }

            line.clear();
            line.push(' ');
            line.push(Self::VERT_FRAME);
            for col in 0..BOARD_SIZE as u8 {
                if col != 0 {
                    line.push(' ');
                }
                line.push(if b.markers(Coord::new(col, row)).has(Orientation::Horizontal) {
                    Self::HORZ_FENCE
                } else {
                    ' '
                });
            }
            writeln!(f, "{}", line.trim_end())?;
        }
        write!(f, "{}{}", Self::HORZ_FRAME, Self::ANGLE_FRAME)?;
        for _ in 0..2 * BOARD_SIZE - 1 {
            write!(f, "{}", Self::HORZ_FRAME)?;
        }
        writeln!(f)?;
        write!(f, " {}", Self::VERT_FRAME)?;
        for col in 0..BOARD_SIZE as u8 {
            if col != 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", (b'a' + col) as char)?;
        }
        writeln!(f)?;
        Ok(())
    }
}

struct AsciiStyleTable;
struct Utf8StyleTable;

impl StyleTable for AsciiStyleTable {
    const HORZ_FRAME: char = '-';
    const VERT_FRAME: char = '|';
    const ANGLE_FRAME: char = '+';
    const EMPTY_CELL: char = '.';
    const HORZ_FENCE: char = '-';
    const VERT_FENCE: char = '|';

    fn pawn(p: Player) -> char {
        match p {
            Player::One => '1',
            Player::Two => '2',
        }
    }
}

impl StyleTable for Utf8StyleTable {
    const HORZ_FRAME: char = '─';
    const VERT_FRAME: char = '│';
    const ANGLE_FRAME: char = '┼';
    const EMPTY_CELL: char = '·';
    const HORZ_FENCE: char = '━';
    const VERT_FENCE: char = '┃';

    fn pawn(p: Player) -> char {
        match p {
            Player::One => '①',
            Player::Two => '②',
        }
    }
}

impl<'a> fmt::Display for Pretty<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        match self.style {
            PrettyStyle::Ascii => AsciiStyleTable::fmt(self.board, f),
            PrettyStyle::Utf8 => Utf8StyleTable::fmt(self.board, f),
        }
    }
}
