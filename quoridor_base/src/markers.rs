use crate::types::Orientation;
use derive_more::{BitAnd, BitAndAssign, BitOr, BitOrAssign, Not};
use std::fmt;

/// Set of fence markers recorded at a single cell
#[derive(
    Default,
    Copy,
    Clone,
    PartialEq,
    Eq,
    Hash,
    BitAnd,
    BitAndAssign,
    BitOr,
    BitOrAssign,
    Not,
)]
pub struct Markers(u8);

impl Markers {
    pub const EMPTY: Markers = Markers(0);
    pub const HORIZONTAL: Markers = Markers::from_orientation(Orientation::Horizontal);
    pub const VERTICAL: Markers = Markers::from_orientation(Orientation::Vertical);
    pub const BOTH: Markers = Markers(Self::HORIZONTAL.0 | Self::VERTICAL.0);

    pub const fn from_orientation(o: Orientation) -> Markers {
        Markers(1_u8 << o.index())
    }

    pub fn set(&mut self, o: Orientation) {
        *self |= Markers::from_orientation(o);
    }

    pub fn unset(&mut self, o: Orientation) {
        *self &= !Markers::from_orientation(o);
    }

    pub const fn has(&self, o: Orientation) -> bool {
        ((self.0 >> o.index()) & 1) != 0
    }

    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }
}

impl fmt::Debug for Markers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        write!(f, "Markers({})", self)
    }
}

impl fmt::Display for Markers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        if self.is_empty() {
            return write!(f, "-");
        }
        if self.has(Orientation::Vertical) {
            write!(f, "v")?;
        }
        if self.has(Orientation::Horizontal) {
            write!(f, "h")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markers() {
        let mut m = Markers::EMPTY;
        assert!(m.is_empty());
        assert!(!m.has(Orientation::Horizontal));
        assert_eq!(m.to_string(), "-");

        m.set(Orientation::Horizontal);
        assert!(m.has(Orientation::Horizontal));
        assert!(!m.has(Orientation::Vertical));
        assert_eq!(m, Markers::HORIZONTAL);
        assert_eq!(m.to_string(), "h");

        m |= Markers::VERTICAL;
        assert_eq!(m, Markers::BOTH);
        assert_eq!(m.to_string(), "vh");

        m.unset(Orientation::Horizontal);
        assert_eq!(m, Markers::VERTICAL);
        assert_eq!(m.to_string(), "v");
        // Removing an absent marker keeps the others
        m.unset(Orientation::Horizontal);
        assert_eq!(m, Markers::VERTICAL);
        m.unset(Orientation::Vertical);
        assert!(m.is_empty());
        assert_eq!(Markers::BOTH & Markers::HORIZONTAL, Markers::HORIZONTAL);
    }
}
