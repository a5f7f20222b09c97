//! Square types and utilities.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::bitboard::Bitboard;
use crate::board::error::SquareError;

/// A square on the chess board, LERF indexed (a1 = 0, b1 = 1, ..., h8 = 63).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Square(u8);

impl Square {
    pub const A1: Square = Square(0);
    pub const B1: Square = Square(1);
    pub const C1: Square = Square(2);
    pub const D1: Square = Square(3);
    pub const E1: Square = Square(4);
    pub const F1: Square = Square(5);
    pub const G1: Square = Square(6);
    pub const H1: Square = Square(7);
    pub const A8: Square = Square(56);
    pub const B8: Square = Square(57);
    pub const C8: Square = Square(58);
    pub const D8: Square = Square(59);
    pub const E8: Square = Square(60);
    pub const F8: Square = Square(61);
    pub const G8: Square = Square(62);
    pub const H8: Square = Square(63);

    /// Square from rank and file (both 0-7, rank 0 = rank 1, file 0 = file a).
    #[inline]
    #[must_use]
    pub const fn new(rank: u8, file: u8) -> Self {
        debug_assert!(rank < 8 && file < 8);
        Square(rank * 8 + file)
    }

    /// Create a square from an index (0-63)
    #[inline]
    #[must_use]
    pub const fn from_index(idx: u8) -> Self {
        debug_assert!(idx < 64);
        Square(idx)
    }

    /// Checked variant of [`Square::new`].
    #[must_use]
    pub const fn try_new(rank: u8, file: u8) -> Option<Self> {
        if rank < 8 && file < 8 {
            Some(Square(rank * 8 + file))
        } else {
            None
        }
    }

    #[inline]
    #[must_use]
    pub const fn index(self) -> u8 {
        self.0
    }

    #[inline]
    #[must_use]
    pub const fn as_usize(self) -> usize {
        self.0 as usize
    }

    /// Get the rank (0-7, where 0 = rank 1)
    #[inline]
    #[must_use]
    pub const fn rank(self) -> u8 {
        self.0 / 8
    }

    /// Get the file (0-7, where 0 = file a)
    #[inline]
    #[must_use]
    pub const fn file(self) -> u8 {
        self.0 % 8
    }

    #[inline]
    #[must_use]
    pub const fn bitboard(self) -> Bitboard {
        Bitboard(1u64 << self.0)
    }

    /// Square `delta` indices away. The result must stay on the board.
    #[inline]
    #[must_use]
    pub(crate) const fn offset(self, delta: i8) -> Self {
        let idx = self.0 as i8 + delta;
        debug_assert!(idx >= 0 && idx < 64);
        Square(idx as u8)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (self.file() + b'a') as char, self.rank() + 1)
    }
}

impl TryFrom<(u8, u8)> for Square {
    type Error = SquareError;

    fn try_from((rank, file): (u8, u8)) -> Result<Self, Self::Error> {
        if rank >= 8 {
            return Err(SquareError::RankOutOfBounds { rank });
        }
        if file >= 8 {
            return Err(SquareError::FileOutOfBounds { file });
        }
        Ok(Square::new(rank, file))
    }
}

impl FromStr for Square {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SquareError::InvalidNotation {
            notation: s.to_string(),
        };
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return Err(invalid());
        }
        let file = match bytes[0] {
            b'a'..=b'h' => bytes[0] - b'a',
            _ => return Err(invalid()),
        };
        let rank = match bytes[1] {
            b'1'..=b'8' => bytes[1] - b'1',
            _ => return Err(invalid()),
        };
        Ok(Square::new(rank, file))
    }
}
