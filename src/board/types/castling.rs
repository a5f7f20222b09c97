//! Castling rights and castling types.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::bitboard::Bitboard;
use super::piece::Color;
use super::square::Square;

pub(crate) const CASTLE_WHITE_K: u8 = 1 << 0;
pub(crate) const CASTLE_WHITE_Q: u8 = 1 << 1;
pub(crate) const CASTLE_BLACK_K: u8 = 1 << 2;
pub(crate) const CASTLE_BLACK_Q: u8 = 1 << 3;

/// All castling rights combined
pub(crate) const ALL_CASTLING_RIGHTS: u8 =
    CASTLE_WHITE_K | CASTLE_WHITE_Q | CASTLE_BLACK_K | CASTLE_BLACK_Q;

/// Rights that survive a move touching each square. A move ANDs the mask of
/// both its source and target square into the current rights.
pub(crate) const CASTLING_RIGHTS_MASK: [u8; 64] = {
    let mut masks = [ALL_CASTLING_RIGHTS; 64];
    masks[Square::A1.as_usize()] = ALL_CASTLING_RIGHTS & !CASTLE_WHITE_Q;
    masks[Square::E1.as_usize()] = ALL_CASTLING_RIGHTS & !(CASTLE_WHITE_K | CASTLE_WHITE_Q);
    masks[Square::H1.as_usize()] = ALL_CASTLING_RIGHTS & !CASTLE_WHITE_K;
    masks[Square::A8.as_usize()] = ALL_CASTLING_RIGHTS & !CASTLE_BLACK_Q;
    masks[Square::E8.as_usize()] = ALL_CASTLING_RIGHTS & !(CASTLE_BLACK_K | CASTLE_BLACK_Q);
    masks[Square::H8.as_usize()] = ALL_CASTLING_RIGHTS & !CASTLE_BLACK_K;
    masks
};

/// Castling rights represented as a bitmask
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CastlingRights(u8);

impl CastlingRights {
    /// No castling rights
    #[must_use]
    pub const fn none() -> Self {
        CastlingRights(0)
    }

    /// All castling rights (both sides can castle kingside and queenside)
    #[must_use]
    pub const fn all() -> Self {
        CastlingRights(ALL_CASTLING_RIGHTS)
    }

    #[inline]
    #[must_use]
    pub const fn has(self, castle: Castle) -> bool {
        self.0 & castle.bit() != 0
    }

    #[inline]
    pub fn set(&mut self, castle: Castle) {
        self.0 |= castle.bit();
    }

    #[inline]
    pub fn remove(&mut self, castle: Castle) {
        self.0 &= !castle.bit();
    }

    /// Drop both rights of one color.
    #[inline]
    pub fn remove_color(&mut self, color: Color) {
        self.0 &= match color {
            Color::White => !(CASTLE_WHITE_K | CASTLE_WHITE_Q),
            Color::Black => !(CASTLE_BLACK_K | CASTLE_BLACK_Q),
        };
    }

    /// Keep only the rights still valid after a move between `from` and `to`.
    #[inline]
    pub(crate) fn update_for_move(&mut self, from: Square, to: Square) {
        self.0 &= CASTLING_RIGHTS_MASK[from.as_usize()] & CASTLING_RIGHTS_MASK[to.as_usize()];
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Get the raw 4-bit mask
    #[inline]
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self.0
    }

    /// Create from raw bitmask value; bits above the low four are dropped
    #[inline]
    #[must_use]
    pub const fn from_u8(value: u8) -> Self {
        CastlingRights(value & ALL_CASTLING_RIGHTS)
    }
}

/// One of the four ways to castle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Castle {
    WhiteKingside,
    WhiteQueenside,
    BlackKingside,
    BlackQueenside,
}

impl Castle {
    pub const ALL: [Castle; 4] = [
        Castle::WhiteKingside,
        Castle::WhiteQueenside,
        Castle::BlackKingside,
        Castle::BlackQueenside,
    ];

    #[inline]
    #[must_use]
    pub const fn new(color: Color, kingside: bool) -> Self {
        match (color, kingside) {
            (Color::White, true) => Castle::WhiteKingside,
            (Color::White, false) => Castle::WhiteQueenside,
            (Color::Black, true) => Castle::BlackKingside,
            (Color::Black, false) => Castle::BlackQueenside,
        }
    }

    /// The flag this castling type occupies in [`CastlingRights`] and in the
    /// castling field of a packed move.
    #[inline]
    #[must_use]
    pub const fn bit(self) -> u8 {
        match self {
            Castle::WhiteKingside => CASTLE_WHITE_K,
            Castle::WhiteQueenside => CASTLE_WHITE_Q,
            Castle::BlackKingside => CASTLE_BLACK_K,
            Castle::BlackQueenside => CASTLE_BLACK_Q,
        }
    }

    /// Inverse of [`Castle::bit`]; anything but a single known flag is `None`.
    #[inline]
    #[must_use]
    pub const fn from_bit(bit: u8) -> Option<Self> {
        match bit {
            CASTLE_WHITE_K => Some(Castle::WhiteKingside),
            CASTLE_WHITE_Q => Some(Castle::WhiteQueenside),
            CASTLE_BLACK_K => Some(Castle::BlackKingside),
            CASTLE_BLACK_Q => Some(Castle::BlackQueenside),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Castle::WhiteKingside | Castle::WhiteQueenside => Color::White,
            Castle::BlackKingside | Castle::BlackQueenside => Color::Black,
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_kingside(self) -> bool {
        matches!(self, Castle::WhiteKingside | Castle::BlackKingside)
    }

    #[inline]
    #[must_use]
    pub const fn king_from(self) -> Square {
        match self.color() {
            Color::White => Square::E1,
            Color::Black => Square::E8,
        }
    }

    #[inline]
    #[must_use]
    pub const fn king_to(self) -> Square {
        match self {
            Castle::WhiteKingside => Square::G1,
            Castle::WhiteQueenside => Square::C1,
            Castle::BlackKingside => Square::G8,
            Castle::BlackQueenside => Square::C8,
        }
    }

    #[inline]
    #[must_use]
    pub const fn rook_from(self) -> Square {
        match self {
            Castle::WhiteKingside => Square::H1,
            Castle::WhiteQueenside => Square::A1,
            Castle::BlackKingside => Square::H8,
            Castle::BlackQueenside => Square::A8,
        }
    }

    #[inline]
    #[must_use]
    pub const fn rook_to(self) -> Square {
        match self {
            Castle::WhiteKingside => Square::F1,
            Castle::WhiteQueenside => Square::D1,
            Castle::BlackKingside => Square::F8,
            Castle::BlackQueenside => Square::D8,
        }
    }

    /// Squares strictly between king and rook; all must be empty.
    #[inline]
    #[must_use]
    pub const fn between(self) -> Bitboard {
        match self {
            Castle::WhiteKingside => Bitboard(0x60),
            Castle::WhiteQueenside => Bitboard(0x0E),
            Castle::BlackKingside => Bitboard(0x60 << 56),
            Castle::BlackQueenside => Bitboard(0x0E << 56),
        }
    }

    /// King origin, transit and destination; none may be attacked.
    #[inline]
    #[must_use]
    pub const fn king_path(self) -> [Square; 3] {
        match self {
            Castle::WhiteKingside => [Square::E1, Square::F1, Square::G1],
            Castle::WhiteQueenside => [Square::E1, Square::D1, Square::C1],
            Castle::BlackKingside => [Square::E8, Square::F8, Square::G8],
            Castle::BlackQueenside => [Square::E8, Square::D8, Square::C8],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bits_match_external_encoding() {
        assert_eq!(Castle::WhiteKingside.bit(), 1);
        assert_eq!(Castle::WhiteQueenside.bit(), 2);
        assert_eq!(Castle::BlackKingside.bit(), 4);
        assert_eq!(Castle::BlackQueenside.bit(), 8);
        for castle in Castle::ALL {
            assert_eq!(Castle::from_bit(castle.bit()), Some(castle));
        }
        assert_eq!(Castle::from_bit(0), None);
        assert_eq!(Castle::from_bit(3), None);
    }

    #[test]
    fn test_between_squares_exclude_king_and_rook() {
        for castle in Castle::ALL {
            let between = castle.between();
            assert!(!between.contains(castle.king_from()));
            assert!(!between.contains(castle.rook_from()));
            assert!(between.contains(castle.king_to()));
            assert!(between.contains(castle.rook_to()));
        }
    }

    #[test]
    fn test_rights_mask_for_corner_and_king_squares() {
        let mut rights = CastlingRights::all();
        rights.update_for_move(Square::H1, Square::H8);
        assert!(!rights.has(Castle::WhiteKingside));
        assert!(!rights.has(Castle::BlackKingside));
        assert!(rights.has(Castle::WhiteQueenside));
        assert!(rights.has(Castle::BlackQueenside));

        let mut rights = CastlingRights::all();
        rights.update_for_move(Square::E8, Square::new(6, 4));
        assert_eq!(rights.as_u8(), CASTLE_WHITE_K | CASTLE_WHITE_Q);
    }

    #[test]
    fn test_remove_color() {
        let mut rights = CastlingRights::all();
        rights.remove_color(Color::White);
        assert_eq!(rights.as_u8(), CASTLE_BLACK_K | CASTLE_BLACK_Q);
        rights.remove(Castle::BlackKingside);
        assert_eq!(rights.as_u8(), CASTLE_BLACK_Q);
        rights.set(Castle::WhiteQueenside);
        assert!(rights.has(Castle::WhiteQueenside));
    }
}
