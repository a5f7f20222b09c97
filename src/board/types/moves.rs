//! Packed move representation and the fixed-capacity move buffer.

use std::fmt;
use std::ops::Index;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::castling::Castle;
use super::piece::{Color, Piece};
use super::square::Square;

const FROM_SHIFT: u32 = 0;
const TO_SHIFT: u32 = 6;
const PIECE_SHIFT: u32 = 12;
const COLOR_SHIFT: u32 = 15;
const TARGET_PIECE_SHIFT: u32 = 17;
const TARGET_COLOR_SHIFT: u32 = 20;
const PROMOTION_SHIFT: u32 = 22;
const CAPTURE_SHIFT: u32 = 25;
const DOUBLE_PUSH_SHIFT: u32 = 26;
const EN_PASSANT_SHIFT: u32 = 27;
const CASTLE_SHIFT: u32 = 28;

const SQUARE_MASK: u32 = 0x3F;
const PIECE_MASK: u32 = 0x7;
const COLOR_MASK: u32 = 0x3;
const CASTLE_MASK: u32 = 0xF;

/// Compact 32-bit move.
///
/// Encoding:
/// - bits 0-5:   source square
/// - bits 6-11:  target square
/// - bits 12-14: moving piece
/// - bits 15-16: moving color
/// - bits 17-19: captured piece (6 = none)
/// - bits 20-21: captured color (2 = none)
/// - bits 22-24: promotion piece (6 = none)
/// - bit 25:     capture
/// - bit 26:     double pawn push
/// - bit 27:     en passant
/// - bits 28-31: castling type (one of the castling-rights flags, 0 = none)
///
/// The codec performs no validation; callers keep every field in range.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move(u32);

impl Move {
    /// A quiet move of `piece` from `from` to `to`, with no capture, promotion
    /// or special flag.
    #[inline]
    #[must_use]
    pub const fn new(from: Square, to: Square, piece: Piece, color: Color) -> Self {
        Move(
            ((from.index() as u32) << FROM_SHIFT)
                | ((to.index() as u32) << TO_SHIFT)
                | ((piece as u32) << PIECE_SHIFT)
                | ((color as u32) << COLOR_SHIFT)
                | (Piece::NONE_CODE << TARGET_PIECE_SHIFT)
                | (Color::NONE_CODE << TARGET_COLOR_SHIFT)
                | (Piece::NONE_CODE << PROMOTION_SHIFT),
        )
    }

    /// Record a captured piece and set the capture flag.
    #[inline]
    #[must_use]
    pub const fn with_capture(self, color: Color, piece: Piece) -> Self {
        let cleared = self.0
            & !(PIECE_MASK << TARGET_PIECE_SHIFT)
            & !(COLOR_MASK << TARGET_COLOR_SHIFT);
        Move(
            cleared
                | ((piece as u32) << TARGET_PIECE_SHIFT)
                | ((color as u32) << TARGET_COLOR_SHIFT)
                | (1 << CAPTURE_SHIFT),
        )
    }

    #[inline]
    #[must_use]
    pub const fn with_promotion(self, piece: Piece) -> Self {
        let cleared = self.0 & !(PIECE_MASK << PROMOTION_SHIFT);
        Move(cleared | ((piece as u32) << PROMOTION_SHIFT))
    }

    #[inline]
    #[must_use]
    pub const fn with_double_push(self) -> Self {
        Move(self.0 | (1 << DOUBLE_PUSH_SHIFT))
    }

    /// Set the en-passant flag. The captured pawn is recorded separately
    /// through [`Move::with_capture`].
    #[inline]
    #[must_use]
    pub const fn with_en_passant(self) -> Self {
        Move(self.0 | (1 << EN_PASSANT_SHIFT))
    }

    #[inline]
    #[must_use]
    pub const fn with_castle(self, castle: Castle) -> Self {
        let cleared = self.0 & !(CASTLE_MASK << CASTLE_SHIFT);
        Move(cleared | ((castle.bit() as u32) << CASTLE_SHIFT))
    }

    #[inline]
    #[must_use]
    pub const fn from(self) -> Square {
        Square::from_index(((self.0 >> FROM_SHIFT) & SQUARE_MASK) as u8)
    }

    #[inline]
    #[must_use]
    pub const fn to(self) -> Square {
        Square::from_index(((self.0 >> TO_SHIFT) & SQUARE_MASK) as u8)
    }

    /// The piece being moved (a pawn for promotions).
    #[inline]
    #[must_use]
    pub fn piece(self) -> Piece {
        let code = (self.0 >> PIECE_SHIFT) & PIECE_MASK;
        debug_assert!(code < Piece::NONE_CODE, "move without a moving piece");
        Piece::from_index(code as usize).unwrap_or(Piece::Pawn)
    }

    #[inline]
    #[must_use]
    pub fn color(self) -> Color {
        let code = (self.0 >> COLOR_SHIFT) & COLOR_MASK;
        debug_assert!(code < Color::NONE_CODE, "move without a moving color");
        Color::from_index(code as usize).unwrap_or(Color::White)
    }

    /// Captured piece type, `None` when the target square was empty.
    #[inline]
    #[must_use]
    pub const fn target_piece(self) -> Option<Piece> {
        Piece::from_index(((self.0 >> TARGET_PIECE_SHIFT) & PIECE_MASK) as usize)
    }

    #[inline]
    #[must_use]
    pub const fn target_color(self) -> Option<Color> {
        Color::from_index(((self.0 >> TARGET_COLOR_SHIFT) & COLOR_MASK) as usize)
    }

    /// Captured color and piece together.
    #[inline]
    #[must_use]
    pub const fn captured(self) -> Option<(Color, Piece)> {
        match (self.target_color(), self.target_piece()) {
            (Some(color), Some(piece)) => Some((color, piece)),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub const fn promotion(self) -> Option<Piece> {
        Piece::from_index(((self.0 >> PROMOTION_SHIFT) & PIECE_MASK) as usize)
    }

    #[inline]
    #[must_use]
    pub const fn is_promotion(self) -> bool {
        self.promotion().is_some()
    }

    /// Returns true if this move captures a piece (including en passant)
    #[inline]
    #[must_use]
    pub const fn is_capture(self) -> bool {
        self.0 & (1 << CAPTURE_SHIFT) != 0
    }

    #[inline]
    #[must_use]
    pub const fn is_double_push(self) -> bool {
        self.0 & (1 << DOUBLE_PUSH_SHIFT) != 0
    }

    #[inline]
    #[must_use]
    pub const fn is_en_passant(self) -> bool {
        self.0 & (1 << EN_PASSANT_SHIFT) != 0
    }

    #[inline]
    #[must_use]
    pub const fn castle(self) -> Option<Castle> {
        Castle::from_bit(((self.0 >> CASTLE_SHIFT) & CASTLE_MASK) as u8)
    }

    #[inline]
    #[must_use]
    pub const fn is_castling(self) -> bool {
        (self.0 >> CASTLE_SHIFT) & CASTLE_MASK != 0
    }

    /// Get the raw 32-bit value
    #[inline]
    #[must_use]
    pub const fn as_u32(self) -> u32 {
        self.0
    }

    /// Create from raw 32-bit value
    #[inline]
    #[must_use]
    pub const fn from_u32(value: u32) -> Self {
        Move(value)
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Move({} {}{}",
            self.piece().to_fen_char(self.color()),
            self.from(),
            self.to()
        )?;
        if let Some(promo) = self.promotion() {
            write!(f, "={}", promo.to_char().to_ascii_uppercase())?;
        }
        if let Some((color, piece)) = self.captured() {
            write!(f, " x{}", piece.to_fen_char(color))?;
        }
        if self.is_double_push() {
            write!(f, " double")?;
        }
        if self.is_castling() {
            write!(f, " castle")?;
        }
        if self.is_en_passant() {
            write!(f, " ep")?;
        }
        write!(f, ")")
    }
}

/// UCI long algebraic notation, e.g. `e2e4` or `e7e8q`.
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from(), self.to())?;
        if let Some(promo) = self.promotion() {
            write!(f, "{}", promo.to_char())?;
        }
        Ok(())
    }
}

/// Upper bound on the number of legal moves in any chess position.
pub const MAX_MOVES: usize = 218;
pub(crate) const EMPTY_MOVE: Move = Move(0);

/// Fixed-capacity move buffer with a write cursor.
#[derive(Clone, Debug)]
pub struct MoveList {
    moves: [Move; MAX_MOVES],
    len: usize,
}

impl MoveList {
    #[must_use]
    pub fn new() -> Self {
        MoveList {
            moves: [EMPTY_MOVE; MAX_MOVES],
            len: 0,
        }
    }

    /// Append at the write cursor.
    #[inline]
    pub fn push(&mut self, mv: Move) {
        debug_assert!(self.len < MAX_MOVES, "move buffer overflow");
        self.moves[self.len] = mv;
        self.len += 1;
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn clear(&mut self) {
        self.len = 0;
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves[..self.len]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.as_slice().iter()
    }

    #[must_use]
    pub fn get(&self, idx: usize) -> Option<Move> {
        self.as_slice().get(idx).copied()
    }

    #[must_use]
    pub fn contains(&self, mv: Move) -> bool {
        self.as_slice().contains(&mv)
    }

    /// Keep only the moves matching `keep`, preserving their order.
    pub fn retain<F: FnMut(Move) -> bool>(&mut self, mut keep: F) {
        let mut write = 0;
        for read in 0..self.len {
            let mv = self.moves[read];
            if keep(mv) {
                self.moves[write] = mv;
                write += 1;
            }
        }
        self.len = write;
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl Default for MoveList {
    fn default() -> Self {
        MoveList::new()
    }
}

/// Owning iterator over moves in a `MoveList`
pub struct MoveListIntoIter {
    list: MoveList,
    idx: usize,
}

impl Iterator for MoveListIntoIter {
    type Item = Move;

    fn next(&mut self) -> Option<Self::Item> {
        if self.idx < self.list.len {
            let mv = self.list.moves[self.idx];
            self.idx += 1;
            Some(mv)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.list.len - self.idx;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for MoveListIntoIter {}

impl IntoIterator for MoveList {
    type Item = Move;
    type IntoIter = MoveListIntoIter;

    fn into_iter(self) -> Self::IntoIter {
        MoveListIntoIter { list: self, idx: 0 }
    }
}

impl Index<usize> for MoveList {
    type Output = Move;

    fn index(&self, idx: usize) -> &Self::Output {
        assert!(
            idx < self.len,
            "MoveList index {} out of bounds (len {})",
            idx,
            self.len
        );
        &self.moves[idx]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn square() -> impl Strategy<Value = Square> {
        (0u8..64).prop_map(Square::from_index)
    }

    fn piece() -> impl Strategy<Value = Piece> {
        (0usize..6).prop_map(|i| Piece::from_index(i).unwrap())
    }

    fn color() -> impl Strategy<Value = Color> {
        prop_oneof![Just(Color::Black), Just(Color::White)]
    }

    #[test]
    fn test_bit_layout_is_exact() {
        let e2: Square = "e2".parse().unwrap();
        let e4: Square = "e4".parse().unwrap();
        let mv = Move::new(e2, e4, Piece::Pawn, Color::White).with_double_push();
        let expected = 12 | (28 << 6) | (1 << 15) | (6 << 17) | (2 << 20) | (6 << 22) | (1 << 26);
        assert_eq!(mv.as_u32(), expected);

        let castle = Move::new(Square::E8, Square::C8, Piece::King, Color::Black)
            .with_castle(Castle::BlackQueenside);
        assert_eq!(castle.as_u32() >> 28, 8);
        assert_eq!(castle.castle(), Some(Castle::BlackQueenside));
    }

    #[test]
    fn test_en_passant_capture_fields() {
        let b5: Square = "b5".parse().unwrap();
        let c6: Square = "c6".parse().unwrap();
        let mv = Move::new(b5, c6, Piece::Pawn, Color::White)
            .with_capture(Color::Black, Piece::Pawn)
            .with_en_passant();
        assert!(mv.is_capture());
        assert!(mv.is_en_passant());
        assert!(!mv.is_double_push());
        assert_eq!(mv.captured(), Some((Color::Black, Piece::Pawn)));
        assert_eq!(mv.to_string(), "b5c6");
    }

    #[test]
    fn test_quiet_move_has_no_target() {
        let mv = Move::new(Square::G1, "f3".parse().unwrap(), Piece::Knight, Color::White);
        assert_eq!(mv.target_piece(), None);
        assert_eq!(mv.target_color(), None);
        assert_eq!(mv.promotion(), None);
        assert_eq!(mv.castle(), None);
        assert!(!mv.is_capture());
    }

    #[test]
    fn test_display_includes_promotion() {
        let mv = Move::new("e7".parse().unwrap(), Square::E8, Piece::Pawn, Color::White)
            .with_promotion(Piece::Queen);
        assert_eq!(mv.to_string(), "e7e8q");
    }

    #[test]
    fn test_move_list_retain_preserves_order() {
        let mut list = MoveList::new();
        for idx in 0..10u8 {
            list.push(Move::new(
                Square::from_index(idx),
                Square::from_index(idx + 8),
                Piece::Rook,
                Color::White,
            ));
        }
        list.retain(|mv| mv.from().index() % 2 == 0);
        let froms: Vec<u8> = list.iter().map(|mv| mv.from().index()).collect();
        assert_eq!(froms, vec![0, 2, 4, 6, 8]);
        assert_eq!(list[1].to().index(), 10);
    }

    proptest! {
        #[test]
        fn prop_decode_inverts_encode(
            from in square(),
            to in square(),
            moving in piece(),
            mover in color(),
            target in proptest::option::of((color(), piece())),
            promotion in proptest::option::of(piece()),
            double_push in any::<bool>(),
            en_passant in any::<bool>(),
            castle in proptest::option::of(proptest::sample::select(Castle::ALL.to_vec())),
        ) {
            let mut mv = Move::new(from, to, moving, mover);
            if let Some((color, piece)) = target {
                mv = mv.with_capture(color, piece);
            }
            if let Some(piece) = promotion {
                mv = mv.with_promotion(piece);
            }
            if double_push {
                mv = mv.with_double_push();
            }
            if en_passant {
                mv = mv.with_en_passant();
            }
            if let Some(castle) = castle {
                mv = mv.with_castle(castle);
            }

            let decoded = Move::from_u32(mv.as_u32());
            prop_assert_eq!(decoded.from(), from);
            prop_assert_eq!(decoded.to(), to);
            prop_assert_eq!(decoded.piece(), moving);
            prop_assert_eq!(decoded.color(), mover);
            prop_assert_eq!(decoded.captured(), target);
            prop_assert_eq!(decoded.is_capture(), target.is_some());
            prop_assert_eq!(decoded.promotion(), promotion);
            prop_assert_eq!(decoded.is_double_push(), double_push);
            prop_assert_eq!(decoded.is_en_passant(), en_passant);
            prop_assert_eq!(decoded.castle(), castle);
        }
    }
}
