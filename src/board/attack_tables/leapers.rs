//! Direct attack masks for leaper pieces (knights, kings, pawns).
//!
//! Every mask is produced by shifting a single-square bitboard by the piece's
//! fixed offsets and ANDing away the files a shift can wrap onto.

use crate::board::types::{Bitboard, Color, Square};

const NOT_A: u64 = !Bitboard::FILE_A.0;
const NOT_H: u64 = !Bitboard::FILE_H.0;
const NOT_AB: u64 = !(Bitboard::FILE_A.0 | Bitboard::FILE_B.0);
const NOT_GH: u64 = !(Bitboard::FILE_G.0 | Bitboard::FILE_H.0);

pub(super) const fn knight_mask(sq: Square) -> Bitboard {
    let b = sq.bitboard().0;
    Bitboard(
        ((b << 17) & NOT_A)
            | ((b << 15) & NOT_H)
            | ((b << 10) & NOT_AB)
            | ((b << 6) & NOT_GH)
            | ((b >> 15) & NOT_A)
            | ((b >> 17) & NOT_H)
            | ((b >> 6) & NOT_AB)
            | ((b >> 10) & NOT_GH),
    )
}

pub(super) const fn king_mask(sq: Square) -> Bitboard {
    let b = sq.bitboard().0;
    Bitboard(
        (b << 8)
            | (b >> 8)
            | ((b << 1) & NOT_A)
            | ((b >> 1) & NOT_H)
            | ((b << 9) & NOT_A)
            | ((b << 7) & NOT_H)
            | ((b >> 7) & NOT_A)
            | ((b >> 9) & NOT_H),
    )
}

/// Squares a pawn of `color` standing on `sq` attacks.
pub(super) const fn pawn_mask(color: Color, sq: Square) -> Bitboard {
    let b = sq.bitboard().0;
    match color {
        Color::White => Bitboard(((b << 7) & NOT_H) | ((b << 9) & NOT_A)),
        Color::Black => Bitboard(((b >> 9) & NOT_H) | ((b >> 7) & NOT_A)),
    }
}

pub(super) const fn build_knight_table() -> [Bitboard; 64] {
    let mut table = [Bitboard::EMPTY; 64];
    let mut sq = 0;
    while sq < 64 {
        table[sq as usize] = knight_mask(Square::from_index(sq));
        sq += 1;
    }
    table
}

pub(super) const fn build_king_table() -> [Bitboard; 64] {
    let mut table = [Bitboard::EMPTY; 64];
    let mut sq = 0;
    while sq < 64 {
        table[sq as usize] = king_mask(Square::from_index(sq));
        sq += 1;
    }
    table
}

/// Indexed `[color][square]`.
pub(super) const fn build_pawn_table() -> [[Bitboard; 64]; 2] {
    let mut table = [[Bitboard::EMPTY; 64]; 2];
    let mut sq = 0;
    while sq < 64 {
        let square = Square::from_index(sq);
        table[Color::Black.index()][sq as usize] = pawn_mask(Color::Black, square);
        table[Color::White.index()][sq as usize] = pawn_mask(Color::White, square);
        sq += 1;
    }
    table
}
