use super::attack_tables::{
    bishop_attacks, king_attacks, knight_attacks, pawn_attacks, rook_attacks,
};
use super::{Bitboard, CastlingRights, Color, Piece, Square};

/// A chess position.
///
/// Twelve piece bitboards indexed by `[color][piece]`, plus per-color and total
/// occupancy kept in sync with them. The struct is plain data and `Copy`:
/// speculative move application works on a copy that is kept or dropped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Position {
    pub(crate) pieces: [[Bitboard; 6]; 2],
    pub(crate) occupied: [Bitboard; 2],
    pub(crate) all_occupied: Bitboard,
    pub(crate) side_to_move: Color,
    pub(crate) castling: CastlingRights,
    pub(crate) en_passant: Option<Square>,
    pub(crate) halfmove_clock: u32,
    pub(crate) fullmove_number: u32,
}

const BACK_RANK: [Piece; 8] = [
    Piece::Rook,
    Piece::Knight,
    Piece::Bishop,
    Piece::Queen,
    Piece::King,
    Piece::Bishop,
    Piece::Knight,
    Piece::Rook,
];

impl Position {
    /// The standard starting position.
    #[must_use]
    pub fn new() -> Self {
        let mut position = Position::empty();
        for (file, &piece) in BACK_RANK.iter().enumerate() {
            let file = file as u8;
            position.set_piece(Square::new(0, file), Color::White, piece);
            position.set_piece(Square::new(1, file), Color::White, Piece::Pawn);
            position.set_piece(Square::new(6, file), Color::Black, Piece::Pawn);
            position.set_piece(Square::new(7, file), Color::Black, piece);
        }
        position.castling = CastlingRights::all();
        position
    }

    /// A board with no pieces, White to move, no castling rights.
    #[must_use]
    pub const fn empty() -> Self {
        Position {
            pieces: [[Bitboard::EMPTY; 6]; 2],
            occupied: [Bitboard::EMPTY; 2],
            all_occupied: Bitboard::EMPTY,
            side_to_move: Color::White,
            castling: CastlingRights::none(),
            en_passant: None,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }

    #[inline]
    #[must_use]
    pub const fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    #[must_use]
    pub const fn castling_rights(&self) -> CastlingRights {
        self.castling
    }

    /// Square a pawn may capture onto en passant, if any.
    #[inline]
    #[must_use]
    pub const fn en_passant(&self) -> Option<Square> {
        self.en_passant
    }

    #[inline]
    #[must_use]
    pub const fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    #[inline]
    #[must_use]
    pub const fn fullmove_number(&self) -> u32 {
        self.fullmove_number
    }

    /// Bitboard of one piece type of one color.
    #[inline]
    #[must_use]
    pub const fn pieces(&self, color: Color, piece: Piece) -> Bitboard {
        self.pieces[color.index()][piece.index()]
    }

    #[inline]
    #[must_use]
    pub const fn occupied_by(&self, color: Color) -> Bitboard {
        self.occupied[color.index()]
    }

    #[inline]
    #[must_use]
    pub const fn all_occupied(&self) -> Bitboard {
        self.all_occupied
    }

    pub fn set_side_to_move(&mut self, color: Color) {
        self.side_to_move = color;
    }

    pub fn set_castling_rights(&mut self, rights: CastlingRights) {
        self.castling = rights;
    }

    pub fn set_en_passant(&mut self, square: Option<Square>) {
        self.en_passant = square;
    }

    pub fn set_halfmove_clock(&mut self, clock: u32) {
        self.halfmove_clock = clock;
    }

    pub fn set_fullmove_number(&mut self, number: u32) {
        self.fullmove_number = number;
    }

    /// Piece of `color` on `sq`, if any.
    #[inline]
    #[must_use]
    pub fn piece_at(&self, sq: Square, color: Color) -> Option<Piece> {
        if !self.occupied[color.index()].contains(sq) {
            return None;
        }
        Piece::ALL
            .into_iter()
            .find(|&piece| self.pieces[color.index()][piece.index()].contains(sq))
    }

    /// Color and piece on `sq`, if any.
    #[must_use]
    pub fn piece_on(&self, sq: Square) -> Option<(Color, Piece)> {
        Color::BOTH
            .into_iter()
            .find_map(|color| self.piece_at(sq, color).map(|piece| (color, piece)))
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(&self, sq: Square) -> bool {
        !self.all_occupied.contains(sq)
    }

    /// Put a piece on an empty square.
    #[inline]
    pub fn set_piece(&mut self, sq: Square, color: Color, piece: Piece) {
        debug_assert!(self.is_empty(sq), "set_piece on occupied square {sq}");
        let bit = sq.bitboard();
        self.pieces[color.index()][piece.index()] |= bit;
        self.occupied[color.index()] |= bit;
        self.all_occupied |= bit;
    }

    /// Remove a known piece from `sq`.
    #[inline]
    pub fn pop_piece(&mut self, sq: Square, color: Color, piece: Piece) {
        debug_assert!(
            self.pieces[color.index()][piece.index()].contains(sq),
            "pop_piece: no {piece:?} of {color} on {sq}"
        );
        let keep = !sq.bitboard();
        self.pieces[color.index()][piece.index()] &= keep;
        self.occupied[color.index()] &= keep;
        self.all_occupied &= keep;
    }

    /// Remove whatever piece of `color` stands on `sq` and return its type.
    pub fn clear_square(&mut self, sq: Square, color: Color) -> Option<Piece> {
        let removed = self.piece_at(sq, color);
        let keep = !sq.bitboard();
        for board in &mut self.pieces[color.index()] {
            *board &= keep;
        }
        self.occupied[color.index()] &= keep;
        self.all_occupied &= keep;
        removed
    }

    /// Whether any piece of `by` attacks `sq` with the current occupancy.
    ///
    /// Pawn attackers are found by looking back from `sq` with the pawn
    /// attack mask of the defending color.
    #[must_use]
    pub fn is_square_attacked(&self, sq: Square, by: Color) -> bool {
        let theirs = &self.pieces[by.index()];
        if !(pawn_attacks(by.opponent(), sq) & theirs[Piece::Pawn.index()]).is_empty() {
            return true;
        }
        if !(knight_attacks(sq) & theirs[Piece::Knight.index()]).is_empty() {
            return true;
        }
        let queens = theirs[Piece::Queen.index()];
        if !(bishop_attacks(sq, self.all_occupied) & (theirs[Piece::Bishop.index()] | queens))
            .is_empty()
        {
            return true;
        }
        if !(rook_attacks(sq, self.all_occupied) & (theirs[Piece::Rook.index()] | queens))
            .is_empty()
        {
            return true;
        }
        !(king_attacks(sq) & theirs[Piece::King.index()]).is_empty()
    }

    /// Square of the king of `color`. There must be exactly one.
    #[inline]
    #[must_use]
    pub fn king_square(&self, color: Color) -> Square {
        let kings = self.pieces[color.index()][Piece::King.index()];
        debug_assert_eq!(kings.popcount(), 1, "{color} must have exactly one king");
        kings.lsb()
    }

    /// Whether the king of `color` is attacked.
    #[inline]
    #[must_use]
    pub fn is_king_checked(&self, color: Color) -> bool {
        self.is_square_attacked(self.king_square(color), color.opponent())
    }

    /// Whether the side to move is in check.
    #[inline]
    #[must_use]
    pub fn in_check(&self) -> bool {
        self.is_king_checked(self.side_to_move)
    }

    /// Check that the piece bitboards are disjoint and agree with the
    /// occupancy bitboards.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        let mut union = Bitboard::EMPTY;
        for color in Color::BOTH {
            let mut by_color = Bitboard::EMPTY;
            for piece in Piece::ALL {
                let board = self.pieces[color.index()][piece.index()];
                if !(union & board).is_empty() {
                    return false;
                }
                union |= board;
                by_color |= board;
            }
            if by_color != self.occupied[color.index()] {
                return false;
            }
        }
        (self.occupied[0] & self.occupied[1]).is_empty() && union == self.all_occupied
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::new()
    }
}
