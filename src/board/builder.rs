//! Fluent builder for constructing chess positions.
//!
//! Allows creating positions piece by piece rather than parsing FEN strings.
//!
//! # Example
//! ```
//! use chess_movegen::board::{Color, Piece, PositionBuilder, Square};
//!
//! let position = PositionBuilder::new()
//!     .piece(Square::E1, Color::White, Piece::King)
//!     .piece(Square::E8, Color::Black, Piece::King)
//!     .piece(Square::new(1, 0), Color::White, Piece::Pawn)
//!     .side_to_move(Color::White)
//!     .build();
//! assert_eq!(position.all_occupied().popcount(), 3);
//! ```

use super::{Castle, CastlingRights, Color, Piece, Position, Square};

/// A fluent builder for constructing `Position` values.
#[derive(Clone, Debug)]
pub struct PositionBuilder {
    pieces: Vec<(Square, Color, Piece)>,
    side_to_move: Color,
    castling: CastlingRights,
    en_passant: Option<Square>,
    halfmove_clock: u32,
    fullmove_number: u32,
}

impl Default for PositionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PositionBuilder {
    /// Create a builder for an empty board.
    #[must_use]
    pub fn new() -> Self {
        PositionBuilder {
            pieces: Vec::new(),
            side_to_move: Color::White,
            castling: CastlingRights::none(),
            en_passant: None,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }

    /// Create a builder starting from the standard initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        let start = Position::new();
        let mut builder = Self::new();
        for idx in 0..64 {
            let sq = Square::from_index(idx);
            if let Some((color, piece)) = start.piece_on(sq) {
                builder.pieces.push((sq, color, piece));
            }
        }
        builder.castling = CastlingRights::all();
        builder
    }

    /// Place a piece, replacing anything already on the square.
    #[must_use]
    pub fn piece(mut self, square: Square, color: Color, piece: Piece) -> Self {
        self.pieces.retain(|(sq, _, _)| *sq != square);
        self.pieces.push((square, color, piece));
        self
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.pieces.retain(|(sq, _, _)| *sq != square);
        self
    }

    #[must_use]
    pub const fn side_to_move(mut self, color: Color) -> Self {
        self.side_to_move = color;
        self
    }

    #[must_use]
    pub const fn castling(mut self, rights: CastlingRights) -> Self {
        self.castling = rights;
        self
    }

    /// Grant one castling right.
    #[must_use]
    pub fn castle(mut self, castle: Castle) -> Self {
        self.castling.set(castle);
        self
    }

    #[must_use]
    pub const fn no_castling_rights(mut self) -> Self {
        self.castling = CastlingRights::none();
        self
    }

    #[must_use]
    pub const fn en_passant(mut self, target: Square) -> Self {
        self.en_passant = Some(target);
        self
    }

    #[must_use]
    pub const fn halfmove_clock(mut self, clock: u32) -> Self {
        self.halfmove_clock = clock;
        self
    }

    #[must_use]
    pub const fn fullmove_number(mut self, number: u32) -> Self {
        self.fullmove_number = number;
        self
    }

    /// Build the position.
    #[must_use]
    pub fn build(self) -> Position {
        let mut position = Position::empty();
        for (square, color, piece) in self.pieces {
            position.set_piece(square, color, piece);
        }
        position.set_side_to_move(self.side_to_move);
        position.set_castling_rights(self.castling);
        position.set_en_passant(self.en_passant);
        position.set_halfmove_clock(self.halfmove_clock);
        position.set_fullmove_number(self.fullmove_number);
        position
    }
}
