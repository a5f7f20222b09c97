use super::{Color, Move, Piece, Position};

impl Position {
    /// Apply a pseudo-legal move in place.
    ///
    /// There is no undo: callers that need the old position keep a copy, or
    /// use [`Position::play`]. Castling rights lose whatever the move's source
    /// and target squares invalidate, whichever branch the move takes. The
    /// en-passant square is only set after a double push that an enemy pawn
    /// could actually capture.
    pub fn make_move(&mut self, mv: Move) {
        let color = mv.color();
        let enemy = color.opponent();
        let piece = mv.piece();
        let from = mv.from();
        let to = mv.to();
        debug_assert_eq!(color, self.side_to_move, "{mv:?} played out of turn");

        self.en_passant = None;

        if let Some(castle) = mv.castle() {
            self.pop_piece(castle.king_from(), color, Piece::King);
            self.set_piece(castle.king_to(), color, Piece::King);
            self.pop_piece(castle.rook_from(), color, Piece::Rook);
            self.set_piece(castle.rook_to(), color, Piece::Rook);
            self.castling.remove_color(color);
        } else if mv.is_en_passant() {
            self.pop_piece(from, color, Piece::Pawn);
            self.set_piece(to, color, Piece::Pawn);
            self.pop_piece(to.offset(-color.pawn_push()), enemy, Piece::Pawn);
        } else if mv.is_double_push() {
            self.pop_piece(from, color, Piece::Pawn);
            self.set_piece(to, color, Piece::Pawn);
            let landing = to.bitboard();
            let neighbours = landing.shift_east() | landing.shift_west();
            if !(neighbours & self.pieces(enemy, Piece::Pawn)).is_empty() {
                self.en_passant = Some(from.offset(color.pawn_push()));
            }
        } else {
            if mv.is_capture() {
                match mv.captured() {
                    Some((captured_color, captured)) => {
                        self.pop_piece(to, captured_color, captured);
                    }
                    None => {
                        self.clear_square(to, enemy);
                    }
                }
            }
            self.pop_piece(from, color, piece);
            self.set_piece(to, color, mv.promotion().unwrap_or(piece));
        }

        self.castling.update_for_move(from, to);

        if piece == Piece::Pawn || mv.is_capture() {
            self.halfmove_clock = 0;
        } else {
            self.halfmove_clock += 1;
        }
        if color == Color::Black {
            self.fullmove_number += 1;
        }
        self.side_to_move = enemy;

        debug_assert!(self.is_consistent(), "inconsistent position after {mv:?}");
    }

    /// The position after `mv`, leaving `self` untouched.
    #[inline]
    #[must_use]
    pub fn play(&self, mv: Move) -> Position {
        let mut next = *self;
        next.make_move(mv);
        next
    }
}
