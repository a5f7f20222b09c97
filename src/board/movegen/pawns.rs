use super::super::attack_tables::pawn_attacks;
use super::super::{Bitboard, Color, Move, MoveList, Piece, Position, Square, PROMOTION_PIECES};

impl Position {
    /// Pseudo-legal pawn moves of the side to move: pushes, double pushes,
    /// captures, en passant and promotions. Returns the number appended.
    pub fn generate_pawn_moves(&self, moves: &mut MoveList) -> usize {
        let start = moves.len();
        let color = self.side_to_move;
        let enemy = color.opponent();
        let pawns = self.pieces(color, Piece::Pawn);
        let empty = !self.all_occupied;
        let back = -color.pawn_push();

        let (single, double) = match color {
            Color::White => {
                let single = pawns.shift_north() & empty;
                (single, single.shift_north() & empty & Bitboard::RANK_4)
            }
            Color::Black => {
                let single = pawns.shift_south() & empty;
                (single, single.shift_south() & empty & Bitboard::RANK_5)
            }
        };

        for to in single {
            push_pawn_move(moves, Move::new(to.offset(back), to, Piece::Pawn, color));
        }
        for to in double {
            moves.push(
                Move::new(to.offset(2 * back), to, Piece::Pawn, color).with_double_push(),
            );
        }

        let targets = self.occupied_by(enemy);
        for from in pawns {
            for to in pawn_attacks(color, from) & targets {
                if let Some(captured) = self.piece_at(to, enemy) {
                    push_pawn_move(
                        moves,
                        Move::new(from, to, Piece::Pawn, color).with_capture(enemy, captured),
                    );
                }
            }
        }

        if let Some(ep) = self.en_passant {
            // Own pawns that attack the target are exactly those an enemy pawn
            // on the target would attack.
            for from in pawn_attacks(enemy, ep) & pawns {
                moves.push(
                    Move::new(from, ep, Piece::Pawn, color)
                        .with_capture(enemy, Piece::Pawn)
                        .with_en_passant(),
                );
            }
        }

        moves.len() - start
    }
}

/// Push `mv`, expanded into the four promotions when it reaches the last rank.
fn push_pawn_move(moves: &mut MoveList, mv: Move) {
    if is_promotion_rank(mv.to()) {
        for piece in PROMOTION_PIECES {
            moves.push(mv.with_promotion(piece));
        }
    } else {
        moves.push(mv);
    }
}

#[inline]
fn is_promotion_rank(sq: Square) -> bool {
    sq.rank() == 0 || sq.rank() == 7
}
