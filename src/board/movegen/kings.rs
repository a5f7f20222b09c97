use super::super::attack_tables::king_attacks;
use super::super::{Castle, Move, MoveList, Piece, Position};

impl Position {
    /// Pseudo-legal non-castling king moves. Returns the number appended.
    pub fn generate_king_moves(&self, moves: &mut MoveList) -> usize {
        let start = moves.len();
        let color = self.side_to_move;
        let own = self.occupied_by(color);
        for from in self.pieces(color, Piece::King) {
            self.push_targets(from, Piece::King, king_attacks(from) & !own, moves);
        }
        moves.len() - start
    }

    /// Castling moves of the side to move. Unlike the other generators this
    /// one checks that the king does not start on, pass through or land on an
    /// attacked square.
    pub fn generate_castling_moves(&self, moves: &mut MoveList) -> usize {
        let start = moves.len();
        let color = self.side_to_move;
        for castle in Castle::ALL {
            if castle.color() == color && self.can_castle(castle) {
                moves.push(
                    Move::new(castle.king_from(), castle.king_to(), Piece::King, color)
                        .with_castle(castle),
                );
            }
        }
        moves.len() - start
    }

    fn can_castle(&self, castle: Castle) -> bool {
        let color = castle.color();
        self.castling.has(castle)
            && (castle.between() & self.all_occupied).is_empty()
            && self.piece_at(castle.king_from(), color) == Some(Piece::King)
            && self.piece_at(castle.rook_from(), color) == Some(Piece::Rook)
            && castle
                .king_path()
                .iter()
                .all(|&sq| !self.is_square_attacked(sq, color.opponent()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn castles(fen: &str) -> Vec<String> {
        let position = Position::from_fen(fen);
        let mut moves = MoveList::new();
        position.generate_castling_moves(&mut moves);
        moves.iter().map(|mv| mv.to_string()).collect()
    }

    #[test]
    fn test_both_sides_available() {
        assert_eq!(
            castles("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1"),
            vec!["e1g1", "e1c1"]
        );
        assert_eq!(
            castles("r3k2r/8/8/8/8/8/8/R3K2R b KQkq - 0 1"),
            vec!["e8g8", "e8c8"]
        );
    }

    #[test]
    fn test_attacked_transit_square_blocks_castling() {
        // Rook on f8 covers f1.
        assert_eq!(castles("4kr2/8/8/8/8/8/8/R3K2R w KQ - 0 1"), vec!["e1c1"]);
        assert_eq!(
            castles("4k3/8/8/8/8/8/8/R3K2R w KQ - 0 1"),
            vec!["e1g1", "e1c1"]
        );
    }

    #[test]
    fn test_no_castling_out_of_check() {
        assert!(castles("4r1k1/8/8/8/8/8/8/R3K2R w KQ - 0 1").is_empty());
    }

    #[test]
    fn test_attacked_b_file_square_does_not_matter() {
        // b1 lies between king and rook but is not on the king's path.
        assert_eq!(
            castles("1r2k3/8/8/8/8/8/8/R3K3 w Q - 0 1"),
            vec!["e1c1"]
        );
    }

    #[test]
    fn test_requires_right_empty_path_and_rook() {
        assert!(castles("4k3/8/8/8/8/8/8/R3K2R w - - 0 1").is_empty());
        assert!(castles("4k3/8/8/8/8/8/8/RN2K1NR w KQ - 0 1").is_empty());
        assert!(castles("4k3/8/8/8/8/8/8/4K3 w KQ - 0 1").is_empty());
    }

    #[test]
    fn test_king_moves_exclude_own_pieces() {
        let position = Position::new();
        let mut moves = MoveList::new();
        assert_eq!(position.generate_king_moves(&mut moves), 0);

        let position = Position::from_fen("4k3/8/8/8/8/8/3P4/4K3 w - - 0 1");
        let mut moves = MoveList::new();
        assert_eq!(position.generate_king_moves(&mut moves), 4);
    }
}
