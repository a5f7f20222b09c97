//! Pseudo-legal move generation and the legality filter built on top of it.
//!
//! Generators never look at king safety (castling aside, whose path check is
//! part of the rule itself). A move is legal when applying it to a copy of the
//! position leaves the mover's king unattacked.

mod kings;
mod knights;
mod pawns;
mod sliders;

use super::{Bitboard, Move, MoveList, Piece, Position, Square};

/// Classification of a position from the side to move's point of view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GameStatus {
    Ongoing,
    Check,
    Checkmate,
    Stalemate,
}

impl Position {
    /// Append one move per square in `targets`, recording the captured piece
    /// for squares held by the opponent.
    #[inline]
    fn push_targets(&self, from: Square, piece: Piece, targets: Bitboard, moves: &mut MoveList) {
        let color = self.side_to_move;
        let enemy = color.opponent();
        let enemy_occ = self.occupied_by(enemy);
        for to in targets & enemy_occ {
            if let Some(captured) = self.piece_at(to, enemy) {
                moves.push(Move::new(from, to, piece, color).with_capture(enemy, captured));
            }
        }
        for to in targets & !enemy_occ {
            moves.push(Move::new(from, to, piece, color));
        }
    }

    /// All pseudo-legal moves of the side to move, grouped as pawn, knight,
    /// bishop, rook, queen, king and castling moves. Returns the number
    /// appended.
    pub fn generate_pseudo_legal(&self, moves: &mut MoveList) -> usize {
        self.generate_pawn_moves(moves)
            + self.generate_knight_moves(moves)
            + self.generate_bishop_moves(moves)
            + self.generate_rook_moves(moves)
            + self.generate_queen_moves(moves)
            + self.generate_king_moves(moves)
            + self.generate_castling_moves(moves)
    }

    /// Whether a pseudo-legal move leaves the mover's king safe.
    #[inline]
    #[must_use]
    pub fn is_legal(&self, mv: Move) -> bool {
        !self.play(mv).is_king_checked(mv.color())
    }

    /// All legal moves of the side to move.
    #[must_use]
    pub fn legal_moves(&self) -> MoveList {
        let mut moves = MoveList::new();
        self.generate_pseudo_legal(&mut moves);
        moves.retain(|mv| self.is_legal(mv));
        moves
    }

    /// Whether the side to move has at least one legal move. Stops at the
    /// first one found.
    #[must_use]
    pub fn has_legal_move(&self) -> bool {
        let mut moves = MoveList::new();
        self.generate_pseudo_legal(&mut moves);
        moves.iter().any(|&mv| self.is_legal(mv))
    }

    #[must_use]
    pub fn is_checkmate(&self) -> bool {
        self.in_check() && !self.has_legal_move()
    }

    #[must_use]
    pub fn is_stalemate(&self) -> bool {
        !self.in_check() && !self.has_legal_move()
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        match (self.in_check(), self.has_legal_move()) {
            (true, true) => GameStatus::Check,
            (true, false) => GameStatus::Checkmate,
            (false, true) => GameStatus::Ongoing,
            (false, false) => GameStatus::Stalemate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Color;

    #[test]
    fn test_start_position_counts() {
        let position = Position::new();
        let mut moves = MoveList::new();
        assert_eq!(position.generate_pseudo_legal(&mut moves), 20);
        assert_eq!(position.legal_moves().len(), 20);
        assert_eq!(position.status(), GameStatus::Ongoing);
    }

    #[test]
    fn test_generation_order_groups_pieces() {
        let position =
            Position::from_fen("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1");
        let mut moves = MoveList::new();
        position.generate_pseudo_legal(&mut moves);
        let rank = |mv: &Move| match mv.castle() {
            Some(_) => 6,
            None => mv.piece().index(),
        };
        let ranks: Vec<usize> = moves.iter().map(rank).collect();
        let mut sorted = ranks.clone();
        sorted.sort_unstable();
        assert_eq!(ranks, sorted);
    }

    #[test]
    fn test_pinned_piece_moves_are_filtered() {
        // The e2 knight is pinned by the e8 rook.
        let position = Position::from_fen("4r1k1/8/8/8/8/8/4N3/4K3 w - - 0 1");
        let legal = position.legal_moves();
        assert!(legal.iter().all(|mv| mv.piece() == Piece::King));
        assert_eq!(legal.len(), 4);
    }

    #[test]
    fn test_checkmate() {
        // Back-rank mate.
        let position = Position::from_fen("3R2k1/5ppp/8/8/8/8/8/6K1 b - - 0 1");
        assert!(position.in_check());
        assert!(!position.has_legal_move());
        assert!(position.is_checkmate());
        assert!(!position.is_stalemate());
        assert_eq!(position.status(), GameStatus::Checkmate);
    }

    #[test]
    fn test_stalemate() {
        let position = Position::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1");
        assert!(!position.in_check());
        assert!(position.is_stalemate());
        assert!(!position.is_checkmate());
        assert_eq!(position.status(), GameStatus::Stalemate);
    }

    #[test]
    fn test_check_with_escape() {
        let position = Position::from_fen("4k3/8/8/8/8/8/8/R3K3 b - - 0 1");
        assert!(!position.in_check());
        let position = Position::from_fen("4k3/8/8/8/8/8/8/4KR2 b - - 0 1");
        assert_eq!(position.status(), GameStatus::Ongoing);
        let position = Position::from_fen("4k3/8/8/8/8/8/8/4R1K1 b - - 0 1");
        assert_eq!(position.status(), GameStatus::Check);
        assert_eq!(position.side_to_move(), Color::Black);
    }

    #[test]
    fn test_king_cannot_capture_defended_piece() {
        let position = Position::from_fen("4k3/4Q3/4K3/8/8/8/8/8 b - - 0 1");
        assert!(position.is_checkmate());
    }
}
