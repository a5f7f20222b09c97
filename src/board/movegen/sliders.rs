use super::super::attack_tables::{bishop_attacks, queen_attacks, rook_attacks};
use super::super::{Bitboard, MoveList, Piece, Position, Square};

impl Position {
    /// Pseudo-legal bishop moves of the side to move. Returns the number appended.
    pub fn generate_bishop_moves(&self, moves: &mut MoveList) -> usize {
        self.generate_slider_moves(Piece::Bishop, bishop_attacks, moves)
    }

    /// Pseudo-legal rook moves of the side to move. Returns the number appended.
    pub fn generate_rook_moves(&self, moves: &mut MoveList) -> usize {
        self.generate_slider_moves(Piece::Rook, rook_attacks, moves)
    }

    /// Pseudo-legal queen moves of the side to move. Returns the number appended.
    pub fn generate_queen_moves(&self, moves: &mut MoveList) -> usize {
        self.generate_slider_moves(Piece::Queen, queen_attacks, moves)
    }

    fn generate_slider_moves(
        &self,
        piece: Piece,
        attacks: fn(Square, Bitboard) -> Bitboard,
        moves: &mut MoveList,
    ) -> usize {
        let start = moves.len();
        let color = self.side_to_move;
        let own = self.occupied_by(color);
        for from in self.pieces(color, piece) {
            self.push_targets(from, piece, attacks(from, self.all_occupied) & !own, moves);
        }
        moves.len() - start
    }
}
