use super::super::attack_tables::knight_attacks;
use super::super::{MoveList, Piece, Position};

impl Position {
    /// Pseudo-legal knight moves of the side to move. Returns the number appended.
    pub fn generate_knight_moves(&self, moves: &mut MoveList) -> usize {
        let start = moves.len();
        let color = self.side_to_move;
        let own = self.occupied_by(color);
        for from in self.pieces(color, Piece::Knight) {
            self.push_targets(from, Piece::Knight, knight_attacks(from) & !own, moves);
        }
        moves.len() - start
    }
}
