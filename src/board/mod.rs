//! Chess position representation and legal move generation.
//!
//! Positions are bitboard based and `Copy`; moves are packed into 32 bits.
//! Generation is pseudo-legal, and legality is decided by playing the move on
//! a copy and testing whether the mover's king is attacked.
//!
//! # Example
//! ```
//! use chess_movegen::board::Position;
//!
//! let position = Position::new();
//! let moves = position.legal_moves();
//! println!("Starting position has {} legal moves", moves.len());
//! assert_eq!(position.perft(3), 8902);
//! ```

mod attack_tables;
mod builder;
mod error;
mod fen;
mod make_move;
mod movegen;
mod perft;
pub mod prelude;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use attack_tables::{
    bishop_attacks, init_attack_tables, king_attacks, knight_attacks, pawn_attacks,
    queen_attacks, rook_attacks,
};
pub use builder::PositionBuilder;
pub use error::{FenError, MoveParseError, SquareError};
pub use movegen::GameStatus;
pub use perft::PerftStats;
pub use state::Position;
pub use types::{
    Bitboard, BitboardIter, Castle, CastlingRights, Color, Move, MoveList, MoveListIntoIter,
    Piece, Square, MAX_MOVES,
};

pub(crate) use types::PROMOTION_PIECES;
