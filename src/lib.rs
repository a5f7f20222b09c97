pub mod board;

pub use board::{Color, Move, MoveList, Piece, Position, Square};
