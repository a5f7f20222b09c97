//! Core chess types.
//!
//! This module contains the fundamental types used throughout the crate:
//! - `Piece` and `Color` - piece types and colors, with their packed codes
//! - `Square` - LERF square index (a1 = 0, h8 = 63)
//! - `Bitboard` - 64-bit square set
//! - `Move` and `MoveList` - packed move and the fixed-capacity move buffer
//! - `CastlingRights` and `Castle` - castling state

mod bitboard;
mod castling;
mod moves;
mod piece;
mod square;

pub use bitboard::{Bitboard, BitboardIter};
pub use castling::{Castle, CastlingRights};
pub use moves::{Move, MoveList, MoveListIntoIter, MAX_MOVES};
pub use piece::{Color, Piece};
pub use square::Square;

pub(crate) use piece::PROMOTION_PIECES;
