//! Prelude module for convenient imports.
//!
//! # Example
//! ```
//! use chess_movegen::board::prelude::*;
//!
//! let position = Position::new();
//! assert_eq!(position.status(), GameStatus::Ongoing);
//! ```

pub use super::{
    Bitboard, Castle, CastlingRights, Color, FenError, GameStatus, Move, MoveList,
    MoveParseError, PerftStats, Piece, Position, PositionBuilder, Square, SquareError,
};
