//! Error types for chess board operations.

use std::fmt;

/// Error type for FEN parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    /// FEN string has too few parts (needs at least 4)
    TooFewParts { found: usize },
    /// FEN string has more than 6 parts
    TooManyParts { found: usize },
    /// Piece placement does not have exactly 8 ranks
    WrongRankCount { found: usize },
    /// Invalid piece character in position string
    InvalidPiece { char: char },
    /// A rank describes more or fewer than 8 files
    InvalidRankWidth { rank: usize, files: usize },
    /// A color does not have exactly one king
    KingCount { color: &'static str, found: u32 },
    /// Invalid side to move (must be 'w' or 'b')
    InvalidSideToMove { found: String },
    /// Invalid castling character
    InvalidCastling { char: char },
    /// Invalid en passant square
    InvalidEnPassant { found: String },
    /// Halfmove clock or fullmove number is not a number
    InvalidClock { found: String },
}

impl fmt::Display for FenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FenError::TooFewParts { found } => {
                write!(f, "FEN must have at least 4 parts, found {found}")
            }
            FenError::TooManyParts { found } => {
                write!(f, "FEN must have at most 6 parts, found {found}")
            }
            FenError::WrongRankCount { found } => {
                write!(f, "FEN piece placement must have 8 ranks, found {found}")
            }
            FenError::InvalidPiece { char } => {
                write!(f, "Invalid piece character '{char}' in FEN")
            }
            FenError::InvalidRankWidth { rank, files } => {
                write!(f, "Rank {rank} describes {files} files, expected 8")
            }
            FenError::KingCount { color, found } => {
                write!(f, "{color} must have exactly one king, found {found}")
            }
            FenError::InvalidSideToMove { found } => {
                write!(f, "Invalid side to move '{found}', expected 'w' or 'b'")
            }
            FenError::InvalidCastling { char } => {
                write!(f, "Invalid castling character '{char}' in FEN")
            }
            FenError::InvalidEnPassant { found } => {
                write!(f, "Invalid en passant square '{found}'")
            }
            FenError::InvalidClock { found } => {
                write!(f, "Invalid move counter '{found}'")
            }
        }
    }
}

impl std::error::Error for FenError {}

/// Error type for move parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveParseError {
    /// Move string has invalid length (must be 4-5 characters)
    InvalidLength { len: usize },
    /// Invalid square notation in move
    InvalidSquare { notation: String },
    /// Invalid promotion piece
    InvalidPromotion { char: char },
    /// Move is not legal in the current position
    IllegalMove { notation: String },
}

impl fmt::Display for MoveParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveParseError::InvalidLength { len } => {
                write!(f, "Move must be 4-5 characters, found {len}")
            }
            MoveParseError::InvalidSquare { notation } => {
                write!(f, "Invalid square notation in '{notation}'")
            }
            MoveParseError::InvalidPromotion { char } => {
                write!(f, "Invalid promotion piece '{char}'")
            }
            MoveParseError::IllegalMove { notation } => {
                write!(f, "Illegal move '{notation}'")
            }
        }
    }
}

impl std::error::Error for MoveParseError {}

/// Error type for square parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Rank out of bounds (must be 0-7)
    RankOutOfBounds { rank: u8 },
    /// File out of bounds (must be 0-7)
    FileOutOfBounds { file: u8 },
    /// Invalid algebraic notation
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::RankOutOfBounds { rank } => {
                write!(f, "Rank {rank} out of bounds (must be 0-7)")
            }
            SquareError::FileOutOfBounds { file } => {
                write!(f, "File {file} out of bounds (must be 0-7)")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}
