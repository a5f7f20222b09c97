use std::str::FromStr;

use super::error::{FenError, MoveParseError};
use super::{Castle, CastlingRights, Color, Move, Piece, Position, Square};

const CASTLING_CHARS: [(char, Castle); 4] = [
    ('K', Castle::WhiteKingside),
    ('Q', Castle::WhiteQueenside),
    ('k', Castle::BlackKingside),
    ('q', Castle::BlackQueenside),
];

impl Position {
    /// FEN of the standard starting position.
    pub const START_FEN: &'static str =
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

    /// Parse a position from FEN notation.
    ///
    /// The halfmove clock and fullmove number may be omitted and default to
    /// 0 and 1.
    pub fn try_from_fen(fen: &str) -> Result<Self, FenError> {
        let parts: Vec<&str> = fen.split_whitespace().collect();
        if parts.len() < 4 {
            return Err(FenError::TooFewParts { found: parts.len() });
        }
        if parts.len() > 6 {
            return Err(FenError::TooManyParts { found: parts.len() });
        }

        let mut position = Position::empty();
        parse_placement(&mut position, parts[0])?;

        position.side_to_move = match parts[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => {
                return Err(FenError::InvalidSideToMove {
                    found: other.to_string(),
                })
            }
        };

        position.castling = parse_castling(parts[2])?;

        position.en_passant = parse_en_passant(&position, parts[3])?;

        position.halfmove_clock = parse_clock(parts.get(4).copied(), 0)?;
        position.fullmove_number = parse_clock(parts.get(5).copied(), 1)?;

        Ok(position)
    }

    /// Parse a position from FEN notation.
    ///
    /// # Panics
    /// Panics if the FEN string is invalid. Use `try_from_fen` for fallible parsing.
    #[must_use]
    pub fn from_fen(fen: &str) -> Self {
        match Self::try_from_fen(fen) {
            Ok(position) => position,
            Err(err) => panic!("invalid FEN '{fen}': {err}"),
        }
    }

    /// Replace this position with the one described by `fen`.
    ///
    /// On error the position is reset to the starting position, never left
    /// half-built.
    pub fn set_fen(&mut self, fen: &str) -> Result<(), FenError> {
        match Self::try_from_fen(fen) {
            Ok(position) => {
                *self = position;
                Ok(())
            }
            Err(err) => {
                *self = Position::new();
                Err(err)
            }
        }
    }

    /// Convert the position to FEN notation.
    #[must_use]
    pub fn to_fen(&self) -> String {
        let mut rows: Vec<String> = Vec::with_capacity(8);
        for rank in (0..8).rev() {
            let mut row = String::new();
            let mut empty = 0;
            for file in 0..8 {
                match self.piece_on(Square::new(rank, file)) {
                    Some((color, piece)) => {
                        if empty > 0 {
                            row.push_str(&empty.to_string());
                            empty = 0;
                        }
                        row.push(piece.to_fen_char(color));
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                row.push_str(&empty.to_string());
            }
            rows.push(row);
        }

        let active = match self.side_to_move {
            Color::White => "w",
            Color::Black => "b",
        };
        let mut castling: String = CASTLING_CHARS
            .iter()
            .filter(|(_, castle)| self.castling.has(*castle))
            .map(|(c, _)| *c)
            .collect();
        if castling.is_empty() {
            castling.push('-');
        }
        let ep = self
            .en_passant
            .map_or_else(|| "-".to_string(), |sq| sq.to_string());

        format!(
            "{} {} {} {} {} {}",
            rows.join("/"),
            active,
            castling,
            ep,
            self.halfmove_clock,
            self.fullmove_number
        )
    }

    /// Resolve a move in UCI long algebraic notation (e.g. "e2e4", "e7e8q")
    /// to the matching legal move.
    ///
    /// # Example
    /// ```
    /// use chess_movegen::board::Position;
    ///
    /// let position = Position::new();
    /// let mv = position.parse_move("e2e4").unwrap();
    /// assert!(mv.is_double_push());
    /// ```
    pub fn parse_move(&self, uci: &str) -> Result<Move, MoveParseError> {
        let len = uci.chars().count();
        if !(4..=5).contains(&len) {
            return Err(MoveParseError::InvalidLength { len });
        }
        let invalid_square = || MoveParseError::InvalidSquare {
            notation: uci.to_string(),
        };
        let from: Square = uci
            .get(0..2)
            .and_then(|s| s.parse().ok())
            .ok_or_else(invalid_square)?;
        let to: Square = uci
            .get(2..4)
            .and_then(|s| s.parse().ok())
            .ok_or_else(invalid_square)?;

        let promotion = match uci.chars().nth(4) {
            None => None,
            Some(c) => match Piece::from_char(c) {
                Some(piece) if !matches!(piece, Piece::Pawn | Piece::King) => Some(piece),
                _ => return Err(MoveParseError::InvalidPromotion { char: c }),
            },
        };

        self.legal_moves()
            .into_iter()
            .find(|mv| mv.from() == from && mv.to() == to && mv.promotion() == promotion)
            .ok_or_else(|| MoveParseError::IllegalMove {
                notation: uci.to_string(),
            })
    }
}

fn parse_placement(position: &mut Position, placement: &str) -> Result<(), FenError> {
    let ranks: Vec<&str> = placement.split('/').collect();
    if ranks.len() != 8 {
        return Err(FenError::WrongRankCount { found: ranks.len() });
    }

    for (row, rank_str) in ranks.iter().enumerate() {
        let rank = 7 - row as u8;
        let mut files = 0usize;
        for c in rank_str.chars() {
            if let Some(skip) = c.to_digit(10).filter(|d| (1..=8).contains(d)) {
                files += skip as usize;
                continue;
            }
            let piece = Piece::from_char(c).ok_or(FenError::InvalidPiece { char: c })?;
            if files >= 8 {
                return Err(FenError::InvalidRankWidth {
                    rank: rank as usize + 1,
                    files: files + 1,
                });
            }
            let color = if c.is_ascii_uppercase() {
                Color::White
            } else {
                Color::Black
            };
            position.set_piece(Square::new(rank, files as u8), color, piece);
            files += 1;
        }
        if files != 8 {
            return Err(FenError::InvalidRankWidth {
                rank: rank as usize + 1,
                files,
            });
        }
    }

    for color in Color::BOTH {
        let kings = position.pieces(color, Piece::King).popcount();
        if kings != 1 {
            return Err(FenError::KingCount {
                color: match color {
                    Color::White => "White",
                    Color::Black => "Black",
                },
                found: kings,
            });
        }
    }
    Ok(())
}

fn parse_castling(field: &str) -> Result<CastlingRights, FenError> {
    let mut rights = CastlingRights::none();
    if field == "-" {
        return Ok(rights);
    }
    for c in field.chars() {
        let castle = CASTLING_CHARS
            .iter()
            .find(|(letter, _)| *letter == c)
            .map(|(_, castle)| *castle)
            .ok_or(FenError::InvalidCastling { char: c })?;
        rights.set(castle);
    }
    Ok(rights)
}

/// The target must sit behind a pawn of the side that just moved, with the
/// target and the pawn's origin square both empty.
fn parse_en_passant(position: &Position, field: &str) -> Result<Option<Square>, FenError> {
    if field == "-" {
        return Ok(None);
    }
    let invalid = || FenError::InvalidEnPassant {
        found: field.to_string(),
    };
    let target: Square = field.parse().map_err(|_| invalid())?;

    let mover = position.side_to_move;
    let pusher = mover.opponent();
    let expected_rank = match mover {
        Color::White => 5,
        Color::Black => 2,
    };
    if target.rank() != expected_rank {
        return Err(invalid());
    }
    let origin = target.offset(-pusher.pawn_push());
    let landing = target.offset(pusher.pawn_push());
    if !position.is_empty(target)
        || !position.is_empty(origin)
        || position.piece_at(landing, pusher) != Some(Piece::Pawn)
    {
        return Err(invalid());
    }
    Ok(Some(target))
}

fn parse_clock(field: Option<&str>, default: u32) -> Result<u32, FenError> {
    match field {
        None => Ok(default),
        Some(text) => text.parse().map_err(|_| FenError::InvalidClock {
            found: text.to_string(),
        }),
    }
}

impl FromStr for Position {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Position::try_from_fen(s)
    }
}
