//! Errors raised by the rules layer and by position notation parsing.
//!
//! Coordinate and piece parse errors live next to the types they parse
//! ([`ParseSquareError`](crate::core::ParseSquareError),
//! [`ParsePieceError`](crate::core::ParsePieceError)).

use thiserror::Error;

use crate::core::{Colour, ParseSquareError, Square};

/******************************************\
|==========================================|
|               Rules Errors               |
|==========================================|
\******************************************/

/// Rejections produced when a caller asks to select a piece or make a move.
///
/// A rejected request never changes the board it was made against.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RulesError {
    /// A coordinate could not be decoded
    #[error("Invalid coordinate: {0}")]
    InvalidCoordinate(String),

    /// The selected square is empty
    #[error("No piece at {0}")]
    NoPieceAtSquare(Square),

    /// The selected piece belongs to the side that is not on move
    #[error("The piece at {square} belongs to {owner}, but it is {side}'s turn")]
    WrongSideToMove {
        square: Square,
        owner: Colour,
        side: Colour,
    },

    /// The destination is not among the piece's legal moves
    #[error("Illegal move {from}{to}: {}", illegal_reason(.exposes_king))]
    IllegalMove {
        from: Square,
        to: Square,
        /// The piece could reach the square, but doing so leaves its own king in check
        exposes_king: bool,
    },

    /// A check query was made for a side without a king
    #[error("No {0} king on the board")]
    NoKing(Colour),
}

fn illegal_reason(exposes_king: &bool) -> &'static str {
    if *exposes_king {
        "it would leave the king in check"
    } else {
        "the piece cannot move there"
    }
}

impl From<ParseSquareError> for RulesError {
    fn from(err: ParseSquareError) -> Self {
        RulesError::InvalidCoordinate(err.to_string())
    }
}

/******************************************\
|==========================================|
|             Fen Parse Errors             |
|==========================================|
\******************************************/

/// Errors that can occur while parsing a FEN string.
///
/// Example: `rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1`
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FenParseError {
    /// Not 4 or 6 whitespace separated fields
    #[error("FEN string must have 4 or 6 fields separated by spaces")]
    InvalidNumberOfFields,

    #[error("Invalid character in FEN piece placement: '{0}'")]
    InvalidPiecePlacementChar(char),

    /// A rank does not describe exactly 8 files, or there are not exactly 8 ranks
    #[error("Invalid rank format in FEN piece placement: {0}")]
    InvalidRankFormat(String),

    #[error("Invalid side to move in FEN: '{0}', expected 'w' or 'b'")]
    InvalidSideToMove(String),

    #[error("Invalid character in FEN castling availability: '{0}'")]
    InvalidCastlingChar(char),

    /// Not `-`, not a square, or a square with no pawn that could have just double pushed
    #[error("Invalid en passant target square in FEN: '{0}'")]
    InvalidEnPassantSquare(String),

    #[error("Invalid halfmove clock value in FEN: '{0}'")]
    InvalidHalfmoveClock(String),

    #[error("Invalid fullmove number value in FEN: '{0}'")]
    InvalidFullmoveNumber(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rules_error_messages() {
        assert_eq!(RulesError::NoPieceAtSquare(Square::E4).to_string(), "No piece at e4");
        assert_eq!(
            RulesError::WrongSideToMove {
                square: Square::E7,
                owner: Colour::Black,
                side: Colour::White
            }
            .to_string(),
            "The piece at e7 belongs to black, but it is white's turn"
        );
        assert_eq!(
            RulesError::IllegalMove {
                from: Square::E2,
                to: Square::D3,
                exposes_king: true
            }
            .to_string(),
            "Illegal move e2d3: it would leave the king in check"
        );
        assert_eq!(
            RulesError::IllegalMove {
                from: Square::E2,
                to: Square::E5,
                exposes_king: false
            }
            .to_string(),
            "Illegal move e2e5: the piece cannot move there"
        );
        assert_eq!(RulesError::NoKing(Colour::White).to_string(), "No white king on the board");
    }

    #[test]
    fn test_coordinate_error_conversion() {
        let err: RulesError = "z9".parse::<Square>().unwrap_err().into();
        assert_eq!(
            err,
            RulesError::InvalidCoordinate("file 'z' is outside 'a'-'h'".to_string())
        );

        let err: RulesError = "e".parse::<Square>().unwrap_err().into();
        assert_eq!(
            err,
            RulesError::InvalidCoordinate("coordinate must be 2 characters long, got 1".to_string())
        );
    }
}
