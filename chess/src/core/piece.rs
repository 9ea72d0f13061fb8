use thiserror::Error;

use crate::core::Colour;

/******************************************\
|==========================================|
|                  Piece                   |
|==========================================|
\******************************************/

/// # Piece representation
///
/// - Represents the coloured chess pieces, the colour lives in the lowest bit
/// - An empty square is `None` on the board, never a piece value

#[rustfmt::skip]
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Piece {
    WhitePawn, BlackPawn, WhiteKnight, BlackKnight, WhiteBishop, BlackBishop, WhiteRook, BlackRook, WhiteQueen, BlackQueen, WhiteKing, BlackKing
}

impl Piece {
    /// Number of elements in the Piece enum
    pub const NUM: usize = 12;
}

crate::impl_from_to_primitive!(Piece);
crate::impl_enum_iter!(Piece);

/******************************************\
|==========================================|
|                Piece Type                |
|==========================================|
\******************************************/

/// # Piece Type representation
///
/// - Represents the different chess piece types

#[rustfmt::skip]
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceType {
   Pawn, Knight, Bishop, Rook, Queen, King,
}

impl PieceType {
    /// Number of elements in the PieceType enum
    pub const NUM: usize = 6;
}

crate::impl_from_to_primitive!(PieceType);
crate::impl_enum_iter!(PieceType);

/******************************************\
|==========================================|
|              Implementation              |
|==========================================|
\******************************************/

impl Piece {
    /// Returns the piece type of the piece
    pub const fn pt(self) -> PieceType {
        unsafe { PieceType::from_unchecked(self as u8 >> 1) }
    }

    /// Returns the colour of the piece
    pub const fn colour(self) -> Colour {
        unsafe { Colour::from_unchecked(self as u8 & 1) }
    }

    /// Combines a colour and piece type pair to create a piece
    ///
    /// ## Examples
    ///
    /// ```
    /// use chess_rules::core::{Piece, Colour, PieceType};
    ///
    /// assert_eq!(Piece::from_parts(Colour::White, PieceType::Pawn), Piece::WhitePawn);
    /// assert_eq!(Piece::from_parts(Colour::Black, PieceType::King), Piece::BlackKing);
    /// ```
    pub const fn from_parts(colour: Colour, piece_type: PieceType) -> Self {
        unsafe { Piece::from_unchecked(colour as u8 | (piece_type as u8) << 1) }
    }

    /// Whether two squares' contents belong to the same side
    ///
    /// Comparing against an empty square is always `false`.
    pub fn same_side(a: Option<Piece>, b: Option<Piece>) -> bool {
        matches!((a, b), (Some(a), Some(b)) if a.colour() == b.colour())
    }
}

impl PieceType {
    /// Material value in pawns, the king is not counted
    pub const fn value(self) -> u32 {
        match self {
            PieceType::Pawn => 1,
            PieceType::Knight | PieceType::Bishop => 3,
            PieceType::Rook => 5,
            PieceType::Queen => 9,
            PieceType::King => 0,
        }
    }
}

/******************************************\
|==========================================|
|                 Display                  |
|==========================================|
\******************************************/

/// String to convert from piece/piece type to their string representation
const PIECE_STR: &str = "PpNnBbRrQqKk";

impl Piece {
    /// FEN character of the piece, uppercase for White
    pub fn to_char(self) -> char {
        PIECE_STR.as_bytes()[self.index()] as char
    }
}

impl std::fmt::Display for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

impl std::fmt::Display for PieceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            PieceType::Pawn => "pawn",
            PieceType::Knight => "knight",
            PieceType::Bishop => "bishop",
            PieceType::Rook => "rook",
            PieceType::Queen => "queen",
            PieceType::King => "king",
        };
        write!(f, "{}", name)
    }
}

/******************************************\
|==========================================|
|                Parse Piece               |
|==========================================|
\******************************************/

impl TryFrom<char> for Piece {
    type Error = ParsePieceError;

    fn try_from(piece_char: char) -> Result<Self, Self::Error> {
        let index = PIECE_STR
            .chars()
            .position(|c| c == piece_char)
            .ok_or(ParsePieceError::InvalidChar(piece_char))? as u8;

        Ok(unsafe { Piece::from_unchecked(index) })
    }
}

impl std::str::FromStr for Piece {
    type Err = ParsePieceError;

    /// Parse the FEN piece character into a piece
    ///
    /// ## Examples
    ///
    /// ```
    /// use chess_rules::core::{Piece, ParsePieceError};
    ///
    /// assert_eq!("P".parse::<Piece>(), Ok(Piece::WhitePawn));
    /// assert_eq!("k".parse::<Piece>(), Ok(Piece::BlackKing));
    /// assert_eq!("X".parse::<Piece>(), Err(ParsePieceError::InvalidChar('X')));
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Piece::try_from(c),
            _ => Err(ParsePieceError::InvalidLength(s.chars().count())),
        }
    }
}

/******************************************\
|==========================================|
|            Piece Parse Error             |
|==========================================|
\******************************************/

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParsePieceError {
    #[error("Invalid length for piece string: {0}, expected 1")]
    InvalidLength(usize),
    #[error("Invalid character for piece string: '{0}', expected one of \"PNBRQKpnbrqk\"")]
    InvalidChar(char),
}

/******************************************\
|==========================================|
|                Unit Tests                |
|==========================================|
\******************************************/
