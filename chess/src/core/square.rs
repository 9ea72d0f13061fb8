use super::types::Colour;
use thiserror::Error;

/******************************************\
|==========================================|
|                 Squares                  |
|==========================================|
\******************************************/

/// # Square representation
///
/// - Represents the squares of a chess board, `A1` is index 0 and `H8` is index 63

#[rustfmt::skip]
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Square {
    A1, B1, C1, D1, E1, F1, G1, H1,
    A2, B2, C2, D2, E2, F2, G2, H2,
    A3, B3, C3, D3, E3, F3, G3, H3,
    A4, B4, C4, D4, E4, F4, G4, H4,
    A5, B5, C5, D5, E5, F5, G5, H5,
    A6, B6, C6, D6, E6, F6, G6, H6,
    A7, B7, C7, D7, E7, F7, G7, H7,
    A8, B8, C8, D8, E8, F8, G8, H8,
}

impl Square {
    /// Number of elements in the Square enum
    pub const NUM: usize = 64;
}

crate::impl_from_to_primitive!(Square);
crate::impl_enum_iter!(Square);

/******************************************\
|==========================================|
|                  Ranks                   |
|==========================================|
\******************************************/

/// # Ranks representation
///
/// - Represents the ranks of a chess board

#[rustfmt::skip]
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Eq, Ord, Hash)]
pub enum Rank {
    Rank1, Rank2, Rank3, Rank4, Rank5, Rank6, Rank7, Rank8,
}

impl Rank {
    /// Number of elements in the Rank enum
    pub const NUM: usize = 8;
}

crate::impl_from_to_primitive!(Rank);
crate::impl_enum_iter!(Rank);

/******************************************\
|==========================================|
|                  Files                   |
|==========================================|
\******************************************/

/// # Files representation
///
/// - Represents the files of a chess board

#[rustfmt::skip]
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Eq, Ord, Hash)]
pub enum File {
    FileA, FileB, FileC, FileD, FileE, FileF, FileG, FileH,
}

impl File {
    /// Number of elements in the File enum
    pub const NUM: usize = 8;
}

crate::impl_from_to_primitive!(File);
crate::impl_enum_iter!(File);

/******************************************\
|==========================================|
|              Implementation              |
|==========================================|
\******************************************/

impl Square {
    /// Returns the rank of a square
    ///
    /// ## Examples
    ///
    /// ```
    /// use chess_rules::core::{Square, Rank};
    ///
    /// assert_eq!(Square::A1.rank(), Rank::Rank1);
    /// assert_eq!(Square::E4.rank(), Rank::Rank4);
    /// ```
    pub const fn rank(&self) -> Rank {
        unsafe { Rank::from_unchecked((*self as u8) >> 3) }
    }

    /// Returns the file of a square
    pub const fn file(&self) -> File {
        unsafe { File::from_unchecked((*self as u8) & 0b111) }
    }

    /// Combines a pair of file and rank to create a square
    pub const fn from_parts(file: File, rank: Rank) -> Self {
        let index = ((rank as u8) << 3) + (file as u8);
        unsafe { Self::from_unchecked(index) }
    }

    /// Returns the square with an index in `0..64`, or `None` for anything else
    pub const fn from_index(value: i16) -> Option<Self> {
        if value >= 0 && value < Square::NUM as i16 {
            Some(unsafe { Square::from_unchecked(value as u8) })
        } else {
            None
        }
    }

    /// Flips the rank of a square along the middle of the board
    pub const fn flip_rank(&self) -> Self {
        unsafe { Self::from_unchecked((*self as u8) ^ Square::A8 as u8) }
    }

    /// Returns the square relative to the perspective of `col`
    ///
    /// For White the square is unchanged, for Black the rank is flipped, so `E1.relative(Black)`
    /// is `E8`.
    pub const fn relative(&self, col: Colour) -> Self {
        match col {
            Colour::White => *self,
            Colour::Black => self.flip_rank(),
        }
    }

    /// Returns the absolute distance in the ranks of two squares
    pub const fn rank_dist(sq1: Square, sq2: Square) -> u8 {
        (sq1.rank() as u8).abs_diff(sq2.rank() as u8)
    }

    /// Returns the absolute distance in the files of two squares
    pub const fn file_dist(sq1: Square, sq2: Square) -> u8 {
        (sq1.file() as u8).abs_diff(sq2.file() as u8)
    }

    /// Returns the row index of the square in display order
    ///
    /// Row 0 is Black's back rank and row 7 is White's, i.e. `row = 8 - rank digit`.
    ///
    /// ## Examples
    ///
    /// ```
    /// use chess_rules::core::Square;
    ///
    /// assert_eq!(Square::E2.row(), 6);
    /// assert_eq!(Square::A8.row(), 0);
    /// ```
    pub const fn row(&self) -> u8 {
        7 - self.rank() as u8
    }

    /// Returns the column index of the square, `col = file letter - 'a'`
    pub const fn col(&self) -> u8 {
        self.file() as u8
    }

    /// Builds a square from display coordinates (see [`Square::row`])
    pub fn from_coords(row: u8, col: u8) -> Result<Self, ParseSquareError> {
        if row >= Rank::NUM as u8 || col >= File::NUM as u8 {
            return Err(ParseSquareError::OutOfRange { row, col });
        }

        let rank = unsafe { Rank::from_unchecked(7 - row) };
        let file = unsafe { File::from_unchecked(col) };
        Ok(Square::from_parts(file, rank))
    }
}

impl Rank {
    /// Flips rank along the middle of the board
    pub const fn flip(&self) -> Self {
        unsafe { Self::from_unchecked(7 - (*self as u8)) }
    }

    /// Returns the rank relative to the perspective of `col`
    ///
    /// ## Examples
    ///
    /// ```
    /// use chess_rules::core::{Rank, Colour};
    ///
    /// assert_eq!(Rank::Rank2.relative(Colour::White), Rank::Rank2);
    /// assert_eq!(Rank::Rank2.relative(Colour::Black), Rank::Rank7);
    /// ```
    pub const fn relative(&self, col: Colour) -> Self {
        match col {
            Colour::White => *self,
            Colour::Black => self.flip(),
        }
    }
}

/******************************************\
|==========================================|
|                 Display                  |
|==========================================|
\******************************************/

impl std::fmt::Display for File {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", (b'a' + (*self as u8)) as char)
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", (b'1' + (*self as u8)) as char)
    }
}

impl std::fmt::Display for Square {
    /// Displays the square in algebraic notation (Square::E2 => "e2")
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.file(), self.rank())
    }
}

/******************************************\
|==========================================|
|              Parsing Strings             |
|==========================================|
\******************************************/

impl std::str::FromStr for File {
    type Err = ParseFileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let (Some(file_char), None) = (chars.next(), chars.next()) else {
            return Err(ParseFileError::InvalidLength(s.chars().count()));
        };

        match file_char {
            'a'..='h' => Ok(unsafe { File::from_unchecked(file_char as u8 - b'a') }),
            _ => Err(ParseFileError::InvalidChar(file_char)),
        }
    }
}

impl std::str::FromStr for Rank {
    type Err = ParseRankError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let (Some(rank_char), None) = (chars.next(), chars.next()) else {
            return Err(ParseRankError::InvalidLength(s.chars().count()));
        };

        match rank_char {
            '1'..='8' => Ok(unsafe { Rank::from_unchecked(rank_char as u8 - b'1') }),
            _ => Err(ParseRankError::InvalidChar(rank_char)),
        }
    }
}

impl std::str::FromStr for Square {
    type Err = ParseSquareError;

    /// Parses algebraic notation into a square
    ///
    /// The file must be a lowercase letter `a`-`h` and the rank a digit `1`-`8`. Letters and
    /// digits outside those ranges are reported separately from non-letters and non-digits.
    ///
    /// ## Examples
    ///
    /// ```
    /// use chess_rules::core::{Square, ParseSquareError};
    ///
    /// assert_eq!("e2".parse::<Square>(), Ok(Square::E2));
    /// assert_eq!("e9".parse::<Square>(), Err(ParseSquareError::RankOutOfRange('9')));
    /// assert_eq!("42".parse::<Square>(), Err(ParseSquareError::InvalidFileChar('4')));
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let (Some(file_char), Some(rank_char), None) = (chars.next(), chars.next(), chars.next())
        else {
            return Err(ParseSquareError::InvalidLength(s.chars().count()));
        };

        if !file_char.is_ascii_alphabetic() {
            return Err(ParseSquareError::InvalidFileChar(file_char));
        }
        if !rank_char.is_ascii_digit() {
            return Err(ParseSquareError::InvalidRankChar(rank_char));
        }

        let file = file_char
            .to_string()
            .parse::<File>()
            .map_err(|_| ParseSquareError::FileOutOfRange(file_char))?;
        let rank = rank_char
            .to_string()
            .parse::<Rank>()
            .map_err(|_| ParseSquareError::RankOutOfRange(rank_char))?;

        Ok(Square::from_parts(file, rank))
    }
}

/******************************************\
|==========================================|
|            Square Parse Errors           |
|==========================================|
\******************************************/

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseFileError {
    #[error("Invalid length for file string: {0}, expected 1")]
    InvalidLength(usize),
    #[error("Invalid character for file string: '{0}', expected 'a'-'h'")]
    InvalidChar(char),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseRankError {
    #[error("Invalid length for rank string: {0}, expected 1")]
    InvalidLength(usize),
    #[error("Invalid character for rank string: '{0}', expected '1'-'8'")]
    InvalidChar(char),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseSquareError {
    #[error("coordinate must be 2 characters long, got {0}")]
    InvalidLength(usize),
    #[error("file '{0}' is not a letter")]
    InvalidFileChar(char),
    #[error("rank '{0}' is not a digit")]
    InvalidRankChar(char),
    #[error("file '{0}' is outside 'a'-'h'")]
    FileOutOfRange(char),
    #[error("rank '{0}' is outside '1'-'8'")]
    RankOutOfRange(char),
    #[error("row {row}, column {col} is off the board")]
    OutOfRange { row: u8, col: u8 },
}

/******************************************\
|==========================================|
|                Unit Tests                |
|==========================================|
\******************************************/
