use super::{File, Rank, Square};
use thiserror::Error;

/******************************************\
|==========================================|
|                 Colours                  |
|==========================================|
\******************************************/

/// # Colour Representation
///
/// Represents the two sides in chess: White and Black.

#[rustfmt::skip]
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Colour {
    White,
    Black
}

impl Colour {
    /// Number of elements in the Colour enum
    pub const NUM: usize = 2;
}

crate::impl_from_to_primitive!(Colour);
crate::impl_enum_iter!(Colour);

/******************************************\
|==========================================|
|                 Direction                |
|==========================================|
\******************************************/

/// # Direction Representation
///
/// The 8 king directions plus the 8 knight jumps, as offsets on the square index.

#[rustfmt::skip]
#[repr(i8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    N = 8, S = -8, W = -1, E = 1,
    NE = 9, NW = 7, SE = -7, SW = -9,
    NNE = 17, NNW = 15, NEE = 10, NWW = 6,
    SEE = -6, SWW = -10, SSE = -15, SSW = -17,
}

crate::impl_from_to_primitive!(Direction, i8);

/******************************************\
|==========================================|
|               Castle Side                |
|==========================================|
\******************************************/

/// # Castle Side
///
/// The wing a king castles towards.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastleSide {
    King,
    Queen,
}

/******************************************\
|==========================================|
|              Castling Rights             |
|==========================================|
\******************************************/

/// # Castling Rights
///
/// Six "has moved" flags, one for each king and castling rook. A set flag vetoes castling on the
/// sides it covers. Flags are only ever added, so a right that is lost stays lost even if the
/// piece walks back to its home square.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CastlingRights(pub u8);

crate::impl_bit_ops!(CastlingRights);

/******************************************\
|==========================================|
|              Implementation              |
|==========================================|
\******************************************/

impl Colour {
    /// Returns the direction pawns of this colour advance in
    pub const fn forward(&self) -> Direction {
        match self {
            Colour::White => Direction::N,
            Colour::Black => Direction::S,
        }
    }

    /// Returns the two diagonal directions pawns of this colour capture in
    pub const fn pawn_captures(&self) -> [Direction; 2] {
        match self {
            Colour::White => [Direction::NW, Direction::NE],
            Colour::Black => [Direction::SW, Direction::SE],
        }
    }

    /// Returns the rank pawns of this colour start on
    pub const fn pawn_rank(&self) -> Rank {
        Rank::Rank2.relative(*self)
    }
}

impl std::ops::Not for Colour {
    type Output = Self;

    /// Returns the opposite colour
    fn not(self) -> Self::Output {
        match self {
            Colour::White => Colour::Black,
            Colour::Black => Colour::White,
        }
    }
}

impl std::fmt::Display for Colour {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Colour::White => write!(f, "white"),
            Colour::Black => write!(f, "black"),
        }
    }
}

impl Direction {
    /// Rook directions
    pub const ORTHOGONAL: [Direction; 4] = [Direction::N, Direction::S, Direction::E, Direction::W];

    /// Bishop directions
    pub const DIAGONAL: [Direction; 4] = [Direction::NE, Direction::NW, Direction::SE, Direction::SW];

    /// Knight jumps
    #[rustfmt::skip]
    pub const KNIGHT: [Direction; 8] = [
        Direction::NNW, Direction::NNE, Direction::NWW, Direction::NEE,
        Direction::SWW, Direction::SEE, Direction::SSW, Direction::SSE,
    ];

    /// King steps
    #[rustfmt::skip]
    pub const KING: [Direction; 8] = [
        Direction::N, Direction::S, Direction::E, Direction::W,
        Direction::NE, Direction::NW, Direction::SE, Direction::SW,
    ];
}

impl std::ops::Neg for Direction {
    type Output = Self;

    /// Negate the direction (N => S, etc...)
    fn neg(self) -> Self::Output {
        unsafe { Self::from_unchecked(-(self as i8)) }
    }
}

impl Square {
    /// Try to step from a square in a direction
    ///
    /// Fails when the step leaves the board, including steps that would wrap around the A or H
    /// file onto the neighbouring rank.
    #[inline]
    pub const fn add(self, rhs: Direction) -> Result<Self, SquareAddError> {
        let file = self.file() as u8;

        use Direction::*;
        let valid = match rhs {
            N | S => true,
            E | NE | NNE | SE | SSE => file < File::FileH as u8,
            W | NW | NNW | SW | SSW => file > File::FileA as u8,
            NEE | SEE => file < File::FileG as u8,
            NWW | SWW => file > File::FileB as u8,
        };

        if !valid {
            return Err(SquareAddError::OutOfBounds);
        }

        match Square::from_index(self as i16 + rhs as i16) {
            Some(sq) => Ok(sq),
            None => Err(SquareAddError::OutOfBounds),
        }
    }
}

impl CastleSide {
    /// Both castle sides, king side first
    pub const ALL: [CastleSide; 2] = [CastleSide::King, CastleSide::Queen];

    /// Home square of the rook castling on this side
    pub const fn rook_from(&self, col: Colour) -> Square {
        match self {
            CastleSide::King => Square::H1.relative(col),
            CastleSide::Queen => Square::A1.relative(col),
        }
    }

    /// Square the rook lands on, next to the king's destination
    pub const fn rook_to(&self, col: Colour) -> Square {
        match self {
            CastleSide::King => Square::F1.relative(col),
            CastleSide::Queen => Square::D1.relative(col),
        }
    }

    /// Square the king lands on, two squares towards the rook
    pub const fn king_to(&self, col: Colour) -> Square {
        match self {
            CastleSide::King => Square::G1.relative(col),
            CastleSide::Queen => Square::C1.relative(col),
        }
    }

    /// Squares strictly between the king and rook (White's perspective)
    pub const fn between(&self) -> &'static [Square] {
        match self {
            CastleSide::King => &[Square::F1, Square::G1],
            CastleSide::Queen => &[Square::B1, Square::C1, Square::D1],
        }
    }

    /// Squares the king stands on or crosses while castling, destination included
    /// (White's perspective)
    pub const fn king_path(&self) -> &'static [Square] {
        match self {
            CastleSide::King => &[Square::E1, Square::F1, Square::G1],
            CastleSide::Queen => &[Square::E1, Square::D1, Square::C1],
        }
    }
}

impl std::fmt::Display for CastleSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CastleSide::King => write!(f, "kingside"),
            CastleSide::Queen => write!(f, "queenside"),
        }
    }
}

impl CastlingRights {
    // Nothing has moved
    pub const NONE: CastlingRights = CastlingRights(0);
    // Atomic "has moved" flags
    pub const WHITE_KING: CastlingRights = CastlingRights(1);
    pub const WHITE_KING_ROOK: CastlingRights = CastlingRights(2);
    pub const WHITE_QUEEN_ROOK: CastlingRights = CastlingRights(4);
    pub const BLACK_KING: CastlingRights = CastlingRights(8);
    pub const BLACK_KING_ROOK: CastlingRights = CastlingRights(16);
    pub const BLACK_QUEEN_ROOK: CastlingRights = CastlingRights(32);
    // Every piece has moved, castling is gone for good
    pub const ALL: CastlingRights = CastlingRights(63);

    /// Helper function to check if any of the flags in `flag` are set
    #[inline]
    pub fn has(self, flag: CastlingRights) -> bool {
        self & flag != CastlingRights::NONE
    }

    /// Marks the flags in `flag` as moved
    #[inline]
    pub fn set(&mut self, flag: CastlingRights) {
        *self |= flag;
    }

    /// The king flag of a colour
    #[inline]
    pub const fn king(col: Colour) -> Self {
        match col {
            Colour::White => CastlingRights::WHITE_KING,
            Colour::Black => CastlingRights::BLACK_KING,
        }
    }

    /// The rook flag of a colour and side
    #[inline]
    pub const fn rook(col: Colour, side: CastleSide) -> Self {
        match (col, side) {
            (Colour::White, CastleSide::King) => CastlingRights::WHITE_KING_ROOK,
            (Colour::White, CastleSide::Queen) => CastlingRights::WHITE_QUEEN_ROOK,
            (Colour::Black, CastleSide::King) => CastlingRights::BLACK_KING_ROOK,
            (Colour::Black, CastleSide::Queen) => CastlingRights::BLACK_QUEEN_ROOK,
        }
    }

    /// The flag owned by the king or rook whose home square is `square`, if any
    ///
    /// Used with both ends of every move: leaving a home square means the piece moved, landing
    /// on one means the piece there was captured.
    #[inline]
    pub const fn for_square(square: Square) -> Self {
        match square {
            Square::E1 => CastlingRights::WHITE_KING,
            Square::H1 => CastlingRights::WHITE_KING_ROOK,
            Square::A1 => CastlingRights::WHITE_QUEEN_ROOK,
            Square::E8 => CastlingRights::BLACK_KING,
            Square::H8 => CastlingRights::BLACK_KING_ROOK,
            Square::A8 => CastlingRights::BLACK_QUEEN_ROOK,
            _ => CastlingRights::NONE,
        }
    }

    /// Whether neither the king nor the rook of `side` has moved
    #[inline]
    pub fn allows(self, col: Colour, side: CastleSide) -> bool {
        !self.has(Self::king(col) | Self::rook(col, side))
    }
}

impl std::fmt::Display for CastlingRights {
    /// Displays the castling still available in the `KQkq` format
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut s = String::new();
        for (col, side, c) in [
            (Colour::White, CastleSide::King, 'K'),
            (Colour::White, CastleSide::Queen, 'Q'),
            (Colour::Black, CastleSide::King, 'k'),
            (Colour::Black, CastleSide::Queen, 'q'),
        ] {
            if self.allows(col, side) {
                s.push(c);
            }
        }

        if s.is_empty() {
            s.push('-');
        }

        write!(f, "{}", s)
    }
}

/******************************************\
|==========================================|
|             Square Add Errors            |
|==========================================|
\******************************************/

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SquareAddError {
    #[error("Square operation resulted in an out-of-bounds position")]
    OutOfBounds,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_plus_direction() {
        assert_eq!(Square::E4.add(Direction::N), Ok(Square::E5));
        assert_eq!(Square::E4.add(Direction::S), Ok(Square::E3));
        assert_eq!(Square::E4.add(Direction::E), Ok(Square::F4));
        assert_eq!(Square::E4.add(Direction::W), Ok(Square::D4));

        assert_eq!(Square::E4.add(Direction::NE), Ok(Square::F5));
        assert_eq!(Square::E4.add(Direction::NW), Ok(Square::D5));
        assert_eq!(Square::E4.add(Direction::SE), Ok(Square::F3));
        assert_eq!(Square::E4.add(Direction::SW), Ok(Square::D3));

        assert_eq!(Square::E4.add(Direction::NNE), Ok(Square::F6));
        assert_eq!(Square::E4.add(Direction::NEE), Ok(Square::G5));
    }

    #[test]
    fn test_square_plus_direction_off_board() {
        assert_eq!(Square::H4.add(Direction::E), Err(SquareAddError::OutOfBounds));
        assert_eq!(Square::A4.add(Direction::W), Err(SquareAddError::OutOfBounds));
        assert_eq!(Square::E8.add(Direction::N), Err(SquareAddError::OutOfBounds));
        assert_eq!(Square::E1.add(Direction::S), Err(SquareAddError::OutOfBounds));
        assert_eq!(Square::H7.add(Direction::NEE), Err(SquareAddError::OutOfBounds));
        assert_eq!(Square::G7.add(Direction::SEE), Err(SquareAddError::OutOfBounds));
        assert_eq!(Square::A2.add(Direction::SWW), Err(SquareAddError::OutOfBounds));
        assert_eq!(Square::H1.add(Direction::NE), Err(SquareAddError::OutOfBounds));
    }

    #[test]
    fn test_every_step_can_be_undone() {
        for dir in Direction::KING.into_iter().chain(Direction::KNIGHT) {
            for sq in Square::iter() {
                if let Ok(new_sq) = sq.add(dir) {
                    assert_eq!(new_sq.add(-dir), Ok(sq));
                    assert!(Square::file_dist(sq, new_sq) <= 2);
                }
            }
        }
    }

    #[test]
    fn test_pawn_directions() {
        assert_eq!(Colour::White.forward(), Direction::N);
        assert_eq!(Colour::Black.forward(), Direction::S);
        assert_eq!(Colour::White.pawn_rank(), Rank::Rank2);
        assert_eq!(Colour::Black.pawn_rank(), Rank::Rank7);
        assert_eq!(
            Colour::Black.pawn_captures().map(|d| Square::E5.add(d)),
            [Ok(Square::D4), Ok(Square::F4)]
        );
    }

    #[test]
    fn test_castle_side_squares() {
        assert_eq!(CastleSide::King.king_to(Colour::White), Square::G1);
        assert_eq!(CastleSide::King.rook_to(Colour::White), Square::F1);
        assert_eq!(CastleSide::Queen.king_to(Colour::Black), Square::C8);
        assert_eq!(CastleSide::Queen.rook_from(Colour::Black), Square::A8);
        assert_eq!(CastleSide::Queen.rook_to(Colour::Black), Square::D8);
    }

    #[test]
    fn test_castling_rights_are_monotonic() {
        let mut rights = CastlingRights::NONE;
        assert!(rights.allows(Colour::White, CastleSide::King));

        rights.set(CastlingRights::WHITE_KING_ROOK);
        assert!(!rights.allows(Colour::White, CastleSide::King));
        assert!(rights.allows(Colour::White, CastleSide::Queen));

        rights.set(CastlingRights::WHITE_KING_ROOK);
        assert!(!rights.allows(Colour::White, CastleSide::King));

        rights.set(CastlingRights::BLACK_KING);
        assert!(!rights.allows(Colour::Black, CastleSide::King));
        assert!(!rights.allows(Colour::Black, CastleSide::Queen));
    }

    #[test]
    fn test_castling_rights_for_square() {
        assert_eq!(CastlingRights::for_square(Square::E1), CastlingRights::WHITE_KING);
        assert_eq!(CastlingRights::for_square(Square::A8), CastlingRights::BLACK_QUEEN_ROOK);
        assert_eq!(CastlingRights::for_square(Square::E4), CastlingRights::NONE);
    }

    #[test]
    fn test_castling_rights_display() {
        assert_eq!(CastlingRights::NONE.to_string(), "KQkq");
        assert_eq!(CastlingRights::ALL.to_string(), "-");
        assert_eq!(
            (CastlingRights::WHITE_QUEEN_ROOK | CastlingRights::BLACK_KING).to_string(),
            "K"
        );
    }
}
