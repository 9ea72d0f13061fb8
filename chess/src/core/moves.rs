use crate::core::{CastleSide, Square};

/******************************************\
|==========================================|
|                Move Flags                |
|==========================================|
\******************************************/

/// # Move Flag
///
/// Marks the moves whose side effects go beyond relocating one piece. Captures are not flagged:
/// the applier reads the destination square.

#[repr(u16)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum MoveFlag {
    Normal = 0b00,

    EnPassant = 0b01,

    KingCastle = 0b10,

    QueenCastle = 0b11,
}

crate::impl_from_to_primitive!(MoveFlag, u16);

/******************************************\
|==========================================|
|                   Move                   |
|==========================================|
\******************************************/

/// # Move
///
/// A `(from, to, flag)` triple packed into 16 bits:
///
/// - bits 0-5: from square
/// - bits 6-11: to square
/// - bits 12-13: flag

#[derive(Debug, PartialEq, Clone, Copy, Eq, Hash)]
pub struct Move {
    data: u16,
}

impl Default for Move {
    fn default() -> Self {
        Self::NONE
    }
}

impl Move {
    const FROM_SHIFT: u16 = 0;

    const TO_SHIFT: u16 = 6;

    const FLAG_SHIFT: u16 = 12;

    const SQUARE_MASK: u16 = 0x3F;

    const FLAG_MASK: u16 = 0x3;

    /// Placeholder move, never generated for a real position
    pub const NONE: Self = Self::new(Square::A1, Square::A1, MoveFlag::Normal);

    #[inline(always)]
    pub const fn new(from: Square, to: Square, flag: MoveFlag) -> Self {
        let data = ((from as u16) << Self::FROM_SHIFT)
            | ((to as u16) << Self::TO_SHIFT)
            | ((flag as u16) << Self::FLAG_SHIFT);

        Self { data }
    }

    /// Builds the castling move of `side` for the king on `from`
    #[inline]
    pub const fn castle(from: Square, to: Square, side: CastleSide) -> Self {
        let flag = match side {
            CastleSide::King => MoveFlag::KingCastle,
            CastleSide::Queen => MoveFlag::QueenCastle,
        };
        Self::new(from, to, flag)
    }

    #[inline(always)]
    pub const fn from(&self) -> Square {
        unsafe { Square::from_unchecked(((self.data >> Self::FROM_SHIFT) & Self::SQUARE_MASK) as u8) }
    }

    #[inline(always)]
    pub const fn to(&self) -> Square {
        unsafe { Square::from_unchecked(((self.data >> Self::TO_SHIFT) & Self::SQUARE_MASK) as u8) }
    }

    #[inline(always)]
    pub const fn flag(&self) -> MoveFlag {
        unsafe { MoveFlag::from_unchecked((self.data >> Self::FLAG_SHIFT) & Self::FLAG_MASK) }
    }

    #[inline(always)]
    pub const fn is_en_passant(&self) -> bool {
        matches!(self.flag(), MoveFlag::EnPassant)
    }

    #[inline(always)]
    pub const fn is_castle(&self) -> bool {
        matches!(self.flag(), MoveFlag::KingCastle | MoveFlag::QueenCastle)
    }

    /// The wing of a castling move, `None` for every other move
    #[inline(always)]
    pub const fn castle_side(&self) -> Option<CastleSide> {
        match self.flag() {
            MoveFlag::KingCastle => Some(CastleSide::King),
            MoveFlag::QueenCastle => Some(CastleSide::Queen),
            _ => None,
        }
    }

    #[inline(always)]
    pub const fn is_none(&self) -> bool {
        self.data == Self::NONE.data
    }
}

impl std::fmt::Display for Move {
    /// Displays the move as `from` followed by `to` (`e2e4`)
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.from(), self.to())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::square::Square::*;

    #[test]
    fn test_encoding_decoding_basic() {
        let m = Move::new(E2, E4, MoveFlag::Normal);
        assert_eq!(m.from(), E2);
        assert_eq!(m.to(), E4);
        assert_eq!(m.flag(), MoveFlag::Normal);
        assert!(!m.is_en_passant());
        assert!(!m.is_castle());
        assert_eq!(m.castle_side(), None);
    }

    #[test]
    fn test_encoding_decoding_en_passant() {
        let m = Move::new(E5, D6, MoveFlag::EnPassant);
        assert_eq!(m.from(), E5);
        assert_eq!(m.to(), D6);
        assert!(m.is_en_passant());
        assert!(!m.is_castle());
    }

    #[test]
    fn test_encoding_decoding_castles() {
        let m_ks = Move::castle(E1, G1, CastleSide::King);
        assert_eq!(m_ks.from(), E1);
        assert_eq!(m_ks.to(), G1);
        assert_eq!(m_ks.flag(), MoveFlag::KingCastle);
        assert!(m_ks.is_castle());
        assert_eq!(m_ks.castle_side(), Some(CastleSide::King));

        let m_qs = Move::castle(E8, C8, CastleSide::Queen);
        assert_eq!(m_qs.from(), E8);
        assert_eq!(m_qs.to(), C8);
        assert_eq!(m_qs.flag(), MoveFlag::QueenCastle);
        assert_eq!(m_qs.castle_side(), Some(CastleSide::Queen));
    }

    #[test]
    fn test_corner_squares_survive_packing() {
        let m = Move::new(H8, A1, MoveFlag::QueenCastle);
        assert_eq!(m.from(), H8);
        assert_eq!(m.to(), A1);
        assert_eq!(m.flag(), MoveFlag::QueenCastle);
    }

    #[test]
    fn test_none_and_display() {
        assert!(Move::default().is_none());
        assert!(!Move::new(G1, F3, MoveFlag::Normal).is_none());
        assert_eq!(Move::new(G1, F3, MoveFlag::Normal).to_string(), "g1f3");
        assert_eq!(Move::castle(E1, C1, CastleSide::Queen).to_string(), "e1c1");
    }
}
