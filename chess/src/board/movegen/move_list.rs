use std::slice;

use crate::core::Move;

/// A queen in the middle of an empty board has 27 moves, a castling king 10
const MAX_PIECE_MOVES: usize = 32;

/// Fixed capacity list of the moves of a single piece
#[derive(Debug, Clone, Copy)]
pub struct MoveList {
    moves: [Move; MAX_PIECE_MOVES],
    num_moves: usize,
}

impl Default for MoveList {
    fn default() -> Self {
        Self::new()
    }
}

impl std::ops::Index<usize> for MoveList {
    type Output = Move;

    fn index(&self, index: usize) -> &Self::Output {
        &self.as_slice()[index]
    }
}

impl PartialEq for MoveList {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl Eq for MoveList {}

impl MoveList {
    #[inline]
    pub fn new() -> MoveList {
        MoveList {
            moves: [Move::NONE; MAX_PIECE_MOVES],
            num_moves: 0,
        }
    }

    #[inline]
    pub(crate) fn add_move(&mut self, move_: Move) {
        debug_assert!(self.num_moves < MAX_PIECE_MOVES);

        self.moves[self.num_moves] = move_;

        self.num_moves += 1;
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.num_moves
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.num_moves == 0
    }

    #[inline]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves[..self.num_moves]
    }

    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, Move> {
        self.as_slice().iter()
    }

    #[inline]
    pub fn contains(&self, move_: &Move) -> bool {
        self.as_slice().contains(move_)
    }

    /// Keeps only the moves for which `f` returns `true`, preserving their order
    pub fn retain(&mut self, mut f: impl FnMut(&Move) -> bool) {
        let mut kept = 0;

        for i in 0..self.num_moves {
            let move_ = self.moves[i];
            if f(&move_) {
                self.moves[kept] = move_;
                kept += 1;
            }
        }

        self.num_moves = kept;
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for MoveList {
    type Item = Move;
    type IntoIter = std::iter::Take<std::array::IntoIter<Move, MAX_PIECE_MOVES>>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.into_iter().take(self.num_moves)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{MoveFlag, Square};

    #[test]
    fn test_add_and_retain() {
        let mut list = MoveList::new();
        assert!(list.is_empty());

        list.add_move(Move::new(Square::E2, Square::E3, MoveFlag::Normal));
        list.add_move(Move::new(Square::E2, Square::E4, MoveFlag::Normal));
        list.add_move(Move::new(Square::E2, Square::D3, MoveFlag::Normal));
        assert_eq!(list.len(), 3);
        assert_eq!(list[1].to(), Square::E4);

        list.retain(|m| m.to() != Square::E4);
        assert_eq!(list.len(), 2);
        assert_eq!(list[0].to(), Square::E3);
        assert_eq!(list[1].to(), Square::D3);
        assert!(!list.contains(&Move::new(Square::E2, Square::E4, MoveFlag::Normal)));

        let targets: Vec<Square> = list.into_iter().map(|m| m.to()).collect();
        assert_eq!(targets, vec![Square::E3, Square::D3]);
    }

    #[test]
    fn test_equality_ignores_unused_slots() {
        let mut a = MoveList::new();
        let mut b = MoveList::new();
        a.add_move(Move::new(Square::A2, Square::A3, MoveFlag::Normal));
        a.add_move(Move::new(Square::A2, Square::A4, MoveFlag::Normal));
        a.retain(|m| m.to() == Square::A3);
        b.add_move(Move::new(Square::A2, Square::A3, MoveFlag::Normal));

        assert_eq!(a, b);
    }
}
