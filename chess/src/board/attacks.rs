use crate::board::Board;
use crate::core::*;

/******************************************\
|==========================================|
|              Attack Oracle               |
|==========================================|
\******************************************/

impl Board {
    /// Whether any piece of `by` could move to `square` if it were their turn
    ///
    /// Pawns attack both forward diagonals whether or not anything stands there. Castling never
    /// attacks anything, so the generator is asked for moves without it.
    pub fn is_square_attacked(&self, square: Square, by: Colour) -> bool {
        self.pieces(by).any(|(from, piece)| match piece.pt() {
            PieceType::Pawn => by
                .pawn_captures()
                .into_iter()
                .any(|dir| from.add(dir) == Ok(square)),
            _ => self.pseudo_moves(from, false).iter().any(|m| m.to() == square),
        })
    }

    /// Whether the king of `side` is attacked
    ///
    /// Fails with [`RulesError::NoKing`] when `side` has no king on the board.
    pub fn is_in_check(&self, side: Colour) -> Result<bool, RulesError> {
        let king = self.king_square(side).ok_or(RulesError::NoKing(side))?;
        Ok(self.is_square_attacked(king, !side))
    }
}
