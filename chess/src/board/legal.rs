use super::{Board, MoveList};
use crate::core::*;

/******************************************\
|==========================================|
|             Legality Filter              |
|==========================================|
\******************************************/

impl Board {
    /// Whether `move_` would leave the mover's own king attacked
    ///
    /// Simulated on a scratch copy. A side without a king can never be in check.
    fn exposes_king(&self, move_: Move, us: Colour) -> bool {
        let mut scratch = self.scratch();
        scratch.make_move(move_);
        scratch.is_in_check(us).unwrap_or(false)
    }

    /// Legal moves of the piece on `square`
    ///
    /// Pseudo-legal moves (castling included) minus those that leave the mover's king in check.
    /// An empty square yields an empty list.
    pub fn legal_moves(&self, square: Square) -> MoveList {
        let mut moves = self.pseudo_moves(square, true);

        if let Some(us) = self.side_at(square) {
            moves.retain(|&m| !self.exposes_king(m, us));
        }

        moves
    }

    /// Every legal move of `side`, grouped by origin square from a1 to h8
    pub fn all_legal_moves(&self, side: Colour) -> Vec<Move> {
        self.pieces(side)
            .flat_map(|(sq, _)| self.legal_moves(sq))
            .collect()
    }

    /// Whether `side` has at least one legal move
    pub fn has_legal_move(&self, side: Colour) -> bool {
        self.pieces(side).any(|(sq, _)| !self.legal_moves(sq).is_empty())
    }

    /******************************************\
    |==========================================|
    |            Move Validation               |
    |==========================================|
    \******************************************/

    /// Selects the piece on `square` for `side`, returning its legal moves
    pub fn select(&self, square: Square, side: Colour) -> Result<MoveList, RulesError> {
        let piece = self.on(square).ok_or(RulesError::NoPieceAtSquare(square))?;

        if piece.colour() != side {
            return Err(RulesError::WrongSideToMove {
                square,
                owner: piece.colour(),
                side,
            });
        }

        Ok(self.legal_moves(square))
    }

    /// Finds the legal move of `side` from `from` to `to`
    ///
    /// When the piece could reach `to` but only by leaving its king in check, the error says so
    /// through `exposes_king`.
    pub fn find_move(&self, from: Square, to: Square, side: Colour) -> Result<Move, RulesError> {
        let legal = self.select(from, side)?;

        if let Some(&found) = legal.iter().find(|m| m.to() == to) {
            return Ok(found);
        }

        let exposes_king = self
            .pseudo_moves(from, true)
            .iter()
            .any(|m| m.to() == to);

        Err(RulesError::IllegalMove {
            from,
            to,
            exposes_king,
        })
    }

    /// Validates and applies the move of `side` from `from` to `to`
    ///
    /// On error nothing changes: `self` is only ever borrowed.
    pub fn try_move(&self, from: Square, to: Square, side: Colour) -> Result<Board, RulesError> {
        let move_ = self.find_move(from, to, side)?;
        Ok(self.apply(move_))
    }

    /// Same as [`Board::try_move`] with squares in algebraic notation (`"e2"`)
    pub fn play(&self, from: &str, to: &str, side: Colour) -> Result<Board, RulesError> {
        let from = from.parse::<Square>()?;
        let to = to.parse::<Square>()?;
        self.try_move(from, to, side)
    }
}
