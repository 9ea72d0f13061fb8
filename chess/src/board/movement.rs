use super::{Board, LastMove};
use crate::core::*;

impl Board {
    /// Relocates the rook of a castling move of `us` on `side`
    fn castle_rook(&mut self, us: Colour, side: CastleSide) {
        self.move_piece(side.rook_from(us), side.rook_to(us));
    }

    /// Marks the kings and rooks whose home squares `from` or `to` are
    ///
    /// Leaving a home square means that piece moved, landing on one means it was captured.
    /// Either way it can no longer castle.
    fn update_castle_rights(&mut self, from: Square, to: Square) {
        let mut castling = self.castling();
        castling.set(CastlingRights::for_square(from) | CastlingRights::for_square(to));
        self.set_castling(castling);
    }

    /// Commits `move_` to this board in place
    ///
    /// The move is trusted: it should come from [`Board::legal_moves`] or
    /// [`Board::pseudo_moves`]. Moving from an empty square leaves the board unchanged.
    pub(crate) fn make_move(&mut self, move_: Move) {
        let from = move_.from();
        let to = move_.to();

        let Some(piece) = self.on(from) else {
            return;
        };
        let us = piece.colour();

        match move_.flag() {
            MoveFlag::EnPassant => {
                // The captured pawn stands beside the mover, on the file it lands on
                let victim_sq = Square::from_parts(to.file(), from.rank());
                if let Some(victim) = self.remove_piece(victim_sq) {
                    self.record_capture(us, victim);
                }
            }
            MoveFlag::KingCastle => self.castle_rook(us, CastleSide::King),
            MoveFlag::QueenCastle => self.castle_rook(us, CastleSide::Queen),
            MoveFlag::Normal => {}
        }

        if let Some(captured) = self.move_piece(from, to) {
            self.record_capture(us, captured);
        }

        self.update_castle_rights(from, to);

        self.set_last_move(Some(LastMove { piece, from, to }));
    }

    /// Returns the board after `move_`, leaving `self` untouched
    ///
    /// Like [`Board::make_move`] the move is trusted. Use [`Board::try_move`] for moves that
    /// come from outside the rules.
    pub fn apply(&self, move_: Move) -> Board {
        let mut board = self.clone();
        board.make_move(move_);
        board
    }
}
