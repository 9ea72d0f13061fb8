//! Per piece generators. Sliders walk rays square by square, leapers try each offset once.

use super::MoveList;
use crate::board::Board;
use crate::core::*;

/******************************************\
|==========================================|
|              Helper Functions            |
|==========================================|
\******************************************/

impl Board {
    /// Whether `us` may land on `to`: the square is empty or holds an enemy piece
    #[inline]
    fn can_land(&self, us: Colour, to: Square) -> bool {
        self.side_at(to) != Some(us)
    }

    /// Adds a move for every offset in `dirs` that stays on the board and can be landed on
    fn add_leaper_moves(&self, from: Square, us: Colour, dirs: &[Direction], list: &mut MoveList) {
        for &dir in dirs {
            if let Ok(to) = from.add(dir) {
                if self.can_land(us, to) {
                    list.add_move(Move::new(from, to, MoveFlag::Normal));
                }
            }
        }
    }

    /// Walks each ray in `dirs` until the edge or the first occupied square, which is included
    /// when it holds an enemy piece
    fn add_slider_moves(&self, from: Square, us: Colour, dirs: &[Direction], list: &mut MoveList) {
        for &dir in dirs {
            let mut sq = from;

            while let Ok(to) = sq.add(dir) {
                match self.side_at(to) {
                    None => list.add_move(Move::new(from, to, MoveFlag::Normal)),
                    Some(col) => {
                        if col != us {
                            list.add_move(Move::new(from, to, MoveFlag::Normal));
                        }
                        break;
                    }
                }
                sq = to;
            }
        }
    }

    /******************************************\
    |==========================================|
    |                  Pawns                   |
    |==========================================|
    \******************************************/

    fn add_pawn_moves(&self, from: Square, us: Colour, list: &mut MoveList) {
        let forward = us.forward();

        // Pushes. A pawn on the far rank has none, there is no promotion.
        if let Ok(one) = from.add(forward) {
            if self.on(one).is_none() {
                list.add_move(Move::new(from, one, MoveFlag::Normal));

                if from.rank() == us.pawn_rank() {
                    if let Ok(two) = one.add(forward) {
                        if self.on(two).is_none() {
                            list.add_move(Move::new(from, two, MoveFlag::Normal));
                        }
                    }
                }
            }
        }

        for dir in us.pawn_captures() {
            if let Ok(to) = from.add(dir) {
                if self.side_at(to) == Some(!us) {
                    list.add_move(Move::new(from, to, MoveFlag::Normal));
                }
            }
        }

        if let Some(to) = self.en_passant_target(from, us) {
            list.add_move(Move::new(from, to, MoveFlag::EnPassant));
        }
    }

    /// The square a pawn of `us` on `from` may capture en passant onto, if any
    ///
    /// Only the ply immediately after an enemy double push qualifies, and only for a pawn
    /// standing right beside the pawn that advanced.
    fn en_passant_target(&self, from: Square, us: Colour) -> Option<Square> {
        let last = self.last_move()?;

        if last.piece != Piece::from_parts(!us, PieceType::Pawn) || !last.is_double_push() {
            return None;
        }

        if last.to.rank() != from.rank() || Square::file_dist(last.to, from) != 1 {
            return None;
        }

        let to = last.to.add(us.forward()).ok()?;
        self.on(to).is_none().then_some(to)
    }

    /******************************************\
    |==========================================|
    |                  Kings                   |
    |==========================================|
    \******************************************/

    fn add_king_moves(&self, from: Square, us: Colour, include_castling: bool, list: &mut MoveList) {
        self.add_leaper_moves(from, us, &Direction::KING, list);

        if !include_castling || from != Square::E1.relative(us) {
            return;
        }

        for side in CastleSide::ALL {
            if self.can_castle(us, side) {
                list.add_move(Move::castle(from, side.king_to(us), side));
            }
        }
    }

    /// Castling conditions for the king of `us`, which the caller has found on its home square
    fn can_castle(&self, us: Colour, side: CastleSide) -> bool {
        if !self.castling().allows(us, side) {
            return false;
        }

        if self.on(side.rook_from(us)) != Some(Piece::from_parts(us, PieceType::Rook)) {
            return false;
        }

        if side.between().iter().any(|sq| self.on(sq.relative(us)).is_some()) {
            return false;
        }

        !side
            .king_path()
            .iter()
            .any(|sq| self.is_square_attacked(sq.relative(us), !us))
    }

    /******************************************\
    |==========================================|
    |              Main Generator              |
    |==========================================|
    \******************************************/

    /// Pseudo-legal moves of the piece on `square`
    ///
    /// Moves may leave the mover's own king in check. Castling is only generated when
    /// `include_castling` is set, and then already excludes castling out of, through or into
    /// check. An empty square yields an empty list.
    pub fn pseudo_moves(&self, square: Square, include_castling: bool) -> MoveList {
        let mut list = MoveList::new();

        let Some(piece) = self.on(square) else {
            return list;
        };
        let us = piece.colour();

        match piece.pt() {
            PieceType::Pawn => self.add_pawn_moves(square, us, &mut list),
            PieceType::Knight => self.add_leaper_moves(square, us, &Direction::KNIGHT, &mut list),
            PieceType::Bishop => self.add_slider_moves(square, us, &Direction::DIAGONAL, &mut list),
            PieceType::Rook => self.add_slider_moves(square, us, &Direction::ORTHOGONAL, &mut list),
            PieceType::Queen => {
                self.add_slider_moves(square, us, &Direction::ORTHOGONAL, &mut list);
                self.add_slider_moves(square, us, &Direction::DIAGONAL, &mut list);
            }
            PieceType::King => self.add_king_moves(square, us, include_castling, &mut list),
        }

        list
    }
}

/******************************************\
|==========================================|
|                Unit Tests                |
|==========================================|
\******************************************/

#[cfg(test)]
mod tests {
    use crate::board::{Board, initial_board};
    use crate::core::*;

    fn targets(board: &Board, sq: Square, include_castling: bool) -> Vec<Square> {
        let mut targets: Vec<Square> = board
            .pseudo_moves(sq, include_castling)
            .iter()
            .map(|m| m.to())
            .collect();
        targets.sort_by_key(|sq| sq.index());
        targets
    }

    fn board(fen: &str) -> Board {
        Board::from_fen(fen).unwrap().0
    }

    #[test]
    fn test_initial_pawn_and_knight_moves() {
        let board = initial_board();

        assert_eq!(targets(&board, Square::E2, true), vec![Square::E3, Square::E4]);
        assert_eq!(targets(&board, Square::B1, true), vec![Square::A3, Square::C3]);
        assert_eq!(targets(&board, Square::D7, true), vec![Square::D5, Square::D6]);
        assert!(targets(&board, Square::A1, true).is_empty());
        assert!(targets(&board, Square::E1, true).is_empty());
        assert!(board.pseudo_moves(Square::E4, true).is_empty());
    }

    #[test]
    fn test_blocked_pawn() {
        let board = board("4k3/8/8/8/8/4n3/4P3/4K3 w - - 0 1");
        assert!(targets(&board, Square::E2, true).is_empty());

        let board = self::board("4k3/8/8/8/4n3/8/4P3/4K3 w - - 0 1");
        assert_eq!(targets(&board, Square::E2, true), vec![Square::E3]);
    }

    #[test]
    fn test_pawn_captures_only_enemies() {
        let board = board("4k3/8/8/3p1P2/4P3/8/8/4K3 w - - 0 1");
        assert_eq!(targets(&board, Square::E4, true), vec![Square::D5, Square::E5]);
    }

    #[test]
    fn test_pawn_on_last_rank_is_stuck() {
        let board = board("P3k3/8/8/8/8/8/8/4K3 w - - 0 1");
        assert!(targets(&board, Square::A8, true).is_empty());
    }

    #[test]
    fn test_knight_in_corner() {
        let board = board("4k3/8/8/8/8/8/8/N3K3 w - - 0 1");
        assert_eq!(targets(&board, Square::A1, true), vec![Square::C2, Square::B3]);
    }

    #[test]
    fn test_sliders_stop_at_first_piece() {
        let board = board("4k3/8/8/1p6/8/8/1R2p3/1N2K3 w - - 0 1");
        assert_eq!(
            targets(&board, Square::B2, true),
            vec![Square::A2, Square::C2, Square::D2, Square::E2, Square::B3, Square::B4, Square::B5]
        );
    }

    #[test]
    fn test_queen_on_empty_board() {
        let board = board("k7/8/8/8/3Q4/8/8/7K w - - 0 1");
        assert_eq!(board.pseudo_moves(Square::D4, true).len(), 27);
    }

    #[test]
    fn test_en_passant_only_after_double_push() {
        let (board, _) = Board::from_fen("4k3/8/8/8/3p4/8/4P3/4K3 w - - 0 1").unwrap();
        let after = board.apply(Move::new(Square::E2, Square::E4, MoveFlag::Normal));

        let ep = Move::new(Square::D4, Square::E3, MoveFlag::EnPassant);
        assert!(after.pseudo_moves(Square::D4, true).contains(&ep));

        let single = board
            .apply(Move::new(Square::E2, Square::E3, MoveFlag::Normal))
            .apply(Move::new(Square::E8, Square::D8, MoveFlag::Normal))
            .apply(Move::new(Square::E3, Square::E4, MoveFlag::Normal));
        assert!(!single.pseudo_moves(Square::D4, true).iter().any(|m| m.is_en_passant()));
    }

    #[test]
    fn test_castling_requires_flag_and_empty_squares() {
        let board = board("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
        let castles: Vec<Move> = board
            .pseudo_moves(Square::E1, true)
            .iter()
            .copied()
            .filter(Move::is_castle)
            .collect();
        assert_eq!(
            castles,
            vec![
                Move::castle(Square::E1, Square::G1, CastleSide::King),
                Move::castle(Square::E1, Square::C1, CastleSide::Queen),
            ]
        );

        assert!(!board.pseudo_moves(Square::E1, false).iter().any(|m| m.is_castle()));

        let blocked = self::board("r3k2r/8/8/8/8/8/8/RN2K1NR w KQkq - 0 1");
        assert!(!blocked.pseudo_moves(Square::E1, true).iter().any(|m| m.is_castle()));

        let no_rights = self::board("r3k2r/8/8/8/8/8/8/R3K2R w kq - 0 1");
        assert!(!no_rights.pseudo_moves(Square::E1, true).iter().any(|m| m.is_castle()));
    }

    #[test]
    fn test_castling_not_through_attacked_squares() {
        // Black rook on f8 covers f1
        let board = board("4kr2/8/8/8/8/8/8/R3K2R w KQ - 0 1");
        let moves = board.pseudo_moves(Square::E1, true);
        assert!(!moves.contains(&Move::castle(Square::E1, Square::G1, CastleSide::King)));
        assert!(moves.contains(&Move::castle(Square::E1, Square::C1, CastleSide::Queen)));

        // b1 may be attacked, the king never crosses it
        let board = self::board("1r2k3/8/8/8/8/8/8/R3K2R w KQ - 0 1");
        let moves = board.pseudo_moves(Square::E1, true);
        assert!(moves.contains(&Move::castle(Square::E1, Square::C1, CastleSide::Queen)));

        // No castling out of check
        let board = self::board("4r1k1/8/8/8/8/8/8/R3K2R w KQ - 0 1");
        assert!(!board.pseudo_moves(Square::E1, true).iter().any(|m| m.is_castle()));
    }
}
