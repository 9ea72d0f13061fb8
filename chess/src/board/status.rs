use super::Board;
use crate::core::*;

/******************************************\
|==========================================|
|               Game Status                |
|==========================================|
\******************************************/

/// Classification of a position from the point of view of the side to move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    /// Not in check, with at least one legal move
    Active,

    /// The side to move is in check and can get out of it
    Check(Colour),

    /// The side to move is in check with no legal move
    Checkmate { winner: Colour },

    /// The side to move is not in check and has no legal move
    Stalemate,
}

impl GameStatus {
    /// Whether the game has ended
    #[inline]
    pub fn is_over(&self) -> bool {
        matches!(self, GameStatus::Checkmate { .. } | GameStatus::Stalemate)
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::Active => write!(f, "active"),
            GameStatus::Check(col) => write!(f, "{} is in check", col),
            GameStatus::Checkmate { winner } => write!(f, "checkmate, {} wins", winner),
            GameStatus::Stalemate => write!(f, "stalemate"),
        }
    }
}

impl Board {
    /// Classifies the position for `side_to_move`
    ///
    /// Fails with [`RulesError::NoKing`] when `side_to_move` has no king.
    pub fn status(&self, side_to_move: Colour) -> Result<GameStatus, RulesError> {
        let in_check = self.is_in_check(side_to_move)?;
        let can_move = self.has_legal_move(side_to_move);

        Ok(match (in_check, can_move) {
            (true, true) => GameStatus::Check(side_to_move),
            (true, false) => GameStatus::Checkmate {
                winner: !side_to_move,
            },
            (false, true) => GameStatus::Active,
            (false, false) => GameStatus::Stalemate,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{initial_board, status};

    #[test]
    fn test_initial_position_is_active() {
        let board = initial_board();
        assert_eq!(status(&board, Colour::White), Ok(GameStatus::Active));
        assert_eq!(status(&board, Colour::Black), Ok(GameStatus::Active));
    }

    #[test]
    fn test_fools_mate() {
        let board = initial_board()
            .play("f2", "f3", Colour::White)
            .and_then(|b| b.play("e7", "e5", Colour::Black))
            .and_then(|b| b.play("g2", "g4", Colour::White))
            .and_then(|b| b.play("d8", "h4", Colour::Black))
            .unwrap();

        let result = board.status(Colour::White).unwrap();
        assert_eq!(result, GameStatus::Checkmate { winner: Colour::Black });
        assert!(result.is_over());
        assert_eq!(result.to_string(), "checkmate, black wins");
    }

    #[test]
    fn test_stalemate() {
        let (board, side) = Board::from_fen("8/8/8/8/8/1q6/2k5/K7 w - - 0 1").unwrap();

        assert_eq!(board.status(side), Ok(GameStatus::Stalemate));
        assert!(board.status(side).unwrap().is_over());
    }

    #[test]
    fn test_check_with_escape() {
        let (board, side) = Board::from_fen("4k3/8/8/8/8/8/8/r3K3 w - - 0 1").unwrap();

        let result = board.status(side).unwrap();
        assert_eq!(result, GameStatus::Check(Colour::White));
        assert!(!result.is_over());
        assert_eq!(result.to_string(), "white is in check");
    }

    #[test]
    fn test_back_rank_mate() {
        let (board, side) = Board::from_fen("R5k1/5ppp/8/8/8/8/8/6K1 b - - 0 1").unwrap();
        assert_eq!(board.status(side), Ok(GameStatus::Checkmate { winner: Colour::White }));
    }

    #[test]
    fn test_missing_king() {
        let (board, _) = Board::from_fen("4k3/8/8/8/8/8/8/8 w - - 0 1").unwrap();
        assert_eq!(board.status(Colour::White), Err(RulesError::NoKing(Colour::White)));
        assert_eq!(board.status(Colour::Black), Ok(GameStatus::Active));
    }
}
