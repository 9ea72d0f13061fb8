use super::Board;
use crate::core::*;

impl Board {
    /// Total value of the enemy pieces `col` has captured
    pub fn captured_value(&self, col: Colour) -> u32 {
        self.captured(col).iter().map(|piece| piece.pt().value()).sum()
    }

    /// The side ahead on captured material and by how much, `None` when level
    pub fn material_advantage(&self) -> Option<(Colour, u32)> {
        let white = self.captured_value(Colour::White);
        let black = self.captured_value(Colour::Black);

        match white.cmp(&black) {
            std::cmp::Ordering::Greater => Some((Colour::White, white - black)),
            std::cmp::Ordering::Less => Some((Colour::Black, black - white)),
            std::cmp::Ordering::Equal => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::board::initial_board;
    use crate::core::*;

    #[test]
    fn test_level_material() {
        let board = initial_board();
        assert_eq!(board.captured_value(Colour::White), 0);
        assert_eq!(board.material_advantage(), None);
    }

    #[test]
    fn test_advantage_after_trades() {
        // 1. e4 d5 2. exd5 Qxd5 3. Nc3 Qxa2 4. Rxa2
        let board = initial_board()
            .play("e2", "e4", Colour::White)
            .and_then(|b| b.play("d7", "d5", Colour::Black))
            .and_then(|b| b.play("e4", "d5", Colour::White))
            .and_then(|b| b.play("d8", "d5", Colour::Black))
            .unwrap();

        assert_eq!(board.captured(Colour::White), &[Piece::BlackPawn]);
        assert_eq!(board.captured(Colour::Black), &[Piece::WhitePawn]);
        assert_eq!(board.material_advantage(), None);

        let board = board
            .play("b1", "c3", Colour::White)
            .and_then(|b| b.play("d5", "a2", Colour::Black))
            .and_then(|b| b.play("a1", "a2", Colour::White))
            .unwrap();

        assert_eq!(board.captured_value(Colour::White), 10);
        assert_eq!(board.captured_value(Colour::Black), 2);
        assert_eq!(board.material_advantage(), Some((Colour::White, 8)));
    }
}
