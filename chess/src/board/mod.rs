pub mod attacks;
pub mod fen;
pub mod legal;
pub mod material;
pub mod movegen;
pub mod movement;
pub mod status;

pub use fen::{KIWIPETE_FEN, START_FEN};
pub use movegen::MoveList;
pub use status::GameStatus;

use crate::core::*;

/******************************************\
|==========================================|
|                Last Move                 |
|==========================================|
\******************************************/

/// The most recent ply, the only history the rules need (en passant eligibility)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LastMove {
    pub piece: Piece,

    pub from: Square,

    pub to: Square,
}

impl LastMove {
    /// Whether this ply was a pawn advancing two squares
    #[inline]
    pub fn is_double_push(&self) -> bool {
        self.piece.pt() == PieceType::Pawn
            && self.from.file() == self.to.file()
            && Square::rank_dist(self.from, self.to) == 2
    }
}

impl std::fmt::Display for LastMove {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}{}", self.piece, self.from, self.to)
    }
}

/******************************************\
|==========================================|
|                  Board                   |
|==========================================|
\******************************************/

/// # Board
///
/// A position together with the bits of history that legality depends on: which kings and
/// rooks have moved, the last ply, and the pieces each side has captured so far.
///
/// Boards are values. Queries borrow, [`Board::apply`] returns a new board and never touches
/// the receiver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    board: [Option<Piece>; Square::NUM],

    castling: CastlingRights,

    last_move: Option<LastMove>,

    captured: [Vec<Piece>; Colour::NUM],
}

/******************************************\
|==========================================|
|           Basic Implementation           |
|==========================================|
\******************************************/

impl Default for Board {
    /// The standard starting position, nothing has moved yet
    fn default() -> Board {
        const BACK_RANK: [PieceType; File::NUM] = [
            PieceType::Rook,
            PieceType::Knight,
            PieceType::Bishop,
            PieceType::Queen,
            PieceType::King,
            PieceType::Bishop,
            PieceType::Knight,
            PieceType::Rook,
        ];

        let mut board = Board::empty();

        for col in Colour::iter() {
            let back_rank = Rank::Rank1.relative(col);
            let pawn_rank = col.pawn_rank();

            for (file, pt) in File::iter().zip(BACK_RANK) {
                board.add_piece(Piece::from_parts(col, pt), Square::from_parts(file, back_rank));
                board.add_piece(
                    Piece::from_parts(col, PieceType::Pawn),
                    Square::from_parts(file, pawn_rank),
                );
            }
        }

        board
    }
}

impl Board {
    /// A board with no pieces, no castling flags set and no history
    pub fn empty() -> Board {
        Board {
            board: [None; Square::NUM],
            castling: CastlingRights::NONE,
            last_move: None,
            captured: [Vec::new(), Vec::new()],
        }
    }

    /// Same as [`Board::default`]
    pub fn new() -> Board {
        Board::default()
    }

    #[inline]
    pub fn on(&self, square: Square) -> Option<Piece> {
        self.board[square.index()]
    }

    /// The colour of the piece on `square`, if any
    #[inline]
    pub fn side_at(&self, square: Square) -> Option<Colour> {
        self.on(square).map(Piece::colour)
    }

    /// Whether both squares hold pieces of the same colour, empty squares never match
    #[inline]
    pub fn same_side(&self, a: Square, b: Square) -> bool {
        Piece::same_side(self.on(a), self.on(b))
    }

    /// Locates the king of `col`, `None` if it is not on the board
    pub fn king_square(&self, col: Colour) -> Option<Square> {
        let king = Piece::from_parts(col, PieceType::King);
        Square::iter().find(|&sq| self.on(sq) == Some(king))
    }

    /// Every piece of `col` with its square, from a1 to h8
    pub fn pieces(&self, col: Colour) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::iter().filter_map(move |sq| match self.on(sq) {
            Some(piece) if piece.colour() == col => Some((sq, piece)),
            _ => None,
        })
    }

    #[inline]
    pub fn castling(&self) -> CastlingRights {
        self.castling
    }

    #[inline]
    pub fn last_move(&self) -> Option<LastMove> {
        self.last_move
    }

    /// Enemy pieces captured by `col`, in capture order
    #[inline]
    pub fn captured(&self, col: Colour) -> &[Piece] {
        &self.captured[col.index()]
    }

    #[inline]
    pub(crate) fn add_piece(&mut self, piece: Piece, square: Square) {
        self.board[square.index()] = Some(piece);
    }

    #[inline]
    pub(crate) fn remove_piece(&mut self, square: Square) -> Option<Piece> {
        self.board[square.index()].take()
    }

    /// Relocates whatever stands on `from`, returning what stood on `to`
    #[inline]
    pub(crate) fn move_piece(&mut self, from: Square, to: Square) -> Option<Piece> {
        let piece = self.remove_piece(from);
        std::mem::replace(&mut self.board[to.index()], piece)
    }

    #[inline]
    pub(crate) fn set_castling(&mut self, castling: CastlingRights) {
        self.castling = castling;
    }

    #[inline]
    pub(crate) fn set_last_move(&mut self, last_move: Option<LastMove>) {
        self.last_move = last_move;
    }

    #[inline]
    pub(crate) fn record_capture(&mut self, col: Colour, piece: Piece) {
        self.captured[col.index()].push(piece);
    }

    /// A copy of the position without the capture ledger, for simulating moves
    pub(crate) fn scratch(&self) -> Board {
        Board {
            board: self.board,
            castling: self.castling,
            last_move: self.last_move,
            captured: [Vec::new(), Vec::new()],
        }
    }
}

/******************************************\
|==========================================|
|             Functional API               |
|==========================================|
\******************************************/

/// The standard starting position
pub fn initial_board() -> Board {
    Board::default()
}

/// Legal moves of the piece on `square`, empty for an empty square
pub fn legal_moves(board: &Board, square: Square) -> MoveList {
    board.legal_moves(square)
}

/// Commits `mv` to a copy of `board`
pub fn apply(board: &Board, mv: Move) -> Board {
    board.apply(mv)
}

/// Classifies the position for `side_to_move`
pub fn status(board: &Board, side_to_move: Colour) -> Result<GameStatus, RulesError> {
    board.status(side_to_move)
}

/******************************************\
|==========================================|
|                 Display                  |
|==========================================|
\******************************************/

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        const SEPARATOR: &str = "\n     +---+---+---+---+---+---+---+---+";

        writeln!(f, "{}", SEPARATOR)?;

        for rank in Rank::iter().rev() {
            write!(f, " {}   |", rank)?;

            for file in File::iter() {
                let square = Square::from_parts(file, rank);
                let cell = match self.on(square) {
                    Some(piece) => piece.to_char(),
                    None => ' ',
                };
                write!(f, " {} |", cell)?;
            }

            writeln!(f, "{}", SEPARATOR)?;
        }

        writeln!(f)?;
        writeln!(f, "       A   B   C   D   E   F   G   H")?;
        writeln!(f)?;
        writeln!(f, "Castling: {}", self.castling)?;
        writeln!(
            f,
            "Last Move: {}",
            match self.last_move {
                Some(last) => last.to_string(),
                None => "None".to_string(),
            }
        )?;

        for col in Colour::iter() {
            let captured: String = self.captured(col).iter().map(|p| p.to_char()).collect();
            writeln!(
                f,
                "Captured by {}: {} ({} points)",
                col,
                if captured.is_empty() { "-" } else { captured.as_str() },
                self.captured_value(col)
            )?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_board_layout() {
        let board = initial_board();

        assert_eq!(board.on(Square::E1), Some(Piece::WhiteKing));
        assert_eq!(board.on(Square::D8), Some(Piece::BlackQueen));
        assert_eq!(board.on(Square::A1), Some(Piece::WhiteRook));
        assert_eq!(board.on(Square::G8), Some(Piece::BlackKnight));
        assert_eq!(board.on(Square::C2), Some(Piece::WhitePawn));
        assert_eq!(board.on(Square::F7), Some(Piece::BlackPawn));
        assert_eq!(board.on(Square::E4), None);

        assert_eq!(board.pieces(Colour::White).count(), 16);
        assert_eq!(board.pieces(Colour::Black).count(), 16);
        assert_eq!(board.castling(), CastlingRights::NONE);
        assert_eq!(board.last_move(), None);
        assert!(board.captured(Colour::White).is_empty());
        assert!(board.captured(Colour::Black).is_empty());
    }

    #[test]
    fn test_side_queries() {
        let board = initial_board();

        assert_eq!(board.side_at(Square::A2), Some(Colour::White));
        assert_eq!(board.side_at(Square::A7), Some(Colour::Black));
        assert_eq!(board.side_at(Square::A4), None);

        assert!(board.same_side(Square::A1, Square::H2));
        assert!(!board.same_side(Square::A1, Square::A8));
        assert!(!board.same_side(Square::A1, Square::A3));
        assert!(!board.same_side(Square::A3, Square::A4));
    }

    #[test]
    fn test_king_square() {
        let board = initial_board();
        assert_eq!(board.king_square(Colour::White), Some(Square::E1));
        assert_eq!(board.king_square(Colour::Black), Some(Square::E8));
        assert_eq!(Board::empty().king_square(Colour::White), None);
    }

    #[test]
    fn test_last_move_double_push() {
        let double = LastMove {
            piece: Piece::BlackPawn,
            from: Square::D7,
            to: Square::D5,
        };
        let single = LastMove {
            piece: Piece::BlackPawn,
            from: Square::D7,
            to: Square::D6,
        };
        let rook = LastMove {
            piece: Piece::BlackRook,
            from: Square::D7,
            to: Square::D5,
        };

        assert!(double.is_double_push());
        assert!(!single.is_double_push());
        assert!(!rook.is_double_push());
    }

    #[test]
    fn test_scratch_drops_capture_ledger() {
        let mut board = initial_board();
        board.record_capture(Colour::White, Piece::BlackPawn);

        let scratch = board.scratch();
        assert!(scratch.captured(Colour::White).is_empty());
        assert_eq!(scratch.on(Square::E1), board.on(Square::E1));
        assert_eq!(board.captured(Colour::White), &[Piece::BlackPawn]);
    }

    #[test]
    fn test_display_contains_diagram() {
        let text = initial_board().to_string();
        assert!(text.contains(" 8   | r | n | b | q | k | b | n | r |"));
        assert!(text.contains(" 1   | R | N | B | Q | K | B | N | R |"));
        assert!(text.contains("Castling: KQkq"));
        assert!(text.contains("Last Move: None"));
    }
}
