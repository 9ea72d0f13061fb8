use super::{Board, LastMove};
use crate::core::*;

/******************************************\
|==========================================|
|            Useful fen strings            |
|==========================================|
\******************************************/

pub const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

pub const KIWIPETE_FEN: &str =
    "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";

/******************************************\
|==========================================|
|               Parse Fen                  |
|==========================================|
\******************************************/

impl Board {
    /// Parses a FEN string into a board and the side to move
    ///
    /// The halfmove clock and fullmove number may be left out. When present they are validated
    /// and otherwise ignored. Castling rights missing from the castling field become "has
    /// moved" flags, and an en passant square becomes the double push that allowed it.
    pub fn from_fen(fen: &str) -> Result<(Board, Colour), FenParseError> {
        let mut board = Board::empty();

        let mut parts = fen.split_whitespace();

        let piece_placement = parts.next().ok_or(FenParseError::InvalidNumberOfFields)?;
        board.parse_piece_placement(piece_placement)?;

        let side_to_move = parts.next().ok_or(FenParseError::InvalidNumberOfFields)?;
        let side = Self::parse_side_to_move(side_to_move)?;

        let castling = parts.next().ok_or(FenParseError::InvalidNumberOfFields)?;
        board.parse_castling(castling)?;

        let enpassant = parts.next().ok_or(FenParseError::InvalidNumberOfFields)?;
        board.parse_enpassant(enpassant, side)?;

        match (parts.next(), parts.next(), parts.next()) {
            (None, None, None) => {}
            (Some(fifty_move_token), Some(full_move_token), None) => {
                Self::parse_fifty_move(fifty_move_token)?;
                Self::parse_full_move(full_move_token)?;
            }
            _ => return Err(FenParseError::InvalidNumberOfFields),
        }

        Ok((board, side))
    }

    /// Writes the position as FEN with `side` to move
    ///
    /// Move counters are not tracked and are always written as `0 1`.
    pub fn fen(&self, side: Colour) -> String {
        let mut fen = String::new();

        for rank in Rank::iter().rev() {
            let mut empty_count = 0;
            for file in File::iter() {
                let square = Square::from_parts(file, rank);
                match self.on(square) {
                    Some(piece) => {
                        if empty_count > 0 {
                            fen.push_str(&empty_count.to_string());
                            empty_count = 0;
                        }
                        fen.push(piece.to_char());
                    }
                    None => {
                        empty_count += 1;
                    }
                }
            }
            if empty_count > 0 {
                fen.push_str(&empty_count.to_string());
            }
            if rank != Rank::Rank1 {
                fen.push('/');
            }
        }

        fen.push(' ');
        fen.push_str(match side {
            Colour::White => "w",
            Colour::Black => "b",
        });

        fen.push(' ');
        fen.push_str(&self.castling().to_string());

        fen.push(' ');
        match self.enpassant_square() {
            Some(square) => fen.push_str(&square.to_string()),
            None => fen.push('-'),
        }

        fen.push_str(" 0 1");

        fen
    }

    /// The square a pawn skipped over on the last ply, if it was a double push
    pub fn enpassant_square(&self) -> Option<Square> {
        let last = self.last_move().filter(LastMove::is_double_push)?;
        last.from.add(last.piece.colour().forward()).ok()
    }

    fn parse_separator(
        rank_iter: &mut impl DoubleEndedIterator<Item = Rank>,
        rank: Rank,
        file: u8,
    ) -> Result<(Rank, u8), FenParseError> {
        if file != 8 {
            return Err(FenParseError::InvalidRankFormat(format!(
                "Rank {} ended prematurely at file index {} (expected 8) before '/'",
                rank, file
            )));
        }

        let next_rank = rank_iter.next().ok_or_else(|| {
            FenParseError::InvalidRankFormat(format!(
                "Too many rank separators ('/') found after completing rank {}",
                rank
            ))
        })?;

        Ok((next_rank, 0))
    }

    fn parse_skip(
        skip: char,
        idx: usize,
        current_rank: Rank,
        current_file_index: u8,
    ) -> Result<u8, FenParseError> {
        let skip_val = skip as u8 - b'0';

        if !(1..=8).contains(&skip_val) {
            return Err(FenParseError::InvalidRankFormat(format!(
                "Invalid skip digit '{}' (must be 1-8) at char index {}",
                skip, idx
            )));
        }

        if current_file_index + skip_val > 8 {
            return Err(FenParseError::InvalidRankFormat(format!(
                "Skip value {} exceeds rank length at file index {} on rank {}",
                skip_val, current_file_index, current_rank
            )));
        }

        Ok(skip_val)
    }

    fn parse_piece(&mut self, piece: char, rank: Rank, file: u8) -> Result<(), FenParseError> {
        let piece_enum =
            Piece::try_from(piece).map_err(|_| FenParseError::InvalidPiecePlacementChar(piece))?;

        if file >= 8 {
            return Err(FenParseError::InvalidRankFormat(format!(
                "Piece placement '{}' attempted beyond file h on rank {}",
                piece, rank
            )));
        }

        let current_file = unsafe { File::from_unchecked(file) };

        self.add_piece(piece_enum, Square::from_parts(current_file, rank));

        Ok(())
    }

    fn parse_piece_placement(&mut self, piece_placement: &str) -> Result<(), FenParseError> {
        let mut rank_iter = Rank::iter().rev();

        let mut rank = rank_iter
            .next()
            .ok_or_else(|| FenParseError::InvalidRankFormat("Board has no ranks?".to_string()))?;

        let mut file: u8 = 0;

        for (i, char) in piece_placement.chars().enumerate() {
            match char {
                '/' => {
                    (rank, file) = Self::parse_separator(&mut rank_iter, rank, file)?;
                }

                skip if skip.is_ascii_digit() => {
                    file += Self::parse_skip(skip, i, rank, file)?;
                }

                piece_char => {
                    self.parse_piece(piece_char, rank, file)?;
                    file += 1;
                }
            }
        }

        if file != 8 {
            return Err(FenParseError::InvalidRankFormat(format!(
                "Final rank {} ended prematurely at file index {} (expected 8)",
                rank, file
            )));
        }

        if rank_iter.next().is_some() {
            return Err(FenParseError::InvalidRankFormat(
                "Not enough ranks specified in FEN string (expected 8)".to_string(),
            ));
        }

        Ok(())
    }

    fn parse_side_to_move(side_to_move: &str) -> Result<Colour, FenParseError> {
        match side_to_move {
            "w" => Ok(Colour::White),
            "b" => Ok(Colour::Black),
            _ => Err(FenParseError::InvalidSideToMove(side_to_move.to_string())),
        }
    }

    /// Turns the castling field into "has moved" flags
    ///
    /// A right is only kept when it is listed and the king and rook stand on their home
    /// squares. Every other rook gets its flag set.
    fn parse_castling(&mut self, castling: &str) -> Result<(), FenParseError> {
        if castling != "-" {
            if let Some(c) = castling.chars().find(|c| !"KQkq".contains(*c)) {
                return Err(FenParseError::InvalidCastlingChar(c));
            }
        }

        let mut rights = CastlingRights::NONE;

        for (col, side, c) in [
            (Colour::White, CastleSide::King, 'K'),
            (Colour::White, CastleSide::Queen, 'Q'),
            (Colour::Black, CastleSide::King, 'k'),
            (Colour::Black, CastleSide::Queen, 'q'),
        ] {
            let king_home =
                self.on(Square::E1.relative(col)) == Some(Piece::from_parts(col, PieceType::King));
            let rook_home =
                self.on(side.rook_from(col)) == Some(Piece::from_parts(col, PieceType::Rook));

            if !castling.contains(c) || !king_home || !rook_home {
                rights.set(CastlingRights::rook(col, side));
            }
        }

        self.set_castling(rights);

        Ok(())
    }

    /// Rebuilds the double push implied by an en passant square
    fn parse_enpassant(&mut self, enpassant: &str, side: Colour) -> Result<(), FenParseError> {
        if enpassant == "-" {
            self.set_last_move(None);
            return Ok(());
        }

        let square = enpassant
            .parse::<Square>()
            .map_err(|_| FenParseError::InvalidEnPassantSquare(enpassant.to_string()))?;

        let invalid = || {
            FenParseError::InvalidEnPassantSquare(format!(
                "{square} is not a valid enpassant square"
            ))
        };

        if square.rank() != Rank::Rank6.relative(side) {
            return Err(invalid());
        }

        // The pawn that just moved belongs to the side not on move
        let pusher = !side;
        let pawn = Piece::from_parts(pusher, PieceType::Pawn);
        let to = square.add(pusher.forward()).map_err(|_| invalid())?;
        let from = square.add(-pusher.forward()).map_err(|_| invalid())?;

        if self.on(to) != Some(pawn) || self.on(square).is_some() || self.on(from).is_some() {
            return Err(invalid());
        }

        self.set_last_move(Some(LastMove {
            piece: pawn,
            from,
            to,
        }));

        Ok(())
    }

    fn parse_fifty_move(fifty_move_token: &str) -> Result<u16, FenParseError> {
        fifty_move_token
            .parse::<u16>()
            .map_err(|_| FenParseError::InvalidHalfmoveClock(fifty_move_token.to_string()))
    }

    fn parse_full_move(full_move_token: &str) -> Result<u16, FenParseError> {
        let full_move_number = full_move_token
            .parse::<u16>()
            .map_err(|_| FenParseError::InvalidFullmoveNumber(full_move_token.to_string()))?;

        if full_move_number == 0 {
            return Err(FenParseError::InvalidFullmoveNumber(format!(
                "Fullmove number cannot be 0, found: {}",
                full_move_token
            )));
        }

        Ok(full_move_number)
    }
}
