// Core module exports

// Value types shared by the board and the rules
pub mod errors;
pub mod macros;
pub mod moves;
pub mod piece;
pub mod square;
pub mod types;

// Re-export common types for easier access
pub use errors::{FenParseError, RulesError};
pub use moves::{Move, MoveFlag};
pub use piece::{ParsePieceError, Piece, PieceType};
pub use square::{File, ParseFileError, ParseRankError, ParseSquareError, Rank, Square};
pub use types::{CastleSide, CastlingRights, Colour, Direction, SquareAddError};
