//! # Chess Rules
//!
//! The rules of chess as pure state transitions: legal move generation, move application with
//! castling and en passant, and check / checkmate / stalemate classification.
pub mod board;
pub mod core;
pub mod utils;

pub use board::{
    Board, GameStatus, LastMove, MoveList, START_FEN, apply, initial_board, legal_moves, status,
};
pub use crate::core::*;
