//! # Module: `movegen`
//!
//! Pseudo-legal move generation for a single piece.
//!
//! A pseudo-legal move follows the movement pattern of its piece and respects blockers, but may
//! leave the mover's own king in check. The legality filter in [`crate::board::legal`] removes
//! those. Castling is the exception: its "not through check" condition is part of generation,
//! which is why the attack oracle asks for moves with castling disabled.
//!
//! ## Submodules
//!
//! - `pseudo`: per piece type generators, dispatched on [`PieceType`](crate::core::PieceType).
//! - `move_list`: the fixed capacity [`MoveList`] the generators fill.

mod move_list;
mod pseudo;

pub use move_list::MoveList;
