pub mod perft;
pub mod prng;

pub use perft::{perft, perft_divide, perft_report};
pub use prng::PRNG;
