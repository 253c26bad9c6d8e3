//! Standard chess: piece movement, king safety and move execution.
//!
//! Move queries run in layers: [`pieces`] produces geometric candidates,
//! [`legality`] removes the ones leaving the king attacked, and [`executor`]
//! commits a chosen move. The rule set wrapping these is
//! [`StandardChess`](crate::StandardChess).

mod board;
pub mod executor;
pub mod legality;
pub mod perft;
pub mod pieces;

pub use legality::{classify, generate_moves, has_legal_moves, legal_moves};
pub use perft::{perft, perft_divide};
pub use pieces::{attack_targets, candidate_moves};
