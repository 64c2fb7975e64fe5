pub mod game_primitives;
pub mod session;
pub mod test_impls;

pub use game_primitives::{resolve, InvalidMove, Move, Outcome, Side};
pub use session::{RandomSource, RoundResult, Session};
