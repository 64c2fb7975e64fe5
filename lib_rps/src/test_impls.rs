//! Deterministic stand-ins for the randomness seam,
//! for use by this crate's tests and by downstream crates.

use crate::game_primitives::Move;
use crate::session::RandomSource;

/// A `RandomSource` that replays a fixed script of moves, cycling back to
/// the start when the script runs out.
pub struct ScriptedSource {
    script: Vec<Move>,
    cursor: usize,
}

impl ScriptedSource {
    pub fn new(script: Vec<Move>) -> Self {
        assert!(
            !script.is_empty(),
            "a scripted source needs at least one move to replay"
        );

        Self { script, cursor: 0 }
    }
}

impl RandomSource for ScriptedSource {
    fn choose_move(&mut self) -> Move {
        let chosen = self.script[self.cursor % self.script.len()];
        self.cursor += 1;

        chosen
    }
}
