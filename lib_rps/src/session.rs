use crate::game_primitives::{resolve, InvalidMove, Move, Outcome, Side};

/// The randomness capability the session draws the computer's move from.
/// Kept as a seam so gameplay can run against a real RNG in production
/// and a scripted double in tests.
pub trait RandomSource {
    /// Produce the computer's move for one round. Total: there is no
    /// error path, since the output domain is closed.
    fn choose_move(&mut self) -> Move;
}

/// Everything the presentation layer needs to render one round.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RoundResult {
    pub player_move: Move,
    pub computer_move: Move,
    pub outcome: Outcome,
}

impl RoundResult {
    /// Returns a human-friendly string for representing the round.
    pub fn human_friendly(&self) -> String {
        let verdict = match self.outcome {
            Outcome::PlayerWins => "You win!",
            Outcome::ComputerWins => "Computer wins!",
            Outcome::Tie => "It's a tie!",
        };

        format!(
            "You chose: {}    Computer chose: {}    {}",
            self.player_move, self.computer_move, verdict
        )
    }
}

/// Score state accumulated across rounds within one run.
///
/// A session is just the two counters plus the single play-one-round
/// transition; there is no terminal state, since rounds are unbounded
/// until the caller stops. Single-actor by construction: no locking,
/// no I/O, every operation returns synchronously.
pub struct Session<TSource: RandomSource> {
    source: TSource,
    player_score: usize,
    computer_score: usize,
}

impl<TSource: RandomSource> Session<TSource> {
    pub fn new(source: TSource) -> Self {
        Self {
            source,
            player_score: 0,
            computer_score: 0,
        }
    }

    /// Plays one round: draws the computer's move from the random source,
    /// resolves the pair, and credits the winning side (a tie credits
    /// neither). Returns the full result so the caller can render it.
    pub fn play_round(&mut self, player_move: Move) -> RoundResult {
        let computer_move = self.source.choose_move();
        let outcome = resolve(player_move, computer_move);

        match outcome {
            Outcome::PlayerWins => self.player_score += 1,
            Outcome::ComputerWins => self.computer_score += 1,
            Outcome::Tie => {}
        }

        RoundResult {
            player_move,
            computer_move,
            outcome,
        }
    }

    /// Like `play_round`, but validates raw text first.
    /// On `InvalidMove` nothing is mutated and no computer move is drawn.
    pub fn play_round_input(&mut self, input: &str) -> Result<RoundResult, InvalidMove> {
        let player_move = Move::parse(input, Side::Player)?;

        Ok(self.play_round(player_move))
    }

    /// Zeroes both counters. Always succeeds, regardless of history.
    pub fn reset(&mut self) {
        self.player_score = 0;
        self.computer_score = 0;
    }

    /// `(player_score, computer_score)`. Read-only.
    pub fn scores(&self) -> (usize, usize) {
        (self.player_score, self.computer_score)
    }
}
