use crate::util::random_choice;
use lib_rps::{Move, RandomSource};
use log::debug;

/// The production opponent: draws each move uniformly (1/3 each) from the
/// three legal moves, using the thread-local RNG.
pub struct RandomChooser;

impl RandomSource for RandomChooser {
    fn choose_move(&mut self) -> Move {
        let chosen = random_choice(&Move::ALL, &mut rand::thread_rng());
        debug!("computer drew {:?}", chosen);

        chosen
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 3000 draws, expected 1000 per move. A tolerance of +/-200 is about
    /// 7.7 standard deviations, so a fair draw essentially never fails this.
    #[test]
    fn choose_move_is_roughly_uniform() {
        const DRAWS: usize = 3000;
        const EXPECTED: usize = DRAWS / 3;
        const TOLERANCE: usize = 200;

        let mut chooser = RandomChooser;
        let mut counts = [0usize; 3];

        for _ in 0..DRAWS {
            match chooser.choose_move() {
                Move::Rock => counts[0] += 1,
                Move::Paper => counts[1] += 1,
                Move::Scissors => counts[2] += 1,
            }
        }

        for &count in &counts {
            assert!(count > 0, "every move must eventually be drawn");
            assert!(
                count >= EXPECTED - TOLERANCE && count <= EXPECTED + TOLERANCE,
                "draw counts not close to uniform: {:?}",
                counts
            );
        }
    }
}
