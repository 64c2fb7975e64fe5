use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A single player's choice for one round.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Move {
    Rock,
    Paper,
    Scissors,
}

impl Move {
    /// Every legal move. The move domain is closed;
    /// anything not in this set is rejected at parse time.
    pub const ALL: [Move; 3] = [Move::Rock, Move::Paper, Move::Scissors];

    /// True if this move defeats the other under the fixed cyclic relation
    /// rock > scissors > paper > rock.
    /// The relation is not transitive, so it is spelled out pair by pair
    /// rather than derived from any ranking.
    pub fn beats(self, other: Move) -> bool {
        match (self, other) {
            (Move::Rock, Move::Scissors)
            | (Move::Scissors, Move::Paper)
            | (Move::Paper, Move::Rock) => true,
            _ => false,
        }
    }

    /// Validates raw text into a `Move`, remembering which side supplied it
    /// so a rejection can say whose value was bad.
    /// This is the only place untrusted values enter the game; past this
    /// point an illegal move is unrepresentable.
    pub fn parse(s: &str, side: Side) -> Result<Move, InvalidMove> {
        match s.trim().to_lowercase().as_str() {
            "rock" => Ok(Move::Rock),
            "paper" => Ok(Move::Paper),
            "scissors" => Ok(Move::Scissors),
            _ => Err(InvalidMove {
                side,
                value: s.trim().to_owned(),
            }),
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Move::Rock => "rock",
            Move::Paper => "paper",
            Move::Scissors => "scissors",
        };

        write!(f, "{}", name)
    }
}

impl FromStr for Move {
    type Err = InvalidMove;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Move::parse(s, Side::Player)
    }
}

/// Identifies one of the two participants in a round.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Side {
    Player,
    Computer,
}

impl Side {
    pub fn opponent(self) -> Self {
        match self {
            Side::Player => Side::Computer,
            Side::Computer => Side::Player,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Side::Player => "player",
            Side::Computer => "computer",
        };

        write!(f, "{}", name)
    }
}

/// The result of comparing two moves in one round.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Tie,
    PlayerWins,
    ComputerWins,
}

impl Outcome {
    pub fn is_win_for(self, side: Side) -> bool {
        match self {
            Outcome::PlayerWins => side == Side::Player,
            Outcome::ComputerWins => side == Side::Computer,
            _ => false,
        }
    }
}

/// The single validated failure in the game: a value outside the move set
/// was supplied where a move was required. Always a boundary error from the
/// caller, never transient; it is surfaced synchronously and never
/// swallowed, so the caller can reject the offending input instead of the
/// game guessing a move.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("invalid {side} move {value:?}: expected one of rock, paper, scissors")]
pub struct InvalidMove {
    pub side: Side,
    pub value: String,
}

/// Resolves one round. Equal moves tie; otherwise exactly one of the two
/// moves beats the other, and that move's side wins.
/// Pure and deterministic: same pair in, same outcome out.
pub fn resolve(player: Move, computer: Move) -> Outcome {
    if player == computer {
        Outcome::Tie
    } else if player.beats(computer) {
        Outcome::PlayerWins
    } else {
        Outcome::ComputerWins
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_same_move_is_always_tie() {
        for &m in &Move::ALL {
            assert_eq!(Outcome::Tie, resolve(m, m));
        }
    }

    #[test]
    fn resolve_honors_all_three_winning_pairs() {
        let winning_pairs = [
            (Move::Rock, Move::Scissors),
            (Move::Scissors, Move::Paper),
            (Move::Paper, Move::Rock),
        ];

        for &(winner, loser) in &winning_pairs {
            assert_eq!(Outcome::PlayerWins, resolve(winner, loser));
            assert_eq!(Outcome::ComputerWins, resolve(loser, winner));
        }
    }

    #[test]
    fn resolve_every_distinct_pair_has_exactly_one_winner() {
        for &a in &Move::ALL {
            for &b in &Move::ALL {
                if a == b {
                    continue;
                }

                // One and only one of the two moves wins the pair.
                assert_ne!(a.beats(b), b.beats(a));

                let outcome = resolve(a, b);
                assert_ne!(Outcome::Tie, outcome);
            }
        }
    }

    #[test]
    fn beats_is_never_reflexive() {
        for &m in &Move::ALL {
            assert!(!m.beats(m));
        }
    }

    #[test]
    fn parse_accepts_all_moves_case_insensitively() {
        assert_eq!(Ok(Move::Rock), Move::parse("rock", Side::Player));
        assert_eq!(Ok(Move::Paper), Move::parse("Paper", Side::Player));
        assert_eq!(Ok(Move::Scissors), Move::parse(" SCISSORS ", Side::Computer));
    }

    #[test]
    fn parse_rejects_values_outside_the_move_set() {
        for bad in &["lizard", "rockk", "", "   ", "spock"] {
            let err = Move::parse(bad, Side::Player)
                .expect_err("value outside the move set must be rejected");

            assert_eq!(Side::Player, err.side);
            assert_eq!(bad.trim(), err.value);
        }
    }

    #[test]
    fn invalid_move_reports_which_side_offended() {
        let err = Move::parse("lizard", Side::Computer).unwrap_err();

        let message = err.to_string();
        assert!(message.contains("computer"));
        assert!(message.contains("lizard"));
    }

    #[test]
    fn from_str_matches_display() {
        for &m in &Move::ALL {
            let round_tripped: Move = m.to_string().parse().unwrap();
            assert_eq!(m, round_tripped);
        }
    }

    #[test]
    fn is_win_for_expects_valid_result() {
        let tie = Outcome::Tie;
        assert!(!tie.is_win_for(Side::Player));
        assert!(!tie.is_win_for(Side::Computer));

        let player_wins = Outcome::PlayerWins;
        assert!(player_wins.is_win_for(Side::Player));
        assert!(!player_wins.is_win_for(Side::Computer));

        let computer_wins = Outcome::ComputerWins;
        assert!(!computer_wins.is_win_for(Side::Player));
        assert!(computer_wins.is_win_for(Side::Computer));
    }

    #[test]
    fn opponent_flips_sides() {
        assert_eq!(Side::Computer, Side::Player.opponent());
        assert_eq!(Side::Player, Side::Computer.opponent());
    }
}
