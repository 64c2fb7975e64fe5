use lib_choosers::RandomChooser;
use lib_rps::{Outcome, RandomSource, RoundResult, Session};
use log::info;
use std::io::stdin;

#[derive(Debug, PartialEq)]
enum Command {
    Play(String),
    History,
    Reset,
    Quit,
}

fn main() {
    env_logger::init();

    info!("starting interactive session");

    let session = Session::new(RandomChooser);
    run(session);
}

fn run(mut session: Session<impl RandomSource>) {
    let mut history: Vec<RoundResult> = Vec::new();

    println!("Rock Paper Scissors");

    loop {
        println!();
        println!("Choose your move: rock (r), paper (p), scissors (s)");
        println!("Other commands: history, reset, quit");

        let line = match read_line() {
            Some(line) => line,
            // stdin closed, treat it like quit.
            None => break,
        };

        match parse_command(&line) {
            Command::Quit => break,
            Command::Reset => {
                session.reset();
                history.clear();
                println!("Scores reset.");
            }
            Command::History => print_history(&history),
            Command::Play(text) => match session.play_round_input(&text) {
                Ok(result) => {
                    history.push(result);
                    println!("{}", result.human_friendly());
                    print_scoreboard(&session, &history);
                }
                Err(err) => println!("{}. Try again.", err),
            },
        }
    }

    println!("Goodbye!");
}

/// Maps a line of user input onto a command, expanding the single-letter
/// move shortcuts. Unrecognized text is passed through as a move attempt
/// so the session's validation can report exactly what was rejected.
fn parse_command(input: &str) -> Command {
    let trimmed = input.trim();

    match trimmed.to_lowercase().as_str() {
        "quit" | "exit" | "q" => Command::Quit,
        "reset" => Command::Reset,
        "history" => Command::History,
        "r" => Command::Play("rock".to_owned()),
        "p" => Command::Play("paper".to_owned()),
        "s" => Command::Play("scissors".to_owned()),
        _ => Command::Play(trimmed.to_owned()),
    }
}

fn read_line() -> Option<String> {
    let mut input = String::new();

    let bytes_read = stdin()
        .read_line(&mut input)
        .expect("Couldn't capture user input.");

    if bytes_read == 0 {
        None
    } else {
        Some(input)
    }
}

fn print_scoreboard(session: &Session<impl RandomSource>, history: &[RoundResult]) {
    let (player_score, computer_score) = session.scores();
    let ties = history
        .iter()
        .filter(|round| round.outcome == Outcome::Tie)
        .count();

    println!(
        "You: {}   Computer: {}   Ties: {}",
        player_score, computer_score, ties
    );
}

fn print_history(history: &[RoundResult]) {
    if history.is_empty() {
        println!("No rounds played yet.");
        return;
    }

    for (index, round) in history.iter().enumerate() {
        let winner = match round.outcome {
            Outcome::PlayerWins => "Player",
            Outcome::ComputerWins => "Computer",
            Outcome::Tie => "Tie",
        };

        println!(
            "Round {}: You={}  Computer={}  => {}",
            index + 1,
            round.player_move,
            round.computer_move,
            winner
        );
    }
}
