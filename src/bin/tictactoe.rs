use std::io::{self, BufRead, Write};

use anyhow::{Context, Result, bail};
use clap::Parser;

use tictactoe_engine::{
    Game, GameConfig, GameError, GameResult, IgnoredMove, MoveOutcome, ResetPolicy,
    tictactoe::board::lut::CELL_COUNT,
};

/// Command line arguments
#[derive(Debug, Parser)]
#[command(name = "tictactoe", version, about = "Two-player tic-tac-toe in the terminal")]
struct Args {
    /// Name of the first player (crosses)
    #[arg(long, default_value = "Player 1")]
    player_one: String,

    /// Name of the second player (noughts)
    #[arg(long, default_value = "Player 2")]
    player_two: String,

    /// Start a new round as soon as one is won or tied
    #[arg(long)]
    auto_reset: bool,

    /// Replay comma separated cell indices (0-8) instead of reading from stdin
    #[arg(long, value_delimiter = ',')]
    moves: Option<Vec<usize>>,

    /// Print the final state as JSON
    #[arg(long)]
    json: bool,
}

impl Args {
    fn config(&self) -> GameConfig {
        GameConfig::default()
            .with_player_names(&self.player_one, &self.player_two)
            .with_reset_policy(if self.auto_reset {
                ResetPolicy::Auto
            } else {
                ResetPolicy::Manual
            })
    }
}

/// Interactive command typed by the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    /// Cell index (0-8)
    Play(usize),
    NewGame,
    Quit,
}

/// Parse a line of user input.
/// Cells are numbered 1-9 on screen.
fn parse_command(line: &str) -> Result<Command> {
    match line.trim() {
        "q" | "quit" => Ok(Command::Quit),
        "n" | "new" => Ok(Command::NewGame),
        input => {
            let number: usize = input
                .parse()
                .with_context(|| format!("Unknown command `{input}`"))?;
            if !(1..=CELL_COUNT).contains(&number) {
                bail!("Cells are numbered from 1 to {CELL_COUNT}");
            }
            Ok(Command::Play(number - 1))
        }
    }
}

/// Describe the result of a move for the player
fn report(game: &Game, outcome: Result<MoveOutcome, GameError>) -> Option<String> {
    match outcome {
        Err(e) => Some(e.to_string()),
        Ok(MoveOutcome::Ignored(IgnoredMove::Occupied { index })) => {
            Some(format!("Cell {} is already taken", index.get() + 1))
        }
        Ok(MoveOutcome::Ignored(IgnoredMove::GameOver)) => {
            Some("Game is over, type `n` to start a new one".to_string())
        }
        // Round ended and the board was cleared right away
        Ok(MoveOutcome::Applied { status, .. })
            if status.is_finished() && !game.is_game_over() =>
        {
            Some(match game.last_result() {
                Some(GameResult::Victory { winner }) => {
                    format!("{} wins! New round.", game.player(winner))
                }
                _ => "It's a draw! New round.".to_string(),
            })
        }
        Ok(MoveOutcome::Applied { .. }) => None,
    }
}

fn print_state(game: &Game, json: bool) -> Result<()> {
    if json {
        let snapshot = serde_json::to_string_pretty(game).context("Failed to serialize game")?;
        println!("{snapshot}");
    } else {
        println!("{game}");
    }
    Ok(())
}

fn replay(game: &mut Game, moves: &[usize], json: bool) -> Result<()> {
    for &index in moves {
        let outcome = game.apply_move(index);
        log::debug!("[CLI] Move {index}: {outcome:?}");
        match report(game, outcome) {
            // Keep stdout parseable
            Some(message) if json => log::info!("[CLI] {message}"),
            Some(message) => println!("{message}"),
            None => {}
        }
    }
    print_state(game, json)
}

fn interactive(game: &mut Game, json: bool) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    println!("{game}");
    print!("> ");
    stdout.flush()?;

    for line in stdin.lock().lines() {
        let line = line.context("Failed to read from stdin")?;
        match parse_command(&line) {
            Ok(Command::Quit) => break,
            Ok(Command::NewGame) => game.reset_game(),
            Ok(Command::Play(index)) => {
                let outcome = game.apply_move(index);
                if let Some(message) = report(game, outcome) {
                    println!("{message}");
                }
            }
            Err(e) => println!("{e:#}"),
        }
        println!("\n{game}");
        print!("> ");
        stdout.flush()?;
    }
    println!();

    if json {
        print_state(game, json)?;
    }
    Ok(())
}

fn main() -> Result<()> {
    // Initialize logger
    env_logger::init();

    // Parse command line arguments
    let args = Args::parse();
    log::debug!("[CLI] Command line arguments: {args:?}");

    let mut game = Game::new(args.config());

    match &args.moves {
        Some(moves) => replay(&mut game, moves, args.json),
        None => interactive(&mut game, args.json),
    }
}
