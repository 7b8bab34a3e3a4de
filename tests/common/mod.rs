#![allow(dead_code)]

use std::io::Write;
use std::process::{Command, Output, Stdio};

use anyhow::{Context, Result, anyhow};
use tictactoe_engine::{Game, GameError, MoveOutcome};

/// Play every move in order, returning the outcome of the last one
pub fn play_moves(game: &mut Game, moves: &[usize]) -> Result<MoveOutcome, GameError> {
    let mut last = MoveOutcome::Ignored(tictactoe_engine::IgnoredMove::GameOver);
    for &index in moves {
        last = game.apply_move(index)?;
    }
    Ok(last)
}

/// Run the `tictactoe` binary with the given arguments and stdin contents
pub fn run_cli(args: &[&str], stdin: &str) -> Result<Output> {
    let path = env!("CARGO_BIN_EXE_tictactoe");
    let mut process = Command::new(path)
        .args(args)
        .env("RUST_LOG", "off")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .context("Failed to spawn tictactoe")?;

    process
        .stdin
        .take()
        .ok_or_else(|| anyhow!("No stdin handle"))?
        .write_all(stdin.as_bytes())
        .context("Failed to write to stdin")?;

    process.wait_with_output().context("Failed to wait for tictactoe")
}
