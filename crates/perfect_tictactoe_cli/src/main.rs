//! Perfect Tic-Tac-Toe - command-line front end
//!
//! Solves boards given on the command line with the exact minimax search.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use perfect_tictactoe::{Board, Move, Outcome, Player, minimax, outcome, play_out, player, value};
use serde::Serialize;
use tracing::{debug, info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    debug!(?cli, "Parsed command line");

    match cli.command {
        Command::BestMove { board, json } => run_best_move(board, json),
        Command::Value { board } => run_value(board),
        Command::SelfPlay { from } => run_self_play(from.unwrap_or_default()),
    }
}

/// JSON answer for `best-move --json`.
#[derive(Debug, Serialize)]
struct BestMoveReport {
    player: Player,
    #[serde(rename = "move")]
    action: Option<Move>,
    outcome: Outcome,
}

/// Print the optimal move for the player to act
#[instrument]
fn run_best_move(board: Board, json: bool) -> Result<()> {
    let action = minimax(&board);
    info!(?action, "Solved board");

    if json {
        let report = BestMoveReport {
            player: player(&board),
            action,
            outcome: outcome(&board),
        };
        let text = serde_json::to_string_pretty(&report).context("Failed to encode report")?;
        println!("{}", text);
        return Ok(());
    }

    match action {
        Some(mv) => println!(
            "{} plays {} (row {}, col {})",
            player(&board),
            mv.label(),
            mv.row(),
            mv.col()
        ),
        None => println!("no move: game is over ({})", outcome(&board)),
    }
    Ok(())
}

/// Print the perfect-play value of a board
#[instrument]
fn run_value(board: Board) -> Result<()> {
    let v = value(&board);
    let meaning = match v {
        1 => "X wins",
        -1 => "O wins",
        _ => "draw",
    };
    println!("{} ({})", v, meaning);
    Ok(())
}

/// Play minimax against itself and print every position
#[instrument]
fn run_self_play(board: Board) -> Result<()> {
    let game = play_out(&board).context("Self-play hit an illegal move")?;

    println!("{}", board);
    for (mv, pair) in game.moves().iter().zip(game.boards().windows(2)) {
        println!();
        println!("{} plays {} {}", player(&pair[0]), mv.label(), mv);
        println!("{}", pair[1]);
    }
    println!();
    println!("Result: {}", game.outcome());
    Ok(())
}
