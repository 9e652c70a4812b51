//! Perfect Games - Unified CLI
//!
//! Console game, HTTP server and one-shot solver.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use perfect_games::GameConfig;
use perfect_tictactoe::{Board, Outcome, Player, analyze, evaluate};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => GameConfig::from_file(path)?,
        None => GameConfig::default(),
    };

    match cli.command {
        Command::Play { first } => {
            init_tracing("warn");
            run_play(config.with_overrides(None, None, first.ai_moves_first()))
        }
        Command::Serve { port, host, first } => {
            init_tracing("info");
            run_server(config.with_overrides(host, port, first.ai_moves_first())).await
        }
        Command::Solve { board } => {
            init_tracing("warn");
            run_solve(&board)
        }
    }
}

/// Logs go to stderr so they never interleave with the game on stdout.
fn init_tracing(default_filter: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Run the interactive console game
fn run_play(config: GameConfig) -> Result<()> {
    debug!(?config, "Starting console game");
    let stdin = std::io::stdin();
    let outcome =
        perfect_games::run_console(stdin.lock(), std::io::stdout(), *config.ai_moves_first())?;
    debug!(%outcome, "Console game finished");
    Ok(())
}

/// Run the HTTP game server
async fn run_server(config: GameConfig) -> Result<()> {
    info!("Starting Perfect Games HTTP server");
    perfect_games::serve(&config).await
}

/// Print the outcome of a board and, if play continues, the engine's move
fn run_solve(notation: &str) -> Result<()> {
    let mut board: Board = notation
        .parse()
        .with_context(|| format!("Invalid board {:?}", notation))?;

    println!("{}\n", board);
    let outcome = evaluate(&board);
    println!("Outcome: {}", outcome);
    if outcome != Outcome::Ongoing {
        return Ok(());
    }

    let (x, o) = (board.count(Player::X), board.count(Player::O));
    if x > o {
        println!("Note: X has {} marks to O's {}, so O would normally move next", x, o);
    }

    let report = analyze(&mut board);
    match (report.best_move, report.score) {
        (Some(best), Some(score)) => println!("Best move for X: {} (score {:+})", best, score),
        _ => println!("No move available"),
    }
    println!("Searched {} positions, {} cutoffs", report.nodes, report.cutoffs);
    Ok(())
}
