//! Command-line interface for perfect_games.

use clap::{Args, Parser, Subcommand};

/// Perfect Games - tic-tac-toe against a minimax engine
#[derive(Parser, Debug)]
#[command(name = "perfect_games")]
#[command(about = "Play tic-tac-toe against an engine that never loses", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long, global = true)]
    pub config: Option<std::path::PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal (you are O, the engine is X)
    Play {
        #[command(flatten)]
        first: FirstMove,
    },

    /// Run the HTTP game server
    Serve {
        /// Port to bind to
        #[arg(short, long)]
        port: Option<u16>,

        /// Host to bind to
        #[arg(long)]
        host: Option<String>,

        #[command(flatten)]
        first: FirstMove,
    },

    /// Evaluate a board and print the engine's move for X
    Solve {
        /// Nine cells in row-major order, e.g. "XX. OO. ..."
        board: String,
    },
}

/// Who opens the game, overriding the config file when given
#[derive(Args, Debug, Clone, Copy, Default)]
pub struct FirstMove {
    /// Let the engine make the first move
    #[arg(long, conflicts_with = "human_first")]
    pub ai_first: bool,

    /// Let the human make the first move
    #[arg(long)]
    pub human_first: bool,
}

impl FirstMove {
    /// `None` when neither flag was given, keeping the configured value.
    pub fn ai_moves_first(self) -> Option<bool> {
        match (self.ai_first, self.human_first) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn first_of(args: &[&str]) -> Option<bool> {
        match Cli::try_parse_from(args).unwrap().command {
            Command::Play { first } | Command::Serve { first, .. } => first.ai_moves_first(),
            Command::Solve { .. } => panic!("expected play or serve"),
        }
    }

    #[test]
    fn test_first_move_flags() {
        assert_eq!(first_of(&["perfect_games", "play"]), None);
        assert_eq!(first_of(&["perfect_games", "play", "--ai-first"]), Some(true));
        assert_eq!(first_of(&["perfect_games", "serve", "--human-first"]), Some(false));
    }

    #[test]
    fn test_first_move_flags_conflict() {
        let parsed = Cli::try_parse_from(["perfect_games", "play", "--ai-first", "--human-first"]);
        assert!(parsed.is_err());
    }
}
