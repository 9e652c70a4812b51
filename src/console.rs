//! Interactive text game on any reader/writer pair.

use crate::turn::{ENGINE, HUMAN, new_game, play_turn};
use derive_more::{Display, Error, From};
use perfect_tictactoe::{Board, MoveError, Outcome, Position, evaluate};
use std::io::{BufRead, Write};
use tracing::{debug, instrument};

/// Why a line of player input was not accepted.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error, From)]
pub enum InputError {
    /// Text that is neither "row col", an index 0-8, nor a square label.
    #[display("could not read {_0:?} as a move")]
    #[from(skip)]
    Malformed(#[error(not(source))] String),

    /// Well-formed input naming an illegal square.
    #[display("{_0}")]
    Move(MoveError),
}

/// Parses a move typed by the player.
///
/// Accepts a row/column pair ("0 2" or "0,2"), a single square index 0-8
/// counted in row-major order, or a square label such as "center".
pub fn parse_move(text: &str) -> Result<Position, InputError> {
    let malformed = || InputError::Malformed(text.trim().to_string());
    let tokens: Vec<&str> = text
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|t| !t.is_empty())
        .collect();

    match tokens.as_slice() {
        [row, col] => {
            let row = row.parse::<usize>().map_err(|_| malformed())?;
            let col = col.parse::<usize>().map_err(|_| malformed())?;
            Ok(Position::from_row_col(row, col)?)
        }
        [single] => match single.parse::<usize>() {
            Ok(index) => Position::from_index(index).ok_or(InputError::Move(MoveError::OutOfRange {
                row: index / 3,
                col: index % 3,
            })),
            Err(_) => Position::from_label(single).ok_or_else(malformed),
        },
        _ => Err(malformed()),
    }
}

/// Plays one game on `input`/`output` and returns how it ended.
///
/// Returns [`Outcome::Ongoing`] if the input runs out mid-game.
#[instrument(skip(input, output))]
pub fn run<R: BufRead, W: Write>(
    input: R,
    mut output: W,
    ai_moves_first: bool,
) -> anyhow::Result<Outcome> {
    writeln!(output, "Welcome to perfect tic-tac-toe!")?;
    writeln!(output, "You are '{}'. The engine is '{}'.", HUMAN, ENGINE)?;

    let mut board = Board::new();
    if let Some(opening) = new_game(&mut board, ai_moves_first)? {
        writeln!(output, "Engine plays {}", opening)?;
    }

    let mut lines = input.lines();
    loop {
        writeln!(output, "\n{}\n", board)?;

        let outcome = evaluate(&board);
        match outcome {
            Outcome::Ongoing => {}
            Outcome::Draw => {
                writeln!(output, "It's a tie!")?;
                return Ok(outcome);
            }
            Outcome::Won(player) => {
                writeln!(output, "Player {} wins!", player)?;
                return Ok(outcome);
            }
        }

        write!(output, "Enter your move (row col): ")?;
        output.flush()?;
        let Some(line) = lines.next() else {
            writeln!(output, "\nGoodbye.")?;
            return Ok(Outcome::Ongoing);
        };
        let line = line?;
        debug!(input = %line.trim(), "Read player input");

        let position = match parse_move(&line) {
            Ok(position) => position,
            Err(InputError::Move(e)) => {
                writeln!(output, "Invalid move: {}. Try again.", e)?;
                continue;
            }
            Err(e) => {
                writeln!(
                    output,
                    "Invalid input: {}. Please enter row and column as two numbers (e.g., 0 1).",
                    e
                )?;
                continue;
            }
        };

        match play_turn(&mut board, position) {
            Ok(report) => {
                if let Some(reply) = report.ai_move() {
                    writeln!(output, "Engine plays {}", reply)?;
                }
            }
            Err(e) if e.is_invalid_move() => {
                writeln!(output, "Invalid move: {}. Try again.", e)?;
            }
            Err(e) => return Err(e.into()),
        }
    }
}
