//! Tests for the interactive console game.

use perfect_games::{Outcome, Player, run_console};
use std::io::Cursor;

fn play(input: &str, ai_first: bool) -> (Outcome, String) {
    let mut output = Vec::new();
    let outcome = run_console(Cursor::new(input.to_string()), &mut output, ai_first).unwrap();
    (outcome, String::from_utf8(output).unwrap())
}

#[test]
fn test_engine_answers_center_with_corner() {
    // An edge reply to the center loses; the first drawing corner is kept.
    let (outcome, output) = play("1 1\n", false);
    assert_eq!(outcome, Outcome::Ongoing);
    assert!(output.contains("Welcome to perfect tic-tac-toe!"));
    assert!(output.contains("Engine plays Top-left (0, 0)"));
    assert!(output.contains("Goodbye."));
}

#[test]
fn test_invalid_input_reprompts() {
    let (outcome, output) = play("hello\n5 5\n", false);
    assert_eq!(outcome, Outcome::Ongoing);
    assert!(output.contains("Invalid input"));
    assert!(output.contains("Invalid move"));
    assert!(output.contains("Goodbye."));
}

#[test]
fn test_occupied_square_reprompts() {
    let (outcome, output) = play("1 1\n1 1\n", false);
    assert_eq!(outcome, Outcome::Ongoing);
    assert!(output.contains("already occupied"));
}

#[test]
fn test_engine_can_open() {
    let (outcome, output) = play("", true);
    assert_eq!(outcome, Outcome::Ongoing);
    assert!(output.contains("Engine plays Top-left (0, 0)"));
    assert!(output.contains("X|2|3"));
}

#[test]
fn test_game_runs_to_completion() {
    // Enough row-major guesses to fill the board; invalid ones are re-prompted.
    let moves: String = (0..9).flat_map(|_| (0..9).map(|i| format!("{i}\n"))).collect();
    let (outcome, output) = play(&moves, false);
    assert_ne!(outcome, Outcome::Ongoing);
    assert_ne!(outcome, Outcome::Won(Player::O));
    assert!(output.contains("wins!") || output.contains("It's a tie!"));
}
