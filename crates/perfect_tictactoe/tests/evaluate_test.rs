//! Exhaustive checks of the outcome classification over every 3^9 grid.

use perfect_tictactoe::{Board, Outcome, Player, Position, Square, available_moves, evaluate};

const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// Decodes a base-3 number into a board: 0 empty, 1 X, 2 O.
fn board_from_code(mut code: usize) -> Board {
    let mut board = Board::new();
    for pos in Position::ALL {
        match code % 3 {
            1 => assert!(board.apply_move(pos, Player::X)),
            2 => assert!(board.apply_move(pos, Player::O)),
            _ => {}
        }
        code /= 3;
    }
    board
}

fn completed_lines(board: &Board) -> Vec<Player> {
    LINES
        .iter()
        .filter_map(|line| {
            let squares = line.map(|i| board.squares()[i]);
            match squares {
                [Square::Occupied(a), Square::Occupied(b), Square::Occupied(c)]
                    if a == b && b == c =>
                {
                    Some(a)
                }
                _ => None,
            }
        })
        .collect()
}

#[test]
fn test_classification_over_all_grids() {
    for code in 0..3usize.pow(9) {
        let board = board_from_code(code);
        let lines = completed_lines(&board);
        let has_empty = !available_moves(&board).is_empty();
        let outcome = evaluate(&board);

        match lines.as_slice() {
            [] if has_empty => assert_eq!(outcome, Outcome::Ongoing, "\n{board}"),
            [] => assert_eq!(outcome, Outcome::Draw, "\n{board}"),
            [winner] => assert_eq!(outcome, Outcome::Won(*winner), "\n{board}"),
            // Several lines: only reachable through illegal play, but the
            // result is still a win for one of them.
            many => assert!(
                matches!(outcome, Outcome::Won(p) if many.contains(&p)),
                "\n{board}"
            ),
        }
    }
}

#[test]
fn test_apply_move_changes_exactly_one_square() {
    for code in (0..3usize.pow(9)).step_by(7) {
        let board = board_from_code(code);
        for pos in Position::ALL {
            for player in [Player::X, Player::O] {
                let mut after = board.clone();
                let applied = after.apply_move(pos, player);
                assert_eq!(applied, board.is_empty(pos));

                let changed: Vec<_> = Position::ALL
                    .into_iter()
                    .filter(|&p| board.get(p) != after.get(p))
                    .collect();
                if applied {
                    assert_eq!(changed, vec![pos]);
                    assert_eq!(after.get(pos), Square::Occupied(player));
                } else {
                    assert!(changed.is_empty());
                }
            }
        }
    }
}

#[test]
fn test_available_moves_are_exactly_the_empty_squares() {
    for code in (0..3usize.pow(9)).step_by(11) {
        let board = board_from_code(code);
        let moves = available_moves(&board);
        let mut sorted = moves.clone();
        sorted.sort();
        assert_eq!(moves, sorted, "row-major order");
        for pos in Position::ALL {
            assert_eq!(moves.contains(&pos), board.is_empty(pos));
        }
    }
}
