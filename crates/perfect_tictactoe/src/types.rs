//! Core domain types for tic-tac-toe.

use crate::error::BoardParseError;
use crate::position::Position;
use serde::{Deserialize, Serialize};
use std::ops::{Deref, DerefMut};
use std::str::FromStr;

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// Player X, the engine's mark.
    X,
    /// Player O, the opponent's mark.
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Single-character symbol.
    pub fn symbol(self) -> char {
        match self {
            Player::X => 'X',
            Player::O => 'O',
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

/// 3x3 tic-tac-toe board.
///
/// Marks are only ever written through [`Board::apply_move`], which refuses
/// occupied squares. The search engine undoes its trial moves through the
/// [`Placement`] guard returned by [`Board::place`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Number of squares holding `player`'s mark.
    pub fn count(&self, player: Player) -> usize {
        self.squares
            .iter()
            .filter(|&&s| s == Square::Occupied(player))
            .count()
    }

    /// Places `player`'s mark at `pos` if the square is empty.
    ///
    /// Returns `false` and leaves the board untouched when the square is
    /// already occupied.
    pub fn apply_move(&mut self, pos: Position, player: Player) -> bool {
        let square = &mut self.squares[pos.to_index()];
        if *square != Square::Empty {
            return false;
        }
        *square = Square::Occupied(player);
        true
    }

    /// Places a mark for the lifetime of the returned guard.
    ///
    /// The square reverts to empty when the guard is dropped, whichever way
    /// the holder's scope is left. Returns `None` if the square is occupied.
    pub fn place(&mut self, pos: Position, player: Player) -> Option<Placement<'_>> {
        if self.apply_move(pos, player) {
            Some(Placement {
                board: self,
                position: pos,
            })
        } else {
            None
        }
    }

    fn clear(&mut self, pos: Position) {
        self.squares[pos.to_index()] = Square::Empty;
    }

    /// Rows of cell symbols, `' '` for empty squares.
    pub fn rows(&self) -> [[char; 3]; 3] {
        let mut rows = [[' '; 3]; 3];
        for pos in Position::ALL {
            if let Square::Occupied(player) = self.get(pos) {
                rows[pos.row()][pos.col()] = player.symbol();
            }
        }
        rows
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders the board as three rows separated by `-+-+-`, showing empty
/// squares by their 1-based index.
impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                match self.squares[pos] {
                    Square::Empty => write!(f, "{}", pos + 1)?,
                    Square::Occupied(player) => write!(f, "{}", player)?,
                }
                if col < 2 {
                    write!(f, "|")?;
                }
            }
            if row < 2 {
                write!(f, "\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}

/// Parses nine cells in row-major order.
///
/// `X`/`O` (any case) are marks; `.`, `_` and the digits `1`-`9` are empty
/// squares. Whitespace and the separators `|`, `/`, `-`, `+` are ignored, so
/// the [`Display`](std::fmt::Display) output parses back.
impl FromStr for Board {
    type Err = BoardParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = Vec::with_capacity(9);
        for c in s.chars() {
            match c {
                'X' | 'x' => cells.push(Some(Player::X)),
                'O' | 'o' => cells.push(Some(Player::O)),
                '.' | '_' | '1'..='9' => cells.push(None),
                '|' | '/' | '-' | '+' => {}
                c if c.is_whitespace() => {}
                other => return Err(BoardParseError::UnknownSymbol(other)),
            }
        }
        if cells.len() != 9 {
            return Err(BoardParseError::WrongCellCount(cells.len()));
        }

        let mut board = Board::new();
        for (pos, cell) in Position::ALL.into_iter().zip(cells) {
            if let Some(player) = cell {
                board.apply_move(pos, player);
            }
        }
        Ok(board)
    }
}

/// A trial mark placed on a borrowed board.
///
/// Dereferences to the board so the holder can keep searching below it.
/// Dropping the guard restores the square to empty.
#[derive(Debug)]
pub struct Placement<'a> {
    board: &'a mut Board,
    position: Position,
}

impl Deref for Placement<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl DerefMut for Placement<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for Placement<'_> {
    fn drop(&mut self) {
        self.board.clear(self.position);
    }
}

/// Classification of a board. Exactly one applies at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Empty squares remain and no line is complete.
    Ongoing,
    /// Board is full with no complete line.
    Draw,
    /// A player completed a line.
    Won(Player),
}

impl Outcome {
    /// True for `Draw` and `Won`.
    pub fn is_terminal(self) -> bool {
        self != Outcome::Ongoing
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Ongoing => write!(f, "in progress"),
            Outcome::Draw => write!(f, "draw"),
            Outcome::Won(player) => write!(f, "{} wins", player),
        }
    }
}
