//! Core domain types for tic-tac-toe.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::action::Move;

/// Player mark.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum Mark {
    /// Player X (moves first, maximizes utility).
    #[display("X")]
    X,
    /// Player O (moves second, minimizes utility).
    #[display("O")]
    O,
}

impl Mark {
    /// Returns the opponent's mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// A single cell of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Nobody has played here.
    Empty,
    /// Cell holds a player's mark.
    Marked(Mark),
}

impl Cell {
    /// Returns the mark in this cell, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::Marked(mark) => Some(mark),
        }
    }

    fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Marked(Mark::X) => 'X',
            Cell::Marked(Mark::O) => 'O',
        }
    }
}

/// 3x3 tic-tac-toe board.
///
/// Boards are plain values: there is no way to change a cell in place.
/// Every transition goes through [`Board::apply`], which hands back a new
/// board and leaves the original untouched, so boards held elsewhere (a
/// caller's history, an outer level of search) never observe a change.
///
/// The textual notation is three rows separated by `/`, one character per
/// cell: `X`, `O`, or `.` for empty (`_`, `-` and space are also accepted on
/// input). Serde uses the same notation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Cell; 9],
}

impl Board {
    /// Side length of the board.
    pub const SIZE: usize = 3;

    /// Creates the empty starting board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; 9],
        }
    }

    /// Returns the cell targeted by a move, or `None` if the move is off the board.
    pub fn get(&self, mv: Move) -> Option<Cell> {
        mv.index().map(|idx| self.cells[idx])
    }

    /// Returns the cell at `(row, col)`, or `None` if out of range.
    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        self.get(Move::new(row, col))
    }

    /// Checks whether the targeted cell exists and is empty.
    pub fn is_empty_at(&self, mv: Move) -> bool {
        matches!(self.get(mv), Some(Cell::Empty))
    }

    /// Returns all cells in row-major order.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Returns the board as three rows.
    pub fn rows(&self) -> [[Cell; 3]; 3] {
        let c = &self.cells;
        [[c[0], c[1], c[2]], [c[3], c[4], c[5]], [c[6], c[7], c[8]]]
    }

    /// Counts cells holding `mark`.
    pub fn count(&self, mark: Mark) -> usize {
        self.cells
            .iter()
            .filter(|cell| **cell == Cell::Marked(mark))
            .count()
    }

    /// Counts empty cells.
    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|cell| **cell == Cell::Empty).count()
    }

    /// Returns a copy with `mark` written at `idx`. Callers validate the move.
    pub(crate) fn with_mark(mut self, idx: usize, mark: Mark) -> Self {
        self.cells[idx] = Cell::Marked(mark);
        self
    }

    /// Renders the board in compact notation (`XOX/XOO/...`).
    pub fn notation(&self) -> String {
        let mut out = String::with_capacity(11);
        for (row, cells) in self.rows().iter().enumerate() {
            if row > 0 {
                out.push('/');
            }
            out.extend(cells.iter().map(|cell| cell.symbol()));
        }
        out
    }

    fn from_cells(cells: [Cell; 9]) -> Result<Self, BoardParseError> {
        let board = Self { cells };
        let x = board.count(Mark::X);
        let o = board.count(Mark::O);
        if x < o || x - o > 1 {
            return Err(BoardParseError::Unreachable { x, o });
        }
        Ok(board)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Grid rendering; empty cells show their keypad number (1-9).
impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                match self.cells[pos] {
                    Cell::Empty => write!(f, "{}", pos + 1)?,
                    Cell::Marked(mark) => write!(f, "{mark}")?,
                }
                if col < 2 {
                    f.write_str("|")?;
                }
            }
            if row < 2 {
                f.write_str("\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}

/// Error parsing board notation.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum BoardParseError {
    /// Notation does not have three rows of three cells.
    #[display("Expected 3 rows of 3 cells separated by '/', got {:?}", _0)]
    Shape(String),

    /// A character that is not a mark or an empty marker.
    #[display("Unknown cell character {:?}", _0)]
    UnknownCell(char),

    /// Mark counts that cannot arise from X moving first and players alternating.
    #[display("Unreachable position: {} X marks and {} O marks", x, o)]
    Unreachable {
        /// Number of X marks.
        x: usize,
        /// Number of O marks.
        o: usize,
    },
}

impl std::error::Error for BoardParseError {}

impl FromStr for Board {
    type Err = BoardParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Spaces are empty cells, so only line endings are stripped.
        let rows: Vec<&str> = s.trim_matches(['\n', '\r']).split('/').collect();
        if rows.len() != 3 || rows.iter().any(|row| row.chars().count() != 3) {
            return Err(BoardParseError::Shape(s.to_string()));
        }

        let mut cells = [Cell::Empty; 9];
        for (idx, ch) in rows.iter().flat_map(|row| row.chars()).enumerate() {
            cells[idx] = match ch {
                'X' | 'x' => Cell::Marked(Mark::X),
                'O' | 'o' => Cell::Marked(Mark::O),
                '.' | '_' | '-' | ' ' => Cell::Empty,
                other => return Err(BoardParseError::UnknownCell(other)),
            };
        }

        Self::from_cells(cells)
    }
}

impl TryFrom<String> for Board {
    type Error = BoardParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Board> for String {
    fn from(board: Board) -> Self {
        board.notation()
    }
}
