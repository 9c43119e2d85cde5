//! Moves and move errors.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A move: the `(row, col)` coordinates of the cell to mark.
///
/// Any pair can be constructed, since moves usually come from user input.
/// Whether it is legal depends on the board it is applied to; see
/// [`crate::apply`].
///
/// Moves order row-major, which is also the order in which
/// [`crate::legal_moves`] yields them and therefore the search tie-break.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct Move {
    /// Row index, 0 at the top.
    pub row: usize,
    /// Column index, 0 at the left.
    pub col: usize,
}

impl Move {
    /// Creates a move at `(row, col)`.
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Returns the row-major cell index (0-8), or `None` if off the board.
    pub fn index(&self) -> Option<usize> {
        (self.row < 3 && self.col < 3).then(|| self.row * 3 + self.col)
    }

    /// Creates a move from a row-major cell index (0-8).
    pub fn from_index(index: usize) -> Option<Self> {
        (index < 9).then(|| Self::new(index / 3, index % 3))
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Parses `"row,col"`, `"row col"` or `"(row, col)"`.
impl FromStr for Move {
    type Err = MoveParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let inner = s.trim().trim_start_matches('(').trim_end_matches(')');
        let parts: Vec<&str> = inner
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|part| !part.is_empty())
            .collect();

        let [row, col] = parts.as_slice() else {
            return Err(MoveParseError(s.to_string()));
        };
        let row = row.parse().map_err(|_| MoveParseError(s.to_string()))?;
        let col = col.parse().map_err(|_| MoveParseError(s.to_string()))?;
        Ok(Self::new(row, col))
    }
}

/// Error returned when a move cannot be applied to a board.
///
/// This is the only error the rules engine raises. It is reported to the
/// caller unchanged so that the caller can ask for another move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum InvalidMoveError {
    /// Coordinates fall outside the 3x3 grid.
    #[display("Move {} is off the board (row and column must be 0-2)", _0)]
    OutOfRange(Move),

    /// The targeted cell already holds a mark.
    #[display("Square {} is already occupied", _0)]
    Occupied(Move),
}

impl InvalidMoveError {
    /// Returns the rejected move.
    pub fn rejected(&self) -> Move {
        match self {
            InvalidMoveError::OutOfRange(mv) | InvalidMoveError::Occupied(mv) => *mv,
        }
    }
}

impl std::error::Error for InvalidMoveError {}

/// Error parsing move text.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("Cannot read {:?} as a move; expected \"row,col\"", _0)]
pub struct MoveParseError(pub String);

impl std::error::Error for MoveParseError {}
