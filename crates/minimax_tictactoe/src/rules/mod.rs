//! Game rules for tic-tac-toe.
//!
//! Pure functions over [`Board`] values. Nothing here stores whose turn it
//! is or how the game ended: both are recomputed from the cells every time,
//! so they can never drift out of step with the board.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{LINES, winner};

use super::{Board, InvalidMoveError, Mark, Move, Outcome};
use std::collections::BTreeSet;
use tracing::debug;

/// Returns the empty starting board.
pub fn initial_state() -> Board {
    Board::new()
}

/// Returns the mark of the player whose turn it is.
///
/// X moves whenever it has placed no more marks than O. The answer is
/// also defined on finished boards, where it is meaningless.
pub fn player_to_move(board: &Board) -> Mark {
    if board.count(Mark::X) <= board.count(Mark::O) {
        Mark::X
    } else {
        Mark::O
    }
}

/// Returns every move targeting an empty cell.
///
/// The set iterates in ascending row-major order.
pub fn legal_moves(board: &Board) -> BTreeSet<Move> {
    (0..9)
        .filter_map(Move::from_index)
        .filter(|mv| board.is_empty_at(*mv))
        .collect()
}

/// Returns the board produced by the side to move marking `mv`.
///
/// # Errors
///
/// Returns [`InvalidMoveError::OutOfRange`] if the coordinates are off the
/// board and [`InvalidMoveError::Occupied`] if the cell already has a mark.
pub fn apply(board: &Board, mv: Move) -> Result<Board, InvalidMoveError> {
    let Some(idx) = mv.index() else {
        debug!(%mv, "Rejected off-board move");
        return Err(InvalidMoveError::OutOfRange(mv));
    };
    if !board.is_empty_at(mv) {
        debug!(%mv, "Rejected move onto occupied square");
        return Err(InvalidMoveError::Occupied(mv));
    }
    Ok(board.with_mark(idx, player_to_move(board)))
}

/// Checks if the game is over: someone won or no empty cell remains.
pub fn is_terminal(board: &Board) -> bool {
    winner(board).is_some() || is_full(board)
}

/// Returns the value of a finished board from X's point of view.
///
/// `1` if X won, `-1` if O won, `0` otherwise. Only meaningful on
/// terminal boards; an unfinished board scores `0`.
pub fn utility(board: &Board) -> i32 {
    match winner(board) {
        Some(Mark::X) => 1,
        Some(Mark::O) => -1,
        None => 0,
    }
}

/// Classifies the board.
pub fn outcome(board: &Board) -> Outcome {
    match winner(board) {
        Some(Mark::X) => Outcome::XWins,
        Some(Mark::O) => Outcome::OWins,
        None if is_full(board) => Outcome::Draw,
        None => Outcome::InProgress,
    }
}

impl Board {
    /// See [`player_to_move`].
    pub fn player_to_move(&self) -> Mark {
        player_to_move(self)
    }

    /// See [`legal_moves`].
    pub fn legal_moves(&self) -> BTreeSet<Move> {
        legal_moves(self)
    }

    /// See [`apply`].
    pub fn apply(&self, mv: Move) -> Result<Board, InvalidMoveError> {
        apply(self, mv)
    }

    /// See [`winner`].
    pub fn winner(&self) -> Option<Mark> {
        winner(self)
    }

    /// See [`is_full`].
    pub fn is_full(&self) -> bool {
        is_full(self)
    }

    /// See [`is_terminal`].
    pub fn is_terminal(&self) -> bool {
        is_terminal(self)
    }

    /// See [`utility`].
    pub fn utility(&self) -> i32 {
        utility(self)
    }

    /// See [`outcome`].
    pub fn outcome(&self) -> Outcome {
        outcome(self)
    }
}
