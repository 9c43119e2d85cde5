//! Tic-tac-toe rules engine with exhaustive minimax search.
//!
//! # Architecture
//!
//! - **Rules**: pure functions over immutable [`Board`] values: turn
//!   order, legal moves, move application, win and draw detection.
//! - **Search**: plain minimax over the full game tree, returning the
//!   optimal move for the side to move.
//! - **Game**: a board plus its history, for callers playing a whole game.
//!
//! # Example
//!
//! ```
//! use minimax_tictactoe::{Board, Move, best_move};
//!
//! let board: Board = "XOX/XOO/...".parse()?;
//! assert_eq!(best_move(&board), Some(Move::new(2, 0)));
//! # Ok::<(), minimax_tictactoe::BoardParseError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod action;
mod game;
mod outcome;
mod position;
mod rules;
mod search;
mod types;

// Crate-level exports - Domain types
pub use action::{InvalidMoveError, Move, MoveParseError};
pub use outcome::Outcome;
pub use position::Position;
pub use types::{Board, BoardParseError, Cell, Mark};

// Crate-level exports - Rules engine
pub use rules::{
    LINES, apply, initial_state, is_full, is_terminal, legal_moves, outcome, player_to_move,
    utility, winner,
};

// Crate-level exports - Search
pub use search::{
    Analysis, ScoredMove, SearchStats, analyze, best_move, best_move_with_stats, max_value,
    min_value,
};

// Crate-level exports - Game session
pub use game::{Game, GameError};
