//! Shared helpers for integration tests.

#![allow(dead_code)]

use minimax_tictactoe::{Board, legal_moves};
use std::collections::HashSet;

/// Parses board notation, panicking on bad test input.
pub fn board(notation: &str) -> Board {
    notation
        .parse()
        .unwrap_or_else(|err| panic!("bad test board {notation:?}: {err}"))
}

/// Every distinct board reachable from the empty board.
pub fn reachable_boards() -> HashSet<Board> {
    let mut seen = HashSet::new();
    let mut stack = vec![Board::new()];
    while let Some(board) = stack.pop() {
        if !seen.insert(board) || board.is_terminal() {
            continue;
        }
        for mv in legal_moves(&board) {
            stack.push(board.apply(mv).unwrap());
        }
    }
    seen
}
