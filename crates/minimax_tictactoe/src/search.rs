//! Exhaustive minimax search.
//!
//! X maximizes [`utility`], O minimizes it. Every line of play is followed
//! to a finished board; there is no pruning and no position cache. The tree
//! is at most nine plies deep, and each level removes one empty cell, so the
//! recursion always bottoms out.
//!
//! Ties are broken by move order: candidates are tried in ascending
//! row-major order and one only replaces the current best when it is
//! strictly better, so the first optimal move in row-major order is chosen.

use super::rules::{apply, is_terminal, legal_moves, player_to_move, utility};
use super::{Board, Mark, Move, Outcome};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Counters collected during one search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Boards visited, including the root.
    pub nodes: u64,
}

/// A candidate move with its minimax value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredMove {
    /// The move.
    #[serde(rename = "move")]
    pub mv: Move,
    /// Value of the board after the move, under optimal play.
    pub value: i32,
}

/// Full evaluation of a position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Analysis {
    /// Side to move.
    pub to_move: Mark,
    /// Minimax value of the position from X's point of view.
    pub value: i32,
    /// Every move that achieves `value`, in row-major order.
    pub optimal_moves: Vec<Move>,
    /// Every legal move with its value, in row-major order.
    pub scored_moves: Vec<ScoredMove>,
    /// Search counters.
    pub stats: SearchStats,
}

impl Analysis {
    /// The move [`best_move`] picks: the first optimal move.
    ///
    /// `None` only for an analysis built by hand with no optimal moves.
    pub fn best_move(&self) -> Option<Move> {
        self.optimal_moves.first().copied()
    }

    /// How the game ends if both sides play perfectly from here.
    pub fn forecast(&self) -> Outcome {
        match self.value.signum() {
            1 => Outcome::XWins,
            -1 => Outcome::OWins,
            _ => Outcome::Draw,
        }
    }
}

/// Returns the optimal move for the side to move, or `None` if the game is over.
#[instrument(skip(board), fields(board = %board.notation()))]
pub fn best_move(board: &Board) -> Option<Move> {
    best_move_with_stats(board).0
}

/// Like [`best_move`], also reporting how much of the tree was visited.
pub fn best_move_with_stats(board: &Board) -> (Option<Move>, SearchStats) {
    let mut search = Minimax::default();
    let chosen = search.choose(board);
    if let Some((mv, value)) = chosen {
        debug!(%mv, value, nodes = search.nodes, "Selected move");
    }
    (chosen.map(|(mv, _)| mv), search.stats())
}

/// Value of `board` when X is to move: the best X can force.
pub fn max_value(board: &Board) -> i32 {
    Minimax::default().max_value(board)
}

/// Value of `board` when O is to move: the best O can force.
pub fn min_value(board: &Board) -> i32 {
    Minimax::default().min_value(board)
}

/// Scores every legal move and reports all of the optimal ones.
///
/// Returns `None` on a finished board. The first entry of
/// [`Analysis::optimal_moves`] is always the move [`best_move`] returns.
#[instrument(skip(board), fields(board = %board.notation()))]
pub fn analyze(board: &Board) -> Option<Analysis> {
    if is_terminal(board) {
        return None;
    }

    let to_move = player_to_move(board);
    let mut search = Minimax { nodes: 1 };
    let scored_moves: Vec<ScoredMove> = legal_moves(board)
        .into_iter()
        .map(|mv| ScoredMove {
            mv,
            value: search.reply_value(to_move, &child(board, mv)),
        })
        .collect();

    let values = scored_moves.iter().map(|scored| scored.value);
    let value = match to_move {
        Mark::X => values.max(),
        Mark::O => values.min(),
    }?;
    let optimal_moves = scored_moves
        .iter()
        .filter(|scored| scored.value == value)
        .map(|scored| scored.mv)
        .collect();

    debug!(value, nodes = search.nodes, "Analyzed position");
    Some(Analysis {
        to_move,
        value,
        optimal_moves,
        scored_moves,
        stats: search.stats(),
    })
}

/// Board after a move drawn from `legal_moves`.
fn child(board: &Board, mv: Move) -> Board {
    match apply(board, mv) {
        Ok(next) => next,
        Err(err) => panic!("legal move {mv} rejected on {}: {err}", board.notation()),
    }
}

#[derive(Debug, Default)]
struct Minimax {
    nodes: u64,
}

impl Minimax {
    fn stats(&self) -> SearchStats {
        SearchStats { nodes: self.nodes }
    }

    /// Picks the best move and its value, or `None` on a finished board.
    fn choose(&mut self, board: &Board) -> Option<(Move, i32)> {
        self.nodes += 1;
        if is_terminal(board) {
            return None;
        }

        let mover = player_to_move(board);
        let mut best: Option<(Move, i32)> = None;
        for mv in legal_moves(board) {
            let value = self.reply_value(mover, &child(board, mv));
            let improves = match best {
                None => true,
                Some((_, best_value)) => match mover {
                    Mark::X => value > best_value,
                    Mark::O => value < best_value,
                },
            };
            if improves {
                best = Some((mv, value));
            }
        }
        best
    }

    /// Value of the board `mover` just produced, with the opponent to move.
    fn reply_value(&mut self, mover: Mark, next: &Board) -> i32 {
        match mover {
            Mark::X => self.min_value(next),
            Mark::O => self.max_value(next),
        }
    }

    fn max_value(&mut self, board: &Board) -> i32 {
        self.nodes += 1;
        if is_terminal(board) {
            return utility(board);
        }
        let mut value = i32::MIN;
        for mv in legal_moves(board) {
            value = value.max(self.min_value(&child(board, mv)));
        }
        value
    }

    fn min_value(&mut self, board: &Board) -> i32 {
        self.nodes += 1;
        if is_terminal(board) {
            return utility(board);
        }
        let mut value = i32::MAX;
        for mv in legal_moves(board) {
            value = value.min(self.max_value(&child(board, mv)));
        }
        value
    }
}
