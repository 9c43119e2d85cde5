//! Game session: a board plus the moves that produced it.

use super::{Board, InvalidMoveError, Mark, Move, Outcome, best_move};
use serde::Serialize;
use tracing::{info, instrument};

/// Errors from playing a move in a [`Game`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::From)]
pub enum GameError {
    /// The game has already finished.
    #[display("Game is already over ({})", _0)]
    #[from(skip)]
    GameOver(Outcome),

    /// The rules engine rejected the move.
    #[display("{}", _0)]
    InvalidMove(InvalidMoveError),
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::InvalidMove(err) => Some(err),
            GameError::GameOver(_) => None,
        }
    }
}

/// A game in progress or finished.
///
/// Holds every board from the start, so callers can show the move list or
/// step back through a finished game. The current board is always the
/// last one; turn and outcome are read off it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Game {
    boards: Vec<Board>,
    history: Vec<Move>,
}

impl Game {
    /// Creates a game at the empty starting board.
    pub fn new() -> Self {
        Self {
            boards: vec![Board::new()],
            history: Vec::new(),
        }
    }

    /// Replays moves from the starting board.
    ///
    /// # Errors
    ///
    /// Fails on the first move that cannot be played.
    #[instrument(skip(moves), fields(moves = moves.len()))]
    pub fn replay(moves: &[Move]) -> Result<Self, GameError> {
        let mut game = Self::new();
        for mv in moves {
            game.play(*mv)?;
        }
        Ok(game)
    }

    /// Returns the current board.
    pub fn board(&self) -> &Board {
        self.boards.last().expect("game always holds the starting board")
    }

    /// Returns every board from the start, current board last.
    pub fn boards(&self) -> &[Board] {
        &self.boards
    }

    /// Returns the moves played so far.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns the side to move.
    pub fn to_move(&self) -> Mark {
        self.board().player_to_move()
    }

    /// Returns the current outcome.
    pub fn outcome(&self) -> Outcome {
        self.board().outcome()
    }

    /// Plays a move for the side to move.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::GameOver`] once the game has ended, or
    /// [`GameError::InvalidMove`] if the rules engine rejects the move.
    #[instrument(skip(self), fields(player = %self.to_move()))]
    pub fn play(&mut self, mv: Move) -> Result<Outcome, GameError> {
        let outcome = self.outcome();
        if outcome.is_finished() {
            return Err(GameError::GameOver(outcome));
        }

        let next = self.board().apply(mv)?;
        self.boards.push(next);
        self.history.push(mv);

        let outcome = self.outcome();
        if outcome.is_finished() {
            info!(%outcome, moves = self.history.len(), "Game finished");
        }
        Ok(outcome)
    }

    /// Lets the engine play the side to move.
    ///
    /// Returns the move played, or `None` if the game was already over.
    #[instrument(skip(self))]
    pub fn play_engine_move(&mut self) -> Option<Move> {
        let mv = best_move(self.board())?;
        match self.play(mv) {
            Ok(_) => Some(mv),
            Err(err) => unreachable!("engine chose an unplayable move {mv}: {err}"),
        }
    }

    /// Takes back the last move, returning it.
    pub fn undo(&mut self) -> Option<Move> {
        let mv = self.history.pop()?;
        self.boards.pop();
        Some(mv)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
