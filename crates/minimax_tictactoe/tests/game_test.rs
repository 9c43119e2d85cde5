//! Tests for the game session wrapper.

use minimax_tictactoe::{Game, GameError, InvalidMoveError, Mark, Move, Outcome, Position};

#[test]
fn test_new_game() {
    let game = Game::new();
    assert_eq!(game.to_move(), Mark::X);
    assert_eq!(game.outcome(), Outcome::InProgress);
    assert!(game.history().is_empty());
    assert_eq!(game.boards().len(), 1);
}

#[test]
fn test_replay_from_history() {
    let moves = [
        Position::Center.to_move(),
        Position::TopLeft.to_move(),
        Position::BottomRight.to_move(),
        Position::TopRight.to_move(),
        Position::BottomLeft.to_move(),
    ];

    let game = Game::replay(&moves).expect("Valid replay");
    assert_eq!(game.history().len(), 5);
    assert_eq!(game.to_move(), Mark::O);
    assert_eq!(game.outcome(), Outcome::InProgress);
}

#[test]
fn test_win_detection() {
    let moves = [
        Move::new(0, 0),
        Move::new(1, 1),
        Move::new(0, 1),
        Move::new(2, 0),
        Move::new(0, 2), // X wins top row
    ];

    let game = Game::replay(&moves).expect("Valid replay");
    assert_eq!(game.outcome(), Outcome::XWins);
}

#[test]
fn test_draw_detection() {
    let moves = [
        Move::new(0, 0),
        Move::new(1, 1),
        Move::new(0, 2),
        Move::new(0, 1),
        Move::new(1, 0),
        Move::new(1, 2),
        Move::new(2, 1),
        Move::new(2, 0),
        Move::new(2, 2), // Draw
    ];

    let game = Game::replay(&moves).expect("Valid replay");
    assert_eq!(game.outcome(), Outcome::Draw);
}

#[test]
fn test_occupied_square_rejected() {
    let mut game = Game::new();
    game.play(Move::new(1, 1)).unwrap();

    let result = game.play(Move::new(1, 1));
    assert_eq!(
        result,
        Err(GameError::InvalidMove(InvalidMoveError::Occupied(Move::new(1, 1))))
    );
    // Rejected move leaves the game unchanged.
    assert_eq!(game.history(), &[Move::new(1, 1)]);
    assert_eq!(game.to_move(), Mark::O);
}

#[test]
fn test_moves_after_game_over_rejected() {
    let mut game = Game::replay(&[
        Move::new(0, 0),
        Move::new(1, 0),
        Move::new(0, 1),
        Move::new(1, 1),
        Move::new(0, 2),
    ])
    .unwrap();

    let result = game.play(Move::new(2, 2));
    assert_eq!(result, Err(GameError::GameOver(Outcome::XWins)));
    assert!(result.unwrap_err().to_string().contains("over"));
    assert_eq!(game.play_engine_move(), None);
}

#[test]
fn test_undo_restores_previous_board() {
    let mut game = Game::new();
    game.play(Move::new(0, 0)).unwrap();
    let before = *game.board();
    game.play(Move::new(1, 1)).unwrap();

    assert_eq!(game.undo(), Some(Move::new(1, 1)));
    assert_eq!(game.board(), &before);
    assert_eq!(game.to_move(), Mark::O);

    assert_eq!(game.undo(), Some(Move::new(0, 0)));
    assert_eq!(game.undo(), None);
    assert_eq!(game.boards().len(), 1);
}

#[test]
fn test_engine_finishes_a_winning_position() {
    // X to move with the left column open.
    let mut game = Game::replay(&[
        Move::new(0, 0),
        Move::new(0, 1),
        Move::new(0, 2),
        Move::new(1, 1),
        Move::new(1, 0),
        Move::new(1, 2),
    ])
    .unwrap();

    assert_eq!(game.play_engine_move(), Some(Move::new(2, 0)));
    assert_eq!(game.outcome(), Outcome::XWins);
}

#[test]
fn test_engine_against_itself_draws() {
    let mut game = Game::new();
    while game.play_engine_move().is_some() {}
    assert_eq!(game.outcome(), Outcome::Draw);
    assert_eq!(game.history().len(), 9);
}
