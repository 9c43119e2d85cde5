//! Tests for the rules engine over the whole reachable state space.

mod common;

use common::{board, reachable_boards};
use minimax_tictactoe::{
    Board, Cell, InvalidMoveError, Mark, Move, Outcome, apply, initial_state, is_terminal,
    legal_moves, outcome, player_to_move, utility, winner,
};

#[test]
fn test_reachable_board_count() {
    // Well-known count of distinct positions, including the empty board.
    assert_eq!(reachable_boards().len(), 5478);
}

#[test]
fn test_mark_counts_stay_balanced() {
    for b in reachable_boards() {
        let x = b.count(Mark::X);
        let o = b.count(Mark::O);
        assert!(x == o || x == o + 1, "unbalanced board {}", b.notation());
    }
}

#[test]
fn test_player_to_move_alternates_from_x() {
    let mut b = initial_state();
    let mut expected = Mark::X;
    for mv in [
        Move::new(1, 1),
        Move::new(0, 0),
        Move::new(2, 2),
        Move::new(0, 2),
        Move::new(0, 1),
    ] {
        assert_eq!(player_to_move(&b), expected);
        b = apply(&b, mv).unwrap();
        assert_eq!(b.get(mv), Some(Cell::Marked(expected)));
        expected = expected.opponent();
    }
    assert_eq!(player_to_move(&b), Mark::O);
}

#[test]
fn test_player_to_move_alternates_on_every_edge() {
    for b in reachable_boards() {
        if is_terminal(&b) {
            continue;
        }
        let mover = player_to_move(&b);
        for mv in legal_moves(&b) {
            let next = apply(&b, mv).unwrap();
            assert_eq!(player_to_move(&next), mover.opponent());
        }
    }
}

#[test]
fn test_apply_never_reoffers_filled_cell() {
    for b in reachable_boards() {
        for mv in legal_moves(&b) {
            let next = apply(&b, mv).unwrap();
            let remaining = legal_moves(&next);
            assert!(!remaining.contains(&mv));
            assert_eq!(remaining.len(), legal_moves(&b).len() - 1);
        }
    }
}

#[test]
fn test_winner_implies_terminal() {
    for b in reachable_boards() {
        if winner(&b).is_some() {
            assert!(is_terminal(&b), "winning board {} not terminal", b.notation());
        }
    }
}

#[test]
fn test_terminal_iff_winner_or_no_moves() {
    for b in reachable_boards() {
        let expected = winner(&b).is_some() || legal_moves(&b).is_empty();
        assert_eq!(is_terminal(&b), expected, "board {}", b.notation());
    }
}

#[test]
fn test_utility_matches_winner_on_terminal_boards() {
    for b in reachable_boards().into_iter().filter(is_terminal) {
        let expected = match winner(&b) {
            Some(Mark::X) => 1,
            Some(Mark::O) => -1,
            None => 0,
        };
        assert_eq!(utility(&b), expected);
        assert!(outcome(&b).is_finished());
        assert_eq!(outcome(&b).winner(), winner(&b));
    }
}

#[test]
fn test_apply_occupied_corner_fails() {
    let b = board("X../.../...");
    assert_eq!(b.cell(0, 0), Some(Cell::Marked(Mark::X)));
    assert_eq!(
        apply(&b, Move::new(0, 0)),
        Err(InvalidMoveError::Occupied(Move::new(0, 0)))
    );
}

#[test]
fn test_apply_out_of_range_fails() {
    let b = initial_state();
    assert!(matches!(
        apply(&b, Move::new(0, 3)),
        Err(InvalidMoveError::OutOfRange(_))
    ));
    assert!(matches!(
        apply(&b, Move::new(usize::MAX, 0)),
        Err(InvalidMoveError::OutOfRange(_))
    ));
}

#[test]
fn test_full_board_has_no_moves() {
    let b = board("XOX/OXX/OXO");
    assert!(legal_moves(&b).is_empty());
    assert!(is_terminal(&b));
    assert_eq!(outcome(&b), Outcome::Draw);
}

#[test]
fn test_board_serializes_as_notation() {
    let b = board("XOX/XOO/...");
    let json = serde_json::to_string(&b).unwrap();
    assert_eq!(json, "\"XOX/XOO/...\"");
    let back: Board = serde_json::from_str(&json).unwrap();
    assert_eq!(back, b);
    assert!(serde_json::from_str::<Board>("\"XXX/XXX/XXX\"").is_err());
}
