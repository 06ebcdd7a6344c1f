//! Tests for history review navigation.

use std::cell::Cell;
use std::rc::Rc;
use tictactoe_engine::{EngineError, GameEngine, Mark, Phase, PublicState, Status};

fn with_moves(moves: &[(usize, usize)]) -> GameEngine {
    let mut engine = GameEngine::default();
    engine.initialize(Mark::X).expect("initialize");
    let mut mark = Mark::X;
    for &(row, col) in moves {
        engine.apply_move(row, col, mark).expect("Valid move");
        mark = mark.opponent();
    }
    engine
}

#[test]
fn test_review_then_move_consumes_one_interaction() {
    let mut engine = with_moves(&[(0, 0), (1, 1)]);
    engine.enter_history_review().expect("history recorded");

    let state = engine.apply_move(2, 2, Mark::X).expect("resumes live");
    assert!(!state.is_reviewing());
    assert_eq!(*state.history_len(), 2);
    assert!(engine.board().is_empty(tictactoe_engine::Position::new(2, 2).expect("in range")));

    let state = engine.apply_move(2, 2, Mark::X).expect("Valid move");
    assert_eq!(*state.history_len(), 3);
    assert_eq!(state.board().get(2, 2), Ok(tictactoe_engine::Cell::Occupied(Mark::X)));
}

#[test]
fn test_review_starts_at_latest_snapshot() {
    let mut engine = with_moves(&[(0, 0), (1, 1), (2, 2)]);
    let state = engine.enter_history_review().expect("history recorded");

    assert_eq!(*state.review_index(), Some(2));
    assert_eq!(state.status(), Status::ReviewingHistory(2));
    assert_eq!(state.board(), engine.board());
    assert!(*state.can_step_back());
    assert!(!*state.can_step_forward());
}

#[test]
fn test_review_requires_history() {
    let mut engine = with_moves(&[]);
    assert_eq!(
        engine.enter_history_review(),
        Err(EngineError::OutOfRange { index: 0, len: 0 })
    );
    assert_eq!(
        engine.step_history(-1),
        Err(EngineError::OutOfRange { index: 0, len: 0 })
    );
    assert!(!engine.public_state().is_reviewing());
}

#[test]
fn test_step_clamps_silently() {
    let mut engine = with_moves(&[(0, 0), (1, 1), (2, 2)]);
    engine.jump_history(0).expect("in range");

    let state = engine.step_history(-1).expect("clamped");
    assert_eq!(*state.review_index(), Some(0));
    assert!(!*state.can_step_back());

    engine.step_history(1).expect("step");
    engine.step_history(1).expect("step");
    let state = engine.step_history(1).expect("clamped");
    assert_eq!(*state.review_index(), Some(2));
    assert!(!*state.can_step_forward());
}

#[test]
fn test_step_back_from_live() {
    let mut engine = with_moves(&[(0, 0), (1, 1), (2, 2)]);
    let state = engine.step_history(-1).expect("enters review");
    assert_eq!(*state.review_index(), Some(1));
    assert_eq!(state.board().occupied(), 2);
    assert_eq!(state.message(), "Viewing history at move 2");
}

#[test]
fn test_jump_out_of_range_is_rejected() {
    let mut engine = with_moves(&[(0, 0), (1, 1)]);
    engine.jump_history(1).expect("in range");

    assert_eq!(
        engine.jump_history(2),
        Err(EngineError::OutOfRange { index: 2, len: 2 })
    );
    assert_eq!(*engine.public_state().review_index(), Some(1));
}

#[test]
fn test_review_does_not_alter_live_board() {
    let mut engine = with_moves(&[(0, 0), (1, 1), (0, 1)]);
    let live = *engine.board();

    let state = engine.jump_history(0).expect("in range");
    assert_eq!(state.board().occupied(), 1);
    assert_eq!(*engine.board(), live);
    assert_eq!(*state.phase(), Phase::InProgress);
}

#[test]
fn test_review_after_game_over() {
    let mut engine = with_moves(&[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);
    assert_eq!(*engine.public_state().phase(), Phase::Won(Mark::X));

    let state = engine.jump_history(2).expect("in range");
    assert_eq!(*state.phase(), Phase::Won(Mark::X));
    assert_eq!(state.board().occupied(), 3);

    let state = engine.apply_move(2, 2, Mark::O).expect("resumes live");
    assert_eq!(state.status(), Status::Won(Mark::X));
    assert_eq!(
        engine.apply_move(2, 2, Mark::O),
        Err(EngineError::NotPlaying {
            phase: Phase::Won(Mark::X),
        })
    );
}

#[test]
fn test_snapshots_are_copies() {
    let engine = with_moves(&[(0, 0), (1, 1), (2, 2)]);
    let snapshots = engine.history().snapshots();
    let counts: Vec<usize> = snapshots.iter().map(|b| b.occupied()).collect();
    assert_eq!(counts, vec![1, 2, 3]);
}

#[test]
fn test_observer_reentrancy_sees_committed_state() {
    let calls = Rc::new(Cell::new(0usize));
    let counter = Rc::clone(&calls);

    let mut engine = GameEngine::default();
    engine.add_observer(Box::new(move |state: &PublicState| {
        counter.set(counter.get() + 1);
        assert_eq!(state.review_index().is_some(), state.is_reviewing());
        if let Some(at) = state.review_index() {
            assert!(*at < *state.history_len());
        }
    }));

    engine.initialize(Mark::X).expect("initialize");
    engine.apply_move(0, 0, Mark::X).expect("Valid move");
    engine.enter_history_review().expect("history recorded");
    assert!(engine.jump_history(5).is_err());
    engine.step_history(-1).expect("clamped");

    assert_eq!(calls.get(), 4);
}
