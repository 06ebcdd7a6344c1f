//! The game engine facade.
//!
//! `GameEngine` owns the session and is the only thing that mutates it.
//! Every mutating operation follows the same shape: check preconditions,
//! build a candidate session, verify invariants (debug builds), commit
//! with a single assignment, then notify observers. A failed operation
//! returns before the commit, so the prior state is untouched.

use crate::board::Board;
use crate::config::EngineConfig;
use crate::error::EngineError;
use crate::history::History;
use crate::observer::StateObserver;
use crate::position::Position;
use crate::session::Session;
use crate::state::PublicState;
use crate::types::{Mark, Move, Phase};
use crate::validator::validate_move;
use tracing::{debug, info, instrument, warn};

/// Tic-tac-toe game engine.
pub struct GameEngine {
    config: EngineConfig,
    session: Session,
    last_starting_mark: Option<Mark>,
    observers: Vec<Box<dyn StateObserver>>,
}

impl std::fmt::Debug for GameEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameEngine")
            .field("config", &self.config)
            .field("session", &self.session)
            .field("last_starting_mark", &self.last_starting_mark)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl GameEngine {
    /// Creates an uninitialized engine.
    #[instrument]
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            session: Session::default(),
            last_starting_mark: None,
            observers: Vec::new(),
        }
    }

    /// Returns the configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Returns the live board, ignoring any review in progress.
    pub fn board(&self) -> &Board {
        self.session.board()
    }

    /// Returns the snapshot history.
    pub fn history(&self) -> &History {
        self.session.history()
    }

    /// Registers an observer, notified after every committed operation.
    pub fn add_observer(&mut self, observer: Box<dyn StateObserver>) {
        self.observers.push(observer);
    }

    /// Current render snapshot.
    pub fn public_state(&self) -> PublicState {
        PublicState::capture(&self.session, *self.config.history_review())
    }

    /// Starts a fresh game with `starting_mark` to move.
    ///
    /// Any previous board and history are discarded.
    #[instrument(skip(self))]
    pub fn initialize(&mut self, starting_mark: Mark) -> Result<PublicState, EngineError> {
        info!(%starting_mark, "Starting game");
        let state = self.commit(Session::started(starting_mark))?;
        self.last_starting_mark = Some(starting_mark);
        Ok(state)
    }

    /// Clears the board and history and returns to the uninitialized phase.
    #[instrument(skip(self))]
    pub fn reset(&mut self) -> Result<PublicState, EngineError> {
        info!("Resetting game");
        self.commit(Session::default())
    }

    /// Resets, then starts again with the last starting mark.
    ///
    /// # Errors
    ///
    /// [`EngineError::Uninitialized`] if no game was ever started.
    #[instrument(skip(self))]
    pub fn restart(&mut self) -> Result<PublicState, EngineError> {
        let mark = self.last_starting_mark.ok_or(EngineError::Uninitialized)?;
        self.initialize(mark)
    }

    /// Checks a move without applying it.
    ///
    /// Ignores review mode: reports whether the move would be legal on the
    /// live board.
    #[instrument(skip(self))]
    pub fn validate_move(&self, row: usize, col: usize, mark: Mark) -> Result<(), EngineError> {
        let (position, current) = self.move_target(row, col)?;
        validate_move(
            self.session.phase(),
            self.session.board(),
            position,
            current,
            mark,
        )
    }

    /// Applies a move.
    ///
    /// While reviewing history, the call only returns to live mode and
    /// places nothing; the next call with the same arguments places the
    /// mark.
    ///
    /// # Errors
    ///
    /// - [`EngineError::Uninitialized`] before `initialize`
    /// - [`EngineError::OutOfRange`] for coordinates outside 0-2
    /// - [`EngineError::NotPlaying`] once the game is won or drawn
    /// - [`EngineError::CellOccupied`] if the cell holds a mark
    /// - [`EngineError::WrongTurn`] if `mark` is not the mark to move
    #[instrument(skip(self))]
    pub fn apply_move(
        &mut self,
        row: usize,
        col: usize,
        mark: Mark,
    ) -> Result<PublicState, EngineError> {
        let (position, current) = self.move_target(row, col)?;

        if self.session.history().is_reviewing() {
            debug!("Move while reviewing: resuming live play");
            let mut next = self.session.clone();
            next.history.resume_live();
            return self.commit(next);
        }

        if let Err(e) = validate_move(
            self.session.phase(),
            self.session.board(),
            position,
            current,
            mark,
        ) {
            warn!(error = %e, "Move rejected");
            return Err(e);
        }

        let mut next = self.session.clone();
        next.place(position, mark);
        self.commit(next)
    }

    /// Applies a [`Move`]. Same as [`apply_move`](Self::apply_move).
    pub fn apply(&mut self, mv: Move) -> Result<PublicState, EngineError> {
        self.apply_move(mv.row, mv.col, mv.mark)
    }

    /// Enters history review at the latest snapshot.
    ///
    /// Already reviewing: stays at the current snapshot.
    #[instrument(skip(self))]
    pub fn enter_history_review(&mut self) -> Result<PublicState, EngineError> {
        let mut next = self.review_candidate()?;
        next.history.enter_review()?;
        self.commit(next)
    }

    /// Moves the review cursor by `delta`, clamped to the recorded range.
    ///
    /// From live mode, enters review at the latest snapshot first.
    #[instrument(skip(self))]
    pub fn step_history(&mut self, delta: isize) -> Result<PublicState, EngineError> {
        let mut next = self.review_candidate()?;
        next.history.step(delta)?;
        self.commit(next)
    }

    /// Shows the snapshot at `index`, entering review if needed.
    ///
    /// # Errors
    ///
    /// [`EngineError::OutOfRange`] if `index` is not a recorded snapshot.
    #[instrument(skip(self))]
    pub fn jump_history(&mut self, index: usize) -> Result<PublicState, EngineError> {
        let mut next = self.review_candidate()?;
        next.history.jump(index)?;
        self.commit(next)
    }

    fn move_target(&self, row: usize, col: usize) -> Result<(Position, Mark), EngineError> {
        let current = match (self.session.phase(), self.session.to_move()) {
            (Phase::Uninitialized, _) | (_, None) => return Err(EngineError::Uninitialized),
            (_, Some(mark)) => mark,
        };
        Ok((Position::new(row, col)?, current))
    }

    fn review_candidate(&self) -> Result<Session, EngineError> {
        if !*self.config.history_review() {
            return Err(EngineError::HistoryDisabled);
        }
        if self.session.phase() == Phase::Uninitialized {
            return Err(EngineError::Uninitialized);
        }
        Ok(self.session.clone())
    }

    fn commit(&mut self, next: Session) -> Result<PublicState, EngineError> {
        #[cfg(debug_assertions)]
        if let Err(description) = crate::invariants::check_session(&next) {
            warn!(%description, "Candidate state rejected");
            return Err(EngineError::InvariantViolation(description));
        }

        self.session = next;
        let state = self.public_state();
        for observer in &mut self.observers {
            observer.on_state_change(&state);
        }
        Ok(state)
    }
}
