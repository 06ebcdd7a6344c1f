//! Tic-tac-toe game engine.
//!
//! A self-contained state machine for a 3x3 game: board model, move
//! validation, win/draw detection, and a snapshot history that can be
//! reviewed without disturbing the live board.
//!
//! The engine performs no I/O. A rendering layer drives it through
//! [`GameEngine`] and redraws from the returned [`PublicState`].
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{EngineConfig, GameEngine, Mark, Phase};
//!
//! # fn example() -> Result<(), tictactoe_engine::EngineError> {
//! let mut engine = GameEngine::new(EngineConfig::default());
//! engine.initialize(Mark::X)?;
//! for (row, col, mark) in [(0, 0, Mark::X), (1, 1, Mark::O), (0, 1, Mark::X), (2, 2, Mark::O)] {
//!     engine.apply_move(row, col, mark)?;
//! }
//! let state = engine.apply_move(0, 2, Mark::X)?;
//! assert_eq!(*state.phase(), Phase::Won(Mark::X));
//!
//! // Look back at the position after the first move.
//! let state = engine.jump_history(0)?;
//! assert_eq!(state.message(), "Viewing history at move 1");
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod config;
mod engine;
mod error;
mod history;
pub mod invariants;
mod observer;
mod position;
pub mod rules;
mod session;
mod state;
mod types;
mod validator;

pub use board::Board;
pub use config::EngineConfig;
pub use engine::GameEngine;
pub use error::{ConfigError, EngineError};
pub use history::{Cursor, History};
pub use observer::StateObserver;
pub use position::{Position, SIZE};
pub use rules::detect_outcome;
pub use session::Session;
pub use state::{PublicState, Status};
pub use types::{Cell, Mark, Move, Outcome, Phase};
pub use validator::{CellIsEmpty, GameIsPlaying, LegalMove, MarksTurn, validate_move};
