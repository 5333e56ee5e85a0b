//! Networked Gomoku client
//!
//! Five in a row on a 15x15 playable area, against a relay-matched peer, a
//! second local player, or a line-counting heuristic:
//! - Exact five or longer wins (overlines allowed)
//! - A full board with no five is a draw
//! - Online games fall back to the heuristic when no match arrives in time
//!
//! # Architecture
//!
//! - [`board`]: Cells, stones and placement validation
//! - [`rules`]: Win detection through the last placed stone
//! - [`eval`]: Winning-line index and the incremental evaluator
//! - [`net`]: Relay wire protocol, TCP link and matchmaking timer
//! - [`session`]: Turn discipline, opponents and the phase machine
//! - [`config`]: TOML configuration
//! - [`ui`]: egui frontend
//!
//! # Quick Start
//!
//! ```
//! use gomoku::{AppConfig, MoveOutcome, PlayMode, Pos, Session, Stone};
//!
//! let mut session = Session::start_new(&AppConfig::default(), PlayMode::Ai);
//!
//! // The heuristic answers before `play` returns
//! assert_eq!(session.play(Pos::new(8, 8)), Ok(MoveOutcome::Continue));
//! assert_eq!(session.history()[1].1, Stone::White);
//! ```

pub mod board;
pub mod config;
pub mod error;
pub mod eval;
pub mod net;
pub mod rules;
pub mod session;
pub mod ui;

pub use board::{Board, Pos, Stone, BOARD_SIZE, PLAY_MAX, PLAY_MIN};
pub use config::{AppConfig, DisconnectPolicy, PlayMode};
pub use error::{ConfigError, MoveError};
pub use eval::{Evaluator, WinLineIndex};
pub use session::{MoveOutcome, Notice, Phase, Session};
