//! Game session: turn discipline, opponents and network fallback

pub mod opponent;
pub mod state;

pub use opponent::{LocalHeuristicOpponent, Opponent, OpponentEvent, RemoteOpponent};
pub use state::{EndReason, FallbackReason, GameResult, MoveOutcome, Notice, Phase, Session};
