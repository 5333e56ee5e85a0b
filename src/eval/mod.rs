//! Move evaluation
//!
//! - [`lines`]: precomputed winning-line index, shared process-wide
//! - [`patterns`]: line weights and offense/defense factors
//! - [`heuristic`]: incremental line counters and single-ply move choice

pub mod heuristic;
pub mod lines;
pub mod patterns;

pub use heuristic::Evaluator;
pub use lines::{LineId, WinLineIndex, LINE_LEN};
pub use patterns::{PatternScore, DEAD, DEFENSE_FACTOR, OFFENSE_FACTOR};
