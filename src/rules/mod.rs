//! Game rules for freestyle Gomoku
//!
//! Five or more stones of one color in a row wins. A full board without a
//! five is a draw.

pub mod win;

pub use win::{find_five_line_at_pos, has_five_at_pos, DIRECTIONS};
