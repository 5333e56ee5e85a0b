//! Board representation for Gomoku

pub mod board;

#[cfg(test)]
mod tests;

pub use board::{Board, PlaceError, Snapshot};

/// Board side, including the unused border row/column 0
pub const BOARD_SIZE: usize = 16;

/// First playable coordinate on either axis
pub const PLAY_MIN: u8 = 1;
/// Last playable coordinate on either axis
pub const PLAY_MAX: u8 = (BOARD_SIZE - 1) as u8;

/// Stone colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stone {
    Empty,
    Black,
    White,
}

impl Stone {
    /// Get opponent color
    #[inline]
    pub fn opponent(self) -> Stone {
        match self {
            Stone::Black => Stone::White,
            Stone::White => Stone::Black,
            Stone::Empty => Stone::Empty,
        }
    }

    /// Snapshot / wire encoding: 0 = empty, 1 = black, 2 = white
    #[inline]
    pub fn code(self) -> u8 {
        match self {
            Stone::Empty => 0,
            Stone::Black => 1,
            Stone::White => 2,
        }
    }

    /// Decode a color code. Only 1 and 2 name a player color.
    #[inline]
    pub fn from_code(code: u8) -> Option<Stone> {
        match code {
            1 => Some(Stone::Black),
            2 => Some(Stone::White),
            _ => None,
        }
    }
}

/// Position on the board, `x` selects the row and `y` the column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub x: u8,
    pub y: u8,
}

impl Pos {
    #[inline]
    pub const fn new(x: u8, y: u8) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn to_index(self) -> usize {
        self.x as usize * BOARD_SIZE + self.y as usize
    }

    /// True if the position lies on the coordinate grid (border included)
    #[inline]
    pub fn on_grid(self) -> bool {
        (self.x as usize) < BOARD_SIZE && (self.y as usize) < BOARD_SIZE
    }

    /// True if a stone may be placed here
    #[inline]
    pub fn is_playable(self) -> bool {
        (PLAY_MIN..=PLAY_MAX).contains(&self.x) && (PLAY_MIN..=PLAY_MAX).contains(&self.y)
    }

    /// Playable cells in scan order: x ascending outer, y ascending inner
    pub fn playable() -> impl Iterator<Item = Pos> {
        (PLAY_MIN..=PLAY_MAX).flat_map(|x| (PLAY_MIN..=PLAY_MAX).map(move |y| Pos::new(x, y)))
    }
}

impl std::fmt::Display for Pos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
