//! Board structure with placement validation

use super::{Pos, Stone, BOARD_SIZE};

/// Reasons a placement is refused. The board is left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PlaceError {
    #[error("position {0} is outside the playable area")]
    OutOfBounds(Pos),
    #[error("position {0} is already occupied")]
    CellOccupied(Pos),
}

/// Game board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [Stone; BOARD_SIZE * BOARD_SIZE],
    stones: u16,
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [Stone::Empty; BOARD_SIZE * BOARD_SIZE],
            stones: 0,
        }
    }

    #[inline]
    pub fn size(&self) -> usize {
        BOARD_SIZE
    }

    /// Get stone at position. Off-grid positions read as empty.
    #[inline]
    pub fn get(&self, pos: Pos) -> Stone {
        if pos.on_grid() {
            self.cells[pos.to_index()]
        } else {
            Stone::Empty
        }
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.get(pos) == Stone::Empty
    }

    /// Place a stone of `stone`'s color at `pos`.
    ///
    /// Rejects positions outside the playable range and occupied cells
    /// without mutating anything.
    pub fn place(&mut self, pos: Pos, stone: Stone) -> Result<(), PlaceError> {
        if !pos.is_playable() {
            return Err(PlaceError::OutOfBounds(pos));
        }
        if !self.is_empty(pos) {
            return Err(PlaceError::CellOccupied(pos));
        }
        debug_assert!(stone != Stone::Empty, "placing an empty stone");
        self.cells[pos.to_index()] = stone;
        self.stones += 1;
        Ok(())
    }

    /// Five or more in a row through `pos`. Only meaningful right after a
    /// successful `place` at `pos`; this is not a full-board scan.
    #[inline]
    pub fn check_win(&self, pos: Pos) -> bool {
        crate::rules::has_five_at_pos(self, pos, self.get(pos))
    }

    /// No empty playable cell remains
    pub fn is_full(&self) -> bool {
        Pos::playable().all(|pos| !self.is_empty(pos))
    }

    /// Total stones on board
    #[inline]
    pub fn stone_count(&self) -> u32 {
        self.stones as u32
    }

    /// Check if board is empty
    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.stones == 0
    }

    /// Integer view of the board for the evaluator
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            cells: self.cells.iter().map(|s| s.code()).collect(),
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Row-major `N x N` grid of color codes (0 = empty, 1 = black, 2 = white).
///
/// This is the only shape the evaluator needs from a [`Board`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    cells: Vec<u8>,
}

impl Snapshot {
    /// Build a snapshot from rows of codes, `rows[x][y]`
    pub fn from_rows(rows: &[[u8; BOARD_SIZE]; BOARD_SIZE]) -> Self {
        Self {
            cells: rows.iter().flatten().copied().collect(),
        }
    }

    #[inline]
    pub fn code(&self, pos: Pos) -> u8 {
        if pos.on_grid() {
            self.cells[pos.to_index()]
        } else {
            0
        }
    }

    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.code(pos) == 0
    }
}
