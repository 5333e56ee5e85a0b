//! Precomputed index of every five-cell winning line
//!
//! The index is pure geometry: it is built once per process and shared by
//! reference between all games.

use once_cell::sync::Lazy;

use crate::board::{Pos, BOARD_SIZE};

/// Identifier of a line within its [`WinLineIndex`]
pub type LineId = u16;

/// Cells in a winning line
pub const LINE_LEN: usize = 5;

static GLOBAL: Lazy<WinLineIndex> = Lazy::new(|| WinLineIndex::new(BOARD_SIZE));

/// All length-5 lines of an `N x N` grid plus the reverse cell -> lines map
#[derive(Debug)]
pub struct WinLineIndex {
    size: usize,
    lines: Vec<[Pos; LINE_LEN]>,
    by_cell: Vec<Vec<LineId>>,
}

impl WinLineIndex {
    /// Process-wide index for [`BOARD_SIZE`]
    pub fn global() -> &'static WinLineIndex {
        &GLOBAL
    }

    /// Enumerate lines for a grid of side `size` (at least 5).
    ///
    /// Order: horizontal, vertical, down-right diagonal, up-right diagonal.
    /// The count is `4 * (size - 4) * (size - 2)`.
    pub fn new(size: usize) -> Self {
        assert!((LINE_LEN..=u8::MAX as usize).contains(&size), "unsupported grid size {size}");

        let span = size - LINE_LEN + 1;
        let mut index = Self {
            size,
            lines: Vec::with_capacity(4 * (size - 4) * (size - 2)),
            by_cell: vec![Vec::new(); size * size],
        };

        for i in 0..size {
            for j in 0..span {
                index.push(i, j, 0, 1);
            }
        }
        for i in 0..span {
            for j in 0..size {
                index.push(i, j, 1, 0);
            }
        }
        for i in 0..span {
            for j in 0..span {
                index.push(i, j, 1, 1);
            }
        }
        // Anchored on the mirrored column so the line steps left in-bounds
        for i in 0..span {
            for j in 0..span {
                index.push(i, size - 1 - j, 1, -1);
            }
        }

        index
    }

    fn push(&mut self, x: usize, y: usize, dx: isize, dy: isize) {
        let id = self.lines.len() as LineId;
        let line: [Pos; LINE_LEN] = std::array::from_fn(|k| {
            let cx = x as isize + dx * k as isize;
            let cy = y as isize + dy * k as isize;
            Pos::new(cx as u8, cy as u8)
        });
        for pos in &line {
            self.by_cell[pos.x as usize * self.size + pos.y as usize].push(id);
        }
        self.lines.push(line);
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of lines
    #[inline]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Cells of line `id`
    #[inline]
    pub fn line(&self, id: LineId) -> &[Pos; LINE_LEN] {
        &self.lines[id as usize]
    }

    /// All lines with their identifiers
    pub fn iter(&self) -> impl Iterator<Item = (LineId, &[Pos; LINE_LEN])> {
        self.lines.iter().enumerate().map(|(id, line)| (id as LineId, line))
    }

    /// Lines passing through `pos`; empty for off-grid positions
    #[inline]
    pub fn lines_through(&self, pos: Pos) -> &[LineId] {
        let (x, y) = (pos.x as usize, pos.y as usize);
        if x < self.size && y < self.size {
            &self.by_cell[x * self.size + y]
        } else {
            &[]
        }
    }
}
