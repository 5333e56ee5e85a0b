//! Single-ply move heuristic over winning-line occupancy
//!
//! Every line keeps one stone counter per color. Once a line holds a stone
//! of one color it is dead for the other color for the rest of the game, so
//! a candidate cell is scored by summing, over the lines through it, the
//! weight of our own live lines (offense) and of the opponent's live lines
//! (defense).
//!
//! The counters are incremental: [`Evaluator::update`] must be called for
//! every stone placed by either side. They cannot be rebuilt from a
//! [`Snapshot`] alone.

use crate::board::{Pos, Snapshot, Stone};

use super::lines::{LineId, WinLineIndex};
use super::patterns::{defense_weight, offense_weight, DEAD, DEFENSE_FACTOR, OFFENSE_FACTOR};

/// Per-line occupancy counters for both colors
#[derive(Debug, Clone)]
pub struct Evaluator {
    index: &'static WinLineIndex,
    black: Vec<u8>,
    white: Vec<u8>,
}

impl Evaluator {
    /// Evaluator over the process-wide line index
    pub fn new() -> Self {
        Self::with_index(WinLineIndex::global())
    }

    /// Evaluator over a specific index.
    ///
    /// Lines that touch a cell outside the playable range can never be
    /// completed and start out dead for both colors.
    pub fn with_index(index: &'static WinLineIndex) -> Self {
        let counters: Vec<u8> = index
            .iter()
            .map(|(_, line)| if line.iter().all(|p| p.is_playable()) { 0 } else { DEAD })
            .collect();
        Self {
            index,
            black: counters.clone(),
            white: counters,
        }
    }

    #[inline]
    pub fn index(&self) -> &'static WinLineIndex {
        self.index
    }

    fn counters(&self, color: Stone) -> &[u8] {
        match color {
            Stone::Black => self.black.as_slice(),
            Stone::White => self.white.as_slice(),
            Stone::Empty => &[],
        }
    }

    /// Stones `color` holds in `line`, or [`DEAD`]
    #[inline]
    pub fn count(&self, color: Stone, line: LineId) -> u8 {
        self.counters(color).get(line as usize).copied().unwrap_or(0)
    }

    /// True if `color` can still complete `line`
    #[inline]
    pub fn is_live(&self, color: Stone, line: LineId) -> bool {
        self.count(color, line) < DEAD
    }

    /// Record a stone of `color` at `pos`.
    ///
    /// Touches only the lines through `pos`.
    pub fn update(&mut self, pos: Pos, color: Stone) {
        let (own, other) = match color {
            Stone::Black => (&mut self.black, &mut self.white),
            Stone::White => (&mut self.white, &mut self.black),
            Stone::Empty => return,
        };
        for &line in self.index.lines_through(pos) {
            let line = line as usize;
            if own[line] < DEAD {
                own[line] += 1;
            }
            other[line] = DEAD;
        }
    }

    /// Position score of `pos` from `color`'s point of view.
    ///
    /// Sums over every line through `pos` the offense weight of `color`'s
    /// count and the defense weight of the opponent's count, then applies
    /// the offense/defense factors.
    pub fn score_candidate(&self, pos: Pos, color: Stone) -> f64 {
        let own = self.counters(color);
        let other = self.counters(color.opponent());
        if own.is_empty() || other.is_empty() {
            return 0.0;
        }

        let (attack, defend) = self
            .index
            .lines_through(pos)
            .iter()
            .fold((0i64, 0i64), |(attack, defend), &line| {
                let line = line as usize;
                (
                    attack + offense_weight(own[line]) as i64,
                    defend + defense_weight(other[line]) as i64,
                )
            });

        attack as f64 * OFFENSE_FACTOR + defend as f64 * DEFENSE_FACTOR
    }

    /// Pick the move for `color` on `snapshot`.
    ///
    /// Scans empty playable cells with x ascending outer and y ascending
    /// inner. Ties go to the last cell scanned. Returns `None` only when no
    /// empty playable cell exists.
    pub fn select_move(&self, snapshot: &Snapshot, color: Stone) -> Option<Pos> {
        let mut best_score = -1.0;
        let mut best: Option<Pos> = None;

        for pos in Pos::playable().filter(|&p| snapshot.is_empty(p)) {
            let score = self.score_candidate(pos, color);
            if score >= best_score {
                best_score = score;
                best = Some(pos);
            }
        }

        best
    }
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new()
    }
}
