//! Line weights for the move heuristic
//!
//! A line's weight depends only on how many stones one side already holds
//! in it. Offense weights sit slightly above defense weights so the AI
//! prefers extending its own lines over blocking equal ones.

/// Counter value marking a line as permanently unwinnable for one color
pub const DEAD: u8 = 6;

/// Multiplier applied to the evaluating side's line weights
pub const OFFENSE_FACTOR: f64 = 1.2;
/// Multiplier applied to the opponent's line weights
pub const DEFENSE_FACTOR: f64 = 1.0;

/// Line weights indexed by stone count
pub struct PatternScore;

impl PatternScore {
    /// Opponent stones in a live line (blocking value)
    pub const DEFENSE: [i32; 5] = [0, 200, 400, 2_000, 10_000];
    /// Own stones in a live line (building value)
    pub const OFFENSE: [i32; 5] = [0, 220, 420, 2_100, 20_000];
}

/// Blocking value of a line holding `count` opponent stones.
/// Empty, completed and dead lines are worth nothing.
#[inline]
pub fn defense_weight(count: u8) -> i32 {
    PatternScore::DEFENSE.get(count as usize).copied().unwrap_or(0)
}

/// Building value of a line holding `count` of our own stones
#[inline]
pub fn offense_weight(count: u8) -> i32 {
    PatternScore::OFFENSE.get(count as usize).copied().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weight_tables() {
        assert_eq!(defense_weight(1), 200);
        assert_eq!(defense_weight(2), 400);
        assert_eq!(defense_weight(3), 2_000);
        assert_eq!(defense_weight(4), 10_000);
        assert_eq!(offense_weight(1), 220);
        assert_eq!(offense_weight(2), 420);
        assert_eq!(offense_weight(3), 2_100);
        assert_eq!(offense_weight(4), 20_000);
    }

    #[test]
    fn test_empty_full_and_dead_lines_score_zero() {
        for count in [0, 5, DEAD, DEAD + 1, u8::MAX] {
            assert_eq!(defense_weight(count), 0);
            assert_eq!(offense_weight(count), 0);
        }
    }

    #[test]
    fn test_offense_outweighs_defense() {
        for count in 1..=4 {
            assert!(offense_weight(count) > defense_weight(count));
        }
    }
}
