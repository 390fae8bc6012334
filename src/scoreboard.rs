//! Best score for the current run
//!
//! Kept in memory only; a page reload starts from zero.

/// Scores across the sessions of one run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scoreboard {
    best: u64,
}

impl Scoreboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a finished session. Returns true if it set a new best.
    pub fn record_game_over(&mut self, score: u64) -> bool {
        if score > self.best {
            self.best = score;
            return true;
        }
        false
    }

    pub fn best(&self) -> u64 {
        self.best
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_best_only_grows() {
        let mut board = Scoreboard::new();
        assert!(!board.record_game_over(0));
        assert!(board.record_game_over(12));
        assert!(!board.record_game_over(12));
        assert!(!board.record_game_over(4));
        assert!(board.record_game_over(30));
        assert_eq!(board.best(), 30);
    }
}
