use crate::games::snake::GameEndReason;
use super::SessionOutcome;

/// Best score seen so far, seeded from whatever the front-end persisted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HighScore {
    best: u32,
}

impl HighScore {
    pub fn new(best: u32) -> Self {
        Self { best }
    }

    pub fn best(&self) -> u32 {
        self.best
    }

    /// Only a strictly better score counts as a new high score.
    pub fn record(&mut self, score: u32, reason: GameEndReason) -> SessionOutcome {
        let is_new_high_score = score > self.best;
        if is_new_high_score {
            self.best = score;
        }
        SessionOutcome {
            score,
            is_new_high_score,
            reason,
        }
    }
}
