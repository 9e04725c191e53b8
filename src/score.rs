//! Kill / escape bookkeeping.

use tracing::{debug, info};

use crate::constants::{SCORE_TO_RUBIES, TRIGGER_LOSS_AMOUNT};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Score {
    pub kills: u32,
    pub escapes: u32,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register_kill(&mut self) {
        self.kills += 1;
        debug!(rubies = self.current_score(), "enemy killed");
    }

    pub fn register_escape(&mut self) {
        self.escapes += 1;
        info!(escapes = self.escapes, "enemy infiltrated the castle");
    }

    /// Rubies earned so far.
    pub fn current_score(&self) -> u32 {
        self.kills * SCORE_TO_RUBIES
    }

    /// Escapes so far; the HUD shows this as `n / 5`.
    pub fn lives_remaining(&self) -> u32 {
        self.escapes
    }

    pub fn is_lost(&self) -> bool {
        self.escapes >= TRIGGER_LOSS_AMOUNT
    }

    pub fn reset(&mut self) {
        *self = Score::default();
    }

    pub fn escapes_label(&self) -> String {
        format!("{} / {}", self.lives_remaining(), TRIGGER_LOSS_AMOUNT)
    }
}
