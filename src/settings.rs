//! Tunable timings and storage naming for all activities.

/// Timer period used by the browser ticker, in milliseconds.
pub const TICK_MS: u64 = 100;

/// Key prefix for best scores in local storage; the level id is appended.
pub const BEST_SCORE_PREFIX: &str = "hanja-whiz.best.";

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Settings {
    pub tick_ms: u64,
    /// Wall-clock pause between a cleared matching round and the next deal.
    pub round_clear_delay_ms: u64,
    /// How long a wrong pair stays visibly selected.
    pub mismatch_clear_delay_ms: u64,
    pub puzzle_advance_delay_ms: u64,
    pub practice_advance_delay_ms: u64,
    pub best_score_prefix: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tick_ms: TICK_MS,
            round_clear_delay_ms: 1_500,
            mismatch_clear_delay_ms: 600,
            puzzle_advance_delay_ms: 800,
            practice_advance_delay_ms: 1_500,
            best_score_prefix: BEST_SCORE_PREFIX.to_string(),
        }
    }
}

impl Settings {
    /// Tick length in seconds, as fed to the activities' `tick(dt)`.
    pub fn tick_secs(&self) -> f64 {
        self.tick_ms as f64 / 1000.0
    }
}
