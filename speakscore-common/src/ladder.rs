//! Threshold ladder classification
//!
//! A ladder is a list of `(lower_bound, value)` rungs in descending order of
//! lower bound plus a default value. Classification walks the rungs top-down
//! and returns the first rung whose lower bound the score reaches. Lower
//! bounds are closed: a score exactly on a threshold takes that rung.
//!
//! Every `f64` classifies. There is no upper bound, so anything above the top
//! threshold takes the top rung, and anything below the lowest threshold
//! (including NaN, which compares false against every bound) takes the default.

/// Descending threshold table with a catch-all default
#[derive(Debug, Clone, Copy)]
pub struct Ladder<T: 'static> {
    rungs: &'static [(f64, T)],
    default: T,
}

impl<T: Copy + 'static> Ladder<T> {
    /// Create a ladder from rungs sorted by descending lower bound
    pub const fn new(rungs: &'static [(f64, T)], default: T) -> Self {
        Self { rungs, default }
    }

    /// Classify a score: first rung reached wins, default otherwise
    pub fn classify(&self, score: f64) -> T {
        self.rungs
            .iter()
            .find(|(lower_bound, _)| score >= *lower_bound)
            .map(|(_, value)| *value)
            .unwrap_or(self.default)
    }

    /// Lower bounds of the named rungs, highest first
    pub fn thresholds(&self) -> impl Iterator<Item = f64> + '_ {
        self.rungs.iter().map(|(lower_bound, _)| *lower_bound)
    }
}
