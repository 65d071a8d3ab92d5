// Rate engine - derives the speaking-rate multiplier from typing progress.

use super::config::Config;
use std::ops::RangeInclusive;

/// Whitespace-delimited word count, the unit both the passage and the
/// typed prefix are measured in.
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Holds the current speaking-rate multiplier.
///
/// While sync mode is on the multiplier is recomputed from the ratio of
/// typed words to passage words; while it is off the multiplier is a
/// directly user-set value. Either way it stays within `rate_range`.
pub struct RateSynchronizer {
    factor: f32,
    sync_enabled: bool,
    base_wpm: f32,
    range: RangeInclusive<f32>,
}

impl RateSynchronizer {
    pub fn new(config: &Config) -> Self {
        Self {
            factor: 1.0,
            sync_enabled: true,
            base_wpm: config.base_wpm,
            range: config.rate_range.clone(),
        }
    }

    pub fn factor(&self) -> f32 {
        self.factor
    }

    pub fn sync_enabled(&self) -> bool {
        self.sync_enabled
    }

    /// Turning sync on recomputes immediately from the current progress;
    /// turning it off freezes the factor at its last value.
    pub fn set_sync_enabled(&mut self, enabled: bool, text: &str, typed: &str) {
        self.sync_enabled = enabled;
        if enabled {
            self.recompute(text, typed);
        }
    }

    /// Directly set the factor. Ignored while sync mode owns the value.
    pub fn set_manual(&mut self, factor: f32) {
        if !self.sync_enabled {
            self.factor = self.clamp(factor);
        }
    }

    /// Recompute the factor from typing progress. Call after every
    /// mutation of the passage or the typed prefix.
    ///
    /// An empty passage is treated as one word so the ratio stays finite;
    /// with nothing typed that degenerates to the clamp floor.
    pub fn recompute(&mut self, text: &str, typed: &str) {
        if !self.sync_enabled {
            return;
        }

        let total_words = count_words(text).max(1);
        let typed_words = count_words(typed);
        let raw = (typed_words as f32 / total_words as f32) * (self.base_wpm / 60.0);
        self.factor = self.clamp(raw);
    }

    fn clamp(&self, raw: f32) -> f32 {
        raw.clamp(*self.range.start(), *self.range.end())
    }
}
