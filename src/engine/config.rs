// Configuration for the rate engine and UI controls.
// All values are tunable policy, not physical constants.

use std::ops::RangeInclusive;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Assumed baseline reading speed in words per minute (default 200).
    /// Divided by 60 this scales typing progress into a rate multiplier.
    pub base_wpm: f32,

    /// Allowed range for the speaking-rate multiplier.
    pub rate_range: RangeInclusive<f32>,

    /// Step applied by the manual rate keys while sync mode is off.
    pub rate_step: f32,

    /// Step applied by the volume keys; volume stays within [0, 1].
    pub volume_step: f32,

    /// Upper bound on the typed-prefix buffer, in characters.
    pub typed_cap: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_wpm: 200.0,
            rate_range: 0.1..=10.0,
            rate_step: 0.25,
            volume_step: 0.1,
            typed_cap: 65_536,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_rate_range_matches_synthesizer_bounds() {
        let config = Config::default();
        assert_eq!(config.rate_range, 0.1..=10.0);
        assert_eq!(config.base_wpm, 200.0);
    }
}
