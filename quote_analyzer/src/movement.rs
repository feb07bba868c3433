//! Classification of a percent change into a direction worth reacting to.
use strum::Display;

use crate::audio::AudioCue;

/// Percent change at or above which the movement counts as up.
pub const HAPPY_THRESHOLD: f64 = 1.0;
/// Percent change at or below which the movement counts as down.
pub const SAD_THRESHOLD: f64 = -1.0;

/// Direction of a price movement since the previous close.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Movement {
    /// Up by at least [`HAPPY_THRESHOLD`] percent.
    Up,
    /// Down by at least one percent ([`SAD_THRESHOLD`]).
    Down,
    /// Anything strictly between the two thresholds.
    Flat,
}

impl Movement {
    /// Classify an already rounded percent change.
    pub fn classify(percent_change: f64) -> Self {
        if percent_change >= HAPPY_THRESHOLD {
            Movement::Up
        } else if percent_change <= SAD_THRESHOLD {
            Movement::Down
        } else {
            Movement::Flat
        }
    }

    /// Sound to play for this movement, if any.
    pub fn cue(self) -> Option<AudioCue> {
        match self {
            Movement::Up => Some(AudioCue::Happy),
            Movement::Down => Some(AudioCue::Sad),
            Movement::Flat => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thresholds_are_inclusive() {
        assert_eq!(Movement::classify(1.0), Movement::Up);
        assert_eq!(Movement::classify(-1.0), Movement::Down);
        assert_eq!(Movement::classify(66.67), Movement::Up);
        assert_eq!(Movement::classify(-50.5), Movement::Down);
    }

    #[test]
    fn small_moves_are_flat() {
        for percent in [0.0, 0.01, -0.01, 0.99, -0.99] {
            assert_eq!(Movement::classify(percent), Movement::Flat, "{percent}");
            assert_eq!(Movement::classify(percent).cue(), None);
        }
    }
}
