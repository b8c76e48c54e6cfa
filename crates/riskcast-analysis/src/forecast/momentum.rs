//! Momentum tracking: average score change per cycle over a short window.

use riskcast_core::config::defaults;
use riskcast_core::constants::clamp_score;

use super::types::MomentumDirection;

/// Changes smaller than this many points per cycle count as stable.
const STABLE_BAND: f64 = 0.5;

/// Momentum tracker over a risk's most recent composite scores.
#[derive(Debug, Clone)]
pub struct MomentumTracker {
    /// Scores, most recent last.
    scores: Vec<f64>,
    /// Maximum number of scores retained.
    window: usize,
}

impl MomentumTracker {
    /// Create a tracker with the default window (5 snapshots).
    pub fn new() -> Self {
        Self::with_window(defaults::DEFAULT_MOMENTUM_WINDOW)
    }

    /// Create a tracker with a custom window length.
    pub fn with_window(window: usize) -> Self {
        Self {
            scores: Vec::new(),
            window: window.max(2),
        }
    }

    /// Record a new observation.
    pub fn record(&mut self, score: f64) {
        self.scores.push(clamp_score(score));
        if self.scores.len() > self.window {
            self.scores.remove(0);
        }
    }

    /// Average change per cycle across the window: `(last - first) / (n - 1)`.
    /// Zero with fewer than two observations.
    pub fn momentum(&self) -> f64 {
        let n = self.scores.len();
        if n < 2 {
            return 0.0;
        }
        (self.scores[n - 1] - self.scores[0]) / (n - 1) as f64
    }

    pub fn direction(&self) -> MomentumDirection {
        let momentum = self.momentum();
        if momentum > STABLE_BAND {
            MomentumDirection::Rising
        } else if momentum < -STABLE_BAND {
            MomentumDirection::Falling
        } else {
            MomentumDirection::Stable
        }
    }

    pub fn history(&self) -> &[f64] {
        &self.scores
    }
}

impl Default for MomentumTracker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insufficient_data_is_stable() {
        let mut tracker = MomentumTracker::new();
        assert_eq!(tracker.direction(), MomentumDirection::Stable);
        tracker.record(40.0);
        assert_eq!(tracker.momentum(), 0.0);
    }

    #[test]
    fn rising_scores() {
        let mut tracker = MomentumTracker::new();
        for score in [20.0, 30.0, 40.0] {
            tracker.record(score);
        }
        assert_eq!(tracker.momentum(), 10.0);
        assert_eq!(tracker.direction(), MomentumDirection::Rising);
    }

    #[test]
    fn window_keeps_only_recent_scores() {
        let mut tracker = MomentumTracker::with_window(3);
        for score in [90.0, 10.0, 20.0, 30.0] {
            tracker.record(score);
        }
        assert_eq!(tracker.history(), &[10.0, 20.0, 30.0]);
        assert_eq!(tracker.momentum(), 10.0);
    }

    #[test]
    fn falling_and_flat_scores() {
        let mut falling = MomentumTracker::new();
        for score in [60.0, 50.0] {
            falling.record(score);
        }
        assert_eq!(falling.direction(), MomentumDirection::Falling);

        let mut flat = MomentumTracker::new();
        for score in [50.0, 50.2] {
            flat.record(score);
        }
        assert_eq!(flat.direction(), MomentumDirection::Stable);
    }
}
