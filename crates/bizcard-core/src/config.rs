//! Timing and motion constants for the card.

use std::time::Duration;

/// Motion and timing configuration shared by the card view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardConfig {
    /// Maximum yaw (rotateY) in degrees, reached at the left/right edge
    pub max_yaw: f64,
    /// Maximum pitch (rotateX) in degrees, reached at the top/bottom edge
    pub max_pitch: f64,
    /// Fraction of the remaining distance covered each frame
    pub smoothing: f64,
    /// Animation frame cadence
    pub frame_interval: Duration,
    /// Ease-out duration when the card springs back to neutral
    pub reset_transition: Duration,
    /// Ease-out duration while tracking the pointer
    pub tracking_transition: Duration,
    /// How long "Copied!" stays visible
    pub copy_ack: Duration,
    /// Delay between the seal click and its removal
    pub scratch: Duration,
    /// Background glow offset per pixel of pointer distance from center
    pub parallax_factor: f64,
}

impl Default for CardConfig {
    fn default() -> Self {
        Self {
            max_yaw: 20.0,
            max_pitch: 15.0,
            smoothing: 0.1,
            frame_interval: Duration::from_millis(16),
            reset_transition: Duration::from_millis(500),
            tracking_transition: Duration::from_millis(100),
            copy_ack: Duration::from_millis(1500),
            scratch: Duration::from_millis(600),
            parallax_factor: 0.02,
        }
    }
}

impl CardConfig {
    /// CSS `transition` value used while the card follows the pointer.
    pub fn tracking_transition_css(&self) -> String {
        transition_css(self.tracking_transition)
    }

    /// CSS `transition` value used while the card springs back.
    pub fn reset_transition_css(&self) -> String {
        transition_css(self.reset_transition)
    }
}

fn transition_css(duration: Duration) -> String {
    format!("transform {}s ease-out", duration.as_secs_f64())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transition_css() {
        let config = CardConfig::default();
        assert_eq!(config.tracking_transition_css(), "transform 0.1s ease-out");
        assert_eq!(config.reset_transition_css(), "transform 0.5s ease-out");
    }

    #[test]
    fn test_default_timings() {
        let config = CardConfig::default();
        assert_eq!(config.copy_ack, Duration::from_millis(1500));
        assert_eq!(config.scratch, Duration::from_millis(600));
        assert!(config.smoothing > 0.0 && config.smoothing < 1.0);
    }
}
