//! Pointer-driven pseudo-3D tilt.
//!
//! The pointer position sets a *target* rotation proportional to its offset
//! from the card's center. Each animation frame moves the *current* rotation
//! a fixed fraction of the way towards the target, which gives the card its
//! lag. Leaving the card snaps everything back to neutral and freezes
//! updates until the pointer re-enters.

use crate::config::CardConfig;
use crate::geometry::{Bounds, Point};

/// Card rotation in degrees
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rotation {
    /// rotateY, positive when the pointer is right of center
    pub yaw: f64,
    /// rotateX, positive when the pointer is above center
    pub pitch: f64,
}

impl Rotation {
    pub const NEUTRAL: Rotation = Rotation { yaw: 0.0, pitch: 0.0 };

    /// CSS transform for this rotation.
    pub fn transform_css(&self) -> String {
        format!("rotateY({}deg) rotateX({}deg)", self.yaw, self.pitch)
    }
}

/// Handle for the transition restore scheduled by one pointer exit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpringBack(u64);

/// Smoothed tilt state owned by one card view.
#[derive(Debug, Clone, PartialEq)]
pub struct TiltTracker {
    max_yaw: f64,
    max_pitch: f64,
    smoothing: f64,
    hovering: bool,
    current: Rotation,
    target: Rotation,
    springing: bool,
    exits: u64,
}

impl TiltTracker {
    pub fn new(config: &CardConfig) -> Self {
        Self {
            max_yaw: config.max_yaw.abs(),
            max_pitch: config.max_pitch.abs(),
            smoothing: config.smoothing.clamp(0.0, 1.0),
            hovering: false,
            current: Rotation::NEUTRAL,
            target: Rotation::NEUTRAL,
            springing: false,
            exits: 0,
        }
    }

    pub fn is_hovering(&self) -> bool {
        self.hovering
    }

    pub fn current(&self) -> Rotation {
        self.current
    }

    pub fn target(&self) -> Rotation {
        self.target
    }

    /// Pointer entered the card area.
    pub fn enter(&mut self) {
        self.hovering = true;
    }

    /// Whether the slow spring-back transition is in effect.
    pub fn is_springing_back(&self) -> bool {
        self.springing
    }

    /// Pointer left the card area: reset to neutral and stop tracking.
    ///
    /// The card springs back with the slow transition; pass the returned
    /// handle to [`TiltTracker::finish_spring_back`] once it has elapsed.
    pub fn leave(&mut self) -> SpringBack {
        self.hovering = false;
        self.current = Rotation::NEUTRAL;
        self.target = Rotation::NEUTRAL;
        self.springing = true;
        self.exits = self.exits.wrapping_add(1);
        SpringBack(self.exits)
    }

    /// Restore the tracking transition, unless a later exit restarted the
    /// spring-back.
    pub fn finish_spring_back(&mut self, handle: SpringBack) -> bool {
        if handle.0 != self.exits || !self.springing {
            return false;
        }
        self.springing = false;
        true
    }

    /// Recompute the target from a pointer position over `bounds`.
    ///
    /// Returns `false` when the move was ignored (not hovering, or the
    /// bounds have no area).
    pub fn pointer_moved(&mut self, bounds: Bounds, pointer: Point) -> bool {
        if !self.hovering {
            return false;
        }
        let Some((nx, ny)) = bounds.normalized_offset(pointer) else {
            return false;
        };
        self.target = Rotation {
            yaw: nx * self.max_yaw,
            pitch: -ny * self.max_pitch,
        };
        true
    }

    /// Advance one animation frame.
    ///
    /// Returns the new rotation while hovering, `None` otherwise.
    pub fn tick(&mut self) -> Option<Rotation> {
        if !self.hovering {
            return None;
        }
        self.current.yaw += (self.target.yaw - self.current.yaw) * self.smoothing;
        self.current.pitch += (self.target.pitch - self.current.pitch) * self.smoothing;
        Some(self.current)
    }
}

impl Default for TiltTracker {
    fn default() -> Self {
        Self::new(&CardConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card_bounds() -> Bounds {
        Bounds::new(100.0, 100.0, 400.0, 250.0)
    }

    #[test]
    fn test_neutral_transform() {
        assert_eq!(
            Rotation::NEUTRAL.transform_css(),
            "rotateY(0deg) rotateX(0deg)"
        );
    }

    #[test]
    fn test_move_ignored_when_not_hovering() {
        let mut tilt = TiltTracker::default();
        assert!(!tilt.pointer_moved(card_bounds(), Point::new(500.0, 100.0)));
        assert_eq!(tilt.target(), Rotation::NEUTRAL);
        assert_eq!(tilt.tick(), None);
    }

    #[test]
    fn test_corner_targets_hit_bounds() {
        let mut tilt = TiltTracker::default();
        tilt.enter();

        // Top-right corner: full yaw right, full pitch up
        assert!(tilt.pointer_moved(card_bounds(), Point::new(500.0, 100.0)));
        assert_eq!(tilt.target(), Rotation { yaw: 20.0, pitch: 15.0 });

        // Bottom-left corner
        tilt.pointer_moved(card_bounds(), Point::new(100.0, 350.0));
        assert_eq!(tilt.target(), Rotation { yaw: -20.0, pitch: -15.0 });
    }

    #[test]
    fn test_tick_moves_fraction_of_distance() {
        let mut tilt = TiltTracker::default();
        tilt.enter();
        tilt.pointer_moved(card_bounds(), Point::new(500.0, 225.0));

        let first = tilt.tick().unwrap();
        assert!((first.yaw - 2.0).abs() < 1e-9);

        let second = tilt.tick().unwrap();
        assert!((second.yaw - 3.8).abs() < 1e-9);
        assert!(second.yaw < tilt.target().yaw);
    }

    #[test]
    fn test_leave_resets_and_freezes() {
        let mut tilt = TiltTracker::default();
        tilt.enter();
        tilt.pointer_moved(card_bounds(), Point::new(450.0, 150.0));
        for _ in 0..10 {
            tilt.tick();
        }
        assert_ne!(tilt.current(), Rotation::NEUTRAL);

        tilt.leave();
        assert!(!tilt.is_hovering());
        assert_eq!(tilt.current(), Rotation::NEUTRAL);
        assert_eq!(tilt.target(), Rotation::NEUTRAL);
        assert_eq!(tilt.tick(), None);
    }

    #[test]
    fn test_target_follows_resized_bounds() {
        let mut tilt = TiltTracker::default();
        tilt.enter();
        tilt.pointer_moved(Bounds::new(0.0, 0.0, 400.0, 250.0), Point::new(350.0, 225.0));
        assert!(tilt.target().yaw > 0.0);

        // Same pointer, card re-laid out so it is now centered under it
        tilt.pointer_moved(Bounds::new(150.0, 100.0, 400.0, 250.0), Point::new(350.0, 225.0));
        assert_eq!(tilt.target().yaw, 0.0);
        assert_eq!(tilt.target().pitch, 0.0);
    }

    #[test]
    fn test_stale_spring_back_ignored() {
        let mut tilt = TiltTracker::default();
        tilt.enter();
        let first = tilt.leave();
        tilt.enter();
        let second = tilt.leave();

        assert!(!tilt.finish_spring_back(first));
        assert!(tilt.is_springing_back());
        assert!(tilt.finish_spring_back(second));
        assert!(!tilt.is_springing_back());
        assert!(!tilt.finish_spring_back(second));
    }

    #[test]
    fn test_reentry_starts_from_neutral() {
        let mut tilt = TiltTracker::default();
        tilt.enter();
        tilt.pointer_moved(card_bounds(), Point::new(500.0, 100.0));
        tilt.tick();
        tilt.leave();

        tilt.enter();
        let r = tilt.tick().unwrap();
        assert_eq!(r, Rotation::NEUTRAL);
    }
}
