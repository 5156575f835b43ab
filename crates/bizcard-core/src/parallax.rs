//! Background glow parallax.

use crate::geometry::{Point, Size};

/// Pixel offset of the background glow from its resting place
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GlowOffset {
    pub x: f64,
    pub y: f64,
}

impl GlowOffset {
    /// Offset proportional to the pointer's distance from the viewport center.
    pub fn from_pointer(pointer: Point, viewport: Size, factor: f64) -> Self {
        let center = viewport.center();
        Self {
            x: (pointer.x - center.x) * factor,
            y: (pointer.y - center.y) * factor,
        }
    }

    /// CSS transform keeping the glow centered on its anchor.
    pub fn transform_css(&self) -> String {
        format!(
            "translate(calc(-50% + {}px), calc(-50% + {}px))",
            self.x, self.y
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_is_zero() {
        let offset = GlowOffset::from_pointer(
            Point::new(640.0, 360.0),
            Size::new(1280.0, 720.0),
            0.02,
        );
        assert_eq!(offset, GlowOffset::default());
        assert_eq!(
            offset.transform_css(),
            "translate(calc(-50% + 0px), calc(-50% + 0px))"
        );
    }

    #[test]
    fn test_resized_viewport_recenters() {
        let pointer = Point::new(700.0, 450.0);

        let before = GlowOffset::from_pointer(pointer, Size::new(900.0, 640.0), 0.02);
        assert!((before.x - 5.0).abs() < 1e-9);
        assert!((before.y - 2.6).abs() < 1e-9);

        // Window grown to 1400x900 (2x HiDPI): the pointer is now dead center
        let viewport = Size::from_physical(2800, 1800, 2.0);
        let after = GlowOffset::from_pointer(pointer, viewport, 0.02);
        assert_eq!(after, GlowOffset::default());
    }

    #[test]
    fn test_offset_scales_with_distance() {
        let offset = GlowOffset::from_pointer(
            Point::new(1140.0, 60.0),
            Size::new(1280.0, 720.0),
            0.02,
        );
        assert!((offset.x - 10.0).abs() < 1e-9);
        assert!((offset.y + 6.0).abs() < 1e-9);
    }
}
