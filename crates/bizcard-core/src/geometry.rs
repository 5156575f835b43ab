//! Screen-space primitives in CSS pixels.

/// A position in client coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Width and height
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Logical size of a `width`×`height` physical-pixel surface.
    ///
    /// A non-positive or non-finite scale factor is treated as 1.0.
    pub fn from_physical(width: u32, height: u32, scale_factor: f64) -> Self {
        let scale = if scale_factor.is_finite() && scale_factor > 0.0 {
            scale_factor
        } else {
            1.0
        };
        Self::new(f64::from(width) / scale, f64::from(height) / scale)
    }

    pub fn center(&self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }

    /// True when either side is zero, negative or NaN.
    pub fn is_degenerate(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }
}

/// An element's bounding box in client coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Bounds {
    pub origin: Point,
    pub size: Size,
}

impl Bounds {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            origin: Point::new(x, y),
            size: Size::new(width, height),
        }
    }

    pub fn center(&self) -> Point {
        Point::new(
            self.origin.x + self.size.width / 2.0,
            self.origin.y + self.size.height / 2.0,
        )
    }

    /// Offset of `point` from the center, scaled so the edges map to ±1.
    ///
    /// Points outside the box are clamped to the edge. Returns `None` for a
    /// degenerate box.
    pub fn normalized_offset(&self, point: Point) -> Option<(f64, f64)> {
        if self.size.is_degenerate() {
            return None;
        }
        let center = self.center();
        let nx = (point.x - center.x) / (self.size.width / 2.0);
        let ny = (point.y - center.y) / (self.size.height / 2.0);
        Some((nx.clamp(-1.0, 1.0), ny.clamp(-1.0, 1.0)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center() {
        let b = Bounds::new(10.0, 20.0, 100.0, 50.0);
        assert_eq!(b.center(), Point::new(60.0, 45.0));
    }

    #[test]
    fn test_normalized_offset_edges() {
        let b = Bounds::new(0.0, 0.0, 200.0, 100.0);
        assert_eq!(b.normalized_offset(Point::new(100.0, 50.0)), Some((0.0, 0.0)));
        assert_eq!(b.normalized_offset(Point::new(200.0, 0.0)), Some((1.0, -1.0)));
        assert_eq!(b.normalized_offset(Point::new(0.0, 100.0)), Some((-1.0, 1.0)));
    }

    #[test]
    fn test_normalized_offset_clamps_outside() {
        let b = Bounds::new(0.0, 0.0, 200.0, 100.0);
        assert_eq!(b.normalized_offset(Point::new(900.0, -400.0)), Some((1.0, -1.0)));
    }

    #[test]
    fn test_from_physical() {
        assert_eq!(Size::from_physical(2800, 1800, 2.0), Size::new(1400.0, 900.0));
        assert_eq!(Size::from_physical(900, 640, 0.0), Size::new(900.0, 640.0));
        assert_eq!(Size::from_physical(900, 640, f64::NAN), Size::new(900.0, 640.0));
    }

    #[test]
    fn test_degenerate_bounds() {
        assert_eq!(Bounds::new(0.0, 0.0, 0.0, 10.0).normalized_offset(Point::default()), None);
        assert!(Size::new(f64::NAN, 1.0).is_degenerate());
    }
}
