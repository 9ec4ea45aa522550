//! Rectangles.

use cgmath::{Point2, Vector2, Zero};

/// A rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    /// Rectangle origin.
    pub origin: Point2<f64>,

    /// Rectangle size.
    pub size: Vector2<f64>,
}

impl Rect {
    /// Creates a new rectangle.
    pub fn new(origin: Point2<f64>, size: Vector2<f64>) -> Rect {
        Rect { origin, size }
    }

    /// Creates a rectangle at the origin of a local coordinate system, i.e. a control’s own
    /// frame.
    pub fn local(width: f64, height: f64) -> Rect {
        Rect {
            origin: Point2::new(0., 0.),
            size: Vector2::new(width, height),
        }
    }

    /// Returns a zero-sized rectangle at the origin.
    pub fn zero() -> Rect {
        Rect {
            origin: Point2::new(0., 0.),
            size: Vector2::zero(),
        }
    }

    /// Returns true if the point is inside the rectangle.
    ///
    /// The minimum edges are inclusive and the maximum edges are exclusive, so a zero-sized
    /// rectangle contains nothing.
    pub fn contains(&self, point: Point2<f64>) -> bool {
        point.x >= self.origin.x
            && point.y >= self.origin.y
            && point.x < self.origin.x + self.size.x
            && point.y < self.origin.y + self.size.y
    }
}

impl Default for Rect {
    fn default() -> Rect {
        Rect::zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_is_half_open() {
        let rect = Rect::local(28., 28.);
        assert!(rect.contains(Point2::new(0., 0.)));
        assert!(rect.contains(Point2::new(27.9, 14.)));
        assert!(!rect.contains(Point2::new(28., 14.)));
        assert!(!rect.contains(Point2::new(14., -0.1)));
    }

    #[test]
    fn zero_rect_contains_nothing() {
        assert!(!Rect::zero().contains(Point2::new(0., 0.)));
    }

    #[test]
    fn offset_origin() {
        let rect = Rect::new(Point2::new(10., 20.), Vector2::new(5., 5.));
        assert!(rect.contains(Point2::new(12., 22.)));
        assert!(!rect.contains(Point2::new(2., 2.)));
    }
}
