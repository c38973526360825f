//! Points, sizes, rectangles and insets in layout units.
//!
//! Everything is `f64` and `Copy`. Coordinates grow right (x) and down (y);
//! the origin of the scrollable surface is `(0, 0)`.

#[cfg(not(feature = "std"))]
#[allow(unused_imports)]
use num_traits::Float;

/// Tolerance for "same line" and alignment comparisons.
pub const EPSILON: f64 = 1e-6;

/// Whether two coordinates are equal within [`EPSILON`].
pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() <= EPSILON
}

/// A position on the layout surface.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Point {
    /// Horizontal position, growing right.
    pub x: f64,
    /// Vertical position, growing down.
    pub y: f64,
}

impl Point {
    /// The surface origin.
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// Create a new point.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Width × height in layout units.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Size {
    /// Width (x extent).
    pub width: f64,
    /// Height (y extent).
    pub height: f64,
}

impl Size {
    /// Zero width and height.
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// Create a new size.
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Replace non-finite or negative components with zero.
    ///
    /// Sizes come from the host; a bogus measurement still yields a placed
    /// (zero-sized) region instead of poisoning every later coordinate.
    pub fn sanitized(self) -> Self {
        Self {
            width: non_negative(self.width),
            height: non_negative(self.height),
        }
    }

    /// Component-wise maximum.
    pub fn max(self, other: Self) -> Self {
        Self {
            width: self.width.max(other.width),
            height: self.height.max(other.height),
        }
    }
}

/// Axis-aligned rectangle.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Rect {
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    /// Width (x extent).
    pub width: f64,
    /// Height (y extent).
    pub height: f64,
}

impl Rect {
    /// Empty rect at the origin.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// Create a new rect.
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Top-left corner.
    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Width and height.
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Right edge.
    pub fn max_x(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge.
    pub fn max_y(&self) -> f64 {
        self.y + self.height
    }

    /// Bottom-right corner.
    pub fn far_corner(&self) -> Point {
        Point::new(self.max_x(), self.max_y())
    }

    /// Whether the rect has no area.
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Whether the two rects share a region of positive area.
    ///
    /// Touching edges do not intersect, and empty rects intersect nothing.
    pub fn intersects(&self, other: &Rect) -> bool {
        !self.is_empty()
            && !other.is_empty()
            && self.x < other.max_x()
            && other.x < self.max_x()
            && self.y < other.max_y()
            && other.y < self.max_y()
    }

    /// Whether `other` lies entirely inside `self` (edges inclusive).
    pub fn contains_rect(&self, other: &Rect) -> bool {
        other.x >= self.x - EPSILON
            && other.y >= self.y - EPSILON
            && other.max_x() <= self.max_x() + EPSILON
            && other.max_y() <= self.max_y() + EPSILON
    }

    /// Smallest rect covering both.
    pub fn union(&self, other: &Rect) -> Rect {
        let x = self.x.min(other.x);
        let y = self.y.min(other.y);
        let max_x = self.max_x().max(other.max_x());
        let max_y = self.max_y().max(other.max_y());
        Rect::new(x, y, max_x - x, max_y - y)
    }

    /// Grow by `margin` on every side.
    pub fn inflate(&self, margin: f64) -> Rect {
        Rect::new(
            self.x - margin,
            self.y - margin,
            self.width + 2.0 * margin,
            self.height + 2.0 * margin,
        )
    }
}

/// Section insets, ordered top, left, bottom, right.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Insets {
    pub top: f64,
    pub left: f64,
    pub bottom: f64,
    pub right: f64,
}

impl Insets {
    /// No insets.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// Create insets (top, left, bottom, right).
    pub const fn new(top: f64, left: f64, bottom: f64, right: f64) -> Self {
        Self {
            top,
            left,
            bottom,
            right,
        }
    }

    /// The same inset on all four sides.
    pub const fn uniform(inset: f64) -> Self {
        Self::new(inset, inset, inset, inset)
    }

    pub(crate) fn sanitized(self) -> Self {
        Self {
            top: non_negative(self.top),
            left: non_negative(self.left),
            bottom: non_negative(self.bottom),
            right: non_negative(self.right),
        }
    }
}

/// Clamp to `0.0..` and map NaN/infinity to zero.
pub(crate) fn non_negative(v: f64) -> f64 {
    if v.is_finite() && v > 0.0 { v } else { 0.0 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_rejects_garbage() {
        let s = Size::new(f64::NAN, -4.0).sanitized();
        assert_eq!(s, Size::ZERO);
        let s = Size::new(f64::INFINITY, 12.5).sanitized();
        assert_eq!(s, Size::new(0.0, 12.5));
    }

    #[test]
    fn intersects_excludes_touching_edges() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(10.0, 0.0, 10.0, 10.0);
        assert!(!a.intersects(&b));
        let c = Rect::new(9.0, 9.0, 10.0, 10.0);
        assert!(a.intersects(&c));
    }

    #[test]
    fn empty_rect_intersects_nothing() {
        let a = Rect::new(0.0, 0.0, 100.0, 100.0);
        assert!(!a.intersects(&Rect::new(5.0, 5.0, 0.0, 10.0)));
        assert!(!Rect::ZERO.intersects(&a));
    }

    #[test]
    fn union_and_inflate() {
        let a = Rect::new(10.0, 10.0, 40.0, 30.0);
        let b = Rect::new(60.0, 50.0, 50.0, 30.0);
        let u = a.union(&b);
        assert_eq!(u, Rect::new(10.0, 10.0, 100.0, 70.0));
        assert_eq!(u.inflate(5.0), Rect::new(5.0, 5.0, 110.0, 80.0));
        assert!(u.inflate(5.0).contains_rect(&a));
        assert!(u.contains_rect(&b));
    }

    #[test]
    fn approx_eq_tolerates_rounding() {
        assert!(approx_eq(0.1 + 0.2, 0.3));
        assert!(!approx_eq(1.0, 1.001));
    }
}
