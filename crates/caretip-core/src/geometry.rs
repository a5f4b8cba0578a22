#![forbid(unsafe_code)]

//! Geometric value types.
//!
//! Integer types ([`IntRect`], [`IntSize`], [`IntOffset`]) use viewport pixel
//! coordinates with the origin at the top-left and y growing downward. They
//! are signed because popup coordinates are computed before clamping and may
//! fall off the negative edges of the viewport.
//!
//! Floating-point types ([`Size`], [`Offset`]) carry measured layout units
//! for caret outlines drawn in bubble-local space.

/// An integer rectangle described by its four edges.
///
/// `right` and `bottom` are exclusive. Inverted rects (right < left) are
/// representable and report a negative width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct IntRect {
    /// Left edge (inclusive).
    pub left: i32,
    /// Top edge (inclusive).
    pub top: i32,
    /// Right edge (exclusive).
    pub right: i32,
    /// Bottom edge (exclusive).
    pub bottom: i32,
}

impl IntRect {
    /// Create a rectangle from its edges.
    #[inline]
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Create a rectangle at `origin` with the given size.
    #[inline]
    pub const fn from_origin_size(origin: IntOffset, size: IntSize) -> Self {
        Self::new(
            origin.x,
            origin.y,
            origin.x.saturating_add(size.width),
            origin.y.saturating_add(size.height),
        )
    }

    #[inline]
    pub const fn width(&self) -> i32 {
        self.right.saturating_sub(self.left)
    }

    #[inline]
    pub const fn height(&self) -> i32 {
        self.bottom.saturating_sub(self.top)
    }

    #[inline]
    pub const fn size(&self) -> IntSize {
        IntSize::new(self.width(), self.height())
    }

    /// Top-left corner.
    #[inline]
    pub const fn top_left(&self) -> IntOffset {
        IntOffset::new(self.left, self.top)
    }

    /// Check if the rectangle has zero (or negative) area.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.right <= self.left || self.bottom <= self.top
    }

    /// Check if a point is inside the rectangle.
    #[inline]
    pub const fn contains(&self, point: IntOffset) -> bool {
        point.x >= self.left && point.x < self.right && point.y >= self.top && point.y < self.bottom
    }

    /// Check if `other` lies entirely inside this rectangle.
    #[inline]
    pub const fn contains_rect(&self, other: &IntRect) -> bool {
        other.left >= self.left
            && other.top >= self.top
            && other.right <= self.right
            && other.bottom <= self.bottom
    }
}

/// An integer width/height pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct IntSize {
    pub width: i32,
    pub height: i32,
}

impl IntSize {
    pub const ZERO: Self = Self::new(0, 0);

    #[inline]
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Check if either dimension is zero or negative.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }
}

impl From<(i32, i32)> for IntSize {
    fn from((width, height): (i32, i32)) -> Self {
        Self::new(width, height)
    }
}

/// An integer (x, y) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct IntOffset {
    pub x: i32,
    pub y: i32,
}

impl IntOffset {
    pub const ZERO: Self = Self::new(0, 0);

    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<(i32, i32)> for IntOffset {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl From<IntOffset> for (i32, i32) {
    fn from(offset: IntOffset) -> Self {
        (offset.x, offset.y)
    }
}

/// A floating-point width/height pair in layout units.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const ZERO: Self = Self::new(0.0, 0.0);

    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

impl From<IntSize> for Size {
    fn from(size: IntSize) -> Self {
        Self::new(size.width as f32, size.height as f32)
    }
}

/// A floating-point (x, y) pair in layout units.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Offset {
    pub x: f32,
    pub y: f32,
}

impl Offset {
    pub const ZERO: Self = Self::new(0.0, 0.0);

    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl From<IntOffset> for Offset {
    fn from(offset: IntOffset) -> Self {
        Self::new(offset.x as f32, offset.y as f32)
    }
}

impl From<(f32, f32)> for Offset {
    fn from((x, y): (f32, f32)) -> Self {
        Self::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::{IntOffset, IntRect, IntSize, Offset, Size};

    // --- IntRect ---

    #[test]
    fn rect_edges_and_dimensions() {
        let r = IntRect::new(10, 20, 50, 30);
        assert_eq!(r.width(), 40);
        assert_eq!(r.height(), 10);
        assert_eq!(r.size(), IntSize::new(40, 10));
        assert_eq!(r.top_left(), IntOffset::new(10, 20));
    }

    #[test]
    fn rect_from_origin_size() {
        let r = IntRect::from_origin_size(IntOffset::new(-5, 3), IntSize::new(10, 4));
        assert_eq!(r, IntRect::new(-5, 3, 5, 7));
    }

    #[test]
    fn rect_inverted_has_negative_width() {
        let r = IntRect::new(50, 0, 10, 5);
        assert_eq!(r.width(), -40);
        assert!(r.is_empty());
    }

    #[test]
    fn rect_is_empty() {
        assert!(IntRect::new(0, 0, 0, 0).is_empty());
        assert!(IntRect::new(5, 5, 5, 10).is_empty());
        assert!(IntRect::new(5, 5, 10, 5).is_empty());
        assert!(!IntRect::new(0, 0, 1, 1).is_empty());
    }

    #[test]
    fn rect_contains_boundary_conditions() {
        let r = IntRect::new(0, 0, 5, 5);
        assert!(r.contains(IntOffset::new(0, 0)));
        assert!(r.contains(IntOffset::new(4, 4)));
        // Right and bottom edges are exclusive
        assert!(!r.contains(IntOffset::new(5, 0)));
        assert!(!r.contains(IntOffset::new(0, 5)));
        assert!(!r.contains(IntOffset::new(-1, 0)));
    }

    #[test]
    fn rect_contains_rect() {
        let outer = IntRect::new(0, 0, 200, 200);
        assert!(outer.contains_rect(&IntRect::new(10, 10, 40, 30)));
        assert!(outer.contains_rect(&outer));
        assert!(!outer.contains_rect(&IntRect::new(190, 10, 220, 30)));
    }

    #[test]
    fn rect_dimensions_saturate_at_extremes() {
        let r = IntRect::new(i32::MIN, i32::MIN, i32::MAX, i32::MAX);
        assert_eq!(r.width(), i32::MAX);
        assert_eq!(r.height(), i32::MAX);
    }

    // --- IntSize / IntOffset ---

    #[test]
    fn int_size_is_empty() {
        assert!(IntSize::ZERO.is_empty());
        assert!(IntSize::new(-1, 10).is_empty());
        assert!(!IntSize::new(1, 1).is_empty());
    }

    #[test]
    fn int_offset_tuple_conversions() {
        let a = IntOffset::from((1, -2));
        assert_eq!(a, IntOffset::new(1, -2));
        assert_eq!(<(i32, i32)>::from(a), (1, -2));
        assert_eq!(IntSize::from((3, 4)), IntSize::new(3, 4));
    }

    #[test]
    fn from_origin_size_saturates() {
        let r = IntRect::from_origin_size(IntOffset::new(i32::MAX, i32::MIN), IntSize::new(1, -1));
        assert_eq!(r, IntRect::new(i32::MAX, i32::MIN, i32::MAX, i32::MIN));
    }

    // --- Float types ---

    #[test]
    fn float_conversions() {
        assert_eq!(Size::from(IntSize::new(100, 40)), Size::new(100.0, 40.0));
        assert_eq!(Offset::from(IntOffset::new(-3, 7)), Offset::new(-3.0, 7.0));
        assert_eq!(Offset::from((1.5, 2.5)), Offset::new(1.5, 2.5));
    }

    #[test]
    fn float_defaults_are_zero() {
        assert_eq!(Offset::default(), Offset::ZERO);
        assert_eq!(Size::default(), Size::ZERO);
    }
}
