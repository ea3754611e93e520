use super::Vec2;

/// Axis-aligned rectangle (top-left origin, +Y down).
///
/// Used for shape bounds in local space and for scissor/device bounds after
/// the local-to-device transform has been applied.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    #[inline]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            origin: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    /// Builds a rect from its edges. Edges are not reordered.
    #[inline]
    pub fn from_ltrb(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self::new(left, top, right - left, bottom - top)
    }

    /// Smallest rect containing both corner points.
    #[inline]
    pub fn from_points(a: Vec2, b: Vec2) -> Self {
        let lo = a.min(b);
        let hi = a.max(b);
        Self::from_ltrb(lo.x, lo.y, hi.x, hi.y)
    }

    #[inline]
    pub fn left(self) -> f32 {
        self.origin.x
    }

    #[inline]
    pub fn top(self) -> f32 {
        self.origin.y
    }

    #[inline]
    pub fn right(self) -> f32 {
        self.origin.x + self.size.x
    }

    #[inline]
    pub fn bottom(self) -> f32 {
        self.origin.y + self.size.y
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        !(self.size.x > 0.0 && self.size.y > 0.0)
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.origin.is_finite() && self.size.is_finite()
    }

    /// Normalizes the rectangle so width/height are non-negative.
    #[inline]
    pub fn normalized(self) -> Self {
        Self::from_points(self.origin, self.origin + self.size)
    }

    /// Closed containment of another rect. Empty rects are never contained.
    #[inline]
    pub fn contains_rect(self, other: Rect) -> bool {
        let a = self.normalized();
        let b = other.normalized();
        !a.is_empty()
            && !b.is_empty()
            && b.left() >= a.left()
            && b.top() >= a.top()
            && b.right() <= a.right()
            && b.bottom() <= a.bottom()
    }

    #[inline]
    pub fn intersect(self, other: Rect) -> Option<Rect> {
        let a = self.normalized();
        let b = other.normalized();

        let x0 = a.left().max(b.left());
        let y0 = a.top().max(b.top());
        let x1 = a.right().min(b.right());
        let y1 = a.bottom().min(b.bottom());

        if x1 - x0 <= 0.0 || y1 - y0 <= 0.0 {
            None
        } else {
            Some(Rect::from_ltrb(x0, y0, x1, y1))
        }
    }

    /// Smallest rect containing both. An empty operand contributes nothing.
    #[inline]
    pub fn union(self, other: Rect) -> Rect {
        let a = self.normalized();
        let b = other.normalized();
        match (a.is_empty(), b.is_empty()) {
            (true, _) => b,
            (_, true) => a,
            _ => Rect::from_ltrb(
                a.left().min(b.left()),
                a.top().min(b.top()),
                a.right().max(b.right()),
                a.bottom().max(b.bottom()),
            ),
        }
    }

    /// Grows every edge outward by `d` (shrinks for negative `d`).
    #[inline]
    pub fn outset(self, d: f32) -> Rect {
        let r = self.normalized();
        Rect::from_ltrb(r.left() - d, r.top() - d, r.right() + d, r.bottom() + d)
    }

    /// The four corners in clockwise order starting top-left.
    #[inline]
    pub fn corners(self) -> [Vec2; 4] {
        [
            Vec2::new(self.left(), self.top()),
            Vec2::new(self.right(), self.top()),
            Vec2::new(self.right(), self.bottom()),
            Vec2::new(self.left(), self.bottom()),
        ]
    }
}
