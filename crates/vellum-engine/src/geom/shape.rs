use crate::coords::{CornerRadii, Rect, Vec2};

use super::Path;

/// Geometry recorded with a draw, in local coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Rect(Rect),
    RoundedRect { rect: Rect, radii: CornerRadii },
    Circle { center: Vec2, radius: f32 },
    Path(Path),
}

impl Shape {
    #[inline]
    pub fn rect(rect: Rect) -> Self {
        Shape::Rect(rect)
    }

    #[inline]
    pub fn rounded_rect(rect: Rect, radii: CornerRadii) -> Self {
        Shape::RoundedRect { rect, radii }
    }

    #[inline]
    pub fn circle(center: Vec2, radius: f32) -> Self {
        Shape::Circle { center, radius }
    }

    /// Local-space bounds.
    pub fn bounds(&self) -> Rect {
        match self {
            Shape::Rect(r) | Shape::RoundedRect { rect: r, .. } => r.normalized(),
            Shape::Circle { center, radius } => {
                let r = radius.max(0.0);
                Rect::from_ltrb(center.x - r, center.y - r, center.x + r, center.y + r)
            }
            Shape::Path(p) => p.bounds(),
        }
    }

    /// Returns the rect when the shape covers exactly its bounds.
    pub fn as_rect(&self) -> Option<Rect> {
        match self {
            Shape::Rect(r) => Some(r.normalized()),
            Shape::RoundedRect { rect, radii } if radii.is_zero() => Some(rect.normalized()),
            _ => None,
        }
    }
}

impl From<Rect> for Shape {
    fn from(rect: Rect) -> Self {
        Shape::Rect(rect)
    }
}

impl From<Path> for Shape {
    fn from(path: Path) -> Self {
        Shape::Path(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn circle_bounds_are_square() {
        let s = Shape::circle(Vec2::new(10.0, 10.0), 5.0);
        assert_eq!(s.bounds(), Rect::new(5.0, 5.0, 10.0, 10.0));
    }

    #[test]
    fn square_cornered_rounded_rect_is_a_rect() {
        let r = Rect::new(0.0, 0.0, 4.0, 4.0);
        assert_eq!(Shape::rounded_rect(r, CornerRadii::all(0.0)).as_rect(), Some(r));
        assert_eq!(Shape::rounded_rect(r, CornerRadii::all(1.0)).as_rect(), None);
    }
}
