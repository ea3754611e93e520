use crate::coords::{Rect, Vec2};

/// Path construction verb. Points live in [`Path::points`].
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Verb {
    Move,
    Line,
    Quad,
    Cubic,
    Close,
}

impl Verb {
    /// Number of points the verb consumes.
    #[inline]
    pub const fn point_count(self) -> usize {
        match self {
            Verb::Move | Verb::Line => 1,
            Verb::Quad => 2,
            Verb::Cubic => 3,
            Verb::Close => 0,
        }
    }
}

/// Immutable-after-build vector path in local coordinates.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path {
    verbs: Vec<Verb>,
    points: Vec<Vec2>,
}

impl Path {
    pub fn builder() -> PathBuilder {
        PathBuilder::default()
    }

    /// Closed polygon through `points`.
    pub fn polygon(points: &[Vec2]) -> Path {
        let mut b = Path::builder();
        if let Some((first, rest)) = points.split_first() {
            b = b.move_to(*first);
            for p in rest {
                b = b.line_to(*p);
            }
            b = b.close();
        }
        b.build()
    }

    #[inline]
    pub fn verbs(&self) -> &[Verb] {
        &self.verbs
    }

    #[inline]
    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Bounds of all points including control points. Conservative for curves.
    pub fn bounds(&self) -> Rect {
        let Some((first, rest)) = self.points.split_first() else {
            return Rect::default();
        };
        let (lo, hi) = rest.iter().fold((*first, *first), |(lo, hi), p| (lo.min(*p), hi.max(*p)));
        Rect::from_points(lo, hi)
    }
}

/// Accumulates verbs and points for a [`Path`].
#[derive(Debug, Default)]
pub struct PathBuilder {
    path: Path,
}

impl PathBuilder {
    fn push(mut self, verb: Verb, pts: &[Vec2]) -> Self {
        debug_assert_eq!(pts.len(), verb.point_count());
        self.path.verbs.push(verb);
        self.path.points.extend_from_slice(pts);
        self
    }

    pub fn move_to(self, p: Vec2) -> Self {
        self.push(Verb::Move, &[p])
    }

    pub fn line_to(self, p: Vec2) -> Self {
        self.push(Verb::Line, &[p])
    }

    pub fn quad_to(self, c: Vec2, p: Vec2) -> Self {
        self.push(Verb::Quad, &[c, p])
    }

    pub fn cubic_to(self, c0: Vec2, c1: Vec2, p: Vec2) -> Self {
        self.push(Verb::Cubic, &[c0, c1, p])
    }

    pub fn close(self) -> Self {
        self.push(Verb::Close, &[])
    }

    pub fn build(self) -> Path {
        self.path
    }
}
