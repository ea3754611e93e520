use crate::coords::{Rect, Transform};
use crate::geom::Shape;
use crate::paint::PaintParams;
use crate::draw::{DrawList, DrawOp, DrawOrder};

/// Single-pass fill of geometry the caller asserts is convex.
#[derive(Debug, Clone, PartialEq)]
pub struct ConvexFillOp {
    pub shape: Shape,
}

impl DrawList {
    /// Records a convex fill of `shape`. Convexity is not checked.
    #[inline]
    pub fn fill_convex_path(
        &mut self,
        transform: Transform,
        shape: Shape,
        scissor: Rect,
        order: DrawOrder,
        paint: Option<PaintParams>,
    ) {
        self.record(transform, DrawOp::ConvexFill(ConvexFillOp { shape }), scissor, order, paint);
    }
}
