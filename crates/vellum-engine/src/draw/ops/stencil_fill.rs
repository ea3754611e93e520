use crate::coords::{Rect, Transform};
use crate::geom::Shape;
use crate::paint::PaintParams;
use crate::draw::{DrawList, DrawOp, DrawOrder};

/// Stencil-then-cover fill; handles arbitrary (concave, self-intersecting) paths.
#[derive(Debug, Clone, PartialEq)]
pub struct StencilFillOp {
    pub shape: Shape,
}

impl DrawList {
    /// Records a stencil-and-fill of `shape`.
    #[inline]
    pub fn stencil_and_fill_path(
        &mut self,
        transform: Transform,
        shape: Shape,
        scissor: Rect,
        order: DrawOrder,
        paint: Option<PaintParams>,
    ) {
        self.record(transform, DrawOp::StencilFill(StencilFillOp { shape }), scissor, order, paint);
    }
}
