use crate::coords::{Rect, Transform};
use crate::geom::Shape;
use crate::paint::{PaintParams, StrokeParams};
use crate::draw::{DrawList, DrawOp, DrawOrder};

/// Stroke of the shape's outline.
#[derive(Debug, Clone, PartialEq)]
pub struct StrokeOp {
    pub shape: Shape,
    pub stroke: StrokeParams,
}

impl DrawList {
    /// Records a stroke of `shape` with `stroke`.
    #[inline]
    pub fn stroke_path(
        &mut self,
        transform: Transform,
        shape: Shape,
        stroke: StrokeParams,
        scissor: Rect,
        order: DrawOrder,
        paint: Option<PaintParams>,
    ) {
        self.record(transform, DrawOp::Stroke(StrokeOp { shape, stroke }), scissor, order, paint);
    }
}
