use crate::geom::Shape;
use crate::paint::StrokeParams;

use super::ops::{ConvexFillOp, StencilFillOp, StrokeOp};

/// Geometric operation recorded by a draw.
///
/// Extending the set of operations:
/// - add a payload module under `draw::ops::*`
/// - add a new variant here
/// - implement the recording helper on `DrawList` inside that module
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    StencilFill(StencilFillOp),
    ConvexFill(ConvexFillOp),
    Stroke(StrokeOp),
}

impl DrawOp {
    #[inline]
    pub fn shape(&self) -> &Shape {
        match self {
            DrawOp::StencilFill(op) => &op.shape,
            DrawOp::ConvexFill(op) => &op.shape,
            DrawOp::Stroke(op) => &op.shape,
        }
    }

    #[inline]
    pub fn stroke(&self) -> Option<&StrokeParams> {
        match self {
            DrawOp::Stroke(op) => Some(&op.stroke),
            _ => None,
        }
    }

    /// True for operations that cover the interior of the shape.
    #[inline]
    pub fn is_fill(&self) -> bool {
        !matches!(self, DrawOp::Stroke(_))
    }

    /// True when the operation needs a stencil attachment to rasterize.
    #[inline]
    pub fn requires_stencil(&self) -> bool {
        matches!(self, DrawOp::StencilFill(_))
    }
}
