use crate::coords::{Rect, Transform};
use crate::paint::PaintParams;

use super::{DrawOp, DrawOrder};

/// A single recorded draw.
#[derive(Debug, Clone, PartialEq)]
pub struct Draw {
    /// Local-to-device transform applied to the shape.
    pub transform: Transform,
    pub op: DrawOp,
    /// Device-space scissor rect. Nothing outside it is touched.
    pub scissor: Rect,
    pub order: DrawOrder,
    /// `None` means the draw only writes depth/stencil.
    pub paint: Option<PaintParams>,
}

/// Append-only buffer of draws for one in-progress batch.
///
/// Recording does no validation or culling: draws are kept exactly in call
/// order until the list is consumed by `DrawPass::new`.
#[derive(Debug, Default)]
pub struct DrawList {
    draws: Vec<Draw>,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of recorded draws.
    #[inline]
    pub fn len(&self) -> usize {
        self.draws.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.draws.is_empty()
    }

    /// Draws in call order.
    #[inline]
    pub fn draws(&self) -> &[Draw] {
        &self.draws
    }

    #[inline]
    pub fn into_draws(self) -> Vec<Draw> {
        self.draws
    }

    pub(crate) fn record(
        &mut self,
        transform: Transform,
        op: DrawOp,
        scissor: Rect,
        order: DrawOrder,
        paint: Option<PaintParams>,
    ) {
        log::trace!("record draw #{} {:?} at order {}", self.draws.len(), op_name(&op), order.0);
        self.draws.push(Draw { transform, op, scissor, order, paint });
    }
}

fn op_name(op: &DrawOp) -> &'static str {
    match op {
        DrawOp::StencilFill(_) => "stencil-fill",
        DrawOp::ConvexFill(_) => "convex-fill",
        DrawOp::Stroke(_) => "stroke",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::Shape;
    use crate::paint::{Color, StrokeParams};

    fn scissor() -> Rect {
        Rect::new(0.0, 0.0, 100.0, 100.0)
    }

    #[test]
    fn records_in_call_order() {
        let mut list = DrawList::new();
        let shape = Shape::rect(Rect::new(0.0, 0.0, 10.0, 10.0));

        list.fill_convex_path(
            Transform::IDENTITY,
            shape.clone(),
            scissor(),
            DrawOrder::new(7),
            None,
        );
        list.stroke_path(
            Transform::IDENTITY,
            shape.clone(),
            StrokeParams::default(),
            scissor(),
            DrawOrder::new(2),
            Some(PaintParams::solid(Color::BLACK)),
        );
        list.stencil_and_fill_path(Transform::IDENTITY, shape, scissor(), DrawOrder::new(5), None);

        let kinds: Vec<_> = list.draws().iter().map(|d| op_name(&d.op)).collect();
        assert_eq!(kinds, ["convex-fill", "stroke", "stencil-fill"]);
        let orders: Vec<_> = list.draws().iter().map(|d| d.order.0).collect();
        assert_eq!(orders, [7, 2, 5]);
    }

    #[test]
    fn len_counts_every_record() {
        let mut list = DrawList::new();
        assert!(list.is_empty());
        for i in 0..3 {
            list.fill_convex_path(
                Transform::IDENTITY,
                Shape::rect(Rect::new(0.0, 0.0, 1.0, 1.0)),
                scissor(),
                DrawOrder::new(i),
                None,
            );
        }
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn recording_does_not_validate_geometry() {
        let mut list = DrawList::new();
        let bad = Transform { sx: f32::NAN, ..Transform::IDENTITY };
        list.stencil_and_fill_path(
            bad,
            Shape::rect(Rect::default()),
            Rect::default(),
            DrawOrder::default(),
            None,
        );
        assert_eq!(list.len(), 1);
    }
}
