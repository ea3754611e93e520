use std::sync::Arc;

use crate::coords::Rect;
use crate::draw::{Draw, DrawList};
use crate::target::RenderTarget;

use super::{DrawCoverage, DrawUniforms, OcclusionCuller};

/// A draw that survived culling, with its clipped device bounds.
#[derive(Debug, Clone, PartialEq)]
pub struct PassDraw {
    pub draw: Draw,
    pub device_bounds: Rect,
}

/// Immutable, culled snapshot of one draw list, bound to a target.
///
/// Draws keep the exact order they were recorded in. Nothing can be added or
/// removed after construction.
#[derive(Debug)]
pub struct DrawPass {
    target: Arc<RenderTarget>,
    draws: Vec<PassDraw>,
    bounds: Rect,
    requires_stencil: bool,
    culled: usize,
    uniforms: Vec<DrawUniforms>,
}

impl DrawPass {
    /// Consumes `list` and builds the pass.
    ///
    /// Draws whose bounds miss their scissor or the target are dropped. The
    /// rest are offered to `culler` front to back; draws it reports occluded
    /// are dropped too.
    pub fn new(
        list: DrawList,
        target: Arc<RenderTarget>,
        culler: &mut dyn OcclusionCuller,
    ) -> Self {
        debug_assert!(!list.is_empty(), "DrawPass::new called with an empty draw list");

        let recorded = list.len();
        let target_bounds = target.bounds();

        let visible: Vec<(Draw, Rect)> = list
            .into_draws()
            .into_iter()
            .filter_map(|draw| {
                let bounds = device_bounds(&draw, target_bounds)?;
                Some((draw, bounds))
            })
            .collect();
        let offscreen = recorded - visible.len();

        culler.begin_pass(target_bounds);
        let mut keep = vec![true; visible.len()];
        for (i, (draw, bounds)) in visible.iter().enumerate().rev() {
            // Depth/stencil-only draws have no color to hide.
            if draw.paint.is_none() {
                continue;
            }
            let coverage = DrawCoverage {
                bounds: *bounds,
                order: draw.order,
                opaque_interior: opaque_interior(draw, *bounds),
            };
            keep[i] = !culler.is_occluded(&coverage);
        }

        let draws: Vec<PassDraw> = visible
            .into_iter()
            .zip(keep)
            .filter_map(|((draw, device_bounds), kept)| {
                kept.then_some(PassDraw { draw, device_bounds })
            })
            .collect();

        let culled = recorded - draws.len();
        let bounds = draws.iter().fold(Rect::default(), |acc, d| acc.union(d.device_bounds));
        let requires_stencil = draws.iter().any(|d| d.draw.op.requires_stencil());
        let uniforms = draws.iter().map(|d| DrawUniforms::new(&d.draw, d.device_bounds)).collect();

        if draws.is_empty() {
            log::warn!("draw pass for '{}' culled all {recorded} draws", target.label());
        } else {
            log::debug!(
                "snapped draw pass for '{}': {}/{recorded} draws kept \
                 ({offscreen} offscreen, {} occluded)",
                target.label(),
                draws.len(),
                culled - offscreen,
            );
        }

        Self { target, draws, bounds, requires_stencil, culled, uniforms }
    }

    #[inline]
    pub fn target(&self) -> &Arc<RenderTarget> {
        &self.target
    }

    /// Surviving draws in recording order.
    #[inline]
    pub fn draws(&self) -> &[PassDraw] {
        &self.draws
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.draws.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.draws.is_empty()
    }

    /// Union of the device bounds of every kept draw.
    #[inline]
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    #[inline]
    pub fn requires_stencil(&self) -> bool {
        self.requires_stencil
    }

    /// Number of recorded draws dropped during construction.
    #[inline]
    pub fn culled_count(&self) -> usize {
        self.culled
    }

    #[inline]
    pub fn uniforms(&self) -> &[DrawUniforms] {
        &self.uniforms
    }

    /// Uniform records as bytes, ready for `Queue::write_buffer`.
    #[inline]
    pub fn uniform_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.uniforms)
    }
}

/// Device bounds of `draw` clipped to its scissor and the target.
fn device_bounds(draw: &Draw, target_bounds: Rect) -> Option<Rect> {
    let mut local = draw.op.shape().bounds();
    let mut hairline = false;
    if let Some(stroke) = draw.op.stroke() {
        local = local.outset(stroke.local_outset());
        hairline = stroke.is_hairline();
    }

    let mut bounds = draw.transform.map_rect(local);
    if hairline {
        // Hairlines are one device pixel wide regardless of the transform.
        bounds = bounds.outset(0.5);
    }
    if !bounds.is_finite() {
        return None;
    }
    bounds.intersect(draw.scissor)?.intersect(target_bounds)
}

/// Region an opaque rectangular fill is guaranteed to cover.
fn opaque_interior(draw: &Draw, bounds: Rect) -> Option<Rect> {
    if !draw.op.is_fill() || !draw.transform.rect_stays_rect() {
        return None;
    }
    if !draw.paint.as_ref()?.is_opaque() {
        return None;
    }
    let rect = draw.op.shape().as_rect()?;
    draw.transform.map_rect(rect).intersect(bounds)
}
