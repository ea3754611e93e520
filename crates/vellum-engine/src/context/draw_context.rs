use std::sync::Arc;

use crate::coords::{Rect, Transform};
use crate::draw::{DrawList, DrawOrder};
use crate::geom::Shape;
use crate::paint::{Color, PaintParams, StrokeParams};
use crate::pass::{DrawPass, OcclusionCuller};
use crate::target::{AlphaType, ColorSpace, ColorType, ImageInfo, RenderTarget};
use crate::task::{LoadOp, RenderPassTask};

use super::{DrawContextError, DrawContextOptions};

/// Records draws for one render target and snapshots them into passes and tasks.
///
/// Lifecycle:
/// - recording calls append to the pending [`DrawList`]
/// - [`snap_draw_pass`](Self::snap_draw_pass) turns the pending list into an immutable [`DrawPass`]
/// - [`snap_render_pass_task`](Self::snap_render_pass_task) bundles every pass into a
///   [`RenderPassTask`]
///
/// A context must be drained by `snap_render_pass_task` before it is dropped.
/// Dropping one with recorded work or an unsubmitted clear still inside is a
/// bug: it panics in debug builds and logs a warning in release builds.
#[derive(Debug)]
pub struct DrawContext {
    target: Arc<RenderTarget>,
    image_info: ImageInfo,
    options: DrawContextOptions,

    pending_draws: DrawList,
    draw_passes: Vec<DrawPass>,
    pending_load: LoadOp,
}

impl DrawContext {
    /// Creates a context drawing into `target` with default options.
    pub fn make(
        target: Option<Arc<RenderTarget>>,
        color_space: ColorSpace,
        color_type: ColorType,
        alpha_type: AlphaType,
    ) -> Result<Self, DrawContextError> {
        let options = DrawContextOptions::default();
        Self::make_with_options(target, color_space, color_type, alpha_type, options)
    }

    /// Creates a context drawing into `target`.
    ///
    /// Fails when `target` is `None`, or, with `validate_color_info`, when the
    /// color description cannot be stored in the target's format.
    pub fn make_with_options(
        target: Option<Arc<RenderTarget>>,
        color_space: ColorSpace,
        color_type: ColorType,
        alpha_type: AlphaType,
        options: DrawContextOptions,
    ) -> Result<Self, DrawContextError> {
        let target = target.ok_or(DrawContextError::NullTarget)?;

        if options.validate_color_info {
            validate_color_info(&target, color_type, alpha_type)?;
        }

        let image_info = ImageInfo::new(target.dimensions(), color_type, alpha_type, color_space);
        log::debug!(
            "draw context '{}' created: {}x{} {:?}/{:?}",
            options.label.as_deref().unwrap_or(target.label()),
            image_info.width(),
            image_info.height(),
            color_type,
            alpha_type,
        );

        Ok(Self {
            target,
            image_info,
            options,
            pending_draws: DrawList::new(),
            draw_passes: Vec::new(),
            pending_load: LoadOp::Load,
        })
    }

    #[inline]
    pub fn image_info(&self) -> &ImageInfo {
        &self.image_info
    }

    #[inline]
    pub fn target(&self) -> &Arc<RenderTarget> {
        &self.target
    }

    #[inline]
    pub fn label(&self) -> &str {
        self.options.label.as_deref().unwrap_or(self.target.label())
    }

    /// Draws recorded since the last pass snapshot.
    #[inline]
    pub fn pending_draw_count(&self) -> usize {
        self.pending_draws.len()
    }

    /// Passes snapped but not yet bundled into a task.
    #[inline]
    pub fn pass_count(&self) -> usize {
        self.draw_passes.len()
    }

    /// Load op the next task will start with.
    #[inline]
    pub fn pending_load_op(&self) -> LoadOp {
        self.pending_load
    }

    // ── recording ─────────────────────────────────────────────────────────

    pub fn stencil_and_fill_path(
        &mut self,
        transform: Transform,
        shape: Shape,
        scissor: Rect,
        order: DrawOrder,
        paint: Option<PaintParams>,
    ) {
        self.pending_draws.stencil_and_fill_path(transform, shape, scissor, order, paint);
    }

    /// The caller guarantees `shape` is convex.
    pub fn fill_convex_path(
        &mut self,
        transform: Transform,
        shape: Shape,
        scissor: Rect,
        order: DrawOrder,
        paint: Option<PaintParams>,
    ) {
        self.pending_draws.fill_convex_path(transform, shape, scissor, order, paint);
    }

    pub fn stroke_path(
        &mut self,
        transform: Transform,
        shape: Shape,
        stroke: StrokeParams,
        scissor: Rect,
        order: DrawOrder,
        paint: Option<PaintParams>,
    ) {
        self.pending_draws.stroke_path(transform, shape, stroke, scissor, order, paint);
    }

    /// Fills the whole target with `color` when the next task begins.
    ///
    /// Everything recorded before the clear would be overwritten, so pending
    /// draws and passes not yet bundled into a task are discarded.
    pub fn clear(&mut self, color: Color) {
        let discarded =
            self.pending_draws.len() + self.draw_passes.iter().map(DrawPass::len).sum::<usize>();
        if discarded > 0 {
            log::debug!("draw context '{}' clear discards {discarded} draws", self.label());
        }
        self.pending_draws = DrawList::new();
        self.draw_passes.clear();
        self.pending_load = LoadOp::Clear(color);
    }

    /// Drops a clear that has not reached a task yet.
    ///
    /// Returns the discarded clear color, if any.
    pub fn discard_pending_clear(&mut self) -> Option<Color> {
        match std::mem::take(&mut self.pending_load) {
            LoadOp::Clear(color) => Some(color),
            LoadOp::Load => None,
        }
    }

    // ── snapshots ─────────────────────────────────────────────────────────

    /// Moves the pending draws into a new [`DrawPass`].
    ///
    /// No-op when nothing is pending. The pending list is empty afterwards.
    pub fn snap_draw_pass(&mut self, culler: &mut dyn OcclusionCuller) {
        if self.pending_draws.is_empty() {
            return;
        }

        let draws = std::mem::take(&mut self.pending_draws);
        let pass = DrawPass::new(draws, Arc::clone(&self.target), culler);
        self.draw_passes.push(pass);
    }

    /// Snaps any pending draws, then bundles every pass into a task.
    ///
    /// Returns `None` when nothing was recorded. Either way the context holds
    /// no pending draws or passes afterwards.
    pub fn snap_render_pass_task(
        &mut self,
        culler: &mut dyn OcclusionCuller,
    ) -> Option<RenderPassTask> {
        self.snap_draw_pass(culler);
        if self.draw_passes.is_empty() {
            return None;
        }

        let passes = std::mem::take(&mut self.draw_passes);
        let load = std::mem::take(&mut self.pending_load);
        Some(RenderPassTask::new(Arc::clone(&self.target), passes, load, self.options.store_op))
    }
}

impl Drop for DrawContext {
    fn drop(&mut self) {
        let clear_pending = self.pending_load != LoadOp::Load;
        let harvested =
            self.pending_draws.is_empty() && self.draw_passes.is_empty() && !clear_pending;
        if harvested || std::thread::panicking() {
            return;
        }

        let msg = format!(
            "draw context '{}' dropped with {} pending draws and {} un-harvested passes{}",
            self.label(),
            self.pending_draws.len(),
            self.draw_passes.len(),
            if clear_pending { " (clear pending)" } else { "" },
        );
        log::warn!("{msg}");
        debug_assert!(harvested, "{msg}");
    }
}

fn validate_color_info(
    target: &RenderTarget,
    color_type: ColorType,
    alpha_type: AlphaType,
) -> Result<(), DrawContextError> {
    if color_type == ColorType::Unknown {
        return Err(DrawContextError::UnknownColorType);
    }
    if alpha_type == AlphaType::Unknown {
        return Err(DrawContextError::UnknownAlphaType);
    }
    if !color_type.is_compatible_with(target.format()) {
        return Err(DrawContextError::IncompatibleColorType { color_type, format: target.format() });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::{ISize, Vec2};
    use crate::draw::DrawOp;
    use crate::pass::{NoCulling, OpaqueRectCuller};
    use crate::task::StoreOp;

    fn target(w: u32, h: u32) -> Arc<RenderTarget> {
        Arc::new(RenderTarget::new("ctx-test", ISize::new(w, h), wgpu::TextureFormat::Rgba8Unorm))
    }

    fn context() -> DrawContext {
        let t = Some(target(256, 256));
        DrawContext::make(t, ColorSpace::Srgb, ColorType::Rgba8888, AlphaType::Premul)
            .expect("valid context")
    }

    fn full() -> Rect {
        Rect::new(0.0, 0.0, 256.0, 256.0)
    }

    fn fill(ctx: &mut DrawContext, x: f32, order: u32) {
        ctx.fill_convex_path(
            Transform::IDENTITY,
            Shape::rect(Rect::new(x, 0.0, 8.0, 8.0)),
            full(),
            DrawOrder::new(order),
            Some(PaintParams::solid(Color::WHITE)),
        );
    }

    fn pass_orders(pass: &DrawPass) -> Vec<u32> {
        pass.draws().iter().map(|d| d.draw.order.0).collect()
    }

    // ── construction ──────────────────────────────────────────────────────

    #[test]
    fn null_target_yields_no_context() {
        let err = DrawContext::make(None, ColorSpace::Srgb, ColorType::Rgba8888, AlphaType::Premul)
            .unwrap_err();
        assert_eq!(err, DrawContextError::NullTarget);
    }

    #[test]
    fn image_info_combines_target_size_and_color_description() {
        let ctx = DrawContext::make(
            Some(target(64, 32)),
            ColorSpace::DisplayP3,
            ColorType::Rgba8888,
            AlphaType::Opaque,
        )
        .unwrap();
        let info = ctx.image_info();
        assert_eq!(info.dimensions, ISize::new(64, 32));
        assert_eq!(info.color_space, ColorSpace::DisplayP3);
        assert_eq!(info.alpha_type, AlphaType::Opaque);
        assert_eq!(ctx.pending_draw_count(), 0);
        assert_eq!(ctx.pass_count(), 0);
        assert_eq!(ctx.pending_load_op(), LoadOp::Load);
    }

    #[test]
    fn rejects_color_type_the_target_cannot_hold() {
        let t = Some(target(8, 8));
        let err = DrawContext::make(t, ColorSpace::Srgb, ColorType::Bgra8888, AlphaType::Premul)
            .unwrap_err();
        assert_eq!(
            err,
            DrawContextError::IncompatibleColorType {
                color_type: ColorType::Bgra8888,
                format: wgpu::TextureFormat::Rgba8Unorm,
            }
        );
    }

    #[test]
    fn rejects_unknown_color_or_alpha_type() {
        let t = target(8, 8);
        let srgb = ColorSpace::Srgb;
        let e1 = DrawContext::make(Some(t.clone()), srgb, ColorType::Unknown, AlphaType::Premul);
        let e2 = DrawContext::make(Some(t), srgb, ColorType::Rgba8888, AlphaType::Unknown);
        assert_eq!(e1.unwrap_err(), DrawContextError::UnknownColorType);
        assert_eq!(e2.unwrap_err(), DrawContextError::UnknownAlphaType);
    }

    #[test]
    fn validation_can_be_disabled() {
        let options = DrawContextOptions { validate_color_info: false, ..Default::default() };
        let ctx = DrawContext::make_with_options(
            Some(target(8, 8)),
            ColorSpace::Srgb,
            ColorType::Bgra8888,
            AlphaType::Premul,
            options,
        );
        assert!(ctx.is_ok());
    }

    #[test]
    fn error_messages_name_the_problem() {
        assert_eq!(
            DrawContextError::NullTarget.to_string(),
            "draw context requires a render target"
        );
    }

    // ── recording ─────────────────────────────────────────────────────────

    #[test]
    fn recording_grows_pending_only() {
        let mut ctx = context();
        fill(&mut ctx, 0.0, 1);
        ctx.snap_draw_pass(&mut NoCulling);
        fill(&mut ctx, 10.0, 2);
        ctx.stencil_and_fill_path(
            Transform::IDENTITY,
            Shape::circle(Vec2::new(5.0, 5.0), 3.0),
            full(),
            DrawOrder::new(3),
            None,
        );
        assert_eq!(ctx.pending_draw_count(), 2);
        assert_eq!(ctx.pass_count(), 1);
        assert_eq!(ctx.draw_passes[0].len(), 1);

        assert!(ctx.snap_render_pass_task(&mut NoCulling).is_some());
    }

    // ── snap_draw_pass ────────────────────────────────────────────────────

    #[test]
    fn snap_preserves_call_order() {
        let mut ctx = context();
        for (i, order) in [4, 1, 3, 2].into_iter().enumerate() {
            fill(&mut ctx, i as f32 * 10.0, order);
        }
        ctx.snap_draw_pass(&mut NoCulling);
        assert_eq!(pass_orders(&ctx.draw_passes[0]), [4, 1, 3, 2]);
        assert_eq!(ctx.pending_draw_count(), 0);

        ctx.snap_render_pass_task(&mut NoCulling);
    }

    #[test]
    fn snap_of_empty_pending_is_a_no_op() {
        let mut ctx = context();
        ctx.snap_draw_pass(&mut NoCulling);
        assert_eq!(ctx.pass_count(), 0);

        fill(&mut ctx, 0.0, 1);
        ctx.snap_draw_pass(&mut NoCulling);
        ctx.snap_draw_pass(&mut NoCulling);
        ctx.snap_draw_pass(&mut NoCulling);
        assert_eq!(ctx.pass_count(), 1);
        assert_eq!(ctx.pending_draw_count(), 0);

        ctx.snap_render_pass_task(&mut NoCulling);
    }

    #[test]
    fn snap_passes_culler_through() {
        let mut ctx = context();
        fill(&mut ctx, 2.0, 1);
        ctx.fill_convex_path(
            Transform::IDENTITY,
            Shape::rect(full()),
            full(),
            DrawOrder::new(2),
            Some(PaintParams::solid(Color::BLACK)),
        );
        let mut culler = OpaqueRectCuller::new();
        ctx.snap_draw_pass(&mut culler);
        assert_eq!(ctx.draw_passes[0].len(), 1);
        assert_eq!(ctx.draw_passes[0].culled_count(), 1);

        ctx.snap_render_pass_task(&mut culler);
    }

    // ── snap_render_pass_task ─────────────────────────────────────────────

    #[test]
    fn task_of_untouched_context_is_none() {
        let mut ctx = context();
        assert!(ctx.snap_render_pass_task(&mut NoCulling).is_none());
        assert_eq!(ctx.pending_draw_count(), 0);
        assert_eq!(ctx.pass_count(), 0);
    }

    #[test]
    fn task_bundles_passes_in_snapshot_order() {
        let mut ctx = context();
        for i in 0..3 {
            fill(&mut ctx, i as f32 * 10.0, i);
        }
        ctx.snap_draw_pass(&mut NoCulling);
        for i in 10..12 {
            fill(&mut ctx, i as f32 * 10.0, i);
        }

        let task = ctx.snap_render_pass_task(&mut NoCulling).expect("task");
        assert_eq!(task.passes().len(), 2);
        assert_eq!(pass_orders(&task.passes()[0]), [0, 1, 2]);
        assert_eq!(pass_orders(&task.passes()[1]), [10, 11]);
        assert_eq!(ctx.pending_draw_count(), 0);
        assert_eq!(ctx.pass_count(), 0);
        assert!(Arc::ptr_eq(task.target(), ctx.target()));
    }

    #[test]
    fn second_task_starts_fresh() {
        let mut ctx = context();
        fill(&mut ctx, 0.0, 1);
        assert!(ctx.snap_render_pass_task(&mut NoCulling).is_some());
        assert!(ctx.snap_render_pass_task(&mut NoCulling).is_none());
    }

    #[test]
    fn stroke_then_fill_over_256_square_target() {
        let mut ctx = context();
        ctx.stroke_path(
            Transform::IDENTITY,
            Shape::circle(Vec2::new(64.0, 64.0), 32.0),
            StrokeParams::default(),
            full(),
            DrawOrder::new(1),
            Some(PaintParams::solid(Color::BLACK)),
        );
        ctx.fill_convex_path(
            Transform::translate(128.0, 128.0),
            Shape::rect(Rect::new(0.0, 0.0, 64.0, 64.0)),
            full(),
            DrawOrder::new(2),
            Some(PaintParams::solid(Color::WHITE)),
        );

        let task = ctx.snap_render_pass_task(&mut OpaqueRectCuller::new()).expect("task");
        assert_eq!(task.passes().len(), 1);
        let draws = task.passes()[0].draws();
        assert_eq!(draws.len(), 2);
        assert!(matches!(draws[0].draw.op, DrawOp::Stroke(_)));
        assert!(matches!(draws[1].draw.op, DrawOp::ConvexFill(_)));
        assert_eq!(task.desc().store, StoreOp::Store);
        drop(ctx);
    }

    // ── clear ─────────────────────────────────────────────────────────────

    #[test]
    fn clear_discards_unharvested_work() {
        let mut ctx = context();
        fill(&mut ctx, 0.0, 1);
        ctx.snap_draw_pass(&mut NoCulling);
        fill(&mut ctx, 10.0, 2);
        ctx.clear(Color::WHITE);
        assert_eq!(ctx.pending_draw_count(), 0);
        assert_eq!(ctx.pass_count(), 0);

        fill(&mut ctx, 20.0, 3);
        let task = ctx.snap_render_pass_task(&mut NoCulling).expect("task");
        assert_eq!(task.desc().load, LoadOp::Clear(Color::WHITE));
        assert_eq!(task.draw_count(), 1);
        assert_eq!(ctx.pending_load_op(), LoadOp::Load);
    }

    #[test]
    fn clear_alone_produces_no_task_but_stays_pending() {
        let mut ctx = context();
        ctx.clear(Color::BLACK);
        assert!(ctx.snap_render_pass_task(&mut NoCulling).is_none());
        assert_eq!(ctx.pending_load_op(), LoadOp::Clear(Color::BLACK));

        assert_eq!(ctx.discard_pending_clear(), Some(Color::BLACK));
        assert_eq!(ctx.discard_pending_clear(), None);
    }

    // ── teardown ──────────────────────────────────────────────────────────

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "un-harvested passes")]
    fn dropping_with_pending_draws_panics_in_debug() {
        let mut ctx = context();
        fill(&mut ctx, 0.0, 1);
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "1 un-harvested passes")]
    fn dropping_with_unharvested_passes_panics_in_debug() {
        let mut ctx = context();
        fill(&mut ctx, 0.0, 1);
        ctx.snap_draw_pass(&mut NoCulling);
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "clear pending")]
    fn dropping_with_unsubmitted_clear_panics_in_debug() {
        let mut ctx = context();
        ctx.clear(Color::WHITE);
        assert!(ctx.snap_render_pass_task(&mut NoCulling).is_none());
    }
}
