use std::sync::Arc;

use crate::pass::DrawPass;
use crate::target::RenderTarget;

use super::{LoadOp, RenderPassDesc, StoreOp};

/// Immutable bundle of draw passes handed to the submission layer.
///
/// Passes replay in the order they were snapped. Every pass renders into the
/// task's target.
#[derive(Debug)]
pub struct RenderPassTask {
    target: Arc<RenderTarget>,
    passes: Vec<DrawPass>,
    desc: RenderPassDesc,
}

impl RenderPassTask {
    /// Takes ownership of `passes`, which must be non-empty and share `target`.
    pub fn new(
        target: Arc<RenderTarget>,
        passes: Vec<DrawPass>,
        load: LoadOp,
        store: StoreOp,
    ) -> Self {
        debug_assert!(!passes.is_empty(), "RenderPassTask::new called with no passes");
        debug_assert!(
            passes.iter().all(|p| Arc::ptr_eq(p.target(), &target)),
            "all passes in a render-pass task must share its target"
        );

        let desc = RenderPassDesc {
            load,
            store,
            depth_stencil: passes.iter().any(DrawPass::requires_stencil),
        };

        log::debug!(
            "snapped render-pass task for '{}': {} passes, {} draws, load {:?}",
            target.label(),
            passes.len(),
            passes.iter().map(DrawPass::len).sum::<usize>(),
            desc.load,
        );

        Self { target, passes, desc }
    }

    #[inline]
    pub fn target(&self) -> &Arc<RenderTarget> {
        &self.target
    }

    #[inline]
    pub fn passes(&self) -> &[DrawPass] {
        &self.passes
    }

    #[inline]
    pub fn desc(&self) -> &RenderPassDesc {
        &self.desc
    }

    /// Total kept draws across all passes.
    pub fn draw_count(&self) -> usize {
        self.passes.iter().map(DrawPass::len).sum()
    }

    /// Releases the passes, in order, to the caller.
    pub fn into_passes(self) -> Vec<DrawPass> {
        self.passes
    }
}
