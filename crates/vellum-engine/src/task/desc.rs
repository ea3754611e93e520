use crate::paint::Color;

/// What happens to the target's existing contents when the pass begins.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub enum LoadOp {
    #[default]
    Load,
    Clear(Color),
}

/// What happens to the rendered contents when the pass ends.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum StoreOp {
    #[default]
    Store,
    Discard,
}

/// Attachment setup for a render-pass task.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RenderPassDesc {
    pub load: LoadOp,
    pub store: StoreOp,
    /// A depth/stencil attachment is needed by at least one draw.
    pub depth_stencil: bool,
}

impl RenderPassDesc {
    /// Color attachment operations for `wgpu::RenderPassColorAttachment::ops`.
    pub fn color_operations(&self) -> wgpu::Operations<wgpu::Color> {
        wgpu::Operations {
            load: match self.load {
                LoadOp::Load => wgpu::LoadOp::Load,
                LoadOp::Clear(c) => wgpu::LoadOp::Clear(c.to_wgpu()),
            },
            store: match self.store {
                StoreOp::Store => wgpu::StoreOp::Store,
                StoreOp::Discard => wgpu::StoreOp::Discard,
            },
        }
    }
}
