//! Render-pass tasks: the unit of work handed to GPU submission.

mod desc;
mod render_pass_task;

pub use desc::{LoadOp, RenderPassDesc, StoreOp};
pub use render_pass_task::RenderPassTask;
