//! Draw pass construction: culling and immutable snapshots of draw lists.

mod cull;
mod draw_pass;
mod uniforms;

pub use cull::{DrawCoverage, NoCulling, OcclusionCuller, OpaqueRectCuller};
pub use draw_pass::{DrawPass, PassDraw};
pub use uniforms::DrawUniforms;
