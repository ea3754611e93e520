//! Vellum engine crate.
//!
//! Records drawing operations against a render target and snapshots them into
//! immutable, culled draw passes and submittable render-pass tasks.
//!
//! Ownership moves one way: `DrawList` → `DrawPass` → `RenderPassTask`.

pub mod context;
pub mod coords;
pub mod draw;
pub mod geom;
pub mod logging;
pub mod paint;
pub mod pass;
pub mod target;
pub mod task;

pub use context::{DrawContext, DrawContextError, DrawContextOptions};
pub use pass::{DrawPass, NoCulling, OcclusionCuller, OpaqueRectCuller};
pub use task::RenderPassTask;
