//! Draw context: the recording front end for one render target.

mod draw_context;
mod error;
mod options;

pub use draw_context::DrawContext;
pub use error::DrawContextError;
pub use options::DrawContextOptions;
