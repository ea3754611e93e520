//! Render target description and the color information drawn into it.

mod info;
mod render_target;

pub use info::{AlphaType, ColorSpace, ColorType, ImageInfo};
pub use render_target::RenderTarget;
