//! Paint model attached to recorded draws.
//!
//! Scope:
//! - color representation (linear premultiplied alpha)
//! - paint sources and blending
//! - stroke parameters

mod color;
mod gradient;
mod paint;
mod stroke;

pub use color::Color;
pub use gradient::{ColorStop, LinearGradient, SpreadMode};
pub use paint::{BlendMode, Paint, PaintParams};
pub use stroke::{Cap, Join, StrokeParams};
