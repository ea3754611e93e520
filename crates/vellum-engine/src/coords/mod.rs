//! Coordinate and geometry primitives shared by recording and pass construction.
//!
//! Canonical space:
//! - Origin top-left
//! - +X right, +Y down
//!
//! Shapes are recorded in local space; a [`Transform`] maps them to device pixels.

mod corner_radii;
mod rect;
mod size;
mod transform;
mod vec2;

pub use corner_radii::CornerRadii;
pub use rect::Rect;
pub use size::ISize;
pub use transform::Transform;
pub use vec2::Vec2;
