//! Shapes recorded by draws.

mod path;
mod shape;

pub use path::{Path, PathBuilder, Verb};
pub use shape::Shape;
