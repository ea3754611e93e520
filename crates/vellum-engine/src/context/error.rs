use std::fmt;

use crate::target::ColorType;

/// Reasons a draw context cannot be created.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawContextError {
    /// No render target was supplied.
    NullTarget,
    /// The requested color type is `ColorType::Unknown`.
    UnknownColorType,
    /// The requested alpha type is `AlphaType::Unknown`.
    UnknownAlphaType,
    /// The color type does not match the target's texture layout.
    IncompatibleColorType {
        color_type: ColorType,
        format: wgpu::TextureFormat,
    },
}

impl fmt::Display for DrawContextError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DrawContextError::NullTarget => write!(f, "draw context requires a render target"),
            DrawContextError::UnknownColorType => write!(f, "draw context color type is unknown"),
            DrawContextError::UnknownAlphaType => write!(f, "draw context alpha type is unknown"),
            DrawContextError::IncompatibleColorType { color_type, format } => {
                write!(f, "color type {color_type:?} cannot be written to a {format:?} target")
            }
        }
    }
}

impl std::error::Error for DrawContextError {}
