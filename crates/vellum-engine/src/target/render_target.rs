use crate::coords::{ISize, Rect};

/// Destination surface description shared by a draw context and its passes.
///
/// Holds no GPU resources; the submission layer resolves it to a texture view.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderTarget {
    label: String,
    dimensions: ISize,
    format: wgpu::TextureFormat,
}

impl RenderTarget {
    pub fn new(label: impl Into<String>, dimensions: ISize, format: wgpu::TextureFormat) -> Self {
        debug_assert!(!dimensions.is_empty(), "render target {dimensions:?} has no pixels");
        Self { label: label.into(), dimensions, format }
    }

    #[inline]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[inline]
    pub fn dimensions(&self) -> ISize {
        self.dimensions
    }

    #[inline]
    pub fn format(&self) -> wgpu::TextureFormat {
        self.format
    }

    /// Device-space rect covering every pixel of the target.
    #[inline]
    pub fn bounds(&self) -> Rect {
        self.dimensions.to_rect()
    }
}
