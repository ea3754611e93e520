use crate::coords::ISize;

/// Per-pixel channel layout of image data written by a draw context.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ColorType {
    Unknown,
    Alpha8,
    Rgba8888,
    Bgra8888,
    Rgba1010102,
    RgbaF16,
}

impl ColorType {
    /// Color type whose layout matches `format`, if any.
    pub fn from_format(format: wgpu::TextureFormat) -> ColorType {
        use wgpu::TextureFormat as F;
        match format {
            F::R8Unorm => ColorType::Alpha8,
            F::Rgba8Unorm | F::Rgba8UnormSrgb => ColorType::Rgba8888,
            F::Bgra8Unorm | F::Bgra8UnormSrgb => ColorType::Bgra8888,
            F::Rgb10a2Unorm => ColorType::Rgba1010102,
            F::Rgba16Float => ColorType::RgbaF16,
            _ => ColorType::Unknown,
        }
    }

    /// True when pixels of this type can be written to a texture of `format`.
    #[inline]
    pub fn is_compatible_with(self, format: wgpu::TextureFormat) -> bool {
        self != ColorType::Unknown && ColorType::from_format(format) == self
    }
}

/// How the alpha channel relates to the color channels.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum AlphaType {
    Unknown,
    Opaque,
    Premul,
    Unpremul,
}

/// Color space the recorded colors are expressed in.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum ColorSpace {
    #[default]
    Srgb,
    SrgbLinear,
    DisplayP3,
}

/// Dimensions plus color description of the image a draw context produces.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct ImageInfo {
    pub dimensions: ISize,
    pub color_type: ColorType,
    pub alpha_type: AlphaType,
    pub color_space: ColorSpace,
}

impl ImageInfo {
    #[inline]
    pub const fn new(
        dimensions: ISize,
        color_type: ColorType,
        alpha_type: AlphaType,
        color_space: ColorSpace,
    ) -> Self {
        Self { dimensions, color_type, alpha_type, color_space }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.dimensions.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.dimensions.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn srgb_and_linear_formats_share_a_color_type() {
        assert!(ColorType::Rgba8888.is_compatible_with(wgpu::TextureFormat::Rgba8Unorm));
        assert!(ColorType::Rgba8888.is_compatible_with(wgpu::TextureFormat::Rgba8UnormSrgb));
    }

    #[test]
    fn swizzled_layout_is_incompatible() {
        assert!(!ColorType::Rgba8888.is_compatible_with(wgpu::TextureFormat::Bgra8Unorm));
        assert!(!ColorType::Bgra8888.is_compatible_with(wgpu::TextureFormat::Rgba16Float));
    }

    #[test]
    fn unknown_is_never_compatible() {
        assert!(!ColorType::Unknown.is_compatible_with(wgpu::TextureFormat::Depth32Float));
        assert_eq!(ColorType::from_format(wgpu::TextureFormat::Depth32Float), ColorType::Unknown);
    }
}
