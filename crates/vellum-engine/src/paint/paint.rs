use super::{Color, LinearGradient};

/// Paint source for filling or stroking geometry.
#[derive(Debug, Clone, PartialEq)]
pub enum Paint {
    Solid(Color),
    LinearGradient(LinearGradient),
}

impl Paint {
    #[inline]
    pub fn is_opaque(&self) -> bool {
        match self {
            Paint::Solid(c) => c.is_opaque(),
            Paint::LinearGradient(g) => g.is_opaque(),
        }
    }

    /// Representative color uploaded with the draw; gradients use their first stop.
    #[inline]
    pub fn base_color(&self) -> Color {
        match self {
            Paint::Solid(c) => *c,
            Paint::LinearGradient(g) => g.first_color(),
        }
    }
}

/// Porter-Duff blend applied when compositing a draw onto the target.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum BlendMode {
    Clear,
    Src,
    #[default]
    SrcOver,
    DstOver,
    Multiply,
    Screen,
    Plus,
}

impl BlendMode {
    /// True when an opaque source fully replaces the destination.
    #[inline]
    pub fn overwrites_dst_when_opaque(self) -> bool {
        matches!(self, BlendMode::Src | BlendMode::SrcOver)
    }
}

/// Paint parameters attached to a draw.
///
/// A draw without paint parameters only touches depth/stencil.
#[derive(Debug, Clone, PartialEq)]
pub struct PaintParams {
    pub paint: Paint,
    pub blend: BlendMode,
}

impl PaintParams {
    #[inline]
    pub fn new(paint: Paint, blend: BlendMode) -> Self {
        if let Paint::Solid(c) = &paint {
            c.debug_assert_premul();
        }
        Self { paint, blend }
    }

    #[inline]
    pub fn solid(color: Color) -> Self {
        Self::new(Paint::Solid(color), BlendMode::SrcOver)
    }

    /// True when the draw hides everything beneath its covered pixels.
    #[inline]
    pub fn is_opaque(&self) -> bool {
        self.blend.overwrites_dst_when_opaque() && self.paint.is_opaque()
    }
}
