use super::Rect;

/// Integer pixel dimensions of a render target.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct ISize {
    pub width: u32,
    pub height: u32,
}

impl ISize {
    #[inline]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Full-surface rectangle anchored at the origin.
    #[inline]
    pub fn to_rect(self) -> Rect {
        Rect::new(0.0, 0.0, self.width as f32, self.height as f32)
    }
}
