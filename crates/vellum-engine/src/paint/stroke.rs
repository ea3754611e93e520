/// Corner treatment where stroked segments meet.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum Join {
    #[default]
    Miter,
    Round,
    Bevel,
}

/// End treatment for open contours.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum Cap {
    #[default]
    Butt,
    Round,
    Square,
}

/// Stroke parameters. A width of zero is a hairline (one device pixel wide).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct StrokeParams {
    pub width: f32,
    pub miter_limit: f32,
    pub join: Join,
    pub cap: Cap,
}

impl Default for StrokeParams {
    fn default() -> Self {
        Self { width: 1.0, miter_limit: 4.0, join: Join::Miter, cap: Cap::Butt }
    }
}

impl StrokeParams {
    #[inline]
    pub fn new(width: f32, miter_limit: f32, join: Join, cap: Cap) -> Self {
        Self { width, miter_limit, join, cap }
    }

    #[inline]
    pub fn hairline() -> Self {
        Self { width: 0.0, ..Self::default() }
    }

    #[inline]
    pub fn is_hairline(&self) -> bool {
        self.width <= 0.0
    }

    /// Local-space distance the stroke can extend past the geometry it outlines.
    pub fn local_outset(&self) -> f32 {
        if self.is_hairline() {
            return 0.0;
        }
        let half = self.width * 0.5;
        let join = if self.join == Join::Miter { self.miter_limit.max(1.0) } else { 1.0 };
        // Square caps reach half-width along the diagonal.
        let cap = if self.cap == Cap::Square { core::f32::consts::SQRT_2 } else { 1.0 };
        half * join.max(cap)
    }
}
