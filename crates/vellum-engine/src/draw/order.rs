use core::cmp::Ordering;

/// Painter's-order key attached to every draw.
///
/// Higher values paint over lower values. Pass construction uses it to decide
/// whether an opaque draw can hide an earlier one.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct DrawOrder(pub u32);

impl DrawOrder {
    /// Largest order with a distinct depth value.
    pub const MAX_DEPTH_ORDER: u32 = (1 << 24) - 1;

    #[inline]
    pub const fn new(v: u32) -> Self {
        Self(v)
    }

    /// The next order value; saturates at `u32::MAX`.
    #[inline]
    pub const fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }

    /// Normalized depth in `(0, 1]` for the depth attachment. Later draws are nearer.
    ///
    /// Orders are quantized to 24 bits so each step is one exact f32 ulp near 1.0.
    /// Orders at or above `MAX_DEPTH_ORDER` share the nearest depth.
    #[inline]
    pub fn depth(self) -> f32 {
        let order = self.0.min(Self::MAX_DEPTH_ORDER);
        1.0 - order as f32 / (1u32 << 24) as f32
    }
}

impl Ord for DrawOrder {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

impl PartialOrd for DrawOrder {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn later_orders_are_nearer() {
        let a = DrawOrder::new(1);
        let b = a.next();
        assert!(b > a);
        assert!(b.depth() < a.depth());
    }

    #[test]
    fn small_orders_have_distinct_depths() {
        let depths: Vec<f32> = (0..4).map(|i| DrawOrder::new(i).depth()).collect();
        assert_eq!(depths[0], 1.0);
        assert!(depths.windows(2).all(|w| w[1] < w[0]));
    }

    #[test]
    fn depth_clamps_past_24_bits() {
        let max = DrawOrder::new(DrawOrder::MAX_DEPTH_ORDER);
        assert!(max.depth() > 0.0);
        assert_eq!(DrawOrder::new(u32::MAX).depth(), max.depth());
    }

    #[test]
    fn next_saturates() {
        assert_eq!(DrawOrder::new(u32::MAX).next(), DrawOrder::new(u32::MAX));
    }
}
