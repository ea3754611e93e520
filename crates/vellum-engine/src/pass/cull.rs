use crate::coords::Rect;
use crate::draw::DrawOrder;

/// What a draw covers, as seen by an [`OcclusionCuller`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct DrawCoverage {
    /// Device-space bounds, already clipped to the scissor and the target.
    pub bounds: Rect,
    pub order: DrawOrder,
    /// Device-space region the draw paints fully opaque, if it can be proven.
    pub opaque_interior: Option<Rect>,
}

/// Decides which draws are hidden by later draws and may be dropped.
///
/// During pass construction draws are queried front to back (reverse call
/// order), so every draw offered before the current one paints over it.
pub trait OcclusionCuller {
    /// Called once per pass before the first query.
    fn begin_pass(&mut self, _target_bounds: Rect) {}

    /// Returns `true` when the draw cannot affect the final image.
    fn is_occluded(&mut self, coverage: &DrawCoverage) -> bool;
}

/// Keeps every draw.
#[derive(Debug, Copy, Clone, Default)]
pub struct NoCulling;

impl OcclusionCuller for NoCulling {
    #[inline]
    fn is_occluded(&mut self, _coverage: &DrawCoverage) -> bool {
        false
    }
}

/// Culls draws that sit entirely inside the opaque interior of a later fill.
#[derive(Debug, Default)]
pub struct OpaqueRectCuller {
    occluders: Vec<(Rect, DrawOrder)>,
}

impl OpaqueRectCuller {
    pub fn new() -> Self {
        Self::default()
    }
}

impl OcclusionCuller for OpaqueRectCuller {
    fn begin_pass(&mut self, _target_bounds: Rect) {
        self.occluders.clear();
    }

    fn is_occluded(&mut self, coverage: &DrawCoverage) -> bool {
        // A later draw with a lower order sits behind this one in depth.
        let hidden = self
            .occluders
            .iter()
            .any(|(rect, order)| *order >= coverage.order && rect.contains_rect(coverage.bounds));
        if hidden {
            return true;
        }
        if let Some(interior) = coverage.opaque_interior {
            self.occluders.push((interior, coverage.order));
        }
        false
    }
}
