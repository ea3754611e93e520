use bytemuck::{Pod, Zeroable};

use crate::coords::Rect;
use crate::draw::Draw;

/// Per-draw uniform record, laid out for a WGSL uniform/storage buffer.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct DrawUniforms {
    /// Column-major `mat3x3<f32>`, columns padded to 16 bytes.
    pub local_to_device: [[f32; 4]; 3],
    /// Device scissor as `[x, y, width, height]`.
    pub scissor: [f32; 4],
    /// Premultiplied base color; zero for depth/stencil-only draws.
    pub color: [f32; 4],
    pub depth: f32,
    pub _pad: [f32; 3], // 16-byte alignment
}

impl DrawUniforms {
    pub(crate) fn new(draw: &Draw, device_bounds: Rect) -> Self {
        Self {
            local_to_device: draw.transform.to_cols(),
            scissor: [
                device_bounds.origin.x,
                device_bounds.origin.y,
                device_bounds.size.x,
                device_bounds.size.y,
            ],
            color: draw
                .paint
                .as_ref()
                .map(|p| p.paint.base_color().to_array())
                .unwrap_or([0.0; 4]),
            depth: draw.order.depth(),
            _pad: [0.0; 3],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Transform;
    use crate::draw::{DrawList, DrawOrder};
    use crate::geom::Shape;

    #[test]
    fn layout_is_96_bytes() {
        assert_eq!(std::mem::size_of::<DrawUniforms>(), 96);
        assert_eq!(std::mem::align_of::<DrawUniforms>(), 4);
    }

    #[test]
    fn depth_decreases_with_draw_order() {
        let mut list = DrawList::new();
        let rect = Rect::new(0.0, 0.0, 4.0, 4.0);
        for order in 1..=3 {
            let shape = Shape::rect(rect);
            list.fill_convex_path(Transform::IDENTITY, shape, rect, DrawOrder::new(order), None);
        }
        let depths: Vec<f32> =
            list.draws().iter().map(|d| DrawUniforms::new(d, rect).depth).collect();
        assert!(depths[0] > depths[1] && depths[1] > depths[2]);
    }
}
