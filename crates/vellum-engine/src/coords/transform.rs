use core::ops::Mul;

use super::{Rect, Vec2};

/// Local-to-device affine transform.
///
/// Maps `(x, y)` to `(sx*x + kx*y + tx, ky*x + sy*y + ty)`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Transform {
    pub sx: f32,
    pub kx: f32,
    pub tx: f32,
    pub ky: f32,
    pub sy: f32,
    pub ty: f32,
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform {
    pub const IDENTITY: Transform =
        Transform { sx: 1.0, kx: 0.0, tx: 0.0, ky: 0.0, sy: 1.0, ty: 0.0 };

    #[inline]
    pub const fn translate(tx: f32, ty: f32) -> Self {
        Self { tx, ty, ..Self::IDENTITY }
    }

    #[inline]
    pub const fn scale(sx: f32, sy: f32) -> Self {
        Self { sx, sy, ..Self::IDENTITY }
    }

    /// Counter-clockwise rotation in a +Y-down space renders clockwise on screen.
    #[inline]
    pub fn rotate(radians: f32) -> Self {
        let (s, c) = radians.sin_cos();
        Self { sx: c, kx: -s, tx: 0.0, ky: s, sy: c, ty: 0.0 }
    }

    /// Returns `self * other`: `other` is applied first.
    #[inline]
    pub fn concat(self, other: Transform) -> Transform {
        Transform {
            sx: self.sx * other.sx + self.kx * other.ky,
            kx: self.sx * other.kx + self.kx * other.sy,
            tx: self.sx * other.tx + self.kx * other.ty + self.tx,
            ky: self.ky * other.sx + self.sy * other.ky,
            sy: self.ky * other.kx + self.sy * other.sy,
            ty: self.ky * other.tx + self.sy * other.ty + self.ty,
        }
    }

    #[inline]
    pub fn map_point(self, p: Vec2) -> Vec2 {
        Vec2::new(
            self.sx * p.x + self.kx * p.y + self.tx,
            self.ky * p.x + self.sy * p.y + self.ty,
        )
    }

    /// Device-space bounds of `rect` after mapping all four corners.
    pub fn map_rect(self, rect: Rect) -> Rect {
        let [a, b, c, d] = rect.normalized().corners().map(|p| self.map_point(p));
        let lo = a.min(b).min(c).min(d);
        let hi = a.max(b).max(c).max(d);
        Rect::from_ltrb(lo.x, lo.y, hi.x, hi.y)
    }

    /// True when axis-aligned rects map to axis-aligned rects (scale, translate,
    /// and multiples of 90° rotation).
    #[inline]
    pub fn rect_stays_rect(self) -> bool {
        (self.kx == 0.0 && self.ky == 0.0) || (self.sx == 0.0 && self.sy == 0.0)
    }

    /// Column-major 3×3 matrix with each column padded to 16 bytes (WGSL `mat3x3<f32>`).
    #[inline]
    pub fn to_cols(self) -> [[f32; 4]; 3] {
        [
            [self.sx, self.ky, 0.0, 0.0],
            [self.kx, self.sy, 0.0, 0.0],
            [self.tx, self.ty, 1.0, 0.0],
        ]
    }
}

impl Mul for Transform {
    type Output = Transform;
    #[inline]
    fn mul(self, rhs: Transform) -> Transform {
        self.concat(rhs)
    }
}
