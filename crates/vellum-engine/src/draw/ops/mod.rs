mod convex_fill;
mod stencil_fill;
mod stroke;

pub use convex_fill::ConvexFillOp;
pub use stencil_fill::StencilFillOp;
pub use stroke::StrokeOp;
