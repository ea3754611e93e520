//! Draw recording.
//!
//! Responsibilities:
//! - store draws exactly in call order
//! - keep each geometric operation's payload and recording helper in its own
//!   file under `draw::ops`

mod list;
mod op;
mod order;

pub mod ops;

pub use list::{Draw, DrawList};
pub use op::DrawOp;
pub use order::DrawOrder;
