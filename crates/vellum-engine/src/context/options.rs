use crate::task::StoreOp;

/// Construction-time settings for a [`DrawContext`](super::DrawContext).
#[derive(Debug, Clone)]
pub struct DrawContextOptions {
    /// Name used in log messages. Falls back to the target's label.
    pub label: Option<String>,

    /// Reject color descriptions the target's format cannot hold.
    ///
    /// When disabled, compatibility is the caller's responsibility.
    pub validate_color_info: bool,

    /// Store op for every task this context produces.
    pub store_op: StoreOp,
}

impl Default for DrawContextOptions {
    fn default() -> Self {
        Self {
            label: None,
            validate_color_info: true,
            store_op: StoreOp::Store,
        }
    }
}
