//! Render request signal
//!
//! Coalesced redraw flag between the motion side and the renderer.
//! Any number of `request` calls collapse into a single pending draw;
//! the render loop consumes it with `take`.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Shared, coalesced render request flag
///
/// Clones share the same underlying flag, so the renderer can hold one
/// handle while the camera rig holds another.
#[derive(Clone, Debug, Default)]
pub struct RenderSignal {
    requested: Arc<AtomicBool>,
}

impl RenderSignal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request a redraw; idempotent until the next `take`
    pub fn request(&self) {
        self.requested.store(true, Ordering::Release);
    }

    /// Consume the pending request, returning whether one was set
    pub fn take(&self) -> bool {
        self.requested.swap(false, Ordering::Acquire)
    }

    /// Peek without consuming
    pub fn is_requested(&self) -> bool {
        self.requested.load(Ordering::Acquire)
    }
}
