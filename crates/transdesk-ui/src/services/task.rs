//! Abortable request handles.
//!
//! # Design
//! - A view keeps one handle per in-flight request and drops them on unmount.
//! - Dropping aborts the request; completions check [`is_live`] before touching state.

use web_sys::{AbortController, AbortSignal};

/// Abort controller tied to a view's lifetime.
pub(crate) struct TaskHandle {
    controller: Option<AbortController>,
}

impl TaskHandle {
    pub(crate) fn new() -> Self {
        Self {
            controller: AbortController::new().ok(),
        }
    }

    /// Signal to hand to the request. `None` when the browser lacks `AbortController`.
    pub(crate) fn signal(&self) -> Option<AbortSignal> {
        self.controller.as_ref().map(AbortController::signal)
    }

    pub(crate) fn abort(&self) {
        if let Some(controller) = &self.controller {
            controller.abort();
        }
    }
}

impl Drop for TaskHandle {
    fn drop(&mut self) {
        self.abort();
    }
}

/// Whether a request carrying `signal` may still update its view.
pub(crate) fn is_live(signal: Option<&AbortSignal>) -> bool {
    signal.is_none_or(|signal| !signal.aborted())
}
