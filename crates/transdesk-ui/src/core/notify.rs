//! Transient notification queue.
//!
//! Messages stack in arrival order and are never merged; each carries its own
//! auto-close delay.

/// Default auto-close for error notifications.
pub const ERROR_AUTO_CLOSE_MS: u32 = 3_000;
/// Default auto-close for success notifications.
pub const SUCCESS_AUTO_CLOSE_MS: u32 = 2_000;
/// Auto-close for the login confirmation, shorter than the redirect window.
pub const LOGIN_SUCCESS_AUTO_CLOSE_MS: u32 = 1_000;

/// Toast variants used across the UI.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    /// Success toast.
    Success,
    /// Error toast.
    Error,
}

/// Toast payload used by the host and app state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    /// Monotonic toast identifier.
    pub id: u64,
    /// Display message for the toast.
    pub message: String,
    /// Severity classification.
    pub kind: ToastKind,
    /// Milliseconds before the toast dismisses itself.
    pub auto_close_ms: u32,
}

/// Ordered set of visible toasts.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastQueue {
    next_id: u64,
    items: Vec<Toast>,
}

impl ToastQueue {
    /// Append a toast and return its id.
    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>, auto_close_ms: u32) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(Toast {
            id,
            message: message.into(),
            kind,
            auto_close_ms,
        });
        id
    }

    /// Append a success toast with the default delay.
    pub fn success(&mut self, message: impl Into<String>) -> u64 {
        self.push(ToastKind::Success, message, SUCCESS_AUTO_CLOSE_MS)
    }

    /// Append an error toast with the default delay.
    pub fn error(&mut self, message: impl Into<String>) -> u64 {
        self.push(ToastKind::Error, message, ERROR_AUTO_CLOSE_MS)
    }

    /// Remove a toast; unknown ids are ignored.
    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|toast| toast.id != id);
    }

    /// Visible toasts, oldest first.
    #[must_use]
    pub fn items(&self) -> &[Toast] {
        &self.items
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicates_stack_without_dedup() {
        let mut queue = ToastQueue::default();
        let first = queue.error("Login failed");
        let second = queue.error("Login failed");
        assert_ne!(first, second);
        assert_eq!(queue.items().len(), 2);
        assert!(queue.items().iter().all(|t| t.auto_close_ms == ERROR_AUTO_CLOSE_MS));
    }

    #[test]
    fn dismiss_removes_only_target() {
        let mut queue = ToastQueue::default();
        let keep = queue.success("saved");
        let drop = queue.push(ToastKind::Error, "boom", 50);
        queue.dismiss(drop);
        queue.dismiss(999);
        assert_eq!(queue.items().len(), 1);
        assert_eq!(queue.items()[0].id, keep);
        assert_eq!(queue.items()[0].kind, ToastKind::Success);
    }

    #[test]
    fn ids_stay_monotonic_after_dismiss() {
        let mut queue = ToastQueue::default();
        let first = queue.success("a");
        queue.dismiss(first);
        let second = queue.success("b");
        assert!(second > first);
    }

    #[test]
    fn neighbours_never_change_an_existing_toast() {
        let mut queue = ToastQueue::default();
        let first = queue.error("first");
        let snapshot = queue.items()[0].clone();
        let second = queue.push(ToastKind::Success, "second", LOGIN_SUCCESS_AUTO_CLOSE_MS);
        queue.success("third");
        queue.dismiss(second);
        let kept = queue
            .items()
            .iter()
            .find(|toast| toast.id == first)
            .cloned();
        assert_eq!(kept, Some(snapshot));
        assert_eq!(queue.items()[0].auto_close_ms, ERROR_AUTO_CLOSE_MS);
    }
}
