//! App-wide yewdux store slices.
//!
//! # Design
//! - Session tokens and notifications are the only state shared across screens.
//! - Fetched file lists stay in the view that fetched them.

use crate::core::notify::ToastQueue;
use crate::core::session::SessionState;
use yewdux::store::Store;

/// Global application store for shared state.
#[derive(Clone, Debug, PartialEq, Eq, Store, Default)]
pub struct AppStore {
    /// Per-role session tokens.
    pub session: SessionState,
    /// Whether the session has been restored from storage yet.
    pub session_loaded: bool,
    /// Visible notifications.
    pub toasts: ToastQueue,
}

#[cfg(test)]
mod tests {
    use super::AppStore;
    use transdesk_api_models::Role;

    #[test]
    fn default_store_is_signed_out_and_unloaded() {
        let store = AppStore::default();
        assert!(!store.session_loaded);
        for role in Role::all() {
            assert!(!store.session.has_token(role));
        }
        assert!(store.toasts.items().is_empty());
    }
}
