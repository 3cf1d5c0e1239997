//! Browser persistence for the app shell.
//!
//! Tokens are stored as raw strings (no JSON quoting) so values written by other
//! tabs or earlier deployments read back unchanged.

use crate::core::session::TokenStorage;
use gloo::console;
use gloo::storage::{LocalStorage, Storage};

/// [`TokenStorage`] over `window.localStorage`.
///
/// Storage failures (private mode, quota) are logged and otherwise ignored; the
/// in-memory session stays authoritative for the current page.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct BrowserStorage;

impl TokenStorage for BrowserStorage {
    fn read(&self, key: &'static str) -> Option<String> {
        match LocalStorage::raw().get_item(key) {
            Ok(value) => value,
            Err(err) => {
                log_storage_error("get", key, &format!("{err:?}"));
                None
            }
        }
    }

    fn write(&self, key: &'static str, value: &str) {
        if let Err(err) = LocalStorage::raw().set_item(key, value) {
            log_storage_error("set", key, &format!("{err:?}"));
        }
    }

    fn remove(&self, key: &'static str) {
        if let Err(err) = LocalStorage::raw().remove_item(key) {
            log_storage_error("remove", key, &format!("{err:?}"));
        }
    }
}

fn log_storage_error(operation: &'static str, key: &'static str, detail: &str) {
    console::error!("storage operation failed", operation, key, detail);
}
