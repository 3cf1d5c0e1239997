//! Per-role session tokens.
//!
//! # Design
//! - Client and admin tokens are independent slots; touching one never touches the other.
//! - Only presence is inspected: no expiry, no shape checks.
//! - Persistence goes through [`TokenStorage`] so the model runs without a browser.

use std::cell::RefCell;
use std::collections::BTreeMap;
use transdesk_api_models::{AuthSession, Role, UserProfile};

/// Storage key holding the client bearer token.
pub const CLIENT_TOKEN_KEY: &str = "clientToken";
/// Storage key holding the admin bearer token.
pub const ADMIN_TOKEN_KEY: &str = "adminToken";
/// Storage key holding the signed-in client's profile as JSON.
pub const CLIENT_USER_KEY: &str = "clientUser";

/// Storage key for a role's token.
#[must_use]
pub const fn token_key(role: Role) -> &'static str {
    match role {
        Role::Client => CLIENT_TOKEN_KEY,
        Role::Admin => ADMIN_TOKEN_KEY,
    }
}

/// String key/value persistence backing the session.
pub trait TokenStorage {
    /// Read a raw value.
    fn read(&self, key: &'static str) -> Option<String>;
    /// Write a raw value.
    fn write(&self, key: &'static str, value: &str);
    /// Delete a value.
    fn remove(&self, key: &'static str);
}

/// In-memory [`TokenStorage`], used off-browser.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RefCell<BTreeMap<&'static str, String>>,
}

impl TokenStorage for MemoryStorage {
    fn read(&self, key: &'static str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn write(&self, key: &'static str, value: &str) {
        self.entries.borrow_mut().insert(key, value.to_string());
    }

    fn remove(&self, key: &'static str) {
        self.entries.borrow_mut().remove(key);
    }
}

/// Explicit session context shared with the views.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    client_token: Option<String>,
    admin_token: Option<String>,
    client_user: Option<UserProfile>,
}

impl SessionState {
    /// Restore tokens (and the client profile) from storage.
    #[must_use]
    pub fn load(storage: &impl TokenStorage) -> Self {
        let read_token = |role| {
            storage
                .read(token_key(role))
                .filter(|value| !value.is_empty())
        };
        let client_token = read_token(Role::Client);
        let client_user = client_token.as_ref().and_then(|_| {
            storage
                .read(CLIENT_USER_KEY)
                .and_then(|raw| serde_json::from_str::<UserProfile>(&raw).ok())
        });
        Self {
            client_token,
            admin_token: read_token(Role::Admin),
            client_user,
        }
    }

    /// Token stored for `role`.
    #[must_use]
    pub fn token(&self, role: Role) -> Option<&str> {
        match role {
            Role::Client => self.client_token.as_deref(),
            Role::Admin => self.admin_token.as_deref(),
        }
    }

    /// Whether a non-empty token is present for `role`.
    #[must_use]
    pub fn has_token(&self, role: Role) -> bool {
        self.token(role).is_some_and(|token| !token.is_empty())
    }

    /// Profile of the signed-in client, when known.
    #[must_use]
    pub const fn client_user(&self) -> Option<&UserProfile> {
        self.client_user.as_ref()
    }

    /// Store a token for `role` and persist it.
    pub fn set_token(&mut self, storage: &impl TokenStorage, role: Role, value: String) {
        storage.write(token_key(role), &value);
        *self.slot(role) = Some(value);
    }

    /// Persist a successful signin. The client profile rides along with the
    /// client token so the file view can address and filter its list.
    pub fn sign_in(&mut self, storage: &impl TokenStorage, role: Role, session: AuthSession) {
        self.set_token(storage, role, session.token);
        if role == Role::Client {
            match session.user {
                Some(user) => {
                    if let Ok(raw) = serde_json::to_string(&user) {
                        storage.write(CLIENT_USER_KEY, &raw);
                    }
                    self.client_user = Some(user);
                }
                None => {
                    storage.remove(CLIENT_USER_KEY);
                    self.client_user = None;
                }
            }
        }
    }

    /// Drop the token for `role` (logout). The other role is untouched.
    pub fn clear_token(&mut self, storage: &impl TokenStorage, role: Role) {
        storage.remove(token_key(role));
        *self.slot(role) = None;
        if role == Role::Client {
            storage.remove(CLIENT_USER_KEY);
            self.client_user = None;
        }
    }

    const fn slot(&mut self, role: Role) -> &mut Option<String> {
        match role {
            Role::Client => &mut self.client_token,
            Role::Admin => &mut self.admin_token,
        }
    }
}
