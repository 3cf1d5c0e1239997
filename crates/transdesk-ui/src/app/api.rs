//! API client context for sharing a singleton client instance.
//!
//! # Design
//! - Create exactly one API client per app boot.
//! - Tokens are passed per call from the session; the client holds no auth state.

use crate::core::config::UiConfig;
use crate::services::api::ApiClient;
use std::rc::Rc;

/// Shared API client context for the views.
#[derive(Clone)]
pub(crate) struct ApiCtx {
    /// Singleton API client instance.
    pub client: Rc<ApiClient>,
    /// Configuration the client was built from.
    pub config: Rc<UiConfig>,
}

impl ApiCtx {
    pub(crate) fn new(config: UiConfig) -> Self {
        Self {
            client: Rc::new(ApiClient::new(config.clone())),
            config: Rc::new(config),
        }
    }
}

impl PartialEq for ApiCtx {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.client, &other.client)
    }
}
