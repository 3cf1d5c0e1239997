//! Actions shared by both file screens.

use crate::app::Route;
use crate::app::api::ApiCtx;
use crate::app::preferences::BrowserStorage;
use crate::core::routing::after_logout;
use crate::core::store::AppStore;
use crate::features::files::state::download_filename;
use crate::services::download::save_bytes;
use gloo::console;
use transdesk_api_models::Role;
use wasm_bindgen_futures::spawn_local;
use yew_router::prelude::Navigator;
use yewdux::prelude::Dispatch;

/// Fetch `id` and hand it to the browser save dialog. Failures are logged only.
pub(crate) fn download_record(api: Option<ApiCtx>, token: Option<String>, id: String) {
    let (Some(api), Some(token)) = (api, token) else {
        console::error!("download skipped: session unavailable");
        return;
    };
    spawn_local(async move {
        let saved = match api.client.download(&token, &id).await {
            Ok(bytes) => save_bytes(&bytes, &download_filename(&id)),
            Err(err) => Err(err),
        };
        if let Err(err) = saved {
            console::error!("download error", err.to_string());
        }
    });
}

/// Drop `role`'s token and return to its login.
pub(crate) fn logout(role: Role, navigator: Option<&Navigator>) {
    Dispatch::<AppStore>::new().reduce_mut(|store| {
        store.session.clear_token(&BrowserStorage, role);
    });
    if let Some(navigator) = navigator {
        navigator.push(&Route::from(after_logout(role)));
    }
}
