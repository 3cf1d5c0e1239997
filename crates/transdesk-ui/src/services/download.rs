//! Browser save-dialog trigger for downloaded bytes.

use anyhow::anyhow;
use gloo::utils::{body, document};
use js_sys::{Array, Uint8Array};
use wasm_bindgen::JsCast;
use web_sys::{Blob, HtmlAnchorElement, Url};

/// Offer `bytes` to the user as `filename`.
///
/// The object URL and hidden anchor exist only for the duration of the call.
pub(crate) fn save_bytes(bytes: &[u8], filename: &str) -> anyhow::Result<()> {
    let parts = Array::of1(&Uint8Array::from(bytes));
    let blob = Blob::new_with_u8_array_sequence(&parts).map_err(|err| anyhow!("blob: {err:?}"))?;
    let url = Url::create_object_url_with_blob(&blob).map_err(|err| anyhow!("url: {err:?}"))?;
    let result = click_anchor(&url, filename);
    if let Err(err) = Url::revoke_object_url(&url) {
        gloo::console::warn!("object url revoke failed", format!("{err:?}"));
    }
    result
}

fn click_anchor(href: &str, filename: &str) -> anyhow::Result<()> {
    let anchor: HtmlAnchorElement = document()
        .create_element("a")
        .map_err(|err| anyhow!("create anchor: {err:?}"))?
        .dyn_into()
        .map_err(|_| anyhow!("anchor cast failed"))?;
    anchor.set_href(href);
    anchor.set_download(filename);
    anchor
        .style()
        .set_property("display", "none")
        .map_err(|err| anyhow!("hide anchor: {err:?}"))?;
    let body = body();
    body.append_child(&anchor)
        .map_err(|err| anyhow!("attach anchor: {err:?}"))?;
    anchor.click();
    body.remove_child(&anchor)
        .map_err(|err| anyhow!("detach anchor: {err:?}"))?;
    Ok(())
}
