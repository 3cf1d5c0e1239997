//! Bridge to the hosted file-picker widget loaded from `index.html`.
//!
//! The widget is reached through the `filestack` global; no bindings crate is
//! involved. Completion payloads are round-tripped through `JSON.stringify` and
//! decoded with serde.

use gloo::console;
use gloo::utils::window;
use js_sys::{Function, JSON, Object, Promise, Reflect};
use transdesk_api_models::{PickerResult, parse_json};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use yew::Callback;

#[derive(Debug, thiserror::Error)]
pub(crate) enum PickerError {
    #[error("file picker is not configured")]
    MissingKey,
    #[error("file picker script is not loaded")]
    Unavailable,
    #[error("file picker failed: {0}")]
    Js(String),
    #[error("file picker returned an unreadable payload: {0}")]
    Payload(String),
}

/// Open picker instance. Dropping it closes the overlay and releases the callbacks.
pub(crate) struct PickerHandle {
    picker: JsValue,
    _on_done: Closure<dyn FnMut(JsValue)>,
    _on_failed: Closure<dyn FnMut(JsValue)>,
    _on_close: Closure<dyn FnMut()>,
}

impl Drop for PickerHandle {
    fn drop(&mut self) {
        if let Ok(close) = method(&self.picker, "close") {
            let _ = close.call0(&self.picker);
        }
    }
}

pub(crate) fn open_picker(
    api_key: Option<&str>,
    on_done: Callback<Result<PickerResult, PickerError>>,
    on_close: Callback<()>,
) -> Result<PickerHandle, PickerError> {
    let api_key = api_key.ok_or(PickerError::MissingKey)?;
    let filestack = Reflect::get(&window(), &JsValue::from_str("filestack")).map_err(js_error)?;
    if filestack.is_undefined() || filestack.is_null() {
        return Err(PickerError::Unavailable);
    }
    let client = method(&filestack, "init")?
        .call1(&filestack, &JsValue::from_str(api_key))
        .map_err(js_error)?;

    let done = {
        let on_done = on_done.clone();
        Closure::wrap(Box::new(move |value: JsValue| {
            on_done.emit(decode_result(&value));
        }) as Box<dyn FnMut(JsValue)>)
    };
    let failed = {
        let on_done = on_done.clone();
        Closure::wrap(Box::new(move |value: JsValue| {
            let err = js_error(value);
            console::error!("picker upload failed", err.to_string());
            on_done.emit(Err(err));
        }) as Box<dyn FnMut(JsValue)>)
    };
    let closed = Closure::wrap(Box::new(move || on_close.emit(())) as Box<dyn FnMut()>);

    let options = Object::new();
    set(&options, "displayMode", &JsValue::from_str("overlay"))?;
    set(&options, "maxFiles", &JsValue::from_f64(1.0))?;
    set(&options, "onUploadDone", done.as_ref())?;
    set(&options, "onFileUploadFailed", failed.as_ref())?;
    set(&options, "onClose", closed.as_ref())?;

    let picker = method(&client, "picker")?
        .call1(&client, &options)
        .map_err(js_error)?;
    let opened = method(&picker, "open")?.call0(&picker).map_err(js_error)?;
    if let Ok(promise) = opened.dyn_into::<Promise>() {
        wasm_bindgen_futures::spawn_local(async move {
            if let Err(err) = JsFuture::from(promise).await {
                let err = js_error(err);
                console::error!("picker open failed", err.to_string());
                on_done.emit(Err(err));
            }
        });
    }

    Ok(PickerHandle {
        picker,
        _on_done: done,
        _on_failed: failed,
        _on_close: closed,
    })
}

fn decode_result(value: &JsValue) -> Result<PickerResult, PickerError> {
    let raw = JSON::stringify(value).map_err(js_error)?;
    let raw = String::from(raw);
    parse_json::<PickerResult>(&raw).map_err(|err| PickerError::Payload(err.to_string()))
}

fn method(target: &JsValue, name: &str) -> Result<Function, PickerError> {
    Reflect::get(target, &JsValue::from_str(name))
        .map_err(js_error)?
        .dyn_into::<Function>()
        .map_err(|_| PickerError::Unavailable)
}

fn set(target: &Object, key: &str, value: &JsValue) -> Result<(), PickerError> {
    Reflect::set(target, &JsValue::from_str(key), value)
        .map(|_| ())
        .map_err(js_error)
}

fn js_error(value: JsValue) -> PickerError {
    PickerError::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
}
