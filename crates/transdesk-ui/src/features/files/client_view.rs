//! "My Files" screen for signed-in clients.

use crate::app::api::ApiCtx;
use crate::core::outcome::{
    ApiOutcome, NO_FILE_UPLOADED, NOT_AUTHORIZED, PICKER_ERROR, UPLOAD_FAILED, UPLOAD_SUCCESS,
};
use crate::core::store::AppStore;
use crate::features::files::actions::{download_record, logout};
use crate::features::files::state::{
    SOURCE_LANGUAGE, TARGET_LANGUAGE, TAT_PLACEHOLDER, client_download_id, owned_by, status_tone,
};
use crate::services::picker::{PickerError, PickerHandle, open_picker};
use crate::services::task::{TaskHandle, is_live};
use gloo::console;
use gloo::dialogs::alert;
use std::cell::RefCell;
use std::rc::Rc;
use transdesk_api_models::{FileRecord, PickerResult, Role};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::use_selector;

#[function_component(ClientFilesPage)]
pub(crate) fn client_files_page() -> Html {
    let api = use_context::<ApiCtx>();
    let navigator = use_navigator();
    let session = use_selector(|store: &AppStore| store.session.clone());
    let files = use_state(Vec::<FileRecord>::new);
    let picker_open = use_state(|| false);
    let upload_task = use_mut_ref(|| None::<TaskHandle>);

    let token = session.token(Role::Client).map(str::to_string);
    let client_id = session.client_user().map(|user| user.id.clone());

    {
        let files = files.clone();
        let api = api.clone();
        let token = token.clone();
        let client_id = client_id.clone();
        use_effect_with_deps(
            move |_| {
                let task = TaskHandle::new();
                match (api, token, client_id) {
                    (Some(api), Some(token), Some(client_id)) => {
                        let signal = task.signal();
                        spawn_local(async move {
                            let outcome = api
                                .client
                                .client_files(&token, &client_id, signal.as_ref())
                                .await;
                            if !is_live(signal.as_ref()) {
                                return;
                            }
                            match outcome {
                                ApiOutcome::Ok(rows) => files.set(rows),
                                ApiOutcome::AuthFailed => {
                                    console::error!("error fetching files", NOT_AUTHORIZED);
                                }
                                ApiOutcome::ServerError(message) => {
                                    console::error!("error fetching files", message);
                                }
                            }
                        });
                    }
                    _ => console::warn!("client profile unavailable; file list not requested"),
                }
                move || drop(task)
            },
            (),
        );
    }

    {
        let picker_open = picker_open.clone();
        let api = api.clone();
        let token = token.clone();
        let upload_task = upload_task.clone();
        use_effect_with_deps(
            move |open: &bool| {
                let mut handle: Option<PickerHandle> = None;
                if *open {
                    let on_done = {
                        let api = api.clone();
                        let token = token.clone();
                        Callback::from(move |result: Result<PickerResult, PickerError>| {
                            handle_picker_result(result, api.clone(), token.clone(), &upload_task);
                        })
                    };
                    let on_close = {
                        let picker_open = picker_open.clone();
                        Callback::from(move |()| picker_open.set(false))
                    };
                    let key = api
                        .as_ref()
                        .and_then(|api| api.config.picker_api_key.clone());
                    match open_picker(key.as_deref(), on_done, on_close) {
                        Ok(opened) => handle = Some(opened),
                        Err(err) => {
                            console::error!("picker unavailable", err.to_string());
                            alert(PICKER_ERROR);
                            picker_open.set(false);
                        }
                    }
                }
                move || drop(handle)
            },
            *picker_open,
        );
    }

    let open_upload = {
        let picker_open = picker_open.clone();
        Callback::from(move |_: MouseEvent| picker_open.set(true))
    };
    let close_upload = {
        let picker_open = picker_open.clone();
        Callback::from(move |_: MouseEvent| picker_open.set(false))
    };
    let on_logout = Callback::from(move |_: MouseEvent| logout(Role::Client, navigator.as_ref()));

    let visible = client_id
        .as_deref()
        .map(|id| owned_by(&files, id))
        .unwrap_or_default();
    let download_ctx = Rc::new((api, token));

    html! {
        <div class="container mt-5">
            <div class="d-flex justify-content-between align-items-center mb-3">
                <h2>{"My Files"}</h2>
                <button class="btn btn-success" onclick={open_upload}>{"Upload File"}</button>
            </div>
            <button class="btn btn-danger mb-3" onclick={on_logout}>{"Logout"}</button>

            {if *picker_open {
                html! {
                    <div class="position-fixed top-0 start-0 w-100 h-100 bg-dark bg-opacity-50 d-flex justify-content-center align-items-center">
                        <div class="bg-white p-4 rounded shadow">
                            <h4>{"Upload a File"}</h4>
                            <button class="btn btn-secondary mt-3" onclick={close_upload}>{"Close"}</button>
                        </div>
                    </div>
                }
            } else {
                html! {}
            }}

            <div class="table-responsive">
                <table class="table table-bordered table-striped">
                    <thead class="table-dark">
                        <tr>
                            <th>{"From"}</th>
                            <th>{"To"}</th>
                            <th>{"TAT"}</th>
                            <th>{"Status"}</th>
                            <th>{"Download"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {for visible.iter().map(|record| render_row(record, &download_ctx))}
                    </tbody>
                </table>
            </div>
        </div>
    }
}

fn render_row(record: &FileRecord, ctx: &Rc<(Option<ApiCtx>, Option<String>)>) -> Html {
    let download = if record.is_complete() {
        let ctx = Rc::clone(ctx);
        let id = client_download_id(record).to_string();
        let onclick = Callback::from(move |_: MouseEvent| {
            let (api, token) = &*ctx;
            download_record(api.clone(), token.clone(), id.clone());
        });
        html! { <button class="btn btn-sm btn-primary" {onclick}>{"Download"}</button> }
    } else {
        html! { <span class="text-muted">{"Not Available"}</span> }
    };

    html! {
        <tr key={record.id.clone()}>
            <td>{SOURCE_LANGUAGE}</td>
            <td>{TARGET_LANGUAGE}</td>
            <td>{TAT_PLACEHOLDER}</td>
            <td>
                <span class={classes!("badge", status_tone(record).badge_class())}>
                    {record.status_label().to_string()}
                </span>
            </td>
            <td>{download}</td>
        </tr>
    }
}

fn handle_picker_result(
    result: Result<PickerResult, PickerError>,
    api: Option<ApiCtx>,
    token: Option<String>,
    upload_task: &Rc<RefCell<Option<TaskHandle>>>,
) {
    let upload = match result {
        Ok(result) => result.first_upload(),
        Err(err) => {
            console::error!("upload error", err.to_string());
            alert(PICKER_ERROR);
            return;
        }
    };
    let Some(upload) = upload else {
        alert(NO_FILE_UPLOADED);
        return;
    };
    let (Some(api), Some(token)) = (api, token) else {
        console::error!("upload skipped: client session unavailable");
        return;
    };
    let task = TaskHandle::new();
    let signal = task.signal();
    *upload_task.borrow_mut() = Some(task);
    spawn_local(async move {
        let outcome = api
            .client
            .register_upload(&token, &upload, signal.as_ref())
            .await;
        if !is_live(signal.as_ref()) {
            return;
        }
        match outcome {
            ApiOutcome::Ok(()) => alert(UPLOAD_SUCCESS),
            ApiOutcome::AuthFailed => alert(&format!("{UPLOAD_FAILED}: {NOT_AUTHORIZED}")),
            ApiOutcome::ServerError(message) => alert(&message),
        }
    });
}
