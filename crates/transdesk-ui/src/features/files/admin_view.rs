//! "All Files" screen for administrators.

use crate::app::api::ApiCtx;
use crate::app::push_error;
use crate::core::outcome::{ApiOutcome, NOT_AUTHORIZED};
use crate::core::store::AppStore;
use crate::features::files::actions::{download_record, logout};
use crate::features::files::state::{
    InFlight, admin_download_id, attach_translation, owner_label,
};
use crate::services::task::{TaskHandle, is_live};
use gloo::console;
use std::rc::Rc;
use transdesk_api_models::{FileRecord, Role};
use wasm_bindgen_futures::spawn_local;
use web_sys::{File, HtmlInputElement};
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::use_selector;

/// Fetched rows plus local translation patches.
#[derive(Default, PartialEq)]
struct AdminRows(Vec<FileRecord>);

enum RowsAction {
    Loaded(Vec<FileRecord>),
    Translated {
        file_id: String,
        translated_url: Option<String>,
    },
}

impl Reducible for AdminRows {
    type Action = RowsAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            RowsAction::Loaded(rows) => Rc::new(Self(rows)),
            RowsAction::Translated {
                file_id,
                translated_url,
            } => Rc::new(Self(attach_translation(&self.0, &file_id, translated_url))),
        }
    }
}

#[function_component(AdminFilesPage)]
pub(crate) fn admin_files_page() -> Html {
    let api = use_context::<ApiCtx>();
    let navigator = use_navigator();
    let token = use_selector(|store: &AppStore| {
        store.session.token(Role::Admin).map(str::to_string)
    });
    let rows = use_reducer(AdminRows::default);
    // One in-flight translated upload per record; replacing a handle aborts the old request.
    let uploads = use_mut_ref(InFlight::<TaskHandle>::default);

    {
        let rows = rows.clone();
        let api = api.clone();
        let token = (*token).clone();
        use_effect_with_deps(
            move |_| {
                let task = TaskHandle::new();
                if let (Some(api), Some(token)) = (api, token) {
                    let signal = task.signal();
                    spawn_local(async move {
                        let outcome = api.client.admin_files(&token, signal.as_ref()).await;
                        if !is_live(signal.as_ref()) {
                            return;
                        }
                        match outcome {
                            ApiOutcome::Ok(list) => rows.dispatch(RowsAction::Loaded(list)),
                            ApiOutcome::AuthFailed => {
                                console::error!("error fetching files", NOT_AUTHORIZED);
                            }
                            ApiOutcome::ServerError(message) => {
                                console::error!("error fetching files", message);
                            }
                        }
                    });
                }
                move || drop(task)
            },
            (),
        );
    }

    let on_translated = {
        let api = api.clone();
        let token = (*token).clone();
        let rows = rows.clone();
        Callback::from(move |(file_id, file): (String, File)| {
            let (Some(api), Some(token)) = (api.clone(), token.clone()) else {
                console::error!("upload skipped: admin session unavailable");
                return;
            };
            let task = TaskHandle::new();
            let signal = task.signal();
            let ticket = uploads.borrow_mut().start(&file_id, task);
            let uploads = uploads.clone();
            let rows = rows.clone();
            spawn_local(async move {
                let outcome = api
                    .client
                    .upload_translated(&token, &file_id, &file, signal.as_ref())
                    .await;
                if !is_live(signal.as_ref()) {
                    return;
                }
                drop(uploads.borrow_mut().finish(&file_id, ticket));
                match outcome {
                    ApiOutcome::Ok(ack) => rows.dispatch(RowsAction::Translated {
                        file_id,
                        translated_url: ack.translated_url,
                    }),
                    ApiOutcome::AuthFailed => {
                        console::error!("error uploading translated file", NOT_AUTHORIZED);
                        push_error(NOT_AUTHORIZED);
                    }
                    ApiOutcome::ServerError(message) => {
                        console::error!("error uploading translated file", message.clone());
                        push_error(message);
                    }
                }
            });
        })
    };

    let on_logout = Callback::from(move |_: MouseEvent| logout(Role::Admin, navigator.as_ref()));
    let on_download = {
        let token = (*token).clone();
        Callback::from(move |id: String| download_record(api.clone(), token.clone(), id))
    };

    html! {
        <div class="container mt-5">
            <h2>{"All Files"}</h2>
            <button class="btn btn-danger mb-3" onclick={on_logout}>{"Logout"}</button>
            <table class="table">
                <thead>
                    <tr>
                        <th>{"Client"}</th>
                        <th>{"Original File"}</th>
                        <th>{"Status"}</th>
                        <th>{"Translated File"}</th>
                        <th>{"Actions"}</th>
                    </tr>
                </thead>
                <tbody>
                    {for rows.0.iter().map(|record| render_row(record, &on_download, &on_translated))}
                </tbody>
            </table>
        </div>
    }
}

fn render_row(
    record: &FileRecord,
    on_download: &Callback<String>,
    on_translated: &Callback<(String, File)>,
) -> Html {
    let download_button = |class: &'static str| {
        let id = admin_download_id(record).to_string();
        let on_download = on_download.clone();
        let onclick = Callback::from(move |_: MouseEvent| on_download.emit(id.clone()));
        html! { <button class={classes!("btn", "btn-sm", class)} {onclick}>{"Download"}</button> }
    };

    let translated = if record.is_complete() {
        download_button("btn-success")
    } else {
        html! { {"Pending"} }
    };

    let action = if record.is_complete() {
        html! {}
    } else {
        let file_id = record.id.clone();
        let on_translated = on_translated.clone();
        let onchange = Callback::from(move |event: Event| {
            let file = event
                .target_dyn_into::<HtmlInputElement>()
                .and_then(|input| input.files())
                .and_then(|list| list.get(0));
            if let Some(file) = file {
                on_translated.emit((file_id.clone(), file));
            }
        });
        html! { <input type="file" class="form-control form-control-sm" {onchange} /> }
    };

    html! {
        <tr key={record.id.clone()}>
            <td>{owner_label(record).to_string()}</td>
            <td>{download_button("btn-secondary")}</td>
            <td>{record.status_label().to_string()}</td>
            <td>{translated}</td>
            <td>{action}</td>
        </tr>
    }
}
