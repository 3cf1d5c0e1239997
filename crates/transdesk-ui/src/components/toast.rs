use crate::core::notify::{Toast, ToastKind};
use gloo::timers::callback::Timeout;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct ToastHostProps {
    pub toasts: Vec<Toast>,
    pub on_dismiss: Callback<u64>,
}

/// Stacked notifications pinned to the top-right corner.
#[function_component(ToastHost)]
pub(crate) fn toast_host(props: &ToastHostProps) -> Html {
    html! {
        <div class="toast-container position-fixed top-0 end-0 p-3" aria-live="polite" aria-atomic="true">
            {for props.toasts.iter().map(|toast| html! {
                <ToastItem key={toast.id} toast={toast.clone()} on_dismiss={props.on_dismiss.clone()} />
            })}
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct ToastItemProps {
    toast: Toast,
    on_dismiss: Callback<u64>,
}

/// One toast. Its timer is armed on mount and lives until the toast leaves the
/// stack, so neighbours arriving or closing never reset it.
#[function_component(ToastItem)]
fn toast_item(props: &ToastItemProps) -> Html {
    {
        let on_dismiss = props.on_dismiss.clone();
        let delay = props.toast.auto_close_ms;
        use_effect_with_deps(
            move |id: &u64| {
                let id = *id;
                let handle = Timeout::new(delay, move || on_dismiss.emit(id));
                move || drop(handle)
            },
            props.toast.id,
        );
    }

    let tone = match props.toast.kind {
        ToastKind::Success => "text-bg-success",
        ToastKind::Error => "text-bg-danger",
    };
    let on_close = {
        let on_dismiss = props.on_dismiss.clone();
        let id = props.toast.id;
        Callback::from(move |_| on_dismiss.emit(id))
    };

    html! {
        <div class={classes!("toast", "show", "align-items-center", "border-0", "mb-2", tone)} role="status">
            <div class="d-flex">
                <div class="toast-body">{props.toast.message.clone()}</div>
                <button type="button" class="btn-close btn-close-white me-2 m-auto" aria-label="Close" onclick={on_close}></button>
            </div>
        </div>
    }
}
