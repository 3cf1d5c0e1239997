use crate::app::api::ApiCtx;
use crate::app::preferences::BrowserStorage;
use crate::components::toast::ToastHost;
use crate::core::config::UiConfig;
use crate::core::notify::ToastKind;
use crate::core::routing::{RouteDecision, Screen, resolve};
use crate::core::session::SessionState;
use crate::core::store::AppStore;
use crate::features::auth::view::{LoginPage, SignupPage};
use crate::features::files::admin_view::AdminFilesPage;
use crate::features::files::client_view::ClientFilesPage;
pub(crate) use routes::Route;
use transdesk_api_models::Role;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::{Dispatch, use_selector};

pub(crate) mod api;
pub(crate) mod preferences;
mod routes;

/// Queue a notification on the shared host.
pub(crate) fn push_toast(kind: ToastKind, message: impl Into<String>, auto_close_ms: u32) {
    let message = message.into();
    Dispatch::<AppStore>::new().reduce_mut(move |store| {
        store.toasts.push(kind, message, auto_close_ms);
    });
}

/// Queue an error notification with the default delay.
pub(crate) fn push_error(message: impl Into<String>) {
    let message = message.into();
    Dispatch::<AppStore>::new().reduce_mut(move |store| {
        store.toasts.error(message);
    });
}

#[function_component(TransdeskApp)]
fn transdesk_app() -> Html {
    let dispatch = Dispatch::<AppStore>::new();
    let api_ctx = use_memo(|_| ApiCtx::new(UiConfig::from_build_env()), ());
    let session_loaded = use_selector(|store: &AppStore| store.session_loaded);
    let toasts = use_selector(|store: &AppStore| store.toasts.items().to_vec());

    {
        let dispatch = dispatch.clone();
        use_effect_with_deps(
            move |_| {
                let session = SessionState::load(&BrowserStorage);
                dispatch.reduce_mut(move |store| {
                    store.session = session;
                    store.session_loaded = true;
                });
                || ()
            },
            (),
        );
    }

    let dismiss_toast = Callback::from(move |id: u64| {
        dispatch.reduce_mut(|store| store.toasts.dismiss(id));
    });

    html! {
        <ContextProvider<ApiCtx> context={(*api_ctx).clone()}>
            <BrowserRouter>
                {if *session_loaded {
                    html! { <Switch<Route> render={switch} /> }
                } else {
                    html! { <LoadingScreen /> }
                }}
                <ToastHost toasts={(*toasts).clone()} on_dismiss={dismiss_toast} />
            </BrowserRouter>
        </ContextProvider<ApiCtx>>
    }
}

#[allow(clippy::needless_pass_by_value)]
fn switch(route: Route) -> Html {
    html! { <GuardedScreen screen={route.screen()} /> }
}

#[derive(Properties, PartialEq)]
struct GuardedScreenProps {
    screen: Screen,
}

#[function_component(GuardedScreen)]
fn guarded_screen(props: &GuardedScreenProps) -> Html {
    let session = use_selector(|store: &AppStore| store.session.clone());
    match resolve(props.screen, &session) {
        RouteDecision::Redirect(target) => html! { <Redirect<Route> to={Route::from(target)} /> },
        RouteDecision::Render(Screen::Login(role)) => html! { <LoginPage {role} /> },
        RouteDecision::Render(Screen::Signup(role)) => html! { <SignupPage {role} /> },
        RouteDecision::Render(Screen::Files(Role::Client)) => html! { <ClientFilesPage /> },
        RouteDecision::Render(Screen::Files(Role::Admin)) => html! { <AdminFilesPage /> },
        RouteDecision::Render(Screen::Root | Screen::NotFound) => {
            html! { <Redirect<Route> to={Route::ClientLogin} /> }
        }
    }
}

#[function_component(LoadingScreen)]
fn loading_screen() -> Html {
    html! {
        <div class="d-flex justify-content-center align-items-center vh-100">
            <div class="spinner-border" role="status">
                <span class="visually-hidden">{"Loading..."}</span>
            </div>
        </div>
    }
}

/// Entrypoint invoked by Trunk for wasm32 builds.
pub fn run_app() {
    console_error_panic_hook::set_once();
    if let Some(root) = gloo::utils::document().get_element_by_id("root") {
        yew::Renderer::<TransdeskApp>::with_root(root).render();
    } else {
        yew::Renderer::<TransdeskApp>::new().render();
    }
}
