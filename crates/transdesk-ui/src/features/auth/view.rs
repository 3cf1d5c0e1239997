//! Login and signup screens, shared by both roles.

use crate::app::api::ApiCtx;
use crate::app::preferences::BrowserStorage;
use crate::app::{Route, push_error, push_toast};
use crate::components::field::FieldInput;
use crate::core::notify::{LOGIN_SUCCESS_AUTO_CLOSE_MS, SUCCESS_AUTO_CLOSE_MS, ToastKind};
use crate::core::outcome::{ApiOutcome, SIGNUP_FAILED, USER_NOT_FOUND};
use crate::core::routing::{LOGIN_REDIRECT_DELAY_MS, Screen, after_login, after_signup};
use crate::core::store::AppStore;
use crate::features::auth::logic::{signup_failure_feedback, signup_success_message};
use crate::features::auth::state::{CredentialForm, Field, FormState, LoginForm, SignupForm};
use gloo::console;
use gloo_timers::callback::Timeout;
use transdesk_api_models::Role;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::Dispatch;

const LOGIN_SUCCESS: &str = "Successfully logged in!";

#[derive(Properties, PartialEq)]
pub(crate) struct AuthPageProps {
    pub role: Role,
}

#[function_component(LoginPage)]
pub(crate) fn login_page(props: &AuthPageProps) -> Html {
    let role = props.role;
    let api = use_context::<ApiCtx>();
    let navigator = use_navigator();
    let form = use_state(FormState::<LoginForm>::default);
    // Dropped on unmount, which cancels a pending redirect.
    let redirect = use_mut_ref(|| None::<Timeout>);

    let onsubmit = {
        let form = form.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let mut pending = (*form).clone();
            let Some(request) = pending.begin_submit() else {
                form.set(pending);
                return;
            };
            let Some(api) = api.clone() else {
                console::error!("api context missing");
                pending.finish_submit();
                form.set(pending);
                return;
            };
            form.set(pending.clone());

            let form = form.clone();
            let navigator = navigator.clone();
            let redirect = redirect.clone();
            spawn_local(async move {
                let outcome = api.client.signin(role, &request).await;
                pending.finish_submit();
                form.set(pending);
                match outcome {
                    ApiOutcome::Ok(session) => {
                        Dispatch::<AppStore>::new().reduce_mut(move |store| {
                            store.session.sign_in(&BrowserStorage, role, session);
                            store.toasts.push(
                                ToastKind::Success,
                                LOGIN_SUCCESS,
                                LOGIN_SUCCESS_AUTO_CLOSE_MS,
                            );
                        });
                        if let Some(navigator) = navigator {
                            let target = Route::from(after_login(role));
                            *redirect.borrow_mut() =
                                Some(Timeout::new(LOGIN_REDIRECT_DELAY_MS, move || {
                                    navigator.replace(&target);
                                }));
                        }
                    }
                    ApiOutcome::AuthFailed => push_error(USER_NOT_FOUND),
                    ApiOutcome::ServerError(message) => push_error(message),
                }
            });
        })
    };

    html! {
        <AuthFrame {role} title={format!("{} Login", role.label())}>
            <form {onsubmit} novalidate={true}>
                {render_fields(&form)}
                <SubmitButton label="Login" busy={form.is_busy()} />
            </form>
            <p class="mt-3 text-center">
                {"Don't have an account? "}
                <Link<Route> to={Route::from(Screen::Signup(role))}>{"Sign up"}</Link<Route>>
            </p>
            <p class="text-center">
                <Link<Route> to={Route::from(Screen::Login(role.other()))}>
                    {format!("Switch to {} Login", role.other().label())}
                </Link<Route>>
            </p>
        </AuthFrame>
    }
}

#[function_component(SignupPage)]
pub(crate) fn signup_page(props: &AuthPageProps) -> Html {
    let role = props.role;
    let api = use_context::<ApiCtx>();
    let navigator = use_navigator();
    let form = use_state(FormState::<SignupForm>::default);

    let onsubmit = {
        let form = form.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let mut pending = (*form).clone();
            let Some(request) = pending.begin_submit() else {
                form.set(pending);
                return;
            };
            let Some(api) = api.clone() else {
                console::error!("api context missing");
                pending.finish_submit();
                form.set(pending);
                return;
            };
            form.set(pending.clone());

            let form = form.clone();
            let navigator = navigator.clone();
            spawn_local(async move {
                let outcome = api.client.signup(role, &request).await;
                pending.finish_submit();
                match outcome {
                    ApiOutcome::Ok(_) => {
                        form.set(pending);
                        push_toast(
                            ToastKind::Success,
                            signup_success_message(role),
                            SUCCESS_AUTO_CLOSE_MS,
                        );
                        if let Some(navigator) = navigator {
                            navigator.push(&Route::from(after_signup(role)));
                        }
                    }
                    ApiOutcome::AuthFailed => {
                        form.set(pending);
                        push_error(SIGNUP_FAILED);
                    }
                    ApiOutcome::ServerError(message) => {
                        let feedback = signup_failure_feedback(&message);
                        if let Some(email_error) = feedback.email_error {
                            pending.reject_field(Field::Email, email_error);
                        }
                        form.set(pending);
                        push_error(feedback.toast);
                    }
                }
            });
        })
    };

    html! {
        <AuthFrame {role} title={format!("{} Signup", role.label())}>
            <form {onsubmit} novalidate={true}>
                {render_fields(&form)}
                <SubmitButton label="Sign Up" busy={form.is_busy()} />
            </form>
            <p class="mt-3 text-center">
                {"Already have an account? "}
                <Link<Route> to={Route::from(Screen::Login(role))}>{"Login"}</Link<Route>>
            </p>
        </AuthFrame>
    }
}

#[derive(Properties, PartialEq)]
struct AuthFrameProps {
    role: Role,
    title: String,
    children: Children,
}

#[function_component(AuthFrame)]
fn auth_frame(props: &AuthFrameProps) -> Html {
    html! {
        <div class={classes!("auth-page", format!("auth-page-{}", props.role.as_str()))}>
            <div class="container d-flex justify-content-center align-items-center min-vh-100">
                <div class="card shadow p-4 w-100" style="max-width: 420px;">
                    <h2 class="text-center mb-4">{props.title.clone()}</h2>
                    {for props.children.iter()}
                </div>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct SubmitButtonProps {
    label: AttrValue,
    busy: bool,
}

#[function_component(SubmitButton)]
fn submit_button(props: &SubmitButtonProps) -> Html {
    html! {
        <button type="submit" class="btn btn-primary w-100" disabled={props.busy}>
            {if props.busy {
                html! {
                    <>
                        <span class="spinner-border spinner-border-sm me-2" role="status" aria-hidden="true"></span>
                        {"Loading..."}
                    </>
                }
            } else {
                html! { {props.label.clone()} }
            }}
        </button>
    }
}

fn render_fields<F: CredentialForm + 'static>(form: &UseStateHandle<FormState<F>>) -> Html {
    F::FIELDS
        .iter()
        .map(|&field| {
            let (id, label, input_type) = field_meta(field);
            let on_input = {
                let form = form.clone();
                Callback::from(move |value: String| {
                    let mut next = (*form).clone();
                    next.edit(field, value);
                    form.set(next);
                })
            };
            let on_blur = {
                let form = form.clone();
                Callback::from(move |()| {
                    let mut next = (*form).clone();
                    next.touch(field);
                    form.set(next);
                })
            };
            html! {
                <FieldInput
                    key={id}
                    {id}
                    {label}
                    {input_type}
                    value={form.values.value(field).to_string()}
                    error={form.visible_error(field)}
                    revealable={matches!(field, Field::Password | Field::ConfirmPassword)}
                    disabled={form.is_busy()}
                    {on_input}
                    {on_blur}
                />
            }
        })
        .collect()
}

const fn field_meta(field: Field) -> (&'static str, &'static str, &'static str) {
    match field {
        Field::Name => ("name", "Name", "text"),
        Field::Email => ("email", "Email", "email"),
        Field::Password => ("password", "Password", "password"),
        Field::ConfirmPassword => ("confirmPassword", "Confirm Password", "password"),
    }
}
