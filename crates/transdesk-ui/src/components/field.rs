//! Labelled form input with inline validation feedback.

use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct FieldInputProps {
    pub id: AttrValue,
    pub label: AttrValue,
    pub value: AttrValue,
    #[prop_or(AttrValue::Static("text"))]
    pub input_type: AttrValue,
    #[prop_or_default]
    pub error: Option<&'static str>,
    /// Adds a Show/Hide toggle that flips the input between password and text.
    #[prop_or_default]
    pub revealable: bool,
    #[prop_or_default]
    pub disabled: bool,
    pub on_input: Callback<String>,
    pub on_blur: Callback<()>,
}

#[function_component(FieldInput)]
pub(crate) fn field_input(props: &FieldInputProps) -> Html {
    let revealed = use_state(|| false);
    let input_type = if props.revealable && *revealed {
        AttrValue::Static("text")
    } else {
        props.input_type.clone()
    };
    let oninput = {
        let on_input = props.on_input.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                on_input.emit(input.value());
            }
        })
    };
    let onblur = {
        let on_blur = props.on_blur.clone();
        Callback::from(move |_: FocusEvent| on_blur.emit(()))
    };
    let toggle = {
        let revealed = revealed.clone();
        Callback::from(move |_: MouseEvent| revealed.set(!*revealed))
    };
    let invalid = props.error.is_some();

    html! {
        <div class="mb-3">
            <label class="form-label" for={props.id.clone()}>{props.label.clone()}</label>
            <div class="input-group has-validation">
                <input
                    id={props.id.clone()}
                    name={props.id.clone()}
                    type={input_type}
                    class={classes!("form-control", invalid.then_some("is-invalid"))}
                    value={props.value.clone()}
                    disabled={props.disabled}
                    {oninput}
                    {onblur}
                />
                {if props.revealable {
                    html! {
                        <button type="button" class="btn btn-outline-secondary" onclick={toggle}>
                            {if *revealed { "Hide" } else { "Show" }}
                        </button>
                    }
                } else {
                    html! {}
                }}
                {if let Some(message) = props.error {
                    html! { <div class="invalid-feedback">{message}</div> }
                } else {
                    html! {}
                }}
            </div>
        </div>
    }
}
