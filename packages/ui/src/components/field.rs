use dioxus::prelude::*;

fn control_class(invalid: bool) -> &'static str {
    if invalid {
        "form-control is-invalid"
    } else {
        "form-control"
    }
}

#[component]
pub fn Label(html_for: String, children: Element) -> Element {
    rsx! {
        label { class: "form-label", r#for: "{html_for}", {children} }
    }
}

/// Validation message under an input. Renders nothing without a message.
#[component]
pub fn FieldError(message: Option<String>) -> Element {
    match message {
        Some(message) => rsx! {
            div { class: "field-error", "{message}" }
        },
        None => rsx! {},
    }
}

#[component]
pub fn TextInput(
    id: String,
    value: String,
    #[props(default = "text".to_string())] r#type: String,
    #[props(default)] placeholder: String,
    #[props(default)] invalid: bool,
    oninput: EventHandler<String>,
) -> Element {
    let class = control_class(invalid);
    rsx! {
        input {
            id: "{id}",
            class,
            r#type: r#type,
            placeholder: "{placeholder}",
            value: "{value}",
            oninput: move |evt: FormEvent| oninput.call(evt.value()),
        }
    }
}

#[component]
pub fn TextArea(
    id: String,
    value: String,
    #[props(default = 1)] rows: u32,
    #[props(default)] placeholder: String,
    #[props(default)] invalid: bool,
    oninput: EventHandler<String>,
) -> Element {
    let class = control_class(invalid);
    rsx! {
        textarea {
            id: "{id}",
            class,
            rows: "{rows}",
            placeholder: "{placeholder}",
            value: "{value}",
            oninput: move |evt: FormEvent| oninput.call(evt.value()),
        }
    }
}
