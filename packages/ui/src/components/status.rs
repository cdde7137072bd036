use dioxus::prelude::*;

pub const LOAD_ERROR_MESSAGE: &str = "Something went wrong. Please refresh the page.";

#[component]
pub fn Spinner() -> Element {
    rsx! {
        div { class: "spinner", role: "status", aria_label: "Loading" }
    }
}

/// Fixed message shown when a list fails to load.
#[component]
pub fn LoadError(hint: Option<String>) -> Element {
    rsx! {
        p { class: "error-message", "{LOAD_ERROR_MESSAGE}" }
        if let Some(hint) = hint {
            p { class: "error-message", "{hint}" }
        }
    }
}

#[component]
pub fn EmptyMessage(message: String) -> Element {
    rsx! {
        p { class: "error-message", "{message}" }
    }
}
