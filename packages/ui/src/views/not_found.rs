use dioxus::prelude::*;

#[component]
pub fn NotFoundView(path: String) -> Element {
    rsx! {
        div {
            class: "not-found",
            h1 { "Page not found" }
            p { "Sorry, nothing lives at /{path}." }
        }
    }
}
