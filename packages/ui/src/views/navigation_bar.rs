use dioxus::prelude::*;

use crate::components::{Button, ButtonVariant};
use crate::icons::FaUser;
use crate::session::{use_session, LogoutButton, Session};
use crate::Icon;

/// Top bar. Routing stays with the platform package: links are passed in
/// as children and searches are reported through `on_search`.
#[component]
pub fn NavigationBar(
    on_search: EventHandler<String>,
    on_sign_up_clicked: EventHandler<()>,
    on_log_in_clicked: EventHandler<()>,
    on_logged_out: EventHandler<()>,
    /// Brand and page links.
    children: Element,
) -> Element {
    let session = use_session();
    let mut term = use_signal(String::new);

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        on_search.call(term());
    };

    let account = match &*session.read() {
        Session::LoggedIn(user) => {
            let greeting = format!("Hi, {}", user.username);
            rsx! {
                span {
                    class: "navbar-text",
                    Icon { icon: FaUser, width: 14, height: 14 }
                    " {greeting}"
                }
                LogoutButton { on_logged_out: move |_| on_logged_out.call(()) }
            }
        }
        Session::LoggedOut => rsx! {
            Button {
                variant: ButtonVariant::Outline,
                onclick: move |_| on_sign_up_clicked.call(()),
                "Sign Up"
            }
            Button {
                variant: ButtonVariant::Outline,
                onclick: move |_| on_log_in_clicked.call(()),
                "Log In"
            }
        },
        Session::Unknown => rsx! {},
    };

    rsx! {
        nav {
            class: "navbar",
            div { class: "navbar-links", {children} }
            form {
                class: "navbar-search",
                role: "search",
                onsubmit,
                input {
                    class: "form-control",
                    r#type: "search",
                    placeholder: "Search",
                    aria_label: "Search",
                    value: "{term}",
                    oninput: move |evt: FormEvent| term.set(evt.value()),
                }
                Button { variant: ButtonVariant::Outline, r#type: "submit", "Search" }
            }
            div { class: "navbar-account", {account} }
        }
    }
}

/// The `DishDialog` word mark.
#[component]
pub fn Brand() -> Element {
    rsx! {
        span {
            class: "brand",
            span { class: "brand-accent", "D" }
            "ish"
            span { class: "brand-accent", "D" }
            "ialog"
        }
    }
}
