//! Sign-up and log-in modals.

use api::{LoginCredentials, SignUpCredentials, User};
use dioxus::prelude::*;

use crate::components::{Button, FieldError, Label, TextInput};
use crate::feedback::Feedback;
use crate::notify::alert;
use crate::recipe_form::REQUIRED;
use crate::session::{use_gateway, use_session, Session};
use crate::views::ModalOverlay;

fn required(value: &str) -> Option<String> {
    value.trim().is_empty().then(|| REQUIRED.to_string())
}

fn show(feedback: Feedback, mut inline: Signal<Option<String>>) {
    match feedback {
        Feedback::Inline(message) => inline.set(Some(message)),
        Feedback::Alert(message) => {
            tracing::error!("{message}");
            alert(&message);
        }
    }
}

#[component]
pub fn SignUpModal(on_dismiss: EventHandler<()>, on_signed_up: EventHandler<User>) -> Element {
    let gateway = use_gateway();
    let mut session = use_session();

    let mut username = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut missing = use_signal(|| [None::<String>, None, None]);
    let inline_error = use_signal(|| None::<String>);
    let mut submitting = use_signal(|| false);

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        let gateway = gateway.clone();
        async move {
            let credentials = SignUpCredentials {
                username: username().trim().to_string(),
                email: email().trim().to_string(),
                password: password(),
            };
            let checks = [
                required(&credentials.username),
                required(&credentials.email),
                required(&credentials.password),
            ];
            let valid = checks.iter().all(Option::is_none);
            missing.set(checks);
            if !valid || submitting() {
                return;
            }

            submitting.set(true);
            let result = gateway.sign_up(&credentials).await;
            submitting.set(false);
            match result {
                Ok(user) => {
                    tracing::info!(username = %user.username, "Signed up");
                    session.set(Session::LoggedIn(user.clone()));
                    on_signed_up.call(user);
                }
                Err(e) => show(Feedback::for_sign_up(&e), inline_error),
            }
        }
    };

    let [username_err, email_err, password_err] = missing();

    rsx! {
        ModalOverlay {
            title: "Sign Up",
            on_close: move |_| on_dismiss.call(()),
            if let Some(message) = inline_error() {
                div { class: "alert alert-danger", "{message}" }
            }
            form {
                onsubmit,
                div {
                    class: "form-group",
                    Label { html_for: "signup-username", "Username" }
                    TextInput {
                        id: "signup-username",
                        placeholder: "Username",
                        value: username(),
                        invalid: username_err.is_some(),
                        oninput: move |value: String| username.set(value),
                    }
                    FieldError { message: username_err }
                }
                div {
                    class: "form-group",
                    Label { html_for: "signup-email", "Email" }
                    TextInput {
                        id: "signup-email",
                        r#type: "email",
                        placeholder: "Email",
                        value: email(),
                        invalid: email_err.is_some(),
                        oninput: move |value: String| email.set(value),
                    }
                    FieldError { message: email_err }
                }
                div {
                    class: "form-group",
                    Label { html_for: "signup-password", "Password" }
                    TextInput {
                        id: "signup-password",
                        r#type: "password",
                        placeholder: "Password",
                        value: password(),
                        invalid: password_err.is_some(),
                        oninput: move |value: String| password.set(value),
                    }
                    FieldError { message: password_err }
                }
                Button {
                    r#type: "submit",
                    class: "w-100",
                    disabled: submitting(),
                    "Sign Up"
                }
            }
        }
    }
}

#[component]
pub fn LogInModal(on_dismiss: EventHandler<()>, on_logged_in: EventHandler<User>) -> Element {
    let gateway = use_gateway();
    let mut session = use_session();

    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut missing = use_signal(|| [None::<String>, None]);
    let inline_error = use_signal(|| None::<String>);
    let mut submitting = use_signal(|| false);

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        let gateway = gateway.clone();
        async move {
            let credentials = LoginCredentials {
                username: username().trim().to_string(),
                password: password(),
            };
            let checks = [required(&credentials.username), required(&credentials.password)];
            let valid = checks.iter().all(Option::is_none);
            missing.set(checks);
            if !valid || submitting() {
                return;
            }

            submitting.set(true);
            let result = gateway.log_in(&credentials).await;
            submitting.set(false);
            match result {
                Ok(user) => {
                    tracing::info!(username = %user.username, "Logged in");
                    session.set(Session::LoggedIn(user.clone()));
                    on_logged_in.call(user);
                }
                Err(e) => show(Feedback::for_log_in(&e), inline_error),
            }
        }
    };

    let [username_err, password_err] = missing();

    rsx! {
        ModalOverlay {
            title: "Log In",
            on_close: move |_| on_dismiss.call(()),
            if let Some(message) = inline_error() {
                div { class: "alert alert-danger", "{message}" }
            }
            form {
                onsubmit,
                div {
                    class: "form-group",
                    Label { html_for: "login-username", "Username" }
                    TextInput {
                        id: "login-username",
                        placeholder: "Username",
                        value: username(),
                        invalid: username_err.is_some(),
                        oninput: move |value: String| username.set(value),
                    }
                    FieldError { message: username_err }
                }
                div {
                    class: "form-group",
                    Label { html_for: "login-password", "Password" }
                    TextInput {
                        id: "login-password",
                        r#type: "password",
                        placeholder: "Password",
                        value: password(),
                        invalid: password_err.is_some(),
                        oninput: move |value: String| password.set(value),
                    }
                    FieldError { message: password_err }
                }
                Button {
                    r#type: "submit",
                    class: "w-100",
                    disabled: submitting(),
                    "Log In"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required() {
        assert_eq!(required("  "), Some(REQUIRED.to_string()));
        assert_eq!(required("julia"), None);
    }
}
