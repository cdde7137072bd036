//! Session context and hooks for the UI.

use api::{Gateway, GatewayError, User};
use dioxus::prelude::*;

use crate::components::{Button, ButtonVariant};
use crate::notify::report_failure;

/// Who is using the app.
///
/// `Unknown` lasts until the start-up session check answers, so views can
/// tell "not checked yet" apart from "logged out".
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Session {
    #[default]
    Unknown,
    LoggedOut,
    LoggedIn(User),
}

impl Session {
    /// Interpret the answer of `GET /api/users`.
    pub fn from_lookup(result: Result<User, GatewayError>) -> Self {
        match result {
            Ok(user) => Self::LoggedIn(user),
            Err(GatewayError::Unauthorized(_)) => Self::LoggedOut,
            Err(e) => {
                tracing::error!("Failed to check session: {e}");
                Self::LoggedOut
            }
        }
    }

    pub fn user(&self) -> Option<&User> {
        match self {
            Self::LoggedIn(user) => Some(user),
            _ => None,
        }
    }

    pub fn is_resolved(&self) -> bool {
        !matches!(self, Self::Unknown)
    }
}

/// Get the gateway provided by [`GatewayProvider`].
pub fn use_gateway() -> Gateway {
    use_context::<Gateway>()
}

/// Get the current session. Updates when the user logs in or out.
pub fn use_session() -> Signal<Session> {
    use_context::<Signal<Session>>()
}

/// Makes a [`Gateway`] available to every component below it.
#[component]
pub fn GatewayProvider(gateway: Gateway, children: Element) -> Element {
    use_context_provider(|| gateway);
    rsx! {
        {children}
    }
}

/// Provider component that resolves the session on start.
/// Must sit below a [`GatewayProvider`].
#[component]
pub fn SessionProvider(children: Element) -> Element {
    let mut session = use_signal(Session::default);
    let gateway = use_gateway();

    let _ = use_resource(move || {
        let gateway = gateway.clone();
        async move {
            let resolved = Session::from_lookup(gateway.current_user().await);
            tracing::info!(logged_in = resolved.user().is_some(), "Session resolved");
            session.set(resolved);
        }
    });

    use_context_provider(|| session);

    rsx! {
        {children}
    }
}

/// Button to log out the current user.
#[component]
pub fn LogoutButton(
    #[props(default = "Log out".to_string())] label: String,
    on_logged_out: Option<EventHandler<()>>,
) -> Element {
    let mut session = use_session();
    let gateway = use_gateway();

    let onclick = move |_| {
        let gateway = gateway.clone();
        async move {
            match gateway.log_out().await {
                Ok(()) => {
                    session.set(Session::LoggedOut);
                    if let Some(handler) = on_logged_out {
                        handler.call(());
                    }
                }
                Err(e) => report_failure("Log out", &e),
            }
        }
    };

    rsx! {
        Button {
            variant: ButtonVariant::Outline,
            onclick,
            "{label}"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn julia() -> User {
        User {
            id: "u1".into(),
            username: "julia".into(),
            email: "julia@example.com".into(),
        }
    }

    #[test]
    fn test_starts_unknown() {
        let session = Session::default();
        assert!(!session.is_resolved());
        assert!(session.user().is_none());
    }

    #[test]
    fn test_found_user_logs_in() {
        let session = Session::from_lookup(Ok(julia()));
        assert_eq!(session.user(), Some(&julia()));
        assert!(session.is_resolved());
    }

    #[test]
    fn test_unauthorized_means_logged_out() {
        let session = Session::from_lookup(Err(GatewayError::Unauthorized("no".into())));
        assert_eq!(session, Session::LoggedOut);
    }

    #[test]
    fn test_other_failures_fall_back_to_logged_out() {
        let err = GatewayError::from_status(500, "db down".into());
        assert_eq!(Session::from_lookup(Err(err)), Session::LoggedOut);
    }
}
