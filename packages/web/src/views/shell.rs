use dioxus::prelude::*;
use ui::views::{Brand, NavigationBar};
use ui::{LogInModal, SignUpModal};

use crate::Route;

/// Which auth modal is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AuthModal {
    SignUp,
    LogIn,
}

/// Layout around every page: navigation bar, page outlet and the auth
/// modals.
#[component]
pub fn Shell() -> Element {
    let nav = use_navigator();
    let mut modal = use_signal(|| None::<AuthModal>);

    let on_search = move |term: String| {
        nav.push(Route::Search { term });
    };

    rsx! {
        NavigationBar {
            on_search,
            on_sign_up_clicked: move |_| modal.set(Some(AuthModal::SignUp)),
            on_log_in_clicked: move |_| modal.set(Some(AuthModal::LogIn)),
            on_logged_out: move |_| {
                nav.push(Route::Home {});
            },
            Link { to: Route::Home {}, class: "navbar-brand", Brand {} }
            Link { to: Route::Community {}, class: "nav-link", "Community" }
            Link { to: Route::Discover {}, class: "nav-link", "Discover" }
        }
        main {
            class: "page-container",
            Outlet::<Route> {}
        }
        {match modal() {
            Some(AuthModal::SignUp) => rsx! {
                SignUpModal {
                    on_dismiss: move |_| modal.set(None),
                    on_signed_up: move |_| modal.set(None),
                }
            },
            Some(AuthModal::LogIn) => rsx! {
                LogInModal {
                    on_dismiss: move |_| modal.set(None),
                    on_logged_in: move |_| modal.set(None),
                }
            },
            None => rsx! {},
        }}
    }
}
