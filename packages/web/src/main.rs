use api::{Gateway, GatewayConfig};
use dioxus::logger::tracing::Level;
use dioxus::prelude::*;
use views::{Community, Discover, Home, NotFound, Search, Shell};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Shell)]
        #[route("/")]
        Home {},
        #[route("/community")]
        Community {},
        #[route("/discover")]
        Discover {},
        #[route("/search?:term")]
        Search { term: String },
        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

const FAVICON: Asset = asset!("/assets/favicon.svg");
const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::logger::init(Level::INFO).expect("failed to init logger");
    dioxus::launch(App);
}

fn connect() -> Result<Gateway, String> {
    let config = GatewayConfig::from_env().map_err(|e| e.to_string())?;
    tracing::info!(base_url = %config.base_url, "Using backend");
    Gateway::new(config).map_err(|e| e.to_string())
}

#[component]
fn App() -> Element {
    let gateway = use_hook(connect);

    rsx! {
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        {match gateway {
            Ok(gateway) => rsx! {
                ui::GatewayProvider {
                    gateway,
                    ui::SessionProvider {
                        Router::<Route> {}
                    }
                }
            },
            Err(message) => rsx! {
                p { class: "error-message", "Cannot reach the recipe service: {message}" }
            },
        }}
    }
}
