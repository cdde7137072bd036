use dioxus::prelude::*;

use crate::list_state::ListState;
use crate::loader::load_into;
use crate::session::use_gateway;
use crate::views::RecipeGrid;

pub const NO_RESULTS: &str = "No results found";
pub const SEARCH_SIGN_IN_HINT: &str = "If you haven't signed in yet, please sign in to search.";

pub fn search_heading(term: &str) -> String {
    format!("Search Results for \"{term}\"")
}

/// Results for `term`. Reloads whenever the term changes; an older
/// response arriving after a newer search is discarded.
#[component]
pub fn SearchResultsPage(term: String) -> Element {
    let gateway = use_gateway();
    let recipes = use_signal(ListState::new);
    let heading = search_heading(&term);

    use_effect(use_reactive!(|term| {
        let gateway = gateway.clone();
        load_into(recipes, async move { gateway.search_recipes(&term).await });
    }));

    rsx! {
        div {
            class: "recipes-page",
            h1 { "{heading}" }
            RecipeGrid {
                state: recipes,
                empty_message: NO_RESULTS,
                error_hint: SEARCH_SIGN_IN_HINT,
            }
        }
    }
}
