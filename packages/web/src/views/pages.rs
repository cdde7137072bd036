//! Route targets. Each one delegates to the shared view in `ui`.

use dioxus::prelude::*;

#[component]
pub fn Home() -> Element {
    rsx! {
        div { class: "recipes-page", ui::views::RecipesPage {} }
    }
}

#[component]
pub fn Community() -> Element {
    rsx! { ui::views::CommunityPage {} }
}

#[component]
pub fn Discover() -> Element {
    rsx! { ui::views::DiscoverPage {} }
}

#[component]
pub fn Search(term: String) -> Element {
    rsx! { ui::views::SearchResultsPage { term } }
}

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    rsx! { ui::views::NotFoundView { path } }
}
