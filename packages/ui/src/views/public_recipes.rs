use dioxus::prelude::*;

use crate::loader::use_list;
use crate::session::use_gateway;
use crate::views::RecipeGrid;

pub const COMMUNITY_EMPTY: &str = "It's empty here. Check later!";

/// The community feed of public recipes. Read-only.
#[component]
pub fn CommunityPage() -> Element {
    let gateway = use_gateway();
    let recipes = use_list(move || {
        let gateway = gateway.clone();
        async move { gateway.list_public_recipes().await }
    });

    rsx! {
        div {
            class: "recipes-page",
            RecipeGrid { state: recipes, empty_message: COMMUNITY_EMPTY }
        }
    }
}
