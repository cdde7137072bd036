use api::Recipe;
use dioxus::prelude::*;

use crate::components::{EmptyMessage, LoadError, Spinner};
use crate::list_state::{ListState, ListView};
use crate::recipe_card::RecipeCard;

/// Renders a recipe list according to its load state.
#[component]
pub fn RecipeGrid(
    state: Signal<ListState<Recipe>>,
    empty_message: String,
    /// Extra line under the load error.
    error_hint: Option<String>,
    on_edit: Option<EventHandler<Recipe>>,
    on_delete: Option<EventHandler<Recipe>>,
) -> Element {
    let state = state.read();

    match state.view() {
        ListView::Loading => rsx! { Spinner {} },
        ListView::Failed => rsx! { LoadError { hint: error_hint } },
        ListView::Empty => rsx! { EmptyMessage { message: empty_message } },
        ListView::Items(recipes) => {
            let cards: Vec<(String, Recipe)> =
                recipes.iter().map(|r| (r.id.clone(), r.clone())).collect();
            rsx! {
                div {
                    class: "recipes-grid",
                    for (id, recipe) in cards {
                        RecipeCard { key: "{id}", recipe, on_edit, on_delete }
                    }
                }
            }
        }
    }
}
