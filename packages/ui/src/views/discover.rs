use api::Recipe;
use dioxus::prelude::*;

use crate::components::{LoadError, Spinner};
use crate::image_probe::DetailVariant;
use crate::list_state::ListView;
use crate::loader::use_list;
use crate::map::RecipeMap;
use crate::recipe_detail::RecipeDetailDialog;
use crate::session::use_gateway;

/// Map of public recipes that were saved with a location.
#[component]
pub fn DiscoverPage() -> Element {
    let gateway = use_gateway();
    let mut selected = use_signal(|| None::<Recipe>);

    let recipes = use_list(move || {
        let gateway = gateway.clone();
        async move { gateway.list_public_recipes().await }
    });

    let state = recipes.read();
    let body = match state.view() {
        ListView::Loading => rsx! { Spinner {} },
        ListView::Failed => rsx! { LoadError {} },
        ListView::Empty => rsx! {
            RecipeMap { recipes: Vec::new(), on_select: move |r: Recipe| selected.set(Some(r)) }
        },
        ListView::Items(items) => rsx! {
            RecipeMap { recipes: items.to_vec(), on_select: move |r: Recipe| selected.set(Some(r)) }
        },
    };

    let detail = selected().map(|recipe| (DetailVariant::from_recipe(&recipe), recipe));

    rsx! {
        div {
            class: "discover-page",
            {body}
        }
        if let Some((variant, recipe)) = detail {
            RecipeDetailDialog {
                recipe,
                variant,
                on_dismiss: move |_| selected.set(None),
            }
        }
    }
}
