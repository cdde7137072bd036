use api::Recipe;
use dioxus::prelude::*;

use crate::components::{Button, ButtonVariant, Spinner};
use crate::list_state::ListState;
use crate::loader::use_list;
use crate::notify::report_failure;
use crate::recipe_form::AddEditRecipeDialog;
use crate::session::{use_gateway, use_session, Session};
use crate::views::RecipeGrid;

pub const MY_RECIPES_EMPTY: &str = "It's empty here. Create your own recipe now!";
pub const LOGGED_OUT_WELCOME: &str = "Please log in to see your recipes";

/// Landing page: the user's own recipes, or a welcome when logged out.
#[component]
pub fn RecipesPage() -> Element {
    let session = use_session();
    let current = session();

    match current {
        Session::Unknown => rsx! { Spinner {} },
        Session::LoggedOut => rsx! {
            div {
                class: "welcome",
                h1 { "Welcome to DishDialog" }
                p { "{LOGGED_OUT_WELCOME}" }
            }
        },
        Session::LoggedIn(_) => rsx! { MyRecipesView {} },
    }
}

/// Dialog currently open on the page.
#[derive(Debug, Clone, PartialEq)]
enum Editor {
    Closed,
    Adding,
    Editing(Recipe),
}

#[component]
fn MyRecipesView() -> Element {
    let gateway = use_gateway();
    let mut editor = use_signal(|| Editor::Closed);

    let mut recipes = use_list({
        let gateway = gateway.clone();
        move || {
            let gateway = gateway.clone();
            async move { gateway.list_recipes().await }
        }
    });

    let on_delete = move |recipe: Recipe| {
        let gateway = gateway.clone();
        spawn(async move {
            delete_recipe(&gateway, recipes, recipe).await;
        });
    };

    let on_saved = move |saved: Recipe| {
        let mut list = recipes.write();
        if !list.replace(saved.clone()) {
            list.insert(saved);
        }
        drop(list);
        editor.set(Editor::Closed);
    };

    let dialog = match editor() {
        Editor::Closed => None,
        Editor::Adding => Some(None),
        Editor::Editing(recipe) => Some(Some(recipe)),
    };

    rsx! {
        Button {
            variant: ButtonVariant::Dark,
            class: "add-recipe",
            onclick: move |_| editor.set(Editor::Adding),
            "+ Add new recipe"
        }
        RecipeGrid {
            state: recipes,
            empty_message: MY_RECIPES_EMPTY,
            on_edit: move |recipe: Recipe| editor.set(Editor::Editing(recipe)),
            on_delete,
        }
        if let Some(recipe_to_edit) = dialog {
            AddEditRecipeDialog {
                recipe_to_edit,
                on_dismiss: move |_| editor.set(Editor::Closed),
                on_saved,
            }
        }
    }
}

async fn delete_recipe(
    gateway: &api::Gateway,
    mut recipes: Signal<ListState<Recipe>>,
    recipe: Recipe,
) {
    match gateway.delete_recipe(&recipe.id).await {
        Ok(()) => {
            tracing::info!(id = %recipe.id, "Recipe deleted");
            recipes.write().remove(&recipe.id);
        }
        Err(e) => report_failure("Delete recipe", &e),
    }
}

#[cfg(test)]
mod tests {
    use dioxus::dioxus_core::VirtualDom;

    use super::*;

    fn logged_out_app() -> Element {
        use_context_provider(|| Signal::new(Session::LoggedOut));
        rsx! { RecipesPage {} }
    }

    fn unknown_app() -> Element {
        use_context_provider(|| Signal::new(Session::Unknown));
        rsx! { RecipesPage {} }
    }

    #[test]
    fn test_logged_out_page_shows_welcome() {
        let mut dom = VirtualDom::new(logged_out_app);
        let mutations = dom.rebuild_to_vec();
        assert!(format!("{:?}", mutations.edits).contains(LOGGED_OUT_WELCOME));
    }

    #[test]
    fn test_pending_session_renders_without_welcome() {
        let mut dom = VirtualDom::new(unknown_app);
        let mutations = dom.rebuild_to_vec();
        assert!(!format!("{:?}", mutations.edits).contains(LOGGED_OUT_WELCOME));
    }
}
