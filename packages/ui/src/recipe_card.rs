use api::Recipe;
use dioxus::prelude::*;

use crate::confirm::ConfirmationDialog;
use crate::format::LocalLabels;
use crate::icons::FaTrashCan;
use crate::image_probe::{DetailVariant, ImageProbe};
use crate::recipe_detail::{RecipeDetailDialog, DELETE_MESSAGE, DELETE_TITLE};
use crate::session::use_gateway;
use crate::Icon;

/// A recipe in a grid.
///
/// Owned recipes pass `on_edit` and `on_delete`; they get a delete icon on
/// the card and edit/delete buttons in the detail dialog.
#[component]
pub fn RecipeCard(
    recipe: Recipe,
    on_edit: Option<EventHandler<Recipe>>,
    on_delete: Option<EventHandler<Recipe>>,
) -> Element {
    let gateway = use_gateway();
    let mut probe = use_signal(ImageProbe::default);
    let mut show_detail = use_signal(|| false);
    let mut confirming = use_signal(|| false);

    let variant = probe().variant();
    let src = gateway.image_url(&recipe.id);
    let stamp = LocalLabels::card(&recipe);
    let text = recipe.text.clone().unwrap_or_default();

    let edit_handler = on_edit.map(|handler| {
        let recipe = recipe.clone();
        EventHandler::new(move |_: ()| {
            show_detail.set(false);
            handler.call(recipe.clone());
        })
    });
    let delete_handler = on_delete.map(|handler| {
        let recipe = recipe.clone();
        EventHandler::new(move |_: ()| {
            show_detail.set(false);
            handler.call(recipe.clone());
        })
    });

    let delete_icon = rsx! {
        if on_delete.is_some() {
            button {
                class: "card-delete",
                r#type: "button",
                aria_label: "Delete recipe",
                onclick: move |evt: MouseEvent| {
                    evt.stop_propagation();
                    confirming.set(true);
                },
                Icon { icon: FaTrashCan, width: 14, height: 14 }
            }
        }
    };

    rsx! {
        div {
            class: "recipe-card",
            onclick: move |_| show_detail.set(true),
            {match variant {
                DetailVariant::WithImage => rsx! {
                    img {
                        class: "recipe-card-image",
                        src: "{src}",
                        alt: "{recipe.title}",
                        onload: move |_| probe.write().settle(true),
                        onerror: move |_| {
                            tracing::debug!("Recipe image failed to load");
                            probe.write().settle(false);
                        },
                    }
                    div {
                        class: "recipe-card-footer",
                        div { class: "recipe-card-title", "{recipe.title}" }
                        span { class: "recipe-card-author", "{recipe.author}" }
                        span { class: "recipe-card-date", "{stamp}" }
                        {delete_icon}
                    }
                },
                DetailVariant::WithoutImage => rsx! {
                    div {
                        class: "recipe-card-body",
                        div {
                            class: "recipe-card-heading",
                            div { class: "recipe-card-title", "{recipe.title}" }
                            {delete_icon}
                        }
                        p { class: "recipe-card-text", "{text}" }
                    }
                    div {
                        class: "recipe-card-footer",
                        span { class: "recipe-card-author", "{recipe.author}" }
                        span { class: "recipe-card-date", "{stamp}" }
                    }
                },
            }}
        }
        if show_detail() {
            RecipeDetailDialog {
                recipe: recipe.clone(),
                variant,
                on_dismiss: move |_| show_detail.set(false),
                on_edit: edit_handler,
                on_delete: delete_handler,
            }
        }
        if confirming() {
            if let Some(on_delete) = on_delete {
                ConfirmationDialog {
                    title: DELETE_TITLE,
                    message: DELETE_MESSAGE,
                    on_confirm: {
                        let recipe = recipe.clone();
                        move |_| {
                            confirming.set(false);
                            on_delete.call(recipe.clone());
                        }
                    },
                    on_cancel: move |_| confirming.set(false),
                }
            }
        }
    }
}
