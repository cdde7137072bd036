//! Detail dialogs for a single recipe.
//!
//! [`DetailVariant::WithImage`] shows the image, the text and a comment
//! column. [`DetailVariant::WithoutImage`] shows only the text. Edit and
//! delete actions appear only when the viewer owns the recipe.

use api::Recipe;
use dioxus::prelude::*;

use crate::comment_section::{CommentForm, CommentSection};
use crate::components::{Button, ButtonVariant};
use crate::confirm::ConfirmationDialog;
use crate::format::LocalLabels;
use crate::image_probe::DetailVariant;
use crate::session::use_gateway;
use crate::views::ModalOverlay;

pub const DELETE_TITLE: &str = "Confirm Delete";
pub const DELETE_MESSAGE: &str = "Are you sure you want to delete this recipe?";

#[component]
pub fn RecipeDetailDialog(
    recipe: Recipe,
    variant: DetailVariant,
    on_dismiss: EventHandler<()>,
    /// Present only for the owner.
    on_edit: Option<EventHandler<()>>,
    /// Present only for the owner. Called after the user confirmed.
    on_delete: Option<EventHandler<()>>,
) -> Element {
    let mut confirming = use_signal(|| false);

    let created = LocalLabels::created(&recipe);
    let updated = LocalLabels::updated(&recipe);
    let owner_actions = on_edit.is_some() || on_delete.is_some();

    rsx! {
        ModalOverlay {
            title: recipe.title.clone(),
            wide: variant == DetailVariant::WithImage,
            on_close: move |_| on_dismiss.call(()),
            footer: rsx! {
                p {
                    class: "recipe-dates",
                    "{created}"
                    br {}
                    "{updated}"
                }
                Button {
                    variant: ButtonVariant::Secondary,
                    onclick: move |_| on_dismiss.call(()),
                    "Close"
                }
                if owner_actions {
                    if let Some(on_edit) = on_edit {
                        Button {
                            onclick: move |_| on_edit.call(()),
                            "Edit"
                        }
                    }
                    if on_delete.is_some() {
                        Button {
                            variant: ButtonVariant::Danger,
                            onclick: move |_| confirming.set(true),
                            "Delete"
                        }
                    }
                }
            },
            {match variant {
                DetailVariant::WithImage => rsx! { ImageDetail { recipe: recipe.clone() } },
                DetailVariant::WithoutImage => rsx! { TextDetail { recipe: recipe.clone() } },
            }}
        }
        if confirming() {
            if let Some(on_delete) = on_delete {
                ConfirmationDialog {
                    title: DELETE_TITLE,
                    message: DELETE_MESSAGE,
                    on_confirm: move |_| {
                        confirming.set(false);
                        on_delete.call(());
                    },
                    on_cancel: move |_| confirming.set(false),
                }
            }
        }
    }
}

#[component]
fn ImageDetail(recipe: Recipe) -> Element {
    let gateway = use_gateway();
    let mut comments_round = use_signal(|| 0u32);

    let src = gateway.image_url(&recipe.id);
    let image_desc = recipe.image_desc.clone().unwrap_or_default();
    let text = recipe.text.clone().unwrap_or_default();
    let round = comments_round();

    rsx! {
        div {
            class: "recipe-detail",
            div {
                class: "recipe-detail-image",
                img { src: "{src}", alt: "{recipe.title}" }
                p { class: "recipe-image-desc", "{image_desc}" }
            }
            div { class: "recipe-detail-text", "{text}" }
            div {
                class: "recipe-detail-comments",
                CommentSection { recipe_id: recipe.id.clone(), refresh: round }
                CommentForm {
                    recipe_id: recipe.id.clone(),
                    on_posted: move |_| comments_round += 1,
                }
            }
        }
    }
}

#[component]
fn TextDetail(recipe: Recipe) -> Element {
    let text = recipe.text.clone().unwrap_or_default();
    rsx! {
        div { class: "recipe-detail-text", "{text}" }
    }
}
