use api::{Comment, CommentInput, User};
use dioxus::prelude::*;

use crate::components::{Button, EmptyMessage, FieldError, Label, LoadError, Spinner, TextInput};
use crate::format::LocalLabels;
use crate::list_state::{ListState, ListView};
use crate::loader::use_refreshed_list;
use crate::notify::report_failure;
use crate::session::{use_gateway, use_session};

pub const NO_COMMENTS: &str = "No comments yet. Be the first one!";
pub const LOG_IN_TO_COMMENT: &str = "Please log in to write your comment.";

/// Comments of one recipe. Loads on mount and again when `refresh` changes.
#[component]
pub fn CommentSection(recipe_id: String, #[props(default)] refresh: u32) -> Element {
    let gateway = use_gateway();
    let session = use_session();

    let comments = use_refreshed_list(refresh, move || {
        let gateway = gateway.clone();
        let recipe_id = recipe_id.clone();
        async move { gateway.list_comments(&recipe_id).await }
    });

    let viewer = session.read().user().cloned();
    let state = comments.read();
    let rows: Vec<(String, Comment, bool)> = match state.view() {
        ListView::Items(items) => items
            .iter()
            .map(|c| (c.id.clone(), c.clone(), is_author(viewer.as_ref(), c)))
            .collect(),
        _ => Vec::new(),
    };

    rsx! {
        div {
            class: "comment-section",
            h2 { "Comments:" }
            {match state.view() {
                ListView::Loading => rsx! { Spinner {} },
                ListView::Failed => rsx! { LoadError {} },
                ListView::Empty => rsx! { EmptyMessage { message: NO_COMMENTS } },
                ListView::Items(_) => rsx! {
                    for (id, comment, deletable) in rows {
                        CommentItem { key: "{id}", comment, deletable, list: comments }
                    }
                },
            }}
        }
    }
}

/// Only the author of a comment may delete it.
pub fn is_author(viewer: Option<&User>, comment: &Comment) -> bool {
    viewer.is_some_and(|user| user.id == comment.user.id)
}

#[component]
fn CommentItem(comment: Comment, deletable: bool, list: Signal<ListState<Comment>>) -> Element {
    let gateway = use_gateway();
    let created = LocalLabels::date(&comment.created_at);
    let id = comment.id.clone();

    let on_delete = move |_| {
        let gateway = gateway.clone();
        let id = id.clone();
        let mut list = list;
        async move {
            match gateway.delete_comment(&id).await {
                Ok(()) => {
                    list.write().remove(&id);
                }
                Err(e) => report_failure("Delete comment", &e),
            }
        }
    };

    rsx! {
        div {
            class: "comment",
            h3 { class: "comment-author", "{comment.user.username}:" }
            p { class: "comment-text", "{comment.text}" }
            p { class: "comment-date", "Created at: {created}" }
            if deletable {
                button {
                    class: "comment-delete",
                    r#type: "button",
                    aria_label: "Delete comment",
                    onclick: on_delete,
                    "Delete"
                }
            }
        }
    }
}

/// Comment input for a logged-in viewer, or a prompt to log in.
#[component]
pub fn CommentForm(recipe_id: String, on_posted: EventHandler<Comment>) -> Element {
    let gateway = use_gateway();
    let session = use_session();
    let mut text = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);

    let Some(user) = session.read().user().cloned() else {
        return rsx! {
            p { class: "log-in-hint", "{LOG_IN_TO_COMMENT}" }
        };
    };

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        let gateway = gateway.clone();
        let input = CommentInput::new(text().trim(), &user.id, &recipe_id);
        async move {
            if input.text.is_empty() {
                error.set(Some("Comment is required.".to_string()));
                return;
            }
            error.set(None);
            match gateway.create_comment(&input).await {
                Ok(comment) => {
                    text.set(String::new());
                    on_posted.call(comment);
                }
                Err(e) => report_failure("Post comment", &e),
            }
        }
    };

    rsx! {
        form {
            class: "comment-form",
            onsubmit,
            Label { html_for: "comment-text", "Add your comment!" }
            TextInput {
                id: "comment-text",
                value: text(),
                invalid: error().is_some(),
                oninput: move |value: String| text.set(value),
            }
            FieldError { message: error() }
            Button { r#type: "submit", "Submit" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn comment_by(user_id: &str) -> Comment {
        serde_json::from_value(serde_json::json!({
            "_id": "c1",
            "text": "Lovely",
            "user": {"_id": user_id, "username": "sam"},
            "recipe": "r1",
            "createdAt": "2024-03-01T10:00:00Z",
            "updatedAt": "2024-03-01T10:00:00Z"
        }))
        .unwrap()
    }

    #[test]
    fn test_only_author_can_delete() {
        let sam = User {
            id: "u2".into(),
            username: "sam".into(),
            email: String::new(),
        };
        assert!(is_author(Some(&sam), &comment_by("u2")));
        assert!(!is_author(Some(&sam), &comment_by("u1")));
        assert!(!is_author(None, &comment_by("u2")));
    }
}
