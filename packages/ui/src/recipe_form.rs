//! # Add/edit recipe dialog
//!
//! One dialog covers both flows. Passing `recipe_to_edit` switches it to edit
//! mode and prefills the form from the stored recipe. Either way the result
//! is a [`RecipeInput`] sent as multipart.

use api::{GeoPoint, ImageFile, Recipe, RecipeInput, Visibility};
use dioxus::prelude::*;

use crate::components::{Button, ButtonVariant, FieldError, Label, TextArea, TextInput};
use crate::geolocation::approximate_position;
use crate::notify::report_failure;
use crate::session::{use_gateway, use_session};
use crate::views::ModalOverlay;

const FORM_ID: &str = "add-edit-recipe-form";

pub const REQUIRED: &str = "Required";

/// Largest accepted image upload.
pub const MAX_IMAGE_BYTES: usize = 5 * 1024 * 1024;

/// What the user has typed so far.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecipeDraft {
    pub title: String,
    pub text: String,
    pub image_desc: String,
    /// `None` until the user picks public or private.
    pub visibility: Option<Visibility>,
    pub image: Option<ImageFile>,
    pub share_location: bool,
    pub location: Option<GeoPoint>,
    /// A position request is in flight.
    pub locating: bool,
}

/// Per-field validation messages.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DraftErrors {
    pub title: Option<String>,
    pub visibility: Option<String>,
    pub image: Option<String>,
}

impl DraftErrors {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.visibility.is_none() && self.image.is_none()
    }
}

impl RecipeDraft {
    pub fn for_edit(recipe: &Recipe) -> Self {
        Self {
            title: recipe.title.clone(),
            text: recipe.text.clone().unwrap_or_default(),
            image_desc: recipe.image_desc.clone().unwrap_or_default(),
            visibility: Some(recipe.visibility()),
            ..Default::default()
        }
    }

    /// Switch sharing on. Returns `true` when a position request should start,
    /// which happens at most once until it answers.
    pub fn start_sharing(&mut self) -> bool {
        self.share_location = true;
        if self.location.is_some() || self.locating {
            return false;
        }
        self.locating = true;
        true
    }

    pub fn stop_sharing(&mut self) {
        self.share_location = false;
        self.location = None;
    }

    /// Record the answer of a position request. A failed request turns
    /// sharing back off.
    pub fn located(&mut self, point: Option<GeoPoint>) {
        self.locating = false;
        match point {
            Some(point) => self.location = Some(point),
            None => self.share_location = false,
        }
    }

    pub fn validate(&self) -> DraftErrors {
        let image = self.image.as_ref().and_then(|image| {
            (image.bytes.len() > MAX_IMAGE_BYTES).then(|| "Image must be 5 MB or smaller".to_string())
        });
        DraftErrors {
            title: self.title.trim().is_empty().then(|| REQUIRED.to_string()),
            visibility: self.visibility.is_none().then(|| REQUIRED.to_string()),
            image,
        }
    }

    /// Build the submission. `author` is only set when creating.
    ///
    /// A location is attached only when sharing is on and a reading has
    /// arrived.
    pub fn to_input(&self, author: Option<String>, editing: Option<&Recipe>) -> RecipeInput {
        RecipeInput {
            author: match editing {
                Some(_) => None,
                None => author,
            },
            title: self.title.trim().to_string(),
            text: self.text.clone(),
            visibility: self.visibility.unwrap_or_default(),
            image: self.image.clone(),
            image_desc: self.image_desc.clone(),
            had_image: editing.is_some_and(|recipe| recipe.has_image),
            location: self.location.filter(|_| self.share_location),
        }
    }
}

#[component]
pub fn AddEditRecipeDialog(
    recipe_to_edit: Option<Recipe>,
    on_dismiss: EventHandler<()>,
    on_saved: EventHandler<Recipe>,
) -> Element {
    let gateway = use_gateway();
    let session = use_session();

    let editing = recipe_to_edit.clone();
    let mut draft = use_signal(move || {
        editing
            .as_ref()
            .map(RecipeDraft::for_edit)
            .unwrap_or_default()
    });
    let mut errors = use_signal(DraftErrors::default);
    let mut submitting = use_signal(|| false);

    let share_location = move |_: MouseEvent| {
        if draft.write().start_sharing() {
            spawn(async move {
                let point = match approximate_position().await {
                    Ok(point) => Some(point),
                    Err(e) => {
                        tracing::warn!("Could not read location: {e}");
                        None
                    }
                };
                draft.write().located(point);
            });
        }
    };

    let title = if recipe_to_edit.is_some() { "Edit recipe" } else { "Add recipe" };
    let editing = recipe_to_edit.clone();

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        let gateway = gateway.clone();
        let editing = editing.clone();
        async move {
            let current = draft();
            let found = current.validate();
            let valid = found.is_empty();
            errors.set(found);
            if !valid || submitting() {
                return;
            }

            let author = session.read().user().map(|u| u.username.clone());
            let input = current.to_input(author, editing.as_ref());

            submitting.set(true);
            let result = match &editing {
                Some(recipe) => gateway.update_recipe(&recipe.id, input).await,
                None => gateway.create_recipe(input).await,
            };
            submitting.set(false);

            match result {
                Ok(recipe) => {
                    tracing::info!(id = %recipe.id, "Recipe saved");
                    on_saved.call(recipe);
                }
                Err(e) => report_failure("Save recipe", &e),
            }
        }
    };

    let on_image = move |evt: FormEvent| async move {
        let Some(engine) = evt.files() else {
            return;
        };
        let Some(name) = engine.files().into_iter().next() else {
            draft.write().image = None;
            return;
        };
        match engine.read_file(&name).await {
            Some(bytes) => draft.write().image = Some(ImageFile::new(name, bytes)),
            None => tracing::error!("Failed to read {name}"),
        }
    };

    let current = draft();
    let field_errors = errors();
    let is_public = current.visibility == Some(Visibility::Public);
    let is_private = current.visibility == Some(Visibility::Private);
    let sharing = current.share_location;
    let (yes_variant, no_variant) = if sharing {
        (ButtonVariant::Primary, ButtonVariant::Secondary)
    } else {
        (ButtonVariant::Secondary, ButtonVariant::Primary)
    };
    let location_note = match (sharing, current.location) {
        (true, None) => Some("Finding your location..."),
        (true, Some(_)) => Some("Approximate location attached."),
        _ => None,
    };

    rsx! {
        ModalOverlay {
            title,
            on_close: move |_| on_dismiss.call(()),
            footer: rsx! {
                Button {
                    r#type: "submit",
                    form: FORM_ID,
                    disabled: submitting(),
                    "Save"
                }
            },
            form {
                id: FORM_ID,
                onsubmit,
                div {
                    class: "form-group",
                    Label { html_for: "recipe-title", "Recipe Title" }
                    TextInput {
                        id: "recipe-title",
                        placeholder: "Title",
                        value: current.title.clone(),
                        invalid: field_errors.title.is_some(),
                        oninput: move |value: String| draft.write().title = value,
                    }
                    FieldError { message: field_errors.title.clone() }
                }
                div {
                    class: "form-group",
                    Label { html_for: "recipe-text", "Text" }
                    TextArea {
                        id: "recipe-text",
                        rows: 10,
                        placeholder: "Text",
                        value: current.text.clone(),
                        oninput: move |value: String| draft.write().text = value,
                    }
                }
                div {
                    class: "form-group",
                    Label { html_for: "recipe-image", "Upload Image (Limit: 5MB)" }
                    input {
                        id: "recipe-image",
                        class: "form-control",
                        r#type: "file",
                        accept: "image/*",
                        onchange: on_image,
                    }
                    FieldError { message: field_errors.image.clone() }
                }
                div {
                    class: "form-group",
                    Label { html_for: "recipe-image-desc", "Image Description" }
                    TextArea {
                        id: "recipe-image-desc",
                        rows: 2,
                        placeholder: "Image Description",
                        value: current.image_desc.clone(),
                        oninput: move |value: String| draft.write().image_desc = value,
                    }
                }
                div {
                    class: "form-group",
                    label {
                        class: "form-check",
                        input {
                            r#type: "radio",
                            name: "isPublic",
                            checked: is_public,
                            onchange: move |_| draft.write().visibility = Some(Visibility::Public),
                        }
                        " Public"
                    }
                    label {
                        class: "form-check",
                        input {
                            r#type: "radio",
                            name: "isPublic",
                            checked: is_private,
                            onchange: move |_| draft.write().visibility = Some(Visibility::Private),
                        }
                        " Private"
                    }
                    FieldError { message: field_errors.visibility.clone() }
                }
            }
            div {
                class: "share-location",
                p { class: "share-location-prompt", "Want to share your location? (We won't show your exact location)" }
                div {
                    class: "button-group",
                    role: "group",
                    aria_label: "Share location",
                    Button {
                        variant: yes_variant,
                        onclick: share_location,
                        "Yes"
                    }
                    Button {
                        variant: no_variant,
                        onclick: move |_| draft.write().stop_sharing(),
                        "No"
                    }
                }
                if let Some(note) = location_note {
                    p { class: "text-muted", "{note}" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stored(has_image: bool) -> Recipe {
        serde_json::from_value(serde_json::json!({
            "_id": "r1",
            "author": "julia",
            "title": "Gumbo",
            "text": "Make a roux.",
            "imageDesc": "Dark roux",
            "hasImage": has_image,
            "isPublic": true,
            "createdAt": "2024-03-01T10:00:00Z",
            "updatedAt": "2024-03-01T10:00:00Z"
        }))
        .unwrap()
    }

    #[test]
    fn test_empty_draft_requires_title_and_visibility() {
        let errors = RecipeDraft::default().validate();
        assert_eq!(errors.title.as_deref(), Some(REQUIRED));
        assert_eq!(errors.visibility.as_deref(), Some(REQUIRED));
        assert!(!errors.is_empty());
    }

    #[test]
    fn test_whitespace_title_is_missing() {
        let draft = RecipeDraft {
            title: "   ".into(),
            visibility: Some(Visibility::Private),
            ..Default::default()
        };
        let errors = draft.validate();
        assert!(errors.title.is_some());
        assert!(errors.visibility.is_none());
    }

    #[test]
    fn test_oversized_image_is_rejected() {
        let draft = RecipeDraft {
            title: "Pie".into(),
            visibility: Some(Visibility::Public),
            image: Some(ImageFile::new("pie.png", vec![0; MAX_IMAGE_BYTES + 1])),
            ..Default::default()
        };
        assert!(draft.validate().image.is_some());
    }

    #[test]
    fn test_create_sends_author_and_no_image() {
        let draft = RecipeDraft {
            title: " Toast ".into(),
            visibility: Some(Visibility::Private),
            ..Default::default()
        };
        assert!(draft.validate().is_empty());

        let input = draft.to_input(Some("julia".into()), None);
        assert_eq!(input.author.as_deref(), Some("julia"));
        assert_eq!(input.title, "Toast");
        assert!(!input.has_image());
        assert_eq!(input.visibility, Visibility::Private);
    }

    #[test]
    fn test_edit_prefills_and_keeps_image() {
        let recipe = stored(true);
        let draft = RecipeDraft::for_edit(&recipe);
        assert_eq!(draft.title, "Gumbo");
        assert_eq!(draft.text, "Make a roux.");
        assert_eq!(draft.image_desc, "Dark roux");
        assert_eq!(draft.visibility, Some(Visibility::Public));

        let input = draft.to_input(Some("julia".into()), Some(&recipe));
        assert_eq!(input.author, None);
        assert!(input.image.is_none());
        assert!(input.has_image());
    }

    #[test]
    fn test_edit_without_stored_image() {
        let recipe = stored(false);
        let input = RecipeDraft::for_edit(&recipe).to_input(None, Some(&recipe));
        assert!(!input.has_image());
    }

    #[test]
    fn test_location_only_when_sharing() {
        let mut draft = RecipeDraft {
            title: "Tacos".into(),
            visibility: Some(Visibility::Public),
            location: Some(GeoPoint::new(19.4, -99.1)),
            ..Default::default()
        };
        assert_eq!(draft.to_input(None, None).location, None);

        draft.share_location = true;
        assert_eq!(
            draft.to_input(None, None).location,
            Some(GeoPoint::new(19.4, -99.1))
        );

        draft.location = None;
        assert_eq!(draft.to_input(None, None).location, None);
    }

    #[test]
    fn test_sharing_requests_position_once() {
        let mut draft = RecipeDraft::default();
        assert!(draft.start_sharing());
        assert!(draft.locating);

        draft.title.push_str("Tacos");
        assert!(!draft.start_sharing());

        draft.located(Some(GeoPoint::new(19.4, -99.1)));
        assert!(!draft.locating);
        assert!(!draft.start_sharing());
        assert_eq!(draft.location, Some(GeoPoint::new(19.4, -99.1)));
    }

    #[test]
    fn test_failed_position_turns_sharing_off() {
        let mut draft = RecipeDraft::default();
        assert!(draft.start_sharing());
        draft.located(None);
        assert!(!draft.share_location && !draft.locating);
        assert!(draft.start_sharing());
    }

    #[test]
    fn test_stop_sharing_drops_reading() {
        let mut draft = RecipeDraft::default();
        draft.start_sharing();
        draft.located(Some(GeoPoint::new(19.4, -99.1)));
        draft.stop_sharing();
        assert_eq!(draft.location, None);
        assert!(draft.start_sharing());
    }
}
