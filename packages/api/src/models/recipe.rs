//! # Recipe model
//!
//! Read side: [`Recipe`] mirrors the backend document (`_id`, camelCase
//! fields, RFC 3339 timestamps). The image bytes are never part of the JSON;
//! they are served from `/api/recipes/{id}/image`.
//!
//! Write side: [`RecipeInput`] is what the add/edit dialog submits. Create
//! and update share one multipart encoding because an image file may or may
//! not be attached. The `hasImage` field is derived, never set by hand:
//!
//! | New file attached | Edited recipe already had an image | `hasImage` |
//! |-------------------|------------------------------------|------------|
//! | yes | any | `true` |
//! | no | yes | `true` |
//! | no | no / creating | `false` |

use chrono::{DateTime, Utc};
use reqwest::multipart::{Form, Part};
use serde::{Deserialize, Serialize};

use super::GeoPoint;
use crate::error::GatewayError;

/// A recipe as returned by the backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    #[serde(rename = "_id")]
    pub id: String,
    pub author: String,
    pub title: String,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub image_desc: Option<String>,
    #[serde(default)]
    pub has_image: bool,
    #[serde(default)]
    pub is_public: bool,
    /// Present only when both `latitude` and `longitude` are.
    #[serde(flatten)]
    pub location: Option<GeoPoint>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Recipe {
    pub fn visibility(&self) -> Visibility {
        Visibility::from_public(self.is_public)
    }

    /// Whether the recipe was edited after it was created.
    pub fn was_updated(&self) -> bool {
        self.updated_at > self.created_at
    }
}

/// Who can see a recipe. Chosen explicitly on every save.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Visibility {
    Public,
    #[default]
    Private,
}

impl Visibility {
    pub fn from_public(is_public: bool) -> Self {
        if is_public {
            Self::Public
        } else {
            Self::Private
        }
    }

    pub fn is_public(self) -> bool {
        self == Self::Public
    }

    /// Value of the `isPublic` multipart field.
    pub fn as_form_value(self) -> &'static str {
        if self.is_public() {
            "true"
        } else {
            "false"
        }
    }
}

/// An image chosen in the file picker.
#[derive(Clone, PartialEq, Eq)]
pub struct ImageFile {
    pub name: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

impl ImageFile {
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        let name = name.into();
        let mime = mime_from_name(&name).to_string();
        Self { name, mime, bytes }
    }
}

impl std::fmt::Debug for ImageFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageFile")
            .field("name", &self.name)
            .field("mime", &self.mime)
            .field("len", &self.bytes.len())
            .finish()
    }
}

fn mime_from_name(name: &str) -> &'static str {
    let ext = name.rsplit('.').next().unwrap_or_default().to_ascii_lowercase();
    match ext.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "svg" => "image/svg+xml",
        "bmp" => "image/bmp",
        _ => "application/octet-stream",
    }
}

/// Write-side shape of a recipe, shared by create and update.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecipeInput {
    /// Username of the creator. Only sent on create.
    pub author: Option<String>,
    pub title: String,
    pub text: String,
    pub visibility: Visibility,
    pub image: Option<ImageFile>,
    pub image_desc: String,
    /// The recipe being edited already has a stored image.
    pub had_image: bool,
    pub location: Option<GeoPoint>,
}

impl RecipeInput {
    pub fn has_image(&self) -> bool {
        self.image.is_some() || self.had_image
    }

    /// The plain-text multipart fields, in submission order. The image part
    /// is added separately by [`RecipeInput::into_form`].
    pub fn text_fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = Vec::with_capacity(8);
        if let Some(author) = &self.author {
            fields.push(("author", author.clone()));
        }
        fields.push(("title", self.title.clone()));
        fields.push(("text", self.text.clone()));
        fields.push(("isPublic", self.visibility.as_form_value().to_string()));
        fields.push(("imageDesc", self.image_desc.clone()));
        fields.push(("hasImage", self.has_image().to_string()));
        if let Some(point) = self.location {
            fields.push(("longitude", point.longitude.to_string()));
            fields.push(("latitude", point.latitude.to_string()));
        }
        fields
    }

    /// Encode as `multipart/form-data`.
    pub fn into_form(self) -> Result<Form, GatewayError> {
        let mut form = Form::new();
        for (name, value) in self.text_fields() {
            form = form.text(name, value);
        }
        if let Some(image) = self.image {
            let part = Part::bytes(image.bytes)
                .file_name(image.name)
                .mime_str(&image.mime)?;
            form = form.part("image", part);
        }
        Ok(form)
    }
}

impl From<&Recipe> for RecipeInput {
    /// Prefill an edit from the stored recipe. No author, no new image.
    fn from(recipe: &Recipe) -> Self {
        Self {
            author: None,
            title: recipe.title.clone(),
            text: recipe.text.clone().unwrap_or_default(),
            visibility: recipe.visibility(),
            image: None,
            image_desc: recipe.image_desc.clone().unwrap_or_default(),
            had_image: recipe.has_image,
            location: None,
        }
    }
}
