//! Data models exchanged with the recipe backend.

mod comment;
mod geo;
mod recipe;
mod user;

pub use comment::{Comment, CommentInput};
pub use geo::{GeoPoint, LOCATION_JITTER_DEGREES};
pub use recipe::{ImageFile, Recipe, RecipeInput, Visibility};
pub use user::{LoginCredentials, SignUpCredentials, User};
