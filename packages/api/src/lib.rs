//! # API crate: HTTP gateway for the DishDialog recipe service
//!
//! Every network call the web frontend makes goes through the [`Gateway`]
//! defined here. The crate owns the wire shapes of the remote backend and the
//! translation of HTTP failures into typed errors, so UI code never looks at a
//! status code.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | Backend base URL, read from `BACKEND_URL` (or the page origin in the browser) |
//! | [`error`] | [`GatewayError`] taxonomy: `Unauthorized`, `Conflict`, `Request`, `Transport` |
//! | [`gateway`] | The [`Gateway`] client and one method per backend endpoint |
//! | [`models`] | Read-side `User`, `Recipe`, `Comment` and write-side `RecipeInput`, `CommentInput` |
//!
//! ## Endpoints
//!
//! - **Recipes**: `list_recipes`, `list_public_recipes`, `search_recipes`,
//!   `create_recipe`, `update_recipe`, `delete_recipe`, `image_url`
//! - **Comments**: `list_comments`, `create_comment`, `delete_comment`
//! - **Users**: `current_user`, `sign_up`, `log_in`, `log_out`
//!
//! Session state is carried by cookies: the browser attaches them to every
//! `fetch`, and host builds keep them in the client's cookie store.

pub mod config;
pub mod error;
pub mod gateway;
pub mod models;

pub use config::GatewayConfig;
pub use error::{ConfigError, GatewayError};
pub use gateway::Gateway;
pub use models::{
    Comment, CommentInput, GeoPoint, ImageFile, LoginCredentials, Recipe, RecipeInput,
    SignUpCredentials, User, Visibility,
};
