//! This crate contains all shared UI for the workspace.

pub mod components;
pub mod views;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub mod list_state;
pub use list_state::{Keyed, ListState, ListView, LoadTicket};

mod loader;
pub use loader::{load_into, use_list, use_refreshed_list};

mod session;
pub use session::{use_gateway, use_session, GatewayProvider, LogoutButton, Session, SessionProvider};

pub mod format;
pub mod map;

mod confirm;
pub use confirm::{ConfirmGate, ConfirmationDialog, CONFIRM_DELAY};

mod image_probe;
pub use image_probe::{DetailVariant, ImageProbe};

mod feedback;
pub use feedback::Feedback;

mod notify;
pub use notify::{alert, report_failure};

mod geolocation;
pub use geolocation::{approximate_position, LocationError};

mod timer;

mod recipe_form;
pub use recipe_form::{AddEditRecipeDialog, DraftErrors, RecipeDraft, MAX_IMAGE_BYTES};

mod recipe_card;
pub use recipe_card::RecipeCard;

mod recipe_detail;
pub use recipe_detail::RecipeDetailDialog;

mod comment_section;
pub use comment_section::{CommentForm, CommentSection, LOG_IN_TO_COMMENT, NO_COMMENTS};

mod auth_modals;
pub use auth_modals::{LogInModal, SignUpModal};
