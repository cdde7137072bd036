use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::User;

/// A comment on a public recipe.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    #[serde(rename = "_id")]
    pub id: String,
    pub text: String,
    /// The author, embedded rather than referenced by id.
    pub user: User,
    /// Id of the recipe this comment belongs to.
    pub recipe: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Body of `POST /api/comments`. `user` and `recipe` are ids.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CommentInput {
    pub text: String,
    pub user: String,
    pub recipe: String,
}

impl CommentInput {
    pub fn new(text: impl Into<String>, user_id: &str, recipe_id: &str) -> Self {
        Self {
            text: text.into(),
            user: user_id.to_string(),
            recipe: recipe_id.to_string(),
        }
    }
}
