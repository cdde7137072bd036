//! The HTTP gateway.
//!
//! [`Gateway::fetch`] is the single choke point: it sends a request, passes
//! 2xx responses through untouched and converts everything else into a
//! [`GatewayError`] using the `{ "error": string }` body the backend sends.
//! Nothing here retries, caches or deduplicates.

use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::config::GatewayConfig;
use crate::error::GatewayError;
use crate::models::{
    Comment, CommentInput, LoginCredentials, Recipe, RecipeInput, SignUpCredentials, User,
};

/// Error body of every non-2xx response.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: String,
}

/// Client for the recipe backend. Cheap to clone.
#[derive(Debug, Clone)]
pub struct Gateway {
    http: Client,
    config: GatewayConfig,
}

impl PartialEq for Gateway {
    fn eq(&self, other: &Self) -> bool {
        self.config == other.config
    }
}

impl Gateway {
    pub fn new(config: GatewayConfig) -> Result<Self, GatewayError> {
        let builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.cookie_store(true);

        Ok(Self {
            http: builder.build()?,
            config,
        })
    }

    /// Absolute URL of a recipe's image, for use as an `<img src>`.
    pub fn image_url(&self, recipe_id: &str) -> String {
        self.config.endpoint(&format!("/api/recipes/{recipe_id}/image"))
    }

    /// Start a request to `path` with the session credentials attached.
    pub fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let request = self.http.request(method, self.config.endpoint(path));
        #[cfg(target_arch = "wasm32")]
        let request = request.fetch_credentials_include();
        request
    }

    /// Send a request and classify non-2xx responses.
    pub async fn fetch(&self, request: RequestBuilder) -> Result<Response, GatewayError> {
        let response = request.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let url = response.url().to_string();
        let body: ErrorBody = response.json().await?;
        tracing::debug!(%url, status = status.as_u16(), error = %body.error, "backend rejected request");
        Err(GatewayError::from_status(status.as_u16(), body.error))
    }

    async fn fetch_json<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<T, GatewayError> {
        Ok(self.fetch(request).await?.json().await?)
    }

    // Recipes

    /// `GET /api/recipes`: the session user's own recipes.
    pub async fn list_recipes(&self) -> Result<Vec<Recipe>, GatewayError> {
        self.fetch_json(self.request(Method::GET, "/api/recipes")).await
    }

    /// `GET /api/public-recipes`: the community feed.
    pub async fn list_public_recipes(&self) -> Result<Vec<Recipe>, GatewayError> {
        self.fetch_json(self.request(Method::GET, "/api/public-recipes"))
            .await
    }

    /// `GET /api/recipes/search?term=...`
    pub async fn search_recipes(&self, term: &str) -> Result<Vec<Recipe>, GatewayError> {
        let request = self
            .request(Method::GET, "/api/recipes/search")
            .query(&[("term", term)]);
        self.fetch_json(request).await
    }

    /// `POST /api/recipes` as multipart.
    pub async fn create_recipe(&self, input: RecipeInput) -> Result<Recipe, GatewayError> {
        let request = self
            .request(Method::POST, "/api/recipes")
            .multipart(input.into_form()?);
        self.fetch_json(request).await
    }

    /// `PATCH /api/recipes/{id}` as multipart.
    pub async fn update_recipe(
        &self,
        recipe_id: &str,
        input: RecipeInput,
    ) -> Result<Recipe, GatewayError> {
        let request = self
            .request(Method::PATCH, &format!("/api/recipes/{recipe_id}"))
            .multipart(input.into_form()?);
        self.fetch_json(request).await
    }

    /// `DELETE /api/recipes/{id}`
    pub async fn delete_recipe(&self, recipe_id: &str) -> Result<(), GatewayError> {
        self.fetch(self.request(Method::DELETE, &format!("/api/recipes/{recipe_id}")))
            .await?;
        Ok(())
    }

    // Comments

    /// `GET /api/comments/{recipeId}`
    pub async fn list_comments(&self, recipe_id: &str) -> Result<Vec<Comment>, GatewayError> {
        self.fetch_json(self.request(Method::GET, &format!("/api/comments/{recipe_id}")))
            .await
    }

    /// `POST /api/comments` as JSON.
    pub async fn create_comment(&self, input: &CommentInput) -> Result<Comment, GatewayError> {
        let request = self.request(Method::POST, "/api/comments").json(input);
        self.fetch_json(request).await
    }

    /// `DELETE /api/comments/{id}`
    pub async fn delete_comment(&self, comment_id: &str) -> Result<(), GatewayError> {
        self.fetch(self.request(Method::DELETE, &format!("/api/comments/{comment_id}")))
            .await?;
        Ok(())
    }

    // Users

    /// `GET /api/users`: the user behind the session cookie.
    /// Fails with [`GatewayError::Unauthorized`] when logged out.
    pub async fn current_user(&self) -> Result<User, GatewayError> {
        self.fetch_json(self.request(Method::GET, "/api/users")).await
    }

    /// `POST /api/users/signup`. A taken username or email is a
    /// [`GatewayError::Conflict`].
    pub async fn sign_up(&self, credentials: &SignUpCredentials) -> Result<User, GatewayError> {
        let request = self
            .request(Method::POST, "/api/users/signup")
            .json(credentials);
        self.fetch_json(request).await
    }

    /// `POST /api/users/login`
    pub async fn log_in(&self, credentials: &LoginCredentials) -> Result<User, GatewayError> {
        let request = self
            .request(Method::POST, "/api/users/login")
            .json(credentials);
        self.fetch_json(request).await
    }

    /// `POST /api/users/logout`
    pub async fn log_out(&self) -> Result<(), GatewayError> {
        self.fetch(self.request(Method::POST, "/api/users/logout"))
            .await?;
        Ok(())
    }
}
