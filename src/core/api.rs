//! Inventory API client - The six calls the console makes to the backend.
//!
//! `ProductApi` is the seam between the console state machine and the network. The
//! production implementation, `HttpProductApi`, talks JSON over `reqwest`; tests swap in
//! the in-memory implementation from `test_utils`.
//!
//! Every failure is reduced to an `Error::Api` carrying user-facing text: the server's
//! `error` field when a rejected response has one, otherwise a fixed per-action message.

use crate::{
    entities::{Product, ProductDraft, ProductId},
    errors::{Error, Result},
};
use reqwest::{RequestBuilder, Response, Url};
use serde::de::DeserializeOwned;
use std::{fmt, future::Future};
use tracing::{debug, instrument, warn};

/// The request kinds the console issues.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ApiAction {
    List,
    Search,
    Get,
    Create,
    Update,
    Delete,
}

impl ApiAction {
    /// Message shown when the server gives no usable error text.
    #[must_use]
    pub const fn fallback_message(self) -> &'static str {
        match self {
            Self::List => "Failed to load products",
            Self::Search => "Failed to search products",
            Self::Get => "Failed to fetch product",
            Self::Create => "Failed to add product",
            Self::Update => "Failed to update product",
            Self::Delete => "Failed to delete product",
        }
    }
}

impl fmt::Display for ApiAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::List => "list",
            Self::Search => "search",
            Self::Get => "get",
            Self::Create => "create",
            Self::Update => "update",
            Self::Delete => "delete",
        };
        f.write_str(name)
    }
}

/// Remote product store used by the console.
pub trait ProductApi: Send + Sync {
    /// `GET /products`
    fn list_products(&self) -> impl Future<Output = Result<Vec<Product>>> + Send;

    /// `GET /searchProduct/{query}`. `query` is sent as a single encoded path segment.
    fn search_products(&self, query: &str) -> impl Future<Output = Result<Vec<Product>>> + Send;

    /// `GET /getProduct/{id}`
    fn get_product(&self, id: &ProductId) -> impl Future<Output = Result<Product>> + Send;

    /// `POST /product`, returning the created record.
    fn create_product(&self, draft: &ProductDraft)
    -> impl Future<Output = Result<Product>> + Send;

    /// `PUT /product/{id}`. The response body is ignored.
    fn update_product(
        &self,
        id: &ProductId,
        draft: &ProductDraft,
    ) -> impl Future<Output = Result<()>> + Send;

    /// `DELETE /product/{id}`. The response body is ignored.
    fn delete_product(&self, id: &ProductId) -> impl Future<Output = Result<()>> + Send;
}

/// `ProductApi` over HTTP with JSON bodies.
#[derive(Clone, Debug)]
pub struct HttpProductApi {
    client: reqwest::Client,
    base_url: Url,
}

impl HttpProductApi {
    /// Builds a client for the API rooted at `base_url`.
    ///
    /// # Errors
    /// Returns `Error::Config` if `base_url` is not an absolute http(s) URL, or
    /// `Error::Http` if the underlying client cannot be constructed.
    pub fn new(base_url: &str) -> Result<Self> {
        let base_url = Url::parse(base_url.trim()).map_err(|e| Error::Config {
            message: format!("Invalid API base URL '{base_url}': {e}"),
        })?;
        if base_url.cannot_be_a_base() || !matches!(base_url.scheme(), "http" | "https") {
            return Err(Error::Config {
                message: format!("API base URL must be an http(s) URL, got '{base_url}'"),
            });
        }

        let client = reqwest::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { client, base_url })
    }

    /// The root every endpoint is resolved against.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Appends `segments` to the base path, percent-encoding each one.
    ///
    /// # Errors
    /// Returns `Error::Config` if the base URL cannot carry a path.
    pub fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| Error::Config {
                message: format!("API base URL '{}' cannot carry a path", self.base_url),
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Sends a request and turns any failure into a user-facing `Error::Api`.
    async fn send(&self, request: RequestBuilder, action: ApiAction) -> Result<Response> {
        let response = request.send().await.map_err(|e| {
            warn!(%action, error = %e, "Request to inventory API failed");
            api_error(action, None)
        })?;

        let status = response.status();
        if status.is_success() {
            debug!(%action, %status, "Inventory API request succeeded");
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let err = api_error(action, Some(&body));
        warn!(%action, %status, error = %err, "Inventory API rejected request");
        Err(err)
    }

    async fn decode<T: DeserializeOwned>(response: Response, action: ApiAction) -> Result<T> {
        response.json::<T>().await.map_err(|e| {
            warn!(%action, error = %e, "Could not decode inventory API response");
            api_error(action, None)
        })
    }
}

impl ProductApi for HttpProductApi {
    #[instrument(skip(self))]
    async fn list_products(&self) -> Result<Vec<Product>> {
        let url = self.endpoint(&["products"])?;
        let response = self.send(self.client.get(url), ApiAction::List).await?;
        Self::decode(response, ApiAction::List).await
    }

    #[instrument(skip(self))]
    async fn search_products(&self, query: &str) -> Result<Vec<Product>> {
        let url = self.endpoint(&["searchProduct", query])?;
        let response = self.send(self.client.get(url), ApiAction::Search).await?;
        Self::decode(response, ApiAction::Search).await
    }

    #[instrument(skip(self, id), fields(id = %id))]
    async fn get_product(&self, id: &ProductId) -> Result<Product> {
        let url = self.endpoint(&["getProduct", id.as_str()])?;
        let response = self.send(self.client.get(url), ApiAction::Get).await?;
        Self::decode(response, ApiAction::Get).await
    }

    #[instrument(skip(self, draft), fields(name = %draft.name))]
    async fn create_product(&self, draft: &ProductDraft) -> Result<Product> {
        let url = self.endpoint(&["product"])?;
        let response = self
            .send(self.client.post(url).json(draft), ApiAction::Create)
            .await?;
        Self::decode(response, ApiAction::Create).await
    }

    #[instrument(skip(self, id, draft), fields(id = %id))]
    async fn update_product(&self, id: &ProductId, draft: &ProductDraft) -> Result<()> {
        let url = self.endpoint(&["product", id.as_str()])?;
        self.send(self.client.put(url).json(draft), ApiAction::Update)
            .await?;
        Ok(())
    }

    #[instrument(skip(self, id), fields(id = %id))]
    async fn delete_product(&self, id: &ProductId) -> Result<()> {
        let url = self.endpoint(&["product", id.as_str()])?;
        self.send(self.client.delete(url), ApiAction::Delete).await?;
        Ok(())
    }
}

/// Extracts the `error` text from a rejected response body.
///
/// Falls back to the action's fixed message when the body is not JSON, has no string
/// `error` field, or the field is blank.
#[must_use]
pub fn error_message_from_body(body: &str, action: ApiAction) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| {
            value
                .get("error")
                .and_then(serde_json::Value::as_str)
                .map(str::trim)
                .filter(|message| !message.is_empty())
                .map(str::to_string)
        })
        .unwrap_or_else(|| action.fallback_message().to_string())
}

/// Builds the `Error::Api` for a failed action, optionally reading a rejected body.
#[must_use]
pub fn api_error(action: ApiAction, body: Option<&str>) -> Error {
    let message = body.map_or_else(
        || action.fallback_message().to_string(),
        |body| error_message_from_body(body, action),
    );
    Error::Api { message }
}
