//! Pipekit HTTP Client
//!
//! A small, type-safe HTTP client for the pipeline service's v2beta1 REST API.
//!
//! # Example
//!
//! ```no_run
//! use pipekit_client::{PipelineClient, RunOptions};
//! use pipekit_core::Arguments;
//! use std::path::Path;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = PipelineClient::new("http://localhost:8080");
//!
//!     let mut arguments = Arguments::new();
//!     arguments.insert("recipient".to_string(), "World".to_string());
//!
//!     let run = client
//!         .create_run_from_pipeline_package(
//!             Path::new("pipeline.yaml"),
//!             arguments,
//!             &RunOptions::default(),
//!         )
//!         .await?;
//!
//!     println!("Created run: {}", run.run_id);
//!     Ok(())
//! }
//! ```

pub mod error;
mod experiments;
mod runs;

pub use error::{ClientError, Result};
pub use runs::{RunOptions, RunSubmitter};

use reqwest::{Client, Method, RequestBuilder, Url};
use serde::de::DeserializeOwned;

/// Path prefix of the v2beta1 API
const API_PREFIX: &str = "apis/v2beta1";

/// HTTP client for the pipeline service API
///
/// Methods are organized into logical groups:
/// - Run creation and status
/// - Experiment lookup and creation
#[derive(Debug, Clone)]
pub struct PipelineClient {
    /// Base URL of the service (e.g., "http://localhost:8080")
    base_url: String,
    /// Bearer token sent with every request, if any
    token: Option<String>,
    /// HTTP client instance
    client: Client,
}

impl PipelineClient {
    /// Create a new pipeline service client
    ///
    /// # Arguments
    /// * `base_url` - The base URL of the service (e.g., "http://localhost:8080")
    ///
    /// # Example
    /// ```
    /// use pipekit_client::PipelineClient;
    ///
    /// let client = PipelineClient::new("http://localhost:8080");
    /// ```
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(base_url, Client::new())
    }

    /// Create a new client with a custom HTTP client
    ///
    /// This allows you to configure timeouts, proxies, TLS settings, etc.
    pub fn with_client(base_url: impl Into<String>, client: Client) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token: None,
            client,
        }
    }

    /// Attach a bearer token to every request
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Get the base URL of the service
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build an API URL from a path relative to the v2beta1 prefix
    fn url(&self, path: &str) -> String {
        format!("{}/{}/{}", self.base_url, API_PREFIX, path)
    }

    /// Build the URL of one resource in `collection`
    ///
    /// `id` is appended as a single percent-encoded path segment, so it
    /// can never address a different route.
    fn resource_url(&self, collection: &str, id: &str) -> Result<Url> {
        if id.is_empty() || id == "." || id == ".." {
            return Err(ClientError::InvalidRequest(format!(
                "'{}' is not a valid resource ID",
                id
            )));
        }

        let mut url = Url::parse(&self.url(collection))
            .map_err(|e| ClientError::InvalidRequest(format!("Invalid service URL: {}", e)))?;
        url.path_segments_mut()
            .map_err(|_| ClientError::InvalidRequest("Service URL cannot have a path".to_string()))?
            .push(id);
        Ok(url)
    }

    /// Start a request, attaching authentication if configured
    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.authorize(self.client.request(method, self.url(path)))
    }

    /// Start a request against a prebuilt URL
    fn request_url(&self, method: Method, url: Url) -> RequestBuilder {
        self.authorize(self.client.request(method, url))
    }

    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    // =============================================================================
    // Response Handlers
    // =============================================================================

    /// Handle an API response and deserialize JSON
    ///
    /// Checks the status code and returns an appropriate error if the request
    /// failed, or deserializes the response body if successful.
    async fn handle_response<T: DeserializeOwned>(&self, response: reqwest::Response) -> Result<T> {
        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ClientError::api_error(status.as_u16(), error_text));
        }

        response
            .json()
            .await
            .map_err(|e| ClientError::ParseError(format!("Failed to parse JSON response: {}", e)))
    }
}
