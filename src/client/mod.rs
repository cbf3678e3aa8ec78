//! HTTP client for the MorphoSource digital repository API.
//!
//! The client wraps three read-only endpoints (media search, media lookup,
//! physical-object lookup) over synchronous `ureq` requests. Responses are
//! returned as raw JSON; callers that want a shape-aware view run the result
//! through [`crate::models::Envelope::classify`].

mod url;
pub use self::url::UrlStrategy;

use crate::config::Config;
use crate::error::{ApiError, ApiResult};
use std::sync::Arc;
use std::time::Duration;

/// Client for the MorphoSource REST API.
///
/// Each operation performs exactly one blocking network round-trip; there are
/// no retries and no caching. Any non-2xx response is surfaced as an
/// [`ApiError`] carrying the status code.
#[derive(Clone)]
pub struct MorphoSourceClient {
    /// Base URL, trailing slash stripped at construction
    base_url: String,

    /// Bearer token; the Authorization header is omitted when absent
    api_token: Option<String>,

    /// URL-joining strategy
    strategy: UrlStrategy,

    /// HTTP client agent
    agent: Arc<ureq::Agent>,
}

impl MorphoSourceClient {
    /// Create a new client from configuration.
    pub fn new(config: &Config) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(config.request_timeout))
            .build();

        Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_token: config.api_token.clone(),
            strategy: UrlStrategy::default(),
            agent: Arc::new(agent),
        }
    }

    /// Create a client against an explicit base URL (useful for testing).
    #[doc(hidden)]
    pub fn with_base_url(base_url: String, api_token: Option<String>) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(10))
            .build();

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_token,
            strategy: UrlStrategy::default(),
            agent: Arc::new(agent),
        }
    }

    /// Switch the URL-joining strategy.
    pub fn with_url_strategy(mut self, strategy: UrlStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Execute a GET request and decode the JSON body.
    ///
    /// Header policy: every request carries `Accept: application/json`;
    /// `Authorization: Bearer {token}` is sent only when a token is
    /// configured, never as an empty value.
    fn get(&self, path: &str, query: &[(&str, &str)]) -> ApiResult<serde_json::Value> {
        let url = self.strategy.join(&self.base_url, path)?;
        tracing::debug!("GET {}", url);

        let mut request = self.agent.get(&url).set("Accept", "application/json");
        if let Some(token) = &self.api_token {
            request = request.set("Authorization", &format!("Bearer {}", token));
        }
        for (name, value) in query {
            request = request.query(name, value);
        }

        let response = request.call().map_err(|e| {
            let mapped = map_error(e);
            tracing::debug!("GET {} failed: {}", url, mapped);
            mapped
        })?;

        let body = response
            .into_string()
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        serde_json::from_str(&body).map_err(ApiError::Json)
    }

    /// Get an individual media record.
    pub fn get_media(&self, media_id: &str) -> ApiResult<serde_json::Value> {
        let path = format!("api/media/{}", urlencoding::encode(media_id));
        self.get(&path, &[])
    }

    /// Search media records.
    ///
    /// Query parameters are passed through verbatim; an empty slice issues an
    /// unparameterized search.
    pub fn search_media(&self, params: &[(&str, &str)]) -> ApiResult<serde_json::Value> {
        self.get("api/media", params)
    }

    /// Get an individual physical object record.
    pub fn get_physical_object(&self, object_id: &str) -> ApiResult<serde_json::Value> {
        let path = format!("api/physical-objects/{}", urlencoding::encode(object_id));
        self.get(&path, &[])
    }
}

/// Map a ureq error to an ApiError.
fn map_error(error: ureq::Error) -> ApiError {
    match error {
        ureq::Error::Status(code, response) => {
            let message = response
                .into_string()
                .unwrap_or_else(|_| "Unknown error".to_string());

            match code {
                401 => ApiError::Unauthorized,
                404 => ApiError::NotFound(message),
                _ => ApiError::Status {
                    status: code,
                    message,
                },
            }
        }
        ureq::Error::Transport(transport) => {
            if transport.kind() == ureq::ErrorKind::Io {
                ApiError::Timeout
            } else {
                ApiError::Transport(transport.to_string())
            }
        }
    }
}
