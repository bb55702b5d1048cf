//! Punk API client.
//!
//! HTTP-backed implementation of [`BeerRepository`]. Every operation is a
//! single GET with no retries and the transport's default timeouts.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::{Client, Response};
use url::Url;

use crate::error::{PunkError, Result};
use crate::models::{Beer, SearchTerms};
use crate::repository::BeerRepository;

/// Public Punk API endpoint.
pub const DEFAULT_API_URL: &str = "https://api.punkapi.com/v2";
const BEERS_ENDPOINT: &str = "beers";
const USER_AGENT: &str = concat!("punkapi/", env!("CARGO_PKG_VERSION"));

/// HTTP client for the Punk brewery catalog.
///
/// This struct is cheaply cloneable; clones reference the same underlying
/// connection pool.
///
/// # Example
///
/// ```no_run
/// use punkapi::{BeerRepository, PunkClient};
///
/// # async fn example() -> punkapi::Result<()> {
/// let client = PunkClient::with_default_url()?;
/// let beers = client.get_by_id(1).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct PunkClient {
    http: Client,
    base_url: Arc<Url>,
}

impl std::fmt::Debug for PunkClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PunkClient")
            .field("base_url", &self.base_url.as_str())
            .finish_non_exhaustive()
    }
}

impl PunkClient {
    /// Create a client for the public API.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn with_default_url() -> Result<Self> {
        Self::new(DEFAULT_API_URL)
    }

    /// Create a client for the given base URL (e.g., `https://api.punkapi.com/v2`).
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is invalid.
    pub fn new(base_url: &str) -> Result<Self> {
        // Ensure base URL ends with / so joins append instead of replace
        let base_url_str = if base_url.ends_with('/') {
            base_url.to_string()
        } else {
            format!("{base_url}/")
        };

        let base_url = Url::parse(&base_url_str)?;

        let http = Client::builder()
            .user_agent(USER_AGENT)
            .brotli(true)
            .gzip(true)
            .deflate(true)
            .build()
            .map_err(PunkError::Network)?;

        Ok(Self {
            http,
            base_url: Arc::new(base_url),
        })
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// URL of the full listing.
    pub fn beers_url(&self) -> Result<Url> {
        Ok(self.base_url.join(BEERS_ENDPOINT)?)
    }

    /// URL of a single beer.
    pub fn beer_url(&self, id: u64) -> Result<Url> {
        Ok(self.base_url.join(&format!("{BEERS_ENDPOINT}/{id}"))?)
    }

    /// URL of a search.
    ///
    /// Always carries a query component, so empty terms produce the listing
    /// URL followed by a bare `?`.
    pub fn search_url(&self, terms: &SearchTerms) -> Result<Url> {
        let mut url = self.beers_url()?;
        url.query_pairs_mut().extend_pairs(terms.iter());
        Ok(url)
    }

    /// Make a GET request.
    #[tracing::instrument(skip(self, url), fields(url = %url))]
    pub async fn get(&self, url: Url) -> Result<Response> {
        tracing::debug!("sending request");

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(PunkError::Network)?;

        Self::check_response(response).await
    }

    /// GET a URL and decode the body as a list of beers.
    async fn fetch_beers(&self, url: Url) -> Result<Vec<Beer>> {
        let response = self.get(url).await?;
        let body = response.text().await.map_err(PunkError::Network)?;
        let beers: Vec<Beer> = serde_json::from_str(&body)?;
        tracing::debug!(count = beers.len(), "decoded beers");
        Ok(beers)
    }

    /// Check response status and convert errors.
    async fn check_response(response: Response) -> Result<Response> {
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        let message = Self::extract_error_message(response, status).await;
        Err(PunkError::Api {
            message,
            status_code: Some(status.as_u16()),
        })
    }

    /// Extract error message from a failed response.
    async fn extract_error_message(response: Response, status: reqwest::StatusCode) -> String {
        let body = match response.text().await {
            Ok(b) => b,
            Err(_) => return format!("HTTP {status}"),
        };

        // Punk errors look like {"statusCode":404,"error":"Not Found","message":"..."}
        if let Ok(json) = serde_json::from_str::<serde_json::Value>(&body) {
            if let Some(msg) = json.get("message").and_then(|m| m.as_str()) {
                return msg.to_string();
            }
            if let Some(err) = json.get("error").and_then(|m| m.as_str()) {
                return err.to_string();
            }
        }

        if body.trim().is_empty() {
            format!("HTTP {status}")
        } else {
            body
        }
    }
}

#[async_trait]
impl BeerRepository for PunkClient {
    #[tracing::instrument(skip(self))]
    async fn list_all(&self) -> Result<Vec<Beer>> {
        self.fetch_beers(self.beers_url()?).await
    }

    #[tracing::instrument(skip(self))]
    async fn get_by_id(&self, id: u64) -> Result<Vec<Beer>> {
        match self.fetch_beers(self.beer_url(id)?).await {
            Err(PunkError::Api {
                status_code: Some(404),
                message,
            }) => {
                tracing::debug!(%message, "no beer with this id");
                Ok(Vec::new())
            }
            other => other,
        }
    }

    #[tracing::instrument(skip(self))]
    async fn search(&self, terms: &SearchTerms) -> Result<Vec<Beer>> {
        self.fetch_beers(self.search_url(terms)?).await
    }
}
