//! Repository trait for reading the beer catalog.

use async_trait::async_trait;

use crate::error::Result;
use crate::models::{Beer, SearchTerms};

/// Read access to a beer catalog.
///
/// Command handlers depend on this trait only, so they can run against the
/// HTTP-backed [`PunkClient`](crate::PunkClient) or the in-memory
/// `InMemoryRepository` enabled by the `test-fixtures` feature.
///
/// Every call is an independent read. Implementations keep no state between
/// calls and return either the full result or the first error encountered.
///
/// # Example
///
/// ```ignore
/// use punkapi::{BeerRepository, PunkClient, SearchTerms, Filter};
///
/// let client = PunkClient::with_default_url()?;
/// let all = client.list_all().await?;
/// let buzz = client.get_by_id(1).await?;
/// let ipas = client
///     .search(&SearchTerms::new().with(Filter::Name, "IPA"))
///     .await?;
/// ```
#[async_trait]
pub trait BeerRepository: Send + Sync {
    /// Fetch the full listing.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body is not a list of beers.
    async fn list_all(&self) -> Result<Vec<Beer>>;

    /// Fetch a single beer by ID.
    ///
    /// The catalog answers with a list even for a single beer, so this
    /// returns a list too. An unknown ID yields an empty list, not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body is not a list of beers.
    async fn get_by_id(&self, id: u64) -> Result<Vec<Beer>>;

    /// Fetch the beers matching every supplied term.
    ///
    /// Empty terms are equivalent to [`BeerRepository::list_all`].
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body is not a list of beers.
    async fn search(&self, terms: &SearchTerms) -> Result<Vec<Beer>>;
}
