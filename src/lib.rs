//! Punk API client library.
//!
//! A Rust library and CLI for reading the Punk brewery catalog. All access
//! goes through the [`BeerRepository`] trait, which has an HTTP-backed
//! implementation ([`PunkClient`]) and an in-memory one for tests
//! (`InMemoryRepository`, behind the `test-fixtures` feature).
//!
//! # Quick Start
//!
//! ```no_run
//! use punkapi::{BeerRepository, Filter, PunkClient, SearchTerms};
//!
//! #[tokio::main]
//! async fn main() -> punkapi::Result<()> {
//!     let client = PunkClient::with_default_url()?;
//!
//!     // Every beer
//!     let beers = client.list_all().await?;
//!     println!("Found {} beers", beers.len());
//!
//!     // One beer by ID (empty if unknown)
//!     let buzz = client.get_by_id(1).await?;
//!
//!     // Filtered search
//!     let terms = SearchTerms::new()
//!         .with(Filter::Name, "IPA")
//!         .with(Filter::MinAbv, "5");
//!     let strong_ipas = client.search(&terms).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Output
//!
//! The [`output`] module renders beers as JSON or CSV and writes them to
//! stdout or a file. The [`cli`] module wires these pieces to the
//! `punk-cli` binary.

mod client;
mod error;
#[cfg(any(test, feature = "test-fixtures"))]
mod fixtures;
mod models;
mod repository;

pub mod cli;
pub mod output;

// Re-export core types
pub use client::{PunkClient, DEFAULT_API_URL};
pub use error::{PunkError, Result};
pub use repository::BeerRepository;

// Re-export models
pub use models::{Beer, Filter, SearchFilters, SearchTerms};

// Re-export the in-memory catalog for tests
#[cfg(any(test, feature = "test-fixtures"))]
pub use fixtures::{Fixtures, InMemoryRepository};

// Re-export output types
pub use output::{OutputFormat, Sink};
