//! Data models for Punk API entities.

pub mod beer;
pub mod search;

pub use beer::Beer;
pub use search::{Filter, SearchFilters, SearchTerms};
