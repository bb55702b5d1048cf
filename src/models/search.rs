//! Search filters and their translation into Punk API query parameters.

use std::collections::BTreeMap;

/// A filter understood by the `/beers` search endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Filter {
    Name,
    Yeast,
    Malt,
    Hops,
    MinIbu,
    MaxIbu,
    MinAbv,
    MaxAbv,
}

impl Filter {
    /// The query parameter name the remote API expects.
    pub fn param(self) -> &'static str {
        match self {
            Filter::Name => "beer_name",
            Filter::Yeast => "yeast",
            Filter::Malt => "malt",
            Filter::Hops => "hops",
            Filter::MinIbu => "ibu_gt",
            Filter::MaxIbu => "ibu_lt",
            Filter::MinAbv => "abv_gt",
            Filter::MaxAbv => "abv_lt",
        }
    }
}

/// Sparse search terms keyed by remote parameter name.
///
/// Only filters that were actually supplied are present. Iteration is in
/// sorted key order so generated query strings are stable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchTerms {
    params: BTreeMap<&'static str, String>,
}

impl SearchTerms {
    /// Empty terms; searching with them is the same as listing everything.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a filter. Empty values are treated as unset and ignored.
    pub fn insert(&mut self, filter: Filter, value: impl Into<String>) {
        let value = value.into();
        if !value.is_empty() {
            self.params.insert(filter.param(), value);
        }
    }

    /// Builder-style [`SearchTerms::insert`].
    #[must_use]
    pub fn with(mut self, filter: Filter, value: impl Into<String>) -> Self {
        self.insert(filter, value);
        self
    }

    pub fn get(&self, filter: Filter) -> Option<&str> {
        self.params.get(filter.param()).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// `(remote parameter, value)` pairs in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        self.params.iter().map(|(k, v)| (*k, v.as_str()))
    }
}

/// Optional filter values as supplied on the command line.
///
/// Numeric bounds are kept as strings and passed through untouched; the
/// remote API is the one that validates them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchFilters {
    pub name: Option<String>,
    pub yeast: Option<String>,
    pub malt: Option<String>,
    pub hops: Option<String>,
    pub min_ibu: Option<String>,
    pub max_ibu: Option<String>,
    pub min_abv: Option<String>,
    pub max_abv: Option<String>,
}

impl SearchFilters {
    /// Translate the supplied filters into remote search terms.
    pub fn to_terms(&self) -> SearchTerms {
        let fields = [
            (Filter::Name, &self.name),
            (Filter::Yeast, &self.yeast),
            (Filter::Malt, &self.malt),
            (Filter::Hops, &self.hops),
            (Filter::MinIbu, &self.min_ibu),
            (Filter::MaxIbu, &self.max_ibu),
            (Filter::MinAbv, &self.min_abv),
            (Filter::MaxAbv, &self.max_abv),
        ];

        let mut terms = SearchTerms::new();
        for (filter, value) in fields {
            if let Some(value) = value {
                terms.insert(filter, value.as_str());
            }
        }
        terms
    }
}

impl From<SearchFilters> for SearchTerms {
    fn from(filters: SearchFilters) -> Self {
        filters.to_terms()
    }
}

impl From<&SearchFilters> for SearchTerms {
    fn from(filters: &SearchFilters) -> Self {
        filters.to_terms()
    }
}
