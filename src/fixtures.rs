//! In-memory catalog for tests.
//!
//! [`InMemoryRepository`] implements [`BeerRepository`] over a fixed set of
//! beers so command handlers and formatters can be exercised without network
//! access. [`Fixtures`] provides the sample data.
//!
//! Only compiled for unit tests or with the `test-fixtures` feature.

use std::collections::BTreeMap;

use async_trait::async_trait;

use crate::error::{PunkError, Result};
use crate::models::{Beer, Filter, SearchTerms};
use crate::repository::BeerRepository;

/// Collection of fixture factories for test data.
pub struct Fixtures;

impl Fixtures {
    /// Buzz, the first beer in the public catalog.
    pub fn buzz() -> Beer {
        Beer::new(
            1,
            "Buzz",
            "A Real Bitter Experience.",
            "A light, crisp and bitter IPA brewed with English and American hops.",
            4.5,
            60.0,
        )
    }

    pub fn trashy_blonde() -> Beer {
        Beer::new(
            2,
            "Trashy Blonde",
            "You Know You Shouldn't",
            "A titillating, neurotic, peroxide punk of a Pale Ale.",
            4.1,
            41.5,
        )
    }

    pub fn berliner_weisse() -> Beer {
        // Catalog sends "ibu": null for this one
        Beer::new(
            3,
            "Berliner Weisse With Yuzu - B-Sides",
            "Japanese Citrus Berliner Weisse.",
            "Japanese citrus fruit intensifies the sour nature of this German classic.",
            4.2,
            0.0,
        )
    }

    pub fn punk_ipa() -> Beer {
        Beer::new(
            192,
            "Punk IPA 2007 - 2010",
            "Post Modern Classic. Spiky. Tropical. Hoppy.",
            "Our flagship beer that kick started the craft beer revolution.",
            6.0,
            60.0,
        )
    }

    /// A beer whose text fields need CSV quoting.
    pub fn awkward() -> Beer {
        Beer::new(
            999,
            "Comma, \"Quoted\" Ale",
            "Line one\nline two",
            "Contains, commas; and \"quotes\".",
            12.5,
            1157.0,
        )
    }

    /// The default catalog: every well-formed fixture above.
    pub fn catalog() -> Vec<Beer> {
        vec![
            Self::buzz(),
            Self::trashy_blonde(),
            Self::berliner_weisse(),
            Self::punk_ipa(),
        ]
    }
}

/// In-memory [`BeerRepository`].
///
/// Applies `beer_name` as a case-insensitive substring match (underscores
/// standing in for spaces, as the remote API accepts) and the `abv_*` /
/// `ibu_*` bounds as strict comparisons. Ingredient filters (`yeast`,
/// `malt`, `hops`) have no backing data here and are not applied.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    beers: BTreeMap<u64, Beer>,
    unavailable: bool,
}

impl InMemoryRepository {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a catalog holding [`Fixtures::catalog`].
    pub fn with_fixtures() -> Self {
        Self::new().with_beers(Fixtures::catalog())
    }

    /// Add a beer, replacing any beer with the same ID.
    pub fn with_beer(mut self, beer: Beer) -> Self {
        self.beers.insert(beer.id, beer);
        self
    }

    pub fn with_beers(self, beers: impl IntoIterator<Item = Beer>) -> Self {
        beers.into_iter().fold(self, Self::with_beer)
    }

    /// Make every call fail as if the service were down.
    pub fn unavailable(mut self) -> Self {
        self.unavailable = true;
        self
    }

    fn check_available(&self) -> Result<()> {
        if self.unavailable {
            return Err(PunkError::Api {
                message: "Service Unavailable".to_string(),
                status_code: Some(503),
            });
        }
        Ok(())
    }

    fn bound(terms: &SearchTerms, filter: Filter) -> Result<Option<f64>> {
        terms
            .get(filter)
            .map(|raw| {
                raw.parse::<f64>().map_err(|_| PunkError::Api {
                    message: format!("{} must be a number", filter.param()),
                    status_code: Some(400),
                })
            })
            .transpose()
    }
}

#[async_trait]
impl BeerRepository for InMemoryRepository {
    async fn list_all(&self) -> Result<Vec<Beer>> {
        self.check_available()?;
        Ok(self.beers.values().cloned().collect())
    }

    async fn get_by_id(&self, id: u64) -> Result<Vec<Beer>> {
        self.check_available()?;
        Ok(self.beers.get(&id).cloned().into_iter().collect())
    }

    async fn search(&self, terms: &SearchTerms) -> Result<Vec<Beer>> {
        self.check_available()?;

        let name = terms
            .get(Filter::Name)
            .map(|n| n.replace('_', " ").to_lowercase());
        let min_abv = Self::bound(terms, Filter::MinAbv)?;
        let max_abv = Self::bound(terms, Filter::MaxAbv)?;
        let min_ibu = Self::bound(terms, Filter::MinIbu)?;
        let max_ibu = Self::bound(terms, Filter::MaxIbu)?;

        let matches = self
            .beers
            .values()
            .filter(|b| {
                name.as_ref()
                    .map_or(true, |n| b.name.to_lowercase().contains(n.as_str()))
            })
            .filter(|b| min_abv.map_or(true, |v| b.abv > v))
            .filter(|b| max_abv.map_or(true, |v| b.abv < v))
            .filter(|b| min_ibu.map_or(true, |v| b.ibu > v))
            .filter(|b| max_ibu.map_or(true, |v| b.ibu < v))
            .cloned()
            .collect();

        Ok(matches)
    }
}
