//! Beer model.

use serde::{Deserialize, Deserializer, Serialize};

/// A beer from the Punk catalog.
///
/// Only the fields this client renders are kept; everything else in the
/// API payload (ingredients, food pairings, ...) is ignored on decode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Beer {
    /// Identifier assigned by the catalog.
    pub id: u64,

    /// Beer name.
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,

    /// Short marketing line.
    #[serde(default, deserialize_with = "null_as_default")]
    pub tagline: String,

    /// Long description.
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,

    /// Alcohol by volume, in percent.
    #[serde(default, deserialize_with = "null_as_default")]
    pub abv: f64,

    /// International bitterness units.
    /// The API sends `null` for some beers; those decode as `0.0`.
    #[serde(default, deserialize_with = "null_as_default")]
    pub ibu: f64,
}

impl Beer {
    /// Create a beer from its parts.
    pub fn new(
        id: u64,
        name: impl Into<String>,
        tagline: impl Into<String>,
        description: impl Into<String>,
        abv: f64,
        ibu: f64,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            tagline: tagline.into(),
            description: description.into(),
            abv,
            ibu,
        }
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
