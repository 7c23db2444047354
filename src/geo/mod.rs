//! Country to continent classification
//!
//! Each catalog record's free-text `country` is resolved to a [`Continent`]
//! through a [`ContinentLookup`]. Records whose country is absent, or has no
//! entry in the lookup, are dropped from the classified relation. This is a
//! filtering step, not an error.
//!
//! Multi-country values (`"France, Belgium"`) are looked up verbatim by
//! default, which drops them unless that exact string has an entry. Set
//! [`CountryMode::FirstCountry`] to classify them by their first country
//! instead.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

use crate::catalog::CatalogRecord;
use crate::error::{DashError, ErrorCode, Result};

mod table;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Continent {
    #[serde(rename = "Africa")]
    Africa,
    #[serde(rename = "Asia")]
    Asia,
    #[serde(rename = "Europe")]
    Europe,
    #[serde(rename = "North America")]
    NorthAmerica,
    #[serde(rename = "South America")]
    SouthAmerica,
    #[serde(rename = "Oceania")]
    Oceania,
    #[serde(rename = "Antarctica")]
    Antarctica,
}

impl Continent {
    pub const ALL: [Continent; 7] = [
        Continent::Africa,
        Continent::Asia,
        Continent::Europe,
        Continent::NorthAmerica,
        Continent::SouthAmerica,
        Continent::Oceania,
        Continent::Antarctica,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Continent::Africa => "Africa",
            Continent::Asia => "Asia",
            Continent::Europe => "Europe",
            Continent::NorthAmerica => "North America",
            Continent::SouthAmerica => "South America",
            Continent::Oceania => "Oceania",
            Continent::Antarctica => "Antarctica",
        }
    }
}

impl fmt::Display for Continent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Continent {
    type Err = DashError;

    /// Accepts display names and compact spellings, ignoring case,
    /// whitespace, `-` and `_` (`"North America"`, `"north-america"`,
    /// `"NorthAmerica"`).
    fn from_str(s: &str) -> Result<Self> {
        let normalized: String = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '-' && *c != '_')
            .flat_map(char::to_lowercase)
            .collect();

        Continent::ALL
            .into_iter()
            .find(|continent| {
                continent.as_str().replace(' ', "").to_lowercase() == normalized
            })
            .ok_or_else(|| {
                DashError::validation_with_code(
                    ErrorCode::VALIDATION_INVALID_INPUT,
                    format!("unknown continent '{}'", s),
                    Some("continent".to_string()),
                )
            })
    }
}

/// How a record's `country` value becomes a lookup key
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum CountryMode {
    /// Look the raw value up as a single key, multi-country values included
    #[default]
    Verbatim,
    /// Split on commas and classify by the first listed country
    FirstCountry,
}

impl CountryMode {
    /// Derive the lookup key for a raw country value.
    /// In first-country mode empty segments are skipped, so `", France"`
    /// resolves to `France`.
    pub fn key<'a>(&self, raw: &'a str) -> Option<&'a str> {
        match self {
            CountryMode::Verbatim => (!raw.is_empty()).then_some(raw),
            CountryMode::FirstCountry => raw.split(',').map(str::trim).find(|s| !s.is_empty()),
        }
    }
}

impl fmt::Display for CountryMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CountryMode::Verbatim => f.write_str("verbatim"),
            CountryMode::FirstCountry => f.write_str("first-country"),
        }
    }
}

impl FromStr for CountryMode {
    type Err = DashError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "verbatim" => Ok(CountryMode::Verbatim),
            "first-country" | "first_country" | "first" => Ok(CountryMode::FirstCountry),
            other => Err(DashError::validation_with_code(
                ErrorCode::VALIDATION_INVALID_INPUT,
                format!("unknown country mode '{}'", other),
                Some("country_mode".to_string()),
            )),
        }
    }
}

/// Exact, case-sensitive country name to continent mapping
#[derive(Debug, Clone)]
pub struct ContinentLookup {
    entries: HashMap<String, Continent>,
}

impl ContinentLookup {
    /// The complete built-in world table.
    pub fn canonical() -> Self {
        Self {
            entries: table::COUNTRIES
                .iter()
                .map(|(country, continent)| (country.to_string(), *continent))
                .collect(),
        }
    }

    /// Add or replace an entry, returning the previous continent if any.
    pub fn insert(
        &mut self,
        country: impl Into<String>,
        continent: Continent,
    ) -> Option<Continent> {
        self.entries.insert(country.into(), continent)
    }

    pub fn with_overrides<I, S>(mut self, overrides: I) -> Self
    where
        I: IntoIterator<Item = (S, Continent)>,
        S: Into<String>,
    {
        for (country, continent) in overrides {
            self.insert(country, continent);
        }
        self
    }

    pub fn continent_of(&self, country: &str) -> Option<Continent> {
        self.entries.get(country).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for ContinentLookup {
    fn default() -> Self {
        Self::canonical()
    }
}

/// A catalog record with the continent its country resolved to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassifiedRecord<'a> {
    pub record: &'a CatalogRecord,
    /// The lookup key that matched; the raw value in verbatim mode.
    pub country: &'a str,
    pub continent: Continent,
}

/// Attach a continent to every record whose country resolves, dropping the
/// rest. Input order is preserved.
pub fn classify<'a, I>(
    records: I,
    lookup: &ContinentLookup,
    mode: CountryMode,
) -> Vec<ClassifiedRecord<'a>>
where
    I: IntoIterator<Item = &'a CatalogRecord>,
{
    let mut dropped = 0usize;
    let classified: Vec<_> = records
        .into_iter()
        .filter_map(|record| {
            let resolved = record
                .country
                .as_deref()
                .and_then(|raw| mode.key(raw))
                .and_then(|key| lookup.continent_of(key).map(|continent| (key, continent)));

            if resolved.is_none() {
                dropped += 1;
            }
            resolved.map(|(country, continent)| ClassifiedRecord {
                record,
                country,
                continent,
            })
        })
        .collect();

    debug!(
        "Classified {} records by continent ({} mode), dropped {}",
        classified.len(),
        mode,
        dropped
    );
    classified
}

/// Classified records within the selected continents; an empty selection
/// keeps everything.
pub fn within<'s, 'a>(
    classified: &'s [ClassifiedRecord<'a>],
    continents: &'s [Continent],
) -> impl Iterator<Item = &'s ClassifiedRecord<'a>> + 's {
    classified
        .iter()
        .filter(move |entry| continents.is_empty() || continents.contains(&entry.continent))
}

/// Distinct continents of the classified relation in first-seen order.
pub fn continents_present(classified: &[ClassifiedRecord<'_>]) -> Vec<Continent> {
    let mut present = Vec::new();
    for entry in classified {
        if !present.contains(&entry.continent) {
            present.push(entry.continent);
        }
    }
    present
}
