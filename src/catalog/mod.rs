//! Catalog records and the immutable in-memory relation
//!
//! A [`Catalog`] is built once from the source CSV (see [`loader`]) and then
//! only ever borrowed. Pipelines receive `&CatalogRecord` views and never
//! mutate the base relation.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::error::{DashError, ErrorCode, Result};

pub mod loader;
pub mod store;

pub use loader::{load_catalog, parse_catalog, parse_date_added, REQUIRED_COLUMNS};
pub use store::CatalogStore;

/// Sentinel the source uses for titles without a credited director.
pub const DIRECTOR_NOT_GIVEN: &str = "Not Given";

/// Delimiter between category labels in `listed_in`.
pub const CATEGORY_DELIMITER: &str = ", ";

/// Kind of title in the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ShowType {
    #[serde(rename = "Movie")]
    Movie,
    #[serde(rename = "TV Show")]
    TvShow,
}

impl ShowType {
    pub const ALL: [ShowType; 2] = [ShowType::Movie, ShowType::TvShow];

    pub fn as_str(&self) -> &'static str {
        match self {
            ShowType::Movie => "Movie",
            ShowType::TvShow => "TV Show",
        }
    }
}

impl fmt::Display for ShowType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ShowType {
    type Err = DashError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "Movie" => Ok(ShowType::Movie),
            "TV Show" => Ok(ShowType::TvShow),
            other => Err(DashError::catalog_with_code(
                ErrorCode::CATALOG_UNKNOWN_TYPE,
                format!("Unknown show type '{}'", other),
                None,
            )),
        }
    }
}

/// One title of the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogRecord {
    pub show_id: String,
    pub title: String,
    pub kind: ShowType,
    pub country: Option<String>,
    pub listed_in: String,
    pub director: Option<String>,
    pub date_added: Option<NaiveDate>,
    pub rating: Option<String>,
    pub duration: Option<String>,
}

impl CatalogRecord {
    pub fn new(show_id: impl Into<String>, title: impl Into<String>, kind: ShowType) -> Self {
        Self {
            show_id: show_id.into(),
            title: title.into(),
            kind,
            country: None,
            listed_in: String::new(),
            director: None,
            date_added: None,
            rating: None,
            duration: None,
        }
    }

    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }

    pub fn with_categories(mut self, listed_in: impl Into<String>) -> Self {
        self.listed_in = listed_in.into();
        self
    }

    pub fn with_director(mut self, director: impl Into<String>) -> Self {
        self.director = Some(director.into());
        self
    }

    pub fn with_date_added(mut self, date: NaiveDate) -> Self {
        self.date_added = Some(date);
        self
    }

    pub fn with_rating(mut self, rating: impl Into<String>) -> Self {
        self.rating = Some(rating.into());
        self
    }

    pub fn with_duration(mut self, duration: impl Into<String>) -> Self {
        self.duration = Some(duration.into());
        self
    }

    /// Category labels, one per element of `listed_in`.
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.listed_in
            .split(CATEGORY_DELIMITER)
            .filter(|category| !category.is_empty())
    }

    /// Credited director, or `None` when absent or the "Not Given" sentinel.
    pub fn credited_director(&self) -> Option<&str> {
        self.director
            .as_deref()
            .filter(|director| *director != DIRECTOR_NOT_GIVEN)
    }

    pub fn year_added(&self) -> Option<i32> {
        self.date_added.map(|date| date.year())
    }
}

/// Immutable relation of catalog records, unique by `show_id`
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    records: Vec<CatalogRecord>,
    by_id: HashMap<String, usize>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate show ids.
    pub fn new(records: Vec<CatalogRecord>) -> Result<Self> {
        let mut by_id = HashMap::with_capacity(records.len());
        for (index, record) in records.iter().enumerate() {
            if by_id.insert(record.show_id.clone(), index).is_some() {
                return Err(DashError::catalog_with_code(
                    ErrorCode::CATALOG_DUPLICATE_ID,
                    format!("Duplicate show id '{}'", record.show_id),
                    None,
                ));
            }
        }
        Ok(Self { records, by_id })
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CatalogRecord> {
        self.records.iter()
    }

    pub fn get(&self, show_id: &str) -> Option<&CatalogRecord> {
        self.by_id.get(show_id).map(|&index| &self.records[index])
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a CatalogRecord;
    type IntoIter = std::slice::Iter<'a, CatalogRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
