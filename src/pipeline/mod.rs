//! Aggregation pipelines over catalog views
//!
//! Every pipeline is a pure function: it borrows an iterator of records (the
//! whole catalog, a filtered view, or the records behind a classified
//! relation) and returns a fresh, small relation of aggregated rows. Empty
//! input always yields empty output.
//!
//! Exclusion rules, applied per pipeline only:
//! - yearly trend: records without a parseable `date_added`
//! - top directors: missing director or the `"Not Given"` sentinel
//! - country distribution: missing country
//! - duration / rating distribution: missing duration / rating
//!
//! Ordering is always total so repeated runs return identical rows. Top-N
//! rankings sort by count descending, then by the group label.

use serde::Serialize;
use std::collections::{BTreeMap, HashMap};
use std::hash::Hash;

use crate::catalog::ShowType;
use crate::geo::Continent;

pub mod distribution;
pub mod ranking;

pub use distribution::{
    classified_country_distribution, continent_distribution, country_distribution,
    duration_distribution, rating_distribution, type_distribution, yearly_trend,
};
pub use ranking::{category_breakdown, category_counts, director_counts, top_directors};

/// Number of rows kept per group by the ranking pipelines unless configured.
pub const DEFAULT_TOP_N: usize = 10;

/// Aggregated row with a count measure
pub trait Counted {
    fn count(&self) -> usize;
}

/// Sum of the count measure over a relation.
pub fn total<R: Counted>(rows: &[R]) -> usize {
    rows.iter().map(Counted::count).sum()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypeCount {
    #[serde(rename = "type")]
    pub kind: ShowType,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct YearCount {
    #[serde(rename = "type")]
    pub kind: ShowType,
    pub year: i32,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    #[serde(rename = "type")]
    pub kind: ShowType,
    pub category: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DirectorCount {
    #[serde(rename = "type")]
    pub kind: ShowType,
    pub director: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountryCount {
    pub country: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DurationCount {
    pub duration: String,
    #[serde(rename = "type")]
    pub kind: ShowType,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RatingCount {
    pub rating: String,
    #[serde(rename = "type")]
    pub kind: ShowType,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContinentCount {
    pub continent: Continent,
    pub count: usize,
}

macro_rules! impl_counted {
    ($($row:ty),* $(,)?) => {
        $(impl Counted for $row {
            fn count(&self) -> usize {
                self.count
            }
        })*
    };
}

impl_counted!(
    TypeCount,
    YearCount,
    CategoryCount,
    DirectorCount,
    CountryCount,
    DurationCount,
    RatingCount,
    ContinentCount,
);

/// Count occurrences of each key. Keys come back in their natural order.
pub(crate) fn count_by<K, I>(keys: I) -> BTreeMap<K, usize>
where
    K: Ord,
    I: IntoIterator<Item = K>,
{
    let mut counts = BTreeMap::new();
    for key in keys {
        *counts.entry(key).or_insert(0) += 1;
    }
    counts
}

/// Keep the first `n` rows of each group, preserving the incoming order.
/// Rows must already be sorted by rank.
pub fn top_n_per_group<R, G, F>(rows: Vec<R>, n: usize, group: F) -> Vec<R>
where
    G: Eq + Hash,
    F: Fn(&R) -> G,
{
    let mut seen: HashMap<G, usize> = HashMap::new();
    rows.into_iter()
        .filter(|row| {
            let taken = seen.entry(group(row)).or_insert(0);
            *taken += 1;
            *taken <= n
        })
        .collect()
}
