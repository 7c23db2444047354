//! Plain group-by/count distributions

use std::cmp::Reverse;

use super::{
    count_by, ContinentCount, CountryCount, DurationCount, RatingCount, TypeCount, YearCount,
};
use crate::catalog::{CatalogRecord, ShowType};
use crate::geo::ClassifiedRecord;

/// Titles per show type, most common first.
pub fn type_distribution<'a, I>(records: I) -> Vec<TypeCount>
where
    I: IntoIterator<Item = &'a CatalogRecord>,
{
    let mut rows: Vec<TypeCount> = count_by(records.into_iter().map(|record| record.kind))
        .into_iter()
        .map(|(kind, count)| TypeCount { kind, count })
        .collect();
    rows.sort_by_key(|row| (Reverse(row.count), row.kind));
    rows
}

/// Titles added per year and show type, ordered by type then year.
/// Records without a usable `date_added` are left out.
pub fn yearly_trend<'a, I>(records: I) -> Vec<YearCount>
where
    I: IntoIterator<Item = &'a CatalogRecord>,
{
    count_by(
        records
            .into_iter()
            .filter_map(|record| record.year_added().map(|year| (record.kind, year))),
    )
    .into_iter()
    .map(|((kind, year), count)| YearCount { kind, year, count })
    .collect()
}

/// Titles per raw country value, most common first. Missing countries are
/// left out; multi-country values count as their own key.
pub fn country_distribution<'a, I>(records: I) -> Vec<CountryCount>
where
    I: IntoIterator<Item = &'a CatalogRecord>,
{
    rank_countries(count_by(
        records
            .into_iter()
            .filter_map(|record| record.country.as_deref()),
    ))
}

/// Titles per classified country key, most common first.
pub fn classified_country_distribution<'s, 'a: 's, I>(classified: I) -> Vec<CountryCount>
where
    I: IntoIterator<Item = &'s ClassifiedRecord<'a>>,
{
    rank_countries(count_by(classified.into_iter().map(|entry| entry.country)))
}

fn rank_countries(counts: std::collections::BTreeMap<&str, usize>) -> Vec<CountryCount> {
    let mut rows: Vec<CountryCount> = counts
        .into_iter()
        .map(|(country, count)| CountryCount {
            country: country.to_string(),
            count,
        })
        .collect();
    // Stable sort keeps the lexical order among equal counts.
    rows.sort_by_key(|row| Reverse(row.count));
    rows
}

/// Titles per continent, most common first.
pub fn continent_distribution<'s, 'a: 's, I>(classified: I) -> Vec<ContinentCount>
where
    I: IntoIterator<Item = &'s ClassifiedRecord<'a>>,
{
    let mut rows: Vec<ContinentCount> =
        count_by(classified.into_iter().map(|entry| entry.continent))
            .into_iter()
            .map(|(continent, count)| ContinentCount { continent, count })
            .collect();
    rows.sort_by_key(|row| Reverse(row.count));
    rows
}

/// Titles per duration label and show type, most common first. Movies and
/// TV shows use different units, so rows always carry their type. An empty
/// `kinds` slice keeps both types.
pub fn duration_distribution<'a, I>(records: I, kinds: &[ShowType]) -> Vec<DurationCount>
where
    I: IntoIterator<Item = &'a CatalogRecord>,
{
    let mut rows: Vec<DurationCount> = count_by(
        records
            .into_iter()
            .filter(|record| kinds.is_empty() || kinds.contains(&record.kind))
            .filter_map(|record| {
                record
                    .duration
                    .as_deref()
                    .map(|duration| (record.kind, duration))
            }),
    )
    .into_iter()
    .map(|((kind, duration), count)| DurationCount {
        duration: duration.to_string(),
        kind,
        count,
    })
    .collect();
    rows.sort_by_key(|row| Reverse(row.count));
    rows
}

/// Titles per rating code and show type, ordered by rating then type.
pub fn rating_distribution<'a, I>(records: I, kinds: &[ShowType]) -> Vec<RatingCount>
where
    I: IntoIterator<Item = &'a CatalogRecord>,
{
    count_by(
        records
            .into_iter()
            .filter(|record| kinds.is_empty() || kinds.contains(&record.kind))
            .filter_map(|record| record.rating.as_deref().map(|rating| (rating, record.kind))),
    )
    .into_iter()
    .map(|((rating, kind), count)| RatingCount {
        rating: rating.to_string(),
        kind,
        count,
    })
    .collect()
}
