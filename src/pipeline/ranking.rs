//! Ranked, top-N-per-type pipelines: categories and directors

use std::cmp::Reverse;

use super::{count_by, top_n_per_group, CategoryCount, DirectorCount};
use crate::catalog::{CatalogRecord, ShowType};

/// Titles per (type, category) with `listed_in` pivoted into one row per
/// category. Ordered by type, then count descending, then category.
pub fn category_counts<'a, I>(records: I) -> Vec<CategoryCount>
where
    I: IntoIterator<Item = &'a CatalogRecord>,
{
    let mut rows: Vec<CategoryCount> = count_by(
        records
            .into_iter()
            .flat_map(|record| record.categories().map(move |category| (record.kind, category))),
    )
    .into_iter()
    .map(|((kind, category), count)| CategoryCount {
        kind,
        category: category.to_string(),
        count,
    })
    .collect();
    rows.sort_by_key(|row| (row.kind, Reverse(row.count)));
    rows
}

/// Category breakdown as shown on the dashboard.
///
/// With no selected categories, keeps the `top_n` most common categories
/// of each type. Otherwise keeps exactly the selected categories.
pub fn category_breakdown<'a, I>(
    records: I,
    selected: &[String],
    top_n: usize,
) -> Vec<CategoryCount>
where
    I: IntoIterator<Item = &'a CatalogRecord>,
{
    let rows = category_counts(records);
    if selected.is_empty() {
        top_n_per_group(rows, top_n, |row| row.kind)
    } else {
        rows.into_iter()
            .filter(|row| selected.iter().any(|category| *category == row.category))
            .collect()
    }
}

/// Titles per credited director and type, excluding missing directors and
/// the "Not Given" sentinel. Ordered by count descending, then type
/// descending, then director.
pub fn director_counts<'a, I>(records: I) -> Vec<DirectorCount>
where
    I: IntoIterator<Item = &'a CatalogRecord>,
{
    let mut rows: Vec<DirectorCount> = count_by(
        records
            .into_iter()
            .filter_map(|record| {
                record
                    .credited_director()
                    .map(|director| (record.kind, director))
            }),
    )
    .into_iter()
    .map(|((kind, director), count)| DirectorCount {
        kind,
        director: director.to_string(),
        count,
    })
    .collect();
    rows.sort_by_key(|row| (Reverse(row.count), Reverse(row.kind)));
    rows
}

/// The `top_n` directors of each type, restricted to `kinds` (empty keeps
/// both types).
pub fn top_directors<'a, I>(records: I, kinds: &[ShowType], top_n: usize) -> Vec<DirectorCount>
where
    I: IntoIterator<Item = &'a CatalogRecord>,
{
    top_n_per_group(director_counts(records), top_n, |row| row.kind)
        .into_iter()
        .filter(|row| kinds.is_empty() || kinds.contains(&row.kind))
        .collect()
}
