//! CSV loading for the catalog relation

use chrono::NaiveDate;
use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info, trace, warn};

use super::{Catalog, CatalogRecord, ShowType};
use crate::error::{common, DashError, ErrorCode, ErrorExt, Result};

/// Columns every catalog source must provide.
pub const REQUIRED_COLUMNS: &[&str] = &[
    "show_id",
    "title",
    "type",
    "country",
    "listed_in",
    "director",
    "date_added",
    "rating",
    "duration",
];

/// Formats seen in `date_added` across catalog exports.
const DATE_FORMATS: &[&str] = &["%m/%d/%Y", "%B %d, %Y", "%Y-%m-%d"];

#[derive(Debug, Deserialize)]
struct RawRecord {
    show_id: String,
    title: String,
    #[serde(rename = "type")]
    kind: String,
    country: Option<String>,
    listed_in: Option<String>,
    director: Option<String>,
    date_added: Option<String>,
    rating: Option<String>,
    duration: Option<String>,
}

/// Load the catalog from a CSV file on disk.
pub fn load_catalog(path: &Path) -> Result<Catalog> {
    if !path.exists() {
        return Err(common::catalog_not_found(path));
    }

    let started = Instant::now();
    let file = File::open(path).to_catalog_error(ErrorCode::CATALOG_READ_FAILED, path)?;
    let catalog = parse_catalog(file, path)?;

    info!(
        "Loaded {} catalog records from {} in {:?}",
        catalog.len(),
        path.display(),
        started.elapsed()
    );
    Ok(catalog)
}

/// Parse catalog CSV from any reader. `origin` is only used in error messages.
pub fn parse_catalog<R: Read>(reader: R, origin: &Path) -> Result<Catalog> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(false)
        .from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    let missing: Vec<&str> = REQUIRED_COLUMNS
        .iter()
        .copied()
        .filter(|column| !headers.iter().any(|header| header == *column))
        .collect();
    if !missing.is_empty() {
        return Err(common::missing_columns(origin, &missing));
    }
    trace!("Catalog header: {:?}", headers);

    let mut records = Vec::new();
    let mut undated = 0usize;
    for row in csv_reader.records() {
        let row = row?;
        let line = row.position().map(|pos| pos.line()).unwrap_or_default();
        let raw: RawRecord = row.deserialize(Some(&headers))?;

        let kind: ShowType = raw.kind.parse().map_err(|err: DashError| {
            err.with_context(format!("{} line {}", origin.display(), line))
        })?;

        let date_added = match raw.date_added.as_deref() {
            Some(value) => {
                let parsed = parse_date_added(value);
                if parsed.is_none() {
                    debug!("Unparseable date_added '{}' on line {}", value, line);
                    undated += 1;
                }
                parsed
            }
            None => {
                undated += 1;
                None
            }
        };

        records.push(CatalogRecord {
            show_id: raw.show_id,
            title: raw.title,
            kind,
            country: raw.country,
            listed_in: raw.listed_in.unwrap_or_default(),
            director: raw.director,
            date_added,
            rating: raw.rating,
            duration: raw.duration,
        });
    }

    if undated > 0 {
        warn!(
            "{} catalog records have no usable date_added and will not appear in the yearly trend",
            undated
        );
    }

    Catalog::new(records).map_err(|err| err.with_context(origin.display()))
}

/// Parse a `date_added` value in any of the accepted formats.
pub fn parse_date_added(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(value, format).ok())
}
