//! Text, JSON and YAML rendering of aggregated relations

use serde::Serialize;

use crate::error::Result;
use crate::pipeline::{
    CategoryCount, ContinentCount, CountryCount, DirectorCount, DurationCount, RatingCount,
    TypeCount, YearCount,
};

/// Shown in place of a table whose relation is empty.
pub const NO_DATA: &str = "(no data)";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Yaml,
}

/// A row that can be laid out as a text table
pub trait TableRow {
    fn headers() -> &'static [&'static str];
    fn cells(&self) -> Vec<String>;
}

impl TableRow for TypeCount {
    fn headers() -> &'static [&'static str] {
        &["type", "count"]
    }

    fn cells(&self) -> Vec<String> {
        vec![self.kind.to_string(), self.count.to_string()]
    }
}

impl TableRow for YearCount {
    fn headers() -> &'static [&'static str] {
        &["type", "year", "count"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.kind.to_string(),
            self.year.to_string(),
            self.count.to_string(),
        ]
    }
}

impl TableRow for CategoryCount {
    fn headers() -> &'static [&'static str] {
        &["type", "category", "count"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.kind.to_string(),
            self.category.clone(),
            self.count.to_string(),
        ]
    }
}

impl TableRow for DirectorCount {
    fn headers() -> &'static [&'static str] {
        &["type", "director", "count"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.kind.to_string(),
            self.director.clone(),
            self.count.to_string(),
        ]
    }
}

impl TableRow for CountryCount {
    fn headers() -> &'static [&'static str] {
        &["country", "count"]
    }

    fn cells(&self) -> Vec<String> {
        vec![self.country.clone(), self.count.to_string()]
    }
}

impl TableRow for ContinentCount {
    fn headers() -> &'static [&'static str] {
        &["continent", "count"]
    }

    fn cells(&self) -> Vec<String> {
        vec![self.continent.to_string(), self.count.to_string()]
    }
}

impl TableRow for DurationCount {
    fn headers() -> &'static [&'static str] {
        &["duration", "type", "count"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.duration.clone(),
            self.kind.to_string(),
            self.count.to_string(),
        ]
    }
}

impl TableRow for RatingCount {
    fn headers() -> &'static [&'static str] {
        &["rating", "type", "count"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.rating.clone(),
            self.kind.to_string(),
            self.count.to_string(),
        ]
    }
}

/// Lay rows out as a titled, left-aligned text table.
pub fn render_table<R: TableRow>(title: &str, rows: &[R]) -> String {
    let mut text = format!("{}\n", title);
    if rows.is_empty() {
        text.push_str(NO_DATA);
        text.push('\n');
        return text;
    }

    let headers = R::headers();
    let cells: Vec<Vec<String>> = rows.iter().map(TableRow::cells).collect();
    let widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(column, header)| {
            cells
                .iter()
                .map(|row| row[column].chars().count())
                .chain(std::iter::once(header.len()))
                .max()
                .unwrap_or_default()
        })
        .collect();

    let header_cells: Vec<String> = headers.iter().map(|h| h.to_string()).collect();
    push_line(&mut text, &header_cells, &widths);
    let rule: Vec<String> = widths.iter().map(|width| "-".repeat(*width)).collect();
    push_line(&mut text, &rule, &widths);
    for row in &cells {
        push_line(&mut text, row, &widths);
    }
    text
}

fn push_line(text: &mut String, cells: &[String], widths: &[usize]) {
    let line: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| {
            let pad = width.saturating_sub(cell.chars().count());
            format!("{}{}", cell, " ".repeat(pad))
        })
        .collect();
    text.push_str(line.join("  ").trim_end());
    text.push('\n');
}

/// Serialize any value in a machine-readable format.
pub fn render_value<T: Serialize>(value: &T, format: OutputFormat) -> Result<Option<String>> {
    match format {
        OutputFormat::Text => Ok(None),
        OutputFormat::Json => Ok(Some(format!("{}\n", serde_json::to_string_pretty(value)?))),
        OutputFormat::Yaml => Ok(Some(serde_yaml::to_string(value)?)),
    }
}

/// Render one relation in the requested format.
pub fn render_rows<R>(title: &str, rows: &[R], format: OutputFormat) -> Result<String>
where
    R: TableRow + Serialize,
{
    match render_value(&rows, format)? {
        Some(serialized) => Ok(serialized),
        None => Ok(render_table(title, rows)),
    }
}
