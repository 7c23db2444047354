//! Single-chart commands

use crate::cli::output::{render_rows, OutputFormat};
use crate::dashboard::{Dashboard, Selection};
use crate::error::Result;

/// One chart of the dashboard page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Chart {
    Types,
    Trend,
    Categories,
    Directors,
    Countries,
    AllCountries,
    Continents,
    Durations,
    Ratings,
}

impl Chart {
    pub fn title(&self) -> &'static str {
        match self {
            Chart::Types => "Movies vs TV Shows",
            Chart::Trend => "Titles Added per Year",
            Chart::Categories => "Top Categories",
            Chart::Directors => "Top Directors",
            Chart::Countries => "Titles per Country",
            Chart::AllCountries => "Titles per Country (all values)",
            Chart::Continents => "Titles per Continent",
            Chart::Durations => "Durations",
            Chart::Ratings => "Ratings",
        }
    }
}

pub fn run_chart_command(
    dashboard: &Dashboard<'_>,
    chart: Chart,
    selection: &Selection,
    format: OutputFormat,
) -> Result<String> {
    let title = chart.title();
    match chart {
        Chart::Types => render_rows(title, &dashboard.types(selection), format),
        Chart::Trend => render_rows(title, &dashboard.trend(selection), format),
        Chart::Categories => render_rows(title, &dashboard.categories(selection), format),
        Chart::Directors => render_rows(title, &dashboard.directors(selection), format),
        Chart::Countries => render_rows(title, &dashboard.countries(selection), format),
        Chart::AllCountries => render_rows(title, &dashboard.all_countries(), format),
        Chart::Continents => render_rows(title, &dashboard.continents(), format),
        Chart::Durations => render_rows(title, &dashboard.durations(selection), format),
        Chart::Ratings => render_rows(title, &dashboard.ratings(selection), format),
    }
}
