//! The full dashboard report

use tracing::debug;

use super::charts::{run_chart_command, Chart};
use crate::cli::output::{render_value, OutputFormat};
use crate::dashboard::{Dashboard, Selection};
use crate::error::Result;

const REPORT_CHARTS: [Chart; 8] = [
    Chart::Types,
    Chart::Trend,
    Chart::Categories,
    Chart::Directors,
    Chart::Countries,
    Chart::Continents,
    Chart::Durations,
    Chart::Ratings,
];

/// Render every chart for one selection.
pub fn run_report_command(
    dashboard: &Dashboard<'_>,
    selection: &Selection,
    format: OutputFormat,
) -> Result<String> {
    debug!("Building report for selection {:?}", selection);

    if let Some(serialized) = render_value(&dashboard.report(selection), format)? {
        return Ok(serialized);
    }

    let mut sections = vec![describe_selection(selection)];
    for chart in REPORT_CHARTS {
        sections.push(run_chart_command(dashboard, chart, selection, format)?);
    }
    Ok(sections.join("\n"))
}

fn describe_selection(selection: &Selection) -> String {
    fn list<T: ToString>(values: &[T]) -> String {
        if values.is_empty() {
            "all".to_string()
        } else {
            values
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ")
        }
    }

    let map = selection
        .map_continent
        .map(|continent| continent.to_string())
        .unwrap_or_else(|| "all".to_string());

    format!(
        "Continents: {}\nCategories: {}\nMap continent: {}\nShow: {}\n",
        list(&selection.continents),
        list(&selection.categories),
        map,
        selection.show
    )
}
