use crate::cli::output::{render_value, OutputFormat};
use crate::dashboard::Dashboard;
use crate::error::Result;

/// List the values the selection flags accept for the loaded catalog.
pub fn run_options_command(dashboard: &Dashboard<'_>, format: OutputFormat) -> Result<String> {
    let options = dashboard.options();
    if let Some(serialized) = render_value(&options, format)? {
        return Ok(serialized);
    }

    let continents: Vec<String> = options.continents.iter().map(ToString::to_string).collect();
    let show: Vec<String> = options.show.iter().map(ToString::to_string).collect();

    let mut text = String::new();
    text.push_str(&format!("Continents ({}):\n", continents.len()));
    for continent in &continents {
        text.push_str(&format!("  {}\n", continent));
    }
    text.push_str(&format!("Categories ({}):\n", options.categories.len()));
    for category in &options.categories {
        text.push_str(&format!("  {}\n", category));
    }
    text.push_str(&format!("Show: {}\n", show.join(", ")));
    Ok(text)
}
