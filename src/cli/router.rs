//! Command routing and execution
//!
//! This module resolves configuration, loads the catalog once and routes CLI
//! commands to their renderers.

use anyhow::Result;
use std::io::Write;
use tracing::debug;

use crate::catalog::CatalogStore;
use crate::cli::args::{Cli, Commands, SelectionArgs};
use crate::cli::commands::*;
use crate::cli::output::OutputFormat;
use crate::config::{ConfigLoader, DashboardConfig};
use crate::dashboard::{Dashboard, Selection};
use crate::error::ErrorExt;

/// Layer defaults, config file, environment and CLI flags, then validate.
pub fn load_config(cli: &Cli) -> crate::error::Result<DashboardConfig> {
    let mut config = ConfigLoader::new()
        .with_config_file(cli.config.clone())
        .load()?;
    config.apply_overrides(&cli.overrides());
    config.validate()?;
    Ok(config)
}

/// Execute a CLI command, writing its rendering to `out`
pub fn execute_command<W: Write>(
    command: Option<Commands>,
    format: OutputFormat,
    config: &DashboardConfig,
    out: &mut W,
) -> Result<()> {
    let store = CatalogStore::new(config.catalog_path.clone());
    debug!("Loading catalog from {}", store.path().display());
    let catalog = store.get()?;
    let lookup = config.lookup()?;
    let dashboard = Dashboard::new(&catalog, &lookup, config.pipeline_settings());

    let rendered = render_command(&dashboard, command, format)?;
    out.write_all(rendered.as_bytes())
        .to_output_error("Failed to write output")?;
    Ok(())
}

/// Render the output of one command against a ready dashboard.
pub fn render_command(
    dashboard: &Dashboard<'_>,
    command: Option<Commands>,
    format: OutputFormat,
) -> crate::error::Result<String> {
    let command = command.unwrap_or(Commands::Report {
        selection: SelectionArgs::default(),
    });
    debug!("Executing {:?}", command);

    match command {
        Commands::Report { selection } => {
            run_report_command(dashboard, &selection.to_selection(), format)
        }
        Commands::Types { continents } => {
            let selection = Selection::new().with_continents(continents.continents);
            run_chart_command(dashboard, Chart::Types, &selection, format)
        }
        Commands::Trend { continents } => {
            let selection = Selection::new().with_continents(continents.continents);
            run_chart_command(dashboard, Chart::Trend, &selection, format)
        }
        Commands::Categories { categories } => {
            let selection = Selection::new().with_categories(categories);
            run_chart_command(dashboard, Chart::Categories, &selection, format)
        }
        Commands::Directors { show } => {
            let selection = Selection::new().with_show(show);
            run_chart_command(dashboard, Chart::Directors, &selection, format)
        }
        Commands::Countries { all: true, .. } => {
            run_chart_command(dashboard, Chart::AllCountries, &Selection::new(), format)
        }
        Commands::Countries { map_continent, .. } => {
            let selection = Selection::new().with_map_continent(map_continent);
            run_chart_command(dashboard, Chart::Countries, &selection, format)
        }
        Commands::Continents => {
            run_chart_command(dashboard, Chart::Continents, &Selection::new(), format)
        }
        Commands::Durations { show } => {
            let selection = Selection::new().with_show(show);
            run_chart_command(dashboard, Chart::Durations, &selection, format)
        }
        Commands::Ratings { show } => {
            let selection = Selection::new().with_show(show);
            run_chart_command(dashboard, Chart::Ratings, &selection, format)
        }
        Commands::Options => run_options_command(dashboard, format),
    }
}

/// Exit status for an error returned by [`execute_command`].
pub fn exit_code_for(error: &anyhow::Error) -> i32 {
    error
        .downcast_ref::<crate::error::DashError>()
        .map(|err| err.exit_code())
        .unwrap_or(1)
}

/// One-line description of a failure for stderr.
pub fn describe_failure(error: &anyhow::Error) -> String {
    match error.downcast_ref::<crate::error::DashError>() {
        Some(err) => {
            let mut text = format!("[E{:04}] {}", err.code(), err.user_message());
            if let Some(source) = std::error::Error::source(err) {
                text.push_str(&format!(" ({})", source));
            }
            text
        }
        None => format!("{:#}", error),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, CatalogRecord, ShowType};
    use crate::cli::args::ContinentArgs;
    use crate::dashboard::PipelineSettings;
    use crate::geo::{Continent, ContinentLookup};
    use tempfile::TempDir;

    fn catalog() -> Catalog {
        Catalog::new(vec![
            CatalogRecord::new("s1", "Lupin", ShowType::TvShow).with_country("France"),
            CatalogRecord::new("s2", "Atlantics", ShowType::Movie).with_country("Senegal, France"),
        ])
        .unwrap()
    }

    #[test]
    fn test_default_command_is_report() {
        let catalog = catalog();
        let dashboard = Dashboard::new(
            &catalog,
            &ContinentLookup::canonical(),
            PipelineSettings::default(),
        );
        let text = render_command(&dashboard, None, OutputFormat::Text).unwrap();
        assert!(text.contains("Movies vs TV Shows"));
        assert!(text.contains("Titles per Continent"));
    }

    #[test]
    fn test_types_command_uses_continents() {
        let catalog = catalog();
        let dashboard = Dashboard::new(
            &catalog,
            &ContinentLookup::canonical(),
            PipelineSettings::default(),
        );
        let command = Commands::Types {
            continents: ContinentArgs {
                continents: vec![Continent::Africa],
            },
        };
        let json = render_command(&dashboard, Some(command), OutputFormat::Json).unwrap();
        // "Senegal, France" is not classified in verbatim mode.
        assert_eq!(json.trim(), "[]");
    }

    #[test]
    fn test_countries_all_includes_raw_values() {
        let catalog = catalog();
        let dashboard = Dashboard::new(
            &catalog,
            &ContinentLookup::canonical(),
            PipelineSettings::default(),
        );
        let command = Commands::Countries {
            map_continent: None,
            all: true,
        };
        let text = render_command(&dashboard, Some(command), OutputFormat::Text).unwrap();
        assert!(text.contains("Senegal, France"));
    }

    #[test]
    fn test_execute_command_reports_missing_catalog() {
        let temp_dir = TempDir::new().unwrap();
        let config = DashboardConfig {
            catalog_path: temp_dir.path().join("missing.csv"),
            ..DashboardConfig::default()
        };

        let mut out = Vec::new();
        let err = execute_command(None, OutputFormat::Text, &config, &mut out).unwrap_err();
        let dash_err = err.downcast_ref::<crate::error::DashError>().unwrap();
        assert_eq!(dash_err.code(), crate::error::ErrorCode::CATALOG_NOT_FOUND);
        assert_eq!(exit_code_for(&err), 3);
        assert!(describe_failure(&err).starts_with("[E2001] Could not load catalog"));
        assert!(out.is_empty());
    }

    #[test]
    fn test_execute_command_writes_output() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("titles.csv");
        std::fs::write(
            &path,
            "show_id,type,title,director,country,date_added,release_year,rating,duration,listed_in\n\
             s1,Movie,Roma,Alfonso Cuarón,Mexico,12/14/2018,2018,R,135 min,Dramas\n",
        )
        .unwrap();
        let config = DashboardConfig {
            catalog_path: path,
            ..DashboardConfig::default()
        };

        let mut out = Vec::new();
        execute_command(Some(Commands::Continents), OutputFormat::Json, &config, &mut out).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value[0]["continent"], "North America");
        assert_eq!(value[0]["count"], 1);
    }
}
