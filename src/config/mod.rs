//! Dashboard configuration
//!
//! Values are layered, lowest priority first:
//!
//! 1. Hardcoded defaults
//! 2. A TOML file (`--config`, `./catalog-dash.toml`, or the user config dir)
//! 3. Environment variables (`CATALOG_DASH_*`)
//! 4. Command-line flags
//!
//! ```toml
//! catalog_path = "data/netflix1.csv"
//! top_n = 10
//! country_mode = "first-country"
//! log_level = "debug"
//!
//! [continents]
//! "Soviet Union" = "Asia"
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::dashboard::PipelineSettings;
use crate::error::{common, DashError, ErrorCode, Result};
use crate::geo::{Continent, ContinentLookup, CountryMode};
use crate::pipeline::DEFAULT_TOP_N;

pub mod loader;

pub use loader::ConfigLoader;

/// Valid log levels for configuration validation.
pub const VALID_LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// File name searched for in the working directory.
pub const CONFIG_FILE_NAME: &str = "catalog-dash.toml";

pub const ENV_CATALOG: &str = "CATALOG_DASH_CATALOG";
pub const ENV_TOP_N: &str = "CATALOG_DASH_TOP_N";
pub const ENV_COUNTRY_MODE: &str = "CATALOG_DASH_COUNTRY_MODE";
pub const ENV_LOG_LEVEL: &str = "CATALOG_DASH_LOG_LEVEL";

fn default_catalog_path() -> PathBuf {
    PathBuf::from("netflix1.csv")
}

fn default_top_n() -> usize {
    DEFAULT_TOP_N
}

fn default_log_level() -> String {
    "info".to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DashboardConfig {
    /// CSV file the catalog is loaded from.
    #[serde(default = "default_catalog_path")]
    pub catalog_path: PathBuf,

    /// Rows kept per show type by the category and director rankings.
    #[serde(default = "default_top_n")]
    pub top_n: usize,

    /// How multi-country values are classified.
    #[serde(default)]
    pub country_mode: CountryMode,

    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Extra or replacement country to continent entries.
    #[serde(default)]
    pub continents: BTreeMap<String, String>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            catalog_path: default_catalog_path(),
            top_n: default_top_n(),
            country_mode: CountryMode::default(),
            log_level: default_log_level(),
            continents: BTreeMap::new(),
        }
    }
}

/// Values given on the command line
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliOverrides {
    pub catalog_path: Option<PathBuf>,
    pub top_n: Option<usize>,
    pub country_mode: Option<CountryMode>,
}

impl DashboardConfig {
    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn merge_env_vars(&mut self) -> Result<()> {
        self.merge_env_with(|key| std::env::var(key).ok())
    }

    /// Apply `CATALOG_DASH_*` variables using the given lookup.
    pub fn merge_env_with<F>(&mut self, env: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path) = env(ENV_CATALOG) {
            self.catalog_path = PathBuf::from(path);
        }

        if let Some(top_n) = env(ENV_TOP_N) {
            self.top_n = top_n
                .trim()
                .parse()
                .map_err(|err| common::invalid_config_value(ENV_TOP_N, err))?;
        }

        if let Some(mode) = env(ENV_COUNTRY_MODE) {
            self.country_mode = mode.parse().map_err(|err: DashError| {
                common::invalid_config_value(ENV_COUNTRY_MODE, err.user_message())
            })?;
        }

        if let Some(level) = env(ENV_LOG_LEVEL) {
            self.log_level = level.trim().to_lowercase();
        }

        Ok(())
    }

    pub fn apply_overrides(&mut self, overrides: &CliOverrides) {
        if let Some(path) = &overrides.catalog_path {
            self.catalog_path = path.clone();
        }
        if let Some(top_n) = overrides.top_n {
            self.top_n = top_n;
        }
        if let Some(mode) = overrides.country_mode {
            self.country_mode = mode;
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.top_n == 0 {
            return Err(common::invalid_config_value("top_n", "must be at least 1"));
        }

        if !VALID_LOG_LEVELS.contains(&self.log_level.as_str()) {
            return Err(common::invalid_config_value(
                "log_level",
                format!(
                    "'{}' is not one of {}",
                    self.log_level,
                    VALID_LOG_LEVELS.join(", ")
                ),
            ));
        }

        self.continent_overrides().map(|_| ())
    }

    /// Parsed `[continents]` entries.
    pub fn continent_overrides(&self) -> Result<Vec<(String, Continent)>> {
        self.continents
            .iter()
            .map(|(country, continent)| {
                continent
                    .parse::<Continent>()
                    .map(|continent| (country.clone(), continent))
                    .map_err(|_| {
                        DashError::config_with_code(
                            ErrorCode::CONFIG_UNKNOWN_CONTINENT,
                            format!("Unknown continent '{}' for country '{}'", continent, country),
                        )
                    })
            })
            .collect()
    }

    /// The canonical lookup with configured overrides applied.
    pub fn lookup(&self) -> Result<ContinentLookup> {
        Ok(ContinentLookup::canonical().with_overrides(self.continent_overrides()?))
    }

    pub fn pipeline_settings(&self) -> PipelineSettings {
        PipelineSettings {
            top_n: self.top_n,
            country_mode: self.country_mode,
        }
    }
}
