//! CLI argument structures
//!
//! This module defines the command-line interface of catalog-dash: global
//! flags that override configuration, and one subcommand per dashboard
//! chart plus the whole report.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use super::output::OutputFormat;
use crate::config::CliOverrides;
use crate::dashboard::{Selection, ShowChoice};
use crate::geo::{Continent, CountryMode};

/// Explore a streaming catalog by continent, type, category and director
#[derive(Parser, Debug)]
#[command(name = "catalog-dash")]
#[command(
    about = "catalog-dash - Aggregate a streaming catalog the way its dashboard shows it",
    long_about = None
)]
#[command(version)]
pub struct Cli {
    /// Enable verbose output (-v for debug, -vv for trace, -vvv for all)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(short = 'c', long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Catalog CSV file (overrides configuration)
    #[arg(long, global = true, value_name = "FILE")]
    pub catalog: Option<PathBuf>,

    /// How multi-country values are classified
    #[arg(long, global = true, value_enum)]
    pub country_mode: Option<CountryMode>,

    /// Rows kept per show type in category and director rankings
    #[arg(long, global = true, value_name = "N")]
    pub top_n: Option<usize>,

    /// Output format
    #[arg(short = 'f', long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    pub fn overrides(&self) -> CliOverrides {
        CliOverrides {
            catalog_path: self.catalog.clone(),
            top_n: self.top_n,
            country_mode: self.country_mode,
        }
    }
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Every chart of the dashboard (default command)
    Report {
        #[command(flatten)]
        selection: SelectionArgs,
    },

    /// Movies vs TV shows for the selected continents
    Types {
        #[command(flatten)]
        continents: ContinentArgs,
    },

    /// Titles added per year for the selected continents
    Trend {
        #[command(flatten)]
        continents: ContinentArgs,
    },

    /// Most common categories per show type
    Categories {
        /// Only show these categories (repeatable)
        #[arg(long = "category", value_name = "CATEGORY")]
        categories: Vec<String>,
    },

    /// Top directors per show type
    Directors {
        #[arg(long, value_enum, default_value_t = ShowChoice::Both)]
        show: ShowChoice,
    },

    /// Titles per country
    Countries {
        /// Only countries of this continent
        #[arg(long, value_name = "CONTINENT", value_parser = parse_continent)]
        map_continent: Option<Continent>,

        /// Count raw country values, including unclassifiable ones
        #[arg(long, conflicts_with = "map_continent")]
        all: bool,
    },

    /// Titles per continent
    Continents,

    /// Titles per duration, split by show type
    Durations {
        #[arg(long, value_enum, default_value_t = ShowChoice::Both)]
        show: ShowChoice,
    },

    /// Titles per rating and show type
    Ratings {
        #[arg(long, value_enum, default_value_t = ShowChoice::Both)]
        show: ShowChoice,
    },

    /// Values the selection flags accept for this catalog
    Options,
}

#[derive(Args, Debug, Clone, Default)]
pub struct ContinentArgs {
    /// Restrict to these continents (repeatable; default all)
    #[arg(long = "continent", value_name = "CONTINENT", value_parser = parse_continent)]
    pub continents: Vec<Continent>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct SelectionArgs {
    #[command(flatten)]
    pub continents: ContinentArgs,

    /// Only show these categories (repeatable; default top N)
    #[arg(long = "category", value_name = "CATEGORY")]
    pub categories: Vec<String>,

    /// Continent drawn on the country map
    #[arg(long, value_name = "CONTINENT", value_parser = parse_continent)]
    pub map_continent: Option<Continent>,

    /// Show types for the director, duration and rating charts
    #[arg(long, value_enum, default_value_t = ShowChoice::Both)]
    pub show: ShowChoice,
}

impl SelectionArgs {
    pub fn to_selection(&self) -> Selection {
        Selection::new()
            .with_continents(self.continents.continents.iter().copied())
            .with_categories(self.categories.iter().cloned())
            .with_map_continent(self.map_continent)
            .with_show(self.show)
    }
}

fn parse_continent(value: &str) -> Result<Continent, String> {
    value.parse().map_err(|_| {
        let known: Vec<&str> = Continent::ALL.iter().map(Continent::as_str).collect();
        format!("unknown continent '{}' (expected one of: {})", value, known.join(", "))
    })
}
