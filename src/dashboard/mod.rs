//! Dashboard composition
//!
//! Takes the user's current [`Selection`] as an explicit argument and runs
//! every pipeline the dashboard page shows, returning a fresh
//! [`DashboardReport`]. Nothing is retained between calls beyond the shared
//! catalog.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

use crate::catalog::{Catalog, ShowType};
use crate::error::{DashError, ErrorCode, Result};
use crate::geo::{self, classify, ClassifiedRecord, Continent, ContinentLookup, CountryMode};
use crate::pipeline::{
    self, CategoryCount, ContinentCount, CountryCount, DirectorCount, DurationCount, RatingCount,
    TypeCount, YearCount, DEFAULT_TOP_N,
};

/// Radio choice between show types
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum ShowChoice {
    #[default]
    Both,
    Movie,
    TvShow,
}

impl ShowChoice {
    pub fn kinds(&self) -> &'static [ShowType] {
        match self {
            ShowChoice::Both => &ShowType::ALL,
            ShowChoice::Movie => &[ShowType::Movie],
            ShowChoice::TvShow => &[ShowType::TvShow],
        }
    }
}

impl fmt::Display for ShowChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShowChoice::Both => f.write_str("Both"),
            ShowChoice::Movie => f.write_str("Movie"),
            ShowChoice::TvShow => f.write_str("TV Show"),
        }
    }
}

impl FromStr for ShowChoice {
    type Err = DashError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().replace(['_', ' '], "-").as_str() {
            "both" => Ok(ShowChoice::Both),
            "movie" => Ok(ShowChoice::Movie),
            "tv-show" | "tvshow" => Ok(ShowChoice::TvShow),
            _ => Err(DashError::validation_with_code(
                ErrorCode::VALIDATION_INVALID_INPUT,
                format!("unknown show choice '{}'", s),
                Some("show".to_string()),
            )),
        }
    }
}

/// Filter widgets' current values. Empty means "no filter".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    #[serde(default)]
    pub continents: Vec<Continent>,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub map_continent: Option<Continent>,
    #[serde(default)]
    pub show: ShowChoice,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_continents(mut self, continents: impl IntoIterator<Item = Continent>) -> Self {
        self.continents = continents.into_iter().collect();
        self
    }

    pub fn with_categories<S: Into<String>>(
        mut self,
        categories: impl IntoIterator<Item = S>,
    ) -> Self {
        self.categories = categories.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_map_continent(mut self, continent: Option<Continent>) -> Self {
        self.map_continent = continent;
        self
    }

    pub fn with_show(mut self, show: ShowChoice) -> Self {
        self.show = show;
        self
    }
}

/// Pipeline parameters that come from configuration rather than widgets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipelineSettings {
    pub top_n: usize,
    pub country_mode: CountryMode,
}

impl Default for PipelineSettings {
    fn default() -> Self {
        Self {
            top_n: DEFAULT_TOP_N,
            country_mode: CountryMode::default(),
        }
    }
}

/// Every aggregated relation the dashboard page shows
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardReport {
    pub selection: Selection,
    pub types: Vec<TypeCount>,
    pub trend: Vec<YearCount>,
    pub categories: Vec<CategoryCount>,
    pub directors: Vec<DirectorCount>,
    pub countries: Vec<CountryCount>,
    pub continents: Vec<ContinentCount>,
    pub durations: Vec<DurationCount>,
    pub ratings: Vec<RatingCount>,
}

/// Choices offered by the selection widgets
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardOptions {
    pub continents: Vec<Continent>,
    pub categories: Vec<String>,
    pub show: Vec<ShowChoice>,
}

/// A catalog paired with its continent classification
pub struct Dashboard<'a> {
    catalog: &'a Catalog,
    classified: Vec<ClassifiedRecord<'a>>,
    settings: PipelineSettings,
}

impl<'a> Dashboard<'a> {
    pub fn new(catalog: &'a Catalog, lookup: &ContinentLookup, settings: PipelineSettings) -> Self {
        let classified = classify(catalog, lookup, settings.country_mode);
        debug!(
            "Dashboard ready: {} of {} records classified",
            classified.len(),
            catalog.len()
        );
        Self {
            catalog,
            classified,
            settings,
        }
    }

    /// Classify and report in one step.
    pub fn build(
        catalog: &'a Catalog,
        lookup: &ContinentLookup,
        settings: PipelineSettings,
        selection: &Selection,
    ) -> DashboardReport {
        Self::new(catalog, lookup, settings).report(selection)
    }

    pub fn classified(&self) -> &[ClassifiedRecord<'a>] {
        &self.classified
    }

    /// Show-type split of titles from the selected continents.
    pub fn types(&self, selection: &Selection) -> Vec<TypeCount> {
        pipeline::type_distribution(
            geo::within(&self.classified, &selection.continents).map(|entry| entry.record),
        )
    }

    /// Titles added per year for the selected continents.
    pub fn trend(&self, selection: &Selection) -> Vec<YearCount> {
        pipeline::yearly_trend(
            geo::within(&self.classified, &selection.continents).map(|entry| entry.record),
        )
    }

    /// Category breakdown over the whole catalog.
    pub fn categories(&self, selection: &Selection) -> Vec<CategoryCount> {
        pipeline::category_breakdown(self.catalog, &selection.categories, self.settings.top_n)
    }

    /// Top directors over the whole catalog for the chosen show types.
    pub fn directors(&self, selection: &Selection) -> Vec<DirectorCount> {
        pipeline::top_directors(self.catalog, selection.show.kinds(), self.settings.top_n)
    }

    /// Country counts for the map continent, or every classified record
    /// when no map continent is chosen.
    pub fn countries(&self, selection: &Selection) -> Vec<CountryCount> {
        let continents: Vec<Continent> = selection.map_continent.into_iter().collect();
        pipeline::classified_country_distribution(geo::within(&self.classified, &continents))
    }

    /// Country counts over the raw catalog, unclassifiable values included.
    pub fn all_countries(&self) -> Vec<CountryCount> {
        pipeline::country_distribution(self.catalog)
    }

    pub fn continents(&self) -> Vec<ContinentCount> {
        pipeline::continent_distribution(&self.classified)
    }

    pub fn durations(&self, selection: &Selection) -> Vec<DurationCount> {
        pipeline::duration_distribution(self.catalog, selection.show.kinds())
    }

    pub fn ratings(&self, selection: &Selection) -> Vec<RatingCount> {
        pipeline::rating_distribution(self.catalog, selection.show.kinds())
    }

    /// Run every pipeline for one interaction.
    pub fn report(&self, selection: &Selection) -> DashboardReport {
        DashboardReport {
            selection: selection.clone(),
            types: self.types(selection),
            trend: self.trend(selection),
            categories: self.categories(selection),
            directors: self.directors(selection),
            countries: self.countries(selection),
            continents: self.continents(),
            durations: self.durations(selection),
            ratings: self.ratings(selection),
        }
    }

    pub fn options(&self) -> DashboardOptions {
        let categories: BTreeSet<&str> = self
            .catalog
            .iter()
            .flat_map(|record| record.categories())
            .collect();

        DashboardOptions {
            continents: geo::continents_present(&self.classified),
            categories: categories.into_iter().map(str::to_string).collect(),
            show: vec![ShowChoice::Both, ShowChoice::Movie, ShowChoice::TvShow],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogRecord;
    use chrono::NaiveDate;

    fn catalog() -> Catalog {
        let added = NaiveDate::from_ymd_opt(2020, 1, 15).unwrap();
        Catalog::new(vec![
            CatalogRecord::new("s1", "One", ShowType::Movie)
                .with_country("India")
                .with_categories("Dramas, International Movies")
                .with_director("Anurag Kashyap")
                .with_date_added(added)
                .with_rating("TV-MA")
                .with_duration("120 min"),
            CatalogRecord::new("s2", "Two", ShowType::TvShow)
                .with_country("United Kingdom")
                .with_categories("British TV Shows")
                .with_director("Not Given")
                .with_date_added(added)
                .with_rating("TV-14")
                .with_duration("1 Season"),
            CatalogRecord::new("s3", "Three", ShowType::Movie)
                .with_country("Atlantis")
                .with_categories("Dramas")
                .with_director("Anurag Kashyap")
                .with_rating("TV-MA")
                .with_duration("120 min"),
            CatalogRecord::new("s4", "Four", ShowType::Movie)
                .with_country("India, United Kingdom")
                .with_categories("Comedies")
                .with_date_added(added),
        ])
        .unwrap()
    }

    #[test]
    fn test_show_choice_kinds() {
        assert_eq!(ShowChoice::Both.kinds(), &[ShowType::Movie, ShowType::TvShow]);
        assert_eq!(ShowChoice::TvShow.kinds(), &[ShowType::TvShow]);
        assert_eq!("TV Show".parse::<ShowChoice>().unwrap(), ShowChoice::TvShow);
        assert_eq!("tv-show".parse::<ShowChoice>().unwrap(), ShowChoice::TvShow);
        assert!("cartoons".parse::<ShowChoice>().is_err());
    }

    #[test]
    fn test_report_with_empty_selection() {
        let catalog = catalog();
        let dashboard = Dashboard::new(
            &catalog,
            &ContinentLookup::canonical(),
            PipelineSettings::default(),
        );
        let report = dashboard.report(&Selection::new());
        assert_eq!(
            Dashboard::build(
                &catalog,
                &ContinentLookup::canonical(),
                PipelineSettings::default(),
                &Selection::new(),
            ),
            report
        );

        // Only s1 and s2 classify in verbatim mode.
        assert_eq!(dashboard.classified().len(), 2);
        assert_eq!(pipeline::total(&report.types), 2);
        assert_eq!(pipeline::total(&report.trend), 2);
        assert_eq!(pipeline::total(&report.countries), 2);

        // Whole-catalog pipelines see every record.
        assert_eq!(pipeline::total(&report.categories), 5);
        assert_eq!(
            report.directors,
            vec![DirectorCount {
                kind: ShowType::Movie,
                director: "Anurag Kashyap".into(),
                count: 2
            }]
        );
        assert_eq!(pipeline::total(&report.durations), 3);
        assert_eq!(pipeline::total(&report.ratings), 3);
    }

    #[test]
    fn test_continent_selection_filters_type_and_trend() {
        let catalog = catalog();
        let dashboard = Dashboard::new(
            &catalog,
            &ContinentLookup::canonical(),
            PipelineSettings::default(),
        );
        let selection = Selection::new().with_continents([Continent::Europe]);

        assert_eq!(
            dashboard.types(&selection),
            vec![TypeCount {
                kind: ShowType::TvShow,
                count: 1
            }]
        );
        assert_eq!(dashboard.trend(&selection).len(), 1);
        // Categories ignore the continent selection.
        assert_eq!(pipeline::total(&dashboard.categories(&selection)), 5);
    }

    #[test]
    fn test_map_continent_and_unclassified_countries() {
        let catalog = catalog();
        let dashboard = Dashboard::new(
            &catalog,
            &ContinentLookup::canonical(),
            PipelineSettings::default(),
        );

        let asia = Selection::new().with_map_continent(Some(Continent::Asia));
        assert_eq!(
            dashboard.countries(&asia),
            vec![CountryCount {
                country: "India".into(),
                count: 1
            }]
        );

        let all = dashboard.all_countries();
        assert!(all.iter().any(|row| row.country == "Atlantis"));
        assert_eq!(pipeline::total(&all), 4);
    }

    #[test]
    fn test_first_country_mode_classifies_multi_country_titles() {
        let catalog = catalog();
        let settings = PipelineSettings {
            country_mode: CountryMode::FirstCountry,
            ..PipelineSettings::default()
        };
        let dashboard = Dashboard::new(&catalog, &ContinentLookup::canonical(), settings);

        assert_eq!(dashboard.classified().len(), 3);
        let asia = Selection::new().with_map_continent(Some(Continent::Asia));
        assert_eq!(dashboard.countries(&asia)[0].count, 2);
    }

    #[test]
    fn test_category_selection_and_show_choice() {
        let catalog = catalog();
        let dashboard = Dashboard::new(
            &catalog,
            &ContinentLookup::canonical(),
            PipelineSettings::default(),
        );
        let selection = Selection::new()
            .with_categories(["Dramas"])
            .with_show(ShowChoice::TvShow);

        let categories = dashboard.categories(&selection);
        assert_eq!(categories.len(), 1);
        assert_eq!(categories[0].count, 2);

        assert!(dashboard.directors(&selection).is_empty());
        assert_eq!(dashboard.durations(&selection)[0].duration, "1 Season");
    }

    #[test]
    fn test_options() {
        let catalog = catalog();
        let dashboard = Dashboard::new(
            &catalog,
            &ContinentLookup::canonical(),
            PipelineSettings::default(),
        );
        let options = dashboard.options();

        assert_eq!(options.continents, vec![Continent::Asia, Continent::Europe]);
        assert_eq!(
            options.categories,
            vec!["British TV Shows", "Comedies", "Dramas", "International Movies"]
        );
        assert_eq!(options.show.len(), 3);
    }

    #[test]
    fn test_empty_catalog_report_is_empty() {
        let catalog = Catalog::default();
        let dashboard = Dashboard::new(
            &catalog,
            &ContinentLookup::canonical(),
            PipelineSettings::default(),
        );
        let report = dashboard.report(&Selection::new());
        assert!(report.types.is_empty());
        assert!(report.trend.is_empty());
        assert!(report.categories.is_empty());
        assert!(report.directors.is_empty());
        assert!(report.countries.is_empty());
        assert!(report.continents.is_empty());
        assert!(report.durations.is_empty());
        assert!(report.ratings.is_empty());
    }
}
