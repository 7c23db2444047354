//! Common test utilities and helpers

#![allow(dead_code)]

use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const HEADER: &str =
    "show_id,type,title,director,country,date_added,release_year,rating,duration,listed_in";

/// A handful of titles spread across continents, with one unclassifiable
/// country, one multi-country value and one uncredited director.
pub const SAMPLE_ROWS: &[&str] = &[
    r#"s1,Movie,Dick Johnson Is Dead,Kirsten Johnson,United States,9/25/2021,2020,PG-13,90 min,Documentaries"#,
    r#"s2,TV Show,Blood & Water,Not Given,South Africa,9/24/2021,2021,TV-MA,2 Seasons,"International TV Shows, TV Dramas, TV Mysteries""#,
    r#"s3,TV Show,Ganglands,Julien Leclercq,France,9/24/2021,2021,TV-MA,1 Season,"Crime TV Shows, International TV Shows, TV Action & Adventure""#,
    r#"s4,Movie,Sankofa,Haile Gerima,"United States, Ghana, Burkina Faso, United Kingdom, Germany, Ethiopia",9/24/2021,1993,TV-MA,125 min,"Dramas, Independent Movies, International Movies""#,
    r#"s5,Movie,The Starling,Theodore Melfi,United States,9/24/2021,2021,PG-13,104 min,"Comedies, Dramas""#,
    r#"s6,Movie,Jeans,S. Shankar,India,9/21/2021,1998,TV-14,166 min,"Comedies, International Movies, Romantic Movies""#,
    r#"s7,Movie,Grown Ups,Dennis Dugan,United States,9/20/2021,2010,PG-13,103 min,Comedies"#,
    r#"s8,TV Show,Kota Factory,Not Given,India,9/24/2021,2021,TV-MA,2 Seasons,"International TV Shows, Romantic TV Shows, TV Comedies""#,
    r#"s9,Movie,Atlantis Rising,Dennis Dugan,Atlantis,1/1/2019,2019,PG,95 min,Comedies"#,
    r#"s10,Movie,Undated,Not Given,Japan,,2018,TV-PG,88 min,Anime Features"#,
];

/// Builds a catalog CSV (and optionally a config file) in a temp directory
pub struct CatalogFixture {
    temp_dir: TempDir,
    rows: Vec<String>,
    header: String,
    config: Option<String>,
}

impl CatalogFixture {
    pub fn new() -> Result<Self> {
        Ok(Self {
            temp_dir: TempDir::new()?,
            rows: Vec::new(),
            header: HEADER.to_string(),
            config: None,
        })
    }

    /// Start from the shared sample rows
    pub fn sample() -> Result<Self> {
        Ok(Self::new()?.with_rows(SAMPLE_ROWS))
    }

    pub fn with_header(mut self, header: &str) -> Self {
        self.header = header.to_string();
        self
    }

    pub fn with_rows(mut self, rows: &[&str]) -> Self {
        self.rows.extend(rows.iter().map(|row| row.to_string()));
        self
    }

    /// Write a `catalog-dash.toml` next to the catalog
    pub fn with_config(mut self, content: &str) -> Self {
        self.config = Some(content.to_string());
        self
    }

    pub fn build(self) -> Result<BuiltFixture> {
        let catalog_path = self.temp_dir.path().join("netflix1.csv");
        let mut content = self.header.clone();
        content.push('\n');
        for row in &self.rows {
            content.push_str(row);
            content.push('\n');
        }
        fs::write(&catalog_path, content)?;

        let config_path = match &self.config {
            Some(config) => {
                let path = self.temp_dir.path().join("catalog-dash.toml");
                fs::write(&path, config)?;
                Some(path)
            }
            None => None,
        };

        Ok(BuiltFixture {
            temp_dir: self.temp_dir,
            catalog_path,
            config_path,
        })
    }
}

pub struct BuiltFixture {
    temp_dir: TempDir,
    pub catalog_path: PathBuf,
    pub config_path: Option<PathBuf>,
}

impl BuiltFixture {
    pub fn dir(&self) -> &Path {
        self.temp_dir.path()
    }
}
