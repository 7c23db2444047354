//! One-time lazy catalog loading
//!
//! The source file is static for the lifetime of a session, so it is read at
//! most once and the resulting relation is shared behind an `Arc`.

use once_cell::sync::OnceCell;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::debug;

use super::{load_catalog, Catalog};
use crate::error::Result;

#[derive(Debug)]
pub struct CatalogStore {
    path: PathBuf,
    catalog: OnceCell<Arc<Catalog>>,
}

impl CatalogStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            catalog: OnceCell::new(),
        }
    }

    /// Wrap an already loaded catalog.
    pub fn preloaded(path: impl Into<PathBuf>, catalog: Catalog) -> Self {
        Self {
            path: path.into(),
            catalog: OnceCell::with_value(Arc::new(catalog)),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_loaded(&self) -> bool {
        self.catalog.get().is_some()
    }

    /// Return the shared catalog, reading the source on first use.
    ///
    /// A failed load leaves the store empty; callers treat it as fatal.
    pub fn get(&self) -> Result<Arc<Catalog>> {
        if let Some(catalog) = self.catalog.get() {
            debug!("Reusing loaded catalog ({} records)", catalog.len());
            return Ok(Arc::clone(catalog));
        }

        self.catalog
            .get_or_try_init(|| load_catalog(&self.path).map(Arc::new))
            .map(Arc::clone)
    }
}
