use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};

use super::{DashboardConfig, CONFIG_FILE_NAME};
use crate::error::{common, ErrorCode, ErrorExt, Result};

/// Get the per-user configuration directory for catalog-dash
pub fn user_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "catalog-dash").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Locates and reads the configuration file, then layers the environment on
/// top of it.
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config_file: Option<PathBuf>,
    working_dir: PathBuf,
    user_dir: Option<PathBuf>,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self {
            config_file: None,
            working_dir: std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
            user_dir: user_config_dir(),
        }
    }

    /// Use this file instead of searching. It must exist.
    pub fn with_config_file(mut self, path: Option<PathBuf>) -> Self {
        self.config_file = path;
        self
    }

    pub fn with_working_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = dir.into();
        self
    }

    pub fn with_user_dir(mut self, dir: Option<PathBuf>) -> Self {
        self.user_dir = dir;
        self
    }

    /// Resolve which configuration file applies, if any.
    pub fn locate(&self) -> Result<Option<PathBuf>> {
        if let Some(path) = &self.config_file {
            if !path.exists() {
                return Err(common::config_not_found(path));
            }
            return Ok(Some(path.clone()));
        }

        let local = self.working_dir.join(CONFIG_FILE_NAME);
        if local.exists() {
            return Ok(Some(local));
        }

        Ok(self
            .user_dir
            .as_ref()
            .map(|dir| dir.join("config.toml"))
            .filter(|path| path.exists()))
    }

    pub fn load(&self) -> Result<DashboardConfig> {
        self.load_with_env(|key| std::env::var(key).ok())
    }

    /// Load defaults, then the located file, then the given environment.
    pub fn load_with_env<F>(&self, env: F) -> Result<DashboardConfig>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match self.locate()? {
            Some(path) => load_file(&path)?,
            None => DashboardConfig::default(),
        };
        config.merge_env_with(env)?;
        Ok(config)
    }
}

fn load_file(path: &Path) -> Result<DashboardConfig> {
    let content = fs::read_to_string(path)
        .to_config_error(format!("Failed to read {}", path.display()))?;
    DashboardConfig::from_toml(&content).map_err(|err| {
        if err.code() == ErrorCode::CONFIG_PARSE_ERROR {
            err.with_context(path.display())
        } else {
            err
        }
    })
}
