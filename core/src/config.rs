// SPDX-FileCopyrightText: 2025-2026 Todolist Contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::source::ConnectionSource;

/// The name of the application.
pub const APP_NAME: &str = "todolist";

/// Environment variable holding the connection string in production.
pub const DATABASE_URL_ENV: &str = "DATABASE_URL";

const DEFAULT_DATABASE_NAME: &str = "todos";

/// Configuration for the persistence layer.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct Config {
    /// Directory holding the local database in development.
    #[serde(default)]
    pub state_dir: Option<PathBuf>,

    /// Name of the local database, without extension.
    #[serde(default = "default_database_name")]
    pub database_name: String,

    /// Connection string used in production, overrides `DATABASE_URL`.
    #[serde(default)]
    pub database_url: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            state_dir: None,
            database_name: default_database_name(),
            database_url: None,
        }
    }
}

impl Config {
    /// Normalize the configuration.
    pub fn normalize(&mut self) -> Result<(), Box<dyn Error>> {
        match &self.state_dir {
            Some(a) => {
                self.state_dir = Some(
                    expand_path(a)
                        .map_err(|e| format!("Failed to expand state directory path: {e}"))?,
                )
            }

            None => match get_state_dir() {
                Ok(a) => self.state_dir = Some(a.join(APP_NAME)),
                Err(e) => tracing::warn!(err = %e, "failed to get state directory"),
            },
        };

        if self.database_name.trim().is_empty() {
            return Err("Database name must not be empty".into());
        }

        Ok(())
    }

    /// Chooses where to connect for the given deployment.
    ///
    /// Production requires a connection string, either from the configuration or from the
    /// `DATABASE_URL` environment variable. Development uses the fixed local database.
    pub fn connection_source(
        &self,
        deployment: Deployment,
    ) -> Result<ConnectionSource, Box<dyn Error>> {
        match deployment {
            Deployment::Production => {
                let url = match &self.database_url {
                    Some(url) => url.clone(),
                    None => std::env::var(DATABASE_URL_ENV).map_err(|_| {
                        format!("{DATABASE_URL_ENV} must be set when running in production")
                    })?,
                };
                Ok(ConnectionSource::Url(url))
            }
            Deployment::Development => Ok(ConnectionSource::Local {
                dir: self.state_dir.clone(),
                name: self.database_name.clone(),
            }),
        }
    }
}

fn default_database_name() -> String {
    DEFAULT_DATABASE_NAME.to_string()
}

/// Deployment mode, detected once by the host at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Deployment {
    Production,
    #[default]
    Development,
}

impl FromStr for Deployment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "production" | "prod" => Ok(Deployment::Production),
            "development" | "dev" => Ok(Deployment::Development),
            _ => Err(format!("Unknown deployment: {s}")),
        }
    }
}

/// Handle tilde (~) and environment variables in the path
fn expand_path(path: &Path) -> Result<PathBuf, Box<dyn Error>> {
    if path.is_absolute() {
        return Ok(path.to_owned());
    }

    let path = path.to_str().ok_or("Invalid path")?;

    // Handle tilde and home directory
    let home_prefixes: &[&str] = if cfg!(unix) {
        &["~/", "$HOME/", "${HOME}/"]
    } else {
        &[r"~\", "~/", r"%UserProfile%\", r"%UserProfile%/"]
    };
    for prefix in home_prefixes {
        if let Some(stripped) = path.strip_prefix(prefix) {
            return Ok(get_home_dir()?.join(stripped));
        }
    }

    // Handle config directories
    let config_prefixes: &[&str] = if cfg!(unix) {
        &["$XDG_CONFIG_HOME/", "${XDG_CONFIG_HOME}/"]
    } else {
        &[r"%LOCALAPPDATA%\", "%LOCALAPPDATA%/"]
    };
    for prefix in config_prefixes {
        if let Some(stripped) = path.strip_prefix(prefix) {
            return Ok(get_config_dir()?.join(stripped));
        }
    }

    Ok(path.into())
}

fn get_home_dir() -> Result<PathBuf, Box<dyn Error>> {
    dirs::home_dir().ok_or_else(|| "User-specific home directory not found".into())
}

fn get_config_dir() -> Result<PathBuf, Box<dyn Error>> {
    #[cfg(unix)]
    let config_dir = xdg::BaseDirectories::new().get_config_home();
    #[cfg(windows)]
    let config_dir = dirs::config_dir();
    config_dir.ok_or_else(|| "User-specific config directory not found".into())
}

fn get_state_dir() -> Result<PathBuf, Box<dyn Error>> {
    #[cfg(unix)]
    let state_dir = xdg::BaseDirectories::new().get_state_home();
    #[cfg(windows)]
    let state_dir = dirs::data_dir();
    state_dir.ok_or_else(|| "User-specific state directory not found".into())
}
