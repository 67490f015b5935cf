// SPDX-FileCopyrightText: 2025-2026 Todolist Contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, path::PathBuf, str::FromStr};

use tokio::fs;

use todolist_core::{APP_NAME, Config as CoreConfig, Deployment};

const TODOLIST_CONFIG_ENV: &str = "TODOLIST_CONFIG";
const TODOLIST_ENV: &str = "TODOLIST_ENV";

/// Resolves the configuration file and the deployment mode.
///
/// The path comes from `--config`, then `TODOLIST_CONFIG`, then the default location under the
/// user config directory. A missing default file is not an error, the defaults apply.
#[tracing::instrument]
pub async fn parse_config(
    path: Option<PathBuf>,
) -> Result<(CoreConfig, Deployment), Box<dyn Error>> {
    let path = if let Some(path) = path {
        Some(path)
    } else if let Ok(env_path) = std::env::var(TODOLIST_CONFIG_ENV) {
        Some(PathBuf::from(env_path))
    } else {
        let config = get_config_dir()?.join(format!("{APP_NAME}/config.toml"));
        if config.exists() {
            Some(config)
        } else {
            tracing::debug!(path = %config.display(), "no config file, using defaults");
            None
        }
    };

    let mut core = match path {
        Some(path) => {
            fs::read_to_string(&path)
                .await
                .map_err(|e| format!("Failed to read config file at {}: {}", path.display(), e))?
                .parse::<ConfigRaw>()?
                .core
        }
        None => CoreConfig::default(),
    };
    core.normalize()?;

    Ok((core, get_deployment()))
}

#[derive(Debug, serde::Deserialize)]
struct ConfigRaw {
    #[serde(default)]
    core: CoreConfig,
}

impl FromStr for ConfigRaw {
    type Err = Box<dyn Error>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(toml::from_str(s)?)
    }
}

fn get_config_dir() -> Result<PathBuf, Box<dyn Error>> {
    #[cfg(unix)]
    let config_dir = xdg::BaseDirectories::new().get_config_home();
    #[cfg(windows)]
    let config_dir = dirs::config_dir();
    config_dir.ok_or_else(|| "User-specific home directory not found".into())
}

fn get_deployment() -> Deployment {
    match std::env::var(TODOLIST_ENV) {
        Ok(val) => match val.parse() {
            Ok(deployment) => deployment,
            Err(_) => {
                tracing::warn!(
                    "Unrecognized value for {}: '{}'. Expected one of: production, prod, development, dev. Treating as development.",
                    TODOLIST_ENV,
                    val,
                );
                Deployment::default()
            }
        },
        Err(_) => Deployment::default(),
    }
}
