// SPDX-FileCopyrightText: 2025-2026 Todolist Contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;
use std::path::PathBuf;
use std::str::FromStr;

use sqlx::ConnectOptions;
use sqlx::sqlite::SqliteConnectOptions;

/// Where the store connects to. Chosen once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConnectionSource {
    /// A full connection string, e.g. `sqlite:///srv/todos.db`.
    ///
    /// The database must already exist unless the string asks for creation with `?mode=rwc`.
    Url(String),

    /// A fixed local database `<dir>/<name>.db`, created when missing.
    /// Without a directory the file lands in the working directory.
    Local { dir: Option<PathBuf>, name: String },

    /// A private in-memory database, gone once the connection closes.
    InMemory,
}

impl ConnectionSource {
    pub(crate) async fn connect_options(&self) -> Result<SqliteConnectOptions, Box<dyn Error>> {
        let options = match self {
            ConnectionSource::Url(url) => {
                tracing::info!("connecting to database from connection string");
                SqliteConnectOptions::from_str(url)
                    .map_err(|e| format!("Invalid connection string: {e}"))?
            }
            ConnectionSource::Local { dir, name } => {
                let filename = match dir {
                    Some(dir) => {
                        tokio::fs::create_dir_all(dir).await.map_err(|e| {
                            format!("Failed to create directory {}: {e}", dir.display())
                        })?;
                        dir.join(format!("{name}.db"))
                    }
                    None => PathBuf::from(format!("{name}.db")),
                };
                tracing::info!(path = %filename.display(), "connecting to local SQLite database");
                SqliteConnectOptions::new()
                    .filename(filename)
                    .create_if_missing(true)
            }
            ConnectionSource::InMemory => {
                tracing::info!("connecting to in-memory SQLite database");
                SqliteConnectOptions::new().in_memory(true)
            }
        };

        // statements are logged by the store itself
        Ok(options.disable_statement_logging())
    }
}
