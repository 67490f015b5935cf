// SPDX-FileCopyrightText: 2025-2026 Todolist Contributors
//
// SPDX-License-Identifier: Apache-2.0

mod lists;
mod todos;


use std::error::Error;
use std::fmt;
use std::sync::Arc;

use sqlx::sqlite::SqliteRow;
use sqlx::{ConnectOptions, Connection, SqliteConnection};

use crate::logger::{QueryLogger, SqlValue, TracingQueryLogger};
use crate::source::ConnectionSource;

/// Persistence for lists and their todos over a single connection.
///
/// Methods take `&mut self`: the connection is never shared, so a host serving concurrent
/// requests either serializes access or opens one store per unit of work.
pub struct ListStore {
    conn: SqliteConnection,
    logger: Arc<dyn QueryLogger>,
}

impl ListStore {
    /// Connects to the database and ensures the schema exists.
    pub async fn open(
        source: &ConnectionSource,
        logger: Arc<dyn QueryLogger>,
    ) -> Result<Self, Box<dyn Error>> {
        let mut conn = source
            .connect_options()
            .await?
            .connect()
            .await
            .map_err(|e| format!("Failed to connect to database: {e}"))?;

        sqlx::migrate!("src/store/migrations") // relative path from the crate root
            .run(&mut conn)
            .await
            .map_err(|e| format!("Failed to run migrations: {e}"))?;

        tracing::debug!("database schema is up to date");
        Ok(Self { conn, logger })
    }

    /// Opens a private in-memory store that logs through `tracing`.
    pub async fn in_memory() -> Result<Self, Box<dyn Error>> {
        Self::open(&ConnectionSource::InMemory, Arc::new(TracingQueryLogger)).await
    }

    /// Closes the connection. Consumes the store, so it can only happen once.
    pub async fn disconnect(self) -> Result<(), sqlx::Error> {
        tracing::debug!("closing database connection");
        self.conn.close().await
    }

    /// Logs and executes a single parameterized statement, returning its rows.
    pub async fn query(
        &mut self,
        sql: &str,
        params: &[SqlValue],
    ) -> Result<Vec<SqliteRow>, sqlx::Error> {
        run_query(&mut self.conn, self.logger.as_ref(), sql, params).await
    }
}

impl fmt::Debug for ListStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListStore")
            .field("conn", &self.conn)
            .finish_non_exhaustive()
    }
}

/// The one place statements reach the database. Parameters are always bound, never spliced
/// into the statement text, and the statement is logged before it runs.
///
/// Takes the connection explicitly so it also runs inside a transaction.
async fn run_query(
    conn: &mut SqliteConnection,
    logger: &dyn QueryLogger,
    sql: &str,
    params: &[SqlValue],
) -> Result<Vec<SqliteRow>, sqlx::Error> {
    logger.log_query(sql, params);

    let mut query = sqlx::query(sql);
    for param in params {
        query = match param {
            SqlValue::Int(v) => query.bind(*v),
            SqlValue::Text(v) => query.bind(v.as_str()),
            SqlValue::Bool(v) => query.bind(*v),
        };
    }
    query.fetch_all(conn).await
}

/// Number of rows a statement with `RETURNING id` touched.
fn affected(rows: &[SqliteRow]) -> u64 {
    rows.len() as u64
}
