// SPDX-FileCopyrightText: 2025-2026 Todolist Contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;
use std::sync::{Arc, Mutex};

/// A value bound to a positional parameter of a statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SqlValue {
    Int(i64),
    Text(String),
    Bool(bool),
}

impl From<i64> for SqlValue {
    fn from(value: i64) -> Self {
        SqlValue::Int(value)
    }
}

impl From<bool> for SqlValue {
    fn from(value: bool) -> Self {
        SqlValue::Bool(value)
    }
}

impl From<&str> for SqlValue {
    fn from(value: &str) -> Self {
        SqlValue::Text(value.to_string())
    }
}

impl From<String> for SqlValue {
    fn from(value: String) -> Self {
        SqlValue::Text(value)
    }
}

impl fmt::Display for SqlValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SqlValue::Int(v) => write!(f, "{v}"),
            SqlValue::Text(v) => write!(f, "{v:?}"),
            SqlValue::Bool(v) => write!(f, "{v}"),
        }
    }
}

/// Receives every statement the store is about to execute.
///
/// Records are diagnostic only; nothing replays them.
pub trait QueryLogger: Send + Sync {
    fn log_query(&self, statement: &str, params: &[SqlValue]);
}

/// Emits each statement as a `tracing` debug event.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingQueryLogger;

impl QueryLogger for TracingQueryLogger {
    fn log_query(&self, statement: &str, params: &[SqlValue]) {
        tracing::debug!(
            statement = %collapse_whitespace(statement),
            params = %render_params(params),
            "executing query"
        );
    }
}

/// Keeps every logged statement in memory, in execution order.
#[derive(Debug, Clone, Default)]
pub struct MemoryQueryLogger {
    entries: Arc<Mutex<Vec<(String, Vec<SqlValue>)>>>,
}

impl MemoryQueryLogger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the logged `(statement, params)` pairs.
    pub fn entries(&self) -> Vec<(String, Vec<SqlValue>)> {
        match self.entries.lock() {
            Ok(entries) => entries.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Logged statements with whitespace collapsed, handy for assertions.
    pub fn statements(&self) -> Vec<String> {
        self.entries()
            .into_iter()
            .map(|(statement, _)| collapse_whitespace(&statement))
            .collect()
    }

    pub fn clear(&self) {
        match self.entries.lock() {
            Ok(mut entries) => entries.clear(),
            Err(poisoned) => poisoned.into_inner().clear(),
        }
    }
}

impl QueryLogger for MemoryQueryLogger {
    fn log_query(&self, statement: &str, params: &[SqlValue]) {
        let entry = (statement.to_string(), params.to_vec());
        match self.entries.lock() {
            Ok(mut entries) => entries.push(entry),
            Err(poisoned) => poisoned.into_inner().push(entry),
        }
    }
}

fn collapse_whitespace(statement: &str) -> String {
    statement.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn render_params(params: &[SqlValue]) -> String {
    let params = params.iter().map(ToString::to_string).collect::<Vec<_>>();
    format!("[{}]", params.join(", "))
}
