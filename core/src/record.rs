// SPDX-FileCopyrightText: 2025-2026 Todolist Contributors
//
// SPDX-License-Identifier: Apache-2.0

use serde::Serialize;
use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row};

/// A named list of todos.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct List {
    /// Store-assigned identifier.
    pub id: i64,

    /// Display name of the list.
    pub name: String,

    /// What was loaded alongside the list.
    #[serde(flatten)]
    pub view: ListView,
}

/// The shape a [`List`] was retrieved in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ListView {
    /// Aggregate counts computed by the database, no todos materialized.
    Summary {
        todos_count: i64,
        todos_remaining_count: i64,
    },

    /// Every todo of the list, in insertion order.
    Full { todos: Vec<Todo> },
}

impl List {
    /// Total number of todos in the list.
    pub fn todos_count(&self) -> i64 {
        match &self.view {
            ListView::Summary { todos_count, .. } => *todos_count,
            ListView::Full { todos } => todos.len() as i64,
        }
    }

    /// Number of todos not yet completed.
    pub fn todos_remaining_count(&self) -> i64 {
        match &self.view {
            ListView::Summary {
                todos_remaining_count,
                ..
            } => *todos_remaining_count,
            ListView::Full { todos } => todos.iter().filter(|t| !t.completed).count() as i64,
        }
    }

    /// The materialized todos, only available for [`ListView::Full`].
    pub fn todos(&self) -> Option<&[Todo]> {
        match &self.view {
            ListView::Full { todos } => Some(todos),
            ListView::Summary { .. } => None,
        }
    }

    /// A list is done once it has todos and none of them remain.
    pub fn is_done(&self) -> bool {
        self.todos_count() > 0 && self.todos_remaining_count() == 0
    }
}

impl<'r> FromRow<'r, SqliteRow> for List {
    /// Maps a row of the summary query: `id, name, todos_count, todos_remaining_count`.
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            view: ListView::Summary {
                todos_count: row.try_get("todos_count")?,
                todos_remaining_count: row.try_get("todos_remaining_count")?,
            },
        })
    }
}

/// A completable item that belongs to exactly one list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Todo {
    pub id: i64,
    pub name: String,
    pub completed: bool,
    pub list_id: i64,
}

impl<'r> FromRow<'r, SqliteRow> for Todo {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            completed: completed_from_row(row)?,
            list_id: row.try_get("list_id")?,
        })
    }
}

/// SQLite stores booleans as integers, but rows written by other clients may
/// carry a textual marker instead.
fn completed_from_row(row: &SqliteRow) -> Result<bool, sqlx::Error> {
    if let Ok(flag) = row.try_get::<i64, _>("completed") {
        return Ok(flag != 0);
    }

    let raw: String = row.try_get("completed")?;
    Ok(is_truthy(&raw))
}

fn is_truthy(raw: &str) -> bool {
    matches!(raw.trim().to_ascii_lowercase().as_str(), "t" | "true" | "1")
}
