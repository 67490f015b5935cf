// SPDX-FileCopyrightText: 2025-2026 Todolist Contributors
//
// SPDX-License-Identifier: Apache-2.0

use sqlx::{Connection, FromRow, Row};

use super::todos::select_todos;
use super::{ListStore, affected, run_query};
use crate::record::{List, ListView};

impl ListStore {
    /// Finds one list with its todo counts, or `None` when no list has this id.
    pub async fn find_list(&mut self, id: i64) -> Result<Option<List>, sqlx::Error> {
        // LEFT OUTER JOIN keeps lists without todos; NULLIF drops completed todos from the
        // second count, and COUNT skips the NULLs the join produces. The CASE reads `completed`
        // the way `Todo` decoding does, so a text 't' counts as done in both read modes.
        const SQL: &str = "\
SELECT lists.id, lists.name,
       COUNT(todos.id) AS todos_count,
       COUNT(NULLIF(CASE typeof(todos.completed)
           WHEN 'integer' THEN todos.completed <> 0
           WHEN 'real' THEN todos.completed <> 0
           WHEN 'text' THEN lower(trim(todos.completed)) IN ('t', 'true', '1')
       END, true)) AS todos_remaining_count
FROM lists
LEFT OUTER JOIN todos ON todos.list_id = lists.id
WHERE lists.id = ?
GROUP BY lists.id, lists.name;
";

        let rows = self.query(SQL, &[id.into()]).await?;
        rows.first().map(List::from_row).transpose()
    }

    /// All lists with their todo counts, ordered by name ignoring ASCII case.
    pub async fn all_lists(&mut self) -> Result<Vec<List>, sqlx::Error> {
        const SQL: &str = "\
SELECT lists.id, lists.name,
       COUNT(todos.id) AS todos_count,
       COUNT(NULLIF(CASE typeof(todos.completed)
           WHEN 'integer' THEN todos.completed <> 0
           WHEN 'real' THEN todos.completed <> 0
           WHEN 'text' THEN lower(trim(todos.completed)) IN ('t', 'true', '1')
       END, true)) AS todos_remaining_count
FROM lists
LEFT OUTER JOIN todos ON todos.list_id = lists.id
GROUP BY lists.id, lists.name
ORDER BY lists.name COLLATE NOCASE ASC, lists.id ASC;
";

        let rows = self.query(SQL, &[]).await?;
        rows.iter().map(List::from_row).collect()
    }

    /// Finds one list together with all of its todos.
    ///
    /// Issues one statement for the list and one for its todos, in a single transaction.
    pub async fn find_list_with_todos(&mut self, id: i64) -> Result<Option<List>, sqlx::Error> {
        const SQL: &str = "SELECT id, name FROM lists WHERE id = ?;";

        let logger = self.logger.as_ref();
        let mut tx = self.conn.begin().await?;

        let rows = run_query(&mut tx, logger, SQL, &[id.into()]).await?;
        let Some(row) = rows.first() else {
            return Ok(None);
        };

        let id: i64 = row.try_get("id")?;
        let name: String = row.try_get("name")?;
        let todos = select_todos(&mut tx, logger, id).await?;
        tx.commit().await?;

        Ok(Some(List {
            id,
            name,
            view: ListView::Full { todos },
        }))
    }

    /// All lists together with their todos, in the same order as [`ListStore::all_lists`].
    ///
    /// Fetches the todos of each list separately; prefer [`ListStore::all_lists`] when only
    /// the counts are needed.
    pub async fn all_lists_with_todos(&mut self) -> Result<Vec<List>, sqlx::Error> {
        const SQL: &str = "SELECT id, name FROM lists ORDER BY name COLLATE NOCASE ASC, id ASC;";

        let logger = self.logger.as_ref();
        let mut tx = self.conn.begin().await?;

        let rows = run_query(&mut tx, logger, SQL, &[]).await?;
        let mut lists = Vec::with_capacity(rows.len());
        for row in &rows {
            let id: i64 = row.try_get("id")?;
            let name: String = row.try_get("name")?;
            let todos = select_todos(&mut tx, logger, id).await?;
            lists.push(List {
                id,
                name,
                view: ListView::Full { todos },
            });
        }
        tx.commit().await?;

        Ok(lists)
    }

    /// Creates a list and returns it with its assigned id.
    pub async fn create_list(&mut self, name: &str) -> Result<List, sqlx::Error> {
        const SQL: &str = "INSERT INTO lists (name) VALUES (?) RETURNING id, name;";

        let rows = self.query(SQL, &[name.into()]).await?;
        let row = rows.first().ok_or(sqlx::Error::RowNotFound)?;
        Ok(List {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            view: ListView::Full { todos: Vec::new() },
        })
    }

    /// Deletes a list and every todo that references it, returning the number of lists removed.
    ///
    /// Both deletes run in one transaction. The todo delete runs even when no list matched,
    /// so stray todos of a missing list are cleared too.
    pub async fn delete_list(&mut self, id: i64) -> Result<u64, sqlx::Error> {
        const DELETE_LIST_SQL: &str = "DELETE FROM lists WHERE id = ? RETURNING id;";
        const DELETE_TODOS_SQL: &str = "DELETE FROM todos WHERE list_id = ? RETURNING id;";

        let logger = self.logger.as_ref();
        let mut tx = self.conn.begin().await?;

        let lists = run_query(&mut tx, logger, DELETE_LIST_SQL, &[id.into()]).await?;
        let todos = run_query(&mut tx, logger, DELETE_TODOS_SQL, &[id.into()]).await?;
        tx.commit().await?;

        tracing::debug!(
            list_id = id,
            lists = lists.len(),
            todos = todos.len(),
            "deleted list"
        );
        Ok(affected(&lists))
    }

    /// Renames a list, returning the number of lists changed.
    pub async fn update_list_name(&mut self, id: i64, name: &str) -> Result<u64, sqlx::Error> {
        const SQL: &str = "UPDATE lists SET name = ? WHERE id = ? RETURNING id;";

        let rows = self.query(SQL, &[name.into(), id.into()]).await?;
        Ok(affected(&rows))
    }
}
