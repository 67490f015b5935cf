// SPDX-FileCopyrightText: 2025-2026 Todolist Contributors
//
// SPDX-License-Identifier: Apache-2.0

use sqlx::{FromRow, SqliteConnection};

use super::{ListStore, affected, run_query};
use crate::logger::{QueryLogger, SqlValue};
use crate::record::Todo;

impl ListStore {
    /// All todos of a list, in insertion order.
    pub async fn todos_for_list(&mut self, list_id: i64) -> Result<Vec<Todo>, sqlx::Error> {
        select_todos(&mut self.conn, self.logger.as_ref(), list_id).await
    }

    /// Finds a todo by its id within the given list.
    pub async fn find_todo(
        &mut self,
        list_id: i64,
        todo_id: i64,
    ) -> Result<Option<Todo>, sqlx::Error> {
        const SQL: &str = "\
SELECT id, name, completed, list_id
FROM todos
WHERE id = ? AND list_id = ?;
";

        let rows = self.query(SQL, &[todo_id.into(), list_id.into()]).await?;
        rows.first().map(Todo::from_row).transpose()
    }

    /// Adds an open todo to a list and returns it with its assigned id.
    ///
    /// Fails with a foreign key violation when the list does not exist.
    pub async fn create_todo(&mut self, list_id: i64, name: &str) -> Result<Todo, sqlx::Error> {
        const SQL: &str = "\
INSERT INTO todos (name, list_id) VALUES (?, ?)
RETURNING id, name, completed, list_id;
";

        let rows = self.query(SQL, &[name.into(), list_id.into()]).await?;
        let row = rows.first().ok_or(sqlx::Error::RowNotFound)?;
        Todo::from_row(row)
    }

    /// Deletes a todo of a list, returning the number of todos removed.
    pub async fn delete_todo(&mut self, list_id: i64, todo_id: i64) -> Result<u64, sqlx::Error> {
        // the todo id alone never identifies the row
        const SQL: &str = "DELETE FROM todos WHERE id = ? AND list_id = ? RETURNING id;";

        let rows = self.query(SQL, &[todo_id.into(), list_id.into()]).await?;
        Ok(affected(&rows))
    }

    /// Sets the completion status of a todo of a list, returning the number of todos changed.
    pub async fn update_todo_status(
        &mut self,
        list_id: i64,
        todo_id: i64,
        completed: bool,
    ) -> Result<u64, sqlx::Error> {
        const SQL: &str =
            "UPDATE todos SET completed = ? WHERE id = ? AND list_id = ? RETURNING id;";

        let params: [SqlValue; 3] = [completed.into(), todo_id.into(), list_id.into()];
        let rows = self.query(SQL, &params).await?;
        Ok(affected(&rows))
    }

    /// Completes every todo of a list in one statement, returning the number of todos touched.
    pub async fn mark_all_todos_completed(&mut self, list_id: i64) -> Result<u64, sqlx::Error> {
        const SQL: &str = "UPDATE todos SET completed = true WHERE list_id = ? RETURNING id;";

        let rows = self.query(SQL, &[list_id.into()]).await?;
        Ok(affected(&rows))
    }
}

pub(super) async fn select_todos(
    conn: &mut SqliteConnection,
    logger: &dyn QueryLogger,
    list_id: i64,
) -> Result<Vec<Todo>, sqlx::Error> {
    const SQL: &str = "\
SELECT id, name, completed, list_id
FROM todos
WHERE list_id = ?
ORDER BY id ASC;
";

    let rows = run_query(conn, logger, SQL, &[list_id.into()]).await?;
    rows.iter().map(Todo::from_row).collect()
}
