// SPDX-FileCopyrightText: 2025-2026 Todolist Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Statements reaching the injected query logger.

use todolist_core::SqlValue;

use crate::common::{seed_list, setup_store};

#[tokio::test]
async fn every_statement_is_logged_with_its_params() {
    // Arrange
    let mut ctx = setup_store().await;
    ctx.logger.clear();

    // Act
    let list = ctx.store.create_list("Groceries").await.unwrap();
    let todo = ctx.store.create_todo(list.id, "Milk").await.unwrap();
    ctx.store
        .update_todo_status(list.id, todo.id, true)
        .await
        .unwrap();

    // Assert
    let entries = ctx.logger.entries();
    assert_eq!(entries.len(), 3);
    assert_eq!(entries[0].1, vec![SqlValue::Text("Groceries".to_string())]);
    assert_eq!(
        entries[1].1,
        vec![SqlValue::Text("Milk".to_string()), SqlValue::Int(list.id)]
    );
    assert_eq!(
        entries[2].1,
        vec![
            SqlValue::Bool(true),
            SqlValue::Int(todo.id),
            SqlValue::Int(list.id)
        ]
    );
}

#[tokio::test]
async fn caller_values_never_reach_statement_text() {
    // Arrange
    let mut ctx = setup_store().await;
    let hostile = "'; DELETE FROM lists; --";
    ctx.logger.clear();

    // Act
    let list = ctx.store.create_list(hostile).await.unwrap();
    ctx.store.update_list_name(list.id, hostile).await.unwrap();

    // Assert
    assert!(
        ctx.logger
            .statements()
            .iter()
            .all(|statement| !statement.contains(hostile))
    );
    let found = ctx.store.find_list(list.id).await.unwrap().unwrap();
    assert_eq!(found.name, hostile);
}

#[tokio::test]
async fn naive_read_issues_one_statement_per_list() {
    // Arrange
    let mut ctx = setup_store().await;
    seed_list(&mut ctx.store, "A", 1, 0).await;
    seed_list(&mut ctx.store, "B", 2, 1).await;
    seed_list(&mut ctx.store, "C", 0, 0).await;
    ctx.logger.clear();

    // Act
    let full = ctx.store.all_lists_with_todos().await.unwrap();
    let full_statements = ctx.logger.entries().len();
    ctx.logger.clear();
    let summary = ctx.store.all_lists().await.unwrap();
    let summary_statements = ctx.logger.entries().len();

    // Assert
    assert_eq!(full.len(), 3);
    assert_eq!(summary.len(), 3);
    assert_eq!(full_statements, 1 + 3);
    assert_eq!(summary_statements, 1);
}
