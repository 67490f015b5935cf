// SPDX-FileCopyrightText: 2025-2026 Todolist Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Create, update and delete behavior of lists and todos.

use crate::common::{seed_list, setup_local_store, setup_store};

#[tokio::test]
async fn delete_list_leaves_no_todos_behind() {
    // Arrange
    let mut ctx = setup_store().await;
    let (list, _) = seed_list(&mut ctx.store, "Doomed", 3, 1).await;

    // Act
    ctx.store.delete_list(list.id).await.unwrap();

    // Assert
    assert!(ctx.store.find_list(list.id).await.unwrap().is_none());
    assert!(ctx.store.todos_for_list(list.id).await.unwrap().is_empty());
}

#[tokio::test]
async fn delete_list_keeps_other_lists_todos() {
    // Arrange
    let mut ctx = setup_store().await;
    let (a, _) = seed_list(&mut ctx.store, "A", 1, 0).await;
    let (b, b_todos) = seed_list(&mut ctx.store, "B", 1, 0).await;

    // Act
    ctx.store.delete_list(a.id).await.unwrap();

    // Assert
    assert_eq!(ctx.store.todos_for_list(b.id).await.unwrap(), b_todos);
    let remaining = ctx.store.all_lists().await.unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].name, "B");
}

#[tokio::test]
async fn delete_missing_list_is_not_an_error() {
    let mut ctx = setup_store().await;
    assert_eq!(ctx.store.delete_list(12345).await.unwrap(), 0);
}

#[tokio::test]
async fn created_todo_reads_back_open() {
    // Arrange
    let mut ctx = setup_store().await;
    let (list, _) = seed_list(&mut ctx.store, "Groceries", 0, 0).await;

    // Act
    let created = ctx.store.create_todo(list.id, "x").await.unwrap();
    let todos = ctx.store.todos_for_list(list.id).await.unwrap();

    // Assert
    assert_eq!(todos.len(), 1);
    assert_eq!(todos[0].id, created.id);
    assert_eq!(todos[0].name, "x");
    assert!(!todos[0].completed);
}

#[tokio::test]
async fn mismatched_pairs_affect_nothing() {
    // Arrange
    let mut ctx = setup_store().await;
    let (a, a_todos) = seed_list(&mut ctx.store, "A", 2, 0).await;
    let (b, _) = seed_list(&mut ctx.store, "B", 1, 0).await;
    let foreign = a_todos[0].id;

    // Act
    let updated = ctx.store.update_todo_status(b.id, foreign, true).await.unwrap();
    let deleted = ctx.store.delete_todo(b.id, foreign).await.unwrap();
    let missing = ctx.store.delete_todo(a.id, 999_999).await.unwrap();

    // Assert
    assert_eq!((updated, deleted, missing), (0, 0, 0));
    assert_eq!(ctx.store.todos_for_list(a.id).await.unwrap(), a_todos);
}

#[tokio::test]
async fn mark_all_completed_clears_remaining_count() {
    // Arrange
    let mut ctx = setup_store().await;
    let (list, _) = seed_list(&mut ctx.store, "Mixed", 4, 2).await;
    let (other, _) = seed_list(&mut ctx.store, "Other", 2, 0).await;

    // Act
    ctx.store.mark_all_todos_completed(list.id).await.unwrap();

    // Assert
    let list = ctx.store.find_list(list.id).await.unwrap().unwrap();
    let other = ctx.store.find_list(other.id).await.unwrap().unwrap();
    assert_eq!(list.todos_remaining_count(), 0);
    assert!(list.is_done());
    assert_eq!(other.todos_remaining_count(), 2);
}

#[tokio::test]
async fn renaming_moves_list_in_order() {
    // Arrange
    let mut ctx = setup_store().await;
    let (alpha, _) = seed_list(&mut ctx.store, "Alpha", 0, 0).await;
    seed_list(&mut ctx.store, "Beta", 0, 0).await;

    // Act
    ctx.store.update_list_name(alpha.id, "Gamma").await.unwrap();

    // Assert
    let names: Vec<_> = ctx
        .store
        .all_lists()
        .await
        .unwrap()
        .into_iter()
        .map(|l| l.name)
        .collect();
    assert_eq!(names, vec!["Beta", "Gamma"]);
}

#[tokio::test]
async fn local_store_survives_reconnect() {
    // Arrange
    let mut ctx = setup_local_store().await;
    let (list, _) = seed_list(&mut ctx.store, "Persistent", 2, 1).await;
    let dir = ctx.dir.take().expect("local store should own a directory");
    ctx.store.disconnect().await.unwrap();

    // Act
    let source = todolist_core::ConnectionSource::Local {
        dir: Some(dir.path().to_path_buf()),
        name: "todos".to_string(),
    };
    let mut store = todolist_core::ListStore::open(
        &source,
        std::sync::Arc::new(todolist_core::TracingQueryLogger),
    )
    .await
    .unwrap();

    // Assert
    let found = store.find_list(list.id).await.unwrap().unwrap();
    assert_eq!(found.name, "Persistent");
    assert_eq!(found.todos_remaining_count(), 1);
    store.disconnect().await.unwrap();
}
