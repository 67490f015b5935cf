// SPDX-FileCopyrightText: 2025-2026 Todolist Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! End-to-end list lifecycle workflow tests.

use todolist_core::{ListView, Todo};

use crate::common::setup_store;

#[tokio::test]
async fn groceries_walkthrough() {
    // Arrange
    let mut ctx = setup_store().await;
    let list = ctx.store.create_list("Groceries").await.unwrap();
    let milk = ctx.store.create_todo(list.id, "Milk").await.unwrap();
    let eggs = ctx.store.create_todo(list.id, "Eggs").await.unwrap();

    // Act
    ctx.store
        .update_todo_status(list.id, milk.id, true)
        .await
        .unwrap();
    let found = ctx.store.find_list(list.id).await.unwrap().unwrap();

    // Assert
    assert_eq!(found.name, "Groceries");
    assert_eq!(
        found.view,
        ListView::Summary {
            todos_count: 2,
            todos_remaining_count: 1,
        }
    );

    let full = ctx.store.find_list_with_todos(list.id).await.unwrap().unwrap();
    assert_eq!(
        full.todos(),
        Some(
            &[
                Todo {
                    completed: true,
                    ..milk
                },
                eggs
            ][..]
        )
    );

    ctx.store.disconnect().await.unwrap();
}

#[tokio::test]
async fn deleting_one_list_spares_the_other() {
    // Arrange
    let mut ctx = setup_store().await;
    let a = ctx.store.create_list("A").await.unwrap();
    let b = ctx.store.create_list("B").await.unwrap();
    ctx.store.create_todo(a.id, "from A").await.unwrap();
    let b_todo = ctx.store.create_todo(b.id, "from B").await.unwrap();

    // Act
    ctx.store.delete_list(a.id).await.unwrap();

    // Assert
    assert!(ctx.store.find_list(a.id).await.unwrap().is_none());
    assert_eq!(
        ctx.store.find_todo(b.id, b_todo.id).await.unwrap(),
        Some(b_todo)
    );
    assert_eq!(
        ctx.store.find_list(b.id).await.unwrap().unwrap().todos_count(),
        1
    );
}

#[tokio::test]
async fn finish_everything_then_reopen_one() {
    // Arrange
    let mut ctx = setup_store().await;
    let list = ctx.store.create_list("Chores").await.unwrap();
    let dishes = ctx.store.create_todo(list.id, "Dishes").await.unwrap();
    ctx.store.create_todo(list.id, "Laundry").await.unwrap();

    // Act
    ctx.store.mark_all_todos_completed(list.id).await.unwrap();
    let finished = ctx.store.find_list(list.id).await.unwrap().unwrap();
    ctx.store
        .update_todo_status(list.id, dishes.id, false)
        .await
        .unwrap();
    let reopened = ctx.store.find_list(list.id).await.unwrap().unwrap();

    // Assert
    assert!(finished.is_done());
    assert!(!reopened.is_done());
    assert_eq!(reopened.todos_remaining_count(), 1);
}

#[tokio::test]
async fn removing_todos_one_by_one_empties_the_list() {
    // Arrange
    let mut ctx = setup_store().await;
    let list = ctx.store.create_list("Short").await.unwrap();
    let first = ctx.store.create_todo(list.id, "first").await.unwrap();
    let second = ctx.store.create_todo(list.id, "second").await.unwrap();

    // Act
    ctx.store.delete_todo(list.id, first.id).await.unwrap();
    ctx.store.delete_todo(list.id, second.id).await.unwrap();

    // Assert
    let found = ctx.store.find_list(list.id).await.unwrap().unwrap();
    assert_eq!(found.todos_count(), 0);
    assert!(!found.is_done());
}
