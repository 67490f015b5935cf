// SPDX-FileCopyrightText: 2025-2026 Todolist Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Aggregate counts reported by the summary reads.

use todolist_core::ListView;

use crate::common::{seed_list, setup_store};

#[tokio::test]
async fn counts_match_todos_for_every_mix() {
    // Arrange
    let mut ctx = setup_store().await;
    let mut expected = Vec::new();
    for total in 0..=4 {
        for completed in 0..=total {
            let name = format!("list {total}/{completed}");
            let (list, _) = seed_list(&mut ctx.store, &name, total, completed).await;
            expected.push((list.id, total as i64, (total - completed) as i64));
        }
    }

    // Act & Assert
    for (id, total, remaining) in &expected {
        let list = ctx.store.find_list(*id).await.unwrap().unwrap();
        assert_eq!(
            list.view,
            ListView::Summary {
                todos_count: *total,
                todos_remaining_count: *remaining,
            },
            "counts for list {id}"
        );
    }

    let all = ctx.store.all_lists().await.unwrap();
    assert_eq!(all.len(), expected.len());
    for list in &all {
        let (_, total, remaining) = expected
            .iter()
            .find(|(id, _, _)| *id == list.id)
            .expect("every list should be returned");
        assert_eq!(list.todos_count(), *total);
        assert_eq!(list.todos_remaining_count(), *remaining);
    }
}

#[tokio::test]
async fn empty_list_reports_zero_in_both_reads() {
    // Arrange
    let mut ctx = setup_store().await;
    let (list, _) = seed_list(&mut ctx.store, "Empty", 0, 0).await;

    // Act
    let found = ctx.store.find_list(list.id).await.unwrap().unwrap();
    let all = ctx.store.all_lists().await.unwrap();

    // Assert
    assert_eq!(found.todos_count(), 0);
    assert_eq!(found.todos_remaining_count(), 0);
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].todos_count(), 0);
    assert_eq!(all[0].todos_remaining_count(), 0);
}

#[tokio::test]
async fn summary_and_full_views_agree() {
    // Arrange
    let mut ctx = setup_store().await;
    let (list, todos) = seed_list(&mut ctx.store, "Mixed", 5, 2).await;

    // Act
    let summary = ctx.store.find_list(list.id).await.unwrap().unwrap();
    let full = ctx.store.find_list_with_todos(list.id).await.unwrap().unwrap();

    // Assert
    assert_eq!(summary.todos_count(), full.todos_count());
    assert_eq!(summary.todos_remaining_count(), full.todos_remaining_count());
    assert_eq!(full.todos(), Some(todos.as_slice()));
}

#[tokio::test]
async fn lists_with_same_name_are_kept_apart() {
    // Arrange
    let mut ctx = setup_store().await;
    let (first, _) = seed_list(&mut ctx.store, "Twin", 2, 0).await;
    let (second, _) = seed_list(&mut ctx.store, "Twin", 1, 1).await;

    // Act
    let all = ctx.store.all_lists().await.unwrap();

    // Assert
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].id, first.id);
    assert_eq!(all[0].todos_remaining_count(), 2);
    assert_eq!(all[1].id, second.id);
    assert_eq!(all[1].todos_remaining_count(), 0);
}
