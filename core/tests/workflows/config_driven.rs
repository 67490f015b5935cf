// SPDX-FileCopyrightText: 2025-2026 Todolist Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Configuration-driven workflow tests.
//!
//! The host parses a configuration, resolves a connection source once and opens the store.

use std::sync::Arc;

use tempfile::TempDir;
use todolist_core::{Config, Deployment, ListStore, MemoryQueryLogger};

#[tokio::test]
async fn development_config_opens_local_database() {
    // Arrange
    let temp = TempDir::new().unwrap();
    let state_dir = temp.path().join("state");
    let mut config: Config = toml::from_str(&format!(
        "state_dir = \"{}\"\ndatabase_name = \"lists\"\n",
        state_dir.to_str().unwrap().replace('\\', "/")
    ))
    .unwrap();
    config.normalize().unwrap();

    // Act
    let source = config.connection_source(Deployment::Development).unwrap();
    let logger = MemoryQueryLogger::new();
    let mut store = ListStore::open(&source, Arc::new(logger.clone()))
        .await
        .unwrap();
    store.create_list("From config").await.unwrap();
    store.disconnect().await.unwrap();

    // Assert
    assert!(state_dir.join("lists.db").exists());
    assert_eq!(logger.entries().len(), 1);
}

#[tokio::test]
async fn production_config_uses_connection_string() {
    // Arrange
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("prod.db");
    let config = Config {
        // a connection string only creates the file when it asks for `mode=rwc`
        database_url: Some(format!("sqlite://{}?mode=rwc", path.display())),
        ..Default::default()
    };

    // Act
    let source = config.connection_source(Deployment::Production).unwrap();
    let mut store = ListStore::open(&source, Arc::new(MemoryQueryLogger::new()))
        .await
        .unwrap();
    let list = store.create_list("Production").await.unwrap();
    let found = store.find_list(list.id).await.unwrap();
    store.disconnect().await.unwrap();

    // Assert
    assert!(path.exists());
    assert_eq!(found.map(|l| l.name), Some("Production".to_string()));
}
