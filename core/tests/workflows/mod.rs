// SPDX-FileCopyrightText: 2025-2026 Todolist Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! End-to-end workflow tests for the todolist-core crate.
//!
//! These tests walk through multi-step usage the way a host application drives the store,
//! from configuration to disconnect.

mod config_driven;
mod list_lifecycle;
