// SPDX-FileCopyrightText: 2025-2026 Todolist Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Persistence layer for named lists and the todos they contain.
//!
//! [`ListStore`] owns a single SQL connection and translates list and todo
//! operations into parameterized statements, logging each one through an
//! injected [`QueryLogger`] before it runs.

mod config;
mod logger;
mod record;
mod source;
mod store;

pub use crate::config::{APP_NAME, Config, DATABASE_URL_ENV, Deployment};
pub use crate::logger::{MemoryQueryLogger, QueryLogger, SqlValue, TracingQueryLogger};
pub use crate::record::{List, ListView, Todo};
pub use crate::source::ConnectionSource;
pub use crate::store::ListStore;
