// SPDX-FileCopyrightText: 2025-2026 Todolist Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Command-line host for `todolist-core`.

mod cli;
mod cmd_generate_completion;
mod cmd_list;
mod cmd_todo;
mod config;
mod list_formatter;
mod table;
mod util;

pub use crate::cli::{Cli, Commands, run};
