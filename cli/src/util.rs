// SPDX-FileCopyrightText: 2025-2026 Todolist Contributors
//
// SPDX-License-Identifier: Apache-2.0

use clap::{Arg, ArgMatches, arg, value_parser};

pub fn arg_list_id() -> Arg {
    arg!(list: <LIST> "The id of the list").value_parser(value_parser!(i64))
}

pub fn get_list_id(matches: &ArgMatches) -> i64 {
    *matches.get_one::<i64>("list").expect("list is required")
}

pub fn arg_name(help: &'static str) -> Arg {
    arg!(name: <NAME>).help(help)
}

pub fn get_name(matches: &ArgMatches) -> String {
    matches
        .get_one::<String>("name")
        .expect("name is required")
        .clone()
}

/// The output format for commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ArgOutputFormat {
    Json,
    Table,
}

impl ArgOutputFormat {
    pub fn arg() -> Arg {
        arg!(--"output-format" <FORMAT> "Output format")
            .value_parser(value_parser!(ArgOutputFormat))
            .default_value("table")
    }

    pub fn from(matches: &ArgMatches) -> Self {
        matches
            .get_one("output-format")
            .copied()
            .unwrap_or(ArgOutputFormat::Table)
    }
}

/// Checks a list or todo name before it reaches the store.
pub fn validate_name(name: &str) -> Result<&str, String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        Err("Name must not be empty".to_string())
    } else {
        Ok(trimmed)
    }
}
