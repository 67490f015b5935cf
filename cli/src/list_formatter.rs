// SPDX-FileCopyrightText: 2025-2026 Todolist Contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;

use colored::Color;
use serde::Serialize;
use todolist_core::{List, Todo};

use crate::table::{Column, PaddingDirection, Table};
use crate::util::ArgOutputFormat;

#[derive(Debug)]
pub struct ListFormatter {
    columns: Vec<ListColumn>,
    format: ArgOutputFormat,
}

impl ListFormatter {
    pub fn new() -> Self {
        Self {
            columns: vec![ListColumn::Id, ListColumn::Progress, ListColumn::Name],
            format: ArgOutputFormat::Table,
        }
    }

    pub fn with_output_format(mut self, format: ArgOutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn format<'a>(&'a self, lists: &'a [List]) -> Display<'a, List, ListColumn> {
        Display {
            data: lists,
            columns: &self.columns,
            format: self.format,
        }
    }
}

#[derive(Debug)]
pub struct TodoFormatter {
    columns: Vec<TodoColumn>,
    format: ArgOutputFormat,
}

impl TodoFormatter {
    pub fn new() -> Self {
        Self {
            columns: vec![TodoColumn::Status, TodoColumn::Id, TodoColumn::Name],
            format: ArgOutputFormat::Table,
        }
    }

    pub fn with_output_format(mut self, format: ArgOutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn format<'a>(&'a self, todos: &'a [Todo]) -> Display<'a, Todo, TodoColumn> {
        Display {
            data: todos,
            columns: &self.columns,
            format: self.format,
        }
    }
}

#[derive(Debug)]
pub struct Display<'a, T, C> {
    data: &'a [T],
    columns: &'a [C],
    format: ArgOutputFormat,
}

impl<T: Serialize, C: Column<T>> fmt::Display for Display<'_, T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.format {
            ArgOutputFormat::Json => {
                let json = serde_json::to_string_pretty(self.data).map_err(|_| fmt::Error)?;
                writeln!(f, "{json}")
            }
            ArgOutputFormat::Table => write!(f, "{}", Table::new(self.columns, self.data)),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub enum ListColumn {
    Id,
    Name,
    Progress,
}

impl Column<List> for ListColumn {
    fn format(&self, list: &List) -> String {
        match self {
            ListColumn::Id => list.id.to_string(),
            ListColumn::Name => list.name.clone(),
            ListColumn::Progress => format!(
                "{}/{}",
                list.todos_count() - list.todos_remaining_count(),
                list.todos_count()
            ),
        }
    }

    fn padding_direction(&self) -> PaddingDirection {
        match self {
            ListColumn::Id | ListColumn::Progress => PaddingDirection::Right,
            ListColumn::Name => PaddingDirection::Left,
        }
    }

    fn get_color(&self, list: &List) -> Option<Color> {
        match self {
            ListColumn::Name if list.is_done() => Some(Color::Green),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub enum TodoColumn {
    Id,
    Name,
    Status,
}

impl Column<Todo> for TodoColumn {
    fn format(&self, todo: &Todo) -> String {
        match self {
            TodoColumn::Id => todo.id.to_string(),
            TodoColumn::Name => todo.name.clone(),
            TodoColumn::Status => (if todo.completed { "[x]" } else { "[ ]" }).to_string(),
        }
    }

    fn padding_direction(&self) -> PaddingDirection {
        match self {
            TodoColumn::Id => PaddingDirection::Right,
            _ => PaddingDirection::Left,
        }
    }

    fn get_color(&self, todo: &Todo) -> Option<Color> {
        todo.completed.then_some(Color::BrightBlack)
    }
}
