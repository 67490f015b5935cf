// SPDX-FileCopyrightText: 2025-2026 Todolist Contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::{fmt, marker::PhantomData};

use colored::{Color, Colorize};
use unicode_width::UnicodeWidthStr;

/// A plain text table over rows of `T`, one column per `C`.
pub struct Table<'a, T, C: Column<T>> {
    columns: &'a [C],
    data: &'a [T],
    separator: &'static str,
    padding: bool,
}

impl<'a, T, C: Column<T>> Table<'a, T, C> {
    pub fn new(columns: &'a [C], data: &'a [T]) -> Self {
        Self {
            columns,
            data,
            separator: " ",
            padding: true,
        }
    }

    fn compute_columns(&self, table: &[Vec<String>]) -> Vec<ColumnStylizer<'a, T, C>> {
        let max_lengths = self.padding.then(|| get_column_max_width(table));

        let mut columns = Vec::with_capacity(self.columns.len());
        for (i, col) in self.columns.iter().enumerate() {
            let padding_direction = col.padding_direction();

            let padding = match &max_lengths {
                // last column does not need padding if it's left-aligned
                Some(_)
                    if i == self.columns.len() - 1
                        && padding_direction == PaddingDirection::Left =>
                {
                    None
                }
                Some(m) => Some((m[i], padding_direction)),
                None => None,
            };

            columns.push(ColumnStylizer {
                config: col,
                padding,
                _marker: PhantomData,
            });
        }
        columns
    }
}

impl<T, C: Column<T>> fmt::Display for Table<'_, T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let table: Vec<Vec<String>> = self
            .data
            .iter()
            .map(|row| self.columns.iter().map(|col| col.format(row)).collect())
            .collect();

        let columns = self.compute_columns(&table);
        for (cells, row) in table.into_iter().zip(self.data) {
            for (j, (col, cell)) in columns.iter().zip(cells).enumerate() {
                write!(f, "{}", col.stylize_cell(row, cell))?;

                if j < columns.len() - 1 {
                    write!(f, "{}", self.separator)?;
                } else {
                    writeln!(f)?;
                }
            }
        }
        Ok(())
    }
}

pub trait Column<T> {
    fn format(&self, data: &T) -> String;

    fn padding_direction(&self) -> PaddingDirection {
        PaddingDirection::Left
    }

    fn get_color(&self, _data: &T) -> Option<Color> {
        None
    }
}

struct ColumnStylizer<'a, T, C: Column<T>> {
    config: &'a C,
    /// padding width and direction
    padding: Option<(usize, PaddingDirection)>,
    _marker: PhantomData<T>,
}

impl<T, C: Column<T>> ColumnStylizer<'_, T, C> {
    fn stylize_cell(&self, data: &T, cell: String) -> String {
        // pad by display width, `format!` would count chars
        let cell = match self.padding {
            Some((width, direction)) => {
                let fill = " ".repeat(width.saturating_sub(cell.width()));
                match direction {
                    PaddingDirection::Left => cell + &fill,
                    PaddingDirection::Right => fill + &cell,
                }
            }
            None => cell,
        };

        match self.config.get_color(data) {
            Some(color) => cell.color(color).to_string(),
            None => cell,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaddingDirection {
    Left,
    Right,
}

fn get_column_max_width(table: &[Vec<String>]) -> Vec<usize> {
    let Some(first) = table.first() else {
        return Vec::new();
    };

    let mut max_width = vec![0; first.len()];
    for row in table {
        for (i, cell) in row.iter().enumerate() {
            max_width[i] = max_width[i].max(cell.width());
        }
    }
    max_width
}
