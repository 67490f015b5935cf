// SPDX-FileCopyrightText: 2025-2026 Todolist Contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use clap::{ArgMatches, Command};
use colored::Colorize;
use todolist_core::ListStore;

use crate::list_formatter::{ListFormatter, TodoFormatter};
use crate::util::{ArgOutputFormat, arg_list_id, arg_name, get_list_id, get_name, validate_name};

#[derive(Debug, Clone, Copy)]
pub struct CmdListAll {
    pub output_format: ArgOutputFormat,
}

impl CmdListAll {
    pub const NAME: &str = "list";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("ls")
            .about("Show all lists with their progress")
            .arg(ArgOutputFormat::arg())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            output_format: ArgOutputFormat::from(matches),
        }
    }

    pub fn new() -> Self {
        Self {
            output_format: ArgOutputFormat::Table,
        }
    }

    pub async fn run(self, store: &mut ListStore) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "listing all lists...");
        let lists = store.all_lists().await?;
        if lists.is_empty() && self.output_format == ArgOutputFormat::Table {
            println!("No lists yet, create one with `{} <NAME>`", CmdListNew::NAME);
            return Ok(());
        }

        let formatter = ListFormatter::new().with_output_format(self.output_format);
        print!("{}", formatter.format(&lists));
        Ok(())
    }
}

#[derive(Debug, Clone, Copy)]
pub struct CmdListShow {
    pub list_id: i64,
    pub output_format: ArgOutputFormat,
}

impl CmdListShow {
    pub const NAME: &str = "show";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Show a list and its todos")
            .arg(arg_list_id())
            .arg(ArgOutputFormat::arg())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            list_id: get_list_id(matches),
            output_format: ArgOutputFormat::from(matches),
        }
    }

    pub async fn run(self, store: &mut ListStore) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "showing list...");
        let Some(list) = store.find_list_with_todos(self.list_id).await? else {
            return Err(format!("List not found: {}", self.list_id).into());
        };

        match self.output_format {
            ArgOutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(&list)?);
            }
            ArgOutputFormat::Table => {
                let progress = format!(
                    "{}/{}",
                    list.todos_count() - list.todos_remaining_count(),
                    list.todos_count()
                );
                println!("{} {}", list.name.bold(), progress.dimmed());

                let todos = list.todos().unwrap_or_default();
                print!("{}", TodoFormatter::new().format(todos));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct CmdListNew {
    pub name: String,
}

impl CmdListNew {
    pub const NAME: &str = "new";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("add")
            .about("Create a new list")
            .arg(arg_name("The name of the list"))
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            name: get_name(matches),
        }
    }

    pub async fn run(self, store: &mut ListStore) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "creating list...");
        let name = validate_name(&self.name)?;
        let list = store.create_list(name).await?;
        println!("{} list {}: {}", "Created".green(), list.id, list.name);
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct CmdListRename {
    pub list_id: i64,
    pub name: String,
}

impl CmdListRename {
    pub const NAME: &str = "rename";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Rename a list")
            .arg(arg_list_id())
            .arg(arg_name("The new name of the list"))
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            list_id: get_list_id(matches),
            name: get_name(matches),
        }
    }

    pub async fn run(self, store: &mut ListStore) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "renaming list...");
        let name = validate_name(&self.name)?;
        match store.update_list_name(self.list_id, name).await? {
            0 => Err(format!("List not found: {}", self.list_id).into()),
            _ => {
                println!("{} list {} to {}", "Renamed".green(), self.list_id, name);
                Ok(())
            }
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct CmdListDelete {
    pub list_id: i64,
}

impl CmdListDelete {
    pub const NAME: &str = "delete";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("rm")
            .about("Delete a list together with its todos")
            .arg(arg_list_id())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            list_id: get_list_id(matches),
        }
    }

    pub async fn run(self, store: &mut ListStore) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "deleting list...");
        match store.delete_list(self.list_id).await? {
            0 => Err(format!("List not found: {}", self.list_id).into()),
            _ => {
                println!("{} list {}", "Deleted".red(), self.list_id);
                Ok(())
            }
        }
    }
}
