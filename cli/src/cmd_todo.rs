// SPDX-FileCopyrightText: 2025-2026 Todolist Contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use clap::{Arg, ArgMatches, Command, arg, value_parser};
use colored::Colorize;
use todolist_core::ListStore;

use crate::list_formatter::TodoFormatter;
use crate::util::{ArgOutputFormat, arg_list_id, arg_name, get_list_id, get_name, validate_name};

#[derive(Debug, Clone)]
pub struct CmdTodoAdd {
    pub list_id: i64,
    pub name: String,
    pub output_format: ArgOutputFormat,
}

impl CmdTodoAdd {
    pub const NAME: &str = "add";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("new")
            .about("Add a todo to a list")
            .arg(arg_list_id())
            .arg(arg_name("The name of the todo"))
            .arg(ArgOutputFormat::arg())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            list_id: get_list_id(matches),
            name: get_name(matches),
            output_format: ArgOutputFormat::from(matches),
        }
    }

    pub async fn run(self, store: &mut ListStore) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "adding todo...");
        let name = validate_name(&self.name)?;

        // surface a readable error instead of the constraint violation
        if store.find_list(self.list_id).await?.is_none() {
            return Err(format!("List not found: {}", self.list_id).into());
        }

        let todo = store.create_todo(self.list_id, name).await?;
        let formatter = TodoFormatter::new().with_output_format(self.output_format);
        print!("{}", formatter.format(&[todo]));
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct CmdTodoDone {
    pub list_id: i64,
    pub todo_ids: Vec<i64>,
}

impl CmdTodoDone {
    pub const NAME: &str = "done";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Mark todos as completed")
            .arg(arg_list_id())
            .arg(arg_todo_ids())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            list_id: get_list_id(matches),
            todo_ids: get_todo_ids(matches),
        }
    }

    pub async fn run(self, store: &mut ListStore) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "marking todos as done...");
        set_status(store, self.list_id, &self.todo_ids, true).await
    }
}

#[derive(Debug, Clone)]
pub struct CmdTodoUndo {
    pub list_id: i64,
    pub todo_ids: Vec<i64>,
}

impl CmdTodoUndo {
    pub const NAME: &str = "undo";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Mark todos as not completed")
            .arg(arg_list_id())
            .arg(arg_todo_ids())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            list_id: get_list_id(matches),
            todo_ids: get_todo_ids(matches),
        }
    }

    pub async fn run(self, store: &mut ListStore) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "marking todos as undone...");
        set_status(store, self.list_id, &self.todo_ids, false).await
    }
}

#[derive(Debug, Clone, Copy)]
pub struct CmdTodoRemove {
    pub list_id: i64,
    pub todo_id: i64,
}

impl CmdTodoRemove {
    pub const NAME: &str = "remove";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("rm")
            .about("Remove a todo from a list")
            .arg(arg_list_id())
            .arg(arg!(todo: <TODO> "The id of the todo").value_parser(value_parser!(i64)))
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            list_id: get_list_id(matches),
            todo_id: *matches.get_one::<i64>("todo").expect("todo is required"),
        }
    }

    pub async fn run(self, store: &mut ListStore) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "removing todo...");
        match store.delete_todo(self.list_id, self.todo_id).await? {
            0 => Err(todo_not_found(self.list_id, self.todo_id).into()),
            _ => {
                println!("{} todo {}", "Removed".red(), self.todo_id);
                Ok(())
            }
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct CmdTodoDoneAll {
    pub list_id: i64,
}

impl CmdTodoDoneAll {
    pub const NAME: &str = "done-all";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Mark every todo of a list as completed")
            .arg(arg_list_id())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            list_id: get_list_id(matches),
        }
    }

    pub async fn run(self, store: &mut ListStore) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "completing all todos...");
        if store.find_list(self.list_id).await?.is_none() {
            return Err(format!("List not found: {}", self.list_id).into());
        }

        let touched = store.mark_all_todos_completed(self.list_id).await?;
        println!("{} {touched} todo(s)", "Completed".green());
        Ok(())
    }
}

fn arg_todo_ids() -> Arg {
    arg!(todos: <TODO> "The ids of the todos")
        .value_parser(value_parser!(i64))
        .num_args(1..)
}

fn get_todo_ids(matches: &ArgMatches) -> Vec<i64> {
    matches
        .get_many::<i64>("todos")
        .map(|ids| ids.copied().collect())
        .unwrap_or_default()
}

fn todo_not_found(list_id: i64, todo_id: i64) -> String {
    format!("Todo not found: {todo_id} in list {list_id}")
}

async fn set_status(
    store: &mut ListStore,
    list_id: i64,
    todo_ids: &[i64],
    completed: bool,
) -> Result<(), Box<dyn Error>> {
    let mut missing = Vec::new();
    for &todo_id in todo_ids {
        match store.update_todo_status(list_id, todo_id, completed).await? {
            0 => missing.push(todo_id),
            _ => {
                let verb = if completed { "Done".green() } else { "Undone".yellow() };
                println!("{verb} todo {todo_id}");
            }
        }
    }

    match missing.as_slice() {
        [] => Ok(()),
        [todo_id] => Err(todo_not_found(list_id, *todo_id).into()),
        ids => {
            let ids: Vec<_> = ids.iter().map(ToString::to_string).collect();
            Err(format!("Todos not found: {} in list {list_id}", ids.join(", ")).into())
        }
    }
}
