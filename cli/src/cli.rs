// SPDX-FileCopyrightText: 2025-2026 Todolist Contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, ffi::OsString, path::PathBuf, sync::Arc};

use clap::{ArgMatches, Command, ValueHint, arg, builder::styling, crate_version, value_parser};
use colored::Colorize;
use futures::{FutureExt, future::BoxFuture};
use todolist_core::{ListStore, TracingQueryLogger};
use tracing_subscriber::EnvFilter;

use crate::cmd_generate_completion::CmdGenerateCompletion;
use crate::cmd_list::{CmdListAll, CmdListDelete, CmdListNew, CmdListRename, CmdListShow};
use crate::cmd_todo::{CmdTodoAdd, CmdTodoDone, CmdTodoDoneAll, CmdTodoRemove, CmdTodoUndo};
use crate::config::parse_config;

const BIN_NAME: &str = "todos";

/// Run the todolist command-line interface.
pub async fn run() -> Result<(), Box<dyn Error>> {
    init_tracing()?;
    match Cli::parse() {
        Ok(cli) => {
            if let Err(e) = cli.run().await {
                println!("{} {}", "Error:".red(), e);
            }
        }
        Err(e) => println!("{} {}", "Error:".red(), e),
    };
    Ok(())
}

/// Logs go to stderr, filtered by `RUST_LOG` (default `warn`).
fn init_tracing() -> Result<(), Box<dyn Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .compact()
        .try_init()
        .map_err(|e| e as Box<dyn Error>)
}

/// Command-line interface
#[derive(Debug)]
pub struct Cli {
    /// Path to the configuration file
    pub config: Option<PathBuf>,

    /// The command to execute
    pub command: Commands,
}

impl Cli {
    /// Create the command-line interface
    pub fn command() -> Command {
        const STYLES: styling::Styles = styling::Styles::styled()
            .header(styling::AnsiColor::Green.on_default().bold())
            .usage(styling::AnsiColor::Green.on_default().bold())
            .literal(styling::AnsiColor::Blue.on_default().bold())
            .placeholder(styling::AnsiColor::Cyan.on_default());

        Command::new(BIN_NAME)
            .about("Keep named lists of todos in a SQL database.")
            .version(crate_version!())
            .styles(STYLES)
            .subcommand_required(false) // default to listing all lists
            .arg_required_else_help(false)
            .arg(
                arg!(-c --config [CONFIG] "Path to the configuration file")
                    .long_help(
                        "\
Path to the configuration file. Defaults to $XDG_CONFIG_HOME/todolist/config.toml on Linux and \
MacOS, %LOCALAPPDATA%/todolist/config.toml on Windows. TODOLIST_CONFIG is used when the flag is \
absent.",
                    )
                    .value_parser(value_parser!(PathBuf))
                    .value_hint(ValueHint::FilePath),
            )
            .subcommand(CmdListAll::command())
            .subcommand(CmdListShow::command())
            .subcommand(CmdListNew::command())
            .subcommand(CmdListRename::command())
            .subcommand(CmdListDelete::command())
            .subcommand(
                Command::new("todo")
                    .alias("t")
                    .about("Manage the todos of a list")
                    .arg_required_else_help(true)
                    .subcommand_required(true)
                    .subcommand(CmdTodoAdd::command())
                    .subcommand(CmdTodoDone::command())
                    .subcommand(CmdTodoUndo::command())
                    .subcommand(CmdTodoRemove::command())
                    .subcommand(CmdTodoDoneAll::command()),
            )
            .subcommand(CmdGenerateCompletion::command())
    }

    /// Parse the command-line arguments
    pub fn parse() -> Result<Self, Box<dyn Error>> {
        let commands = Self::command();
        let matches = commands.get_matches();
        Self::from(matches)
    }

    /// Parse the specified arguments
    pub fn try_parse_from<I, T>(args: I) -> Result<Self, Box<dyn Error>>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let commands = Self::command();
        let matches = commands.try_get_matches_from(args)?;
        Self::from(matches)
    }

    /// Create a CLI instance from the `ArgMatches`
    pub fn from(matches: ArgMatches) -> Result<Self, Box<dyn Error>> {
        use Commands::*;
        let command = match matches.subcommand() {
            Some((CmdListAll::NAME, matches)) => ListAll(CmdListAll::from(matches)),
            Some((CmdListShow::NAME, matches)) => ListShow(CmdListShow::from(matches)),
            Some((CmdListNew::NAME, matches)) => ListNew(CmdListNew::from(matches)),
            Some((CmdListRename::NAME, matches)) => ListRename(CmdListRename::from(matches)),
            Some((CmdListDelete::NAME, matches)) => ListDelete(CmdListDelete::from(matches)),
            Some(("todo", matches)) => match matches.subcommand() {
                Some((CmdTodoAdd::NAME, matches)) => TodoAdd(CmdTodoAdd::from(matches)),
                Some((CmdTodoDone::NAME, matches)) => TodoDone(CmdTodoDone::from(matches)),
                Some((CmdTodoUndo::NAME, matches)) => TodoUndo(CmdTodoUndo::from(matches)),
                Some((CmdTodoRemove::NAME, matches)) => TodoRemove(CmdTodoRemove::from(matches)),
                Some((CmdTodoDoneAll::NAME, matches)) => {
                    TodoDoneAll(CmdTodoDoneAll::from(matches))
                }
                _ => unreachable!(),
            },
            Some((CmdGenerateCompletion::NAME, matches)) => {
                GenerateCompletion(CmdGenerateCompletion::from(matches))
            }
            None => ListAll(CmdListAll::new()),
            _ => unreachable!(),
        };

        let config = matches.get_one("config").cloned();
        Ok(Cli { config, command })
    }

    /// Run the command
    pub async fn run(self) -> Result<(), Box<dyn Error>> {
        self.command.run(self.config).await
    }
}

/// The commands available in the CLI
#[derive(Debug, Clone)]
pub enum Commands {
    /// Show all lists
    ListAll(CmdListAll),

    /// Show a list with its todos
    ListShow(CmdListShow),

    /// Create a list
    ListNew(CmdListNew),

    /// Rename a list
    ListRename(CmdListRename),

    /// Delete a list and its todos
    ListDelete(CmdListDelete),

    /// Add a todo to a list
    TodoAdd(CmdTodoAdd),

    /// Mark todos as done
    TodoDone(CmdTodoDone),

    /// Mark todos as undone
    TodoUndo(CmdTodoUndo),

    /// Remove a todo
    TodoRemove(CmdTodoRemove),

    /// Mark every todo of a list as done
    TodoDoneAll(CmdTodoDoneAll),

    /// Generate shell completion
    GenerateCompletion(CmdGenerateCompletion),
}

impl Commands {
    /// Run the command with the given configuration
    #[rustfmt::skip]
    pub async fn run(self, config: Option<PathBuf>) -> Result<(), Box<dyn Error>> {
        use Commands::*;
        match self {
            ListAll(a)     => Self::run_with(config, |x| a.run(x).boxed()).await,
            ListShow(a)    => Self::run_with(config, |x| a.run(x).boxed()).await,
            ListNew(a)     => Self::run_with(config, |x| a.run(x).boxed()).await,
            ListRename(a)  => Self::run_with(config, |x| a.run(x).boxed()).await,
            ListDelete(a)  => Self::run_with(config, |x| a.run(x).boxed()).await,
            TodoAdd(a)     => Self::run_with(config, |x| a.run(x).boxed()).await,
            TodoDone(a)    => Self::run_with(config, |x| a.run(x).boxed()).await,
            TodoUndo(a)    => Self::run_with(config, |x| a.run(x).boxed()).await,
            TodoRemove(a)  => Self::run_with(config, |x| a.run(x).boxed()).await,
            TodoDoneAll(a) => Self::run_with(config, |x| a.run(x).boxed()).await,
            GenerateCompletion(a) => a.run(),
        }
    }

    /// Opens the store selected by the configuration, runs `f` and disconnects, whatever `f`
    /// returned.
    async fn run_with<F>(config: Option<PathBuf>, f: F) -> Result<(), Box<dyn Error>>
    where
        F: for<'a> FnOnce(&'a mut ListStore) -> BoxFuture<'a, Result<(), Box<dyn Error>>>,
    {
        tracing::debug!("parsing configuration...");
        let (core_config, deployment) = parse_config(config).await?;
        let source = core_config.connection_source(deployment)?;
        tracing::debug!(?deployment, ?source, "opening store...");
        let mut store = ListStore::open(&source, Arc::new(TracingQueryLogger)).await?;

        let result = f(&mut store).await;

        match (result, store.disconnect().await) {
            (Err(e), Err(close_err)) => {
                tracing::warn!(err = %close_err, "failed to close database connection");
                Err(e)
            }
            (Err(e), Ok(())) => Err(e),
            (Ok(()), Err(close_err)) => Err(close_err.into()),
            (Ok(()), Ok(())) => Ok(()),
        }
    }
}
