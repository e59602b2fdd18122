pub mod commands;

use clap::{Parser, Subcommand, ValueEnum};
use taskdeck_core::FilterValue;

#[derive(ValueEnum, Clone, Debug, Copy, PartialEq, Eq)]
pub enum CliFilter {
    All,
    Active,
    Completed,
}

impl From<CliFilter> for FilterValue {
    fn from(f: CliFilter) -> Self {
        match f {
            CliFilter::All => FilterValue::All,
            CliFilter::Active => FilterValue::Active,
            CliFilter::Completed => FilterValue::Completed,
        }
    }
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Show who the current session belongs to
    Me,
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        #[arg(long)]
        remember_me: bool,
    },
    Logout,
    /// List all todo-lists
    Lists,
    #[command(name = "add-list")]
    AddList { title: String },
    #[command(name = "rm-list")]
    RmList { id: String },
    #[command(name = "rename-list")]
    RenameList { id: String, title: String },
    /// List the tasks of one todo-list
    Tasks {
        list_id: String,
        #[arg(long, value_enum, default_value_t = CliFilter::All)]
        filter: CliFilter,
    },
    #[command(name = "add-task")]
    AddTask { list_id: String, title: String },
    #[command(name = "rm-task")]
    RmTask { list_id: String, task_id: String },
}

/// One line typed into `taskdeck shell`.
#[derive(Parser, Debug)]
#[command(no_binary_name = true, disable_help_flag = true)]
pub struct ShellLine {
    #[command(subcommand)]
    pub command: ShellCommand,
}

#[derive(Subcommand, Debug)]
pub enum ShellCommand {
    #[command(flatten)]
    Op(Command),
    #[command(alias = "quit")]
    Exit,
}

/// Splits a shell line with shell quoting rules and parses it.
pub fn parse_shell_line(line: &str) -> anyhow::Result<Option<ShellCommand>> {
    let words = shlex::split(line).ok_or_else(|| anyhow::anyhow!("unbalanced quotes"))?;
    if words.is_empty() {
        return Ok(None);
    }
    let parsed = ShellLine::try_parse_from(words)?;
    Ok(Some(parsed.command))
}
