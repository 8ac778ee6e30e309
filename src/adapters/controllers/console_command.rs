//! Console command parsing
//!
//! Turns one line of console input into a shell event, or into one of
//! the commands the console shell handles itself.

use std::fmt;
use std::path::PathBuf;

use crate::adapters::controllers::interaction_controller::ShellEvent;

/// Help text for the console shell
pub const HELP: &str = "\
commands:
  import <path>...   add shortcut files (quote paths with spaces)
  select <index>     show the icon of a row
  rename <name>      rename the selected shortcut
  launch             open the selected shortcut
  remove <index>     remove a row
  list               print all rows
  help               show this text
  quit               exit";

/// A parsed console line
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConsoleCommand {
    Event(ShellEvent),
    List,
    Help,
    Quit,
}

/// Why a console line was rejected
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CommandError {
    Empty,
    UnknownCommand(String),
    MissingArgument(&'static str),
    InvalidIndex(String),
    UnterminatedQuote,
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::Empty => write!(f, "empty command"),
            CommandError::UnknownCommand(c) => write!(f, "unknown command: {} (try help)", c),
            CommandError::MissingArgument(what) => write!(f, "missing {}", what),
            CommandError::InvalidIndex(s) => write!(f, "not an index: {}", s),
            CommandError::UnterminatedQuote => write!(f, "unterminated quote"),
        }
    }
}

impl std::error::Error for CommandError {}

impl ConsoleCommand {
    /// Parse one line of input
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let line = line.trim();
        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };

        match verb.to_ascii_lowercase().as_str() {
            "" => Err(CommandError::Empty),
            "import" | "add" => {
                let paths = split_args(rest)?;
                if paths.is_empty() {
                    return Err(CommandError::MissingArgument("path"));
                }
                Ok(Self::Event(ShellEvent::Import(
                    paths.into_iter().map(PathBuf::from).collect(),
                )))
            }
            "select" | "show" => Ok(Self::Event(ShellEvent::Select(parse_index(rest)?))),
            // The rest of the line is the name, spaces included
            "rename" => Ok(Self::Event(ShellEvent::Rename(rest.to_string()))),
            "launch" | "open" => Ok(Self::Event(ShellEvent::Launch)),
            "remove" | "rm" => Ok(Self::Event(ShellEvent::Remove(parse_index(rest)?))),
            "list" | "ls" => Ok(Self::List),
            "help" | "?" => Ok(Self::Help),
            "quit" | "exit" | "q" => Ok(Self::Quit),
            other => Err(CommandError::UnknownCommand(other.to_string())),
        }
    }
}

fn parse_index(arg: &str) -> Result<usize, CommandError> {
    if arg.is_empty() {
        return Err(CommandError::MissingArgument("index"));
    }
    arg.parse()
        .map_err(|_| CommandError::InvalidIndex(arg.to_string()))
}

/// Split on whitespace, keeping double-quoted runs together
fn split_args(input: &str) -> Result<Vec<String>, CommandError> {
    let mut args = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut has_arg = false;

    for c in input.chars() {
        match c {
            '"' => {
                in_quotes = !in_quotes;
                has_arg = true;
            }
            c if c.is_whitespace() && !in_quotes => {
                if has_arg {
                    args.push(std::mem::take(&mut current));
                    has_arg = false;
                }
            }
            c => {
                current.push(c);
                has_arg = true;
            }
        }
    }

    if in_quotes {
        return Err(CommandError::UnterminatedQuote);
    }
    if has_arg {
        args.push(current);
    }

    Ok(args)
}
