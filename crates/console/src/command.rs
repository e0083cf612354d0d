use std::str::FromStr;
use thiserror::Error;

/// A command token typed at the `Command:` prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// List the movies of one category.
    Category,
    /// List the movies released in one year.
    Year,
    Add,
    Delete,
    Exit,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown command '{0}'")]
pub struct UnknownCommand(pub String);

impl FromStr for Command {
    type Err = UnknownCommand;

    /// Matching ignores case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "cat" => Ok(Command::Category),
            "year" => Ok(Command::Year),
            "add" => Ok(Command::Add),
            "del" => Ok(Command::Delete),
            "exit" => Ok(Command::Exit),
            _ => Err(UnknownCommand(s.trim().to_string())),
        }
    }
}
