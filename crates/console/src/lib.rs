//! # Movie List Console
//!
//! The interactive front end of the catalog: a loop that reads a command
//! token, prompts for the values the command needs, calls the repository and
//! prints the result as text.
//!
//! ## Public API
//!
//! - `Console`: the read-dispatch-execute loop.
//! - `Command`: the parsed command tokens (`cat`, `year`, `add`, `del`, `exit`).
//! - `ConsoleError`: the specific error types that can be returned from this crate.

pub mod app;
pub mod command;
pub mod display;
pub mod error;

pub use app::Console;
pub use command::{Command, UnknownCommand};
pub use error::ConsoleError;
