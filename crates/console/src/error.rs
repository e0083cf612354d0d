use database::DbError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConsoleError {
    #[error("Database error: {0}")]
    Storage(#[from] DbError),

    #[error("Terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// The input stream ended while a command was waiting for a value.
    #[error("Input closed")]
    InputClosed,
}
