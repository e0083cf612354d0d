pub mod error;
pub mod structs;
pub mod validation;

// Re-export the core types to provide a clean public API.
pub use error::CoreError;
pub use structs::{Category, CategoryId, Movie, MovieId};
pub use validation::parse_whole_number;
