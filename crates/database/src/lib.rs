//! # Movie List Database Crate
//!
//! This crate is the data access layer of the movie catalog. It is the only
//! part of the system that issues SQL.
//!
//! ## Architectural Principles
//!
//! - **Single Owned Connection:** `Database` holds one SQLite connection, opened
//!   lazily and closed explicitly. `MovieRepository` owns the `Database`, so the
//!   connection has exactly one owner and no global state.
//! - **Bound Parameters Only:** every value reaches SQLite through `bind`, never
//!   through string formatting.
//! - **Explicit Row Mapping:** rows are turned into `Category` and `Movie` by
//!   named column access, and a missing or mistyped column is an error.
//!
//! ## Public API
//!
//! - `Database`: the connection handle (`connect`, `close`, `is_connected`).
//! - `ensure_schema` / `seed_categories`: bootstrap helpers for empty files.
//! - `MovieRepository`: all catalog queries and mutations.
//! - `DbError`: the specific error types that can be returned from this crate.

// Declare the modules that constitute this crate.
pub mod connection;
pub mod error;
pub mod repository;

// Re-export the key components to create a clean, public-facing API.
pub use connection::{Database, STOCK_CATEGORIES, ensure_schema, seed_categories, stock_categories};
pub use error::DbError;
pub use repository::MovieRepository;
