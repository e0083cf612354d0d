use thiserror::Error;

/// Every failure at the storage boundary. Nothing in this crate swallows one.
#[derive(Error, Debug)]
pub enum DbError {
    #[error("Failed to connect to the database: {0}")]
    Connection(#[source] sqlx::Error),

    #[error("Database query failed: {0}")]
    Query(#[from] sqlx::Error),

    #[error("Failed to map a {entity} row: {source}")]
    RowMapping {
        entity: &'static str,
        #[source]
        source: sqlx::Error,
    },

    #[error("Failed to create the database schema: {0}")]
    Schema(#[source] sqlx::Error),
}
