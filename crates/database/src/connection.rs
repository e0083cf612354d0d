use crate::error::DbError;
use configuration::DatabaseSettings;
use core_types::Category;
use sqlx::Connection;
use sqlx::sqlite::{SqliteConnectOptions, SqliteConnection};
use std::time::Duration;

const SCHEMA: &str = include_str!("../sql/schema.sql");

/// The categories a freshly initialised catalog starts with.
pub const STOCK_CATEGORIES: [(i64, &str); 3] = [(1, "Animation"), (2, "Comedy"), (3, "History")];

/// Owns the single SQLite connection used for the lifetime of the process.
///
/// The connection is opened lazily by [`Database::connect`], which is
/// idempotent. [`Database::close`] releases it and is a no-op when nothing is
/// open.
pub struct Database {
    options: SqliteConnectOptions,
    conn: Option<SqliteConnection>,
}

impl Database {
    /// Builds an unconnected handle for the configured database file.
    pub fn new(settings: &DatabaseSettings) -> Self {
        let options = SqliteConnectOptions::new()
            .filename(&settings.path)
            .create_if_missing(settings.create_if_missing)
            .foreign_keys(true)
            .busy_timeout(Duration::from_secs(5));
        Self::with_options(options)
    }

    pub fn with_options(options: SqliteConnectOptions) -> Self {
        Self {
            options,
            conn: None,
        }
    }

    pub fn is_connected(&self) -> bool {
        self.conn.is_some()
    }

    /// Returns the open connection, opening it first if needed.
    pub async fn connect(&mut self) -> Result<&mut SqliteConnection, DbError> {
        let conn = match self.conn.take() {
            Some(conn) => conn,
            None => {
                let conn = SqliteConnection::connect_with(&self.options)
                    .await
                    .map_err(DbError::Connection)?;
                tracing::info!(
                    path = %self.options.get_filename().display(),
                    "Opened database connection."
                );
                conn
            }
        };
        Ok(self.conn.insert(conn))
    }

    pub async fn close(&mut self) -> Result<(), DbError> {
        if let Some(conn) = self.conn.take() {
            conn.close().await.map_err(DbError::Connection)?;
            tracing::info!("Closed database connection.");
        }
        Ok(())
    }
}

/// Creates the `Category` and `Movie` tables if they do not exist yet.
///
/// The application itself assumes the schema is already there; this is only
/// used to bootstrap an empty file (`--init`) and by tests.
pub async fn ensure_schema(db: &mut Database) -> Result<(), DbError> {
    let conn = db.connect().await?;
    sqlx::raw_sql(SCHEMA)
        .execute(&mut *conn)
        .await
        .map_err(DbError::Schema)?;
    Ok(())
}

/// Inserts the given categories, leaving any existing row with the same id untouched.
pub async fn seed_categories(db: &mut Database, categories: &[Category]) -> Result<(), DbError> {
    let conn = db.connect().await?;
    for category in categories {
        sqlx::query("INSERT OR IGNORE INTO Category (categoryID, name) VALUES (?, ?)")
            .bind(category.id)
            .bind(&category.name)
            .execute(&mut *conn)
            .await
            .map_err(DbError::Schema)?;
    }
    tracing::debug!(count = categories.len(), "Seeded categories.");
    Ok(())
}

/// [`STOCK_CATEGORIES`] as domain values.
pub fn stock_categories() -> Vec<Category> {
    STOCK_CATEGORIES
        .iter()
        .map(|(id, name)| Category::new(*id, *name))
        .collect()
}
