use crate::DbError;
use crate::connection::Database;
use core_types::{Category, CategoryId, Movie, MovieId};
use sqlx::Row;
use sqlx::sqlite::SqliteRow;

const SELECT_CATEGORIES: &str = r#"
    SELECT categoryID, name AS categoryName
    FROM Category
    ORDER BY categoryID ASC
"#;

const SELECT_CATEGORY_BY_ID: &str = r#"
    SELECT categoryID, name AS categoryName
    FROM Category
    WHERE categoryID = ?
"#;

const SELECT_MOVIES_BY_CATEGORY: &str = r#"
    SELECT Movie.movieID AS movieID, Movie.name AS name, Movie.year AS year,
           Movie.minutes AS minutes, Movie.categoryID AS categoryID,
           Category.name AS categoryName
    FROM Movie
    JOIN Category ON Movie.categoryID = Category.categoryID
    WHERE Movie.categoryID = ?
    ORDER BY Movie.movieID ASC
"#;

const SELECT_MOVIES_BY_YEAR: &str = r#"
    SELECT Movie.movieID AS movieID, Movie.name AS name, Movie.year AS year,
           Movie.minutes AS minutes, Movie.categoryID AS categoryID,
           Category.name AS categoryName
    FROM Movie
    JOIN Category ON Movie.categoryID = Category.categoryID
    WHERE Movie.year = ?
    ORDER BY Movie.movieID ASC
"#;

/// The `MovieRepository` provides a high-level, application-specific interface
/// to the movie catalog. It encapsulates all SQL queries and data access logic,
/// and it owns the process's only database connection.
///
/// Every method opens the connection on first use. Results are ordered by
/// primary key ascending.
pub struct MovieRepository {
    db: Database,
}

impl MovieRepository {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    pub fn is_connected(&self) -> bool {
        self.db.is_connected()
    }

    /// Opens the connection now instead of on the first query. Safe to repeat.
    pub async fn connect(&mut self) -> Result<(), DbError> {
        self.db.connect().await?;
        Ok(())
    }

    /// Releases the connection. Safe to call when it is already closed.
    pub async fn close(&mut self) -> Result<(), DbError> {
        self.db.close().await
    }

    /// Fetches every category.
    pub async fn list_categories(&mut self) -> Result<Vec<Category>, DbError> {
        let conn = self.db.connect().await?;
        let rows = sqlx::query(SELECT_CATEGORIES).fetch_all(&mut *conn).await?;
        tracing::debug!(count = rows.len(), "Listed categories.");
        rows.iter().map(category_from_row).collect()
    }

    /// Looks up one category. `None` means no row has that id.
    pub async fn get_category(&mut self, id: CategoryId) -> Result<Option<Category>, DbError> {
        let conn = self.db.connect().await?;
        let row = sqlx::query(SELECT_CATEGORY_BY_ID)
            .bind(id)
            .fetch_optional(&mut *conn)
            .await?;
        tracing::debug!(category_id = id, found = row.is_some(), "Looked up category.");
        row.as_ref().map(category_from_row).transpose()
    }

    /// Fetches the movies of one category, each carrying that category's name.
    /// An unknown category yields an empty list.
    pub async fn list_movies_by_category(
        &mut self,
        category_id: CategoryId,
    ) -> Result<Vec<Movie>, DbError> {
        let conn = self.db.connect().await?;
        let rows = sqlx::query(SELECT_MOVIES_BY_CATEGORY)
            .bind(category_id)
            .fetch_all(&mut *conn)
            .await?;
        tracing::debug!(category_id, count = rows.len(), "Listed movies by category.");
        rows.iter().map(movie_from_row).collect()
    }

    /// Fetches the movies released in `year`.
    pub async fn list_movies_by_year(&mut self, year: i64) -> Result<Vec<Movie>, DbError> {
        let conn = self.db.connect().await?;
        let rows = sqlx::query(SELECT_MOVIES_BY_YEAR)
            .bind(year)
            .fetch_all(&mut *conn)
            .await?;
        tracing::debug!(year, count = rows.len(), "Listed movies by year.");
        rows.iter().map(movie_from_row).collect()
    }

    /// Inserts a movie. Its `id` is ignored; the store assigns one.
    ///
    /// The statement runs in autocommit mode, so the row is durable once this returns.
    pub async fn add_movie(&mut self, movie: &Movie) -> Result<(), DbError> {
        let conn = self.db.connect().await?;
        let result = sqlx::query(
            "INSERT INTO Movie (categoryID, name, year, minutes) VALUES (?, ?, ?, ?)",
        )
        .bind(movie.category_id())
        .bind(&movie.name)
        .bind(movie.year)
        .bind(movie.minutes)
        .execute(&mut *conn)
        .await?;
        tracing::debug!(
            movie_id = result.last_insert_rowid(),
            name = %movie.name,
            "Added movie."
        );
        Ok(())
    }

    /// Deletes a movie by id. Deleting an id that does not exist is not an error.
    pub async fn delete_movie(&mut self, id: MovieId) -> Result<(), DbError> {
        let conn = self.db.connect().await?;
        let result = sqlx::query("DELETE FROM Movie WHERE movieID = ?")
            .bind(id)
            .execute(&mut *conn)
            .await?;
        tracing::debug!(movie_id = id, rows = result.rows_affected(), "Deleted movie.");
        Ok(())
    }
}

pub(crate) fn category_from_row(row: &SqliteRow) -> Result<Category, DbError> {
    let mapping = |source| DbError::RowMapping {
        entity: "Category",
        source,
    };
    Ok(Category {
        id: row.try_get("categoryID").map_err(mapping)?,
        name: row.try_get("categoryName").map_err(mapping)?,
    })
}

pub(crate) fn movie_from_row(row: &SqliteRow) -> Result<Movie, DbError> {
    let mapping = |source| DbError::RowMapping {
        entity: "Movie",
        source,
    };
    Ok(Movie {
        id: Some(row.try_get("movieID").map_err(mapping)?),
        name: row.try_get("name").map_err(mapping)?,
        year: row.try_get("year").map_err(mapping)?,
        minutes: row.try_get("minutes").map_err(mapping)?,
        category: category_from_row(row)?,
    })
}
