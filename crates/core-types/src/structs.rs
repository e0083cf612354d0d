use serde::{Deserialize, Serialize};

/// Primary key of a row in the `Category` table.
pub type CategoryId = i64;

/// Primary key of a row in the `Movie` table.
pub type MovieId = i64;

/// A movie category (e.g., Action, Comedy), mapped from one `Category` row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
}

impl Category {
    pub fn new(id: CategoryId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// A single movie in the catalog.
///
/// The category is embedded as a copy of the `Category` row taken when the
/// movie was read, not as a live link. A movie loaded before a category is
/// renamed keeps the old name until it is loaded again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    /// Assigned by the store on insert. `None` for a movie that has not been saved.
    pub id: Option<MovieId>,
    pub name: String,
    pub year: i64,
    /// Running time in minutes.
    pub minutes: i64,
    pub category: Category,
}

impl Movie {
    /// Builds a movie that is ready to be inserted.
    ///
    /// The category must come from a successful lookup, so the caller has
    /// already proven it exists in the store.
    pub fn new_unsaved(name: impl Into<String>, year: i64, minutes: i64, category: Category) -> Self {
        Self {
            id: None,
            name: name.into(),
            year,
            minutes,
            category,
        }
    }

    pub fn category_id(&self) -> CategoryId {
        self.category.id
    }
}
