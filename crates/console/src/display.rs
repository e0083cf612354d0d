use core_types::{Category, Movie};
use std::fmt::Display;

pub const BANNER: &str = "The Movie List program";

pub const MENU: &str = "\
COMMAND MENU
cat  - View movies by category
year - View movies by year
add  - Add a movie
del  - Delete a movie
exit - Exit program
";

const SEPARATOR_WIDTH: usize = 63;

/// Renders the startup listing of categories, one `id. name` line each.
pub fn render_categories(categories: &[Category]) -> String {
    let mut out = String::from("CATEGORIES\n");
    for category in categories {
        out.push_str(&format!("{}. {}\n", category.id, category.name));
    }
    out
}

/// Renders a movie listing: title, fixed-width header, separator, then one
/// row per movie in the order given.
pub fn render_movies(title: impl Display, movies: &[Movie]) -> String {
    let mut out = format!("MOVIES - {title}\n");
    out.push_str(&format!(
        "{:<4}{:<38}{:<6}{:<6}{:<10}\n",
        "ID", "Name", "Year", "Mins", "Category"
    ));
    out.push_str(&"-".repeat(SEPARATOR_WIDTH));
    out.push('\n');
    for movie in movies {
        let id = movie.id.map(|id| id.to_string()).unwrap_or_default();
        out.push_str(&format!(
            "{:<4}{:<38}{:<6}{:<6}{:<10}\n",
            id, movie.name, movie.year, movie.minutes, movie.category.name
        ));
    }
    out
}
