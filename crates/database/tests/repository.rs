use configuration::DatabaseSettings;
use core_types::{Category, Movie};
use database::{Database, DbError, MovieRepository, ensure_schema, seed_categories, stock_categories};
use tempfile::TempDir;

fn settings(dir: &TempDir, create_if_missing: bool) -> DatabaseSettings {
    DatabaseSettings {
        path: dir.path().join("movies.sqlite"),
        create_if_missing,
    }
}

async fn catalog(categories: &[Category]) -> (TempDir, MovieRepository) {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut db = Database::new(&settings(&dir, true));
    ensure_schema(&mut db).await.expect("schema");
    seed_categories(&mut db, categories).await.expect("seed");
    (dir, MovieRepository::new(db))
}

#[tokio::test]
async fn connect_is_idempotent_and_close_is_safe_to_repeat() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut db = Database::new(&settings(&dir, true));
    assert!(!db.is_connected());

    db.connect().await.expect("first connect");
    db.connect().await.expect("second connect");
    assert!(db.is_connected());

    db.close().await.expect("first close");
    db.close().await.expect("second close");
    assert!(!db.is_connected());
}

#[tokio::test]
async fn missing_file_is_a_connection_error_unless_creation_is_allowed() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut db = Database::new(&settings(&dir, false));

    let err = db.connect().await.unwrap_err();
    assert!(matches!(err, DbError::Connection(_)));
    assert!(!db.is_connected());
}

#[tokio::test]
async fn repository_connects_lazily_on_first_query() {
    let (_dir, mut repo) = catalog(&stock_categories()).await;
    repo.close().await.expect("close");
    assert!(!repo.is_connected());

    let categories = repo.list_categories().await.expect("list");
    assert!(repo.is_connected());
    assert_eq!(categories.len(), 3);
}

#[tokio::test]
async fn list_categories_is_ordered_by_id() {
    let (_dir, mut repo) = catalog(&[
        Category::new(3, "History"),
        Category::new(1, "Animation"),
        Category::new(2, "Comedy"),
    ])
    .await;

    let ids: Vec<_> = repo
        .list_categories()
        .await
        .expect("list")
        .into_iter()
        .map(|c| c.id)
        .collect();
    assert_eq!(ids, vec![1, 2, 3]);
}

#[tokio::test]
async fn get_category_distinguishes_present_from_absent() {
    let (_dir, mut repo) = catalog(&stock_categories()).await;

    let comedy = repo.get_category(2).await.expect("lookup");
    assert_eq!(comedy, Some(Category::new(2, "Comedy")));

    assert_eq!(repo.get_category(0).await.expect("lookup"), None);
    assert_eq!(repo.get_category(99).await.expect("lookup"), None);
}

#[tokio::test]
async fn added_movie_shows_up_in_its_category_with_a_fresh_id() {
    let (_dir, mut repo) = catalog(&[Category::new(1, "Action")]).await;
    let action = repo.get_category(1).await.expect("lookup").expect("exists");

    repo.add_movie(&Movie::new_unsaved("Speed", 1994, 116, action.clone()))
        .await
        .expect("add first");
    let before: Vec<_> = repo
        .list_movies_by_category(1)
        .await
        .expect("list")
        .into_iter()
        .filter_map(|m| m.id)
        .collect();

    repo.add_movie(&Movie::new_unsaved("Die Hard", 1988, 132, action))
        .await
        .expect("add second");
    let movies = repo.list_movies_by_category(1).await.expect("list");

    let die_hard = movies
        .iter()
        .find(|m| m.name == "Die Hard")
        .expect("inserted movie listed");
    assert_eq!(die_hard.year, 1988);
    assert_eq!(die_hard.minutes, 132);
    assert_eq!(die_hard.category, Category::new(1, "Action"));

    let id = die_hard.id.expect("store assigned an id");
    assert!(id > 0);
    assert!(!before.contains(&id));
}

#[tokio::test]
async fn movie_id_is_ignored_on_insert() {
    let (_dir, mut repo) = catalog(&[Category::new(1, "Action")]).await;
    let mut movie = Movie::new_unsaved("Heat", 1995, 170, Category::new(1, "Action"));
    movie.id = Some(4242);

    repo.add_movie(&movie).await.expect("add");

    let listed = repo.list_movies_by_category(1).await.expect("list");
    assert_eq!(listed.len(), 1);
    assert_ne!(listed[0].id, Some(4242));
}

#[tokio::test]
async fn listings_are_ordered_and_filtered() {
    let (_dir, mut repo) = catalog(&stock_categories()).await;
    let animation = Category::new(1, "Animation");
    let comedy = Category::new(2, "Comedy");

    repo.add_movie(&Movie::new_unsaved("Toy Story", 1995, 81, animation.clone()))
        .await
        .expect("add");
    repo.add_movie(&Movie::new_unsaved("Clueless", 1995, 97, comedy))
        .await
        .expect("add");
    repo.add_movie(&Movie::new_unsaved("Shrek", 2001, 90, animation))
        .await
        .expect("add");

    let names = |movies: Vec<Movie>| movies.into_iter().map(|m| m.name).collect::<Vec<_>>();

    assert_eq!(
        names(repo.list_movies_by_category(1).await.expect("list")),
        vec!["Toy Story", "Shrek"]
    );
    assert_eq!(
        names(repo.list_movies_by_year(1995).await.expect("list")),
        vec!["Toy Story", "Clueless"]
    );
    assert!(repo.list_movies_by_year(1900).await.expect("list").is_empty());
    assert!(repo.list_movies_by_category(42).await.expect("list").is_empty());
}

#[tokio::test]
async fn delete_removes_existing_movie_and_ignores_missing_id() {
    let (_dir, mut repo) = catalog(&[Category::new(1, "Action")]).await;
    repo.add_movie(&Movie::new_unsaved("Die Hard", 1988, 132, Category::new(1, "Action")))
        .await
        .expect("add");
    let id = repo.list_movies_by_year(1988).await.expect("list")[0]
        .id
        .expect("id");

    repo.delete_movie(id).await.expect("delete");
    assert!(repo.list_movies_by_year(1988).await.expect("list").is_empty());

    repo.delete_movie(id).await.expect("deleting again is a no-op");
    repo.delete_movie(-7).await.expect("unknown id is a no-op");
}

#[tokio::test]
async fn foreign_key_violation_surfaces_as_storage_error() {
    let (_dir, mut repo) = catalog(&[Category::new(1, "Action")]).await;
    let ghost = Category::new(77, "Ghost");

    let err = repo
        .add_movie(&Movie::new_unsaved("Nowhere", 2000, 90, ghost))
        .await
        .unwrap_err();
    assert!(matches!(err, DbError::Query(_)));
    assert!(repo.list_movies_by_year(2000).await.expect("list").is_empty());
}

#[tokio::test]
async fn missing_schema_is_reported_not_swallowed() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut repo = MovieRepository::new(Database::new(&settings(&dir, true)));

    let err = repo.get_category(1).await.unwrap_err();
    assert!(matches!(err, DbError::Query(_)));
}

#[tokio::test]
async fn seeding_twice_keeps_existing_rows() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut db = Database::new(&settings(&dir, true));
    ensure_schema(&mut db).await.expect("schema");
    ensure_schema(&mut db).await.expect("schema again");
    seed_categories(&mut db, &stock_categories()).await.expect("seed");
    seed_categories(&mut db, &[Category::new(1, "Renamed")])
        .await
        .expect("seed again");

    let mut repo = MovieRepository::new(db);
    assert_eq!(
        repo.get_category(1).await.expect("lookup"),
        Some(Category::new(1, "Animation"))
    );
}
