use anyhow::Context;
use clap::Parser;
use configuration::{LogLevel, LoggingSettings};
use console::Console;
use database::{Database, MovieRepository, ensure_schema, seed_categories, stock_categories};
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// The main entry point for the Movie List application.
#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // A missing .env file is fine; it only supplies optional overrides.
    dotenvy::dotenv().ok();

    // Parse command-line arguments
    let cli = Cli::parse();

    let mut config = configuration::load_config(&cli.config)
        .with_context(|| format!("Failed to load configuration from {}", cli.config.display()))?;
    if let Some(path) = cli.database {
        config.database.path = path;
    }
    if let Some(level) = cli.log_level {
        config.logging.level = level;
    }
    if cli.init {
        config.database.create_if_missing = true;
    }

    let _log_guard = init_tracing(&config.logging)?;

    let mut db = Database::new(&config.database);
    if cli.init {
        if let Err(e) = initialise(&mut db).await {
            db.close().await.ok();
            return Err(e);
        }
    }

    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    let mut console = Console::new(MovieRepository::new(db), stdin, std::io::stdout());
    let session = console.run().await;

    // The connection is released on every path out of the loop.
    let (mut repo, _, _) = console.into_parts();
    if let Err(e) = repo.close().await {
        tracing::error!(error = ?e, "Failed to close the database connection.");
    }

    session.context("Console session failed")
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// Browse and edit a movie catalog stored in SQLite.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Configuration file to read. Missing files are ignored.
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,

    /// SQLite file to use instead of the configured one.
    #[arg(long)]
    database: Option<PathBuf>,

    /// Create the tables and stock categories before starting.
    #[arg(long)]
    init: bool,

    /// Log level to use when RUST_LOG is not set.
    #[arg(long, value_enum)]
    log_level: Option<LogLevel>,
}

async fn initialise(db: &mut Database) -> anyhow::Result<()> {
    ensure_schema(db).await.context("Failed to create the schema")?;
    seed_categories(db, &stock_categories())
        .await
        .context("Failed to seed the stock categories")?;
    tracing::info!("Database initialised.");
    Ok(())
}

/// Installs the global subscriber. Logs go to stderr, or to a daily file
/// when a log directory is configured, so they never mix with the prompts on stdout.
fn init_tracing(settings: &LoggingSettings) -> anyhow::Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(settings.level.as_filter()));

    match &settings.directory {
        Some(directory) => {
            let appender = tracing_appender::rolling::daily(directory, "movie-list.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let subscriber = FmtSubscriber::builder()
                .with_env_filter(filter)
                .with_writer(writer)
                .with_ansi(false)
                .finish();
            tracing::subscriber::set_global_default(subscriber)?;
            Ok(Some(guard))
        }
        None => {
            let subscriber = FmtSubscriber::builder()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .finish();
            tracing::subscriber::set_global_default(subscriber)?;
            Ok(None)
        }
    }
}
