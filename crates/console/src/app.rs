use crate::command::Command;
use crate::display;
use crate::error::ConsoleError;
use core_types::{Movie, parse_whole_number};
use database::{DbError, MovieRepository};
use std::io::Write;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

/// The read-dispatch-execute loop of the movie catalog.
///
/// Input is any async line source and output any writer, so the binary wires
/// it to stdin/stdout while tests drive it from byte slices.
pub struct Console<R, W> {
    repo: MovieRepository,
    input: R,
    output: W,
}

impl<R, W> Console<R, W>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    pub fn new(repo: MovieRepository, input: R, output: W) -> Self {
        Self {
            repo,
            input,
            output,
        }
    }

    /// Hands the parts back, e.g. so the caller can close the repository.
    pub fn into_parts(self) -> (MovieRepository, R, W) {
        (self.repo, self.input, self.output)
    }

    /// Runs the session until `exit` or end of input.
    ///
    /// A storage failure aborts only the command that hit it: it is logged,
    /// reported to the user, and the prompt comes back. Only a failure to
    /// write to the output ends the session with an error.
    pub async fn run(&mut self) -> Result<(), ConsoleError> {
        self.display_welcome()?;
        let startup = self.display_categories().await;
        self.recover(startup)?;

        loop {
            let Some(line) = self.read_line("Command: ").await? else {
                tracing::debug!("Input closed at the command prompt.");
                break;
            };

            let outcome = match line.parse::<Command>() {
                Ok(Command::Exit) => break,
                Ok(command) => self.execute(command).await,
                Err(unknown) => {
                    tracing::debug!(%unknown, "Rejected command.");
                    writeln!(self.output, "Not a valid command. Please try again.\n")?;
                    self.display_menu()
                }
            };

            match outcome {
                Err(ConsoleError::InputClosed) => break,
                other => self.recover(other)?,
            }
        }

        writeln!(self.output, "Bye!")?;
        self.output.flush()?;
        Ok(())
    }

    async fn execute(&mut self, command: Command) -> Result<(), ConsoleError> {
        tracing::debug!(?command, "Executing command.");
        match command {
            Command::Category => self.display_movies_by_category().await,
            Command::Year => self.display_movies_by_year().await,
            Command::Add => self.add_movie().await,
            Command::Delete => self.delete_movie().await,
            Command::Exit => Ok(()),
        }
    }

    /// Turns a storage failure into a message; anything else is passed on.
    fn recover(&mut self, outcome: Result<(), ConsoleError>) -> Result<(), ConsoleError> {
        match outcome {
            Err(ConsoleError::Storage(e)) => self.report_storage_error(&e),
            other => other,
        }
    }

    fn report_storage_error(&mut self, error: &DbError) -> Result<(), ConsoleError> {
        tracing::error!(error = ?error, "Command aborted by a storage failure.");
        writeln!(self.output, "Database error: {error}\n")?;
        Ok(())
    }

    fn display_welcome(&mut self) -> Result<(), ConsoleError> {
        writeln!(self.output, "{}\n", display::BANNER)?;
        self.display_menu()
    }

    fn display_menu(&mut self) -> Result<(), ConsoleError> {
        writeln!(self.output, "{}", display::MENU)?;
        Ok(())
    }

    async fn display_categories(&mut self) -> Result<(), ConsoleError> {
        let categories = self.repo.list_categories().await?;
        writeln!(self.output, "{}", display::render_categories(&categories))?;
        Ok(())
    }

    fn display_movies(&mut self, title: impl std::fmt::Display, movies: &[Movie]) -> Result<(), ConsoleError> {
        writeln!(self.output, "{}", display::render_movies(title, movies))?;
        Ok(())
    }

    async fn display_movies_by_category(&mut self) -> Result<(), ConsoleError> {
        let category_id = self.read_int("Category ID: ").await?;
        let Some(category) = self.repo.get_category(category_id).await? else {
            writeln!(self.output, "There is no category with that ID.\n")?;
            return Ok(());
        };

        writeln!(self.output)?;
        let movies = self.repo.list_movies_by_category(category_id).await?;
        self.display_movies(category.name.to_uppercase(), &movies)
    }

    async fn display_movies_by_year(&mut self) -> Result<(), ConsoleError> {
        let year = self.read_int("Year: ").await?;
        writeln!(self.output)?;
        let movies = self.repo.list_movies_by_year(year).await?;
        self.display_movies(year, &movies)
    }

    async fn add_movie(&mut self) -> Result<(), ConsoleError> {
        let name = self.read_text("Name: ").await?;
        let year = self.read_int("Year: ").await?;
        let minutes = self.read_int("Minutes: ").await?;
        let category_id = self.read_int("Category ID: ").await?;

        let Some(category) = self.repo.get_category(category_id).await? else {
            writeln!(self.output, "There is no category with that ID. Movie NOT added.\n")?;
            return Ok(());
        };

        let movie = Movie::new_unsaved(name, year, minutes, category);
        self.repo.add_movie(&movie).await?;
        writeln!(self.output, "{} was added to database.\n", movie.name)?;
        Ok(())
    }

    /// Reports success whether or not a row existed, matching the repository's
    /// no-op-on-missing delete.
    async fn delete_movie(&mut self) -> Result<(), ConsoleError> {
        let movie_id = self.read_int("Movie ID: ").await?;
        self.repo.delete_movie(movie_id).await?;
        writeln!(self.output, "Movie ID {movie_id} was deleted from database.\n")?;
        Ok(())
    }

    /// Prompts until a whole number is entered.
    async fn read_int(&mut self, prompt: &str) -> Result<i64, ConsoleError> {
        let field = prompt.trim_end_matches([':', ' ']);
        loop {
            let line = self.read_text(prompt).await?;
            match parse_whole_number(field, &line) {
                Ok(value) => return Ok(value),
                Err(e) => {
                    tracing::debug!(error = %e, "Re-prompting after invalid number.");
                    writeln!(self.output, "Invalid whole number. Please try again.\n")?;
                }
            }
        }
    }

    /// Like `read_line`, but end of input is an error because a command is waiting.
    async fn read_text(&mut self, prompt: &str) -> Result<String, ConsoleError> {
        self.read_line(prompt).await?.ok_or(ConsoleError::InputClosed)
    }

    /// Writes `prompt` and reads one line without its line terminator.
    /// Returns `None` at end of input.
    async fn read_line(&mut self, prompt: &str) -> Result<Option<String>, ConsoleError> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line).await? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }
}
