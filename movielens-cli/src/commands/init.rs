use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::CliError;

/// Create an empty MovieLens database with the full schema.
pub(crate) fn run_init(path: &Path) -> Result<(), CliError> {
    movielens_db::create_database(path)
        .map_err(|e| CliError::database(format!("Failed to create database: {}", e)))?;

    println!(
        "{} {}",
        "Created".if_supports_color(Stdout, |t| t.green()),
        path.display()
    );
    Ok(())
}
