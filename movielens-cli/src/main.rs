//! movielens CLI
//!
//! Command-line interface for querying and updating a MovieLens database.

mod commands;
mod error;
mod report;
mod settings;
mod shell;

use std::io::{self, Write};
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use movielens_db::Connection;

pub(crate) use error::CliError;

use settings::{Settings, DB_ENV_VAR};

#[derive(Parser)]
#[command(name = "movielens")]
#[command(about = "Query and update a MovieLens movie database", long_about = None)]
struct Cli {
    /// Database file (defaults to $MOVIELENS_DB, then settings, then ./MovieLens.db)
    #[arg(long, global = true)]
    db: Option<PathBuf>,

    /// Settings file (defaults to ~/.config/movielens/settings.toml)
    #[arg(long, global = true)]
    settings: Option<PathBuf>,

    /// Print read-only results (stats, search, show, top) as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive menu (the default)
    Shell,

    /// Print the number of movies and reviews
    Stats,

    /// Search titles with SQL wildcards (_ and %)
    Search {
        pattern: String,
    },

    /// Show details for one movie
    Show {
        movie_id: String,
    },

    /// Top N movies by average rating
    Top {
        #[arg(value_parser = clap::value_parser!(i64).range(1..))]
        n: i64,

        /// Minimum number of reviews a movie needs to be ranked
        #[arg(value_parser = clap::value_parser!(i64).range(1..))]
        min_reviews: i64,
    },

    /// Add a review (0..10) for a movie
    Review {
        movie_id: String,

        #[arg(value_parser = clap::value_parser!(i64).range(0..=10))]
        rating: i64,
    },

    /// Set or replace a movie's tagline
    Tagline {
        movie_id: String,

        /// New tagline (may be empty)
        tagline: String,
    },

    /// Create a new, empty database with the MovieLens schema
    Init {
        path: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .format_target(false)
        .init();
}

fn run(cli: Cli) -> Result<(), CliError> {
    let command = cli.command.unwrap_or(Commands::Shell);

    if let Commands::Init { path } = &command {
        return commands::init::run_init(path);
    }

    let settings_path = cli.settings.unwrap_or_else(settings::settings_path);
    let settings = settings::load_settings(&settings_path)?;
    let db_path = settings::resolve_database_path(
        cli.db,
        std::env::var_os(DB_ENV_VAR).map(PathBuf::from),
        &settings,
    );

    let conn = movielens_db::open_database(&db_path).map_err(|e| {
        CliError::database(format!("Failed to open {}: {}", db_path.display(), e))
    })?;
    log::info!("Using database {}", db_path.display());

    if let Commands::Shell = command {
        run_shell(&conn, &settings)?;
    } else {
        let mut out = io::stdout().lock();
        if cli.json {
            run_once_json(&conn, command, &mut out)?;
        } else {
            run_once(&conn, &settings, command, &mut out)?;
        }
        out.flush()?;
    }

    close(conn)
}

/// Run a single non-interactive command.
fn run_once(
    conn: &Connection,
    settings: &Settings,
    command: Commands,
    out: &mut impl Write,
) -> io::Result<()> {
    match command {
        Commands::Stats => commands::query::run_stats(conn, out),
        Commands::Search { pattern } => commands::query::run_search(
            conn,
            out,
            &pattern,
            settings.display.max_search_results,
        ),
        Commands::Show { movie_id } => commands::query::run_show(conn, out, &movie_id),
        Commands::Top { n, min_reviews } => commands::query::run_top(conn, out, n, min_reviews),
        Commands::Review { movie_id, rating } => {
            commands::update::run_review(conn, out, &movie_id, rating)
        }
        Commands::Tagline { movie_id, tagline } => {
            commands::update::run_tagline(conn, out, &movie_id, &tagline)
        }
        Commands::Shell | Commands::Init { .. } => Ok(()),
    }
}

/// Run a single command, printing JSON instead of the text report.
///
/// Updates have no JSON form and print their usual confirmation.
fn run_once_json(conn: &Connection, command: Commands, out: &mut impl Write) -> io::Result<()> {
    match command {
        Commands::Stats => commands::query::json_stats(conn, out),
        Commands::Search { pattern } => commands::query::json_search(conn, out, &pattern),
        Commands::Show { movie_id } => commands::query::json_show(conn, out, &movie_id),
        Commands::Top { n, min_reviews } => commands::query::json_top(conn, out, n, min_reviews),
        Commands::Review { movie_id, rating } => {
            commands::update::run_review(conn, out, &movie_id, rating)
        }
        Commands::Tagline { movie_id, tagline } => {
            commands::update::run_tagline(conn, out, &movie_id, &tagline)
        }
        Commands::Shell | Commands::Init { .. } => Ok(()),
    }
}

fn run_shell(conn: &Connection, settings: &Settings) -> Result<(), CliError> {
    println!(
        "{}",
        "** Welcome to the MovieLens app **".if_supports_color(Stdout, |t| t.bold()),
    );
    println!();

    let mut out = io::stdout().lock();
    commands::query::run_stats(conn, &mut out)?;
    writeln!(out)?;

    shell::Shell::new(
        conn,
        io::stdin().lock(),
        &mut out,
        settings.display.max_search_results,
    )
    .run()?;
    Ok(())
}

/// Close the connection explicitly so a failing close is reported.
fn close(conn: Connection) -> Result<(), CliError> {
    conn.close()
        .map_err(|(_, e)| CliError::database(format!("Failed to close database: {}", e)))
}
