use std::io::{self, Write};

use movielens_db::Connection;
use serde::Serialize;

use super::{or_neutral, parse_int};
use crate::report;

/// Print the movie and review totals (`-1` when a count fails).
pub(crate) fn run_stats(conn: &Connection, out: &mut impl Write) -> io::Result<()> {
    let num_movies = movielens_db::num_movies(conn).unwrap_or_else(|e| {
        log::error!("num_movies error: {}", e);
        -1
    });
    let num_reviews = movielens_db::num_reviews(conn).unwrap_or_else(|e| {
        log::error!("num_reviews error: {}", e);
        -1
    });
    report::write_stats(out, num_movies, num_reviews)
}

/// List movies whose title matches a `LIKE` pattern.
pub(crate) fn run_search(
    conn: &Connection,
    out: &mut impl Write,
    pattern: &str,
    max_results: usize,
) -> io::Result<()> {
    let movies = or_neutral("get_movies", movielens_db::get_movies(conn, pattern));
    writeln!(out, "# of movies found: {}", movies.len())?;
    writeln!(out)?;

    if movies.len() > max_results {
        writeln!(
            out,
            "There are too many movies to display, please narrow your search and try again..."
        )?;
        return Ok(());
    }

    for movie in &movies {
        report::write_summary(out, movie)?;
    }
    Ok(())
}

/// Print the detail block for one movie, given the id as typed.
pub(crate) fn run_show(conn: &Connection, out: &mut impl Write, raw_id: &str) -> io::Result<()> {
    let detail = parse_int("get_movie_details", raw_id).and_then(|id| {
        or_neutral(
            "get_movie_details",
            movielens_db::get_movie_details(conn, id),
        )
    });

    match detail {
        Some(d) => report::write_detail(out, &d),
        None => writeln!(out, "No such movie..."),
    }
}

/// Print the top `n` movies by average rating. Both arguments must already
/// be positive.
pub(crate) fn run_top(
    conn: &Connection,
    out: &mut impl Write,
    n: i64,
    min_num_reviews: i64,
) -> io::Result<()> {
    let movies = or_neutral(
        "get_top_n_movies",
        movielens_db::get_top_n_movies(conn, n, min_num_reviews),
    );
    for entry in &movies {
        report::write_ranked(out, entry)?;
    }
    Ok(())
}

// ── JSON output ─────────────────────────────────────────────────────────────

fn write_json<T: Serialize>(out: &mut impl Write, value: &T) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)
}

/// Totals as a JSON object, `null` if they could not be read.
pub(crate) fn json_stats(conn: &Connection, out: &mut impl Write) -> io::Result<()> {
    let stats = or_neutral(
        "database_stats",
        movielens_db::database_stats(conn).map(Some),
    );
    write_json(out, &stats)
}

/// Every match as a JSON array. The display cap does not apply.
pub(crate) fn json_search(conn: &Connection, out: &mut impl Write, pattern: &str) -> io::Result<()> {
    let movies = or_neutral("get_movies", movielens_db::get_movies(conn, pattern));
    write_json(out, &movies)
}

/// One movie as a JSON object, `null` when there is no such movie.
pub(crate) fn json_show(conn: &Connection, out: &mut impl Write, raw_id: &str) -> io::Result<()> {
    let detail = parse_int("get_movie_details", raw_id).and_then(|id| {
        or_neutral(
            "get_movie_details",
            movielens_db::get_movie_details(conn, id),
        )
    });
    write_json(out, &detail)
}

pub(crate) fn json_top(
    conn: &Connection,
    out: &mut impl Write,
    n: i64,
    min_num_reviews: i64,
) -> io::Result<()> {
    let movies = or_neutral(
        "get_top_n_movies",
        movielens_db::get_top_n_movies(conn, n, min_num_reviews),
    );
    write_json(out, &movies)
}
