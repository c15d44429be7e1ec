//! Write operations: reviews and taglines.
//!
//! Both require the movie to exist. A missing movie is reported as zero
//! affected rows and nothing is written.

use rusqlite::{params, Connection};

use crate::sql::{perform_action, select_one_row, DbError};

/// Whether a movie with this id exists.
pub fn movie_exists(conn: &Connection, movie_id: i64) -> Result<bool, DbError> {
    let found = select_one_row(
        conn,
        "SELECT 1 FROM Movies WHERE Movie_ID = ?1",
        params![movie_id],
        |_| Ok(()),
    )?;
    Ok(found.is_some())
}

// ── Review Operations ───────────────────────────────────────────────────────

/// Insert a review for a movie.
///
/// Returns 1 when the review was inserted, 0 when the movie does not exist.
/// Reviews are never deduplicated; the rating range is the caller's concern.
pub fn add_review(conn: &Connection, movie_id: i64, rating: i64) -> Result<usize, DbError> {
    if !movie_exists(conn, movie_id)? {
        log::debug!("add_review: no movie {}", movie_id);
        return Ok(0);
    }
    perform_action(
        conn,
        "INSERT INTO Ratings (Movie_ID, Rating) VALUES (?1, ?2)",
        params![movie_id, rating],
    )
}

// ── Tagline Operations ──────────────────────────────────────────────────────

/// Set the tagline for a movie, replacing any existing one.
///
/// An empty tagline is stored as-is. Returns 1 when the tagline was set, 0
/// when the movie does not exist.
pub fn set_tagline(conn: &Connection, movie_id: i64, tagline: &str) -> Result<usize, DbError> {
    if !movie_exists(conn, movie_id)? {
        log::debug!("set_tagline: no movie {}", movie_id);
        return Ok(0);
    }

    let has_tagline = select_one_row(
        conn,
        "SELECT 1 FROM Movie_Taglines WHERE Movie_ID = ?1",
        params![movie_id],
        |_| Ok(()),
    )?
    .is_some();

    if has_tagline {
        perform_action(
            conn,
            "UPDATE Movie_Taglines SET Tagline = ?2 WHERE Movie_ID = ?1",
            params![movie_id, tagline],
        )?;
    } else {
        perform_action(
            conn,
            "INSERT INTO Movie_Taglines (Movie_ID, Tagline) VALUES (?1, ?2)",
            params![movie_id, tagline],
        )?;
    }
    Ok(1)
}
