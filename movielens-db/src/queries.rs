//! Read queries for the movie database.
//!
//! Provides title search, per-movie detail, the top-N ranking, and row
//! counts. "Nothing matched" is reported as an empty result, never an error.

use movielens_core::types::*;
use rusqlite::{params, Connection};

use crate::sql::{select_n_rows, select_one_row, DbError};

// ── Search ──────────────────────────────────────────────────────────────────

/// Find movies whose title matches a SQL `LIKE` pattern.
///
/// `_` matches one character and `%` any run of characters; pass `"%"` to
/// list every movie. Results are unique by id, ascending by id.
pub fn get_movies(conn: &Connection, pattern: &str) -> Result<Vec<MovieSummary>, DbError> {
    select_n_rows(
        conn,
        "SELECT Movie_ID, Title, strftime('%Y', Release_Date)
         FROM Movies
         WHERE Title LIKE ?1
         GROUP BY Movie_ID
         ORDER BY Movie_ID ASC",
        params![pattern],
        row_to_summary,
    )
}

// ── Detail ──────────────────────────────────────────────────────────────────

/// Look up everything known about one movie.
///
/// Returns `Ok(None)` when no movie has this id.
pub fn get_movie_details(conn: &Connection, movie_id: i64) -> Result<Option<MovieDetail>, DbError> {
    let core = select_one_row(
        conn,
        "SELECT Movie_ID, Title,
                COALESCE(strftime('%Y-%m-%d', Release_Date), ''),
                COALESCE(Runtime, 0),
                COALESCE(Original_Language, ''),
                COALESCE(Budget, 0),
                COALESCE(Revenue, 0)
         FROM Movies WHERE Movie_ID = ?1",
        params![movie_id],
        |row| {
            Ok(MovieDetail {
                movie_id: row.get(0)?,
                title: row.get(1)?,
                release_date: row.get(2)?,
                runtime: row.get(3)?,
                original_language: row.get(4)?,
                budget: row.get(5)?,
                revenue: row.get(6)?,
                ratings: RatingStats::default(),
                tagline: String::new(),
                genres: Vec::new(),
                production_companies: Vec::new(),
            })
        },
    )?;
    let Some(mut detail) = core else {
        return Ok(None);
    };

    detail.ratings = rating_stats(conn, movie_id)?;
    detail.tagline = tagline(conn, movie_id)?.unwrap_or_default();
    detail.genres = select_n_rows(
        conn,
        "SELECT DISTINCT Genres.Genre_Name
         FROM Genres
         INNER JOIN Movie_Genres ON Genres.Genre_ID = Movie_Genres.Genre_ID
         WHERE Movie_Genres.Movie_ID = ?1
         ORDER BY Genres.Genre_Name ASC",
        params![movie_id],
        |row| row.get(0),
    )?;
    detail.production_companies = select_n_rows(
        conn,
        "SELECT DISTINCT Companies.Company_Name
         FROM Companies
         INNER JOIN Movie_Production_Companies
             ON Companies.Company_ID = Movie_Production_Companies.Company_ID
         WHERE Movie_Production_Companies.Movie_ID = ?1
         ORDER BY Companies.Company_Name ASC",
        params![movie_id],
        |row| row.get(0),
    )?;

    Ok(Some(detail))
}

/// Review count and average rating for one movie (0 reviews → average 0.0).
pub fn rating_stats(conn: &Connection, movie_id: i64) -> Result<RatingStats, DbError> {
    let stats = select_one_row(
        conn,
        "SELECT COUNT(Rating), AVG(Rating) FROM Ratings WHERE Movie_ID = ?1",
        params![movie_id],
        |row| {
            Ok(RatingStats {
                num_reviews: row.get(0)?,
                avg_rating: row.get::<_, Option<f64>>(1)?.unwrap_or(0.0),
            })
        },
    )?;
    Ok(stats.unwrap_or_default())
}

/// The stored tagline for a movie, if it has one.
pub fn tagline(conn: &Connection, movie_id: i64) -> Result<Option<String>, DbError> {
    let tagline = select_one_row(
        conn,
        "SELECT Tagline FROM Movie_Taglines WHERE Movie_ID = ?1",
        params![movie_id],
        |row| row.get::<_, Option<String>>(0),
    )?;
    Ok(tagline.flatten())
}

// ── Ranking ─────────────────────────────────────────────────────────────────

/// The `n` highest-rated movies having at least `min_num_reviews` reviews.
///
/// Ordered by average rating descending; equal averages are ordered by id
/// ascending so the ranking is stable between runs. `n < 1` yields nothing.
pub fn get_top_n_movies(
    conn: &Connection,
    n: i64,
    min_num_reviews: i64,
) -> Result<Vec<MovieRatingSummary>, DbError> {
    // SQLite treats a negative LIMIT as "no limit"
    if n < 1 {
        return Ok(Vec::new());
    }
    select_n_rows(
        conn,
        "SELECT Movies.Movie_ID, Movies.Title, strftime('%Y', Movies.Release_Date),
                COUNT(Ratings.Rating) AS num_reviews,
                AVG(Ratings.Rating) AS avg_rating
         FROM Movies
         INNER JOIN Ratings ON Movies.Movie_ID = Ratings.Movie_ID
         GROUP BY Movies.Movie_ID
         HAVING num_reviews >= ?1
         ORDER BY avg_rating DESC, Movies.Movie_ID ASC
         LIMIT ?2",
        params![min_num_reviews, n],
        |row| {
            Ok(MovieRatingSummary {
                movie: row_to_summary(row)?,
                ratings: RatingStats {
                    num_reviews: row.get(3)?,
                    avg_rating: row.get(4)?,
                },
            })
        },
    )
}

// ── Statistics ──────────────────────────────────────────────────────────────

/// Total number of movies.
pub fn num_movies(conn: &Connection) -> Result<i64, DbError> {
    count(conn, "SELECT COUNT(Movie_ID) FROM Movies")
}

/// Total number of reviews across all movies.
pub fn num_reviews(conn: &Connection) -> Result<i64, DbError> {
    count(conn, "SELECT COUNT(Rating) FROM Ratings")
}

/// Both row counts at once.
pub fn database_stats(conn: &Connection) -> Result<DatabaseStats, DbError> {
    Ok(DatabaseStats {
        num_movies: num_movies(conn)?,
        num_reviews: num_reviews(conn)?,
    })
}

fn count(conn: &Connection, sql: &str) -> Result<i64, DbError> {
    let n = select_one_row(conn, sql, [], |row| row.get::<_, i64>(0))?;
    Ok(n.unwrap_or(0))
}

// ── Row Mapping Helpers ─────────────────────────────────────────────────────

fn row_to_summary(row: &rusqlite::Row<'_>) -> rusqlite::Result<MovieSummary> {
    Ok(MovieSummary {
        movie_id: row.get(0)?,
        title: row.get(1)?,
        release_year: row.get(2)?,
    })
}
