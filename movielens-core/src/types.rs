//! Data model types for the movie database.
//!
//! These are read-only records: each query builds fresh values from the rows
//! it fetched and the caller discards them once printed.

use serde::Serialize;

// ── Movie ───────────────────────────────────────────────────────────────────

/// A movie as returned by a title search.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MovieSummary {
    pub movie_id: i64,
    pub title: String,
    /// Four-digit year, `None` when the release date is missing.
    pub release_year: Option<String>,
}

// ── Ratings ─────────────────────────────────────────────────────────────────

/// Aggregated review data for one movie.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct RatingStats {
    pub num_reviews: i64,
    /// Mean of all ratings, 0.0 when the movie has no reviews.
    pub avg_rating: f64,
}

/// A movie summary extended with its review aggregates (top-N ranking).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MovieRatingSummary {
    pub movie: MovieSummary,
    pub ratings: RatingStats,
}

impl MovieRatingSummary {
    pub fn movie_id(&self) -> i64 {
        self.movie.movie_id
    }
}

// ── Detail ──────────────────────────────────────────────────────────────────

/// Everything known about a single movie.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MovieDetail {
    pub movie_id: i64,
    pub title: String,
    /// `YYYY-MM-DD`, empty when unknown.
    pub release_date: String,
    /// Minutes.
    pub runtime: i64,
    pub original_language: String,
    /// USD.
    pub budget: i64,
    /// USD.
    pub revenue: i64,
    pub ratings: RatingStats,
    /// Empty when the movie has no tagline.
    pub tagline: String,
    /// Sorted ascending.
    pub genres: Vec<String>,
    /// Sorted ascending.
    pub production_companies: Vec<String>,
}

// ── Statistics ──────────────────────────────────────────────────────────────

/// Row counts shown on startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DatabaseStats {
    pub num_movies: i64,
    pub num_reviews: i64,
}
