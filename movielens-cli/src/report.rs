//! Plain-text report blocks.
//!
//! Writers take any `io::Write` so the shell, the one-shot subcommands and
//! the tests all produce byte-identical output.

use std::io::{self, Write};

use movielens_core::{
    format_currency, format_list, format_rating, format_thousands, format_year, MovieDetail,
    MovieRatingSummary, MovieSummary,
};

/// The "General stats" block; `-1` marks a count that could not be read.
pub(crate) fn write_stats(out: &mut impl Write, num_movies: i64, num_reviews: i64) -> io::Result<()> {
    writeln!(out, "General stats:")?;
    writeln!(out, "  # of movies: {}", format_thousands(num_movies))?;
    writeln!(out, "  # of reviews: {}", format_thousands(num_reviews))
}

/// `ID : Title (Year)`
pub(crate) fn write_summary(out: &mut impl Write, movie: &MovieSummary) -> io::Result<()> {
    writeln!(
        out,
        "{} : {} ({})",
        movie.movie_id,
        movie.title,
        format_year(movie.release_year.as_deref()),
    )
}

/// `ID : Title (Year), avg rating = 8.50 (12 reviews)`
pub(crate) fn write_ranked(out: &mut impl Write, entry: &MovieRatingSummary) -> io::Result<()> {
    writeln!(
        out,
        "{} : {} ({}), avg rating = {} ({} reviews)",
        entry.movie.movie_id,
        entry.movie.title,
        format_year(entry.movie.release_year.as_deref()),
        format_rating(entry.ratings.avg_rating),
        entry.ratings.num_reviews,
    )
}

pub(crate) fn write_detail(out: &mut impl Write, d: &MovieDetail) -> io::Result<()> {
    writeln!(out, "{} : {}", d.movie_id, d.title)?;
    writeln!(out, "  Release date: {}", d.release_date)?;
    writeln!(out, "  Runtime: {} (mins)", d.runtime)?;
    writeln!(out, "  Orig language: {}", d.original_language)?;
    writeln!(out, "  Budget: {} (USD)", format_currency(d.budget))?;
    writeln!(out, "  Revenue: {} (USD)", format_currency(d.revenue))?;
    writeln!(out, "  Num reviews: {}", d.ratings.num_reviews)?;
    writeln!(out, "  Avg rating: {} (0..10)", format_rating(d.ratings.avg_rating))?;
    writeln!(out, "  Genres: {}", format_list(&d.genres))?;
    writeln!(
        out,
        "  Production companies: {}",
        format_list(&d.production_companies)
    )?;
    writeln!(out, "  Tagline: {}", d.tagline)
}
