use std::io::{self, Write};

use movielens_db::Connection;

use super::{or_neutral, parse_int};

/// Valid review scores.
pub(crate) const RATING_RANGE: std::ops::RangeInclusive<i64> = 0..=10;

/// Insert a review for the movie id as typed. `rating` must be in
/// [`RATING_RANGE`].
pub(crate) fn run_review(
    conn: &Connection,
    out: &mut impl Write,
    raw_id: &str,
    rating: i64,
) -> io::Result<()> {
    let modified = parse_int("add_review", raw_id)
        .map(|id| or_neutral("add_review", movielens_db::add_review(conn, id, rating)))
        .unwrap_or(0);

    if modified == 0 {
        writeln!(out, "No such movie...")
    } else {
        writeln!(out, "Review successfully inserted")
    }
}

/// Set the tagline for the movie id as typed.
pub(crate) fn run_tagline(
    conn: &Connection,
    out: &mut impl Write,
    raw_id: &str,
    tagline: &str,
) -> io::Result<()> {
    let modified = parse_int("set_tagline", raw_id)
        .map(|id| or_neutral("set_tagline", movielens_db::set_tagline(conn, id, tagline)))
        .unwrap_or(0);

    if modified == 0 {
        writeln!(out, "No such movie...")
    } else {
        writeln!(out, "Tagline successfully set")
    }
}
