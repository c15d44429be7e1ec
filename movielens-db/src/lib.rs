//! SQLite persistence layer for the MovieLens database.
//!
//! Provides schema handling, the generic statement helpers, and the fixed
//! movie queries and updates built on them (via rusqlite with bundled feature).

pub mod operations;
pub mod queries;
pub mod schema;
pub mod sql;

pub use operations::{add_review, movie_exists, set_tagline};
pub use queries::{
    database_stats, get_movie_details, get_movies, get_top_n_movies, num_movies, num_reviews,
    rating_stats, tagline,
};
pub use schema::{create_database, open_database, open_memory, SchemaError};
pub use sql::{perform_action, select_n_rows, select_one_row, DbError};

pub use rusqlite::Connection;
