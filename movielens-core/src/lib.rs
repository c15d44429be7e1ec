//! Movie database value types and display formatting.
//!
//! This crate defines the records produced by the MovieLens queries without
//! any database dependencies. Consumers can use these types directly for
//! serialization or display; `movielens-db` populates them from SQLite.

pub mod display;
pub mod types;

pub use display::{format_currency, format_list, format_rating, format_thousands, format_year};
pub use types::*;
