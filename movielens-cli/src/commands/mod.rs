//! Command implementations shared by the interactive shell and the
//! one-shot subcommands.
//!
//! Internal failures never surface as errors here: they are logged where
//! they happen and the command carries on with an empty result, exactly as
//! if nothing had matched.

pub(crate) mod init;
pub(crate) mod query;
pub(crate) mod update;

use std::fmt::Display;

/// Unwrap a result, logging the error and substituting the empty value.
pub(crate) fn or_neutral<T: Default, E: Display>(context: &str, result: Result<T, E>) -> T {
    match result {
        Ok(value) => value,
        Err(e) => {
            log::error!("{} error: {}", context, e);
            T::default()
        }
    }
}

/// Parse user-typed integer text, logging a parse failure.
pub(crate) fn parse_int(context: &str, raw: &str) -> Option<i64> {
    match raw.trim().parse::<i64>() {
        Ok(n) => Some(n),
        Err(e) => {
            log::error!("{} error: invalid integer '{}': {}", context, raw.trim(), e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_or_neutral_passes_values() {
        let r: Result<Vec<i32>, String> = Ok(vec![1, 2]);
        assert_eq!(or_neutral("t", r), vec![1, 2]);
    }

    #[test]
    fn test_or_neutral_substitutes_default() {
        let r: Result<Option<i32>, String> = Err("boom".into());
        assert_eq!(or_neutral("t", r), None);
        let r: Result<usize, String> = Err("boom".into());
        assert_eq!(or_neutral("t", r), 0);
    }

    #[test]
    fn test_parse_int() {
        assert_eq!(parse_int("t", " 42 "), Some(42));
        assert_eq!(parse_int("t", "-3"), Some(-3));
        assert_eq!(parse_int("t", "4.5"), None);
        assert_eq!(parse_int("t", ""), None);
        assert_eq!(parse_int("t", "abc"), None);
    }
}
