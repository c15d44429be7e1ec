//! Display helpers for formatting movie report fields.
//!
//! Pure string transformations shared by the interactive shell and the
//! one-shot subcommands, so both print identical reports.

/// Format an integer with `,` thousands separators (e.g. `1234567` → `1,234,567`).
pub fn format_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Format a USD amount with a leading `$` and thousands separators.
///
/// Negative amounts keep the sign before the symbol: `-$1,000`.
pub fn format_currency(amount: i64) -> String {
    let formatted = format_thousands(amount);
    match formatted.strip_prefix('-') {
        Some(rest) => format!("-${rest}"),
        None => format!("${formatted}"),
    }
}

/// Format an average rating to two decimal places.
pub fn format_rating(rating: f64) -> String {
    format!("{:.2}", rating)
}

/// Join names as `"A, B, "`, or an empty string when there are none.
pub fn format_list(items: &[String]) -> String {
    if items.is_empty() {
        String::new()
    } else {
        format!("{}, ", items.join(", "))
    }
}

/// Release year for summary lines; `n/a` when the date is unknown.
pub fn format_year(year: Option<&str>) -> &str {
    match year {
        Some(y) if !y.is_empty() => y,
        _ => "n/a",
    }
}
