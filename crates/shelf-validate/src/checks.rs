//! Free-standing value checks.
//!
//! These are the primitive predicates behind [`ColumnRule`] checking,
//! exposed for reuse by the execution layer.
//!
//! [`ColumnRule`]: crate::ColumnRule

use std::sync::LazyLock;

use regex::Regex;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").unwrap()
});

/// Returns true if the value contains a literal single-quote character.
#[must_use]
pub fn contains_single_quote(value: &str) -> bool {
    value.contains('\'')
}

/// Returns true if the value is a well-formed email address
/// (local-part@domain, final domain label of at least two letters).
#[must_use]
pub fn is_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

/// Returns true if the value parses as a base-10 real number.
///
/// Deliberately permissive: integers and decimals both pass.
#[must_use]
pub fn is_numeric(value: &str) -> bool {
    value.parse::<f64>().is_ok()
}

/// Returns true if any value in the slice is empty.
#[must_use]
pub fn any_empty<S: AsRef<str>>(values: &[S]) -> bool {
    values.iter().any(|v| v.as_ref().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_quote_detection() {
        assert!(contains_single_quote("O'Brien"));
        assert!(!contains_single_quote("Smith"));
    }

    #[test]
    fn email_formats() {
        assert!(is_email("user@example.com"));
        assert!(is_email("user.name+tag@mail.co.uk"));
        assert!(!is_email("invalid"));
        assert!(!is_email("@example.com"));
        assert!(!is_email("user@domain"));
        assert!(!is_email("user@domain.x"));
    }

    #[test]
    fn numeric_is_permissive() {
        assert!(is_numeric("42"));
        assert!(is_numeric("-3.5"));
        assert!(!is_numeric("abc"));
        assert!(!is_numeric("12a"));
    }

    #[test]
    fn empty_scan() {
        assert!(any_empty(&["a", "", "c"]));
        assert!(!any_empty(&["a", "b"]));
        assert!(!any_empty::<&str>(&[]));
    }
}
