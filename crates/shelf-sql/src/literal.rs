//! Literal-formatting helpers.
//!
//! The renderer emits fragments verbatim, so string literals must be
//! wrapped before they are added to a specification. Values containing a
//! single quote must be rejected upstream (see `shelf-validate`) — this
//! helper wraps, it does not escape.

/// Wraps a string in single quotes for use as a SQL literal fragment.
///
/// ```rust
/// assert_eq!(shelf_sql::quoted("Smith"), "'Smith'");
/// ```
#[must_use]
pub fn quoted(s: &str) -> String {
    format!("'{s}'")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_without_escaping() {
        assert_eq!(quoted("Dune"), "'Dune'");
        assert_eq!(quoted(""), "''");
    }
}
