//! Column rules.

use crate::checks::{contains_single_quote, is_email, is_numeric};
use crate::error::ValidationError;

/// The data kind a column stores.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    /// Character data.
    Text,
    /// Numeric data.
    Integer,
}

/// The validation rule bundle for one table column.
///
/// Rules are positional: the `RowValidator` pairs rule *i* with value *i*
/// of each submitted row.
///
/// # Example
///
/// ```rust
/// use shelf_validate::ColumnRule;
///
/// let isbn = ColumnRule::text("ISBN", 13).exact();
/// assert!(isbn.check("9780441013593").is_ok());
/// assert!(isbn.check("1234").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnRule {
    kind: ColumnKind,
    name: String,
    length_limit: usize,
    exact: bool,
    email: bool,
}

impl ColumnRule {
    /// Creates a rule for a text column with a maximum length.
    #[must_use]
    pub fn text(name: &str, length_limit: usize) -> Self {
        Self {
            kind: ColumnKind::Text,
            name: String::from(name),
            length_limit,
            exact: false,
            email: false,
        }
    }

    /// Creates a rule for an integer column with a maximum length.
    #[must_use]
    pub fn integer(name: &str, length_limit: usize) -> Self {
        Self {
            kind: ColumnKind::Integer,
            name: String::from(name),
            length_limit,
            exact: false,
            email: false,
        }
    }

    /// Requires the value length to equal the limit instead of being
    /// bounded by it (fixed-width fields).
    #[must_use]
    pub const fn exact(mut self) -> Self {
        self.exact = true;
        self
    }

    /// Requires the value to be a well-formed email address. Only
    /// consulted for text columns.
    #[must_use]
    pub const fn email(mut self) -> Self {
        self.email = true;
        self
    }

    /// Returns the column name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the column kind.
    #[must_use]
    pub const fn kind(&self) -> ColumnKind {
        self.kind
    }

    /// Returns the length limit.
    #[must_use]
    pub const fn length_limit(&self) -> usize {
        self.length_limit
    }

    /// Checks a single value against this rule.
    ///
    /// # Errors
    ///
    /// Returns the first violated rule category, naming this column.
    pub fn check(&self, value: &str) -> Result<(), ValidationError> {
        if self.exact {
            if value.len() != self.length_limit {
                return Err(ValidationError::WrongLength {
                    column: self.name.clone(),
                    limit: self.length_limit,
                });
            }
        } else if value.len() > self.length_limit {
            return Err(ValidationError::TooLong {
                column: self.name.clone(),
                limit: self.length_limit,
            });
        }

        match self.kind {
            ColumnKind::Text => {
                if contains_single_quote(value) {
                    return Err(ValidationError::QuoteRejected {
                        column: self.name.clone(),
                    });
                }
                if self.email && !is_email(value) {
                    return Err(ValidationError::BadEmail {
                        column: self.name.clone(),
                    });
                }
            }
            ColumnKind::Integer => {
                if !is_numeric(value) {
                    return Err(ValidationError::NotNumeric {
                        column: self.name.clone(),
                    });
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_length_bound() {
        let rule = ColumnRule::text("TITLE", 5);
        assert!(rule.check("Dune").is_ok());
        assert_eq!(
            rule.check("Children of Dune").unwrap_err(),
            ValidationError::TooLong {
                column: "TITLE".into(),
                limit: 5
            }
        );
    }

    #[test]
    fn exact_length_requires_equality() {
        let rule = ColumnRule::text("ISBN", 4).exact();
        assert!(rule.check("1234").is_ok());
        assert!(rule.check("123").is_err());
        assert!(rule.check("12345").is_err());
    }

    #[test]
    fn text_rejects_embedded_quote() {
        let rule = ColumnRule::text("LAST_NAME", 10);
        assert_eq!(
            rule.check("O'Brien").unwrap_err(),
            ValidationError::QuoteRejected {
                column: "LAST_NAME".into()
            }
        );
    }

    #[test]
    fn email_rule() {
        let rule = ColumnRule::text("EMAIL", 60).email();
        assert!(rule.check("jane@example.com").is_ok());
        assert_eq!(
            rule.check("jane@nowhere").unwrap_err(),
            ValidationError::BadEmail {
                column: "EMAIL".into()
            }
        );
    }

    #[test]
    fn integer_rule_accepts_numbers_only() {
        let rule = ColumnRule::integer("AUTHOR_ID", 5);
        assert!(rule.check("42").is_ok());
        assert!(rule.check("3.25").is_ok());
        assert_eq!(
            rule.check("abc").unwrap_err(),
            ValidationError::NotNumeric {
                column: "AUTHOR_ID".into()
            }
        );
    }
}
