//! Row validation against an ordered set of column rules.

use crate::checks::any_empty;
use crate::column::ColumnRule;
use crate::error::ValidationError;

/// Validates positionally-ordered row values against per-column rules.
///
/// Rules accumulate in table-definition order; a validator is typically
/// configured once per table shape and reused for every write against
/// that table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowValidator {
    rules: Vec<ColumnRule>,
}

impl RowValidator {
    /// Creates a validator with no rules.
    #[must_use]
    pub const fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Appends a column rule.
    #[must_use]
    pub fn column(mut self, rule: ColumnRule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Appends several column rules, preserving order.
    #[must_use]
    pub fn columns(mut self, rules: impl IntoIterator<Item = ColumnRule>) -> Self {
        self.rules.extend(rules);
        self
    }

    /// Returns the configured rules in order.
    #[must_use]
    pub fn rules(&self) -> &[ColumnRule] {
        &self.rules
    }

    /// Validates one row of values, position *i* against rule *i*.
    ///
    /// The whole row is scanned for empty values before any per-column
    /// rule runs; per-column violations are then reported in column
    /// order.
    ///
    /// # Errors
    ///
    /// - [`ValidationError::NoColumns`] if no rules are configured;
    /// - [`ValidationError::ShapeMismatch`] if the value count differs
    ///   from the rule count;
    /// - [`ValidationError::Empty`] if any value is the empty string;
    /// - otherwise, the first per-column violation.
    pub fn validate_row<S: AsRef<str>>(&self, values: &[S]) -> Result<(), ValidationError> {
        if self.rules.is_empty() {
            return Err(ValidationError::NoColumns);
        }
        if values.len() != self.rules.len() {
            return Err(ValidationError::ShapeMismatch {
                expected: self.rules.len(),
                actual: values.len(),
            });
        }
        if any_empty(values) {
            // Counts match, so the first empty position names its column.
            let index = values
                .iter()
                .position(|v| v.as_ref().is_empty())
                .unwrap_or(0);
            return Err(ValidationError::Empty {
                column: String::from(self.rules[index].name()),
            });
        }

        let violations: Vec<ValidationError> = self
            .rules
            .iter()
            .zip(values)
            .filter_map(|(rule, value)| rule.check(value.as_ref()).err())
            .collect();

        match violations.into_iter().next() {
            Some(first) => Err(first),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn author_validator() -> RowValidator {
        RowValidator::new()
            .column(ColumnRule::integer("AUTHOR_ID", 5))
            .column(ColumnRule::text("FIRST_NAME", 20))
            .column(ColumnRule::text("LAST_NAME", 30))
    }

    #[test]
    fn accepts_a_well_formed_row() {
        let validator = author_validator();
        assert!(validator.validate_row(&["7", "Frank", "Herbert"]).is_ok());
    }

    #[test]
    fn rejects_with_no_rules_configured() {
        let validator = RowValidator::new();
        assert_eq!(
            validator.validate_row(&["x"]).unwrap_err(),
            ValidationError::NoColumns
        );
    }

    #[test]
    fn rejects_shape_mismatch() {
        let validator = author_validator();
        assert_eq!(
            validator.validate_row(&["7", "Frank"]).unwrap_err(),
            ValidationError::ShapeMismatch {
                expected: 3,
                actual: 2
            }
        );
    }

    #[test]
    fn rejects_empty_values_before_per_column_checks() {
        let validator = author_validator();
        assert_eq!(
            validator.validate_row(&["7", "", "O'Brien"]).unwrap_err(),
            ValidationError::Empty {
                column: "FIRST_NAME".into()
            }
        );
    }

    #[test]
    fn reports_the_first_violating_column() {
        let validator = author_validator();
        assert_eq!(
            validator
                .validate_row(&["abc", "Frank", "O'Brien"])
                .unwrap_err(),
            ValidationError::NotNumeric {
                column: "AUTHOR_ID".into()
            }
        );
    }

    #[test]
    fn quoted_text_is_rejected() {
        let validator = RowValidator::new().column(ColumnRule::text("LAST_NAME", 10));
        assert_eq!(
            validator.validate_row(&["O'Brien"]).unwrap_err(),
            ValidationError::QuoteRejected {
                column: "LAST_NAME".into()
            }
        );
    }

    #[test]
    fn integer_scenarios() {
        let validator = RowValidator::new().column(ColumnRule::integer("COPIES", 5));
        assert!(validator.validate_row(&["42"]).is_ok());
        assert!(validator.validate_row(&["abc"]).is_err());
    }

    #[test]
    fn owned_values_validate_too() {
        let validator = RowValidator::new().column(ColumnRule::text("TITLE", 40));
        let row = vec![String::from("Dune")];
        assert!(validator.validate_row(&row).is_ok());
    }
}
