//! # shelf-validate
//!
//! Per-column validation of row values before they reach the database.
//!
//! A [`RowValidator`] holds one [`ColumnRule`] per table column, in
//! table-definition order. A row of input values validates positionally:
//! value *i* against rule *i*. Failures are structured errors naming the
//! offending column and rule — presentation is entirely the caller's
//! responsibility.
//!
//! ```rust
//! use shelf_validate::{ColumnRule, RowValidator, ValidationError};
//!
//! let validator = RowValidator::new()
//!     .column(ColumnRule::text("LAST_NAME", 30))
//!     .column(ColumnRule::integer("AUTHOR_ID", 5));
//!
//! assert!(validator.validate_row(&["Herbert", "42"]).is_ok());
//!
//! let err = validator.validate_row(&["O'Brien", "42"]).unwrap_err();
//! assert_eq!(
//!     err,
//!     ValidationError::QuoteRejected { column: "LAST_NAME".into() }
//! );
//! ```
//!
//! Text rules reject embedded single quotes because the companion
//! renderer emits literal text; a quote that slipped through would break
//! out of its literal.

pub mod checks;
pub mod column;
pub mod engine;
pub mod error;

pub use checks::{any_empty, contains_single_quote, is_email, is_numeric};
pub use column::{ColumnKind, ColumnRule};
pub use engine::RowValidator;
pub use error::ValidationError;
