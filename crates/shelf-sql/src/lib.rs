//! # shelf-sql
//!
//! Statement specification values rendered to literal SQL text.
//!
//! A [`Statement`] is an immutable description of one CRUD statement:
//! the target table, column names, pre-formatted condition and value
//! fragments, orderings and the DISTINCT flag. Rendering is a pure
//! function of the value, so specifications can be cloned, shared and
//! rendered any number of times.
//!
//! ```rust
//! use shelf_sql::Statement;
//!
//! let sql = Statement::select()
//!     .table("AUTHOR")
//!     .columns(&["FIRST_NAME", "LAST_NAME"])
//!     .condition("LAST_NAME = 'Smith'")
//!     .render()?;
//!
//! assert_eq!(sql, "SELECT FIRST_NAME,LAST_NAME FROM AUTHOR  WHERE LAST_NAME = 'Smith'");
//! # Ok::<(), shelf_sql::RenderError>(())
//! ```
//!
//! The renderer produces literal text: condition and value fragments must
//! already be quoted by the caller (see [`quoted`]). Pair this crate with
//! `shelf-validate`, which rejects embedded single quotes before a value
//! reaches a statement.

pub mod error;
pub mod literal;
pub mod render;
pub mod statement;

pub use error::RenderError;
pub use literal::quoted;
pub use render::RenderOptions;
pub use statement::{Statement, StatementKind};
