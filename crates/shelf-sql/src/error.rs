//! Error types for statement rendering.

use thiserror::Error;

use crate::statement::StatementKind;

/// Errors produced when rendering a statement specification.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum RenderError {
    /// Rendering was attempted before any table was registered.
    #[error("no table registered for {kind} statement")]
    MissingTable {
        /// The kind of the statement being rendered.
        kind: StatementKind,
    },
}

/// Result type alias for rendering operations.
pub type Result<T> = std::result::Result<T, RenderError>;
