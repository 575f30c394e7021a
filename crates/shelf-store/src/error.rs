//! Error types for the store.

use thiserror::Error;

/// Store-level errors.
///
/// Only the write path surfaces these; read-side execution failures are
/// logged at the boundary and reported as empty results instead.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Database error from sqlx.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A row of values failed column validation.
    #[error(transparent)]
    Validation(#[from] shelf_validate::ValidationError),

    /// A statement specification could not be rendered.
    #[error(transparent)]
    Render(#[from] shelf_sql::RenderError),
}

/// Result type alias for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
