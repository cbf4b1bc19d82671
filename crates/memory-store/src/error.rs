//! Store error taxonomy.

use thiserror::Error;

/// Failures surfaced by store and search operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Category outside the fixed set.
    #[error("Invalid category: {0}")]
    InvalidCategory(String),

    /// Resolved path falls outside the storage root.
    #[error("Invalid path: must be within memory directory")]
    PathEscape(String),

    /// Operation targets a memory that does not exist.
    #[error("Memory not found: {0}")]
    NotFound(String),

    /// Create targets a slug that already has a file.
    #[error("Memory already exists: {0}")]
    AlreadyExists(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
