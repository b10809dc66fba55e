use thiserror::Error;

use crate::domain::faq::models::FaqId;

/// Top-level error for all FAQ-related operations
#[derive(Debug, Clone, Error)]
pub enum FaqError {
    #[error("FAQ not found: {0}")]
    NotFound(FaqId),

    #[error("FAQ already exists: {0}")]
    AlreadyExists(FaqId),

    #[error("Database error: {0}")]
    DatabaseError(String),
}
