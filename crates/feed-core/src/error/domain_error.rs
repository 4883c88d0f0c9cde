//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::ResourceKind;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Feedback not found: {0}")]
    FeedbackNotFound(i64),

    #[error("Comment not found: {0}")]
    CommentNotFound(i64),

    #[error("Reaction target not found: {kind} {id}")]
    TargetNotFound { kind: ResourceKind, id: i64 },

    #[error("No comments for feedback: {0}")]
    NoComments(i64),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Reaction value must be -1 or 1, got {0}")]
    InvalidReactionValue(i64),

    #[error("Timestamp out of range: {0}")]
    InvalidTimestamp(i64),

    // =========================================================================
    // Integrity Violations
    // =========================================================================
    /// A primary-key lookup resolved more than one row. Structurally
    /// impossible while the store enforces uniqueness; fatal if it happens.
    #[error("Duplicate id in {kind} table: {id}")]
    DuplicateId { kind: ResourceKind, id: i64 },

    /// A stored reaction row referenced both or neither of its targets
    #[error("Reaction {0} violates target exclusivity")]
    AmbiguousReactionTarget(i64),

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            Self::FeedbackNotFound(_) => "UNKNOWN_FEEDBACK",
            Self::CommentNotFound(_) => "UNKNOWN_COMMENT",
            Self::TargetNotFound { .. } => "UNKNOWN_TARGET",
            Self::NoComments(_) => "NO_COMMENTS",
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::InvalidReactionValue(_) => "INVALID_REACTION_VALUE",
            Self::InvalidTimestamp(_) => "INVALID_TIMESTAMP",
            Self::DuplicateId { .. } => "DUPLICATE_ID",
            Self::AmbiguousReactionTarget(_) => "AMBIGUOUS_REACTION_TARGET",
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Create a not-found error for a resolved (kind, id) pair
    pub fn not_found(kind: ResourceKind, id: i64) -> Self {
        match kind {
            ResourceKind::Feedback => Self::FeedbackNotFound(id),
            ResourceKind::Comment => Self::CommentNotFound(id),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::FeedbackNotFound(_)
                | Self::CommentNotFound(_)
                | Self::TargetNotFound { .. }
                | Self::NoComments(_)
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_)
                | Self::InvalidReactionValue(_)
                | Self::InvalidTimestamp(_)
        )
    }

    /// Check if this is a broken store invariant.
    ///
    /// Integrity violations are never retried; they are logged as fatal
    /// and surfaced as a server error.
    pub fn is_integrity_violation(&self) -> bool {
        matches!(
            self,
            Self::DuplicateId { .. } | Self::AmbiguousReactionTarget(_)
        )
    }
}
