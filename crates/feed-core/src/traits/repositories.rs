//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;

use crate::entities::{Comment, Feedback, NewComment, NewFeedback, NewReaction, Reaction};
use crate::error::DomainError;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Feedback Repository
// ============================================================================

#[async_trait]
pub trait FeedbackRepository: Send + Sync {
    /// Find feedback by id
    ///
    /// More than one row for the same id is a broken primary key and
    /// surfaces as `DomainError::DuplicateId`.
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Feedback>>;

    /// List all feedback rows
    async fn list_all(&self) -> RepoResult<Vec<Feedback>>;

    /// Insert a new feedback row, returning its generated id
    async fn create(&self, feedback: &NewFeedback) -> RepoResult<i64>;

    /// Recompute scores for every feedback row with at least one reaction
    ///
    /// Set-based and idempotent: `score = 1 + SUM(value)` over referencing
    /// reactions, applied all-or-nothing. Rows without reactions keep their
    /// creation-time default. Returns the number of rows updated.
    async fn recompute_scores(&self) -> RepoResult<u64>;
}

// ============================================================================
// Comment Repository
// ============================================================================

#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Find comment by id
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Comment>>;

    /// List all comment rows
    async fn list_all(&self) -> RepoResult<Vec<Comment>>;

    /// List comments attached to one feedback
    async fn find_by_feedback(&self, feedback_id: i64) -> RepoResult<Vec<Comment>>;

    /// Insert a new comment row, returning its generated id
    ///
    /// The referenced feedback must exist; a foreign-key violation maps to
    /// `DomainError::FeedbackNotFound`.
    async fn create(&self, comment: &NewComment) -> RepoResult<i64>;

    /// Recompute scores for every comment row with at least one reaction
    ///
    /// Same contract as the feedback variant, except the sum starts at 0.
    async fn recompute_scores(&self) -> RepoResult<u64>;
}

// ============================================================================
// Reaction Repository
// ============================================================================

#[async_trait]
pub trait ReactionRepository: Send + Sync {
    /// Insert a new reaction row, returning its generated id
    ///
    /// Reactions are insert-only. The targeted row must exist when the
    /// insert commits; a foreign-key violation maps to
    /// `DomainError::TargetNotFound`.
    async fn create(&self, reaction: &NewReaction) -> RepoResult<i64>;

    /// Bulk scan of all reaction rows
    async fn list_all(&self) -> RepoResult<Vec<Reaction>>;
}
