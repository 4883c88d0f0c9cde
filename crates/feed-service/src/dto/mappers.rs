//! Entity → response mappers and timestamp conversion

use chrono::{DateTime, Utc};

use feed_core::entities::{Comment, Feedback, Reaction};
use feed_core::DomainError;

use super::responses::{CommentResponse, FeedbackResponse, ReactionResponse};

/// Convert a client-supplied epoch-seconds timestamp to a calendar timestamp
///
/// Accepted as-is: out-of-range-for-the-domain or future timestamps are not
/// clamped. Only values chrono cannot represent at all are rejected.
pub fn epoch_to_datetime(secs: i64) -> Result<DateTime<Utc>, DomainError> {
    DateTime::from_timestamp(secs, 0).ok_or(DomainError::InvalidTimestamp(secs))
}

impl From<Feedback> for FeedbackResponse {
    fn from(entity: Feedback) -> Self {
        Self {
            id: entity.id,
            source: entity.source,
            text: entity.text,
            grade: entity.grade,
            score: entity.score,
            datetime: entity.datetime,
        }
    }
}

impl From<Comment> for CommentResponse {
    fn from(entity: Comment) -> Self {
        Self {
            id: entity.id,
            target: entity.target,
            source: entity.source,
            text: entity.text,
            score: entity.score,
            datetime: entity.datetime,
        }
    }
}

impl From<Reaction> for ReactionResponse {
    fn from(entity: Reaction) -> Self {
        Self {
            id: entity.id,
            fb_id: entity.target.fb_id(),
            cmt_id: entity.target.cmt_id(),
            source: entity.source,
            value: entity.value.into_inner(),
            datetime: entity.datetime,
        }
    }
}
