//! Feedback entity - a top-level user-submitted item

use chrono::{DateTime, Utc};

/// Feedback entity
///
/// `score` is a derived value: it is only guaranteed to reflect recorded
/// reactions after a reconciliation pass. Between passes it is advisory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    pub id: i64,
    /// Originating address of the submitter, at most 15 characters
    pub source: String,
    /// Free text, at most 250 characters
    pub text: Option<String>,
    /// Client-supplied rating, 32 bits wide like its column
    pub grade: i32,
    /// Net popularity, starts at 1 and is refreshed by reconciliation
    pub score: i64,
    /// Client-supplied timestamp, stored as-is
    pub datetime: DateTime<Utc>,
}

/// Score a freshly created feedback row starts with
pub const FEEDBACK_SCORE_DEFAULT: i64 = 1;

/// Fields of a feedback row that has not been inserted yet
///
/// The id and the score default are assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewFeedback {
    pub source: String,
    pub text: Option<String>,
    pub grade: i32,
    pub datetime: DateTime<Utc>,
}
