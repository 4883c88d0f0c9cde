//! Comment entity - a reply attached to exactly one feedback

use chrono::{DateTime, Utc};

/// Comment entity
///
/// Always belongs to exactly one feedback (`target`). As with feedback,
/// `score` is advisory between reconciliation passes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id: i64,
    /// Id of the feedback this comment replies to
    pub target: i64,
    pub source: String,
    pub text: Option<String>,
    /// Net popularity, refreshed by reconciliation
    pub score: i64,
    /// Client-supplied timestamp, stored as-is
    pub datetime: DateTime<Utc>,
}

/// Score a freshly created comment row starts with
///
/// Comment rows default to 1 like feedback rows, but reconciliation sums
/// reactions on top of 0 for comments. The schema asymmetry is deliberate.
pub const COMMENT_SCORE_DEFAULT: i64 = 1;

/// Fields of a comment row that has not been inserted yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewComment {
    pub target: i64,
    pub source: String,
    pub text: Option<String>,
    pub datetime: DateTime<Utc>,
}
