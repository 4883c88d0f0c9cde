//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output. Each is the
//! flat key→value view of one stored row.

use chrono::{DateTime, Utc};
use serde::Serialize;

// ============================================================================
// Feedback Responses
// ============================================================================

/// Feedback row view
#[derive(Debug, Clone, Serialize)]
pub struct FeedbackResponse {
    pub id: i64,
    pub source: String,
    pub text: Option<String>,
    pub grade: i32,
    /// Advisory between reconciliation passes
    pub score: i64,
    pub datetime: DateTime<Utc>,
}

// ============================================================================
// Comment Responses
// ============================================================================

/// Comment row view
#[derive(Debug, Clone, Serialize)]
pub struct CommentResponse {
    pub id: i64,
    pub target: i64,
    pub source: String,
    pub text: Option<String>,
    /// Advisory between reconciliation passes
    pub score: i64,
    pub datetime: DateTime<Utc>,
}

// ============================================================================
// Reaction Responses
// ============================================================================

/// Reaction row view
///
/// Serialized with both foreign-key columns (exactly one non-null),
/// matching the stored shape.
#[derive(Debug, Clone, Serialize)]
pub struct ReactionResponse {
    pub id: i64,
    pub fb_id: Option<i64>,
    pub cmt_id: Option<i64>,
    pub source: String,
    pub value: i64,
    pub datetime: DateTime<Utc>,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Liveness response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self { status: "ok" }
    }
}
