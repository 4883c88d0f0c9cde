//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input
//! validation. Unknown fields are rejected at deserialization rather than
//! silently dropped, and timestamps arrive as epoch seconds.

use serde::{Deserialize, Deserializer};
use validator::Validate;

// ============================================================================
// Feedback Requests
// ============================================================================

/// Feedback creation request
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct CreateFeedbackRequest {
    #[validate(length(min = 1, max = 15, message = "Source must be 1-15 characters"))]
    pub source: String,

    #[validate(length(max = 250, message = "Text must be at most 250 characters"))]
    pub text: Option<String>,

    /// Client-supplied rating. Typed to the column width, so a value
    /// outside 32-bit range fails deserialization instead of narrowing.
    pub grade: i32,

    /// Client-side timestamp in epoch seconds, accepted as-is
    pub datetime: i64,
}

// ============================================================================
// Comment Requests
// ============================================================================

/// Comment creation request
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct CreateCommentRequest {
    /// Id of the feedback this comment replies to
    pub target: i64,

    #[validate(length(min = 1, max = 15, message = "Source must be 1-15 characters"))]
    pub source: String,

    #[validate(length(max = 250, message = "Text must be at most 250 characters"))]
    pub text: Option<String>,

    /// Client-side timestamp in epoch seconds
    pub datetime: i64,
}

// ============================================================================
// Reaction Requests
// ============================================================================

/// Reaction request (PUT against a feedback or comment id)
///
/// Clients send `value` as either a JSON number or a numeric string;
/// range checking (-1 or 1) happens in the recorder, not here, so an
/// out-of-range value maps to the reaction-specific 400 rather than a
/// generic deserialization failure.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct ReactionRequest {
    #[serde(deserialize_with = "int_or_string")]
    pub value: i64,

    #[validate(length(min = 1, max = 15, message = "Source must be 1-15 characters"))]
    pub source: String,

    /// Client-side timestamp in epoch seconds
    pub datetime: i64,
}

/// Accept an integer given as a JSON number or a numeric string
fn int_or_string<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum IntOrString {
        Int(i64),
        Str(String),
    }

    match IntOrString::deserialize(deserializer)? {
        IntOrString::Int(n) => Ok(n),
        IntOrString::Str(s) => s
            .trim()
            .parse()
            .map_err(|_| serde::de::Error::custom(format!("invalid integer: {s:?}"))),
    }
}
