//! Feedback database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the feedbacks table
#[derive(Debug, Clone, FromRow)]
pub struct FeedbackModel {
    pub id: i64,
    pub source: String,
    pub text: Option<String>,
    pub grade: i32,
    pub score: i32,
    pub datetime: DateTime<Utc>,
}
