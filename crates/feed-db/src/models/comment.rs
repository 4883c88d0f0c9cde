//! Comment database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the comments table
#[derive(Debug, Clone, FromRow)]
pub struct CommentModel {
    pub id: i64,
    pub target: i64,
    pub source: String,
    pub text: Option<String>,
    pub score: i32,
    pub datetime: DateTime<Utc>,
}
