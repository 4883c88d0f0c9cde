//! Reaction database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the reactions table
///
/// The two nullable foreign keys are the stored shape of the domain's
/// tagged target union; the mapper enforces that exactly one is set.
#[derive(Debug, Clone, FromRow)]
pub struct ReactionModel {
    pub id: i64,
    pub fb_id: Option<i64>,
    pub cmt_id: Option<i64>,
    pub source: String,
    pub value: i32,
    pub datetime: DateTime<Utc>,
}
