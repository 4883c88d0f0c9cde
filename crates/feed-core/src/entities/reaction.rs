//! Reaction entity - a +1/-1 vote cast against one feedback or comment

use chrono::{DateTime, Utc};

use crate::value_objects::{ReactionTarget, ReactionValue};

/// Reaction entity
///
/// Insert-only: reactions are never mutated or deleted. The `target`
/// union guarantees the row refers to exactly one feedback or comment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reaction {
    pub id: i64,
    pub target: ReactionTarget,
    pub source: String,
    pub value: ReactionValue,
    /// Client-supplied timestamp, stored as-is
    pub datetime: DateTime<Utc>,
}

/// Fields of a reaction row that has not been inserted yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewReaction {
    pub target: ReactionTarget,
    pub source: String,
    pub value: ReactionValue,
    pub datetime: DateTime<Utc>,
}
