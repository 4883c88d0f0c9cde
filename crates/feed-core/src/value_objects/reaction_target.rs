//! Reaction target - the one row a reaction is attached to
//!
//! The reactions table stores two nullable foreign keys (`fb_id`, `cmt_id`)
//! with exactly one set. In the domain that invariant is structural: a
//! `ReactionTarget` is a tagged union, so a reaction pointing at both or
//! neither table cannot be represented.

use super::ResourceKind;

/// The single feedback or comment a reaction refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReactionTarget {
    Feedback(i64),
    Comment(i64),
}

impl ReactionTarget {
    /// Build a target from an explicit kind and id
    pub const fn new(kind: ResourceKind, id: i64) -> Self {
        match kind {
            ResourceKind::Feedback => Self::Feedback(id),
            ResourceKind::Comment => Self::Comment(id),
        }
    }

    /// The kind of row this target points at
    #[inline]
    pub const fn kind(self) -> ResourceKind {
        match self {
            Self::Feedback(_) => ResourceKind::Feedback,
            Self::Comment(_) => ResourceKind::Comment,
        }
    }

    /// The id within the target kind's id space
    #[inline]
    pub const fn id(self) -> i64 {
        match self {
            Self::Feedback(id) | Self::Comment(id) => id,
        }
    }

    /// Value for the `fb_id` column (None unless the target is a feedback)
    #[inline]
    pub const fn fb_id(self) -> Option<i64> {
        match self {
            Self::Feedback(id) => Some(id),
            Self::Comment(_) => None,
        }
    }

    /// Value for the `cmt_id` column (None unless the target is a comment)
    #[inline]
    pub const fn cmt_id(self) -> Option<i64> {
        match self {
            Self::Feedback(_) => None,
            Self::Comment(id) => Some(id),
        }
    }
}
