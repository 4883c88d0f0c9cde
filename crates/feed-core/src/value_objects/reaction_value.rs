//! Reaction value - an upvote or a downvote, nothing else

use std::fmt;

/// A validated reaction value, constrained to -1 or +1
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ReactionValue(i64);

impl ReactionValue {
    pub const UP: Self = Self(1);
    pub const DOWN: Self = Self(-1);

    /// Validate a raw integer into a reaction value
    pub const fn try_new(raw: i64) -> Result<Self, ReactionValueError> {
        match raw {
            1 | -1 => Ok(Self(raw)),
            other => Err(ReactionValueError::OutOfRange(other)),
        }
    }

    /// Get the inner integer (-1 or 1)
    #[inline]
    pub const fn into_inner(self) -> i64 {
        self.0
    }
}

impl fmt::Display for ReactionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error when a raw value is not -1 or +1
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ReactionValueError {
    #[error("reaction value must be -1 or 1, got {0}")]
    OutOfRange(i64),
}
