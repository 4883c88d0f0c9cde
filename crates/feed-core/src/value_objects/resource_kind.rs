//! Resource kind - which reactable table a request refers to
//!
//! Feedback and comment ids live in independent id spaces and may collide
//! numerically, so the kind is resolved once from the request path and
//! threaded explicitly through resolver and recorder calls.

use std::fmt;

/// The two resource kinds that can be looked up and reacted to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Feedback,
    Comment,
}

impl ResourceKind {
    /// Score a row starts from before any reactions are summed in.
    ///
    /// Feedback scores accumulate on top of 1, comment scores on top of 0.
    /// The asymmetry mirrors the differing column defaults of the schema.
    #[inline]
    pub const fn base_offset(self) -> i64 {
        match self {
            Self::Feedback => 1,
            Self::Comment => 0,
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Feedback => write!(f, "feedback"),
            Self::Comment => write!(f, "comment"),
        }
    }
}
