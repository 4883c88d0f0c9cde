//! Resource resolver
//!
//! Maps an already-parsed (kind, id) pair to a concrete row lookup. The
//! kind comes from the request path segment, never from the id: feedback
//! and comment ids are independent sequences and may collide numerically.

use tracing::instrument;

use feed_core::entities::{Comment, Feedback};
use feed_core::value_objects::ResourceKind;
use feed_core::DomainError;

use super::context::ServiceContext;
use super::error::ServiceResult;

/// A row resolved through the kind-directed lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedResource {
    Feedback(Feedback),
    Comment(Comment),
}

impl ResolvedResource {
    /// The kind this resource was resolved as
    pub fn kind(&self) -> ResourceKind {
        match self {
            Self::Feedback(_) => ResourceKind::Feedback,
            Self::Comment(_) => ResourceKind::Comment,
        }
    }

    /// The resolved row's id
    pub fn id(&self) -> i64 {
        match self {
            Self::Feedback(f) => f.id,
            Self::Comment(c) => c.id,
        }
    }
}

/// Resource resolver service
pub struct ResolverService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ResolverService<'a> {
    /// Create a new ResolverService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Resolve a (kind, id) pair to the row it names
    ///
    /// Missing row → not-found. A duplicate primary key surfaces from the
    /// repository as an integrity violation and is passed through untouched;
    /// it is fatal, not a retry case.
    #[instrument(skip(self))]
    pub async fn resolve(&self, kind: ResourceKind, id: i64) -> ServiceResult<ResolvedResource> {
        match kind {
            ResourceKind::Feedback => self
                .ctx
                .feedback_repo()
                .find_by_id(id)
                .await?
                .map(ResolvedResource::Feedback)
                .ok_or_else(|| DomainError::not_found(kind, id).into()),
            ResourceKind::Comment => self
                .ctx
                .comment_repo()
                .find_by_id(id)
                .await?
                .map(ResolvedResource::Comment)
                .ok_or_else(|| DomainError::not_found(kind, id).into()),
        }
    }

    /// Check that a (kind, id) pair names an existing row
    ///
    /// Same lookup as `resolve`, with the target-flavored error used by the
    /// reaction recorder.
    #[instrument(skip(self))]
    pub async fn ensure_target_exists(&self, kind: ResourceKind, id: i64) -> ServiceResult<()> {
        let exists = match kind {
            ResourceKind::Feedback => self.ctx.feedback_repo().find_by_id(id).await?.is_some(),
            ResourceKind::Comment => self.ctx.comment_repo().find_by_id(id).await?.is_some(),
        };
        if exists {
            Ok(())
        } else {
            Err(DomainError::TargetNotFound { kind, id }.into())
        }
    }
}
