//! Comment service
//!
//! Handles comment creation and per-feedback listing.

use tracing::{info, instrument};

use feed_core::entities::NewComment;
use feed_core::DomainError;

use crate::dto::mappers::epoch_to_datetime;
use crate::dto::requests::CreateCommentRequest;
use crate::dto::responses::CommentResponse;

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Comment service
pub struct CommentService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> CommentService<'a> {
    /// Create a new CommentService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Get one comment by id
    #[instrument(skip(self))]
    pub async fn get(&self, id: i64) -> ServiceResult<CommentResponse> {
        let comment = self
            .ctx
            .comment_repo()
            .find_by_id(id)
            .await?
            .ok_or(DomainError::CommentNotFound(id))?;
        Ok(CommentResponse::from(comment))
    }

    /// List comments attached to one feedback
    ///
    /// An empty result is a not-found: the surface treats "no comments"
    /// the same whether the feedback itself exists or not.
    #[instrument(skip(self))]
    pub async fn list_for_feedback(&self, feedback_id: i64) -> ServiceResult<Vec<CommentResponse>> {
        let comments = self.ctx.comment_repo().find_by_feedback(feedback_id).await?;
        if comments.is_empty() {
            return Err(DomainError::NoComments(feedback_id).into());
        }
        Ok(comments.into_iter().map(CommentResponse::from).collect())
    }

    /// Create a new comment, returning its generated id
    ///
    /// The targeted feedback must exist; the store's foreign key backs
    /// this and a violation maps to feedback-not-found.
    #[instrument(skip(self, request))]
    pub async fn create(&self, request: CreateCommentRequest) -> ServiceResult<i64> {
        let comment = NewComment {
            target: request.target,
            source: request.source,
            text: request.text,
            datetime: epoch_to_datetime(request.datetime)?,
        };

        let id = self.ctx.comment_repo().create(&comment).await?;

        info!(comment_id = id, target = comment.target, "Comment created");

        Ok(id)
    }
}
