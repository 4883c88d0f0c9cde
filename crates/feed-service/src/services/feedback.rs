//! Feedback service
//!
//! Handles feedback creation and listing.

use tracing::{info, instrument};

use feed_core::entities::NewFeedback;
use feed_core::DomainError;

use crate::dto::mappers::epoch_to_datetime;
use crate::dto::requests::CreateFeedbackRequest;
use crate::dto::responses::FeedbackResponse;

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Feedback service
pub struct FeedbackService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> FeedbackService<'a> {
    /// Create a new FeedbackService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List all feedback rows
    #[instrument(skip(self))]
    pub async fn list(&self) -> ServiceResult<Vec<FeedbackResponse>> {
        let feedbacks = self.ctx.feedback_repo().list_all().await?;
        Ok(feedbacks.into_iter().map(FeedbackResponse::from).collect())
    }

    /// Get one feedback by id
    #[instrument(skip(self))]
    pub async fn get(&self, id: i64) -> ServiceResult<FeedbackResponse> {
        let feedback = self
            .ctx
            .feedback_repo()
            .find_by_id(id)
            .await?
            .ok_or(DomainError::FeedbackNotFound(id))?;
        Ok(FeedbackResponse::from(feedback))
    }

    /// Create a new feedback, returning its generated id
    ///
    /// The score is not supplied: the store assigns the creation default
    /// and reconciliation owns it from then on.
    #[instrument(skip(self, request))]
    pub async fn create(&self, request: CreateFeedbackRequest) -> ServiceResult<i64> {
        let feedback = NewFeedback {
            source: request.source,
            text: request.text,
            grade: request.grade,
            datetime: epoch_to_datetime(request.datetime)?,
        };

        let id = self.ctx.feedback_repo().create(&feedback).await?;

        info!(feedback_id = id, grade = feedback.grade, "Feedback created");

        Ok(id)
    }
}
