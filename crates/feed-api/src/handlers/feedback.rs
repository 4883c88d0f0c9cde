//! Feedback handlers
//!
//! Endpoints for listing, fetching, and creating feedback.

use axum::{
    extract::{Path, State},
    Json,
};
use feed_service::{CommentResponse, CommentService, CreateFeedbackRequest, FeedbackResponse, FeedbackService};

use crate::extractors::ValidatedJson;
use crate::response::{ApiError, ApiResult, Created};
use crate::state::AppState;

/// List all feedbacks
///
/// GET /feedback
pub async fn list_feedbacks(State(state): State<AppState>) -> ApiResult<Json<Vec<FeedbackResponse>>> {
    let service = FeedbackService::new(state.service_context());
    let feedbacks = service.list().await?;
    Ok(Json(feedbacks))
}

/// Create a feedback
///
/// POST /feedback
pub async fn create_feedback(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateFeedbackRequest>,
) -> ApiResult<Created> {
    let service = FeedbackService::new(state.service_context());
    let id = service.create(request).await?;
    Ok(Created(id.to_string()))
}

/// Get one feedback
///
/// GET /feedback/{feedback_id}
pub async fn get_feedback(
    State(state): State<AppState>,
    Path(feedback_id): Path<String>,
) -> ApiResult<Json<FeedbackResponse>> {
    let feedback_id = feedback_id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid feedback_id format"))?;

    let service = FeedbackService::new(state.service_context());
    let feedback = service.get(feedback_id).await?;
    Ok(Json(feedback))
}

/// List the comments attached to a feedback
///
/// GET /feedback/{feedback_id}/comments
///
/// An empty comment list is reported as 404, whether or not the feedback
/// itself exists.
pub async fn get_feedback_comments(
    State(state): State<AppState>,
    Path(feedback_id): Path<String>,
) -> ApiResult<Json<Vec<CommentResponse>>> {
    let feedback_id = feedback_id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid feedback_id format"))?;

    let service = CommentService::new(state.service_context());
    let comments = service.list_for_feedback(feedback_id).await?;
    Ok(Json(comments))
}
