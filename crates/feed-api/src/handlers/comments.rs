//! Comment handlers
//!
//! Endpoints for fetching and creating comments.

use axum::{
    extract::{Path, State},
    Json,
};
use feed_service::{CommentResponse, CommentService, CreateCommentRequest};

use crate::extractors::ValidatedJson;
use crate::response::{ApiError, ApiResult, Created};
use crate::state::AppState;

/// Create a comment
///
/// POST /comment
pub async fn create_comment(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateCommentRequest>,
) -> ApiResult<Created> {
    let service = CommentService::new(state.service_context());
    let id = service.create(request).await?;
    Ok(Created(id.to_string()))
}

/// Get one comment
///
/// GET /comment/{comment_id}
pub async fn get_comment(
    State(state): State<AppState>,
    Path(comment_id): Path<String>,
) -> ApiResult<Json<CommentResponse>> {
    let comment_id = comment_id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid comment_id format"))?;

    let service = CommentService::new(state.service_context());
    let comment = service.get(comment_id).await?;
    Ok(Json(comment))
}
