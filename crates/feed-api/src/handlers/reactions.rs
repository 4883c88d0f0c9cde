//! Reaction handlers
//!
//! PUT against a feedback or comment id records a reaction. The path
//! decides the kind; the id alone cannot, since feedback and comment ids
//! are independent sequences.

use axum::{
    extract::{Path, State},
    Json,
};
use feed_core::ResourceKind;
use feed_service::{ReactionRequest, ReactionResponse, ReactionService};

use crate::extractors::ValidatedJson;
use crate::response::{ApiError, ApiResult, Created};
use crate::state::AppState;

/// React to a feedback
///
/// PUT /feedback/{feedback_id}
pub async fn react_to_feedback(
    State(state): State<AppState>,
    Path(feedback_id): Path<String>,
    ValidatedJson(request): ValidatedJson<ReactionRequest>,
) -> ApiResult<Created> {
    record(state, ResourceKind::Feedback, &feedback_id, request).await
}

/// React to a comment
///
/// PUT /comment/{comment_id}
pub async fn react_to_comment(
    State(state): State<AppState>,
    Path(comment_id): Path<String>,
    ValidatedJson(request): ValidatedJson<ReactionRequest>,
) -> ApiResult<Created> {
    record(state, ResourceKind::Comment, &comment_id, request).await
}

/// List all reactions
///
/// GET /reaction
pub async fn list_reactions(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<ReactionResponse>>> {
    let service = ReactionService::new(state.service_context());
    let reactions = service.list().await?;
    Ok(Json(reactions))
}

async fn record(
    state: AppState,
    kind: ResourceKind,
    target_id: &str,
    request: ReactionRequest,
) -> ApiResult<Created> {
    let target_id = target_id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid target id format"))?;

    let service = ReactionService::new(state.service_context());
    let id = service.record(kind, target_id, request).await?;
    Ok(Created(id.to_string()))
}
