//! Route definitions
//!
//! The surface is flat: resource kind is a path segment, not a version
//! prefix, and the same numeric id can name a feedback on one branch and
//! a comment on the other.

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::{comments, feedback, health, reactions, reconcile};
use crate::state::AppState;

/// Create the main API router with all routes
pub fn create_router() -> Router<AppState> {
    Router::new()
        .merge(feedback_routes())
        .merge(comment_routes())
        .merge(reaction_routes())
        .merge(health_routes())
}

/// Feedback routes
fn feedback_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/feedback",
            get(feedback::list_feedbacks).post(feedback::create_feedback),
        )
        .route(
            "/feedback/:feedback_id",
            get(feedback::get_feedback).put(reactions::react_to_feedback),
        )
        .route(
            "/feedback/:feedback_id/comments",
            get(feedback::get_feedback_comments),
        )
}

/// Comment routes
fn comment_routes() -> Router<AppState> {
    Router::new()
        .route("/comment", post(comments::create_comment))
        .route(
            "/comment/:comment_id",
            get(comments::get_comment).put(reactions::react_to_comment),
        )
}

/// Reaction and reconciliation routes
fn reaction_routes() -> Router<AppState> {
    Router::new()
        .route("/reaction", get(reactions::list_reactions))
        .route("/test", get(reconcile::trigger_reconciliation))
}

/// Health check routes
fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}
