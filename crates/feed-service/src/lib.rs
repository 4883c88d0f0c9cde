//! # feed-service
//!
//! Application layer containing business logic, services, and DTOs.

pub mod dto;
pub mod services;

// Re-export the service surface used by the API layer
pub use dto::{
    CommentResponse, CreateCommentRequest, CreateFeedbackRequest, FeedbackResponse,
    HealthResponse, ReactionRequest, ReactionResponse,
};
pub use services::{
    CommentService, FeedbackService, ReactionService, ReconcileReport, ReconcileService,
    ResolvedResource, ResolverService, ServiceContext, ServiceContextBuilder, ServiceError,
    ServiceResult,
};
