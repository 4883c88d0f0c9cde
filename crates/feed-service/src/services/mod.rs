//! Business logic services
//!
//! This module contains all service layer implementations that handle
//! business logic, validation, and orchestration of domain operations.

pub mod comment;
pub mod context;
pub mod error;
pub mod feedback;
pub mod reaction;
pub mod reconcile;
pub mod resolver;

#[cfg(test)]
pub(crate) mod test_support;

// Re-export all services for convenience
pub use comment::CommentService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use feedback::FeedbackService;
pub use reaction::ReactionService;
pub use reconcile::{ReconcileReport, ReconcileService};
pub use resolver::{ResolvedResource, ResolverService};
