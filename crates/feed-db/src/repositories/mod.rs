//! PostgreSQL repository implementations

mod comment;
mod error;
mod feedback;
mod reaction;

pub use comment::PgCommentRepository;
pub use feedback::PgFeedbackRepository;
pub use reaction::PgReactionRepository;
