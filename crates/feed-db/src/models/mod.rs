//! Database models - row representations with SQLx FromRow derives

mod comment;
mod feedback;
mod reaction;

pub use comment::CommentModel;
pub use feedback::FeedbackModel;
pub use reaction::ReactionModel;
