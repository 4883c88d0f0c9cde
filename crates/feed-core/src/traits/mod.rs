//! Repository traits (ports)

mod repositories;

pub use repositories::{CommentRepository, FeedbackRepository, ReactionRepository, RepoResult};
