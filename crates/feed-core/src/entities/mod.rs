//! Domain entities - core business objects

mod comment;
mod feedback;
mod reaction;

pub use comment::{Comment, NewComment, COMMENT_SCORE_DEFAULT};
pub use feedback::{Feedback, NewFeedback, FEEDBACK_SCORE_DEFAULT};
pub use reaction::{NewReaction, Reaction};
