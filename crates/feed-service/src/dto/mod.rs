//! Data transfer objects for the REST surface

pub mod mappers;
pub mod requests;
pub mod responses;

pub use mappers::epoch_to_datetime;
pub use requests::{CreateCommentRequest, CreateFeedbackRequest, ReactionRequest};
pub use responses::{CommentResponse, FeedbackResponse, HealthResponse, ReactionResponse};
