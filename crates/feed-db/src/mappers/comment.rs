//! Comment entity <-> model mapper

use feed_core::entities::Comment;

use crate::models::CommentModel;

/// Convert CommentModel to Comment entity
impl From<CommentModel> for Comment {
    fn from(model: CommentModel) -> Self {
        Comment {
            id: model.id,
            target: model.target,
            source: model.source,
            text: model.text,
            score: i64::from(model.score),
            datetime: model.datetime,
        }
    }
}
