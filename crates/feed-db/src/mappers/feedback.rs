//! Feedback entity <-> model mapper

use feed_core::entities::Feedback;

use crate::models::FeedbackModel;

/// Convert FeedbackModel to Feedback entity
impl From<FeedbackModel> for Feedback {
    fn from(model: FeedbackModel) -> Self {
        Feedback {
            id: model.id,
            source: model.source,
            text: model.text,
            grade: model.grade,
            score: i64::from(model.score),
            datetime: model.datetime,
        }
    }
}
