//! Reaction entity <-> model mapper
//!
//! Unlike the other mappers this one is fallible: the stored row keeps
//! two nullable foreign keys, and a row with both or neither set cannot
//! be represented as a `ReactionTarget`. The CHECK constraint makes that
//! unreachable in practice; if it happens anyway it is an integrity
//! violation, not data to be coerced.

use feed_core::entities::Reaction;
use feed_core::value_objects::{ReactionTarget, ReactionValue};
use feed_core::DomainError;

use crate::models::ReactionModel;

impl TryFrom<ReactionModel> for Reaction {
    type Error = DomainError;

    fn try_from(model: ReactionModel) -> Result<Self, Self::Error> {
        let target = match (model.fb_id, model.cmt_id) {
            (Some(fb_id), None) => ReactionTarget::Feedback(fb_id),
            (None, Some(cmt_id)) => ReactionTarget::Comment(cmt_id),
            _ => return Err(DomainError::AmbiguousReactionTarget(model.id)),
        };

        let value = ReactionValue::try_new(i64::from(model.value))
            .map_err(|_| DomainError::InvalidReactionValue(i64::from(model.value)))?;

        Ok(Reaction {
            id: model.id,
            target,
            source: model.source,
            value,
            datetime: model.datetime,
        })
    }
}
