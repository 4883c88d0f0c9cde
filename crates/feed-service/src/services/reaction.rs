//! Reaction service
//!
//! Records +1/-1 reactions against a feedback or a comment. The recorder
//! never touches the target's score: reconciliation is the sole source of
//! truth for it, so a reader must not expect the stored score to reflect
//! a reaction immediately after the 201.

use tracing::{info, instrument};

use feed_core::entities::NewReaction;
use feed_core::value_objects::{ReactionTarget, ReactionValue, ResourceKind};
use feed_core::DomainError;

use crate::dto::mappers::epoch_to_datetime;
use crate::dto::requests::ReactionRequest;
use crate::dto::responses::ReactionResponse;

use super::context::ServiceContext;
use super::error::ServiceResult;
use super::resolver::ResolverService;

/// Reaction service
pub struct ReactionService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ReactionService<'a> {
    /// Create a new ReactionService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Record a reaction against the (kind, id) the request path named
    ///
    /// Preconditions, checked in order:
    /// - the value is -1 or +1, otherwise nothing is written and the
    ///   caller sees a validation error;
    /// - the target exists, otherwise nothing is written and the caller
    ///   sees not-found. The insert itself re-checks via the foreign key,
    ///   so a target deleted between resolution and insert still cannot
    ///   leave a dangling reaction.
    #[instrument(skip(self, request))]
    pub async fn record(
        &self,
        kind: ResourceKind,
        target_id: i64,
        request: ReactionRequest,
    ) -> ServiceResult<i64> {
        let value = ReactionValue::try_new(request.value)
            .map_err(|_| DomainError::InvalidReactionValue(request.value))?;

        let resolver = ResolverService::new(self.ctx);
        resolver.ensure_target_exists(kind, target_id).await?;

        let reaction = NewReaction {
            target: ReactionTarget::new(kind, target_id),
            source: request.source,
            value,
            datetime: epoch_to_datetime(request.datetime)?,
        };

        let id = self.ctx.reaction_repo().create(&reaction).await?;

        info!(
            reaction_id = id,
            kind = %kind,
            target_id,
            value = %value,
            "Reaction recorded"
        );

        Ok(id)
    }

    /// Bulk scan of all recorded reactions
    #[instrument(skip(self))]
    pub async fn list(&self) -> ServiceResult<Vec<ReactionResponse>> {
        let reactions = self.ctx.reaction_repo().list_all().await?;
        Ok(reactions.into_iter().map(ReactionResponse::from).collect())
    }
}
