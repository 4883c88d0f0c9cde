//! Score reconciliation service
//!
//! The system's sole consistency-repair mechanism: recomputes the
//! denormalized score columns from raw reaction rows. Decoupled from the
//! write path so reaction latency never pays for aggregation.

use serde::Serialize;
use tracing::{info, instrument};

use feed_core::value_objects::ResourceKind;

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Per-kind row counts from one reconciliation pass
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct ReconcileReport {
    pub feedbacks_updated: u64,
    pub comments_updated: u64,
}

/// Score reconciliation service
pub struct ReconcileService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ReconcileService<'a> {
    /// Create a new ReconcileService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Recompute scores for one kind
    ///
    /// Runs as a single transaction in the store: either every affected
    /// row gets its recomputed score or none does. Idempotent for a fixed
    /// set of reactions. The pass reflects reactions committed strictly
    /// before it started; reactions committed concurrently are picked up
    /// by the next pass.
    #[instrument(skip(self))]
    pub async fn recompute(&self, kind: ResourceKind) -> ServiceResult<u64> {
        let updated = match kind {
            ResourceKind::Feedback => self.ctx.feedback_repo().recompute_scores().await?,
            ResourceKind::Comment => self.ctx.comment_repo().recompute_scores().await?,
        };

        info!(kind = %kind, rows = updated, "Scores reconciled");

        Ok(updated)
    }

    /// Recompute scores for both kinds, one transaction each
    #[instrument(skip(self))]
    pub async fn recompute_all(&self) -> ServiceResult<ReconcileReport> {
        let feedbacks_updated = self.recompute(ResourceKind::Feedback).await?;
        let comments_updated = self.recompute(ResourceKind::Comment).await?;
        Ok(ReconcileReport {
            feedbacks_updated,
            comments_updated,
        })
    }
}
