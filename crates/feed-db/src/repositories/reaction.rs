//! PostgreSQL implementation of ReactionRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use feed_core::entities::{NewReaction, Reaction};
use feed_core::traits::{ReactionRepository, RepoResult};
use feed_core::DomainError;

use crate::models::ReactionModel;

use super::error::{map_db_error, map_fk_violation};

/// PostgreSQL implementation of ReactionRepository
#[derive(Clone)]
pub struct PgReactionRepository {
    pool: PgPool,
}

impl PgReactionRepository {
    /// Create a new PgReactionRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReactionRepository for PgReactionRepository {
    #[instrument(skip(self, reaction))]
    async fn create(&self, reaction: &NewReaction) -> RepoResult<i64> {
        // Single-statement insert: the foreign key on the populated column
        // is checked in the same transaction as the write, so the target
        // cannot vanish between resolution and insert. A violation maps to
        // target-not-found and no row is written.
        let target = reaction.target;
        let id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO reactions (fb_id, cmt_id, source, value, datetime)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id
            "#,
        )
        .bind(reaction.target.fb_id())
        .bind(reaction.target.cmt_id())
        .bind(&reaction.source)
        .bind(reaction.value.into_inner() as i32)
        .bind(reaction.datetime)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            map_fk_violation(e, || DomainError::TargetNotFound {
                kind: target.kind(),
                id: target.id(),
            })
        })?;

        Ok(id)
    }

    #[instrument(skip(self))]
    async fn list_all(&self) -> RepoResult<Vec<Reaction>> {
        let rows = sqlx::query_as::<_, ReactionModel>(
            r#"
            SELECT id, fb_id, cmt_id, source, value, datetime
            FROM reactions
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        rows.into_iter().map(Reaction::try_from).collect()
    }
}
