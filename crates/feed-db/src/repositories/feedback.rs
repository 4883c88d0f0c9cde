//! PostgreSQL implementation of FeedbackRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use feed_core::entities::{Feedback, NewFeedback};
use feed_core::traits::{FeedbackRepository, RepoResult};
use feed_core::value_objects::ResourceKind;
use feed_core::DomainError;

use crate::models::FeedbackModel;

use super::error::map_db_error;

/// PostgreSQL implementation of FeedbackRepository
#[derive(Clone)]
pub struct PgFeedbackRepository {
    pool: PgPool,
}

impl PgFeedbackRepository {
    /// Create a new PgFeedbackRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FeedbackRepository for PgFeedbackRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Feedback>> {
        // fetch_all instead of fetch_optional so a broken primary key is
        // detected instead of silently picking one row
        let rows = sqlx::query_as::<_, FeedbackModel>(
            r#"
            SELECT id, source, text, grade, score, datetime
            FROM feedbacks
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        if rows.len() > 1 {
            return Err(DomainError::DuplicateId {
                kind: ResourceKind::Feedback,
                id,
            });
        }

        Ok(rows.into_iter().next().map(Feedback::from))
    }

    #[instrument(skip(self))]
    async fn list_all(&self) -> RepoResult<Vec<Feedback>> {
        let rows = sqlx::query_as::<_, FeedbackModel>(
            r#"
            SELECT id, source, text, grade, score, datetime
            FROM feedbacks
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Feedback::from).collect())
    }

    #[instrument(skip(self, feedback))]
    async fn create(&self, feedback: &NewFeedback) -> RepoResult<i64> {
        let id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO feedbacks (source, text, grade, datetime)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(&feedback.source)
        .bind(&feedback.text)
        .bind(feedback.grade)
        .bind(feedback.datetime)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(id)
    }

    #[instrument(skip(self))]
    async fn recompute_scores(&self) -> RepoResult<u64> {
        // One set-based statement inside a transaction: only rows with at
        // least one reaction are touched, and a failure leaves every prior
        // score intact. Feedback scores accumulate on top of 1.
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let result = sqlx::query(
            r#"
            UPDATE feedbacks
            SET score = 1 + totals.total
            FROM (
                SELECT fb_id, SUM(value) AS total
                FROM reactions
                WHERE fb_id IS NOT NULL
                GROUP BY fb_id
            ) AS totals
            WHERE feedbacks.id = totals.fb_id
            "#,
        )
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        tx.commit().await.map_err(map_db_error)?;

        Ok(result.rows_affected())
    }
}
