//! PostgreSQL implementation of CommentRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use feed_core::entities::{Comment, NewComment};
use feed_core::traits::{CommentRepository, RepoResult};
use feed_core::value_objects::ResourceKind;
use feed_core::DomainError;

use crate::models::CommentModel;

use super::error::{map_db_error, map_fk_violation};

/// PostgreSQL implementation of CommentRepository
#[derive(Clone)]
pub struct PgCommentRepository {
    pool: PgPool,
}

impl PgCommentRepository {
    /// Create a new PgCommentRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CommentRepository for PgCommentRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Comment>> {
        let rows = sqlx::query_as::<_, CommentModel>(
            r#"
            SELECT id, target, source, text, score, datetime
            FROM comments
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        if rows.len() > 1 {
            return Err(DomainError::DuplicateId {
                kind: ResourceKind::Comment,
                id,
            });
        }

        Ok(rows.into_iter().next().map(Comment::from))
    }

    #[instrument(skip(self))]
    async fn list_all(&self) -> RepoResult<Vec<Comment>> {
        let rows = sqlx::query_as::<_, CommentModel>(
            r#"
            SELECT id, target, source, text, score, datetime
            FROM comments
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Comment::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_by_feedback(&self, feedback_id: i64) -> RepoResult<Vec<Comment>> {
        let rows = sqlx::query_as::<_, CommentModel>(
            r#"
            SELECT id, target, source, text, score, datetime
            FROM comments
            WHERE target = $1
            ORDER BY id
            "#,
        )
        .bind(feedback_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Comment::from).collect())
    }

    #[instrument(skip(self, comment))]
    async fn create(&self, comment: &NewComment) -> RepoResult<i64> {
        let target = comment.target;
        let id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO comments (target, source, text, datetime)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(comment.target)
        .bind(&comment.source)
        .bind(&comment.text)
        .bind(comment.datetime)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_fk_violation(e, || DomainError::FeedbackNotFound(target)))?;

        Ok(id)
    }

    #[instrument(skip(self))]
    async fn recompute_scores(&self) -> RepoResult<u64> {
        // Same shape as the feedback pass, but comment scores are the plain
        // reaction sum with no base offset. The asymmetry is intentional.
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let result = sqlx::query(
            r#"
            UPDATE comments
            SET score = totals.total
            FROM (
                SELECT cmt_id, SUM(value) AS total
                FROM reactions
                WHERE cmt_id IS NOT NULL
                GROUP BY cmt_id
            ) AS totals
            WHERE comments.id = totals.cmt_id
            "#,
        )
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        tx.commit().await.map_err(map_db_error)?;

        Ok(result.rows_affected())
    }
}
