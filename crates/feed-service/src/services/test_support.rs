//! In-memory repository implementations for service tests
//!
//! Mirror the Postgres semantics the services rely on: generated ids,
//! foreign-key checks on insert, and set-based score recomputation.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;

use feed_core::entities::{
    Comment, Feedback, NewComment, NewFeedback, NewReaction, Reaction, COMMENT_SCORE_DEFAULT,
    FEEDBACK_SCORE_DEFAULT,
};
use feed_core::traits::{CommentRepository, FeedbackRepository, ReactionRepository, RepoResult};
use feed_core::value_objects::{ReactionTarget, ResourceKind};
use feed_core::DomainError;

use super::context::{ServiceContext, ServiceContextBuilder};

#[derive(Default)]
struct MemStore {
    feedbacks: Vec<Feedback>,
    comments: Vec<Comment>,
    reactions: Vec<Reaction>,
    next_id: i64,
}

impl MemStore {
    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }
}

type SharedStore = Arc<Mutex<MemStore>>;

#[derive(Clone)]
struct MemFeedbackRepository(SharedStore);

#[async_trait]
impl FeedbackRepository for MemFeedbackRepository {
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Feedback>> {
        let store = self.0.lock().unwrap();
        Ok(store.feedbacks.iter().find(|f| f.id == id).cloned())
    }

    async fn list_all(&self) -> RepoResult<Vec<Feedback>> {
        Ok(self.0.lock().unwrap().feedbacks.clone())
    }

    async fn create(&self, feedback: &NewFeedback) -> RepoResult<i64> {
        let mut store = self.0.lock().unwrap();
        let id = store.next_id();
        store.feedbacks.push(Feedback {
            id,
            source: feedback.source.clone(),
            text: feedback.text.clone(),
            grade: feedback.grade,
            score: FEEDBACK_SCORE_DEFAULT,
            datetime: feedback.datetime,
        });
        Ok(id)
    }

    async fn recompute_scores(&self) -> RepoResult<u64> {
        let mut store = self.0.lock().unwrap();
        let sums: Vec<(i64, i64)> = store
            .feedbacks
            .iter()
            .filter_map(|f| {
                let referencing: Vec<i64> = store
                    .reactions
                    .iter()
                    .filter(|r| r.target == ReactionTarget::Feedback(f.id))
                    .map(|r| r.value.into_inner())
                    .collect();
                if referencing.is_empty() {
                    None
                } else {
                    let offset = ResourceKind::Feedback.base_offset();
                    Some((f.id, offset + referencing.iter().sum::<i64>()))
                }
            })
            .collect();
        let updated = sums.len() as u64;
        for (id, score) in sums {
            if let Some(f) = store.feedbacks.iter_mut().find(|f| f.id == id) {
                f.score = score;
            }
        }
        Ok(updated)
    }
}

#[derive(Clone)]
struct MemCommentRepository(SharedStore);

#[async_trait]
impl CommentRepository for MemCommentRepository {
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Comment>> {
        let store = self.0.lock().unwrap();
        Ok(store.comments.iter().find(|c| c.id == id).cloned())
    }

    async fn list_all(&self) -> RepoResult<Vec<Comment>> {
        Ok(self.0.lock().unwrap().comments.clone())
    }

    async fn find_by_feedback(&self, feedback_id: i64) -> RepoResult<Vec<Comment>> {
        let store = self.0.lock().unwrap();
        Ok(store
            .comments
            .iter()
            .filter(|c| c.target == feedback_id)
            .cloned()
            .collect())
    }

    async fn create(&self, comment: &NewComment) -> RepoResult<i64> {
        let mut store = self.0.lock().unwrap();
        // Foreign-key check, as the database would enforce
        if !store.feedbacks.iter().any(|f| f.id == comment.target) {
            return Err(DomainError::FeedbackNotFound(comment.target));
        }
        let id = store.next_id();
        store.comments.push(Comment {
            id,
            target: comment.target,
            source: comment.source.clone(),
            text: comment.text.clone(),
            score: COMMENT_SCORE_DEFAULT,
            datetime: comment.datetime,
        });
        Ok(id)
    }

    async fn recompute_scores(&self) -> RepoResult<u64> {
        let mut store = self.0.lock().unwrap();
        let sums: Vec<(i64, i64)> = store
            .comments
            .iter()
            .filter_map(|c| {
                let referencing: Vec<i64> = store
                    .reactions
                    .iter()
                    .filter(|r| r.target == ReactionTarget::Comment(c.id))
                    .map(|r| r.value.into_inner())
                    .collect();
                if referencing.is_empty() {
                    None
                } else {
                    let offset = ResourceKind::Comment.base_offset();
                    Some((c.id, offset + referencing.iter().sum::<i64>()))
                }
            })
            .collect();
        let updated = sums.len() as u64;
        for (id, score) in sums {
            if let Some(c) = store.comments.iter_mut().find(|c| c.id == id) {
                c.score = score;
            }
        }
        Ok(updated)
    }
}

#[derive(Clone)]
struct MemReactionRepository(SharedStore);

#[async_trait]
impl ReactionRepository for MemReactionRepository {
    async fn create(&self, reaction: &NewReaction) -> RepoResult<i64> {
        let mut store = self.0.lock().unwrap();
        // Foreign-key check on the populated column
        let exists = match reaction.target {
            ReactionTarget::Feedback(id) => store.feedbacks.iter().any(|f| f.id == id),
            ReactionTarget::Comment(id) => store.comments.iter().any(|c| c.id == id),
        };
        if !exists {
            return Err(DomainError::TargetNotFound {
                kind: reaction.target.kind(),
                id: reaction.target.id(),
            });
        }
        let id = store.next_id();
        store.reactions.push(Reaction {
            id,
            target: reaction.target,
            source: reaction.source.clone(),
            value: reaction.value,
            datetime: reaction.datetime,
        });
        Ok(id)
    }

    async fn list_all(&self) -> RepoResult<Vec<Reaction>> {
        Ok(self.0.lock().unwrap().reactions.clone())
    }
}

/// Rows to preload into the in-memory store
pub struct TestSeed {
    feedbacks: Vec<Feedback>,
    comments: Vec<Comment>,
}

impl TestSeed {
    pub fn empty() -> Self {
        Self {
            feedbacks: Vec::new(),
            comments: Vec::new(),
        }
    }

    /// One feedback with id 1
    pub fn single_feedback() -> Self {
        Self {
            feedbacks: vec![sample_feedback(1)],
            comments: Vec::new(),
        }
    }

    /// Feedback id 1 and comment id 1 (numerically colliding ids)
    pub fn feedback_and_comment() -> Self {
        Self {
            feedbacks: vec![sample_feedback(1)],
            comments: vec![sample_comment(1, 1)],
        }
    }
}

pub fn sample_feedback(id: i64) -> Feedback {
    Feedback {
        id,
        source: "10.0.0.1".to_string(),
        text: Some("Awesome backend".to_string()),
        grade: 5,
        score: FEEDBACK_SCORE_DEFAULT,
        datetime: Utc::now(),
    }
}

pub fn sample_comment(id: i64, target: i64) -> Comment {
    Comment {
        id,
        target,
        source: "10.0.0.2".to_string(),
        text: Some("Agreed".to_string()),
        score: COMMENT_SCORE_DEFAULT,
        datetime: Utc::now(),
    }
}

/// Build a ServiceContext over a fresh in-memory store
pub fn seeded_context(seed: TestSeed) -> ServiceContext {
    let max_seeded = seed
        .feedbacks
        .iter()
        .map(|f| f.id)
        .chain(seed.comments.iter().map(|c| c.id))
        .max()
        .unwrap_or(0);
    let store = Arc::new(Mutex::new(MemStore {
        feedbacks: seed.feedbacks,
        comments: seed.comments,
        reactions: Vec::new(),
        next_id: max_seeded,
    }));

    ServiceContextBuilder::new()
        .feedback_repo(Arc::new(MemFeedbackRepository(store.clone())))
        .comment_repo(Arc::new(MemCommentRepository(store.clone())))
        .reaction_repo(Arc::new(MemReactionRepository(store)))
        .build()
        .expect("all repositories provided")
}
