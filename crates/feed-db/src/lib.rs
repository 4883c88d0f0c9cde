//! # feed-db
//!
//! Database layer implementing repository traits with PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! This crate provides PostgreSQL implementations for the repository traits
//! defined in `feed-core`. It handles:
//!
//! - Connection pool management
//! - Database models with SQLx `FromRow` derives
//! - Entity ↔ Model mappers
//! - Repository implementations, including the set-based score
//!   reconciliation statements
//!
//! ## Usage
//!
//! ```rust,ignore
//! use feed_db::pool::{create_pool, DatabaseConfig};
//! use feed_db::PgFeedbackRepository;
//! use feed_core::traits::FeedbackRepository;
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = DatabaseConfig {
//!         url: "postgresql://localhost/feed".to_string(),
//!         ..Default::default()
//!     };
//!     let pool = create_pool(&config).await?;
//!     feed_db::run_migrations(&pool).await?;
//!     let feedback_repo = PgFeedbackRepository::new(pool);
//!
//!     // Use the repository...
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{create_pool, DatabaseConfig, PgPool};
pub use repositories::{PgCommentRepository, PgFeedbackRepository, PgReactionRepository};

/// Apply embedded migrations (creates the three tables on first run)
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
