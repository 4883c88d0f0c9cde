//! Server setup and initialization
//!
//! Provides the main application builder, the periodic reconciliation
//! task, and the server runner.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use feed_common::{AppConfig, AppError};
use feed_db::{
    create_pool, run_migrations, PgCommentRepository, PgFeedbackRepository, PgReactionRepository,
};
use feed_service::{ReconcileService, ServiceContext, ServiceContextBuilder};
use tokio::net::TcpListener;
use tracing::{error, info};

use crate::middleware::apply_middleware;
use crate::routes::create_router;
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    let router = create_router();
    let router = apply_middleware(router);
    router.with_state(state)
}

/// Initialize all dependencies and create AppState
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    // Create database pool
    info!("Connecting to PostgreSQL...");
    let db_config = feed_db::DatabaseConfig {
        url: config.database.url.clone(),
        max_connections: config.database.max_connections,
        min_connections: config.database.min_connections,
        ..Default::default()
    };
    let pool = create_pool(&db_config)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("PostgreSQL connection established");

    // Apply migrations (creates the tables on first run)
    run_migrations(&pool)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("Migrations applied");

    // Create repositories
    let feedback_repo = Arc::new(PgFeedbackRepository::new(pool.clone()));
    let comment_repo = Arc::new(PgCommentRepository::new(pool.clone()));
    let reaction_repo = Arc::new(PgReactionRepository::new(pool.clone()));

    // Build service context
    let service_context = ServiceContextBuilder::new()
        .feedback_repo(feedback_repo)
        .comment_repo(comment_repo)
        .reaction_repo(reaction_repo)
        .build()
        .map_err(|e| AppError::Config(e.to_string()))?;

    Ok(AppState::new(service_context, pool, config))
}

/// Spawn the periodic reconciliation task
///
/// Recomputes all scores on the configured interval. Failures are logged
/// and the task keeps running; the next tick retries from scratch.
pub fn spawn_reconciler(ctx: ServiceContext, interval_secs: u64) {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(Duration::from_secs(interval_secs));
        // The first tick fires immediately; skip it so startup stays quick
        ticker.tick().await;

        info!(interval_secs, "Periodic score reconciliation enabled");
        loop {
            ticker.tick().await;
            let service = ReconcileService::new(&ctx);
            match service.recompute_all().await {
                Ok(report) => {
                    info!(
                        feedbacks = report.feedbacks_updated,
                        comments = report.comments_updated,
                        "Reconciliation pass complete"
                    );
                }
                Err(e) => {
                    error!(error = %e, "Reconciliation pass failed");
                }
            }
        }
    });
}

/// Run the HTTP server
pub async fn run_server(app: Router, addr: SocketAddr) -> Result<(), AppError> {
    info!("Starting HTTP server on {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {addr}: {e}")))?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::Config(format!("Server error: {e}")))?;

    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    let reconcile = config.reconcile.clone();

    // Create app state
    let state = create_app_state(config).await?;

    // Start the background reconciler when configured
    if reconcile.is_periodic() {
        spawn_reconciler(state.service_context().clone(), reconcile.interval_secs);
    }

    // Build application
    let app = create_app(state);

    // Run server
    run_server(app, addr).await
}
