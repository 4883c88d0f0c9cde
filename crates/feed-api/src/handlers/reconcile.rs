//! Reconciliation trigger handler

use axum::extract::State;
use feed_service::ReconcileService;

use crate::response::ApiResult;
use crate::state::AppState;

/// Trigger a full reconciliation pass
///
/// GET /test
///
/// Recomputes all denormalized scores from the reaction rows and returns
/// an empty 200. Normally driven by the periodic background task; the
/// route exists for cron jobs and manual runs.
pub async fn trigger_reconciliation(State(state): State<AppState>) -> ApiResult<()> {
    let service = ReconcileService::new(state.service_context());
    service.recompute_all().await?;
    Ok(())
}
