//! Feedback server binary
//!
//! All configuration comes from the environment (a `.env` file is read
//! when present). `API_PORT` and `DATABASE_URL` are required.

use feed_common::{try_init_tracing, AppConfig, AppError};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    if let Err(e) = try_init_tracing() {
        eprintln!("tracing init skipped: {e}");
    }

    if let Err(e) = run().await {
        error!(error = %e, "Server terminated");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), AppError> {
    let config = AppConfig::from_env().map_err(|e| AppError::Config(e.to_string()))?;

    info!(
        name = %config.app.name,
        env = ?config.app.env,
        port = config.server.port,
        reconcile_interval = config.reconcile.interval_secs,
        "Configuration loaded"
    );

    feed_api::run(config).await
}
