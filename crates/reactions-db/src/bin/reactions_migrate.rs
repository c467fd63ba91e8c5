//! Applies the reactions schema to the configured database
//!
//! Run with:
//! ```bash
//! DATABASE_URL=postgres://... cargo run -p reactions-db --bin reactions-migrate
//! ```

use reactions_common::{try_init_tracing_with_config, AppConfig, AppError, AppResult, TracingConfig};
use reactions_db::{create_pool, run_migrations, DatabaseConfig};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        error!(error = %e, code = e.error_code(), "Migration failed");
        std::process::exit(1);
    }
}

async fn run() -> AppResult<()> {
    let config = AppConfig::from_env().inspect_err(|e| {
        eprintln!("Failed to load configuration: {e}");
    })?;

    if let Err(e) = try_init_tracing_with_config(TracingConfig::for_app(&config.app)) {
        eprintln!("Warning: Failed to initialize tracing: {e}");
    }

    info!(env = ?config.app.env, app = %config.app.name, "Configuration loaded");

    let pool = create_pool(&DatabaseConfig::from(&config.database))
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    run_migrations(&pool)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;

    info!("Database schema is up to date");

    Ok(())
}
