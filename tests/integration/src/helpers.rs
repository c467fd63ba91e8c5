//! Test helpers for integration tests
//!
//! Builds service contexts over either backend and collects published events.

use std::sync::Arc;

use anyhow::Result;
use reactions_common::{AppConfig, ReactionsConfig};
use reactions_core::ReactionEvent;
use reactions_db::{create_pool, run_migrations, DatabaseConfig, PgPool, PgReactionRepository};
use reactions_service::{BroadcastPublisher, ReactionService, ServiceContext};
use tokio::sync::broadcast::Receiver;

/// A service context plus a subscription to everything it publishes
pub struct TestEnv {
    pub ctx: ServiceContext,
    events: Receiver<ReactionEvent>,
}

impl TestEnv {
    /// Environment backed by the in-process repository
    pub fn in_memory() -> Self {
        let publisher = BroadcastPublisher::new(1024);
        let events = publisher.subscribe();
        let ctx = ServiceContext::in_memory(publisher, ReactionsConfig::default());
        Self { ctx, events }
    }

    /// Environment backed by PostgreSQL, or `None` when DATABASE_URL is unset
    pub async fn postgres() -> Result<Option<Self>> {
        let Some(pool) = test_pool().await? else {
            return Ok(None);
        };

        let publisher = BroadcastPublisher::new(1024);
        let events = publisher.subscribe();
        let ctx = ServiceContext::new(
            Arc::new(PgReactionRepository::new(pool)),
            Arc::new(publisher),
            ReactionsConfig::default(),
        );
        Ok(Some(Self { ctx, events }))
    }

    pub fn service(&self) -> ReactionService<'_> {
        ReactionService::new(&self.ctx)
    }

    /// Take every event published so far
    pub fn drain_events(&mut self) -> Vec<ReactionEvent> {
        let mut events = Vec::new();
        while let Ok(event) = self.events.try_recv() {
            events.push(event);
        }
        events
    }

    /// Event type names published so far, in order
    pub fn drain_event_types(&mut self) -> Vec<&'static str> {
        self.drain_events().iter().map(ReactionEvent::event_type).collect()
    }
}

/// Load configuration from the environment (`.env` included)
pub fn test_config() -> Result<AppConfig> {
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env().map_err(|e| anyhow::anyhow!("Config error: {}", e))?;

    Ok(config)
}

/// Helper to check if a test database is available
pub fn check_test_env() -> bool {
    dotenvy::dotenv().ok();

    if std::env::var("DATABASE_URL").is_err() {
        eprintln!("Skipping test: DATABASE_URL not set");
        return false;
    }

    true
}

/// Connect and migrate, or `None` when no database is configured
pub async fn test_pool() -> Result<Option<PgPool>> {
    if !check_test_env() {
        return Ok(None);
    }

    let config = test_config()?;
    let pool = create_pool(&DatabaseConfig::from(&config.database)).await?;
    run_migrations(&pool).await?;

    Ok(Some(pool))
}
