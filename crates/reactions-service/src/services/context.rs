//! Service context - dependency container for services
//!
//! Holds the reaction repository, the event publisher, and reaction settings.

use std::sync::Arc;

use reactions_common::ReactionsConfig;
use reactions_core::traits::{EventPublisher, ReactionRepository};
use reactions_db::{MemoryReactionRepository, PgPool, PgReactionRepository};

use crate::events::BroadcastPublisher;

use super::error::{ServiceError, ServiceResult};

/// Service context containing all dependencies
///
/// This is the dependency container that gets passed to `ReactionService`.
/// It provides access to:
/// - The reaction repository (PostgreSQL or in-process)
/// - The event publisher
/// - Reaction settings such as the default reacter type
#[derive(Clone)]
pub struct ServiceContext {
    reaction_repo: Arc<dyn ReactionRepository>,
    publisher: Arc<dyn EventPublisher>,
    config: ReactionsConfig,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        reaction_repo: Arc<dyn ReactionRepository>,
        publisher: Arc<dyn EventPublisher>,
        config: ReactionsConfig,
    ) -> Self {
        Self {
            reaction_repo,
            publisher,
            config,
        }
    }

    /// Context backed by PostgreSQL, publishing to the given broadcast channel
    pub fn postgres(pool: PgPool, publisher: BroadcastPublisher, config: ReactionsConfig) -> Self {
        Self::new(
            Arc::new(PgReactionRepository::new(pool)),
            Arc::new(publisher),
            config,
        )
    }

    /// Context backed by the in-process repository
    pub fn in_memory(publisher: BroadcastPublisher, config: ReactionsConfig) -> Self {
        Self::new(
            Arc::new(MemoryReactionRepository::new()),
            Arc::new(publisher),
            config,
        )
    }

    // === Repositories ===

    /// Get the reaction repository
    pub fn reaction_repo(&self) -> &dyn ReactionRepository {
        self.reaction_repo.as_ref()
    }

    // === Events ===

    /// Get the event publisher
    pub fn publisher(&self) -> &dyn EventPublisher {
        self.publisher.as_ref()
    }

    // === Settings ===

    /// Get the reaction settings
    pub fn config(&self) -> &ReactionsConfig {
        &self.config
    }

    /// Reacter type tag used when a query does not name one
    pub fn default_reacter_type(&self) -> &str {
        &self.config.default_reacter_type
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("reaction_repo", &"dyn ReactionRepository")
            .field("publisher", &"dyn EventPublisher")
            .field("config", &self.config)
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
pub struct ServiceContextBuilder {
    reaction_repo: Option<Arc<dyn ReactionRepository>>,
    publisher: Option<Arc<dyn EventPublisher>>,
    config: ReactionsConfig,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self {
            reaction_repo: None,
            publisher: None,
            config: ReactionsConfig::default(),
        }
    }

    pub fn reaction_repo(mut self, repo: Arc<dyn ReactionRepository>) -> Self {
        self.reaction_repo = Some(repo);
        self
    }

    pub fn publisher(mut self, publisher: Arc<dyn EventPublisher>) -> Self {
        self.publisher = Some(publisher);
        self
    }

    pub fn config(mut self, config: ReactionsConfig) -> Self {
        self.config = config;
        self
    }

    /// Build the ServiceContext
    ///
    /// When no publisher is set, events go to a broadcast channel sized from
    /// the config that nobody listens to.
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if the repository is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        let reaction_repo = self
            .reaction_repo
            .ok_or_else(|| ServiceError::validation("reaction_repo is required"))?;
        let publisher = match self.publisher {
            Some(publisher) => publisher,
            None => Arc::new(BroadcastPublisher::new(self.config.event_buffer)),
        };

        Ok(ServiceContext::new(reaction_repo, publisher, self.config))
    }
}

impl Default for ServiceContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}
