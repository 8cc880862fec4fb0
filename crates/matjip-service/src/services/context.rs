//! Service context - dependency container for services
//!
//! Holds the repository ports and the id generator. No concrete pool lives
//! here, so the same services run over PostgreSQL or in-memory adapters.

use std::sync::Arc;

use matjip_core::traits::{
    BadgeRepository, NotificationRepository, ProgressRepository, UserBadgeRepository,
};
use matjip_core::{Snowflake, SnowflakeGenerator};

use super::error::{ServiceError, ServiceResult};

/// Service context containing all dependencies
#[derive(Clone)]
pub struct ServiceContext {
    // Repositories
    badge_repo: Arc<dyn BadgeRepository>,
    user_badge_repo: Arc<dyn UserBadgeRepository>,
    notification_repo: Arc<dyn NotificationRepository>,
    progress_repo: Arc<dyn ProgressRepository>,

    snowflake_generator: Arc<SnowflakeGenerator>,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        badge_repo: Arc<dyn BadgeRepository>,
        user_badge_repo: Arc<dyn UserBadgeRepository>,
        notification_repo: Arc<dyn NotificationRepository>,
        progress_repo: Arc<dyn ProgressRepository>,
        snowflake_generator: Arc<SnowflakeGenerator>,
    ) -> Self {
        Self {
            badge_repo,
            user_badge_repo,
            notification_repo,
            progress_repo,
            snowflake_generator,
        }
    }

    // === Repositories ===

    /// Get the badge catalog repository
    pub fn badge_repo(&self) -> &dyn BadgeRepository {
        self.badge_repo.as_ref()
    }

    /// Get the user badge repository
    pub fn user_badge_repo(&self) -> &dyn UserBadgeRepository {
        self.user_badge_repo.as_ref()
    }

    /// Get the notification repository
    pub fn notification_repo(&self) -> &dyn NotificationRepository {
        self.notification_repo.as_ref()
    }

    /// Get the progress counter repository
    pub fn progress_repo(&self) -> &dyn ProgressRepository {
        self.progress_repo.as_ref()
    }

    // === Ids ===

    /// Get the snowflake ID generator
    pub fn snowflake_generator(&self) -> &SnowflakeGenerator {
        self.snowflake_generator.as_ref()
    }

    /// Generate a new Snowflake ID
    pub fn generate_id(&self) -> Snowflake {
        self.snowflake_generator.generate()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("repositories", &"...")
            .field("worker_id", &self.snowflake_generator.worker_id())
            .finish()
    }
}

/// Builder for creating ServiceContext
#[derive(Default)]
pub struct ServiceContextBuilder {
    badge_repo: Option<Arc<dyn BadgeRepository>>,
    user_badge_repo: Option<Arc<dyn UserBadgeRepository>>,
    notification_repo: Option<Arc<dyn NotificationRepository>>,
    progress_repo: Option<Arc<dyn ProgressRepository>>,
    snowflake_generator: Option<Arc<SnowflakeGenerator>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn badge_repo(mut self, repo: Arc<dyn BadgeRepository>) -> Self {
        self.badge_repo = Some(repo);
        self
    }

    pub fn user_badge_repo(mut self, repo: Arc<dyn UserBadgeRepository>) -> Self {
        self.user_badge_repo = Some(repo);
        self
    }

    pub fn notification_repo(mut self, repo: Arc<dyn NotificationRepository>) -> Self {
        self.notification_repo = Some(repo);
        self
    }

    pub fn progress_repo(mut self, repo: Arc<dyn ProgressRepository>) -> Self {
        self.progress_repo = Some(repo);
        self
    }

    pub fn snowflake_generator(mut self, generator: Arc<SnowflakeGenerator>) -> Self {
        self.snowflake_generator = Some(generator);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        Ok(ServiceContext::new(
            self.badge_repo
                .ok_or_else(|| ServiceError::validation("badge_repo is required"))?,
            self.user_badge_repo
                .ok_or_else(|| ServiceError::validation("user_badge_repo is required"))?,
            self.notification_repo
                .ok_or_else(|| ServiceError::validation("notification_repo is required"))?,
            self.progress_repo
                .ok_or_else(|| ServiceError::validation("progress_repo is required"))?,
            self.snowflake_generator
                .ok_or_else(|| ServiceError::validation("snowflake_generator is required"))?,
        ))
    }
}
