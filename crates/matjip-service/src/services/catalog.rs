//! Catalog service
//!
//! Read-only access to the badge catalog, plus seeding the catalog table
//! from the static definitions.

use matjip_core::catalog::CATALOG;
use matjip_core::entities::{Badge, BadgeCategory};
use matjip_core::DomainError;
use tracing::{info, instrument};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Catalog service
pub struct CatalogService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> CatalogService<'a> {
    /// Create a new CatalogService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Every badge, grouped by category then tier
    #[instrument(skip(self))]
    pub async fn list(&self) -> ServiceResult<Vec<Badge>> {
        Ok(self.ctx.badge_repo().list().await?)
    }

    #[instrument(skip(self))]
    pub async fn list_by_category(&self, category: BadgeCategory) -> ServiceResult<Vec<Badge>> {
        let mut badges = self.list().await?;
        badges.retain(|b| b.category == category);
        Ok(badges)
    }

    #[instrument(skip(self))]
    pub async fn find(&self, name: &str) -> ServiceResult<Badge> {
        self.ctx
            .badge_repo()
            .find_by_name(name)
            .await?
            .ok_or_else(|| DomainError::BadgeNotFound(name.to_string()).into())
    }

    /// Insert missing catalog badges and refresh the text of existing ones.
    ///
    /// Existing rows keep their id, so held badges are untouched. Returns the
    /// number of definitions written.
    #[instrument(skip(self))]
    pub async fn seed(&self) -> ServiceResult<usize> {
        for definition in CATALOG {
            let badge = Badge::from_definition(self.ctx.generate_id(), definition);
            self.ctx.badge_repo().upsert(&badge).await?;
        }

        info!(count = CATALOG.len(), "Badge catalog seeded");
        Ok(CATALOG.len())
    }
}
