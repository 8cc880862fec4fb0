//! Test fixtures
//!
//! `TestWorld` wires the in-memory store into a `ServiceContext` with the
//! badge catalog already seeded.

use std::sync::Arc;

use matjip_core::catalog::ACTION_LADDERS;
use matjip_core::{Snowflake, SnowflakeGenerator};
use matjip_service::{CatalogService, ServiceContext, ServiceContextBuilder};

use crate::memory::MemoryStore;

pub struct TestWorld {
    pub store: Arc<MemoryStore>,
    pub ctx: ServiceContext,
}

impl TestWorld {
    /// Empty store, empty catalog
    pub fn empty() -> Self {
        let store = Arc::new(MemoryStore::new());
        let ctx = ServiceContextBuilder::new()
            .badge_repo(store.clone())
            .user_badge_repo(store.clone())
            .notification_repo(store.clone())
            .progress_repo(store.clone())
            .snowflake_generator(Arc::new(SnowflakeGenerator::new(1)))
            .build()
            .expect("all dependencies provided");
        Self { store, ctx }
    }

    /// Empty store with the full badge catalog seeded
    pub async fn seeded() -> Self {
        let world = Self::empty();
        CatalogService::new(&world.ctx)
            .seed()
            .await
            .expect("seeding an in-memory catalog cannot fail");
        world
    }

    pub fn user(&self) -> Snowflake {
        self.store.add_user()
    }
}

/// The top rung of every action ladder: the GOLD badges a user can earn
pub fn gold_badge_names() -> Vec<&'static str> {
    ACTION_LADDERS
        .iter()
        .filter_map(|ladder| ladder.rungs.last())
        .map(|rung| rung.badge)
        .collect()
}
