//! # matjip-db
//!
//! Database layer implementing the matjip-core repository traits with
//! PostgreSQL via SQLx.
//!
//! - Connection pool management and migrations
//! - Database models with SQLx `FromRow` derives
//! - Model → entity mappers
//! - Repository implementations
//!
//! ## Usage
//!
//! ```rust,ignore
//! use matjip_common::AppConfig;
//! use matjip_db::{create_pool, PgUserBadgeRepository};
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = AppConfig::from_env()?;
//!     let pool = create_pool(&config.database).await?;
//!     let user_badges = PgUserBadgeRepository::new(pool);
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{create_pool, run_migrations, PgPool, PoolSettings};
pub use repositories::{
    PgBadgeRepository, PgNotificationRepository, PgProgressRepository, PgUserBadgeRepository,
};
