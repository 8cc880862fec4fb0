//! # matjip-core
//!
//! Domain layer of the badge engine: the badge catalog and its threshold
//! ladders, entities, value objects, and repository traits.
//! This crate has zero dependencies on infrastructure (database, runtime, etc.).

pub mod catalog;
pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use catalog::{BadgeLadder, Rung, CATALOG, MASTERY_LADDER, TAG_RANK_BADGE};
pub use entities::{
    Badge, BadgeCategory, BadgeDefinition, BadgeTier, CounterKind, EarnedBadge, GrantOutcome,
    Notification, NotificationKind, ProgressSnapshot, TagStanding, UserBadge,
    MAX_FEATURED_BADGES,
};
pub use error::DomainError;
pub use traits::{
    BadgeRepository, NotificationRepository, ProgressRepository, RepoResult, UserBadgeRepository,
};
pub use value_objects::{Snowflake, SnowflakeGenerator, SnowflakeParseError};
