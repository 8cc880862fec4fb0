//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::Snowflake;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("User not found: {0}")]
    UserNotFound(Snowflake),

    #[error("Badge not found: {0}")]
    BadgeNotFound(String),

    #[error("User badge not found")]
    UserBadgeNotFound,

    #[error("Notification not found: {0}")]
    NotificationNotFound(Snowflake),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Featured badge limit reached: max {max}")]
    FeaturedLimitReached { max: usize },

    // =========================================================================
    // Configuration Errors (catalog and stored data disagree)
    // =========================================================================
    #[error("Unknown badge tier: {0}")]
    UnknownTier(String),

    #[error("Unknown badge category: {0}")]
    UnknownCategory(String),

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            Self::UserNotFound(_) => "UNKNOWN_USER",
            Self::BadgeNotFound(_) => "UNKNOWN_BADGE",
            Self::UserBadgeNotFound => "UNKNOWN_USER_BADGE",
            Self::NotificationNotFound(_) => "UNKNOWN_NOTIFICATION",

            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::FeaturedLimitReached { .. } => "FEATURED_LIMIT_REACHED",

            Self::UnknownTier(_) => "UNKNOWN_TIER",
            Self::UnknownCategory(_) => "UNKNOWN_CATEGORY",

            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::UserNotFound(_)
                | Self::BadgeNotFound(_)
                | Self::UserBadgeNotFound
                | Self::NotificationNotFound(_)
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::ValidationError(_))
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::FeaturedLimitReached { .. })
    }

    /// Check if the code and the seeded catalog disagree
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::BadgeNotFound(_) | Self::UnknownTier(_) | Self::UnknownCategory(_)
        )
    }
}
