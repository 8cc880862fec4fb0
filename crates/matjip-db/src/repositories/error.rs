//! Error handling utilities for repositories

use matjip_core::error::DomainError;
use matjip_core::value_objects::Snowflake;
use sqlx::Error as SqlxError;

/// Convert SQLx error to DomainError
pub fn map_db_error(e: SqlxError) -> DomainError {
    DomainError::DatabaseError(e.to_string())
}

/// Turn "no row affected" into the given not-found error
pub fn require_affected(rows: u64, not_found: impl FnOnce() -> DomainError) -> Result<(), DomainError> {
    if rows == 0 {
        Err(not_found())
    } else {
        Ok(())
    }
}

pub fn user_not_found(id: Snowflake) -> DomainError {
    DomainError::UserNotFound(id)
}

pub fn notification_not_found(id: Snowflake) -> DomainError {
    DomainError::NotificationNotFound(id)
}

pub fn user_badge_not_found() -> DomainError {
    DomainError::UserBadgeNotFound
}
