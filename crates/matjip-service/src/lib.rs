//! # matjip-service
//!
//! Application layer containing the badge award workflow, progress
//! triggers, and DTOs.

pub mod dto;
pub mod services;

pub use services::{
    AdminService, AwardOutcome, BadgeAwardService, CatalogService, NotificationService,
    PostAwardHook, ProgressService, ResetSummary, RouletteSpin, ServiceContext,
    ServiceContextBuilder, ServiceError, ServiceResult, UserBadgeService,
};
