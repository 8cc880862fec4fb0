//! Command execution

use std::sync::Arc;

use anyhow::Context;
use matjip_common::{AppConfig, AppError, AppResult, ErrorResponse};
use matjip_core::SnowflakeGenerator;
use matjip_db::{
    create_pool, run_migrations, PgBadgeRepository, PgNotificationRepository, PgPool,
    PgProgressRepository, PgUserBadgeRepository,
};
use matjip_service::dto::{BadgeResponse, EarnedBadgeResponse};
use matjip_service::{
    AdminService, BadgeAwardService, CatalogService, NotificationService, ProgressService,
    ServiceContext, ServiceContextBuilder, UserBadgeService,
};
use serde::Serialize;
use tracing::info;

use crate::cli::Command;

/// Wire the PostgreSQL repositories into a service context
pub fn build_context(pool: &PgPool, config: &AppConfig) -> AppResult<ServiceContext> {
    let ctx = ServiceContextBuilder::new()
        .badge_repo(Arc::new(PgBadgeRepository::new(pool.clone())))
        .user_badge_repo(Arc::new(PgUserBadgeRepository::new(pool.clone())))
        .notification_repo(Arc::new(PgNotificationRepository::new(pool.clone())))
        .progress_repo(Arc::new(PgProgressRepository::new(pool.clone())))
        .snowflake_generator(Arc::new(SnowflakeGenerator::new(config.snowflake.worker_id)))
        .build()?;
    Ok(ctx)
}

pub async fn run(command: Command, config: &AppConfig) -> AppResult<()> {
    let pool = create_pool(&config.database)
        .await
        .map_err(|e| AppError::Database(format!("failed to connect to database: {e}")))?;

    if let Command::Migrate { dir } = &command {
        run_migrations(&pool, dir)
            .await
            .with_context(|| format!("failed to apply migrations from {}", dir.display()))
            .map_err(AppError::internal)?;
        info!(dir = %dir.display(), "Migrations applied");
        return Ok(());
    }

    let ctx = build_context(&pool, config)?;
    execute(command, &ctx).await
}

/// Run a command that only needs the services
pub async fn execute(command: Command, ctx: &ServiceContext) -> AppResult<()> {
    match command {
        Command::Migrate { .. } => Err(AppError::validation("migrate needs a database pool")),
        Command::Seed => {
            let count = CatalogService::new(ctx).seed().await?;
            print_json(&serde_json::json!({ "seeded": count }))
        }
        Command::Catalog { category } => {
            let catalog = CatalogService::new(ctx);
            let badges = match category {
                Some(category) => catalog.list_by_category(category).await?,
                None => catalog.list().await?,
            };
            let out: Vec<BadgeResponse> = badges.into_iter().map(BadgeResponse::from).collect();
            print_json(&out)
        }
        Command::RankTags => {
            let granted = ProgressService::new(ctx).evaluate_tag_ranking().await?;
            print_json(&serde_json::json!({ "newly_granted": granted }))
        }
        Command::Award { user, badge } => {
            let outcome = BadgeAwardService::new(ctx).award_badge(user, &badge).await?;
            print_json(&serde_json::json!({
                "user_id": user,
                "badge": badge,
                "granted": outcome.granted(),
            }))
        }
        Command::Reevaluate { user } => {
            let awarded = ProgressService::new(ctx).reevaluate_all(user).await?;
            let out: Vec<BadgeResponse> = awarded.into_iter().map(BadgeResponse::from).collect();
            print_json(&out)
        }
        Command::Progress { user } => {
            let progress = ProgressService::new(ctx).progress(user).await?;
            print_json(&progress)
        }
        Command::Badges { user } => {
            let earned = UserBadgeService::new(ctx).list(user).await?;
            let out: Vec<EarnedBadgeResponse> =
                earned.into_iter().map(EarnedBadgeResponse::from).collect();
            print_json(&out)
        }
        Command::Notifications {
            user,
            before,
            limit,
        } => {
            let page = NotificationService::new(ctx)
                .page(user, before, limit)
                .await?;
            print_json(&page)
        }
        Command::Reset { user, yes } => {
            if !yes {
                return Err(AppError::validation(format!(
                    "refusing to reset user {user} without --yes"
                )));
            }
            let summary = AdminService::new(ctx).reset_user(user).await?;
            print_json(&summary)
        }
    }
}

/// Process exit status for a failed command
pub fn exit_code(err: &AppError) -> i32 {
    match err {
        AppError::Config(_) => 2,
        e if e.is_client_error() => 3,
        _ => 1,
    }
}

/// Machine-readable failure body written to stderr
pub fn error_body(err: &AppError) -> String {
    let body = ErrorResponse::from(err);
    serde_json::to_string(&body).unwrap_or_else(|_| format!("{{\"code\":\"{}\"}}", body.code))
}

fn print_json<T: Serialize>(value: &T) -> AppResult<()> {
    let out = serde_json::to_string_pretty(value).map_err(AppError::internal)?;
    println!("{out}");
    Ok(())
}
