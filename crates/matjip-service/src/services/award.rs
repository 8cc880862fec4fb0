//! Badge award service
//!
//! Grants catalog badges to users. A grant writes the UserBadge row and its
//! notification in one transaction; duplicates are an expected no-op. Newly
//! granted badges then run the post-award hooks for their tier, which is how
//! GOLD badges feed the mastery ladder.

use std::collections::HashSet;

use matjip_core::catalog::MASTERY_LADDER;
use matjip_core::entities::{Badge, BadgeTier, GrantOutcome, Notification, UserBadge};
use matjip_core::{BadgeLadder, DomainError, Snowflake};
use tracing::{debug, error, info, instrument, warn};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// What `award_badge` did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AwardOutcome {
    /// The user did not hold the badge and now does
    Granted(Badge),
    /// The user already held the badge; nothing was written
    AlreadyHeld,
}

impl AwardOutcome {
    #[inline]
    pub fn granted(&self) -> bool {
        matches!(self, Self::Granted(_))
    }

    pub fn badge(&self) -> Option<&Badge> {
        match self {
            Self::Granted(badge) => Some(badge),
            Self::AlreadyHeld => None,
        }
    }
}

/// Work that runs after a badge of a given tier is newly granted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PostAwardHook {
    /// Re-evaluate the mastery ladder against the GOLD badge count
    MasteryCascade,
}

impl PostAwardHook {
    /// Hooks triggered by a new badge of `tier`
    pub fn hooks_for(tier: BadgeTier) -> &'static [PostAwardHook] {
        match tier {
            BadgeTier::Gold => &[PostAwardHook::MasteryCascade],
            BadgeTier::Bronze | BadgeTier::Silver | BadgeTier::Special => &[],
        }
    }
}

/// Badge award service
pub struct BadgeAwardService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> BadgeAwardService<'a> {
    /// Create a new BadgeAwardService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Award the named catalog badge to a user.
    ///
    /// Idempotent: a badge the user already holds yields `AlreadyHeld`. An
    /// unknown name is a configuration error and writes nothing. Hook failures
    /// are logged and do not change the outcome of the primary grant.
    #[instrument(skip(self))]
    pub async fn award_badge(&self, user_id: Snowflake, name: &str) -> ServiceResult<AwardOutcome> {
        let outcome = self.grant(user_id, name).await?;

        if let AwardOutcome::Granted(badge) = &outcome {
            self.run_hooks(user_id, std::slice::from_ref(badge)).await;
        }

        Ok(outcome)
    }

    /// Award every mastery badge whose GOLD threshold the user has reached
    /// and does not hold yet.
    ///
    /// Mastery grants do not run hooks themselves, so the cascade stops here.
    #[instrument(skip(self))]
    pub async fn check_and_award_mastery_badges(&self, user_id: Snowflake) -> ServiceResult<Vec<Badge>> {
        let gold = self.ctx.progress_repo().gold_badge_count(user_id).await?;
        Ok(self.grant_reached(user_id, &MASTERY_LADDER, gold).await)
    }

    /// Award every rung of `ladder` at or below `count` that the user does
    /// not hold yet, lowest first, then run hooks for what was granted.
    ///
    /// Best effort: a failing rung is logged and the rest are still tried.
    #[instrument(skip(self, ladder), fields(counter = %ladder.counter))]
    pub async fn award_reached(
        &self,
        user_id: Snowflake,
        ladder: &BadgeLadder,
        count: i64,
    ) -> Vec<Badge> {
        let mut granted = self.grant_reached(user_id, ladder, count).await;
        let cascaded = self.run_hooks(user_id, &granted).await;
        granted.extend(cascaded);
        granted
    }

    /// Grant without hooks
    async fn grant(&self, user_id: Snowflake, name: &str) -> ServiceResult<AwardOutcome> {
        let Some(badge) = self.ctx.badge_repo().find_by_name(name).await? else {
            error!(user_id = %user_id, badge = name, "Badge is not in the catalog");
            return Err(DomainError::BadgeNotFound(name.to_string()).into());
        };

        if self
            .ctx
            .user_badge_repo()
            .find(user_id, badge.id)
            .await?
            .is_some()
        {
            debug!(user_id = %user_id, badge = name, "Badge already held");
            return Ok(AwardOutcome::AlreadyHeld);
        }

        let user_badge = UserBadge::new(self.ctx.generate_id(), user_id, badge.id);
        let notification = Notification::new_badge(self.ctx.generate_id(), user_id, &badge);

        match self
            .ctx
            .user_badge_repo()
            .grant(&user_badge, &notification)
            .await?
        {
            GrantOutcome::Created(_) => {
                info!(
                    user_id = %user_id,
                    badge = %badge.name,
                    tier = %badge.tier,
                    "Badge granted"
                );
                Ok(AwardOutcome::Granted(badge))
            }
            // lost a race with a concurrent grant of the same badge
            GrantOutcome::AlreadyExists => {
                debug!(user_id = %user_id, badge = name, "Concurrent grant already won");
                Ok(AwardOutcome::AlreadyHeld)
            }
        }
    }

    async fn grant_reached(&self, user_id: Snowflake, ladder: &BadgeLadder, count: i64) -> Vec<Badge> {
        let mut reached = ladder.reached(count).peekable();
        if reached.peek().is_none() {
            return Vec::new();
        }

        // Skipping held names only saves round trips; the grant stays idempotent
        let held: HashSet<String> = match self.ctx.user_badge_repo().held_badge_names(user_id).await {
            Ok(names) => names.into_iter().collect(),
            Err(e) => {
                warn!(user_id = %user_id, error = %e, "Could not load held badges");
                HashSet::new()
            }
        };

        let mut granted = Vec::new();
        for rung in reached.filter(|r| !held.contains(r.badge)) {
            match self.grant(user_id, rung.badge).await {
                Ok(AwardOutcome::Granted(badge)) => granted.push(badge),
                Ok(AwardOutcome::AlreadyHeld) => {}
                Err(e) => warn!(
                    user_id = %user_id,
                    badge = rung.badge,
                    error = %e,
                    "Badge award failed"
                ),
            }
        }
        granted
    }

    /// Run each distinct hook of the granted tiers once
    async fn run_hooks(&self, user_id: Snowflake, granted: &[Badge]) -> Vec<Badge> {
        let mut hooks: Vec<PostAwardHook> = Vec::new();
        for badge in granted {
            for hook in PostAwardHook::hooks_for(badge.tier) {
                if !hooks.contains(hook) {
                    hooks.push(*hook);
                }
            }
        }

        let mut cascaded = Vec::new();
        for hook in hooks {
            match hook {
                PostAwardHook::MasteryCascade => {
                    match self.check_and_award_mastery_badges(user_id).await {
                        Ok(badges) => cascaded.extend(badges),
                        Err(e) => warn!(user_id = %user_id, error = %e, "Mastery cascade failed"),
                    }
                }
            }
        }
        cascaded
    }
}
