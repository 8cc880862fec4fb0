//! Progress service
//!
//! Entry points the triggering actions call after they commit (review
//! written, tag created, roulette spun, vote cast, tag subscribed). Each one
//! reads the relevant counter fresh from storage and awards whatever ladder
//! rungs it has reached. Badge awarding never fails the triggering action:
//! every error past the primary write is logged and swallowed.

use std::collections::HashSet;

use matjip_core::catalog::{
    ACTION_LADDERS, MASTERY_LADDER, REVIEW_LADDER, REVIEW_LIKE_LADDER, ROULETTE_LADDER,
    SUBSCRIPTION_LADDER, TAG_LADDER, TAG_LIKE_LADDER, TAG_RANK_BADGE, TAG_SUBSCRIBER_LADDER,
};
use matjip_core::entities::{Badge, CounterKind};
use matjip_core::traits::RepoResult;
use matjip_core::{BadgeLadder, Snowflake};
use tracing::{info, instrument, warn};

use crate::dto::LadderProgress;

use super::award::{AwardOutcome, BadgeAwardService};
use super::context::ServiceContext;
use super::error::ServiceResult;

/// Result of a roulette spin
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouletteSpin {
    /// Spin count after this spin
    pub spin_count: i64,
    /// Badges newly granted by this spin
    pub awarded: Vec<Badge>,
}

/// Progress service
pub struct ProgressService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ProgressService<'a> {
    /// Create a new ProgressService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// A review by `user_id` was created
    #[instrument(skip(self))]
    pub async fn on_review_created(&self, user_id: Snowflake) -> Vec<Badge> {
        self.evaluate(user_id, &REVIEW_LADDER).await
    }

    /// A tag by `user_id` was created
    #[instrument(skip(self))]
    pub async fn on_tag_created(&self, user_id: Snowflake) -> Vec<Badge> {
        self.evaluate(user_id, &TAG_LADDER).await
    }

    /// Count one roulette spin and award roulette badges.
    ///
    /// The increment is the primary action, so its failure is returned.
    #[instrument(skip(self))]
    pub async fn on_roulette_spin(&self, user_id: Snowflake) -> ServiceResult<RouletteSpin> {
        let spin_count = self
            .ctx
            .progress_repo()
            .increment_roulette_spins(user_id)
            .await?;

        let awarded = BadgeAwardService::new(self.ctx)
            .award_reached(user_id, &ROULETTE_LADDER, spin_count)
            .await;

        Ok(RouletteSpin {
            spin_count,
            awarded,
        })
    }

    /// A vote landed on one of `author_id`'s reviews
    #[instrument(skip(self))]
    pub async fn on_review_voted(&self, author_id: Snowflake) -> Vec<Badge> {
        self.evaluate(author_id, &REVIEW_LIKE_LADDER).await
    }

    /// A vote landed on one of `creator_id`'s tags
    #[instrument(skip(self))]
    pub async fn on_tag_voted(&self, creator_id: Snowflake) -> Vec<Badge> {
        self.evaluate(creator_id, &TAG_LIKE_LADDER).await
    }

    /// `subscriber_id` subscribed to a tag made by `creator_id`.
    ///
    /// The creator climbs the curator ladder, the subscriber the collection
    /// ladder.
    #[instrument(skip(self))]
    pub async fn on_tag_subscribed(&self, creator_id: Snowflake, subscriber_id: Snowflake) -> Vec<Badge> {
        let mut awarded = self.evaluate(creator_id, &TAG_SUBSCRIBER_LADDER).await;
        awarded.extend(self.evaluate(subscriber_id, &SUBSCRIPTION_LADDER).await);
        awarded
    }

    /// Award the tag ranking badge to the creator of every tag tied for the
    /// most subscribers. Tags without subscribers never rank.
    ///
    /// Returns the users who were newly granted the badge.
    #[instrument(skip(self))]
    pub async fn evaluate_tag_ranking(&self) -> ServiceResult<Vec<Snowflake>> {
        let leaders = self.ctx.progress_repo().top_subscribed_tags().await?;

        let mut creators = HashSet::new();
        let award = BadgeAwardService::new(self.ctx);
        let mut granted = Vec::new();

        for standing in leaders {
            if standing.subscriber_count < 1 || !creators.insert(standing.creator_id) {
                continue;
            }
            match award.award_badge(standing.creator_id, TAG_RANK_BADGE).await {
                Ok(AwardOutcome::Granted(_)) => granted.push(standing.creator_id),
                Ok(AwardOutcome::AlreadyHeld) => {}
                Err(e) => warn!(
                    user_id = %standing.creator_id,
                    tag_id = %standing.tag_id,
                    error = %e,
                    "Tag ranking award failed"
                ),
            }
        }

        info!(
            leaders = creators.len(),
            newly_granted = granted.len(),
            "Tag ranking evaluated"
        );
        Ok(granted)
    }

    /// Evaluate every action ladder from a fresh snapshot.
    ///
    /// Used after bulk counter corrections, where a counter may jump past
    /// several thresholds at once.
    #[instrument(skip(self))]
    pub async fn reevaluate_all(&self, user_id: Snowflake) -> ServiceResult<Vec<Badge>> {
        let snapshot = self.ctx.progress_repo().snapshot(user_id).await?;
        let award = BadgeAwardService::new(self.ctx);

        let mut awarded = Vec::new();
        for ladder in &ACTION_LADDERS {
            awarded.extend(
                award
                    .award_reached(user_id, ladder, snapshot.get(ladder.counter))
                    .await,
            );
        }
        // picks up gold badges earned before mastery existed
        awarded.extend(award.check_and_award_mastery_badges(user_id).await?);

        info!(user_id = %user_id, awarded = awarded.len(), "Progress re-evaluated");
        Ok(awarded)
    }

    /// Current count and next threshold on every ladder, mastery included
    #[instrument(skip(self))]
    pub async fn progress(&self, user_id: Snowflake) -> ServiceResult<Vec<LadderProgress>> {
        let snapshot = self.ctx.progress_repo().snapshot(user_id).await?;

        Ok(ACTION_LADDERS
            .iter()
            .chain(std::iter::once(&MASTERY_LADDER))
            .map(|ladder| LadderProgress::new(ladder, snapshot.get(ladder.counter)))
            .collect())
    }

    async fn evaluate(&self, user_id: Snowflake, ladder: &BadgeLadder) -> Vec<Badge> {
        let count = match self.read_counter(user_id, ladder.counter).await {
            Ok(count) => count,
            Err(e) => {
                warn!(
                    user_id = %user_id,
                    counter = %ladder.counter,
                    error = %e,
                    "Could not read progress counter"
                );
                return Vec::new();
            }
        };

        BadgeAwardService::new(self.ctx)
            .award_reached(user_id, ladder, count)
            .await
    }

    async fn read_counter(&self, user_id: Snowflake, kind: CounterKind) -> RepoResult<i64> {
        let repo = self.ctx.progress_repo();
        match kind {
            CounterKind::Reviews => repo.review_count(user_id).await,
            CounterKind::Tags => repo.tag_count(user_id).await,
            CounterKind::RouletteSpins => repo.roulette_spins(user_id).await,
            CounterKind::ReviewLikes => repo.max_review_likes(user_id).await,
            CounterKind::TagLikes => repo.max_tag_likes(user_id).await,
            CounterKind::TagSubscribers => repo.max_tag_subscribers(user_id).await,
            CounterKind::Subscriptions => repo.subscription_count(user_id).await,
            CounterKind::GoldBadges => repo.gold_badge_count(user_id).await,
        }
    }
}
