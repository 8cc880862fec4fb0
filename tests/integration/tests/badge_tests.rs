//! Badge workflow tests
//!
//! Run the award, cascade and progress services end to end over the
//! in-memory adapters.
//!
//! Run with: cargo test -p integration-tests --test badge_tests

use futures::future::join_all;
use integration_tests::{gold_badge_names, TestWorld};
use matjip_core::catalog::{CATALOG, TAG_RANK_BADGE};
use matjip_core::entities::{Badge, BadgeCategory};
use matjip_core::DomainError;
use matjip_service::{
    AdminService, AwardOutcome, BadgeAwardService, CatalogService, ProgressService, ServiceError,
};

fn names(badges: &[Badge]) -> Vec<&str> {
    badges.iter().map(|b| b.name.as_str()).collect()
}

// ============================================================================
// Uniqueness and idempotency
// ============================================================================

#[tokio::test]
async fn test_user_holds_each_badge_at_most_once() {
    let world = TestWorld::seeded().await;
    let user = world.user();
    let progress = ProgressService::new(&world.ctx);

    for _ in 0..12 {
        world.store.add_review(user);
        progress.on_review_created(user).await;
        // the same event delivered twice must not duplicate anything
        progress.on_review_created(user).await;
    }

    assert_eq!(world.store.held(user), vec!["첫 발자국", "리뷰어"]);
    for def in CATALOG {
        assert!(world.store.rows_for(user, def.name) <= 1, "{}", def.name);
    }
    assert_eq!(world.store.notification_count(user), 2);
}

#[tokio::test]
async fn test_racing_awards_create_one_row_and_one_notification() {
    let world = TestWorld::seeded().await;
    let user = world.user();
    let award = BadgeAwardService::new(&world.ctx);

    let outcomes = join_all([
        award.award_badge(user, "리뷰어"),
        award.award_badge(user, "리뷰어"),
    ])
    .await;

    let granted = outcomes
        .iter()
        .filter(|o| matches!(o, Ok(AwardOutcome::Granted(_))))
        .count();
    let held = outcomes
        .iter()
        .filter(|o| matches!(o, Ok(AwardOutcome::AlreadyHeld)))
        .count();

    assert_eq!(granted, 1);
    assert_eq!(held, 1);
    assert_eq!(world.store.rows_for(user, "리뷰어"), 1);
    assert_eq!(world.store.notifications_for(user, "리뷰어"), 1);
}

#[tokio::test]
async fn test_racing_triggers_award_first_review_once() {
    let world = TestWorld::seeded().await;
    let user = world.user();
    let progress = ProgressService::new(&world.ctx);

    world.store.add_review(user);
    let results = join_all((0..4).map(|_| progress.on_review_created(user))).await;

    let total: usize = results.iter().map(Vec::len).sum();
    assert_eq!(total, 1);
    assert_eq!(world.store.rows_for(user, "첫 발자국"), 1);
    assert_eq!(world.store.notification_count(user), 1);
}

#[tokio::test]
async fn test_award_badge_twice_in_sequence() {
    let world = TestWorld::seeded().await;
    let user = world.user();
    let award = BadgeAwardService::new(&world.ctx);

    assert!(award.award_badge(user, "첫 구독").await.unwrap().granted());
    assert_eq!(
        award.award_badge(user, "첫 구독").await.unwrap(),
        AwardOutcome::AlreadyHeld
    );
    assert_eq!(world.store.notifications_for(user, "첫 구독"), 1);
}

// ============================================================================
// Review ladder
// ============================================================================

#[tokio::test]
async fn test_review_ladder_awards_in_order_at_thresholds() {
    let world = TestWorld::seeded().await;
    let user = world.user();
    let progress = ProgressService::new(&world.ctx);

    let mut awarded_at = Vec::new();
    for count in 1..=55 {
        world.store.add_review(user);
        let awarded = progress.on_review_created(user).await;
        if !awarded.is_empty() {
            awarded_at.push((count, awarded));
        }
    }

    let steps: Vec<(i32, Vec<&str>)> = awarded_at
        .iter()
        .map(|(count, badges)| (*count, names(badges)))
        .collect();
    assert_eq!(
        steps,
        vec![
            (1, vec!["첫 발자국"]),
            (10, vec!["리뷰어"]),
            // the GOLD rung cascades into the first mastery badge
            (50, vec!["프로 리뷰어", "골드 콜렉터"]),
        ]
    );
    assert_eq!(
        world.store.held(user),
        vec!["첫 발자국", "리뷰어", "프로 리뷰어", "골드 콜렉터"]
    );
}

#[tokio::test]
async fn test_counter_jump_awards_every_skipped_threshold() {
    let world = TestWorld::seeded().await;
    let user = world.user();

    // bulk correction: 60 reviews appear without intermediate triggers
    world.store.add_reviews(user, 60);
    let awarded = ProgressService::new(&world.ctx).on_review_created(user).await;

    assert_eq!(
        names(&awarded),
        vec!["첫 발자국", "리뷰어", "프로 리뷰어", "골드 콜렉터"]
    );
}

#[tokio::test]
async fn test_reevaluate_all_catches_up_every_ladder() {
    let world = TestWorld::seeded().await;
    let user = world.user();

    world.store.add_reviews(user, 10);
    let tag = world.store.add_tag(user);
    world.store.upvote_tag(tag, 12);

    let awarded = ProgressService::new(&world.ctx)
        .reevaluate_all(user)
        .await
        .unwrap();

    assert_eq!(
        names(&awarded),
        vec!["첫 발자국", "리뷰어", "태그 입문자", "호평받는 태그"]
    );

    let again = ProgressService::new(&world.ctx)
        .reevaluate_all(user)
        .await
        .unwrap();
    assert!(again.is_empty());
}

// ============================================================================
// Mastery cascade
// ============================================================================

#[tokio::test]
async fn test_mastery_follows_gold_count() {
    let world = TestWorld::seeded().await;
    let user = world.user();
    let award = BadgeAwardService::new(&world.ctx);
    let golds = gold_badge_names();
    assert_eq!(golds.len(), 7);

    let mut mastery_after = Vec::new();
    for gold in &golds {
        award.award_badge(user, gold).await.unwrap();
        let held = world.store.held(user);
        let mastery: Vec<String> = held
            .into_iter()
            .filter(|n| ["골드 콜렉터", "골드 헌터", "그랜드 마스터"].contains(&n.as_str()))
            .collect();
        mastery_after.push(mastery);
    }

    assert_eq!(mastery_after[0], vec!["골드 콜렉터"]);
    assert_eq!(mastery_after[1], vec!["골드 콜렉터"]);
    assert_eq!(mastery_after[2], vec!["골드 콜렉터", "골드 헌터"]);
    assert_eq!(mastery_after[5], vec!["골드 콜렉터", "골드 헌터"]);
    assert_eq!(
        mastery_after[6],
        vec!["골드 콜렉터", "골드 헌터", "그랜드 마스터"]
    );
}

#[tokio::test]
async fn test_non_gold_badges_do_not_cascade() {
    let world = TestWorld::seeded().await;
    let user = world.user();
    let award = BadgeAwardService::new(&world.ctx);

    award.award_badge(user, "리뷰어").await.unwrap();
    award.award_badge(user, TAG_RANK_BADGE).await.unwrap();

    assert_eq!(world.store.held(user), vec!["리뷰어", TAG_RANK_BADGE]);
}

#[tokio::test]
async fn test_mastery_check_is_idempotent() {
    let world = TestWorld::seeded().await;
    let user = world.user();
    let award = BadgeAwardService::new(&world.ctx);

    award.award_badge(user, "프로 리뷰어").await.unwrap();
    let again = award.check_and_award_mastery_badges(user).await.unwrap();

    assert!(again.is_empty());
    assert_eq!(world.store.rows_for(user, "골드 콜렉터"), 1);
}

// ============================================================================
// Superlative and rank badges
// ============================================================================

#[tokio::test]
async fn test_tied_tags_both_creators_get_rank_badge() {
    let world = TestWorld::seeded().await;
    let alice = world.user();
    let bob = world.user();
    let carol = world.user();

    let alice_tag = world.store.add_tag(alice);
    let bob_tag = world.store.add_tag(bob);
    let carol_tag = world.store.add_tag(carol);
    world.store.add_subscribers(alice_tag, 12);
    world.store.add_subscribers(bob_tag, 12);
    world.store.add_subscribers(carol_tag, 5);

    let progress = ProgressService::new(&world.ctx);
    let mut granted = progress.evaluate_tag_ranking().await.unwrap();
    granted.sort();
    let mut expected = vec![alice, bob];
    expected.sort();

    assert_eq!(granted, expected);
    assert_eq!(world.store.rows_for(alice, TAG_RANK_BADGE), 1);
    assert_eq!(world.store.rows_for(bob, TAG_RANK_BADGE), 1);
    assert_eq!(world.store.rows_for(carol, TAG_RANK_BADGE), 0);

    // leaders keep the badge; nobody is granted twice
    assert!(progress.evaluate_tag_ranking().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_rank_needs_at_least_one_subscriber() {
    let world = TestWorld::seeded().await;
    let creator = world.user();
    world.store.add_tag(creator);

    let granted = ProgressService::new(&world.ctx)
        .evaluate_tag_ranking()
        .await
        .unwrap();

    assert!(granted.is_empty());
    assert_eq!(world.store.user_badge_count(), 0);
}

#[tokio::test]
async fn test_review_likes_use_the_best_single_review() {
    let world = TestWorld::seeded().await;
    let author = world.user();
    let progress = ProgressService::new(&world.ctx);

    let first = world.store.add_review(author);
    let second = world.store.add_review(author);
    world.store.upvote_review(first, 9);
    world.store.upvote_review(second, 9);
    // 18 likes in total, but no single review has 10
    assert!(progress.on_review_voted(author).await.is_empty());

    world.store.upvote_review(second, 1);
    assert_eq!(
        names(&progress.on_review_voted(author).await),
        vec!["주목받는 리뷰"]
    );
}

#[tokio::test]
async fn test_subscription_rewards_creator_and_subscriber() {
    let world = TestWorld::seeded().await;
    let creator = world.user();
    let tag = world.store.add_tag(creator);
    world.store.add_subscribers(tag, 9);

    let subscriber = world.user();
    world.store.subscribe(tag, subscriber);
    let awarded = ProgressService::new(&world.ctx)
        .on_tag_subscribed(creator, subscriber)
        .await;

    assert_eq!(names(&awarded), vec!["떠오르는 큐레이터", "첫 구독"]);
    assert_eq!(world.store.held(creator), vec!["떠오르는 큐레이터"]);
    assert_eq!(world.store.held(subscriber), vec!["첫 구독"]);
}

#[tokio::test]
async fn test_tag_creation_ladder() {
    let world = TestWorld::seeded().await;
    let user = world.user();
    let progress = ProgressService::new(&world.ctx);

    world.store.add_tag(user);
    assert_eq!(names(&progress.on_tag_created(user).await), vec!["태그 입문자"]);
    assert_eq!(world.store.tag_creator(world.store.add_tag(user)), Some(user));
    assert!(progress.on_tag_created(user).await.is_empty());
}

// ============================================================================
// Roulette
// ============================================================================

#[tokio::test]
async fn test_roulette_badge_on_tenth_spin() {
    let world = TestWorld::seeded().await;
    let user = world.user();
    let progress = ProgressService::new(&world.ctx);

    for expected in 1..=9 {
        let spin = progress.on_roulette_spin(user).await.unwrap();
        assert_eq!(spin.spin_count, expected);
        assert!(spin.awarded.is_empty());
    }

    let tenth = progress.on_roulette_spin(user).await.unwrap();
    assert_eq!(tenth.spin_count, 10);
    assert_eq!(names(&tenth.awarded), vec!["룰렛 초보"]);
}

#[tokio::test]
async fn test_concurrent_spins_are_all_counted() {
    let world = TestWorld::seeded().await;
    let user = world.user();
    let progress = ProgressService::new(&world.ctx);

    let spins = join_all((0..10).map(|_| progress.on_roulette_spin(user))).await;
    let mut counts: Vec<i64> = spins.iter().map(|s| s.as_ref().unwrap().spin_count).collect();
    counts.sort_unstable();

    assert_eq!(counts, (1..=10).collect::<Vec<_>>());
    assert_eq!(world.store.rows_for(user, "룰렛 초보"), 1);
}

#[tokio::test]
async fn test_spin_for_unknown_user_fails() {
    let world = TestWorld::seeded().await;
    let ghost = matjip_core::Snowflake::new(404);

    let err = ProgressService::new(&world.ctx)
        .on_roulette_spin(ghost)
        .await
        .unwrap_err();

    assert!(matches!(err, ServiceError::Domain(DomainError::UserNotFound(_))));
}

// ============================================================================
// Errors
// ============================================================================

#[tokio::test]
async fn test_unknown_badge_is_configuration_error() {
    let world = TestWorld::seeded().await;
    let user = world.user();

    let err = BadgeAwardService::new(&world.ctx)
        .award_badge(user, "존재하지 않는 배지")
        .await
        .unwrap_err();

    assert!(err.is_configuration());
    assert_eq!(err.status_code(), 500);
    assert_eq!(world.store.user_badge_count(), 0);
    assert_eq!(world.store.total_notifications(), 0);
}

#[tokio::test]
async fn test_unseeded_catalog_never_fails_the_trigger() {
    let world = TestWorld::empty();
    let user = world.user();
    world.store.add_review(user);

    let awarded = ProgressService::new(&world.ctx).on_review_created(user).await;

    assert!(awarded.is_empty());
    assert_eq!(world.store.user_badge_count(), 0);
}

#[tokio::test]
async fn test_failed_grant_is_swallowed_and_retried_later() {
    let world = TestWorld::seeded().await;
    let user = world.user();
    let progress = ProgressService::new(&world.ctx);
    world.store.add_review(user);

    world.store.fail_grants(true);
    assert!(progress.on_review_created(user).await.is_empty());
    assert_eq!(world.store.user_badge_count(), 0);
    assert_eq!(world.store.total_notifications(), 0);

    world.store.fail_grants(false);
    assert_eq!(
        names(&progress.on_review_created(user).await),
        vec!["첫 발자국"]
    );
}

#[tokio::test]
async fn test_failed_counter_read_is_swallowed() {
    let world = TestWorld::seeded().await;
    let user = world.user();
    world.store.add_review(user);

    world.store.fail_counters(true);
    let awarded = ProgressService::new(&world.ctx).on_review_created(user).await;

    assert!(awarded.is_empty());
    assert_eq!(world.store.user_badge_count(), 0);
}

#[tokio::test]
async fn test_failed_grant_surfaces_from_direct_award() {
    let world = TestWorld::seeded().await;
    let user = world.user();
    world.store.fail_grants(true);

    let err = BadgeAwardService::new(&world.ctx)
        .award_badge(user, "리뷰어")
        .await
        .unwrap_err();

    assert_eq!(err.error_code(), "DATABASE_ERROR");
}

// ============================================================================
// Administrative reset
// ============================================================================

#[tokio::test]
async fn test_reset_then_same_action_awards_again() {
    let world = TestWorld::seeded().await;
    let user = world.user();
    let progress = ProgressService::new(&world.ctx);

    world.store.add_review(user);
    progress.on_review_created(user).await;
    for _ in 0..3 {
        progress.on_roulette_spin(user).await.unwrap();
    }

    let summary = AdminService::new(&world.ctx).reset_user(user).await.unwrap();
    assert_eq!(summary.badges_removed, 1);
    assert!(world.store.held(user).is_empty());
    assert_eq!(progress.on_roulette_spin(user).await.unwrap().spin_count, 1);

    world.store.add_review(user);
    // two reviews now, but the first rung was forgotten with the row
    assert_eq!(
        names(&progress.on_review_created(user).await),
        vec!["첫 발자국"]
    );
    assert_eq!(world.store.notifications_for(user, "첫 발자국"), 2);
}

// ============================================================================
// Catalog
// ============================================================================

#[tokio::test]
async fn test_seed_is_idempotent() {
    let world = TestWorld::seeded().await;
    let catalog = CatalogService::new(&world.ctx);
    let before = catalog.list().await.unwrap();

    assert_eq!(catalog.seed().await.unwrap(), CATALOG.len());
    let after = catalog.list().await.unwrap();

    assert_eq!(before.len(), CATALOG.len());
    assert_eq!(before, after);
}

#[tokio::test]
async fn test_catalog_by_category() {
    let world = TestWorld::seeded().await;
    let catalog = CatalogService::new(&world.ctx);

    let mastery = catalog.list_by_category(BadgeCategory::Mastery).await.unwrap();
    assert_eq!(
        names(&mastery),
        vec!["골드 콜렉터", "골드 헌터", "그랜드 마스터"]
    );

    let err = catalog.find("없는 배지").await.unwrap_err();
    assert!(err.is_configuration());
    assert_eq!(catalog.find(TAG_RANK_BADGE).await.unwrap().name, TAG_RANK_BADGE);
}
