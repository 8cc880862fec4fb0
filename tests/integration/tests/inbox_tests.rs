//! Profile badge and notification inbox tests
//!
//! Run with: cargo test -p integration-tests --test inbox_tests

use integration_tests::{gold_badge_names, TestWorld};
use matjip_core::catalog::REVIEW_LADDER;
use matjip_core::entities::{Notification, UserBadge};
use matjip_core::{CounterKind, DomainError, Snowflake, MAX_FEATURED_BADGES};
use matjip_service::services::MAX_PAGE_SIZE;
use matjip_service::{
    BadgeAwardService, NotificationService, ProgressService, ServiceError, UserBadgeService,
};

/// Award `n` distinct bronze/silver badges and return their ids
async fn award_some(world: &TestWorld, user: Snowflake, n: usize) -> Vec<Snowflake> {
    let award = BadgeAwardService::new(&world.ctx);
    let mut ids = Vec::new();
    for name in ["첫 발자국", "리뷰어", "태그 입문자", "룰렛 초보", "첫 구독", "인기 리뷰"]
        .into_iter()
        .take(n)
    {
        let outcome = award.award_badge(user, name).await.unwrap();
        ids.push(outcome.badge().unwrap().id);
    }
    ids
}

// ============================================================================
// Featured badges
// ============================================================================

#[tokio::test]
async fn test_featured_limit_is_enforced() {
    let world = TestWorld::seeded().await;
    let user = world.user();
    let badges = award_some(&world, user, 6).await;
    let service = UserBadgeService::new(&world.ctx);

    for id in &badges[..MAX_FEATURED_BADGES] {
        service.set_featured(user, *id, true).await.unwrap();
    }

    let err = service.set_featured(user, badges[5], true).await.unwrap_err();
    assert!(matches!(
        err,
        ServiceError::Domain(DomainError::FeaturedLimitReached { max: 5 })
    ));
    assert_eq!(err.status_code(), 409);

    // re-featuring an already featured badge is not a sixth slot
    service.set_featured(user, badges[0], true).await.unwrap();

    service.set_featured(user, badges[0], false).await.unwrap();
    service.set_featured(user, badges[5], true).await.unwrap();

    let featured = service.featured(user).await.unwrap();
    assert_eq!(featured.len(), MAX_FEATURED_BADGES);
    assert!(featured.iter().all(|e| e.badge.id != badges[0]));
}

#[tokio::test]
async fn test_concurrent_pins_stop_at_limit() {
    let world = TestWorld::seeded().await;
    let user = world.user();
    let badges = award_some(&world, user, 6).await;
    let service = UserBadgeService::new(&world.ctx);

    for id in &badges[..4] {
        service.set_featured(user, *id, true).await.unwrap();
    }

    let (a, b) = tokio::join!(
        service.set_featured(user, badges[4], true),
        service.set_featured(user, badges[5], true)
    );

    assert_eq!([&a, &b].iter().filter(|r| r.is_ok()).count(), 1);
    let err = a.err().or(b.err()).unwrap();
    assert_eq!(err.status_code(), 409);
    assert_eq!(service.featured(user).await.unwrap().len(), MAX_FEATURED_BADGES);
}

#[tokio::test]
async fn test_featuring_unheld_badge_is_not_found() {
    let world = TestWorld::seeded().await;
    let user = world.user();

    let err = UserBadgeService::new(&world.ctx)
        .set_featured(user, Snowflake::new(1), true)
        .await
        .unwrap_err();

    assert_eq!(err.status_code(), 404);
}

#[tokio::test]
async fn test_viewed_flags() {
    let world = TestWorld::seeded().await;
    let user = world.user();
    let badges = award_some(&world, user, 3).await;
    let service = UserBadgeService::new(&world.ctx);

    assert_eq!(service.unviewed_count(user).await.unwrap(), 3);
    service.mark_viewed(user, badges[1]).await.unwrap();
    assert_eq!(service.unviewed_count(user).await.unwrap(), 2);
    assert_eq!(service.mark_all_viewed(user).await.unwrap(), 2);
    assert_eq!(service.unviewed_count(user).await.unwrap(), 0);
}

#[tokio::test]
async fn test_list_joins_catalog_entries() {
    let world = TestWorld::seeded().await;
    let user = world.user();
    award_some(&world, user, 2).await;

    let listed = UserBadgeService::new(&world.ctx).list(user).await.unwrap();
    let mut names: Vec<&str> = listed.iter().map(|e| e.badge.name.as_str()).collect();
    names.sort_unstable();

    assert_eq!(names, vec!["리뷰어", "첫 발자국"]);
    assert!(listed.iter().all(|e| e.user_badge.user_id == user));
}

// ============================================================================
// Notifications
// ============================================================================

#[tokio::test]
async fn test_every_grant_emits_one_notification() {
    let world = TestWorld::seeded().await;
    let user = world.user();
    let award = BadgeAwardService::new(&world.ctx);

    for gold in gold_badge_names().iter().take(3) {
        award.award_badge(user, gold).await.unwrap();
    }

    // three golds plus two mastery badges from the cascade
    let inbox = NotificationService::new(&world.ctx)
        .list(user, None, None)
        .await
        .unwrap();
    assert_eq!(inbox.len(), 5);
    assert!(inbox.iter().all(|n| n.is_badge() && !n.is_read));
    assert!(inbox.iter().any(|n| n.message.contains("골드 헌터")));
}

#[tokio::test]
async fn test_notification_cursor_pages_newest_first() {
    let world = TestWorld::seeded().await;
    let user = world.user();
    award_some(&world, user, 5).await;
    let service = NotificationService::new(&world.ctx);

    let first = service.list(user, None, Some(2)).await.unwrap();
    assert_eq!(first.len(), 2);
    assert!(first[0].id > first[1].id);

    let second = service.list(user, Some(first[1].id), Some(2)).await.unwrap();
    assert_eq!(second.len(), 2);
    assert!(second[0].id < first[1].id);

    let rest = service.list(user, Some(second[1].id), Some(2)).await.unwrap();
    assert_eq!(rest.len(), 1);
}

#[tokio::test]
async fn test_notification_limit_is_clamped() {
    let world = TestWorld::seeded().await;
    let user = world.user();
    award_some(&world, user, 2).await;
    let service = NotificationService::new(&world.ctx);

    assert_eq!(service.list(user, None, Some(0)).await.unwrap().len(), 1);
    assert_eq!(service.list(user, None, Some(-5)).await.unwrap().len(), 1);
    assert_eq!(
        service.list(user, None, Some(MAX_PAGE_SIZE * 10)).await.unwrap().len(),
        2
    );
}

#[tokio::test]
async fn test_oversized_limit_still_pages_forward() {
    let world = TestWorld::seeded().await;
    let user = world.user();
    let template = world
        .ctx
        .badge_repo()
        .find_by_name("첫 발자국")
        .await
        .unwrap()
        .unwrap();

    // 150 grants of distinct badge ids, each with its notification
    for _ in 0..150 {
        let mut badge = template.clone();
        badge.id = world.ctx.generate_id();
        world
            .ctx
            .user_badge_repo()
            .grant(
                &UserBadge::new(world.ctx.generate_id(), user, badge.id),
                &Notification::new_badge(world.ctx.generate_id(), user, &badge),
            )
            .await
            .unwrap();
    }

    let service = NotificationService::new(&world.ctx);
    let first = service.page(user, None, Some(500)).await.unwrap();
    assert_eq!(first.data.len(), MAX_PAGE_SIZE as usize);
    assert!(first.has_more);

    let cursor: Snowflake = first.next_before.as_deref().unwrap().parse().unwrap();
    let second = service.page(user, Some(cursor), Some(500)).await.unwrap();
    assert_eq!(second.data.len(), 50);
    assert!(!second.has_more);
    assert!(second.next_before.is_none());
}

#[tokio::test]
async fn test_read_state_and_delete() {
    let world = TestWorld::seeded().await;
    let user = world.user();
    award_some(&world, user, 3).await;
    let service = NotificationService::new(&world.ctx);

    let inbox = service.list(user, None, None).await.unwrap();
    assert_eq!(service.unread_count(user).await.unwrap(), 3);

    service.mark_read(user, inbox[0].id).await.unwrap();
    assert_eq!(service.unread_count(user).await.unwrap(), 2);
    assert_eq!(service.mark_all_read(user).await.unwrap(), 2);
    assert_eq!(service.unread_count(user).await.unwrap(), 0);

    service.delete(user, inbox[1].id).await.unwrap();
    assert_eq!(service.list(user, None, None).await.unwrap().len(), 2);

    let err = service.delete(user, inbox[1].id).await.unwrap_err();
    assert_eq!(err.status_code(), 404);
}

#[tokio::test]
async fn test_other_users_notifications_are_invisible() {
    let world = TestWorld::seeded().await;
    let owner = world.user();
    let stranger = world.user();
    award_some(&world, owner, 1).await;
    let service = NotificationService::new(&world.ctx);

    let inbox = service.list(owner, None, None).await.unwrap();
    assert!(service.list(stranger, None, None).await.unwrap().is_empty());

    let err = service.mark_read(stranger, inbox[0].id).await.unwrap_err();
    assert_eq!(err.status_code(), 404);
}

// ============================================================================
// Progress report
// ============================================================================

#[tokio::test]
async fn test_progress_report() {
    let world = TestWorld::seeded().await;
    let user = world.user();
    world.store.add_reviews(user, 12);

    let report = ProgressService::new(&world.ctx).progress(user).await.unwrap();
    assert_eq!(report.len(), 8);

    let reviews = report
        .iter()
        .find(|p| p.counter == REVIEW_LADDER.counter)
        .unwrap();
    assert_eq!(reviews.count, 12);
    assert_eq!(reviews.next_badge, Some("프로 리뷰어"));
    assert_eq!(reviews.remaining(), Some(38));

    let mastery = report
        .iter()
        .find(|p| p.counter == CounterKind::GoldBadges)
        .unwrap();
    assert_eq!(mastery.count, 0);
    assert_eq!(mastery.next_threshold, Some(1));
}
