// ABOUTME: Integration tests for profile setup, meal logging and dashboard services
// ABOUTME: Runs the async services against the in-memory storage provider
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use chrono::NaiveDate;
use nutrily::config::{AppConfig, TargetPolicy};
use nutrily::database_plugins::DatabaseProvider;
use nutrily::errors::ErrorCode;
use nutrily::intelligence::{aggregate, InsightKind};
use nutrily::models::{DailyTarget, MealType, ProfileForm};
use uuid::Uuid;

mod common;

use common::{at, new_meal, services, services_with};

fn reference_form() -> ProfileForm {
    ProfileForm {
        age: Some("30".into()),
        sex: Some("male".into()),
        height_cm: Some("180".into()),
        weight_kg: Some("80".into()),
        activity_level: Some("moderate".into()),
        goal: Some("maintain".into()),
        dietary_restrictions: Some("vegetarian".into()),
    }
}

fn june(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, day).unwrap()
}

// ============================================================================
// PROFILE SERVICE
// ============================================================================

#[tokio::test]
async fn test_complete_setup_stores_profile_and_target() {
    let svc = services();
    let user = Uuid::new_v4();

    let setup = svc.profiles.complete_setup(user, reference_form()).await.unwrap();

    assert_eq!(setup.target, DailyTarget::new(2759, 176.0, 341.0, 77.0));
    assert!(setup.consistency.consistent);
    assert_eq!(
        svc.database.get_daily_target(user).await.unwrap(),
        Some(setup.target)
    );
    let stored = svc.profiles.profile(user).await.unwrap().unwrap();
    assert_eq!(stored.dietary_restrictions.as_deref(), Some("vegetarian"));
}

#[tokio::test]
async fn test_complete_setup_rejects_bad_form_without_storing() {
    let svc = services();
    let user = Uuid::new_v4();
    let form = ProfileForm {
        weight_kg: Some("-70".into()),
        ..reference_form()
    };

    let error = svc.profiles.complete_setup(user, form).await.unwrap_err();

    assert_eq!(error.code, ErrorCode::InvalidProfile);
    assert!(svc.database.get_profile(user).await.unwrap().is_none());
    assert!(svc.database.get_daily_target(user).await.unwrap().is_none());
}

#[tokio::test]
async fn test_update_target_warns_but_saves_by_default() {
    let svc = services();
    let user = Uuid::new_v4();
    let target = DailyTarget::new(2000, 50.0, 50.0, 10.0);

    let consistency = svc.profiles.update_target(user, target).await.unwrap();

    assert!(!consistency.consistent);
    assert_eq!(
        svc.database.get_daily_target(user).await.unwrap(),
        Some(target)
    );
}

#[tokio::test]
async fn test_update_target_blocked_when_enforced() {
    let svc = services_with(AppConfig {
        targets: TargetPolicy {
            enforce_target_consistency: true,
            ..TargetPolicy::default()
        },
        ..AppConfig::default()
    });
    let user = Uuid::new_v4();

    let error = svc
        .profiles
        .update_target(user, DailyTarget::new(2000, 50.0, 50.0, 10.0))
        .await
        .unwrap_err();

    assert_eq!(error.code, ErrorCode::InconsistentTarget);
    assert_eq!(error.details["computed_calories"], 490.0);
    assert!(svc.database.get_daily_target(user).await.unwrap().is_none());

    // A consistent target still saves
    svc.profiles
        .update_target(user, DailyTarget::new(2000, 150.0, 200.0, 67.0))
        .await
        .unwrap();
}

// ============================================================================
// MEAL LOG SERVICE
// ============================================================================

#[tokio::test]
async fn test_log_and_remove_meal() {
    let svc = services();
    let user = Uuid::new_v4();

    let entry = svc
        .meals
        .log_meal(user, new_meal("  Greek Yogurt ", MealType::Snack, 100.0, 10.0, 6.0, 0.4))
        .await
        .unwrap();
    assert_eq!(entry.name, "Greek Yogurt");
    assert_eq!(entry.portion, "100g");
    assert_eq!(svc.database.meal_count(user), 1);

    svc.meals.remove_meal(user, entry.id).await.unwrap();
    assert_eq!(svc.database.meal_count(user), 0);

    let error = svc.meals.remove_meal(user, entry.id).await.unwrap_err();
    assert_eq!(error.code, ErrorCode::ResourceNotFound);
}

#[tokio::test]
async fn test_log_meal_rejects_negative_macros() {
    let svc = services();
    let user = Uuid::new_v4();

    let error = svc
        .meals
        .log_meal(user, new_meal("Mystery", MealType::Other, 100.0, -1.0, 0.0, 0.0))
        .await
        .unwrap_err();

    assert_eq!(error.code, ErrorCode::InvalidInput);
    assert_eq!(error.details["field"], "protein_g");
    assert_eq!(svc.database.meal_count(user), 0);
}

// ============================================================================
// DASHBOARD SERVICE
// ============================================================================

#[tokio::test]
async fn test_dashboard_uses_default_target_before_setup() {
    let svc = services();
    let dashboard = svc
        .dashboards
        .daily_dashboard(Uuid::new_v4(), june(1))
        .await
        .unwrap();

    assert!(dashboard.using_default_target);
    assert_eq!(dashboard.report.target, DailyTarget::new(2000, 150.0, 250.0, 65.0));
    let kinds: Vec<InsightKind> = dashboard.report.insights.iter().map(|i| i.kind).collect();
    assert_eq!(kinds, vec![InsightKind::StartDay, InsightKind::LowEnergy]);
    assert!(dashboard.meals.is_empty());
}

#[tokio::test]
async fn test_dashboard_scopes_meals_to_date() {
    let svc = services();
    let user = Uuid::new_v4();
    svc.profiles.complete_setup(user, reference_form()).await.unwrap();

    for (name, meal_type, calories, protein, day, hour) in [
        ("Eggs", MealType::Breakfast, 300.0, 25.0, 1, 8),
        ("Chicken Breast", MealType::Lunch, 495.0, 93.0, 1, 13),
        ("Salmon", MealType::Dinner, 624.0, 75.0, 1, 19),
        ("Late snack", MealType::Snack, 200.0, 10.0, 2, 1),
    ] {
        svc.meals
            .log_meal_at(
                user,
                new_meal(name, meal_type, calories, protein, 10.0, 10.0),
                at(day, hour),
            )
            .await
            .unwrap();
    }

    let dashboard = svc.dashboards.daily_dashboard(user, june(1)).await.unwrap();
    let report = &dashboard.report;

    assert!(!dashboard.using_default_target);
    assert_eq!(report.meal_count, 3);
    assert_eq!(report.totals, aggregate(&dashboard.meals));
    assert!((report.totals.calories - 1419.0).abs() < 1e-9);
    assert_eq!(dashboard.by_meal_type.len(), 3);
    assert!(dashboard.target_consistency.consistent);
    // 193 / 176 protein: over 80%, calories 1419 / 2759 above half
    let kinds: Vec<InsightKind> = report.insights.iter().map(|i| i.kind).collect();
    assert_eq!(kinds, vec![InsightKind::ProteinGoalNear]);
    assert!(report.remaining.protein_g.abs() < f64::EPSILON);
    assert!(report.progress.protein.unwrap() > 100.0);

    let names: Vec<&str> = dashboard.meals.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(names, vec!["Eggs", "Chicken Breast", "Salmon"]);
}

#[tokio::test]
async fn test_history_groups_by_day() {
    let svc = services();
    let user = Uuid::new_v4();
    for (day, hour) in [(3, 9), (1, 9), (3, 18)] {
        svc.meals
            .log_meal_at(
                user,
                new_meal("Oatmeal", MealType::Breakfast, 150.0, 5.0, 27.0, 3.0),
                at(day, hour),
            )
            .await
            .unwrap();
    }

    let history = svc.dashboards.history(user).await.unwrap();

    assert_eq!(history.len(), 2);
    assert_eq!(history[0].date, june(1));
    assert_eq!(history[1].meal_count, 2);
    assert!((history[1].totals.calories - 300.0).abs() < 1e-9);
}

#[tokio::test]
async fn test_users_are_isolated() {
    let svc = services();
    let (alice, bob) = (Uuid::new_v4(), Uuid::new_v4());
    svc.meals
        .log_meal_at(
            alice,
            new_meal("Apple", MealType::Snack, 95.0, 0.5, 25.0, 0.3),
            at(1, 10),
        )
        .await
        .unwrap();

    let dashboard = svc.dashboards.daily_dashboard(bob, june(1)).await.unwrap();
    assert_eq!(dashboard.report.meal_count, 0);
    assert!(svc.dashboards.history(bob).await.unwrap().is_empty());
}
