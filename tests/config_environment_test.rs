// ABOUTME: Integration tests for environment-driven configuration
// ABOUTME: Mutates process environment, so every test runs serially
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use nutrily::config::{AppConfig, Environment, LogLevel, NutritionConfig};
use nutrily::constants::env_config;
use nutrily::errors::ErrorCode;
use nutrily::models::DailyTarget;
use serial_test::serial;
use std::env;

const ALL_VARS: &[&str] = &[
    env_config::ENVIRONMENT,
    env_config::LOG_LEVEL,
    env_config::DEFAULT_CALORIES,
    env_config::DEFAULT_PROTEIN_G,
    env_config::DEFAULT_CARBS_G,
    env_config::DEFAULT_FAT_G,
    env_config::ENFORCE_TARGET_CONSISTENCY,
    "NUTRILY_MACRO_TOLERANCE_KCAL",
    "NUTRILY_GOAL_ADJUSTMENT_KCAL",
    "NUTRILY_ACTIVITY_LIGHT",
];

/// Sets variables for the duration of a test and clears them on drop
struct EnvGuard;

impl EnvGuard {
    fn set(pairs: &[(&str, &str)]) -> Self {
        Self::clear();
        for (key, value) in pairs {
            env::set_var(key, value);
        }
        Self
    }

    fn clear() {
        for key in ALL_VARS {
            env::remove_var(key);
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        Self::clear();
    }
}

#[test]
#[serial]
fn test_defaults_without_environment() {
    let _guard = EnvGuard::set(&[]);
    let config = AppConfig::from_env().unwrap();

    assert_eq!(config.environment, Environment::Development);
    assert_eq!(config.log_level, LogLevel::Info);
    assert_eq!(config.targets.default_target, DailyTarget::default());
    assert!(!config.targets.enforce_target_consistency);
    assert!((config.nutrition.target_derivation.macro_tolerance_kcal - 50.0).abs() < f64::EPSILON);
}

#[test]
#[serial]
fn test_overrides_are_applied() {
    let _guard = EnvGuard::set(&[
        (env_config::ENVIRONMENT, "prod"),
        (env_config::LOG_LEVEL, "DEBUG"),
        (env_config::DEFAULT_CALORIES, "1800"),
        (env_config::DEFAULT_PROTEIN_G, "120.5"),
        (env_config::ENFORCE_TARGET_CONSISTENCY, "yes"),
        ("NUTRILY_MACRO_TOLERANCE_KCAL", "25"),
        ("NUTRILY_GOAL_ADJUSTMENT_KCAL", "300"),
    ]);
    let config = AppConfig::from_env().unwrap();

    assert!(config.environment.is_production());
    assert_eq!(config.log_level, LogLevel::Debug);
    assert_eq!(config.targets.default_target.calories, 1800);
    assert!((config.targets.default_target.protein_g - 120.5).abs() < f64::EPSILON);
    assert!((config.targets.default_target.carbs_g - 250.0).abs() < f64::EPSILON);
    assert!(config.targets.enforce_target_consistency);
    assert!((config.nutrition.target_derivation.macro_tolerance_kcal - 25.0).abs() < f64::EPSILON);
    assert_eq!(config.nutrition.target_derivation.goal_adjustment_kcal, 300);
}

#[test]
#[serial]
fn test_unparseable_default_is_config_error() {
    let _guard = EnvGuard::set(&[(env_config::DEFAULT_CALORIES, "lots")]);
    let error = AppConfig::from_env().unwrap_err();

    assert_eq!(error.code, ErrorCode::ConfigInvalid);
    assert!(error.message.contains(env_config::DEFAULT_CALORIES));
}

#[test]
#[serial]
fn test_bad_flag_is_config_error() {
    let _guard = EnvGuard::set(&[(env_config::ENFORCE_TARGET_CONSISTENCY, "maybe")]);
    assert_eq!(
        AppConfig::from_env().unwrap_err().code,
        ErrorCode::ConfigInvalid
    );
}

#[test]
#[serial]
fn test_invalid_engine_config_surfaces_as_app_error() {
    let _guard = EnvGuard::set(&[("NUTRILY_ACTIVITY_LIGHT", "1.0")]);

    assert!(NutritionConfig::load().is_err());
    assert_eq!(
        AppConfig::from_env().unwrap_err().code,
        ErrorCode::ConfigInvalid
    );
}

#[test]
#[serial]
fn test_nan_tolerance_is_config_error() {
    let _guard = EnvGuard::set(&[("NUTRILY_MACRO_TOLERANCE_KCAL", "NaN")]);
    let error = AppConfig::from_env().unwrap_err();

    assert_eq!(error.code, ErrorCode::ConfigInvalid);
    assert!(error.message.contains("finite"));
}
