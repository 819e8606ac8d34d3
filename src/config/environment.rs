// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Parses NUTRILY_* variables into a typed AppConfig consumed by services and the CLI
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration management

use crate::constants::env_config;
use crate::errors::{AppError, AppResult};
use nutrily_core::models::DailyTarget;
use nutrily_intelligence::NutritionConfig;
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::str::FromStr;
use tracing::info;

/// Strongly typed log level configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Errors only
    Error,
    /// Warnings and errors
    Warn,
    /// Informational (default)
    #[default]
    Info,
    /// Debug output
    Debug,
    /// Everything
    Trace,
}

impl LogLevel {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "error" => Self::Error,
            "warn" => Self::Warn,
            "debug" => Self::Debug,
            "trace" => Self::Trace,
            _ => Self::Info,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        };
        f.write_str(name)
    }
}

/// Deployment environment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Development => "development",
            Self::Production => "production",
            Self::Testing => "testing",
        };
        f.write_str(name)
    }
}

/// Default target and the policy for targets whose macros miss their calories
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TargetPolicy {
    /// Targets shown to users who have not completed profile setup
    pub default_target: DailyTarget,
    /// Refuse to store inconsistent targets instead of only warning
    pub enforce_target_consistency: bool,
}

/// Application configuration assembled from the environment
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    /// Deployment environment
    pub environment: Environment,
    /// Log level
    pub log_level: LogLevel,
    /// Default target and consistency policy
    pub targets: TargetPolicy,
    /// Nutrition engine configuration
    pub nutrition: NutritionConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` if a variable is set but cannot be parsed, or
    /// if the nutrition engine configuration fails validation
    pub fn from_env() -> AppResult<Self> {
        let environment = env::var(env_config::ENVIRONMENT)
            .map(|v| Environment::from_str_or_default(&v))
            .unwrap_or_default();
        let log_level = env::var(env_config::LOG_LEVEL)
            .map(|v| LogLevel::from_str_or_default(&v))
            .unwrap_or_default();

        let defaults = DailyTarget::default();
        let default_target = DailyTarget::new(
            parse_env(env_config::DEFAULT_CALORIES, defaults.calories)?,
            parse_env(env_config::DEFAULT_PROTEIN_G, defaults.protein_g)?,
            parse_env(env_config::DEFAULT_CARBS_G, defaults.carbs_g)?,
            parse_env(env_config::DEFAULT_FAT_G, defaults.fat_g)?,
        );
        let enforce_target_consistency =
            parse_bool_env(env_config::ENFORCE_TARGET_CONSISTENCY, false)?;

        let nutrition = NutritionConfig::load()?;

        let config = Self {
            environment,
            log_level,
            targets: TargetPolicy {
                default_target,
                enforce_target_consistency,
            },
            nutrition,
        };
        config.log_summary();
        Ok(config)
    }

    fn log_summary(&self) {
        info!(
            environment = %self.environment,
            log_level = %self.log_level,
            default_calories = self.targets.default_target.calories,
            enforce_target_consistency = self.targets.enforce_target_consistency,
            macro_tolerance_kcal = self.nutrition.target_derivation.macro_tolerance_kcal,
            "Configuration loaded"
        );
    }
}

fn parse_env<T: FromStr>(name: &str, default: T) -> AppResult<T> {
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|_| AppError::config(format!("Invalid {name}: '{raw}'"))),
        Err(_) => Ok(default),
    }
}

fn parse_bool_env(name: &str, default: bool) -> AppResult<bool> {
    match env::var(name) {
        Ok(raw) => match raw.trim().to_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Ok(true),
            "0" | "false" | "no" | "off" => Ok(false),
            _ => Err(AppError::config(format!("Invalid {name}: '{raw}'"))),
        },
        Err(_) => Ok(default),
    }
}
