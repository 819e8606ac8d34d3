// ABOUTME: Configuration management module for engine parameters and deployment settings
// ABOUTME: Combines the nutrition engine config with environment-driven application settings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration module
//!
//! - **Environment**: deployment settings, default targets and policy from `NUTRILY_*` variables
//! - **Nutrition**: formula coefficients and insight thresholds, re-exported from
//!   `nutrily_intelligence::config`

/// Environment and deployment configuration
pub mod environment;

pub use environment::{AppConfig, Environment, LogLevel, TargetPolicy};
pub use nutrily_intelligence::config::{
    ActivityFactorsConfig, BmrConfig, ConfigError, InsightThresholdsConfig, NutritionConfig,
    TargetDerivationConfig,
};
