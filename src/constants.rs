// ABOUTME: System-wide constants and environment variable names for the nutrily crate
// ABOUTME: Re-exports the physiological constants and names every NUTRILY_* setting
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Constants Module
//!
//! Physiological constants live in `nutrily_core::constants` and are
//! re-exported here. This module adds the environment variable names read by
//! [`crate::config::environment::AppConfig`] and the logging setup.

pub use nutrily_core::constants::*;

/// Environment variable names
pub mod env_config {
    /// Deployment environment (development, production, testing)
    pub const ENVIRONMENT: &str = "NUTRILY_ENVIRONMENT";
    /// Log level when `RUST_LOG` is unset
    pub const LOG_LEVEL: &str = "NUTRILY_LOG_LEVEL";
    /// Log output format (json, pretty, compact)
    pub const LOG_FORMAT: &str = "NUTRILY_LOG_FORMAT";
    /// Default daily calories before profile setup
    pub const DEFAULT_CALORIES: &str = "NUTRILY_DEFAULT_CALORIES";
    /// Default daily protein before profile setup
    pub const DEFAULT_PROTEIN_G: &str = "NUTRILY_DEFAULT_PROTEIN_G";
    /// Default daily carbohydrates before profile setup
    pub const DEFAULT_CARBS_G: &str = "NUTRILY_DEFAULT_CARBS_G";
    /// Default daily fat before profile setup
    pub const DEFAULT_FAT_G: &str = "NUTRILY_DEFAULT_FAT_G";
    /// Reject inconsistent manual targets instead of warning
    pub const ENFORCE_TARGET_CONSISTENCY: &str = "NUTRILY_ENFORCE_TARGET_CONSISTENCY";
}
