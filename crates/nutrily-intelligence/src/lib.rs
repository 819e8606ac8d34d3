// ABOUTME: Nutrition intelligence engine: daily targets, meal aggregation, insights and history
// ABOUTME: Pure, synchronous computations with no I/O, safe to call from any thread
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Nutrily Intelligence
//!
//! Two cooperating components that share no runtime state:
//!
//! - **Goal calculator** (`goal_calculator`): profile to daily target, plus the
//!   macro/calorie consistency validator
//! - **Aggregator** (`aggregator`, `insights`): a day's meals to totals,
//!   remaining amounts, progress and insights
//!
//! `history` groups a whole meal log by calendar day for the history view.

/// Engine configuration with environment overrides
pub mod config;

/// Daily target derivation and validation
pub mod goal_calculator;

/// Meal totals, remaining amounts and progress
pub mod aggregator;

/// Daily insight rules
pub mod insights;

/// Per-date history reductions
pub mod history;

pub use aggregator::{
    aggregate, progress_percent, remaining, totals_by_meal_type, DailyReport, MacroProgress,
};
pub use config::NutritionConfig;
pub use goal_calculator::{
    compute_daily_target, macro_split, validate_macro_calorie_consistency, MacroConsistency,
    MacroPercentages,
};
pub use history::{daily_summaries, meal_dates, meals_on, DailySummary};
pub use insights::{derive_insights, Insight, InsightKind, InsightTone};
