// ABOUTME: Daily insight rules comparing nutrition totals against the daily target
// ABOUTME: Fixed rule order, independent matching and a static title/message table
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Insight generation for a day of logged meals
//!
//! Rules are evaluated independently and every match is emitted, in this order:
//!
//! 1. `StartDay` - nothing logged yet
//! 2. `LowEnergy` - calories below the low-energy threshold
//! 3. `ProteinGoalNear` - protein above the near-goal threshold
//!
//! `StartDay` does not suppress `LowEnergy`: with zero calories logged both fire.
//! A rule whose percent cannot be computed (zero target) simply does not match.

use crate::aggregator::percent_of;
use crate::config::InsightThresholdsConfig;
use nutrily_core::models::{DailyTarget, Nutrient, NutritionTotals};
use serde::{Deserialize, Serialize};

/// Kinds of daily insight
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum InsightKind {
    /// No meals logged yet
    StartDay,
    /// Well under the calorie target
    LowEnergy,
    /// Protein target nearly reached
    ProteinGoalNear,
}

/// Visual tone hint for presentation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum InsightTone {
    /// Neutral guidance
    Info,
    /// Something to act on
    Warning,
    /// Positive reinforcement
    Success,
}

impl InsightKind {
    /// Every kind, in rule order
    pub const ALL: [Self; 3] = [Self::StartDay, Self::LowEnergy, Self::ProteinGoalNear];

    /// Short headline
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::StartDay => "Start Your Day",
            Self::LowEnergy => "Energy Boost Needed",
            Self::ProteinGoalNear => "Protein Goal Almost Reached!",
        }
    }

    /// Body text
    #[must_use]
    pub const fn message(&self) -> &'static str {
        match self {
            Self::StartDay => "Log your first meal to begin tracking your nutrition journey!",
            Self::LowEnergy => "You're running low on calories today. Consider a healthy snack!",
            Self::ProteinGoalNear => "Great job hitting your protein target. Keep it up!",
        }
    }

    /// Presentation tone
    #[must_use]
    pub const fn tone(&self) -> InsightTone {
        match self {
            Self::StartDay => InsightTone::Info,
            Self::LowEnergy => InsightTone::Warning,
            Self::ProteinGoalNear => InsightTone::Success,
        }
    }
}

/// An advisory message derived from totals vs target
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct Insight {
    /// Rule that produced the insight
    pub kind: InsightKind,
    /// Headline
    pub title: &'static str,
    /// Body text
    pub message: &'static str,
    /// Presentation tone
    pub tone: InsightTone,
}

impl From<InsightKind> for Insight {
    fn from(kind: InsightKind) -> Self {
        Self {
            kind,
            title: kind.title(),
            message: kind.message(),
            tone: kind.tone(),
        }
    }
}

/// Evaluate the insight rules for one day
#[must_use]
pub fn derive_insights(
    totals: &NutritionTotals,
    target: &DailyTarget,
    thresholds: &InsightThresholdsConfig,
) -> Vec<Insight> {
    let calories_pct = percent_of(totals.calories, target.get(Nutrient::Calories));
    let protein_pct = percent_of(totals.protein_g, target.get(Nutrient::Protein));

    InsightKind::ALL
        .into_iter()
        .filter(|kind| match kind {
            InsightKind::StartDay => totals.calories == 0.0,
            InsightKind::LowEnergy => {
                calories_pct.is_some_and(|pct| pct < thresholds.low_energy_percent)
            }
            InsightKind::ProteinGoalNear => {
                protein_pct.is_some_and(|pct| pct > thresholds.protein_near_percent)
            }
        })
        .map(Insight::from)
        .collect()
}
