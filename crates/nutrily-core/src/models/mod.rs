// ABOUTME: Core data models for nutrition tracking
// ABOUTME: Re-exports profile, target, meal and totals types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// User biometric and lifestyle profile plus raw form parsing
pub mod profile;

/// Daily calorie and macro targets
pub mod target;

/// Logged meal entries and meal categories
pub mod meal;

/// Summed nutrition values and per-nutrient addressing
pub mod totals;

pub use meal::{MealEntry, MealType, NewMealEntry};
pub use profile::{ActivityLevel, BiologicalSex, ProfileForm, UserProfile, WeightGoal};
pub use target::DailyTarget;
pub use totals::{Nutrient, NutritionTotals};
