// ABOUTME: Core types and constants for the Nutrily nutrition tracking engine
// ABOUTME: Foundation crate with error handling, domain models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Nutrily Core
//!
//! Foundation crate providing shared types and constants for the Nutrily
//! nutrition tracking engine. This crate is designed to change infrequently,
//! enabling incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode` and `AppResult`
//! - **constants**: Energy densities, default goals and unit conventions
//! - **models**: User profile, daily target, meal entries and nutrition totals

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (`UserProfile`, `DailyTarget`, `MealEntry`, `NutritionTotals`)
pub mod models;
