// ABOUTME: Domain service layer orchestrating storage and the nutrition engine
// ABOUTME: Profile setup, meal logging and dashboard assembly, generic over the storage provider
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Domain service layer
//!
//! Services hold a [`DatabaseProvider`](crate::database_plugins::DatabaseProvider)
//! and a shared [`AppConfig`](crate::config::AppConfig). The nutrition engine
//! itself is pure; everything stateful happens here.

/// Profile setup and daily target management
pub mod profile;

/// Meal logging and removal
pub mod meal_log;

/// Dashboard and history assembly
pub mod dashboard;

pub use dashboard::{DailyDashboard, DashboardService};
pub use meal_log::MealLogService;
pub use profile::{ProfileService, ProfileSetup};
