// ABOUTME: Main library entry point for the nutrily nutrition tracking engine
// ABOUTME: Wires storage, services and presentation around the pure nutrition engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Nutrily
//!
//! Personal nutrition tracking: users log meals and see totals against a
//! daily target derived from their profile.
//!
//! ## Architecture
//!
//! - **`nutrily_core`**: models, constants and the error type
//! - **`nutrily_intelligence`**: the pure engine (target derivation, aggregation,
//!   insights, history)
//! - **This crate**: environment configuration, logging, a storage seam,
//!   services that combine storage with the engine, and output formatting
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use nutrily::config::AppConfig;
//! use nutrily::database_plugins::InMemoryDatabase;
//! use nutrily::errors::AppResult;
//! use nutrily::services::DashboardService;
//!
//! #[tokio::main]
//! async fn main() -> AppResult<()> {
//!     let config = Arc::new(AppConfig::from_env()?);
//!     let dashboards = DashboardService::new(InMemoryDatabase::new(), config);
//!     let today = chrono::Utc::now().date_naive();
//!     let dashboard = dashboards.daily_dashboard(uuid::Uuid::nil(), today).await?;
//!     println!("{} insights", dashboard.report.insights.len());
//!     Ok(())
//! }
//! ```

/// Environment configuration and engine parameters
pub mod config;

/// Constants and environment variable names
pub mod constants;

/// Nutrition log files for the command-line tool
pub mod data_file;

/// Storage abstraction and the in-memory provider
pub mod database_plugins;

/// Unified error handling
pub mod errors;

/// Display rounding and text/JSON rendering
pub mod formatters;

/// Structured logging setup
pub mod logging;

/// Domain models
pub mod models;

/// Services combining storage with the nutrition engine
pub mod services;

pub use nutrily_intelligence as intelligence;
