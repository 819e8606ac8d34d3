// ABOUTME: Log-file report commands for nutrily-cli
// ABOUTME: Imports a nutrition log and prints the daily dashboard or per-day history
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::emit;
use chrono::{NaiveDate, Utc};
use nutrily::config::AppConfig;
use nutrily::data_file::NutritionLogFile;
use nutrily::database_plugins::InMemoryDatabase;
use nutrily::errors::AppResult;
use nutrily::formatters::{render_dashboard, render_history, OutputFormat};
use nutrily::services::DashboardService;
use std::path::Path;
use std::sync::Arc;
use uuid::Uuid;

async fn load(config: &AppConfig, path: &Path) -> AppResult<InMemoryDatabase> {
    let database = InMemoryDatabase::new();
    NutritionLogFile::load(path)
        .await?
        .import_into(&database, Uuid::nil(), config)
        .await?;
    Ok(database)
}

/// Print the dashboard for one day of the log
pub async fn dashboard(
    config: Arc<AppConfig>,
    path: &Path,
    date: Option<NaiveDate>,
    format: OutputFormat,
) -> AppResult<()> {
    let database = load(&config, path).await?;
    let date = date.unwrap_or_else(|| Utc::now().date_naive());
    let dashboard = DashboardService::new(database, config)
        .daily_dashboard(Uuid::nil(), date)
        .await?;
    emit(&dashboard, format, render_dashboard)
}

/// Print per-day summaries of the log
pub async fn history(config: Arc<AppConfig>, path: &Path, format: OutputFormat) -> AppResult<()> {
    let database = load(&config, path).await?;
    let summaries = DashboardService::new(database, config)
        .history(Uuid::nil())
        .await?;
    emit(&summaries, format, |s| render_history(s))
}
