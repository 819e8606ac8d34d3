// ABOUTME: Nutrily CLI - daily targets, macro checks, dashboards and history from the command line
// ABOUTME: Reads JSON nutrition logs into the in-memory provider and renders text or JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Derive a daily target from a profile
//! nutrily-cli target --age 30 --sex male --height-cm 180 --weight-kg 80 \
//!     --activity moderate --goal maintain
//!
//! # Check that macros add up to calories
//! nutrily-cli validate --calories 2000 --protein 150 --carbs 200 --fats 67
//!
//! # Dashboard for one day of a log file
//! nutrily-cli dashboard --data log.json --date 2025-06-01
//!
//! # Per-day history as JSON
//! nutrily-cli history --data log.json --format json
//! ```

mod commands;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use nutrily::config::AppConfig;
use nutrily::errors::AppResult;
use nutrily::formatters::{error_to_json, OutputFormat};
use nutrily::logging::LoggingConfig;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "nutrily-cli",
    about = "Nutrily nutrition engine CLI",
    long_about = "Derive daily nutrition targets, validate macro splits, and summarize meal logs."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Compute a daily target from profile fields
    Target {
        /// Age in years
        #[arg(long)]
        age: String,

        /// Biological sex (male or female)
        #[arg(long)]
        sex: String,

        /// Height in centimeters
        #[arg(long)]
        height_cm: String,

        /// Weight in kilograms
        #[arg(long)]
        weight_kg: String,

        /// Activity level (sedentary, light, moderate, active, very_active)
        #[arg(long, default_value = "sedentary")]
        activity: String,

        /// Weight goal (lose, maintain, gain)
        #[arg(long, default_value = "maintain")]
        goal: String,

        /// Output format (text or json)
        #[arg(long, default_value = "text", value_parser = parse_format)]
        format: OutputFormat,
    },

    /// Check that macro grams add up to the stated calories
    Validate {
        /// Daily calories
        #[arg(long)]
        calories: i32,

        /// Protein grams
        #[arg(long)]
        protein: f64,

        /// Carbohydrate grams
        #[arg(long)]
        carbs: f64,

        /// Fat grams
        #[arg(long)]
        fats: f64,

        /// Allowed gap in kcal (defaults to the configured tolerance)
        #[arg(long)]
        tolerance: Option<f64>,

        /// Output format (text or json)
        #[arg(long, default_value = "text", value_parser = parse_format)]
        format: OutputFormat,
    },

    /// Show totals, remaining amounts, progress and insights for one day
    Dashboard {
        /// Nutrition log file (JSON)
        #[arg(long)]
        data: PathBuf,

        /// Day to show (YYYY-MM-DD, defaults to today in UTC)
        #[arg(long)]
        date: Option<NaiveDate>,

        /// Output format (text or json)
        #[arg(long, default_value = "text", value_parser = parse_format)]
        format: OutputFormat,
    },

    /// Summarize every logged day
    History {
        /// Nutrition log file (JSON)
        #[arg(long)]
        data: PathBuf,

        /// Output format (text or json)
        #[arg(long, default_value = "text", value_parser = parse_format)]
        format: OutputFormat,
    },
}

fn parse_format(s: &str) -> Result<OutputFormat, String> {
    match s.to_lowercase().as_str() {
        "text" | "json" => Ok(OutputFormat::from_str_param(s)),
        other => Err(format!("unknown format '{other}', expected text or json")),
    }
}

impl Command {
    const fn format(&self) -> OutputFormat {
        match self {
            Self::Target { format, .. }
            | Self::Validate { format, .. }
            | Self::Dashboard { format, .. }
            | Self::History { format, .. } => *format,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    LoggingConfig::for_cli(cli.verbose).init()?;
    let config = Arc::new(AppConfig::from_env().context("Invalid NUTRILY_* configuration")?);
    debug!("Nutrily CLI configured");

    let format = cli.command.format();
    if let Err(error) = run(cli.command, config).await {
        // JSON callers get a parseable error body on stdout as well
        if format == OutputFormat::Json {
            println!("{}", error_to_json(&error)?);
        }
        return Err(error.into());
    }

    Ok(())
}

async fn run(command: Command, config: Arc<AppConfig>) -> AppResult<()> {
    match command {
        Command::Target {
            age,
            sex,
            height_cm,
            weight_kg,
            activity,
            goal,
            format,
        } => {
            let form = commands::target::form(age, sex, height_cm, weight_kg, activity, goal);
            commands::target::compute(&config, form, format).await
        }
        Command::Validate {
            calories,
            protein,
            carbs,
            fats,
            tolerance,
            format,
        } => commands::target::validate(
            &config, calories, protein, carbs, fats, tolerance, format,
        ),
        Command::Dashboard { data, date, format } => {
            commands::report::dashboard(config, &data, date, format).await
        }
        Command::History { data, format } => {
            commands::report::history(config, &data, format).await
        }
    }
}
