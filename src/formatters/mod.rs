// ABOUTME: Presentation helpers: display rounding, ring percentages and text/JSON rendering
// ABOUTME: The engine never rounds for display; everything user-facing goes through here
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Output formatting
//!
//! Grams and calories are shown with one decimal. Progress rings are capped
//! at 100% while the underlying percentages stay uncapped.

use crate::errors::{AppError, ErrorResponse};
use crate::services::DailyDashboard;
use nutrily_core::models::{DailyTarget, Nutrient, NutritionTotals};
use nutrily_intelligence::{DailySummary, MacroConsistency, MacroPercentages};
use serde::Serialize;
use std::fmt::{self, Write as _};
use thiserror::Error;

/// Output serialization format selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text (default)
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

impl OutputFormat {
    /// Parse format from string parameter (case-insensitive)
    /// Returns `Text` for unrecognized values
    #[must_use]
    pub fn from_str_param(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => Self::Json,
            _ => Self::Text,
        }
    }

    /// Get the format name as a string
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Json => "json",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error type for formatting operations
#[derive(Debug, Clone, Error)]
#[error("Format error ({format}): {message}")]
pub struct FormatError {
    /// Error message describing what went wrong
    pub message: String,
    /// The format that was being used when the error occurred
    pub format: OutputFormat,
}

/// Round to one decimal place for display
#[must_use]
pub fn round_display(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Percent to draw on a progress ring: capped to `0..=100`, undefined shows as empty
#[must_use]
pub fn ring_percent(percent: Option<f64>) -> f64 {
    percent.map_or(0.0, |p| p.clamp(0.0, 100.0))
}

/// Serialize data as pretty-printed JSON
///
/// # Errors
///
/// Returns `FormatError` if serialization fails
pub fn to_json<T: Serialize>(data: &T) -> Result<String, FormatError> {
    serde_json::to_string_pretty(data).map_err(|e| FormatError {
        message: e.to_string(),
        format: OutputFormat::Json,
    })
}

/// Serialize an error as the `{"error": {code, message, details}}` body
///
/// # Errors
///
/// Returns `FormatError` if serialization fails
pub fn error_to_json(error: &AppError) -> Result<String, FormatError> {
    to_json(&ErrorResponse::from(error))
}

fn amount(nutrient: Nutrient, value: f64) -> String {
    format!("{}{}", round_display(value), nutrient.unit())
}

/// Render a daily target with its macro split and consistency
#[must_use]
pub fn render_target(
    target: &DailyTarget,
    split: Option<&MacroPercentages>,
    consistency: &MacroConsistency,
) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Daily target");
    let _ = writeln!(out, "{}", "=".repeat(40));
    for nutrient in Nutrient::ALL {
        let _ = writeln!(
            out,
            "  {:<10} {}",
            nutrient.label(),
            amount(nutrient, target.get(nutrient))
        );
    }
    if let Some(split) = split {
        let _ = writeln!(
            out,
            "  Split      P {:.0}% / C {:.0}% / F {:.0}%",
            split.protein_percent, split.carbs_percent, split.fat_percent
        );
    }
    out.push_str(&render_consistency(consistency));
    out
}

/// One-line consistency verdict
#[must_use]
pub fn render_consistency(consistency: &MacroConsistency) -> String {
    let verdict = if consistency.consistent {
        "consistent"
    } else {
        "INCONSISTENT"
    };
    format!(
        "  Macros     {} kcal from macros, off by {} kcal ({verdict})\n",
        round_display(consistency.computed_calories),
        round_display(consistency.delta_kcal)
    )
}

fn render_totals_row(out: &mut String, label: &str, totals: &NutritionTotals) {
    let _ = writeln!(
        out,
        "  {:<10} {:>8} cal {:>7}g P {:>7}g C {:>7}g F",
        label,
        round_display(totals.calories),
        round_display(totals.protein_g),
        round_display(totals.carbs_g),
        round_display(totals.fat_g)
    );
}

/// Render the dashboard for one day
#[must_use]
pub fn render_dashboard(dashboard: &DailyDashboard) -> String {
    let report = &dashboard.report;
    let mut out = String::new();

    let _ = writeln!(out, "Nutrition for {}", dashboard.date);
    let _ = writeln!(out, "{}", "=".repeat(60));
    if dashboard.using_default_target {
        let _ = writeln!(out, "(using default goals; complete profile setup to personalize)");
    }

    for (nutrient, percent) in report.progress.iter() {
        let _ = writeln!(
            out,
            "  {:<10} {:>10} / {:<10} {:>5.0}%  ({} left)",
            nutrient.label(),
            amount(nutrient, report.totals.get(nutrient)),
            amount(nutrient, report.target.get(nutrient)),
            ring_percent(percent),
            amount(nutrient, report.remaining.get(nutrient)),
        );
    }

    if !dashboard.by_meal_type.is_empty() {
        let _ = writeln!(out, "\nBy meal");
        for (meal_type, totals) in &dashboard.by_meal_type {
            render_totals_row(&mut out, meal_type.as_str(), totals);
        }
    }

    if !dashboard.meals.is_empty() {
        let _ = writeln!(out, "\nMeals ({})", report.meal_count);
        for meal in &dashboard.meals {
            let _ = writeln!(
                out,
                "  {} {:<9} {} ({} x {}) {} cal",
                meal.logged_at.format("%H:%M"),
                meal.meal_type.as_str(),
                meal.name,
                meal.servings,
                meal.portion,
                round_display(meal.calories)
            );
        }
    }

    if !report.insights.is_empty() {
        let _ = writeln!(out, "\nInsights");
        for insight in &report.insights {
            let _ = writeln!(out, "  * {}: {}", insight.title, insight.message);
        }
    }

    if !dashboard.target_consistency.consistent {
        let _ = writeln!(out);
        out.push_str(&render_consistency(&dashboard.target_consistency));
    }
    out
}

/// Render per-day history summaries
#[must_use]
pub fn render_history(summaries: &[DailySummary]) -> String {
    if summaries.is_empty() {
        return "No meals logged yet.\n".to_owned();
    }

    let mut out = String::new();
    let _ = writeln!(out, "Meal history ({} days)", summaries.len());
    let _ = writeln!(out, "{}", "=".repeat(60));
    for summary in summaries {
        let label = format!("{} ({})", summary.date, summary.meal_count);
        render_totals_row(&mut out, &label, &summary.totals);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_display_one_decimal() {
        assert!((round_display(12.345) - 12.3).abs() < f64::EPSILON);
        assert!((round_display(0.05) - 0.1).abs() < f64::EPSILON);
    }

    #[test]
    fn test_ring_percent_caps_and_defaults() {
        assert!((ring_percent(Some(140.0)) - 100.0).abs() < f64::EPSILON);
        assert!((ring_percent(Some(42.5)) - 42.5).abs() < f64::EPSILON);
        assert!(ring_percent(None).abs() < f64::EPSILON);
    }

    #[test]
    fn test_format_param_parsing() {
        assert_eq!(OutputFormat::from_str_param("JSON"), OutputFormat::Json);
        assert_eq!(OutputFormat::from_str_param("yaml"), OutputFormat::Text);
    }

    #[test]
    fn test_error_body_carries_code_and_details() {
        let error = AppError::invalid_profile("weight_kg", "must be greater than zero");
        let json = error_to_json(&error).unwrap();
        let body: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(body["error"]["code"], "INVALID_PROFILE");
        assert_eq!(body["error"]["details"]["field"], "weight_kg");
    }

    #[test]
    fn test_empty_history_message() {
        assert_eq!(render_history(&[]), "No meals logged yet.\n");
    }
}
