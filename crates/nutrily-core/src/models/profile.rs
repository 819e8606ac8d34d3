// ABOUTME: User profile model used to derive daily nutrition targets
// ABOUTME: Biological sex, activity level, weight goal and raw setup-form parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::warn;

/// Biological sex for the BMR sex constant
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum BiologicalSex {
    /// Male (+5 kcal constant)
    Male,
    /// Female (-161 kcal constant)
    Female,
}

impl FromStr for BiologicalSex {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" => Ok(Self::Male),
            "female" | "f" => Ok(Self::Female),
            other => Err(AppError::invalid_profile(
                "sex",
                format!("expected 'male' or 'female', got '{other}'"),
            )),
        }
    }
}

/// Activity level for the TDEE multiplier
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Little or no exercise
    Sedentary,
    /// Light exercise 1-3 days/week
    Light,
    /// Moderate exercise 3-5 days/week
    Moderate,
    /// Hard exercise 6-7 days/week
    Active,
    /// Very hard exercise or physical job
    #[serde(alias = "veryActive")]
    VeryActive,
}

impl ActivityLevel {
    /// Parse an activity level, falling back to `Sedentary` for unknown values
    ///
    /// Malformed input keeps producing a target (with the lowest multiplier)
    /// instead of failing setup.
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s.trim().to_lowercase().replace(['_', '-', ' '], "").as_str() {
            "sedentary" => Self::Sedentary,
            "light" | "lightlyactive" => Self::Light,
            "moderate" | "moderatelyactive" => Self::Moderate,
            "active" => Self::Active,
            "veryactive" => Self::VeryActive,
            other => {
                warn!(
                    activity_level = %other,
                    "Unknown activity level, using sedentary multiplier"
                );
                Self::Sedentary
            }
        }
    }

    /// Stable identifier used in serialized form
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Sedentary => "sedentary",
            Self::Light => "light",
            Self::Moderate => "moderate",
            Self::Active => "active",
            Self::VeryActive => "very_active",
        }
    }
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Body-weight goal driving the calorie adjustment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum WeightGoal {
    /// Calorie deficit
    Lose,
    /// No adjustment
    #[default]
    Maintain,
    /// Calorie surplus
    Gain,
}

impl WeightGoal {
    /// Parse a goal; anything other than lose/gain applies no adjustment
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "lose" | "lose_weight" | "weight_loss" => Self::Lose,
            "gain" | "gain_weight" | "weight_gain" => Self::Gain,
            _ => Self::Maintain,
        }
    }
}

/// Biometric and lifestyle profile used by the goal calculator
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserProfile {
    /// Age in years
    pub age: u32,
    /// Biological sex
    pub sex: BiologicalSex,
    /// Height in centimeters
    pub height_cm: f64,
    /// Weight in kilograms
    pub weight_kg: f64,
    /// Activity level
    pub activity_level: ActivityLevel,
    /// Weight goal
    pub goal: WeightGoal,
    /// Free-text dietary restrictions (vegetarian, gluten-free, ...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dietary_restrictions: Option<String>,
}

impl UserProfile {
    /// Check that every numeric field is present and strictly positive
    ///
    /// # Errors
    ///
    /// Returns `InvalidProfile` naming the first offending field
    pub fn validate(&self) -> AppResult<()> {
        if self.age == 0 {
            return Err(AppError::invalid_profile(
                "age",
                "must be greater than zero",
            ));
        }
        ensure_positive("height_cm", self.height_cm)?;
        ensure_positive("weight_kg", self.weight_kg)?;
        Ok(())
    }
}

fn ensure_positive(field: &str, value: f64) -> AppResult<()> {
    if !value.is_finite() {
        return Err(AppError::invalid_profile(field, "must be a finite number"));
    }
    if value <= 0.0 {
        return Err(AppError::invalid_profile(field, "must be greater than zero"));
    }
    Ok(())
}

/// Raw profile setup form, every field as typed by the user
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfileForm {
    /// Age in years
    pub age: Option<String>,
    /// `male` or `female`
    pub sex: Option<String>,
    /// Height in centimeters
    pub height_cm: Option<String>,
    /// Weight in kilograms
    pub weight_kg: Option<String>,
    /// Activity level identifier
    pub activity_level: Option<String>,
    /// `lose`, `maintain` or `gain`
    pub goal: Option<String>,
    /// Optional dietary restrictions
    pub dietary_restrictions: Option<String>,
}

impl ProfileForm {
    /// Parse and validate the form into a [`UserProfile`]
    ///
    /// Activity level and goal are parsed leniently (see
    /// [`ActivityLevel::from_str_lossy`] and [`WeightGoal::from_str_lossy`]);
    /// numeric fields and sex are strict.
    ///
    /// # Errors
    ///
    /// Returns `InvalidProfile` if a required field is missing, unparseable or
    /// not strictly positive
    pub fn into_profile(self) -> AppResult<UserProfile> {
        let age_raw = required("age", self.age.as_deref())?;
        let age = age_raw
            .parse::<u32>()
            .map_err(|e| AppError::invalid_profile("age", format!("'{age_raw}': {e}")))?;
        let sex = required("sex", self.sex.as_deref())?.parse::<BiologicalSex>()?;
        let height_cm = parse_measurement("height_cm", self.height_cm.as_deref())?;
        let weight_kg = parse_measurement("weight_kg", self.weight_kg.as_deref())?;
        let activity_level =
            ActivityLevel::from_str_lossy(required("activity_level", self.activity_level.as_deref())?);
        let goal = self
            .goal
            .as_deref()
            .map_or(WeightGoal::Maintain, WeightGoal::from_str_lossy);
        let dietary_restrictions = self
            .dietary_restrictions
            .map(|r| r.trim().to_owned())
            .filter(|r| !r.is_empty());

        let profile = UserProfile {
            age,
            sex,
            height_cm,
            weight_kg,
            activity_level,
            goal,
            dietary_restrictions,
        };
        profile.validate()?;
        Ok(profile)
    }
}

fn required<'a>(field: &str, value: Option<&'a str>) -> AppResult<&'a str> {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(AppError::invalid_profile(field, "is required")),
    }
}

fn parse_measurement(field: &str, value: Option<&str>) -> AppResult<f64> {
    let raw = required(field, value)?;
    let parsed = raw
        .parse::<f64>()
        .map_err(|e| AppError::invalid_profile(field, format!("'{raw}': {e}")))?;
    ensure_positive(field, parsed)?;
    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorCode;

    fn complete_form() -> ProfileForm {
        ProfileForm {
            age: Some("30".into()),
            sex: Some("male".into()),
            height_cm: Some("180".into()),
            weight_kg: Some("80.5".into()),
            activity_level: Some("moderate".into()),
            goal: Some("maintain".into()),
            dietary_restrictions: Some("  ".into()),
        }
    }

    #[test]
    fn test_form_parses_complete_profile() {
        let profile = complete_form().into_profile().unwrap();

        assert_eq!(profile.age, 30);
        assert_eq!(profile.sex, BiologicalSex::Male);
        assert!((profile.weight_kg - 80.5).abs() < f64::EPSILON);
        assert_eq!(profile.activity_level, ActivityLevel::Moderate);
        assert_eq!(profile.goal, WeightGoal::Maintain);
        assert_eq!(profile.dietary_restrictions, None);
    }

    #[test]
    fn test_form_rejects_missing_weight() {
        let form = ProfileForm {
            weight_kg: None,
            ..complete_form()
        };

        let error = form.into_profile().unwrap_err();
        assert_eq!(error.code, ErrorCode::InvalidProfile);
        assert_eq!(error.details["field"], "weight_kg");
    }

    #[test]
    fn test_form_rejects_non_positive_height() {
        let form = ProfileForm {
            height_cm: Some("0".into()),
            ..complete_form()
        };

        let error = form.into_profile().unwrap_err();
        assert_eq!(error.details["field"], "height_cm");
    }

    #[test]
    fn test_form_rejects_unknown_sex() {
        let form = ProfileForm {
            sex: Some("other".into()),
            ..complete_form()
        };

        assert_eq!(
            form.into_profile().unwrap_err().code,
            ErrorCode::InvalidProfile
        );
    }

    #[test]
    fn test_unknown_activity_level_falls_back_to_sedentary() {
        let form = ProfileForm {
            activity_level: Some("couch_potato".into()),
            ..complete_form()
        };

        let profile = form.into_profile().unwrap();
        assert_eq!(profile.activity_level, ActivityLevel::Sedentary);
    }

    #[test]
    fn test_activity_level_accepts_camel_case() {
        assert_eq!(
            ActivityLevel::from_str_lossy("veryActive"),
            ActivityLevel::VeryActive
        );
        let parsed: ActivityLevel = serde_json::from_str("\"veryActive\"").unwrap();
        assert_eq!(parsed, ActivityLevel::VeryActive);
    }

    #[test]
    fn test_unknown_goal_means_maintain() {
        assert_eq!(WeightGoal::from_str_lossy("bulk"), WeightGoal::Maintain);
        assert_eq!(WeightGoal::from_str_lossy("LOSE"), WeightGoal::Lose);
    }

    #[test]
    fn test_validate_rejects_nan_weight() {
        let mut profile = complete_form().into_profile().unwrap();
        profile.weight_kg = f64::NAN;

        assert!(profile.validate().is_err());
    }
}
