// ABOUTME: Nutrition engine configuration with environment overrides and validation
// ABOUTME: Loaded once at startup and passed explicitly to calculator, aggregator and insights
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Nutrition Configuration Module
//!
//! Defaults reproduce the published formulas exactly. Every value can be
//! overridden through `NUTRILY_*` environment variables; the result is
//! validated before use and an invalid environment is a startup error.

/// Configuration error types
pub mod error;

/// Domain configuration sections
pub mod nutrition;

pub use error::ConfigError;
pub use nutrition::{
    ActivityFactorsConfig, BmrConfig, InsightThresholdsConfig, TargetDerivationConfig,
};

use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use tracing::debug;

/// Main nutrition configuration container
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NutritionConfig {
    /// Basal Metabolic Rate coefficients
    pub bmr: BmrConfig,
    /// Activity factor multipliers for TDEE
    pub activity_factors: ActivityFactorsConfig,
    /// Goal adjustment, macro split and consistency tolerance
    pub target_derivation: TargetDerivationConfig,
    /// Daily insight thresholds
    pub insights: InsightThresholdsConfig,
}

impl NutritionConfig {
    /// Load configuration from the process environment
    ///
    /// # Errors
    ///
    /// Returns an error if an environment variable holds an unparseable value
    /// or the resulting configuration fails validation
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_with(|name| env::var(name).ok())
    }

    /// Load configuration using `lookup` to resolve override variables
    ///
    /// # Errors
    ///
    /// Returns an error if an override is unparseable or validation fails
    pub fn load_with(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let config = Self::default().apply_overrides(&lookup)?;
        config.validate()?;
        debug!(?config, "Nutrition configuration loaded");
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error describing the first violated constraint
    pub fn validate(&self) -> Result<(), ConfigError> {
        // NaN fails every comparison below, so reject non-finite values first
        if self.float_values().iter().any(|v| !v.is_finite()) {
            return Err(ConfigError::ValueOutOfRange(
                "nutrition configuration values must be finite numbers",
            ));
        }

        if self.bmr.msj_weight_coef <= 0.0 || self.bmr.msj_height_coef <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "BMR weight and height coefficients must be positive",
            ));
        }
        if self.bmr.msj_age_coef > 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "BMR age coefficient must not be positive",
            ));
        }

        let factors = &self.activity_factors;
        if factors.sedentary < 1.0 || factors.very_active > 2.5 {
            return Err(ConfigError::ValueOutOfRange(
                "Activity factors must be between 1.0 and 2.5",
            ));
        }
        if factors.sedentary >= factors.light
            || factors.light >= factors.moderate
            || factors.moderate >= factors.active
            || factors.active >= factors.very_active
        {
            return Err(ConfigError::InvalidRange(
                "Activity factors must be in ascending order",
            ));
        }

        let derivation = &self.target_derivation;
        if derivation.goal_adjustment_kcal < 0 {
            return Err(ConfigError::ValueOutOfRange(
                "goal_adjustment_kcal must not be negative",
            ));
        }
        if derivation.protein_g_per_kg <= 0.0 || derivation.protein_g_per_kg > 4.0 {
            return Err(ConfigError::ValueOutOfRange(
                "protein_g_per_kg must be between 0 and 4.0",
            ));
        }
        if !(0.0..1.0).contains(&derivation.fat_calorie_share) {
            return Err(ConfigError::ValueOutOfRange(
                "fat_calorie_share must be in [0.0, 1.0)",
            ));
        }
        if derivation.macro_tolerance_kcal < 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "macro_tolerance_kcal must not be negative",
            ));
        }

        let insights = &self.insights;
        if !(0.0..=100.0).contains(&insights.low_energy_percent) {
            return Err(ConfigError::ValueOutOfRange(
                "low_energy_percent must be between 0 and 100",
            ));
        }
        if insights.protein_near_percent < 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "protein_near_percent must not be negative",
            ));
        }

        Ok(())
    }

    const fn float_values(&self) -> [f64; 15] {
        [
            self.bmr.msj_weight_coef,
            self.bmr.msj_height_coef,
            self.bmr.msj_age_coef,
            self.bmr.msj_male_constant,
            self.bmr.msj_female_constant,
            self.activity_factors.sedentary,
            self.activity_factors.light,
            self.activity_factors.moderate,
            self.activity_factors.active,
            self.activity_factors.very_active,
            self.target_derivation.protein_g_per_kg,
            self.target_derivation.fat_calorie_share,
            self.target_derivation.macro_tolerance_kcal,
            self.insights.low_energy_percent,
            self.insights.protein_near_percent,
        ]
    }

    /// Helper function to parse and apply an override
    fn apply_var<T: FromStr>(
        lookup: &impl Fn(&str) -> Option<String>,
        name: &str,
        target: &mut T,
    ) -> Result<(), ConfigError> {
        if let Some(val) = lookup(name) {
            *target = val
                .trim()
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {name}: '{val}'")))?;
        }
        Ok(())
    }

    /// Apply `NUTRILY_*` overrides
    fn apply_overrides(
        mut self,
        lookup: &impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        Self::apply_var(lookup, "NUTRILY_BMR_WEIGHT_COEF", &mut self.bmr.msj_weight_coef)?;
        Self::apply_var(lookup, "NUTRILY_BMR_HEIGHT_COEF", &mut self.bmr.msj_height_coef)?;
        Self::apply_var(lookup, "NUTRILY_BMR_AGE_COEF", &mut self.bmr.msj_age_coef)?;
        Self::apply_var(
            lookup,
            "NUTRILY_BMR_MALE_CONSTANT",
            &mut self.bmr.msj_male_constant,
        )?;
        Self::apply_var(
            lookup,
            "NUTRILY_BMR_FEMALE_CONSTANT",
            &mut self.bmr.msj_female_constant,
        )?;

        Self::apply_var(
            lookup,
            "NUTRILY_ACTIVITY_SEDENTARY",
            &mut self.activity_factors.sedentary,
        )?;
        Self::apply_var(lookup, "NUTRILY_ACTIVITY_LIGHT", &mut self.activity_factors.light)?;
        Self::apply_var(
            lookup,
            "NUTRILY_ACTIVITY_MODERATE",
            &mut self.activity_factors.moderate,
        )?;
        Self::apply_var(lookup, "NUTRILY_ACTIVITY_ACTIVE", &mut self.activity_factors.active)?;
        Self::apply_var(
            lookup,
            "NUTRILY_ACTIVITY_VERY_ACTIVE",
            &mut self.activity_factors.very_active,
        )?;

        Self::apply_var(
            lookup,
            "NUTRILY_GOAL_ADJUSTMENT_KCAL",
            &mut self.target_derivation.goal_adjustment_kcal,
        )?;
        Self::apply_var(
            lookup,
            "NUTRILY_PROTEIN_G_PER_KG",
            &mut self.target_derivation.protein_g_per_kg,
        )?;
        Self::apply_var(
            lookup,
            "NUTRILY_FAT_SHARE",
            &mut self.target_derivation.fat_calorie_share,
        )?;
        Self::apply_var(
            lookup,
            "NUTRILY_MACRO_TOLERANCE_KCAL",
            &mut self.target_derivation.macro_tolerance_kcal,
        )?;

        Self::apply_var(
            lookup,
            "NUTRILY_INSIGHT_LOW_ENERGY_PERCENT",
            &mut self.insights.low_energy_percent,
        )?;
        Self::apply_var(
            lookup,
            "NUTRILY_INSIGHT_PROTEIN_NEAR_PERCENT",
            &mut self.insights.protein_near_percent,
        )?;

        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_defaults_are_valid() {
        assert!(NutritionConfig::default().validate().is_ok());
    }

    #[test]
    fn test_override_applies() {
        let config = NutritionConfig::load_with(lookup_from(&[
            ("NUTRILY_GOAL_ADJUSTMENT_KCAL", "300"),
            ("NUTRILY_MACRO_TOLERANCE_KCAL", " 25.5 "),
        ]))
        .unwrap();

        assert_eq!(config.target_derivation.goal_adjustment_kcal, 300);
        assert!((config.target_derivation.macro_tolerance_kcal - 25.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_unparseable_override_is_rejected() {
        let result = NutritionConfig::load_with(lookup_from(&[("NUTRILY_FAT_SHARE", "quarter")]));

        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_descending_activity_factors_fail_validation() {
        let result =
            NutritionConfig::load_with(lookup_from(&[("NUTRILY_ACTIVITY_LIGHT", "1.1")]));

        assert!(matches!(result, Err(ConfigError::InvalidRange(_))));
    }

    #[test]
    fn test_fat_share_out_of_range() {
        let result = NutritionConfig::load_with(lookup_from(&[("NUTRILY_FAT_SHARE", "1.5")]));

        assert!(matches!(result, Err(ConfigError::ValueOutOfRange(_))));
    }

    #[test]
    fn test_non_finite_overrides_are_rejected() {
        for name in [
            "NUTRILY_MACRO_TOLERANCE_KCAL",
            "NUTRILY_PROTEIN_G_PER_KG",
            "NUTRILY_BMR_WEIGHT_COEF",
            "NUTRILY_BMR_AGE_COEF",
            "NUTRILY_BMR_FEMALE_CONSTANT",
            "NUTRILY_INSIGHT_PROTEIN_NEAR_PERCENT",
        ] {
            let result = NutritionConfig::load_with(lookup_from(&[(name, "NaN")]));
            assert!(
                matches!(result, Err(ConfigError::ValueOutOfRange(_))),
                "{name}=NaN was accepted"
            );
        }

        let result = NutritionConfig::load_with(lookup_from(&[("NUTRILY_BMR_MALE_CONSTANT", "inf")]));
        assert!(matches!(result, Err(ConfigError::ValueOutOfRange(_))));
    }

    #[test]
    fn test_positive_age_coefficient_is_rejected() {
        let result = NutritionConfig::load_with(lookup_from(&[("NUTRILY_BMR_AGE_COEF", "5")]));

        assert!(matches!(result, Err(ConfigError::ValueOutOfRange(_))));
    }
}
