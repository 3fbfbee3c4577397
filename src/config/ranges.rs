// ABOUTME: Closed validation intervals for product nutrients and user physiology
// ABOUTME: Per-100g nutrient plausibility ranges and profile sanity ranges
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Grocery Guardian Contributors

//! Validation Ranges
//!
//! Nutrient ranges reject implausible per-100g values (energy above
//! 2000 kcal, sodium above 10 g). User ranges reject profile values that
//! are physically impossible or outside the supported adult population.

use super::error::ConfigError;
use grocery_core::models::NutrientField;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A closed interval `[min, max]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValidationRange {
    /// Inclusive lower bound
    pub min: f64,
    /// Inclusive upper bound
    pub max: f64,
}

impl ValidationRange {
    /// Create a range
    #[must_use]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Whether `value` lies within the range, bounds included
    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        (self.min..=self.max).contains(&value)
    }

    fn validate(&self, name: &str) -> Result<(), ConfigError> {
        if !self.min.is_finite() || !self.max.is_finite() || self.min > self.max {
            return Err(ConfigError::InvalidRange(format!(
                "{name} range [{}, {}] must be finite with min <= max",
                self.min, self.max
            )));
        }
        Ok(())
    }
}

impl fmt::Display for ValidationRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.min, self.max)
    }
}

/// Plausible per-100g nutrient ranges
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutritionValidationRanges {
    /// Energy (kcal)
    pub energy_kcal: ValidationRange,
    /// Protein (g)
    pub proteins: ValidationRange,
    /// Fat (g)
    pub fat: ValidationRange,
    /// Carbohydrates (g)
    pub carbohydrates: ValidationRange,
    /// Sugars (g)
    pub sugars: ValidationRange,
    /// Fibre (g)
    pub fiber: ValidationRange,
    /// Sodium (mg)
    pub sodium: ValidationRange,
}

impl NutritionValidationRanges {
    /// Range for `field`; saturated fat has none
    #[must_use]
    pub const fn range_for(&self, field: NutrientField) -> Option<&ValidationRange> {
        match field {
            NutrientField::EnergyKcal => Some(&self.energy_kcal),
            NutrientField::Proteins => Some(&self.proteins),
            NutrientField::Fat => Some(&self.fat),
            NutrientField::Carbohydrates => Some(&self.carbohydrates),
            NutrientField::Sugars => Some(&self.sugars),
            NutrientField::Fiber => Some(&self.fiber),
            NutrientField::Sodium => Some(&self.sodium),
            NutrientField::SaturatedFat => None,
        }
    }

    /// Validate every range
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidRange` if any range is inverted or non-finite
    pub fn validate(&self) -> Result<(), ConfigError> {
        for field in NutrientField::ALL {
            if let Some(range) = self.range_for(field) {
                range.validate(field.key())?;
            }
        }
        Ok(())
    }
}

impl Default for NutritionValidationRanges {
    fn default() -> Self {
        Self {
            energy_kcal: ValidationRange::new(0.0, 2000.0),
            proteins: ValidationRange::new(0.0, 200.0),
            fat: ValidationRange::new(0.0, 200.0),
            carbohydrates: ValidationRange::new(0.0, 200.0),
            sugars: ValidationRange::new(0.0, 200.0),
            fiber: ValidationRange::new(0.0, 100.0),
            sodium: ValidationRange::new(0.0, 10_000.0),
        }
    }
}

/// Range-checked user profile fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserMetric {
    /// Age (years)
    Age,
    /// Height (cm)
    HeightCm,
    /// Weight (kg)
    WeightKg,
    /// Daily calorie target (kcal)
    DailyCaloriesTarget,
    /// Daily protein target (g)
    DailyProteinTarget,
    /// Daily carbohydrate target (g)
    DailyCarbTarget,
    /// Daily fat target (g)
    DailyFatTarget,
}

impl UserMetric {
    /// Every checked metric
    pub const ALL: [Self; 7] = [
        Self::Age,
        Self::HeightCm,
        Self::WeightKg,
        Self::DailyCaloriesTarget,
        Self::DailyProteinTarget,
        Self::DailyCarbTarget,
        Self::DailyFatTarget,
    ];

    /// Profile field name
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Age => "age",
            Self::HeightCm => "height_cm",
            Self::WeightKg => "weight_kg",
            Self::DailyCaloriesTarget => "daily_calories_target",
            Self::DailyProteinTarget => "daily_protein_target",
            Self::DailyCarbTarget => "daily_carb_target",
            Self::DailyFatTarget => "daily_fat_target",
        }
    }
}

/// Plausible user profile ranges
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserValidationRanges {
    /// Age (years)
    pub age: ValidationRange,
    /// Height (cm)
    pub height_cm: ValidationRange,
    /// Weight (kg)
    pub weight_kg: ValidationRange,
    /// Daily calorie target (kcal)
    pub daily_calories_target: ValidationRange,
    /// Daily protein target (g)
    pub daily_protein_target: ValidationRange,
    /// Daily carbohydrate target (g)
    pub daily_carb_target: ValidationRange,
    /// Daily fat target (g)
    pub daily_fat_target: ValidationRange,
}

impl UserValidationRanges {
    /// Range for `metric`
    #[must_use]
    pub const fn range_for(&self, metric: UserMetric) -> &ValidationRange {
        match metric {
            UserMetric::Age => &self.age,
            UserMetric::HeightCm => &self.height_cm,
            UserMetric::WeightKg => &self.weight_kg,
            UserMetric::DailyCaloriesTarget => &self.daily_calories_target,
            UserMetric::DailyProteinTarget => &self.daily_protein_target,
            UserMetric::DailyCarbTarget => &self.daily_carb_target,
            UserMetric::DailyFatTarget => &self.daily_fat_target,
        }
    }

    /// Validate every range
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidRange` if any range is inverted or non-finite
    pub fn validate(&self) -> Result<(), ConfigError> {
        for metric in UserMetric::ALL {
            self.range_for(metric).validate(metric.key())?;
        }
        Ok(())
    }
}

impl Default for UserValidationRanges {
    fn default() -> Self {
        Self {
            age: ValidationRange::new(13.0, 120.0),
            height_cm: ValidationRange::new(100.0, 250.0),
            weight_kg: ValidationRange::new(30.0, 300.0),
            daily_calories_target: ValidationRange::new(800.0, 5000.0),
            daily_protein_target: ValidationRange::new(20.0, 300.0),
            daily_carb_target: ValidationRange::new(50.0, 800.0),
            daily_fat_target: ValidationRange::new(20.0, 200.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_bounds_are_inclusive() {
        let range = ValidationRange::new(0.0, 2000.0);
        assert!(range.contains(0.0));
        assert!(range.contains(2000.0));
        assert!(!range.contains(2000.1));
        assert!(!range.contains(-0.1));
        assert!(!range.contains(f64::NAN));
    }

    #[test]
    fn test_saturated_fat_is_unranged() {
        let ranges = NutritionValidationRanges::default();
        assert!(ranges.range_for(NutrientField::SaturatedFat).is_none());
        assert_eq!(
            ranges.range_for(NutrientField::Sodium),
            Some(&ValidationRange::new(0.0, 10_000.0))
        );
    }

    #[test]
    fn test_inverted_range_rejected() {
        let mut ranges = UserValidationRanges::default();
        ranges.age = ValidationRange::new(120.0, 13.0);
        assert!(matches!(
            ranges.validate(),
            Err(ConfigError::InvalidRange(_))
        ));
    }
}
