// ABOUTME: Nutrition data completeness and plausibility checks for a single product
// ABOUTME: Produces named boolean flags plus an overall verdict
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Grocery Guardian Contributors

use crate::config::NutritionValidationRanges;
use grocery_core::coercion::Record;
use grocery_core::models::{NutrientField, Product};
use serde::Serialize;
use std::collections::BTreeMap;

/// Flags describing the quality of a product's nutrition data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[allow(clippy::struct_excessive_bools)] // One flag per checked property
pub struct NutritionValidation {
    /// Energy, protein, fat, and carbohydrates were all present
    pub has_basic_nutrition: bool,
    /// Energy within range
    pub calories_valid: bool,
    /// Protein within range
    pub protein_valid: bool,
    /// Fat within range
    pub fat_valid: bool,
    /// Carbohydrates within range
    pub carbs_valid: bool,
    /// Sugars within range
    pub sugars_valid: bool,
    /// Fibre within range
    pub fiber_valid: bool,
    /// Sodium within range
    pub sodium_valid: bool,
    /// Presence and every range check
    pub overall_valid: bool,
}

impl NutritionValidation {
    /// Flags keyed by name
    #[must_use]
    pub fn flags(&self) -> BTreeMap<&'static str, bool> {
        BTreeMap::from([
            ("has_basic_nutrition", self.has_basic_nutrition),
            ("calories_valid", self.calories_valid),
            ("protein_valid", self.protein_valid),
            ("fat_valid", self.fat_valid),
            ("carbs_valid", self.carbs_valid),
            ("sugars_valid", self.sugars_valid),
            ("fiber_valid", self.fiber_valid),
            ("sodium_valid", self.sodium_valid),
            ("overall_valid", self.overall_valid),
        ])
    }

    /// Names of the flags that failed
    #[must_use]
    pub fn failed(&self) -> Vec<&'static str> {
        self.flags()
            .into_iter()
            .filter_map(|(name, ok)| (!ok).then_some(name))
            .collect()
    }
}

/// Validates product nutrition against configured ranges
#[derive(Debug, Clone, Copy)]
pub struct NutritionValidator<'a> {
    ranges: &'a NutritionValidationRanges,
}

impl<'a> NutritionValidator<'a> {
    /// Create a validator over `ranges`
    #[must_use]
    pub const fn new(ranges: &'a NutritionValidationRanges) -> Self {
        Self { ranges }
    }

    /// Validate a product
    #[must_use]
    pub fn validate(&self, product: &Product) -> NutritionValidation {
        let has_basic_nutrition = NutrientField::BASIC.iter().all(|&f| product.has(f));
        let in_range = |field: NutrientField| {
            self.ranges
                .range_for(field)
                .is_none_or(|range| range.contains(product.value(field)))
        };

        let calories_valid = in_range(NutrientField::EnergyKcal);
        let protein_valid = in_range(NutrientField::Proteins);
        let fat_valid = in_range(NutrientField::Fat);
        let carbs_valid = in_range(NutrientField::Carbohydrates);
        let sugars_valid = in_range(NutrientField::Sugars);
        let fiber_valid = in_range(NutrientField::Fiber);
        let sodium_valid = in_range(NutrientField::Sodium);

        NutritionValidation {
            has_basic_nutrition,
            calories_valid,
            protein_valid,
            fat_valid,
            carbs_valid,
            sugars_valid,
            fiber_valid,
            sodium_valid,
            overall_valid: has_basic_nutrition
                && calories_valid
                && protein_valid
                && fat_valid
                && carbs_valid
                && sugars_valid
                && fiber_valid
                && sodium_valid,
        }
    }

    /// Validate a raw record
    #[must_use]
    pub fn validate_record(&self, record: &Record) -> NutritionValidation {
        self.validate(&Product::from_record(record))
    }
}

/// Validate against the default ranges
#[must_use]
pub fn validate_nutrition(product: &Product) -> NutritionValidation {
    NutritionValidator::new(&NutritionValidationRanges::default()).validate(product)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_basic_field_fails_overall() {
        let product = Product::from_value(&json!({
            "barcode": "1",
            "energy_kcal_100g": 100,
            "proteins_100g": 5,
            "fat_100g": 2
        }));
        let result = validate_nutrition(&product);
        assert!(!result.has_basic_nutrition);
        assert!(result.carbs_valid);
        assert!(!result.overall_valid);
        assert_eq!(result.failed(), vec!["has_basic_nutrition", "overall_valid"]);
    }

    #[test]
    fn test_out_of_range_sodium_fails_overall() {
        let product = Product::from_value(&json!({
            "energy_kcal_100g": 100,
            "proteins_100g": 5,
            "fat_100g": 2,
            "carbohydrates_100g": 10,
            "sodium_100g": 12_000
        }));
        let result = validate_nutrition(&product);
        assert!(result.has_basic_nutrition);
        assert!(!result.sodium_valid);
        assert!(!result.overall_valid);
    }
}
