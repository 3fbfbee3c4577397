// ABOUTME: Small presentation and record helpers shared across the scoring modules
// ABOUTME: Rounding, nutrition summaries, product name normalization, and record merging
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Grocery Guardian Contributors

use grocery_core::coercion::Record;
use grocery_core::models::{NutrientField, Product};

/// Company suffixes stripped by [`normalize_product_name`], checked in order
const NAME_SUFFIXES: [&str; 5] = [" ltd", " inc", " co", " limited", " company"];

/// Round `value` to `places` decimal places
#[must_use]
pub fn round_to(value: f64, places: i32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let factor = 10_f64.powi(places);
    (value * factor).round() / factor
}

/// One-line summary of the headline nutrients per 100 g
#[must_use]
pub fn nutrition_summary(product: &Product) -> String {
    format!(
        "Calories: {:.1}kcal/100g, Protein: {:.1}g/100g, Fat: {:.1}g/100g, Carbs: {:.1}g/100g, Sugar: {:.1}g/100g",
        product.value(NutrientField::EnergyKcal),
        product.value(NutrientField::Proteins),
        product.value(NutrientField::Fat),
        product.value(NutrientField::Carbohydrates),
        product.value(NutrientField::Sugars),
    )
}

/// Lower-case, trim, and strip a trailing company suffix
#[must_use]
pub fn normalize_product_name(name: &str) -> String {
    let mut normalized = name.trim().to_lowercase();
    for suffix in NAME_SUFFIXES {
        if let Some(stripped) = normalized.strip_suffix(suffix) {
            normalized = stripped.trim().to_owned();
        }
    }
    normalized
}

/// `alternative − original` for one nutrient, absent values counting as zero
#[must_use]
pub fn nutrient_difference(original: &Product, alternative: &Product, field: NutrientField) -> f64 {
    alternative.value(field) - original.value(field)
}

/// Merge two records; keys already in `base` win
#[must_use]
pub fn merge_records(base: &Record, extra: &Record) -> Record {
    let mut merged = base.clone();
    for (key, value) in extra {
        merged.entry(key.clone()).or_insert_with(|| value.clone());
    }
    merged
}
