// ABOUTME: Application-wide constants for record keys and physiological defaults
// ABOUTME: Grouped by domain so callers import only the set they need
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Grocery Guardian Contributors

/// Keys of non-nutrient fields in product records
pub mod record_fields {
    /// Unique product key
    pub const BARCODE: &str = "barcode";
    /// Preferred name key
    pub const PRODUCT_NAME: &str = "product_name";
    /// Fallback name key used by older importers
    pub const NAME: &str = "name";
    /// Brand key
    pub const BRAND: &str = "brand";
    /// Category key
    pub const CATEGORY: &str = "category";
    /// Ingredient text key
    pub const INGREDIENTS: &str = "ingredients";
    /// Allergen declaration key
    pub const ALLERGENS: &str = "allergens";
}

/// Defaults substituted when a user profile omits a physiological value
pub mod profile_defaults {
    /// Age in years
    pub const AGE_YEARS: f64 = 30.0;
    /// Height in centimetres
    pub const HEIGHT_CM: f64 = 170.0;
    /// Weight in kilograms
    pub const WEIGHT_KG: f64 = 70.0;
    /// Daily calorie target when none is set (receipt analysis)
    pub const DAILY_CALORIES: f64 = 2000.0;
    /// Daily protein target when none is set (receipt analysis)
    pub const DAILY_PROTEIN_G: f64 = 100.0;
}

/// Scoring constants shared across modules
pub mod scoring {
    /// Neutral starting point for goal-based nutrition scores
    pub const BASE_SCORE: f64 = 0.5;
    /// Preference score assumed for candidates without purchase history
    pub const NEUTRAL_PREFERENCE: f64 = 0.5;
    /// Ideal share of macronutrient mass from protein
    pub const IDEAL_PROTEIN_RATIO: f64 = 0.3;
    /// Ideal share of macronutrient mass from carbohydrates
    pub const IDEAL_CARBS_RATIO: f64 = 0.5;
    /// Ideal share of macronutrient mass from fat
    pub const IDEAL_FAT_RATIO: f64 = 0.2;
}
