// ABOUTME: Scoring thresholds and service identifiers used across the engine
// ABOUTME: Grouped by the analysis that consumes them
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Grocery Guardian Contributors

//! # Constants Module
//!
//! Fixed thresholds that are part of the scoring model itself. Tunable
//! weights and limits live in [`crate::config`] instead.

/// Service identifiers for structured logging
pub mod service_names {
    /// Engine service name
    pub const GROCERY_GUARDIAN: &str = "grocery-guardian";
}

/// Improvement comparison thresholds
pub mod improvement {
    /// Percent change that earns full credit (or full penalty)
    pub const FULL_CREDIT_PERCENT: f64 = 20.0;
    /// Percent change above which a positive change is highlighted
    pub const HIGHLIGHT_PERCENT: f64 = 10.0;
}

/// Health impact thresholds
pub mod health_impact {
    /// Multiplier from BMR to a daily calorie target
    pub const BMR_ACTIVITY_MULTIPLIER: f64 = 1.5;
    /// Lower edge of a reasonable per-100g share of daily calories
    pub const MIN_REASONABLE_SHARE: f64 = 0.05;
    /// Upper edge of a reasonable per-100g share of daily calories
    pub const MAX_REASONABLE_SHARE: f64 = 0.3;
    /// Share above which a product is penalised
    pub const EXCESSIVE_SHARE: f64 = 0.5;
    /// Reward for a reasonable calorie share
    pub const REASONABLE_SHARE_BONUS: f64 = 0.2;
    /// Penalty for an excessive calorie share
    pub const EXCESSIVE_SHARE_PENALTY: f64 = 0.3;
    /// Age above which sodium and fibre matter more
    pub const SENIOR_AGE: f64 = 60.0;
    /// Sodium (mg/100g) below which seniors get a bonus
    pub const LOW_SODIUM_MG: f64 = 300.0;
    /// Fibre (g/100g) above which seniors get a bonus
    pub const HIGH_FIBER_G: f64 = 5.0;
    /// Bonus per senior-friendly property
    pub const SENIOR_BONUS: f64 = 0.1;
    /// Bonus for iron or calcium fortification for female users
    pub const FORTIFICATION_BONUS: f64 = 0.05;
}

/// Personalisation adjustments applied on top of goal scores
pub mod personalization {
    /// Age below which calorie-dense food gets a small bonus
    pub const YOUNG_AGE: f64 = 25.0;
    /// Energy (kcal/100g) above which young users get the bonus
    pub const YOUNG_ENERGY_KCAL: f64 = 300.0;
    /// Sodium (mg) that maps to the full sodium penalty
    pub const SODIUM_PENALTY_DIVISOR: f64 = 2000.0;
    /// Largest sodium penalty
    pub const MAX_SODIUM_PENALTY: f64 = 0.1;
    /// Carbohydrates (g/100g) above which active users get a bonus
    pub const ACTIVE_CARBS_G: f64 = 20.0;
    /// Size of each small bonus
    pub const SMALL_BONUS: f64 = 0.05;
}

/// Receipt analysis thresholds
pub mod receipt {
    /// Balance score above which a basket counts as balanced
    pub const BALANCED_THRESHOLD: f64 = 0.7;
    /// Target percentages are capped here
    pub const MAX_TARGET_PERCENT: f64 = 100.0;
    /// Protein share below which more protein is advised
    pub const LOW_PROTEIN_RATIO: f64 = 0.2;
    /// Protein share above which less protein is advised
    pub const HIGH_PROTEIN_RATIO: f64 = 0.4;
    /// Carbohydrate share below which more carbs are advised
    pub const LOW_CARBS_RATIO: f64 = 0.4;
    /// Carbohydrate share above which low-GI food is advised
    pub const HIGH_CARBS_RATIO: f64 = 0.6;
    /// Fat share below which more healthy fat is advised
    pub const LOW_FAT_RATIO: f64 = 0.15;
    /// Fat share above which lower-fat food is advised
    pub const HIGH_FAT_RATIO: f64 = 0.3;
    /// Energy (kcal/100g) above which an item hinders weight loss
    pub const LOSE_WEIGHT_MAX_KCAL: f64 = 300.0;
    /// Sugars (g/100g) above which an item is flagged
    pub const HIGH_SUGAR_G: f64 = 15.0;
    /// Fat (g/100g) below which an item is noted as low fat
    pub const LOW_FAT_G: f64 = 5.0;
    /// Protein (g/100g) above which an item helps muscle gain
    pub const HIGH_PROTEIN_G: f64 = 15.0;
    /// Protein (g/100g) below which an item hinders muscle gain
    pub const LOW_PROTEIN_G: f64 = 5.0;
}

/// Mifflin-St Jeor resting energy equation coefficients
pub mod mifflin_st_jeor {
    /// kcal per kg of body weight
    pub const WEIGHT_COEF: f64 = 10.0;
    /// kcal per cm of height
    pub const HEIGHT_COEF: f64 = 6.25;
    /// kcal per year of age
    pub const AGE_COEF: f64 = -5.0;
    /// Male constant
    pub const MALE_CONSTANT: f64 = 5.0;
    /// Female (and unspecified) constant
    pub const FEMALE_CONSTANT: f64 = -161.0;
}
