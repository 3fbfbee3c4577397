// ABOUTME: Integration tests for scoring configuration loading and environment overrides
// ABOUTME: Validates GROCERY_* overrides, parse failures, invariant checks, and default fallback
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Grocery Guardian Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use grocery_guardian::config::{ConfigError, ScoringConfig, StrategyFactor, ValidationRange};
use grocery_guardian::errors::{AppError, ErrorCode};
use grocery_guardian::models::NutritionGoal;
use serial_test::serial;
use std::env;

const OVERRIDES: [&str; 9] = [
    "GROCERY_SIMILARITY_CATEGORY_WEIGHT",
    "GROCERY_SIMILARITY_NUTRITION_WEIGHT",
    "GROCERY_RANKING_MAX_RESULTS",
    "GROCERY_RANKING_CANDIDATE_LIMIT",
    "GROCERY_RANKING_NUTRITION_WEIGHT",
    "GROCERY_RANKING_PREFERENCE_WEIGHT",
    "GROCERY_RANKING_STRICT_CATEGORY",
    "GROCERY_ENERGY_MAX_KCAL",
    "GROCERY_SODIUM_MAX_MG",
];

fn clear_overrides() {
    for name in OVERRIDES {
        env::remove_var(name);
    }
}

// ============================================================================
// Environment overrides
// ============================================================================

#[test]
#[serial]
fn test_load_without_overrides_matches_defaults() {
    clear_overrides();
    assert_eq!(ScoringConfig::load().unwrap(), ScoringConfig::default());
}

#[test]
#[serial]
fn test_overrides_are_applied() {
    clear_overrides();
    env::set_var("GROCERY_RANKING_MAX_RESULTS", " 8 ");
    env::set_var("GROCERY_RANKING_STRICT_CATEGORY", "false");
    env::set_var("GROCERY_SIMILARITY_CATEGORY_WEIGHT", "0.5");
    env::set_var("GROCERY_SIMILARITY_NUTRITION_WEIGHT", "0.5");
    env::set_var("GROCERY_SODIUM_MAX_MG", "5000");

    let config = ScoringConfig::load();
    clear_overrides();

    let config = config.unwrap();
    assert_eq!(config.ranking.max_results, 8);
    assert!(!config.ranking.strict_category);
    assert!((config.similarity.category_weight - 0.5).abs() < f64::EPSILON);
    assert!((config.nutrition_ranges.sodium.max - 5000.0).abs() < f64::EPSILON);
}

#[test]
#[serial]
fn test_unparseable_override_is_rejected() {
    clear_overrides();
    env::set_var("GROCERY_RANKING_CANDIDATE_LIMIT", "plenty");

    let result = ScoringConfig::load();
    clear_overrides();

    match result {
        Err(ConfigError::Parse(message)) => {
            assert!(message.contains("GROCERY_RANKING_CANDIDATE_LIMIT"));
            assert!(message.contains("plenty"));
        }
        other => panic!("expected parse error, got {other:?}"),
    }
}

#[test]
#[serial]
fn test_weights_must_still_sum_to_one() {
    clear_overrides();
    env::set_var("GROCERY_RANKING_PREFERENCE_WEIGHT", "0.6");

    let result = ScoringConfig::load();
    clear_overrides();

    assert!(matches!(result, Err(ConfigError::InvalidWeights(_))));
}

#[test]
#[serial]
fn test_zero_result_limit_is_rejected() {
    clear_overrides();
    env::set_var("GROCERY_RANKING_MAX_RESULTS", "0");

    let result = ScoringConfig::load();
    clear_overrides();

    assert!(matches!(result, Err(ConfigError::ValueOutOfRange(_))));
}

#[test]
#[serial]
fn test_load_or_default_falls_back() {
    clear_overrides();
    env::set_var("GROCERY_ENERGY_MAX_KCAL", "-10");

    let config = ScoringConfig::load_or_default();
    clear_overrides();

    assert_eq!(config, ScoringConfig::default());
}

// ============================================================================
// Validation
// ============================================================================

#[test]
fn test_inverted_nutrition_range_is_rejected() {
    let mut config = ScoringConfig::default();
    config.nutrition_ranges.fat = ValidationRange::new(50.0, 10.0);
    assert!(matches!(config.validate(), Err(ConfigError::InvalidRange(_))));
}

#[test]
fn test_non_finite_strategy_weight_is_rejected() {
    let mut config = ScoringConfig::default();
    config
        .strategies
        .weights_for_mut(NutritionGoal::Maintain)
        .set(StrategyFactor::BalanceScore, f64::NAN);
    assert!(matches!(
        config.validate(),
        Err(ConfigError::InvalidWeights(_))
    ));
}

#[test]
fn test_config_error_converts_to_app_error() {
    let error: AppError = ConfigError::Parse("bad value".to_owned()).into();
    assert_eq!(error.code, ErrorCode::ConfigInvalid);
    assert!(error.message.contains("bad value"));
}
