// ABOUTME: Integration tests for goal strategy weight tables
// ABOUTME: Covers typed and name-based lookup, signs, key access, and serialization order
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Grocery Guardian Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use grocery_guardian::config::{NutritionStrategies, StrategyFactor, StrategyWeights};
use grocery_guardian::models::{NutrientField, NutritionGoal};

#[test]
fn test_every_goal_has_weights() {
    let strategies = NutritionStrategies::default();
    for goal in NutritionGoal::ALL {
        assert!(!strategies.weights_for(goal).is_empty(), "{goal}");
        assert_eq!(
            strategies.weights_for_name(goal.as_str()),
            Some(strategies.weights_for(goal))
        );
    }
}

#[test]
fn test_unknown_goal_name_has_no_weights() {
    let strategies = NutritionStrategies::default();
    assert!(strategies.weights_for_name("bulk_up").is_none());
    assert!(strategies.weights_for_name("").is_none());
}

#[test]
fn test_weight_loss_penalises_energy_and_rewards_protein() {
    let strategies = NutritionStrategies::default();
    let weights = strategies.weights_for(NutritionGoal::LoseWeight);

    assert!(weights.nutrient(NutrientField::EnergyKcal).unwrap() < 0.0);
    assert!(weights.nutrient(NutrientField::Sugars).unwrap() < 0.0);
    assert!(weights.nutrient(NutrientField::Proteins).unwrap() > 0.0);
    assert_eq!(weights.by_key("fiber_bonus"), Some(0.3));
    assert_eq!(weights.by_key("fat_100g"), Some(-0.3));
    assert!(weights.get(StrategyFactor::BcaaBonus).is_none());
}

#[test]
fn test_later_duplicates_replace_earlier_entries() {
    let weights = StrategyWeights::new([
        (StrategyFactor::NaturalBonus, 0.1),
        (StrategyFactor::BalanceScore, 0.2),
        (StrategyFactor::NaturalBonus, 0.7),
    ]);
    assert_eq!(weights.len(), 2);
    assert!((weights.weight_or(StrategyFactor::NaturalBonus, 0.0) - 0.7).abs() < f64::EPSILON);
    assert!((weights.weight_or(StrategyFactor::VarietyScore, 0.3) - 0.3).abs() < f64::EPSILON);
}

#[test]
fn test_serialized_table_keeps_declaration_order() {
    let strategies = NutritionStrategies::default();
    let json = serde_json::to_string(strategies.weights_for(NutritionGoal::GainMuscle)).unwrap();
    assert_eq!(
        json,
        r#"{"proteins_100g":0.5,"carbohydrates_100g":0.2,"energy_kcal_100g":0.3,"fat_100g":0.1,"bcaa_bonus":0.4}"#
    );
}
