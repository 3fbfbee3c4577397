// ABOUTME: Integration tests for alternative-versus-original nutrient comparison
// ABOUTME: Covers goal-specific change directions, overall score, and highlight messages
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Grocery Guardian Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{chocolate_bar, cola, diet_cola, product};
use grocery_guardian::intelligence::improvement::improvement_direction;
use grocery_guardian::intelligence::{compare_improvement, ImprovementDirection};
use grocery_guardian::models::{NutrientField, NutritionGoal};
use serde_json::json;

#[test]
fn test_diet_cola_is_a_clear_weight_loss_win() {
    let analysis = compare_improvement(&cola(), &diet_cola(), NutritionGoal::LoseWeight);

    // Zero-valued originals (protein, fat) are not compared
    assert!(analysis.change(NutrientField::Proteins).is_none());
    assert!(analysis.change(NutrientField::Fat).is_none());

    let energy = analysis.change(NutrientField::EnergyKcal).unwrap();
    assert!((energy.absolute_change + 41.0).abs() < 1e-9);
    assert!((energy.percent_change + 97.6).abs() < 1e-9);
    assert_eq!(energy.improvement_direction, ImprovementDirection::Positive);

    let carbs = analysis.change(NutrientField::Carbohydrates).unwrap();
    assert_eq!(carbs.improvement_direction, ImprovementDirection::Neutral);

    assert!((analysis.overall_improvement_score - 1.0).abs() < 1e-9);
    assert_eq!(
        analysis.improvement_recommendations,
        vec![
            "Calories down 97.6%, supports weight loss".to_owned(),
            "Sugar down 100.0%, a healthier choice".to_owned(),
        ]
    );
}

#[test]
fn test_worse_alternative_scores_negative() {
    let analysis = compare_improvement(&diet_cola(), &cola(), NutritionGoal::LoseWeight);
    assert!(analysis.overall_improvement_score < 0.0);
    assert_eq!(
        analysis.improvement_recommendations,
        vec!["Nutritionally similar to the original product".to_owned()]
    );
}

#[test]
fn test_muscle_gain_directions() {
    use ImprovementDirection::{Negative, Neutral, Positive};
    let goal = NutritionGoal::GainMuscle;

    assert_eq!(improvement_direction(NutrientField::Proteins, 5.0, goal), Positive);
    assert_eq!(improvement_direction(NutrientField::Proteins, -5.0, goal), Negative);
    assert_eq!(improvement_direction(NutrientField::EnergyKcal, 50.0, goal), Positive);
    assert_eq!(improvement_direction(NutrientField::EnergyKcal, -50.0, goal), Neutral);
    assert_eq!(improvement_direction(NutrientField::Fat, 5.0, goal), Neutral);
    assert_eq!(improvement_direction(NutrientField::Proteins, 0.0, goal), Neutral);
}

#[test]
fn test_protein_highlight() {
    let richer = product(json!({
        "energy_kcal_100g": 534,
        "proteins_100g": 20,
        "fat_100g": 30,
        "carbohydrates_100g": 57,
        "sugars_100g": 56
    }));
    let analysis = compare_improvement(&chocolate_bar(), &richer, NutritionGoal::GainMuscle);
    assert_eq!(
        analysis.improvement_recommendations,
        vec!["Protein up 174.0%, supports muscle building".to_owned()]
    );
    assert!(analysis.overall_improvement_score > 0.0);
}

#[test]
fn test_maintain_is_neutral() {
    let analysis = compare_improvement(&cola(), &diet_cola(), NutritionGoal::Maintain);
    assert!(analysis.overall_improvement_score.abs() < f64::EPSILON);
    assert!(analysis
        .nutrition_comparison
        .iter()
        .all(|c| c.improvement_direction == ImprovementDirection::Neutral));
}
