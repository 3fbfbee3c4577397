// ABOUTME: Field-by-field nutrition comparison between an original product and an alternative
// ABOUTME: Goal-aware improvement directions, weighted overall score, and readable highlights
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Grocery Guardian Contributors

use crate::constants::improvement::{FULL_CREDIT_PERCENT, HIGHLIGHT_PERCENT};
use crate::formatting::round_to;
use chrono::{DateTime, Utc};
use grocery_core::models::{NutrientField, NutritionGoal, Product};
use serde::Serialize;

/// Fields compared between original and alternative
pub const COMPARED_FIELDS: [NutrientField; 6] = [
    NutrientField::EnergyKcal,
    NutrientField::Proteins,
    NutrientField::Fat,
    NutrientField::SaturatedFat,
    NutrientField::Carbohydrates,
    NutrientField::Sugars,
];

/// Whether a change helps the user's goal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ImprovementDirection {
    /// Moves toward the goal
    Positive,
    /// Moves away from the goal
    Negative,
    /// Irrelevant to the goal, or unchanged
    Neutral,
}

/// Change in one nutrient
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NutrientChange {
    /// Compared field
    pub field: NutrientField,
    /// Human-readable field name
    pub name: &'static str,
    /// Unit per 100 g
    pub unit: &'static str,
    /// Original value (2 decimals)
    pub original_value: f64,
    /// Alternative value (2 decimals)
    pub alternative_value: f64,
    /// Alternative minus original (2 decimals)
    pub absolute_change: f64,
    /// Change relative to the original, in percent (1 decimal)
    pub percent_change: f64,
    /// Goal-relative direction
    pub improvement_direction: ImprovementDirection,
}

/// Full comparison of an alternative against the original
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImprovementAnalysis {
    /// Per-field changes, for fields the original reports as positive
    pub nutrition_comparison: Vec<NutrientChange>,
    /// Weighted mean of per-field credit in `[-1, 1]`
    pub overall_improvement_score: f64,
    /// Highlights of substantial positive changes
    pub improvement_recommendations: Vec<String>,
    /// Goal the comparison was made for
    pub user_goal: NutritionGoal,
    /// When the comparison was made
    pub analysis_timestamp: DateTime<Utc>,
}

impl ImprovementAnalysis {
    /// Change recorded for `field`, if the original reported it
    #[must_use]
    pub fn change(&self, field: NutrientField) -> Option<&NutrientChange> {
        self.nutrition_comparison.iter().find(|c| c.field == field)
    }
}

/// Direction of a change in `field` under `goal`
#[must_use]
pub fn improvement_direction(
    field: NutrientField,
    change: f64,
    goal: NutritionGoal,
) -> ImprovementDirection {
    use ImprovementDirection::{Negative, Neutral, Positive};

    if change == 0.0 {
        return Neutral;
    }

    match (goal, field) {
        (
            NutritionGoal::LoseWeight,
            NutrientField::EnergyKcal | NutrientField::Fat | NutrientField::Sugars,
        ) => {
            if change < 0.0 {
                Positive
            } else {
                Negative
            }
        }
        (NutritionGoal::LoseWeight | NutritionGoal::GainMuscle, NutrientField::Proteins) => {
            if change > 0.0 {
                Positive
            } else {
                Negative
            }
        }
        (
            NutritionGoal::GainMuscle,
            NutrientField::EnergyKcal | NutrientField::Carbohydrates,
        ) => {
            if change > 0.0 {
                Positive
            } else {
                Neutral
            }
        }
        _ => Neutral,
    }
}

/// Fields that contribute to the overall score, with their weights
#[must_use]
pub const fn field_weights(goal: NutritionGoal) -> &'static [(NutrientField, f64)] {
    match goal {
        NutritionGoal::LoseWeight => &[
            (NutrientField::EnergyKcal, 0.4),
            (NutrientField::Fat, 0.3),
            (NutrientField::Sugars, 0.2),
            (NutrientField::Proteins, 0.1),
        ],
        NutritionGoal::GainMuscle => &[
            (NutrientField::Proteins, 0.5),
            (NutrientField::EnergyKcal, 0.3),
            (NutrientField::Carbohydrates, 0.2),
        ],
        NutritionGoal::Maintain | NutritionGoal::GeneralHealth => &[
            (NutrientField::EnergyKcal, 0.25),
            (NutrientField::Proteins, 0.25),
            (NutrientField::Fat, 0.25),
            (NutrientField::Sugars, 0.25),
        ],
    }
}

/// Compare `alternative` against `original` for `goal`
#[must_use]
pub fn compare_improvement(
    original: &Product,
    alternative: &Product,
    goal: NutritionGoal,
) -> ImprovementAnalysis {
    let nutrition_comparison: Vec<NutrientChange> = COMPARED_FIELDS
        .iter()
        .filter_map(|&field| {
            let before = original.value(field);
            let after = alternative.value(field);
            (before > 0.0).then(|| {
                let change = after - before;
                NutrientChange {
                    field,
                    name: field.label(),
                    unit: field.unit(),
                    original_value: round_to(before, 2),
                    alternative_value: round_to(after, 2),
                    absolute_change: round_to(change, 2),
                    percent_change: round_to(change / before * 100.0, 1),
                    improvement_direction: improvement_direction(field, change, goal),
                }
            })
        })
        .collect();

    ImprovementAnalysis {
        overall_improvement_score: overall_improvement(&nutrition_comparison, goal),
        improvement_recommendations: highlights(&nutrition_comparison),
        nutrition_comparison,
        user_goal: goal,
        analysis_timestamp: Utc::now(),
    }
}

fn overall_improvement(changes: &[NutrientChange], goal: NutritionGoal) -> f64 {
    let mut total = 0.0;
    let mut weight_sum = 0.0;

    for change in changes {
        let Some(&(_, weight)) = field_weights(goal).iter().find(|(f, _)| *f == change.field)
        else {
            continue;
        };
        let credit = (change.percent_change.abs() / FULL_CREDIT_PERCENT).min(1.0);
        let signed = match change.improvement_direction {
            ImprovementDirection::Positive => credit,
            ImprovementDirection::Negative => -credit,
            ImprovementDirection::Neutral => 0.0,
        };
        total += signed * weight;
        weight_sum += weight;
    }

    if weight_sum > 0.0 {
        total / weight_sum
    } else {
        0.0
    }
}

fn highlights(changes: &[NutrientChange]) -> Vec<String> {
    let mut notes: Vec<String> = changes
        .iter()
        .filter(|c| {
            c.improvement_direction == ImprovementDirection::Positive
                && c.percent_change.abs() > HIGHLIGHT_PERCENT
        })
        .filter_map(|c| match c.field {
            NutrientField::Proteins => Some(format!(
                "Protein up {:.1}%, supports muscle building",
                c.percent_change
            )),
            NutrientField::EnergyKcal if c.percent_change < 0.0 => Some(format!(
                "Calories down {:.1}%, supports weight loss",
                c.percent_change.abs()
            )),
            NutrientField::Sugars if c.percent_change < 0.0 => Some(format!(
                "Sugar down {:.1}%, a healthier choice",
                c.percent_change.abs()
            )),
            _ => None,
        })
        .collect();

    if notes.is_empty() {
        notes.push("Nutritionally similar to the original product".to_owned());
    }
    notes
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(energy: f64, protein: f64, fat: f64, sugars: f64) -> Product {
        Product::default()
            .with_nutrient(NutrientField::EnergyKcal, energy)
            .with_nutrient(NutrientField::Proteins, protein)
            .with_nutrient(NutrientField::Fat, fat)
            .with_nutrient(NutrientField::Sugars, sugars)
    }

    #[test]
    fn test_lower_calories_is_positive_for_weight_loss() {
        let analysis = compare_improvement(
            &product(200.0, 5.0, 10.0, 20.0),
            &product(100.0, 5.0, 10.0, 20.0),
            NutritionGoal::LoseWeight,
        );
        let energy = analysis.change(NutrientField::EnergyKcal).unwrap();
        assert_eq!(energy.improvement_direction, ImprovementDirection::Positive);
        assert!((energy.percent_change + 50.0).abs() < 1e-9);
        // Energy carries 0.4 of 1.0 total weight, other fields unchanged
        assert!((analysis.overall_improvement_score - 0.4).abs() < 1e-9);
        assert!(analysis.improvement_recommendations[0].starts_with("Calories down 50.0%"));
    }

    #[test]
    fn test_fields_absent_in_original_are_skipped() {
        let analysis = compare_improvement(
            &product(0.0, 5.0, 0.0, 0.0),
            &product(100.0, 10.0, 5.0, 5.0),
            NutritionGoal::GainMuscle,
        );
        assert_eq!(analysis.nutrition_comparison.len(), 1);
        assert!((analysis.overall_improvement_score - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_identical_products_score_zero() {
        let p = product(100.0, 5.0, 5.0, 5.0);
        let analysis = compare_improvement(&p, &p, NutritionGoal::Maintain);
        assert!(analysis.overall_improvement_score.abs() < f64::EPSILON);
        assert_eq!(
            analysis.improvement_recommendations,
            vec!["Nutritionally similar to the original product".to_owned()]
        );
    }
}
