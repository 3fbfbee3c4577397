// ABOUTME: Whole-basket nutrition analysis of a scanned receipt against the user's goal
// ABOUTME: Totals, target alignment, macro balance, and per-item goal suitability
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Grocery Guardian Contributors

use super::nutrition_optimizer::macro_balance;
use crate::constants::receipt;
use crate::formatting::round_to;
use grocery_core::coercion::{field_or, Record};
use grocery_core::constants::profile_defaults;
use grocery_core::models::{NutrientField, NutritionGoal, Product, UserProfile};
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

/// One line of a receipt
#[derive(Debug, Clone, PartialEq)]
pub struct ReceiptItem {
    /// Matched product
    pub product: Product,
    /// Units bought
    pub quantity: f64,
    /// Whether the line was matched to a catalog product
    pub product_found: bool,
}

impl ReceiptItem {
    /// A matched line
    #[must_use]
    pub const fn new(product: Product, quantity: f64) -> Self {
        Self {
            product,
            quantity,
            product_found: true,
        }
    }

    /// Build from a receipt record; quantity defaults to 1, `product_found` to true
    #[must_use]
    pub fn from_record(record: &Record) -> Self {
        Self {
            product: Product::from_record(record),
            quantity: field_or(record, "quantity", 1.0),
            product_found: record
                .get("product_found")
                .and_then(Value::as_bool)
                .unwrap_or(true),
        }
    }
}

/// Summed nutrients over the basket
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct BasketTotals {
    /// Energy (kcal)
    pub calories: f64,
    /// Protein (g)
    pub protein: f64,
    /// Fat (g)
    pub fat: f64,
    /// Carbohydrates (g)
    pub carbs: f64,
    /// Sugars (g)
    pub sugar: f64,
}

/// How well the basket macros match the ideal split
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BalanceAssessment {
    /// Score above the balance threshold
    pub balanced: bool,
    /// Balance score, absent when the basket has no macros
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
    /// Protein share of macros (2 decimals)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protein_ratio: Option<f64>,
    /// Carbohydrate share of macros (2 decimals)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub carbs_ratio: Option<f64>,
    /// Fat share of macros (2 decimals)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fat_ratio: Option<f64>,
    /// Advisory notes
    pub notes: Vec<String>,
}

/// Goal suitability of one receipt line
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemAnalysis {
    /// Product barcode
    pub barcode: String,
    /// Product name
    pub product_name: String,
    /// Units bought
    pub quantity: f64,
    /// Goal suitability
    pub suitable: bool,
    /// Aspects that work against the goal
    pub concerns: Vec<String>,
    /// Aspects that support the goal
    pub benefits: Vec<String>,
}

/// Analysis of a full receipt
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReceiptAnalysis {
    /// Goal the basket was judged against
    pub goal: NutritionGoal,
    /// Lines that were analysed
    pub items_analyzed: usize,
    /// Summed nutrients
    pub totals: BasketTotals,
    /// Calories as a share of the daily target, capped at 100 (1 decimal)
    pub calorie_target_percent: f64,
    /// Protein as a share of the daily target, capped at 100 (1 decimal)
    pub protein_target_percent: f64,
    /// Mean of the two target percentages
    pub overall_alignment: f64,
    /// Macro balance
    pub balance: BalanceAssessment,
    /// Per-line findings
    pub items: Vec<ItemAnalysis>,
}

/// Analyse a receipt for `profile`
#[must_use]
pub fn analyze_receipt(items: &[ReceiptItem], profile: &UserProfile) -> ReceiptAnalysis {
    let goal = profile.goal();
    let found: Vec<&ReceiptItem> = items.iter().filter(|item| item.product_found).collect();
    debug!(
        total = items.len(),
        found = found.len(),
        "Analysing receipt"
    );

    let totals = found.iter().fold(BasketTotals::default(), |acc, item| {
        let p = &item.product;
        let q = item.quantity;
        BasketTotals {
            calories: p.value(NutrientField::EnergyKcal).mul_add(q, acc.calories),
            protein: p.value(NutrientField::Proteins).mul_add(q, acc.protein),
            fat: p.value(NutrientField::Fat).mul_add(q, acc.fat),
            carbs: p.value(NutrientField::Carbohydrates).mul_add(q, acc.carbs),
            sugar: p.value(NutrientField::Sugars).mul_add(q, acc.sugar),
        }
    });

    let calorie_target = profile
        .daily_calories_target
        .filter(|t| *t > 0.0)
        .unwrap_or(profile_defaults::DAILY_CALORIES);
    let protein_target = profile
        .daily_protein_target
        .filter(|t| *t > 0.0)
        .unwrap_or(profile_defaults::DAILY_PROTEIN_G);

    let calorie_target_percent = target_percent(totals.calories, calorie_target);
    let protein_target_percent = target_percent(totals.protein, protein_target);

    ReceiptAnalysis {
        goal,
        items_analyzed: found.len(),
        totals,
        calorie_target_percent,
        protein_target_percent,
        overall_alignment: round_to((calorie_target_percent + protein_target_percent) / 2.0, 1),
        balance: assess_balance(&totals),
        items: found.iter().map(|item| analyze_item(item, goal)).collect(),
    }
}

fn target_percent(total: f64, target: f64) -> f64 {
    round_to((total / target * 100.0).min(receipt::MAX_TARGET_PERCENT), 1)
}

/// Macro balance of basket totals
#[must_use]
pub fn assess_balance(totals: &BasketTotals) -> BalanceAssessment {
    let macro_total = totals.protein + totals.carbs + totals.fat;
    if macro_total <= 0.0 {
        return BalanceAssessment {
            balanced: false,
            score: None,
            protein_ratio: None,
            carbs_ratio: None,
            fat_ratio: None,
            notes: vec!["No macronutrient data available".to_owned()],
        };
    }

    let protein_ratio = totals.protein / macro_total;
    let carbs_ratio = totals.carbs / macro_total;
    let fat_ratio = totals.fat / macro_total;
    let score = macro_balance(totals.protein, totals.carbs, totals.fat);

    let mut notes = Vec::new();
    if protein_ratio < receipt::LOW_PROTEIN_RATIO {
        notes.push("Protein share is low".to_owned());
    } else if protein_ratio > receipt::HIGH_PROTEIN_RATIO {
        notes.push("Protein share is high".to_owned());
    }
    if carbs_ratio < receipt::LOW_CARBS_RATIO {
        notes.push("Carbohydrate share is low".to_owned());
    } else if carbs_ratio > receipt::HIGH_CARBS_RATIO {
        notes.push("Carbohydrate share is high".to_owned());
    }
    if fat_ratio < receipt::LOW_FAT_RATIO {
        notes.push("Fat share is low".to_owned());
    } else if fat_ratio > receipt::HIGH_FAT_RATIO {
        notes.push("Fat share is high".to_owned());
    }

    BalanceAssessment {
        balanced: score > receipt::BALANCED_THRESHOLD,
        score: Some(round_to(score, 2)),
        protein_ratio: Some(round_to(protein_ratio, 2)),
        carbs_ratio: Some(round_to(carbs_ratio, 2)),
        fat_ratio: Some(round_to(fat_ratio, 2)),
        notes,
    }
}

/// Goal suitability of a single line
#[must_use]
pub fn analyze_item(item: &ReceiptItem, goal: NutritionGoal) -> ItemAnalysis {
    let product = &item.product;
    let mut suitable = true;
    let mut concerns = Vec::new();
    let mut benefits = Vec::new();

    match goal {
        NutritionGoal::LoseWeight => {
            let energy = product.value(NutrientField::EnergyKcal);
            if energy > receipt::LOSE_WEIGHT_MAX_KCAL {
                concerns.push(format!("High calories ({energy:.0} kcal/100g)"));
                suitable = false;
            }
            let sugars = product.value(NutrientField::Sugars);
            if sugars > receipt::HIGH_SUGAR_G {
                concerns.push(format!("High sugar ({sugars:.1} g/100g)"));
            }
            let fat = product.value(NutrientField::Fat);
            if fat < receipt::LOW_FAT_G {
                benefits.push(format!("Low fat ({fat:.1} g/100g)"));
            }
        }
        NutritionGoal::GainMuscle => {
            let protein = product.value(NutrientField::Proteins);
            if protein > receipt::HIGH_PROTEIN_G {
                benefits.push(format!("High protein ({protein:.1} g/100g)"));
            } else if protein < receipt::LOW_PROTEIN_G {
                concerns.push(format!("Low protein ({protein:.1} g/100g)"));
                suitable = false;
            }
        }
        NutritionGoal::Maintain | NutritionGoal::GeneralHealth => {}
    }

    ItemAnalysis {
        barcode: product.barcode.clone(),
        product_name: product.product_name.clone(),
        quantity: item.quantity,
        suitable,
        concerns,
        benefits,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn item(value: Value) -> ReceiptItem {
        ReceiptItem::from_record(value.as_object().unwrap())
    }

    #[test]
    fn test_unfound_items_are_skipped() {
        let items = [
            item(json!({"barcode": "1", "energy_kcal_100g": 500, "proteins_100g": 20, "quantity": 2})),
            item(json!({"barcode": "2", "energy_kcal_100g": 900, "product_found": false})),
        ];
        let analysis = analyze_receipt(&items, &UserProfile::default());
        assert_eq!(analysis.items_analyzed, 1);
        assert!((analysis.totals.calories - 1000.0).abs() < f64::EPSILON);
        assert!((analysis.calorie_target_percent - 50.0).abs() < f64::EPSILON);
        assert!((analysis.protein_target_percent - 40.0).abs() < f64::EPSILON);
        assert!((analysis.overall_alignment - 45.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_target_percent_is_capped() {
        let items = [item(json!({"energy_kcal_100g": 3000, "quantity": 1}))];
        let analysis = analyze_receipt(&items, &UserProfile::default());
        assert!((analysis.calorie_target_percent - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_empty_basket_is_unbalanced() {
        let balance = assess_balance(&BasketTotals::default());
        assert!(!balance.balanced);
        assert!(balance.score.is_none());
    }

    #[test]
    fn test_weight_loss_item_rules() {
        let line = item(json!({"energy_kcal_100g": 450, "sugars_100g": 30, "fat_100g": 2}));
        let result = analyze_item(&line, NutritionGoal::LoseWeight);
        assert!(!result.suitable);
        assert_eq!(result.concerns.len(), 2);
        assert_eq!(result.benefits.len(), 1);
    }

    #[test]
    fn test_muscle_gain_low_protein_is_unsuitable() {
        let line = item(json!({"proteins_100g": 2}));
        assert!(!analyze_item(&line, NutritionGoal::GainMuscle).suitable);
        let line = item(json!({"proteins_100g": 25}));
        assert!(analyze_item(&line, NutritionGoal::GainMuscle).suitable);
    }
}
