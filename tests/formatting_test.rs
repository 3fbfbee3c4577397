// ABOUTME: Integration tests for presentation and record helpers
// ABOUTME: Covers nutrition summaries, name normalization, nutrient deltas, and record merging
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Grocery Guardian Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{chocolate_bar, cola, diet_cola};
use grocery_guardian::formatting::{
    merge_records, normalize_product_name, nutrient_difference, nutrition_summary, round_to,
};
use grocery_guardian::models::{NutrientField, Product};
use serde_json::json;

#[test]
fn test_cola_summary() {
    assert_eq!(
        nutrition_summary(&cola()),
        "Calories: 42.0kcal/100g, Protein: 0.0g/100g, Fat: 0.0g/100g, Carbs: 10.6g/100g, Sugar: 10.6g/100g"
    );
}

#[test]
fn test_brand_suffixes_are_stripped_in_order() {
    let brand = chocolate_bar().brand.unwrap();
    assert_eq!(normalize_product_name(&brand), "cocoa");
    assert_eq!(normalize_product_name("Acme Co Ltd"), "acme");
    assert_eq!(normalize_product_name("Tesco"), "tesco");
    assert_eq!(normalize_product_name("   "), "");
}

#[test]
fn test_nutrient_difference_treats_missing_as_zero() {
    let delta = nutrient_difference(&cola(), &diet_cola(), NutrientField::EnergyKcal);
    assert!((delta + 41.0).abs() < f64::EPSILON);

    let fiber = nutrient_difference(&Product::default(), &cola(), NutrientField::Fiber);
    assert!(fiber.abs() < f64::EPSILON);
}

#[test]
fn test_merge_keeps_base_values() {
    let base = json!({"barcode": "1", "product_name": "Base"});
    let extra = json!({"product_name": "Other", "brand": "Acme"});
    let merged = merge_records(base.as_object().unwrap(), extra.as_object().unwrap());

    assert_eq!(merged.len(), 3);
    assert_eq!(merged["product_name"], json!("Base"));
    assert_eq!(merged["brand"], json!("Acme"));
}

#[test]
fn test_round_to_places() {
    assert!((round_to(0.666_666, 3) - 0.667).abs() < 1e-12);
    assert!((round_to(1234.5, 0) - 1235.0).abs() < f64::EPSILON);
    assert!(round_to(f64::INFINITY, 2).is_infinite());
}
