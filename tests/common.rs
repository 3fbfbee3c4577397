// ABOUTME: Shared test utilities and product fixtures for integration tests
// ABOUTME: Provides quiet logging setup and realistic grocery product records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Grocery Guardian Contributors
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `grocery_guardian`

use grocery_guardian::models::{NutritionGoal, Product, UserProfile};
use serde_json::{json, Value};
use std::env;
use std::sync::Once;
use tracing::Level;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // TEST_LOG controls the level; tests stay quiet by default
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            _ => Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Product from a JSON literal
pub fn product(value: Value) -> Product {
    Product::from_value(&value)
}

/// Regular cola, the typical product being replaced
pub fn cola() -> Product {
    product(json!({
        "barcode": "5449000000996",
        "product_name": "Classic Cola",
        "brand": "FizzCo",
        "category": "Beverages",
        "energy_kcal_100g": 42,
        "proteins_100g": 0,
        "fat_100g": 0,
        "carbohydrates_100g": 10.6,
        "sugars_100g": 10.6,
        "ingredients": "carbonated water, sugar, colour, phosphoric acid, natural flavourings"
    }))
}

/// Sugar-free cola
pub fn diet_cola() -> Product {
    product(json!({
        "barcode": "5449000131805",
        "product_name": "Zero Cola",
        "brand": "FizzCo",
        "category": "Beverages",
        "energy_kcal_100g": 1,
        "proteins_100g": 0,
        "fat_100g": 0,
        "carbohydrates_100g": 0,
        "sugars_100g": 0
    }))
}

/// Milk chocolate bar
pub fn chocolate_bar() -> Product {
    product(json!({
        "barcode": "7622210449283",
        "product_name": "Milk Chocolate Bar",
        "brand": "Cocoa Ltd",
        "category": "Snacks",
        "energy_kcal_100g": 534,
        "proteins_100g": 7.3,
        "fat_100g": 30,
        "saturated_fat_100g": 18,
        "carbohydrates_100g": 57,
        "sugars_100g": 56,
        "ingredients": "sugar, cocoa butter, skimmed milk powder, cocoa mass, emulsifier (soy lecithin)",
        "allergens": "en:milk,en:soybeans"
    }))
}

/// Snack candidates with varied nutrition, brands, and allergens
pub fn snack_candidates() -> Vec<Product> {
    vec![
        product(json!({
            "barcode": "1000000000001",
            "product_name": "Roasted Chickpea Crisps",
            "brand": "Pulse Foods",
            "category": "Snacks",
            "energy_kcal_100g": 380,
            "proteins_100g": 19,
            "fat_100g": 8,
            "carbohydrates_100g": 50,
            "sugars_100g": 3,
            "fiber_100g": 12,
            "sodium_100g": 450,
            "ingredients": "chickpeas, sunflower oil, sea salt"
        })),
        product(json!({
            "barcode": "1000000000002",
            "product_name": "Almond Protein Bar",
            "brand": "Gym Fuel",
            "category": "Snacks",
            "energy_kcal_100g": 410,
            "proteins_100g": 30,
            "fat_100g": 15,
            "carbohydrates_100g": 35,
            "sugars_100g": 6,
            "fiber_100g": 9,
            "ingredients": "whey protein isolate, almonds, oats",
            "allergens": "en:milk,en:nuts"
        })),
        product(json!({
            "barcode": "1000000000003",
            "product_name": "Dark Chocolate 85%",
            "brand": "Cocoa Ltd",
            "category": "Snacks",
            "energy_kcal_100g": 600,
            "proteins_100g": 11,
            "fat_100g": 49,
            "carbohydrates_100g": 19,
            "sugars_100g": 14,
            "fiber_100g": 12,
            "ingredients": "cocoa mass, cocoa butter, sugar"
        })),
        product(json!({
            "barcode": "1000000000004",
            "product_name": "Rice Cakes",
            "brand": "Puffy",
            "category": "Snacks",
            "energy_kcal_100g": 387,
            "proteins_100g": 8,
            "fat_100g": 3,
            "carbohydrates_100g": 81,
            "sugars_100g": 1,
            "fiber_100g": 4,
            "ingredients": "whole grain brown rice, salt"
        })),
        product(json!({
            "barcode": "1000000000005",
            "product_name": "Apple Crisps",
            "brand": "Orchard",
            "category": "Snacks",
            "energy_kcal_100g": 350,
            "proteins_100g": 2,
            "fat_100g": 1,
            "carbohydrates_100g": 80,
            "sugars_100g": 60,
            "fiber_100g": 10,
            "ingredients": "dried organic apples"
        })),
        product(json!({
            "barcode": "1000000000006",
            "product_name": "Cheese Crackers",
            "brand": "Puffy",
            "category": "Snacks",
            "energy_kcal_100g": 500,
            "proteins_100g": 12,
            "fat_100g": 25,
            "carbohydrates_100g": 55,
            "sugars_100g": 4,
            "ingredients": "wheat flour, cheese (milk), palm oil, salt",
            "allergens": "en:gluten,en:milk"
        })),
        product(json!({
            "barcode": "1000000000007",
            "product_name": "Orange Juice",
            "brand": "Orchard",
            "category": "Beverages",
            "energy_kcal_100g": 45,
            "proteins_100g": 0.7,
            "fat_100g": 0.2,
            "carbohydrates_100g": 10,
            "sugars_100g": 8.4
        })),
        product(json!({
            "barcode": "1000000000008",
            "product_name": "Mystery Snack",
            "category": "Snacks",
            "energy_kcal_100g": 450
        })),
    ]
}

/// Profile with the given goal and no other data
pub fn profile_with_goal(goal: NutritionGoal) -> UserProfile {
    UserProfile {
        nutrition_goal: Some(goal),
        ..UserProfile::default()
    }
}
