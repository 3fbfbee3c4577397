// ABOUTME: Benchmark fixtures for generating realistic grocery catalogs
// ABOUTME: Provides deterministic product data for reproducible performance measurements
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Grocery Guardian Contributors

//! Benchmark fixtures for generating realistic grocery catalogs.
//!
//! Products are derived from their index only, so every run sees the same data.

use grocery_guardian::models::{
    AllergenSeverity, NutrientField, NutritionGoal, Product, UserAllergen, UserProfile,
};

/// Predefined catalog sizes for benchmark scenarios
#[derive(Debug, Clone, Copy)]
pub enum CatalogSize {
    /// One shelf (20 products) - stays on the sequential path
    Shelf,
    /// One aisle (200 products) - a full candidate pool
    Aisle,
}

impl CatalogSize {
    #[must_use]
    pub const fn count(self) -> usize {
        match self {
            Self::Shelf => 20,
            Self::Aisle => 200,
        }
    }
}

const BRANDS: [&str; 6] = [
    "Pulse Foods",
    "Gym Fuel",
    "Cocoa Ltd",
    "Puffy",
    "Orchard",
    "Harvest Co",
];

const INGREDIENTS: [&str; 5] = [
    "chickpeas, sunflower oil, sea salt",
    "whey protein isolate, almonds, oats",
    "whole grain brown rice, salt",
    "dried organic apples",
    "wheat flour, cheese (milk), palm oil, salt",
];

/// Generate one deterministic snack
#[must_use]
pub fn generate_product(index: usize) -> Product {
    let step = index as f64;
    Product {
        barcode: format!("{:013}", 2_000_000_000_000_usize + index),
        product_name: format!("Benchmark Snack {index}"),
        brand: Some(BRANDS[index % BRANDS.len()].to_owned()),
        category: Some("Snacks".to_owned()),
        ingredients: Some(INGREDIENTS[index % INGREDIENTS.len()].to_owned()),
        ..Product::default()
    }
    .with_nutrient(NutrientField::EnergyKcal, 120.0 + (step * 37.0) % 480.0)
    .with_nutrient(NutrientField::Proteins, 2.0 + (step * 3.0) % 28.0)
    .with_nutrient(NutrientField::Fat, 1.0 + (step * 7.0) % 40.0)
    .with_nutrient(NutrientField::Carbohydrates, 10.0 + (step * 11.0) % 70.0)
    .with_nutrient(NutrientField::Sugars, (step * 5.0) % 45.0)
    .with_nutrient(NutrientField::Fiber, (step * 2.0) % 14.0)
    .with_nutrient(NutrientField::Sodium, (step * 53.0) % 900.0)
}

/// Generate a catalog of the given size
#[must_use]
pub fn generate_catalog(size: CatalogSize) -> Vec<Product> {
    (0..size.count()).map(generate_product).collect()
}

/// A weight-loss user with a severe milk allergy
#[must_use]
pub fn milk_allergic_dieter() -> UserProfile {
    UserProfile {
        age: Some(42.0),
        height_cm: Some(168.0),
        weight_kg: Some(81.0),
        nutrition_goal: Some(NutritionGoal::LoseWeight),
        allergens: vec![UserAllergen::new("milk").with_severity(AllergenSeverity::Severe)],
        ..UserProfile::default()
    }
}
