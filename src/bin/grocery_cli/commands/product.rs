// ABOUTME: Single-product commands for grocery-cli
// ABOUTME: Similarity, nutrition validation, and strategy weight lookup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Grocery Guardian Contributors

use crate::helpers::input::read_product;
use grocery_guardian::config::ScoringConfig;
use grocery_guardian::errors::AppResult;
use grocery_guardian::intelligence::{NutritionValidator, SimilarityScorer};
use grocery_guardian::models::NutritionGoal;
use serde_json::{json, Value};
use std::path::Path;

/// Similarity of the products in `a` and `b`
pub fn similarity(config: &ScoringConfig, a: &Path, b: &Path) -> AppResult<Value> {
    let first = read_product(a)?;
    let second = read_product(b)?;
    let score = SimilarityScorer::new(&config.similarity).score(&first, &second);

    Ok(json!({
        "a": first.barcode,
        "b": second.barcode,
        "similarity": score,
    }))
}

/// Validation flags of the product in `path`
pub fn validate(config: &ScoringConfig, path: &Path) -> AppResult<Value> {
    let product = read_product(path)?;
    let validation = NutritionValidator::new(&config.nutrition_ranges).validate(&product);

    Ok(json!({
        "barcode": product.barcode,
        "validation": validation,
        "failed": validation.failed(),
    }))
}

/// Strategy weight table of `goal`
pub fn weights(config: &ScoringConfig, goal: &str) -> AppResult<Value> {
    let goal: NutritionGoal = goal.parse()?;
    Ok(json!({
        "goal": goal,
        "weights": config.strategies.weights_for(goal),
    }))
}
