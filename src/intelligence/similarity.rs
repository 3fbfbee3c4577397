// ABOUTME: Product-to-product similarity from category match and nutrient closeness
// ABOUTME: Bounded, symmetric, and reflexive score in [0, 1]
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Grocery Guardian Contributors

//! Similarity Scorer
//!
//! `score = (wc × category + wn × nutrition) / (wc + wn)` where `category`
//! is 1.0 for identical category labels (two missing labels are identical)
//! and `nutrition` averages a relative-closeness term over energy, protein,
//! fat, and carbohydrates. With the default 0.4 / 0.6 weights the divisor
//! is exactly 1.

use crate::config::SimilarityWeights;
use grocery_core::models::{NutrientField, Product};

/// Nutrients compared by the nutrition term
pub const COMPARED_NUTRIENTS: [NutrientField; 4] = NutrientField::BASIC;

/// Scores how interchangeable two products are
#[derive(Debug, Clone, Copy)]
pub struct SimilarityScorer<'a> {
    weights: &'a SimilarityWeights,
}

impl<'a> SimilarityScorer<'a> {
    /// Create a scorer with the given blend
    #[must_use]
    pub const fn new(weights: &'a SimilarityWeights) -> Self {
        Self { weights }
    }

    /// Similarity in `[0, 1]`
    #[must_use]
    pub fn score(&self, a: &Product, b: &Product) -> f64 {
        let category = category_match(a, b);
        let nutrition = nutrition_similarity(a, b);

        let total_weight = self.weights.category_weight + self.weights.nutrition_weight;
        if total_weight <= 0.0 || !total_weight.is_finite() {
            return 0.0;
        }

        let blended = self
            .weights
            .nutrition_weight
            .mul_add(nutrition, self.weights.category_weight * category)
            / total_weight;
        blended.clamp(0.0, 1.0)
    }
}

/// Similarity with the default 0.4 / 0.6 blend
#[must_use]
pub fn similarity_score(a: &Product, b: &Product) -> f64 {
    SimilarityScorer::new(&SimilarityWeights::default()).score(a, b)
}

/// 1.0 when both category labels are identical (or both missing), else 0.0
#[must_use]
pub fn category_match(a: &Product, b: &Product) -> f64 {
    if a.category == b.category {
        1.0
    } else {
        0.0
    }
}

/// Mean closeness over [`COMPARED_NUTRIENTS`]
#[must_use]
pub fn nutrition_similarity(a: &Product, b: &Product) -> f64 {
    let sum: f64 = COMPARED_NUTRIENTS
        .iter()
        .map(|&field| nutrient_closeness(a.value(field), b.value(field)))
        .sum();
    sum / COMPARED_NUTRIENTS.len() as f64
}

/// Relative closeness of two nutrient values
///
/// Both zero → 1.0; exactly one zero → 0.0; otherwise
/// `1 − |a − b| / max(|a|, |b|)` floored at 0.
#[must_use]
pub fn nutrient_closeness(a: f64, b: f64) -> f64 {
    let a = if a.is_finite() { a } else { 0.0 };
    let b = if b.is_finite() { b } else { 0.0 };

    match (a == 0.0, b == 0.0) {
        (true, true) => 1.0,
        (true, false) | (false, true) => 0.0,
        (false, false) => {
            let scale = a.abs().max(b.abs());
            (1.0 - (a - b).abs() / scale).clamp(0.0, 1.0)
        }
    }
}
