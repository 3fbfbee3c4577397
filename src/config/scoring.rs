// ABOUTME: Tunable weights and bounds for similarity, goal scoring, and ranking
// ABOUTME: Each section validates its own invariants before the config is accepted
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Grocery Guardian Contributors

use super::error::ConfigError;
use serde::{Deserialize, Serialize};

const WEIGHT_SUM_TOLERANCE: f64 = 0.01;

fn check_weight_sum(name: &str, weights: &[f64]) -> Result<(), ConfigError> {
    if weights.iter().any(|w| !w.is_finite() || *w < 0.0) {
        return Err(ConfigError::InvalidWeights(format!(
            "{name} weights must be finite and non-negative"
        )));
    }
    let sum: f64 = weights.iter().sum();
    if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
        return Err(ConfigError::InvalidWeights(format!(
            "{name} weights must sum to 1.0 (got {sum:.3})"
        )));
    }
    Ok(())
}

/// Blend of category and nutrition terms in the similarity score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimilarityWeights {
    /// Weight of the category match term (0.4)
    pub category_weight: f64,
    /// Weight of the averaged nutrient closeness term (0.6)
    pub nutrition_weight: f64,
}

impl SimilarityWeights {
    /// Validate the blend
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidWeights` unless both weights are
    /// non-negative and sum to 1.0
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_weight_sum("similarity", &[self.category_weight, self.nutrition_weight])
    }
}

impl Default for SimilarityWeights {
    fn default() -> Self {
        Self {
            category_weight: 0.4,
            nutrition_weight: 0.6,
        }
    }
}

/// A `[low, high]` window used by the goal normalisers
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Window {
    /// Lower edge
    pub low: f64,
    /// Upper edge
    pub high: f64,
}

impl Window {
    /// Create a window
    #[must_use]
    pub const fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }
}

/// Normalisation windows for the goal-based optimizer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizerBounds {
    /// Weight loss: energy, lower is better
    pub lose_weight_energy: Window,
    /// Weight loss: fat, lower is better
    pub lose_weight_fat: Window,
    /// Weight loss: sugars, lower is better
    pub lose_weight_sugars: Window,
    /// Weight loss: protein, higher is better
    pub lose_weight_protein: Window,
    /// Weight loss: fibre, higher is better
    pub lose_weight_fiber: Window,
    /// Weight loss: multiplier on nutrient density
    pub density_bonus_factor: f64,
    /// Muscle gain: protein, higher is better
    pub gain_muscle_protein: Window,
    /// Muscle gain: optimal carbohydrate window
    pub gain_muscle_carbs: Window,
    /// Muscle gain: optimal energy window
    pub gain_muscle_energy: Window,
    /// Muscle gain: optimal fat window
    pub gain_muscle_fat: Window,
    /// Muscle gain: multiplier on the complete-protein bonus weight
    pub complete_protein_factor: f64,
    /// Protein plus fibre per 100 kcal considered fully dense
    pub density_saturation: f64,
    /// Natural-content step per keyword hit
    pub natural_keyword_step: f64,
}

impl OptimizerBounds {
    /// Validate every window
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidRange` if a window is inverted, or
    /// `ConfigError::ValueOutOfRange` if a divisor is not positive
    pub fn validate(&self) -> Result<(), ConfigError> {
        let windows = [
            ("lose_weight_energy", self.lose_weight_energy),
            ("lose_weight_fat", self.lose_weight_fat),
            ("lose_weight_sugars", self.lose_weight_sugars),
            ("lose_weight_protein", self.lose_weight_protein),
            ("lose_weight_fiber", self.lose_weight_fiber),
            ("gain_muscle_protein", self.gain_muscle_protein),
            ("gain_muscle_carbs", self.gain_muscle_carbs),
            ("gain_muscle_energy", self.gain_muscle_energy),
            ("gain_muscle_fat", self.gain_muscle_fat),
        ];
        for (name, window) in windows {
            if !(window.low.is_finite() && window.high.is_finite()) || window.low >= window.high {
                return Err(ConfigError::InvalidRange(format!(
                    "{name} window must satisfy low < high"
                )));
            }
        }
        for (name, window) in [
            ("gain_muscle_carbs", self.gain_muscle_carbs),
            ("gain_muscle_energy", self.gain_muscle_energy),
            ("gain_muscle_fat", self.gain_muscle_fat),
        ] {
            if window.low <= 0.0 {
                return Err(ConfigError::ValueOutOfRange(format!(
                    "{name} optimal window must start above zero"
                )));
            }
        }
        if self.density_saturation <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "density_saturation must be positive".to_owned(),
            ));
        }
        Ok(())
    }
}

impl Default for OptimizerBounds {
    fn default() -> Self {
        Self {
            lose_weight_energy: Window::new(0.0, 600.0),
            lose_weight_fat: Window::new(0.0, 50.0),
            lose_weight_sugars: Window::new(0.0, 50.0),
            lose_weight_protein: Window::new(0.0, 30.0),
            lose_weight_fiber: Window::new(0.0, 20.0),
            density_bonus_factor: 0.1,
            gain_muscle_protein: Window::new(0.0, 50.0),
            gain_muscle_carbs: Window::new(15.0, 45.0),
            gain_muscle_energy: Window::new(200.0, 500.0),
            gain_muscle_fat: Window::new(5.0, 20.0),
            complete_protein_factor: 0.5,
            density_saturation: 10.0,
            natural_keyword_step: 0.1,
        }
    }
}

/// Candidate ranking limits and blend weights
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankingConfig {
    /// Recommendations returned per request
    pub max_results: usize,
    /// Candidates considered per request
    pub candidate_limit: usize,
    /// Top candidates by combined score that receive preference blending
    pub rerank_pool: usize,
    /// Share of the final score from nutrition and health impact
    pub nutrition_weight: f64,
    /// Share of the final score from user preference
    pub preference_weight: f64,
    /// Require exact category matches (relaxed mode uses category groups)
    pub strict_category: bool,
    /// Maximum recommendations from one brand
    pub max_same_brand: usize,
    /// Maximum recommendations from one category
    pub max_same_category: usize,
    /// Lists this short skip the diversity filter
    pub diversity_min_products: usize,
    /// Candidate count above which scoring runs in parallel
    pub parallel_threshold: usize,
}

impl RankingConfig {
    /// Validate limits and blend
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidWeights` if the blend does not sum to 1.0,
    /// or `ConfigError::ValueOutOfRange` if a limit is zero
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_weight_sum("ranking", &[self.nutrition_weight, self.preference_weight])?;
        if self.max_results == 0 || self.candidate_limit == 0 || self.rerank_pool == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "max_results, candidate_limit, and rerank_pool must be at least 1".to_owned(),
            ));
        }
        if self.max_same_brand == 0 || self.max_same_category == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "diversity limits must be at least 1".to_owned(),
            ));
        }
        Ok(())
    }
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            max_results: 5,
            candidate_limit: 200,
            rerank_pool: 20,
            nutrition_weight: 0.7,
            preference_weight: 0.3,
            strict_category: true,
            max_same_brand: 2,
            max_same_category: 3,
            diversity_min_products: 5,
            parallel_threshold: 64,
        }
    }
}
