// ABOUTME: Scoring configuration aggregating weights, ranges, catalogs, and ranking limits
// ABOUTME: Loaded once from defaults plus environment overrides, validated, then passed explicitly
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Grocery Guardian Contributors

//! Scoring Configuration
//!
//! [`ScoringConfig`] is immutable data. Callers load it once (usually via
//! [`ScoringConfig::load_or_default`]) and hand a reference to every scorer
//! that needs it; nothing in the crate reads configuration from globals.
//!
//! # Module Structure
//!
//! - `strategies` - Goal-to-weights tables
//! - `ranges` - Nutrient and user profile validation intervals
//! - `catalog` - Category groups, allergen synonyms, ingredient keywords
//! - `scoring` - Similarity blend, optimizer windows, ranking limits
//!
//! # Environment Overrides
//!
//! | Variable | Field |
//! |---|---|
//! | `GROCERY_SIMILARITY_CATEGORY_WEIGHT` | `similarity.category_weight` |
//! | `GROCERY_SIMILARITY_NUTRITION_WEIGHT` | `similarity.nutrition_weight` |
//! | `GROCERY_RANKING_MAX_RESULTS` | `ranking.max_results` |
//! | `GROCERY_RANKING_CANDIDATE_LIMIT` | `ranking.candidate_limit` |
//! | `GROCERY_RANKING_NUTRITION_WEIGHT` | `ranking.nutrition_weight` |
//! | `GROCERY_RANKING_PREFERENCE_WEIGHT` | `ranking.preference_weight` |
//! | `GROCERY_RANKING_STRICT_CATEGORY` | `ranking.strict_category` |
//! | `GROCERY_ENERGY_MAX_KCAL` | `nutrition_ranges.energy_kcal.max` |
//! | `GROCERY_SODIUM_MAX_MG` | `nutrition_ranges.sodium.max` |

/// Category groups and keyword tables
pub mod catalog;
/// Configuration errors
pub mod error;
/// Validation intervals
pub mod ranges;
/// Similarity blend, optimizer windows, and ranking limits
pub mod scoring;
/// Goal strategy weight tables
pub mod strategies;

pub use catalog::{AllergenKeywords, CatalogConfig, CategoryGroup};
pub use error::ConfigError;
pub use ranges::{NutritionValidationRanges, UserMetric, UserValidationRanges, ValidationRange};
pub use scoring::{OptimizerBounds, RankingConfig, SimilarityWeights, Window};
pub use strategies::{NutritionStrategies, StrategyFactor, StrategyWeights};

use serde::Serialize;
use std::env::{self, VarError};
use std::str::FromStr;
use tracing::{debug, warn};

/// Complete configuration for the scoring engine
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ScoringConfig {
    /// Category/nutrition blend of the similarity score
    pub similarity: SimilarityWeights,
    /// Goal-based strategy tables
    pub strategies: NutritionStrategies,
    /// Per-100g nutrient plausibility ranges
    pub nutrition_ranges: NutritionValidationRanges,
    /// User profile plausibility ranges
    pub user_ranges: UserValidationRanges,
    /// Category groups and keyword tables
    pub catalog: CatalogConfig,
    /// Normalisation windows for goal scoring
    pub optimizer: OptimizerBounds,
    /// Ranking limits and blend
    pub ranking: RankingConfig,
}

impl ScoringConfig {
    /// Load configuration from defaults and environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if an environment variable holds an unparseable value
    /// or the resulting configuration fails validation
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        debug!(
            max_results = config.ranking.max_results,
            strict_category = config.ranking.strict_category,
            "Scoring configuration loaded"
        );
        Ok(config)
    }

    /// Load configuration, falling back to defaults on any error
    #[must_use]
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_else(|e| {
            warn!("Failed to load scoring config: {e}, using defaults");
            Self::default()
        })
    }

    /// Validate every section
    ///
    /// # Errors
    ///
    /// Returns the first invariant violation found: weights that do not sum
    /// to 1.0, inverted ranges, or zero limits
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.similarity.validate()?;
        self.strategies.validate()?;
        self.nutrition_ranges.validate()?;
        self.user_ranges.validate()?;
        self.catalog.validate()?;
        self.optimizer.validate()?;
        self.ranking.validate()?;
        Ok(())
    }

    /// Helper function to parse and apply an environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        let val = match env::var(env_var_name) {
            Ok(val) => val,
            Err(VarError::NotPresent) => return Ok(()),
            Err(e) => return Err(e.into()),
        };
        *target = val
            .trim()
            .parse()
            .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}: '{val}'")))?;
        Ok(())
    }

    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        // Similarity blend
        Self::apply_env_var(
            "GROCERY_SIMILARITY_CATEGORY_WEIGHT",
            &mut self.similarity.category_weight,
        )?;
        Self::apply_env_var(
            "GROCERY_SIMILARITY_NUTRITION_WEIGHT",
            &mut self.similarity.nutrition_weight,
        )?;

        // Ranking
        Self::apply_env_var(
            "GROCERY_RANKING_MAX_RESULTS",
            &mut self.ranking.max_results,
        )?;
        Self::apply_env_var(
            "GROCERY_RANKING_CANDIDATE_LIMIT",
            &mut self.ranking.candidate_limit,
        )?;
        Self::apply_env_var(
            "GROCERY_RANKING_NUTRITION_WEIGHT",
            &mut self.ranking.nutrition_weight,
        )?;
        Self::apply_env_var(
            "GROCERY_RANKING_PREFERENCE_WEIGHT",
            &mut self.ranking.preference_weight,
        )?;
        Self::apply_env_var(
            "GROCERY_RANKING_STRICT_CATEGORY",
            &mut self.ranking.strict_category,
        )?;

        // Validation ranges
        Self::apply_env_var(
            "GROCERY_ENERGY_MAX_KCAL",
            &mut self.nutrition_ranges.energy_kcal.max,
        )?;
        Self::apply_env_var(
            "GROCERY_SODIUM_MAX_MG",
            &mut self.nutrition_ranges.sodium.max,
        )?;

        Ok(self)
    }
}
