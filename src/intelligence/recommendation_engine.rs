// ABOUTME: Ranks safe, goal-aligned alternatives for a grocery product
// ABOUTME: Hard filters, goal and health scoring, preference blending, and diversity capping
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Grocery Guardian Contributors

//! Recommendation Engine
//!
//! Candidates flow through the hard filter pipeline, get a goal-based
//! nutrition score and a health-impact score, and the best of them are
//! blended with a caller-supplied preference score before the final
//! ordering and diversity pass.

use super::filters::{
    DiversityFilter, FilterContext, FilterReport, FilterStats, HardFilters, SafetyReport,
};
use super::improvement::{compare_improvement, ImprovementAnalysis};
use super::nutrition_optimizer::NutritionOptimizer;
use super::similarity::SimilarityScorer;
use crate::config::ScoringConfig;
use chrono::{DateTime, Utc};
use grocery_core::constants::scoring::NEUTRAL_PREFERENCE;
use grocery_core::errors::AppResult;
use grocery_core::models::{NutritionGoal, Product, UserProfile};
use rayon::prelude::*;
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::HashMap;
use tracing::{debug, info};
use uuid::Uuid;

/// Per-request ranking options
#[derive(Debug, Clone, Default)]
pub struct RecommendationRequest {
    /// Override of the configured result count
    pub max_results: Option<usize>,
    /// Override of the configured category strictness
    pub strict_category: Option<bool>,
    /// Preference score per barcode, clamped to `[0, 1]`
    pub preferences: HashMap<String, f64>,
}

impl RecommendationRequest {
    /// Limit the number of results
    #[must_use]
    pub const fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = Some(max_results);
        self
    }

    /// Choose strict or relaxed category matching
    #[must_use]
    pub const fn with_strict_category(mut self, strict: bool) -> Self {
        self.strict_category = Some(strict);
        self
    }

    /// Record a preference score for one barcode
    #[must_use]
    pub fn with_preference(mut self, barcode: impl Into<String>, score: f64) -> Self {
        self.preferences.insert(barcode.into(), score);
        self
    }
}

/// One ranked alternative
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    /// 1-based position in the result
    pub rank: usize,
    /// The alternative product
    pub product: Product,
    /// Blended final score
    pub final_score: f64,
    /// Mean of nutrition and health impact
    pub combined_score: f64,
    /// Goal-based nutrition score
    pub nutrition_score: f64,
    /// Health impact for the user
    pub health_impact_score: f64,
    /// Preference score used in the blend
    pub preference_score: f64,
    /// Similarity to the original product
    pub similarity_score: f64,
    /// Nutrient changes relative to the original
    pub improvement: ImprovementAnalysis,
    /// Allergen safety of the alternative
    pub safety: SafetyReport,
}

/// Result of one ranking pass
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecommendationSet {
    /// Unique id of this ranking pass
    pub recommendation_id: Uuid,
    /// Barcode of the replaced product
    pub original_barcode: String,
    /// Goal the ranking optimised for
    pub goal: NutritionGoal,
    /// Ranked alternatives
    pub recommendations: Vec<Recommendation>,
    /// Hard filter pipeline summary
    pub filter_report: FilterReport,
    /// Diversity pass statistics
    pub diversity: FilterStats,
    /// When the ranking ran
    pub generated_at: DateTime<Utc>,
}

struct Scored<'p> {
    product: &'p Product,
    nutrition: f64,
    health: f64,
    combined: f64,
    similarity: f64,
}

/// Ranks alternatives for a product
pub struct RecommendationEngine<'c> {
    config: &'c ScoringConfig,
    filters: HardFilters<'c>,
    optimizer: NutritionOptimizer<'c>,
    similarity: SimilarityScorer<'c>,
    diversity: DiversityFilter,
}

impl<'c> RecommendationEngine<'c> {
    /// Build an engine over `config`
    ///
    /// # Errors
    ///
    /// Returns an error if the allergen keyword patterns cannot be compiled
    pub fn new(config: &'c ScoringConfig) -> AppResult<Self> {
        Ok(Self {
            config,
            filters: HardFilters::new(config)?,
            optimizer: NutritionOptimizer::new(config),
            similarity: SimilarityScorer::new(&config.similarity),
            diversity: DiversityFilter::from_config(&config.ranking),
        })
    }

    /// The hard filter pipeline used by this engine
    #[must_use]
    pub const fn filters(&self) -> &HardFilters<'c> {
        &self.filters
    }

    /// Rank `candidates` as replacements for `original`
    #[must_use]
    pub fn rank_alternatives(
        &self,
        original: &Product,
        candidates: &[Product],
        profile: &UserProfile,
        request: &RecommendationRequest,
    ) -> RecommendationSet {
        let ranking = &self.config.ranking;
        let goal = profile.goal();
        let max_results = request.max_results.unwrap_or(ranking.max_results);

        let pool: Vec<&Product> = candidates
            .iter()
            .filter(|c| c.barcode != original.barcode)
            .take(ranking.candidate_limit)
            .collect();

        let ctx = FilterContext {
            user_allergens: &profile.allergens,
            target_category: original.category.as_deref(),
            strict_category: request.strict_category.unwrap_or(ranking.strict_category),
        };
        let (survivors, filter_report) = self.filters.apply(pool, &ctx);

        let mut scored = self.score_all(&survivors, original, goal, profile);
        scored.sort_by(|a, b| {
            b.combined
                .total_cmp(&a.combined)
                .then_with(|| tie_break(a, b))
        });
        scored.truncate(ranking.rerank_pool);

        let mut blended: Vec<(Scored<'_>, f64, f64)> = scored
            .into_iter()
            .map(|s| {
                let preference = request
                    .preferences
                    .get(&s.product.barcode)
                    .copied()
                    .filter(|p| p.is_finite())
                    .map_or(NEUTRAL_PREFERENCE, |p| p.clamp(0.0, 1.0));
                let final_score = s
                    .combined
                    .mul_add(ranking.nutrition_weight, preference * ranking.preference_weight);
                (s, preference, final_score)
            })
            .collect();
        blended.sort_by(|a, b| b.2.total_cmp(&a.2).then_with(|| tie_break(&a.0, &b.0)));

        let (diverse, diversity) = self.diversity.apply(blended, |(s, _, _)| s.product);

        let recommendations: Vec<Recommendation> = diverse
            .into_iter()
            .take(max_results)
            .enumerate()
            .map(|(idx, (s, preference_score, final_score))| Recommendation {
                rank: idx + 1,
                product: s.product.clone(),
                final_score,
                combined_score: s.combined,
                nutrition_score: s.nutrition,
                health_impact_score: s.health,
                preference_score,
                similarity_score: s.similarity,
                improvement: compare_improvement(original, s.product, goal),
                safety: self
                    .filters
                    .check_product_safety(s.product, &profile.allergens),
            })
            .collect();

        info!(
            original = %original.barcode,
            goal = goal.as_str(),
            candidates = filter_report.initial_count,
            survivors = filter_report.final_count,
            returned = recommendations.len(),
            "Ranked alternatives"
        );

        RecommendationSet {
            recommendation_id: Uuid::new_v4(),
            original_barcode: original.barcode.clone(),
            goal,
            recommendations,
            filter_report,
            diversity,
            generated_at: Utc::now(),
        }
    }

    fn score_all<'p>(
        &self,
        survivors: &[&'p Product],
        original: &Product,
        goal: NutritionGoal,
        profile: &UserProfile,
    ) -> Vec<Scored<'p>> {
        let score_one = |product: &&'p Product| {
            let nutrition = self.optimizer.nutrition_score(product, goal, Some(profile));
            let health = self.optimizer.health_impact_score(product, profile);
            Scored {
                product,
                nutrition,
                health,
                combined: (nutrition + health) / 2.0,
                similarity: self.similarity.score(original, product),
            }
        };

        if survivors.len() >= self.config.ranking.parallel_threshold {
            debug!(count = survivors.len(), "Scoring candidates in parallel");
            survivors.par_iter().map(score_one).collect()
        } else {
            survivors.iter().map(score_one).collect()
        }
    }
}

/// Higher similarity first, then ascending barcode
fn tie_break(a: &Scored<'_>, b: &Scored<'_>) -> Ordering {
    b.similarity
        .total_cmp(&a.similarity)
        .then_with(|| a.product.barcode.cmp(&b.product.barcode))
}
