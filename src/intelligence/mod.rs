// ABOUTME: Scoring intelligence for grocery products and baskets
// ABOUTME: Similarity, validation, goal optimisation, filtering, ranking, and receipt analysis
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Grocery Guardian Contributors

//! # Intelligence Module
//!
//! Every scorer here is a pure function of its inputs and a borrowed
//! [`ScoringConfig`](crate::config::ScoringConfig), so one configuration can
//! back any number of concurrent requests.

/// Zero-tolerance allergen, category, availability, and diversity filters
pub mod filters;
/// Field-by-field comparison of an alternative against the original
pub mod improvement;
/// Goal-based nutrition and health-impact scoring
pub mod nutrition_optimizer;
/// Nutrition data completeness and plausibility checks
pub mod nutrition_validator;
/// Whole-basket receipt analysis
pub mod receipt_analysis;
/// Alternative ranking pipeline
pub mod recommendation_engine;
/// Product-to-product similarity
pub mod similarity;
/// User profile plausibility checks
pub mod user_validation;

pub use filters::{
    AllergenFilter, AvailabilityFilter, CategoryFilter, DetectedAllergen, DiversityFilter,
    FilterContext, FilterReport, FilterStats, FoundIn, HardFilter, HardFilters,
    NutritionDataFilter, RiskLevel, SafetyReport,
};
pub use improvement::{
    compare_improvement, ImprovementAnalysis, ImprovementDirection, NutrientChange,
};
pub use nutrition_optimizer::{basal_metabolic_rate, NutritionOptimizer};
pub use nutrition_validator::{validate_nutrition, NutritionValidation, NutritionValidator};
pub use receipt_analysis::{analyze_receipt, ReceiptAnalysis, ReceiptItem};
pub use recommendation_engine::{
    Recommendation, RecommendationEngine, RecommendationRequest, RecommendationSet,
};
pub use similarity::{similarity_score, SimilarityScorer};
pub use user_validation::{validate_user, UserValidation};
