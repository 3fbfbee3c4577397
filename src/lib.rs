// ABOUTME: Main library entry point for the Grocery Guardian scoring engine
// ABOUTME: Product similarity, nutrition validation, and goal-driven alternative ranking
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Grocery Guardian Contributors

// Crate-level attributes:
// - deny(unsafe_code): Zero-tolerance unsafe policy
#![deny(unsafe_code)]

//! # Grocery Guardian
//!
//! Scoring engine behind healthier grocery swaps. Given a scanned product,
//! a pool of candidates, and a user profile, it removes unsafe or
//! unsuitable candidates and ranks the rest by how well they serve the
//! user's nutrition goal.
//!
//! ## Features
//!
//! - **Similarity**: bounded, symmetric product similarity
//! - **Validation**: completeness and plausibility checks for nutrition data and profiles
//! - **Strategies**: per-goal nutrient weight tables
//! - **Ranking**: hard filters, goal scoring, preference blending, diversity capping
//! - **Receipts**: whole-basket target alignment and macro balance
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use grocery_guardian::config::ScoringConfig;
//! use grocery_guardian::intelligence::{RecommendationEngine, RecommendationRequest};
//! use grocery_guardian::models::{Product, UserProfile};
//! use grocery_guardian::errors::AppResult;
//!
//! fn main() -> AppResult<()> {
//!     let config = ScoringConfig::load()?;
//!     let engine = RecommendationEngine::new(&config)?;
//!
//!     let original = Product::default();
//!     let candidates: Vec<Product> = Vec::new();
//!     let ranked = engine.rank_alternatives(
//!         &original,
//!         &candidates,
//!         &UserProfile::default(),
//!         &RecommendationRequest::default(),
//!     );
//!     println!("{} alternatives", ranked.recommendations.len());
//!     Ok(())
//! }
//! ```

/// Scoring configuration with environment overrides
pub mod config;

/// Fixed scoring thresholds organized by domain
pub mod constants;

/// Rounding, summaries, and record helpers
pub mod formatting;

/// Similarity, validation, optimisation, filtering, and ranking
pub mod intelligence;

/// Structured logging setup
pub mod logging;

// Re-export foundation modules so callers need a single dependency
pub use grocery_core::{coercion, errors, models};
