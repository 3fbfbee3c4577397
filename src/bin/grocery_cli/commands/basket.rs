// ABOUTME: Multi-product commands for grocery-cli
// ABOUTME: Alternative ranking and receipt analysis
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Grocery Guardian Contributors

use crate::helpers::input::{read_product, read_products, read_profile, read_records};
use grocery_guardian::config::ScoringConfig;
use grocery_guardian::errors::AppResult;
use grocery_guardian::intelligence::{
    analyze_receipt, ReceiptItem, RecommendationEngine, RecommendationRequest,
};
use grocery_guardian::models::UserAllergen;
use serde_json::Value;
use std::path::{Path, PathBuf};
use tracing::info;

/// Arguments of the `rank` command
pub struct RankArgs {
    pub original: PathBuf,
    pub candidates: PathBuf,
    pub profile: Option<PathBuf>,
    pub goal: Option<String>,
    pub allergens: Vec<String>,
    pub limit: Option<usize>,
    pub relaxed: bool,
}

/// Rank alternatives for the product in `args.original`
pub fn rank(config: &ScoringConfig, args: &RankArgs) -> AppResult<Value> {
    let original = read_product(&args.original)?;
    let candidates = read_products(&args.candidates)?;
    let mut profile = read_profile(args.profile.as_deref())?;

    if let Some(goal) = &args.goal {
        profile.nutrition_goal = Some(goal.parse()?);
    }
    profile
        .allergens
        .extend(args.allergens.iter().map(|name| UserAllergen::new(name.trim())));

    let mut request = RecommendationRequest::default();
    if let Some(limit) = args.limit {
        request = request.with_max_results(limit);
    }
    if args.relaxed {
        request = request.with_strict_category(false);
    }

    info!(
        original = %original.barcode,
        candidates = candidates.len(),
        "Ranking alternatives"
    );
    let engine = RecommendationEngine::new(config)?;
    let result = engine.rank_alternatives(&original, &candidates, &profile, &request);
    Ok(serde_json::to_value(result)?)
}

/// Analyse the receipt in `items`
pub fn receipt(items: &Path, profile: Option<&Path>) -> AppResult<Value> {
    let lines: Vec<ReceiptItem> = read_records(items)?
        .iter()
        .map(ReceiptItem::from_record)
        .collect();
    let profile = read_profile(profile)?;
    Ok(serde_json::to_value(analyze_receipt(&lines, &profile))?)
}
