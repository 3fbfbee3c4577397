// ABOUTME: Hard constraint filters applied to candidate products before scoring
// ABOUTME: Availability, data completeness, zero-tolerance allergen, category, and diversity filters
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Grocery Guardian Contributors

//! Hard Filters
//!
//! Each filter is a pure predicate over a product and a [`FilterContext`].
//! Running a filter over a list yields the survivors plus [`FilterStats`];
//! filters carry no mutable counters, so one pipeline can serve many
//! concurrent requests.
//!
//! The allergen filter is zero-tolerance: a product is unsafe if any user
//! allergen name or synonym appears in its allergen declaration, or any
//! synonym appears as a whole word in its ingredient list.

use crate::config::{CatalogConfig, NutritionValidationRanges, RankingConfig, ScoringConfig};
use crate::formatting::round_to;
use chrono::{DateTime, Utc};
use grocery_core::errors::{AppError, AppResult};
use grocery_core::models::{AllergenSeverity, NutrientField, Product, UserAllergen};
use regex::Regex;
use serde::Serialize;
use std::collections::HashMap;
use tracing::{debug, info, warn};

/// Request-scoped inputs shared by every filter
#[derive(Debug, Clone, Copy, Default)]
pub struct FilterContext<'a> {
    /// Allergens the user must avoid
    pub user_allergens: &'a [UserAllergen],
    /// Category of the product being replaced
    pub target_category: Option<&'a str>,
    /// Exact category matching (otherwise category groups are used)
    pub strict_category: bool,
}

/// Pass/filter counts of one filter run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilterStats {
    /// Filter name
    pub filter_name: &'static str,
    /// Products examined
    pub total_processed: usize,
    /// Products removed
    pub filtered_count: usize,
    /// Share removed (3 decimals)
    pub filter_rate: f64,
    /// Share kept (3 decimals)
    pub pass_rate: f64,
}

impl FilterStats {
    /// Stats from raw counts
    #[must_use]
    pub fn new(filter_name: &'static str, total_processed: usize, filtered_count: usize) -> Self {
        let filter_rate = if total_processed > 0 {
            filtered_count as f64 / total_processed as f64
        } else {
            0.0
        };
        Self {
            filter_name,
            total_processed,
            filtered_count,
            filter_rate: round_to(filter_rate, 3),
            pass_rate: round_to(1.0 - filter_rate, 3),
        }
    }
}

/// Summary of a full pipeline run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilterReport {
    /// Products entering the pipeline
    pub initial_count: usize,
    /// Products surviving every stage
    pub final_count: usize,
    /// Products removed
    pub total_filtered: usize,
    /// Share removed (3 decimals)
    pub overall_filter_rate: f64,
    /// Per-stage statistics, in run order
    pub filter_details: Vec<FilterStats>,
}

/// A predicate that removes unsuitable candidates
pub trait HardFilter: Send + Sync {
    /// Stable filter name for statistics and logs
    fn name(&self) -> &'static str;

    /// Whether `product` survives this filter
    fn keep(&self, product: &Product, ctx: &FilterContext<'_>) -> bool;

    /// Run the filter over `products`, returning survivors and statistics
    fn apply<'p>(
        &self,
        products: Vec<&'p Product>,
        ctx: &FilterContext<'_>,
    ) -> (Vec<&'p Product>, FilterStats) {
        let total = products.len();
        let kept: Vec<&'p Product> = products
            .into_iter()
            .filter(|product| {
                let keep = self.keep(product, ctx);
                if !keep {
                    debug!(
                        filter = self.name(),
                        barcode = %product.barcode,
                        "Candidate filtered"
                    );
                }
                keep
            })
            .collect();

        info!(
            filter = self.name(),
            before = total,
            after = kept.len(),
            "Filter applied"
        );
        let stats = FilterStats::new(self.name(), total, total - kept.len());
        (kept, stats)
    }
}

// ============================================================================
// Availability
// ============================================================================

/// Drops products without identity or with implausible macro values
#[derive(Debug, Clone, Copy)]
pub struct AvailabilityFilter<'c> {
    ranges: &'c NutritionValidationRanges,
}

impl<'c> AvailabilityFilter<'c> {
    /// Create the filter over `ranges`
    #[must_use]
    pub const fn new(ranges: &'c NutritionValidationRanges) -> Self {
        Self { ranges }
    }
}

impl HardFilter for AvailabilityFilter<'_> {
    fn name(&self) -> &'static str {
        "AvailabilityFilter"
    }

    fn keep(&self, product: &Product, _ctx: &FilterContext<'_>) -> bool {
        if product.barcode.is_empty() || product.product_name.is_empty() {
            return false;
        }
        [
            NutrientField::EnergyKcal,
            NutrientField::Proteins,
            NutrientField::Fat,
        ]
        .into_iter()
        .all(|field| match (product.nutrient(field), self.ranges.range_for(field)) {
            (Some(value), Some(range)) => range.contains(value),
            _ => true,
        })
    }
}

// ============================================================================
// Nutrition data completeness
// ============================================================================

/// Drops products missing any required nutrient field
#[derive(Debug, Clone)]
pub struct NutritionDataFilter {
    required: Vec<NutrientField>,
}

impl NutritionDataFilter {
    /// Require a custom set of fields
    #[must_use]
    pub const fn new(required: Vec<NutrientField>) -> Self {
        Self { required }
    }
}

impl Default for NutritionDataFilter {
    fn default() -> Self {
        Self::new(NutrientField::BASIC.to_vec())
    }
}

impl HardFilter for NutritionDataFilter {
    fn name(&self) -> &'static str {
        "NutritionDataFilter"
    }

    fn keep(&self, product: &Product, _ctx: &FilterContext<'_>) -> bool {
        self.required.iter().all(|&field| product.has(field))
    }
}

// ============================================================================
// Allergens
// ============================================================================

/// Risk of a detected allergen, ordered from none to high
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    /// Nothing detected
    #[default]
    None,
    /// Mild allergy
    Low,
    /// Moderate allergy
    Medium,
    /// Severe allergy
    High,
}

impl From<AllergenSeverity> for RiskLevel {
    fn from(severity: AllergenSeverity) -> Self {
        match severity {
            AllergenSeverity::Severe => Self::High,
            AllergenSeverity::Moderate => Self::Medium,
            AllergenSeverity::Mild => Self::Low,
        }
    }
}

/// Where an allergen was detected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FoundIn {
    /// Declared allergen text
    Allergens,
    /// Ingredient list
    Ingredients,
}

/// One allergen detected in a product
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetectedAllergen {
    /// User allergen name as supplied
    pub allergen_name: String,
    /// User-reported severity
    pub severity: AllergenSeverity,
    /// Where it was found
    pub found_in: FoundIn,
    /// Risk derived from severity
    pub risk_assessment: RiskLevel,
}

/// Detailed allergen safety report for one product
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SafetyReport {
    /// No user allergen was detected
    pub safe: bool,
    /// Detected allergens
    pub detected_allergens: Vec<DetectedAllergen>,
    /// Highest risk among detected allergens
    pub risk_level: RiskLevel,
    /// User-facing warnings, one per detection
    pub warnings: Vec<String>,
    /// When the check ran
    pub checked_at: DateTime<Utc>,
}

/// Zero-tolerance allergen filter
#[derive(Debug, Clone)]
pub struct AllergenFilter<'c> {
    catalog: &'c CatalogConfig,
    word_patterns: HashMap<String, Regex>,
}

impl<'c> AllergenFilter<'c> {
    /// Compile whole-word ingredient patterns for every catalog allergen
    ///
    /// # Errors
    ///
    /// Returns an error if a keyword pattern cannot be compiled
    pub fn new(catalog: &'c CatalogConfig) -> AppResult<Self> {
        let mut word_patterns = HashMap::with_capacity(catalog.allergen_keywords.len());
        for entry in &catalog.allergen_keywords {
            let alternatives: Vec<String> = entry
                .keywords
                .iter()
                .map(|k| regex::escape(&k.to_lowercase()))
                .collect();
            let pattern = format!(r"\b(?:{})\b", alternatives.join("|"));
            let regex = Regex::new(&pattern).map_err(|e| {
                AppError::config(format!(
                    "Invalid keyword pattern for allergen '{}'",
                    entry.allergen
                ))
                .with_source(e)
            })?;
            word_patterns.insert(entry.allergen.clone(), regex);
        }
        Ok(Self {
            catalog,
            word_patterns,
        })
    }

    fn in_allergen_text(&self, name: &str, allergen_text: &str) -> bool {
        if allergen_text.is_empty() {
            return false;
        }
        allergen_text.contains(name)
            || self.catalog.keywords_for(name).is_some_and(|keywords| {
                keywords
                    .iter()
                    .any(|k| allergen_text.contains(k.to_lowercase().as_str()))
            })
    }

    /// Allergens outside the catalog fall back to a plain name search
    fn in_ingredients(&self, name: &str, ingredients: &str) -> bool {
        !ingredients.is_empty()
            && self.word_patterns.get(name).map_or_else(
                || ingredients.contains(name),
                |pattern| pattern.is_match(ingredients),
            )
    }

    fn lowered_texts(product: &Product) -> (String, String) {
        (
            product.allergens.as_deref().unwrap_or_default().to_lowercase(),
            product
                .ingredients
                .as_deref()
                .unwrap_or_default()
                .to_lowercase(),
        )
    }

    /// Whether `product` is free of every allergen in `allergens`
    #[must_use]
    pub fn is_product_safe(&self, product: &Product, allergens: &[UserAllergen]) -> bool {
        if allergens.is_empty() {
            return true;
        }
        let (allergen_text, ingredients) = Self::lowered_texts(product);
        allergens.iter().all(|allergen| {
            let name = allergen.name.trim().to_lowercase();
            !self.contains_allergen(&name, &allergen_text, &ingredients)
        })
    }

    fn contains_allergen(&self, name: &str, allergen_text: &str, ingredients: &str) -> bool {
        !name.is_empty()
            && (self.in_allergen_text(name, allergen_text) || self.in_ingredients(name, ingredients))
    }

    /// Detailed safety report of `product` for `allergens`
    #[must_use]
    pub fn check_product(&self, product: &Product, allergens: &[UserAllergen]) -> SafetyReport {
        let (allergen_text, ingredients) = Self::lowered_texts(product);
        let mut detected_allergens = Vec::new();
        let mut warnings = Vec::new();

        for allergen in allergens {
            let name = allergen.name.trim().to_lowercase();
            if name.is_empty() {
                continue;
            }
            let found_in = if self.in_allergen_text(&name, &allergen_text) {
                FoundIn::Allergens
            } else if self.in_ingredients(&name, &ingredients) {
                FoundIn::Ingredients
            } else {
                continue;
            };

            warnings.push(match allergen.severity {
                AllergenSeverity::Severe => format!(
                    "Severe warning: contains {}, which may cause a serious allergic reaction",
                    allergen.name
                ),
                AllergenSeverity::Moderate => format!("Warning: contains {}", allergen.name),
                AllergenSeverity::Mild => format!("Note: contains {}", allergen.name),
            });
            detected_allergens.push(DetectedAllergen {
                allergen_name: allergen.name.clone(),
                severity: allergen.severity,
                found_in,
                risk_assessment: allergen.severity.into(),
            });
        }

        let risk_level = detected_allergens
            .iter()
            .map(|d| d.risk_assessment)
            .max()
            .unwrap_or_default();

        SafetyReport {
            safe: detected_allergens.is_empty(),
            detected_allergens,
            risk_level,
            warnings,
            checked_at: Utc::now(),
        }
    }
}

impl HardFilter for AllergenFilter<'_> {
    fn name(&self) -> &'static str {
        "AllergenFilter"
    }

    fn keep(&self, product: &Product, ctx: &FilterContext<'_>) -> bool {
        self.is_product_safe(product, ctx.user_allergens)
    }
}

// ============================================================================
// Category
// ============================================================================

/// Keeps products in the target category (or its group, when relaxed)
#[derive(Debug, Clone, Copy)]
pub struct CategoryFilter<'c> {
    catalog: &'c CatalogConfig,
}

impl<'c> CategoryFilter<'c> {
    /// Create the filter over `catalog`
    #[must_use]
    pub const fn new(catalog: &'c CatalogConfig) -> Self {
        Self { catalog }
    }
}

impl HardFilter for CategoryFilter<'_> {
    fn name(&self) -> &'static str {
        "CategoryFilter"
    }

    fn keep(&self, product: &Product, ctx: &FilterContext<'_>) -> bool {
        let Some(target) = ctx.target_category.filter(|t| !t.is_empty()) else {
            return true;
        };
        let category = product.category.as_deref().unwrap_or_default();
        if ctx.strict_category {
            category == target
        } else {
            self.catalog.related_categories(category, target)
        }
    }
}

// ============================================================================
// Pipeline
// ============================================================================

/// Availability → nutrition data → allergen → category
#[derive(Debug, Clone)]
pub struct HardFilters<'c> {
    availability: AvailabilityFilter<'c>,
    nutrition_data: NutritionDataFilter,
    allergen: AllergenFilter<'c>,
    category: CategoryFilter<'c>,
}

impl<'c> HardFilters<'c> {
    /// Build the pipeline from `config`
    ///
    /// # Errors
    ///
    /// Returns an error if allergen keyword patterns cannot be compiled
    pub fn new(config: &'c ScoringConfig) -> AppResult<Self> {
        Ok(Self {
            availability: AvailabilityFilter::new(&config.nutrition_ranges),
            nutrition_data: NutritionDataFilter::default(),
            allergen: AllergenFilter::new(&config.catalog)?,
            category: CategoryFilter::new(&config.catalog),
        })
    }

    fn stages(&self) -> [&dyn HardFilter; 4] {
        [
            &self.availability,
            &self.nutrition_data,
            &self.allergen,
            &self.category,
        ]
    }

    /// Names of the stages, in run order
    #[must_use]
    pub fn stage_names(&self) -> Vec<&'static str> {
        self.stages().iter().map(|f| f.name()).collect()
    }

    /// Run every stage, stopping early if one removes all products
    pub fn apply<'p>(
        &self,
        products: Vec<&'p Product>,
        ctx: &FilterContext<'_>,
    ) -> (Vec<&'p Product>, FilterReport) {
        let initial_count = products.len();
        let mut remaining = products;
        let mut filter_details = Vec::with_capacity(4);

        for stage in self.stages() {
            let (kept, stats) = stage.apply(remaining, ctx);
            remaining = kept;
            filter_details.push(stats);
            if remaining.is_empty() {
                warn!(filter = stage.name(), "Hard filter removed every candidate");
                break;
            }
        }

        let final_count = remaining.len();
        let total_filtered = initial_count - final_count;
        let overall_filter_rate = if initial_count > 0 {
            total_filtered as f64 / initial_count as f64
        } else {
            0.0
        };

        info!(
            initial_count,
            final_count,
            "Hard filters complete (filter rate {:.1}%)",
            overall_filter_rate * 100.0
        );

        (
            remaining,
            FilterReport {
                initial_count,
                final_count,
                total_filtered,
                overall_filter_rate: round_to(overall_filter_rate, 3),
                filter_details,
            },
        )
    }

    /// Allergen safety report for a single product
    #[must_use]
    pub fn check_product_safety(&self, product: &Product, allergens: &[UserAllergen]) -> SafetyReport {
        self.allergen.check_product(product, allergens)
    }
}

// ============================================================================
// Diversity
// ============================================================================

/// Caps how many ranked items share a brand or a category
#[derive(Debug, Clone, Copy)]
pub struct DiversityFilter {
    max_same_brand: usize,
    max_same_category: usize,
    min_products: usize,
}

impl DiversityFilter {
    /// Create a filter with explicit limits
    #[must_use]
    pub const fn new(max_same_brand: usize, max_same_category: usize, min_products: usize) -> Self {
        Self {
            max_same_brand,
            max_same_category,
            min_products,
        }
    }

    /// Limits taken from the ranking configuration
    #[must_use]
    pub const fn from_config(ranking: &RankingConfig) -> Self {
        Self::new(
            ranking.max_same_brand,
            ranking.max_same_category,
            ranking.diversity_min_products,
        )
    }

    /// Filter an already-ranked list, keeping order
    ///
    /// Lists of at most `min_products` items pass untouched. Missing brands
    /// and categories are counted together as `Unknown`.
    pub fn apply<T>(
        &self,
        items: Vec<T>,
        product_of: impl Fn(&T) -> &Product,
    ) -> (Vec<T>, FilterStats) {
        let total = items.len();
        if total <= self.min_products {
            return (items, FilterStats::new("DiversityFilter", total, 0));
        }

        let mut brand_count: HashMap<String, usize> = HashMap::new();
        let mut category_count: HashMap<String, usize> = HashMap::new();
        let mut kept = Vec::with_capacity(total);

        for item in items {
            let product = product_of(&item);
            let brand = product.brand.clone().unwrap_or_else(|| "Unknown".to_owned());
            let category = product
                .category
                .clone()
                .unwrap_or_else(|| "Unknown".to_owned());

            let brands = brand_count.entry(brand).or_insert(0);
            let categories = category_count.entry(category).or_insert(0);
            if *brands < self.max_same_brand && *categories < self.max_same_category {
                *brands += 1;
                *categories += 1;
                kept.push(item);
            }
        }

        info!(before = total, after = kept.len(), "Diversity filter applied");
        let stats = FilterStats::new("DiversityFilter", total, total - kept.len());
        (kept, stats)
    }
}
