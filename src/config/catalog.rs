// ABOUTME: Static product catalog knowledge used by filters and heuristics
// ABOUTME: Category groups, allergen synonyms, and ingredient keyword lists
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Grocery Guardian Contributors

//! Catalog Knowledge
//!
//! Keyword tables that drive allergen detection, relaxed category matching,
//! and the natural-content and complete-protein heuristics. Lists are kept
//! as ordered vectors so serialized output is stable.

use super::error::ConfigError;
use serde::{Deserialize, Serialize};

/// A top-level category and the sub-category labels grouped under it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryGroup {
    /// Display name of the group
    pub name: String,
    /// Sub-category labels, compared exactly
    pub members: Vec<String>,
}

/// Synonyms that indicate a named allergen in product text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllergenKeywords {
    /// Canonical allergen name (lower-case)
    pub allergen: String,
    /// Keywords searched for in allergen and ingredient text
    pub keywords: Vec<String>,
}

/// Catalog keyword tables
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Category groups for relaxed category matching
    pub category_groups: Vec<CategoryGroup>,
    /// Allergen synonym table
    pub allergen_keywords: Vec<AllergenKeywords>,
    /// Words suggesting minimally processed food
    pub natural_keywords: Vec<String>,
    /// Words suggesting additives
    pub additive_keywords: Vec<String>,
    /// Complete protein sources
    pub complete_protein_sources: Vec<String>,
    /// Iron or calcium fortification markers
    pub iron_calcium_keywords: Vec<String>,
}

impl CatalogConfig {
    /// Keywords registered for `allergen` (case-insensitive name lookup)
    #[must_use]
    pub fn keywords_for(&self, allergen: &str) -> Option<&[String]> {
        let wanted = allergen.trim().to_lowercase();
        self.allergen_keywords
            .iter()
            .find(|entry| entry.allergen == wanted)
            .map(|entry| entry.keywords.as_slice())
    }

    /// Group containing `category`, if any
    #[must_use]
    pub fn group_of(&self, category: &str) -> Option<&CategoryGroup> {
        self.category_groups
            .iter()
            .find(|group| group.members.iter().any(|member| member == category))
    }

    /// Whether two categories are equal or listed in the same group
    #[must_use]
    pub fn related_categories(&self, a: &str, b: &str) -> bool {
        a == b
            || self.category_groups.iter().any(|group| {
                group.members.iter().any(|m| m == a) && group.members.iter().any(|m| m == b)
            })
    }

    /// Validate the tables
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ValueOutOfRange` if an allergen has no keywords
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(entry) = self
            .allergen_keywords
            .iter()
            .find(|entry| entry.keywords.is_empty())
        {
            return Err(ConfigError::ValueOutOfRange(format!(
                "allergen '{}' must have at least one keyword",
                entry.allergen
            )));
        }
        Ok(())
    }
}

fn words(list: &[&str]) -> Vec<String> {
    list.iter().map(|w| (*w).to_owned()).collect()
}

fn group(name: &str, members: &[&str]) -> CategoryGroup {
    CategoryGroup {
        name: name.to_owned(),
        members: words(members),
    }
}

fn allergen(name: &str, keywords: &[&str]) -> AllergenKeywords {
    AllergenKeywords {
        allergen: name.to_owned(),
        keywords: words(keywords),
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            category_groups: vec![
                group(
                    "Food",
                    &[
                        "food",
                        "meat",
                        "seafood",
                        "dairy",
                        "vegetables",
                        "fruits",
                        "grains",
                        "cereals",
                        "bread",
                        "pasta",
                        "frozen-foods",
                    ],
                ),
                group(
                    "Beverages",
                    &[
                        "beverages",
                        "drinks",
                        "water",
                        "juices",
                        "soft-drinks",
                        "coffee",
                        "tea",
                        "alcoholic-beverages",
                    ],
                ),
                group(
                    "Snacks",
                    &[
                        "snacks",
                        "candy",
                        "chocolate",
                        "cookies",
                        "chips",
                        "crackers",
                        "nuts-seeds",
                        "desserts",
                    ],
                ),
                group(
                    "Health & Supplements",
                    &[
                        "supplements",
                        "vitamins",
                        "protein-powder",
                        "health-food",
                        "organic",
                        "diet-products",
                        "baby-food",
                    ],
                ),
                group(
                    "Condiments & Others",
                    &[
                        "condiments",
                        "sauces",
                        "spices",
                        "oils",
                        "vinegar",
                        "household",
                        "personal-care",
                        "others",
                    ],
                ),
            ],
            allergen_keywords: vec![
                allergen(
                    "milk",
                    &["milk", "dairy", "lactose", "casein", "whey", "butter", "cream"],
                ),
                allergen(
                    "eggs",
                    &["egg", "albumin", "lecithin", "ovomucin", "ovalbumin"],
                ),
                allergen(
                    "nuts",
                    &[
                        "nuts",
                        "almond",
                        "walnut",
                        "pecan",
                        "cashew",
                        "hazelnut",
                        "pistachio",
                    ],
                ),
                allergen(
                    "gluten",
                    &["wheat", "gluten", "barley", "rye", "oats", "spelt", "kamut"],
                ),
                allergen(
                    "soy",
                    &["soy", "soya", "soybean", "tofu", "tempeh", "miso"],
                ),
                allergen(
                    "fish",
                    &["fish", "salmon", "tuna", "cod", "mackerel", "sardine"],
                ),
                allergen(
                    "shellfish",
                    &["shellfish", "shrimp", "crab", "lobster", "oyster", "mussel"],
                ),
                allergen("sesame", &["sesame", "tahini", "sesame oil", "sesamum"]),
                allergen("peanuts", &["peanut", "groundnut", "arachis", "peanut oil"]),
                allergen(
                    "tree_nuts",
                    &["tree nuts", "brazil nut", "macadamia", "pine nut"],
                ),
                allergen("celery", &["celery", "celeriac", "celery seed"]),
                allergen("mustard", &["mustard", "mustard seed", "dijon"]),
                allergen("lupin", &["lupin", "lupine", "lupin flour"]),
                allergen(
                    "sulphites",
                    &["sulphite", "sulfite", "sulphur dioxide", "so2"],
                ),
            ],
            natural_keywords: words(&[
                "organic",
                "natural",
                "whole",
                "fresh",
                "raw",
                "unprocessed",
            ]),
            additive_keywords: words(&[
                "preservative",
                "artificial",
                "color",
                "flavor",
                "stabilizer",
            ]),
            complete_protein_sources: words(&[
                "meat", "chicken", "beef", "pork", "fish", "salmon", "tuna", "egg", "milk",
                "cheese", "yogurt", "quinoa", "soy",
            ]),
            iron_calcium_keywords: words(&["iron", "calcium"]),
        }
    }
}
