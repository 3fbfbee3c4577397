// ABOUTME: Goal-based nutrition scoring and personal health impact estimation
// ABOUTME: Strategy-weighted terms per goal, profile adjustments, and Mifflin-St Jeor BMR
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Grocery Guardian Contributors

//! Nutrition Optimizer
//!
//! Scores a product against a [`NutritionGoal`]. Every goal starts from a
//! neutral 0.5 and adds weighted terms drawn from the goal's strategy table:
//!
//! - `lose_weight`: centred terms `|w| × (norm − 0.5)` for energy, fat, and
//!   sugars (lower is better) and protein and fibre (higher is better), plus
//!   a small nutrient-density bonus
//! - `gain_muscle`: protein, optimal windows for carbohydrates, energy, and
//!   fat, and a complete-protein bonus
//! - `maintain`: macro balance, nutrient variety, and natural ingredients
//! - `general_health`: nutrient density, natural ingredients, and balance
//!
//! # Scientific References
//!
//! - Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
//!   *American Journal of Clinical Nutrition*, 51(2), 241-247.
//!   <https://doi.org/10.1093/ajcn/51.2.241>

use crate::config::{ScoringConfig, StrategyFactor, StrategyWeights, Window};
use crate::constants::{health_impact, mifflin_st_jeor, personalization};
use grocery_core::constants::{profile_defaults, scoring};
use grocery_core::models::{Gender, NutrientField, NutritionGoal, Product, UserProfile};

/// Forward normalisation: 0 at or below `low`, 1 at or above `high`
#[must_use]
pub fn normalize_forward(value: f64, window: Window) -> f64 {
    if value <= window.low {
        0.0
    } else if value >= window.high {
        1.0
    } else {
        (value - window.low) / (window.high - window.low)
    }
}

/// Reverse normalisation: 1 at or below `low`, 0 at or above `high`
#[must_use]
pub fn normalize_reverse(value: f64, window: Window) -> f64 {
    1.0 - normalize_forward(value, window)
}

/// Optimal-window normalisation
///
/// 1 inside the window, `value / low` below it, and `1 − (value − high) / high`
/// above it, floored at 0.
#[must_use]
pub fn normalize_optimal(value: f64, window: Window) -> f64 {
    if (window.low..=window.high).contains(&value) {
        1.0
    } else if value < window.low {
        if window.low > 0.0 {
            (value / window.low).max(0.0)
        } else {
            0.0
        }
    } else {
        (1.0 - (value - window.high) / window.high).max(0.0)
    }
}

/// Macro balance against the ideal 30/50/20 protein/carb/fat split
///
/// Returns `max(0, 1 − 2 × mean |ratio − ideal|)`; 0 when no macros are reported.
#[must_use]
pub fn macro_balance(protein: f64, carbs: f64, fat: f64) -> f64 {
    let total = protein + carbs + fat;
    if total <= 0.0 || !total.is_finite() {
        return 0.0;
    }

    let deviation = ((protein / total - scoring::IDEAL_PROTEIN_RATIO).abs()
        + (carbs / total - scoring::IDEAL_CARBS_RATIO).abs()
        + (fat / total - scoring::IDEAL_FAT_RATIO).abs())
        / 3.0;
    2.0_f64.mul_add(-deviation, 1.0).max(0.0)
}

/// Macro balance of a product
#[must_use]
pub fn nutrition_balance(product: &Product) -> f64 {
    macro_balance(
        product.value(NutrientField::Proteins),
        product.value(NutrientField::Carbohydrates),
        product.value(NutrientField::Fat),
    )
}

const VARIETY_FIELDS: [NutrientField; 6] = [
    NutrientField::Proteins,
    NutrientField::Carbohydrates,
    NutrientField::Fat,
    NutrientField::Fiber,
    NutrientField::Sodium,
    NutrientField::Sugars,
];

/// Share of variety nutrients reported with a positive value
#[must_use]
pub fn nutrition_variety(product: &Product) -> f64 {
    let present = VARIETY_FIELDS
        .iter()
        .filter(|&&field| product.nutrient(field).is_some_and(|v| v > 0.0))
        .count();
    present as f64 / VARIETY_FIELDS.len() as f64
}

/// Centred contribution of one nutrient: the weight's sign picks the
/// direction (negative rewards low values), its magnitude the importance
#[must_use]
pub fn directed_term(weight: f64, value: f64, window: Window) -> f64 {
    let norm = if weight < 0.0 {
        normalize_reverse(value, window)
    } else {
        normalize_forward(value, window)
    };
    weight.abs() * (norm - 0.5)
}

/// Scores products against nutrition goals and user profiles
#[derive(Debug, Clone, Copy)]
pub struct NutritionOptimizer<'a> {
    config: &'a ScoringConfig,
}

impl<'a> NutritionOptimizer<'a> {
    /// Create an optimizer over `config`
    #[must_use]
    pub const fn new(config: &'a ScoringConfig) -> Self {
        Self { config }
    }

    /// Goal score in `[0, 1]`, personalised when a profile is supplied
    #[must_use]
    pub fn nutrition_score(
        &self,
        product: &Product,
        goal: NutritionGoal,
        profile: Option<&UserProfile>,
    ) -> f64 {
        let strategy = self.config.strategies.weights_for(goal);
        let score = match goal {
            NutritionGoal::LoseWeight => self.weight_loss_score(product, strategy),
            NutritionGoal::GainMuscle => self.muscle_gain_score(product, strategy),
            NutritionGoal::Maintain => self.maintenance_score(product, strategy),
            NutritionGoal::GeneralHealth => self.general_health_score(product, strategy),
        };

        let score = profile.map_or(score, |p| Self::personalize(score, product, p));
        score.clamp(0.0, 1.0)
    }

    fn weight_loss_score(&self, product: &Product, strategy: &StrategyWeights) -> f64 {
        let bounds = &self.config.optimizer;
        let terms = [
            (NutrientField::EnergyKcal, bounds.lose_weight_energy),
            (NutrientField::Fat, bounds.lose_weight_fat),
            (NutrientField::Sugars, bounds.lose_weight_sugars),
            (NutrientField::Proteins, bounds.lose_weight_protein),
        ];

        let mut score = scoring::BASE_SCORE;
        for (field, window) in terms {
            let value = product.value(field);
            if value > 0.0 {
                score += directed_term(strategy.nutrient(field).unwrap_or(0.0), value, window);
            }
        }

        let fiber = product.value(NutrientField::Fiber);
        if fiber > 0.0 {
            let norm = normalize_forward(fiber, bounds.lose_weight_fiber);
            score += strategy.weight_or(StrategyFactor::FiberBonus, 0.3) * (norm - 0.5);
        }

        bounds
            .density_bonus_factor
            .mul_add(self.nutrient_density(product), score)
    }

    fn muscle_gain_score(&self, product: &Product, strategy: &StrategyWeights) -> f64 {
        let bounds = &self.config.optimizer;
        let mut score = scoring::BASE_SCORE;

        let protein = product.value(NutrientField::Proteins);
        if protein > 0.0 {
            score += strategy.nutrient(NutrientField::Proteins).unwrap_or(0.0)
                * normalize_forward(protein, bounds.gain_muscle_protein);
        }

        let optimal_terms = [
            (NutrientField::Carbohydrates, bounds.gain_muscle_carbs),
            (NutrientField::EnergyKcal, bounds.gain_muscle_energy),
            (NutrientField::Fat, bounds.gain_muscle_fat),
        ];
        for (field, window) in optimal_terms {
            let value = product.value(field);
            if value > 0.0 {
                score +=
                    strategy.nutrient(field).unwrap_or(0.0) * normalize_optimal(value, window);
            }
        }

        if self.is_complete_protein_source(product) {
            score += strategy.weight_or(StrategyFactor::BcaaBonus, 0.4)
                * bounds.complete_protein_factor;
        }

        score
    }

    fn maintenance_score(&self, product: &Product, strategy: &StrategyWeights) -> f64 {
        let balance = strategy.weight_or(StrategyFactor::BalanceScore, 0.4);
        let variety = strategy.weight_or(StrategyFactor::VarietyScore, 0.3);
        let natural = strategy.weight_or(StrategyFactor::NaturalBonus, 0.3);

        let score = balance.mul_add(nutrition_balance(product), scoring::BASE_SCORE);
        let score = variety.mul_add(nutrition_variety(product), score);
        natural.mul_add(self.natural_content(product), score)
    }

    fn general_health_score(&self, product: &Product, strategy: &StrategyWeights) -> f64 {
        let density = strategy.weight_or(StrategyFactor::NutrientDensity, 0.4);
        let natural = strategy.weight_or(StrategyFactor::NaturalBonus, 0.3);
        let balance = strategy.weight_or(StrategyFactor::BalanceScore, 0.3);

        let score = density.mul_add(self.nutrient_density(product), scoring::BASE_SCORE);
        let score = natural.mul_add(self.natural_content(product), score);
        balance.mul_add(nutrition_balance(product), score)
    }

    /// Protein plus fibre per 100 kcal, saturating at 1.0
    ///
    /// Missing energy is treated as 1 kcal; non-positive energy scores 0.
    #[must_use]
    pub fn nutrient_density(&self, product: &Product) -> f64 {
        let calories = product.nutrient(NutrientField::EnergyKcal).unwrap_or(1.0);
        if calories <= 0.0 {
            return 0.0;
        }

        let beneficial =
            product.value(NutrientField::Proteins) + product.value(NutrientField::Fiber);
        let density = beneficial / calories * 100.0;
        (density / self.config.optimizer.density_saturation).min(1.0)
    }

    /// Natural-ingredient heuristic in `[0, 1]`, neutral at 0.5
    #[must_use]
    pub fn natural_content(&self, product: &Product) -> f64 {
        let (name, ingredients) = product.searchable_text();
        let catalog = &self.config.catalog;
        let step = self.config.optimizer.natural_keyword_step;

        let natural_hits = catalog
            .natural_keywords
            .iter()
            .filter(|k| name.contains(k.as_str()) || ingredients.contains(k.as_str()))
            .count();
        let additive_hits = catalog
            .additive_keywords
            .iter()
            .filter(|k| ingredients.contains(k.as_str()))
            .count();

        let score = step.mul_add(natural_hits as f64 - additive_hits as f64, scoring::BASE_SCORE);
        score.clamp(0.0, 1.0)
    }

    /// Whether the name or ingredients mention a complete protein source
    #[must_use]
    pub fn is_complete_protein_source(&self, product: &Product) -> bool {
        let (name, ingredients) = product.searchable_text();
        self.config
            .catalog
            .complete_protein_sources
            .iter()
            .any(|s| name.contains(s.as_str()) || ingredients.contains(s.as_str()))
    }

    fn personalize(score: f64, product: &Product, profile: &UserProfile) -> f64 {
        let mut adjusted = score;
        let age = profile
            .age
            .filter(|a| *a != 0.0)
            .unwrap_or(profile_defaults::AGE_YEARS);

        if age > health_impact::SENIOR_AGE {
            let sodium = product.value(NutrientField::Sodium);
            if sodium > 0.0 {
                adjusted -= (sodium / personalization::SODIUM_PENALTY_DIVISOR)
                    .min(personalization::MAX_SODIUM_PENALTY);
            }
        } else if age < personalization::YOUNG_AGE
            && product.value(NutrientField::EnergyKcal) > personalization::YOUNG_ENERGY_KCAL
        {
            adjusted += personalization::SMALL_BONUS;
        }

        if profile.is_female() {
            let (_, ingredients) = product.searchable_text();
            if ingredients.contains("iron") {
                adjusted += personalization::SMALL_BONUS;
            }
        }

        if profile.activity_level.is_some_and(|level| level.is_high())
            && product.value(NutrientField::Carbohydrates) > personalization::ACTIVE_CARBS_G
        {
            adjusted += personalization::SMALL_BONUS;
        }

        adjusted
    }

    /// How well one 100 g portion fits the user's day, in `[0, 1]`
    #[must_use]
    pub fn health_impact_score(&self, product: &Product, profile: &UserProfile) -> f64 {
        let mut score = scoring::BASE_SCORE;

        let bmr = basal_metabolic_rate(profile);
        if bmr > 0.0 {
            let daily_target = profile
                .daily_calories_target
                .filter(|t| *t > 0.0)
                .unwrap_or(bmr * health_impact::BMR_ACTIVITY_MULTIPLIER);
            let share = product.value(NutrientField::EnergyKcal) / daily_target;

            if (health_impact::MIN_REASONABLE_SHARE..=health_impact::MAX_REASONABLE_SHARE)
                .contains(&share)
            {
                score += health_impact::REASONABLE_SHARE_BONUS;
            } else if share > health_impact::EXCESSIVE_SHARE {
                score -= health_impact::EXCESSIVE_SHARE_PENALTY;
            }
        }

        if profile.age.is_some_and(|age| age > health_impact::SENIOR_AGE) {
            if product.value(NutrientField::Sodium) < health_impact::LOW_SODIUM_MG {
                score += health_impact::SENIOR_BONUS;
            }
            if product.value(NutrientField::Fiber) > health_impact::HIGH_FIBER_G {
                score += health_impact::SENIOR_BONUS;
            }
        }

        if profile.is_female() {
            let (_, ingredients) = product.searchable_text();
            if self
                .config
                .catalog
                .iron_calcium_keywords
                .iter()
                .any(|k| ingredients.contains(k.as_str()))
            {
                score += health_impact::FORTIFICATION_BONUS;
            }
        }

        score.clamp(0.0, 1.0)
    }
}

/// Mifflin-St Jeor basal metabolic rate (kcal/day), never negative
///
/// Missing values default to a 30-year-old, 170 cm, 70 kg male.
#[must_use]
pub fn basal_metabolic_rate(profile: &UserProfile) -> f64 {
    let age = profile
        .age
        .filter(|a| *a != 0.0)
        .unwrap_or(profile_defaults::AGE_YEARS);
    let height = profile
        .height_cm
        .filter(|h| *h != 0.0)
        .unwrap_or(profile_defaults::HEIGHT_CM);
    let weight = profile
        .weight_kg
        .filter(|w| *w != 0.0)
        .unwrap_or(profile_defaults::WEIGHT_KG);

    let constant = match profile.gender.unwrap_or(Gender::Male) {
        Gender::Male => mifflin_st_jeor::MALE_CONSTANT,
        Gender::Female | Gender::Other => mifflin_st_jeor::FEMALE_CONSTANT,
    };

    let bmr = mifflin_st_jeor::AGE_COEF.mul_add(
        age,
        mifflin_st_jeor::HEIGHT_COEF.mul_add(
            height,
            mifflin_st_jeor::WEIGHT_COEF.mul_add(weight, constant),
        ),
    );
    bmr.max(0.0)
}
