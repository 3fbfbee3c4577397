// ABOUTME: Goal-to-weights strategy tables for nutrition-based candidate scoring
// ABOUTME: Signed weights per nutrient or named bonus, one table per nutrition goal
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Grocery Guardian Contributors

//! Nutrition Strategy Tables
//!
//! Each [`NutritionGoal`] owns a [`StrategyWeights`] table. A positive weight
//! favours higher values of its factor, a negative weight penalises them.
//! The typed lookup is total over the goal enum; the name-based lookup
//! returns `None` for unknown goal names.

use super::error::ConfigError;
use grocery_core::models::{NutrientField, NutritionGoal};
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::fmt;

/// A weighted factor inside a strategy table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StrategyFactor {
    /// A raw per-100g nutrient value
    Nutrient(NutrientField),
    /// Bonus for high dietary fibre
    FiberBonus,
    /// Bonus for complete (BCAA-rich) protein sources
    BcaaBonus,
    /// Macro balance against the ideal protein/carb/fat split
    BalanceScore,
    /// Number of distinct nutrients reported
    VarietyScore,
    /// Natural versus additive ingredient keywords
    NaturalBonus,
    /// Protein plus fibre per calorie
    NutrientDensity,
}

impl StrategyFactor {
    /// Table key for this factor
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Nutrient(field) => field.key(),
            Self::FiberBonus => "fiber_bonus",
            Self::BcaaBonus => "bcaa_bonus",
            Self::BalanceScore => "balance_score",
            Self::VarietyScore => "variety_score",
            Self::NaturalBonus => "natural_bonus",
            Self::NutrientDensity => "nutrient_density",
        }
    }
}

impl fmt::Display for StrategyFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Signed weights over nutrient fields and bonuses, in declaration order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StrategyWeights {
    entries: Vec<(StrategyFactor, f64)>,
}

impl StrategyWeights {
    /// Build a table from `(factor, weight)` pairs; later duplicates win
    #[must_use]
    pub fn new(entries: impl IntoIterator<Item = (StrategyFactor, f64)>) -> Self {
        let mut weights = Self::default();
        for (factor, weight) in entries {
            weights.set(factor, weight);
        }
        weights
    }

    /// Insert or replace a weight
    pub fn set(&mut self, factor: StrategyFactor, weight: f64) {
        if let Some(entry) = self.entries.iter_mut().find(|(f, _)| *f == factor) {
            entry.1 = weight;
        } else {
            self.entries.push((factor, weight));
        }
    }

    /// Weight for `factor`, if the table defines one
    #[must_use]
    pub fn get(&self, factor: StrategyFactor) -> Option<f64> {
        self.entries
            .iter()
            .find_map(|(f, w)| (*f == factor).then_some(*w))
    }

    /// Weight for a nutrient field, if defined
    #[must_use]
    pub fn nutrient(&self, field: NutrientField) -> Option<f64> {
        self.get(StrategyFactor::Nutrient(field))
    }

    /// Weight for `factor`, or `fallback` when the table omits it
    #[must_use]
    pub fn weight_or(&self, factor: StrategyFactor, fallback: f64) -> f64 {
        self.get(factor).unwrap_or(fallback)
    }

    /// Weight looked up by table key (`"fat_100g"`, `"fiber_bonus"`, ...)
    #[must_use]
    pub fn by_key(&self, key: &str) -> Option<f64> {
        self.entries
            .iter()
            .find_map(|(f, w)| (f.key() == key).then_some(*w))
    }

    /// Iterate `(factor, weight)` pairs in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (StrategyFactor, f64)> + '_ {
        self.entries.iter().copied()
    }

    /// Number of weighted factors
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn validate(&self, goal: NutritionGoal) -> Result<(), ConfigError> {
        if let Some((factor, _)) = self.entries.iter().find(|(_, w)| !w.is_finite()) {
            return Err(ConfigError::InvalidWeights(format!(
                "{goal} weight for {factor} must be finite"
            )));
        }
        Ok(())
    }
}

impl Serialize for StrategyWeights {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (factor, weight) in &self.entries {
            map.serialize_entry(factor.key(), weight)?;
        }
        map.end()
    }
}

/// Strategy tables for every nutrition goal
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct NutritionStrategies {
    /// Low energy, fat, and sugar; moderate protein; fibre bonus
    pub lose_weight: StrategyWeights,
    /// High protein with sufficient energy; complete-protein bonus
    pub gain_muscle: StrategyWeights,
    /// Balance, variety, and natural ingredients
    pub maintain: StrategyWeights,
    /// Nutrient density, natural ingredients, and balance
    pub general_health: StrategyWeights,
}

impl NutritionStrategies {
    /// Weights for `goal`
    #[must_use]
    pub const fn weights_for(&self, goal: NutritionGoal) -> &StrategyWeights {
        match goal {
            NutritionGoal::LoseWeight => &self.lose_weight,
            NutritionGoal::GainMuscle => &self.gain_muscle,
            NutritionGoal::Maintain => &self.maintain,
            NutritionGoal::GeneralHealth => &self.general_health,
        }
    }

    /// Weights for a goal given by wire name; `None` for unknown names
    #[must_use]
    pub fn weights_for_name(&self, goal: &str) -> Option<&StrategyWeights> {
        goal.parse::<NutritionGoal>()
            .ok()
            .map(|goal| self.weights_for(goal))
    }

    /// Mutable weights for `goal`
    pub fn weights_for_mut(&mut self, goal: NutritionGoal) -> &mut StrategyWeights {
        match goal {
            NutritionGoal::LoseWeight => &mut self.lose_weight,
            NutritionGoal::GainMuscle => &mut self.gain_muscle,
            NutritionGoal::Maintain => &mut self.maintain,
            NutritionGoal::GeneralHealth => &mut self.general_health,
        }
    }

    /// Validate every table
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidWeights` if any weight is not finite
    pub fn validate(&self) -> Result<(), ConfigError> {
        for goal in NutritionGoal::ALL {
            self.weights_for(goal).validate(goal)?;
        }
        Ok(())
    }
}

impl Default for NutritionStrategies {
    fn default() -> Self {
        use StrategyFactor::{
            BalanceScore, BcaaBonus, FiberBonus, NaturalBonus, Nutrient, NutrientDensity,
            VarietyScore,
        };

        Self {
            lose_weight: StrategyWeights::new([
                (Nutrient(NutrientField::EnergyKcal), -0.4),
                (Nutrient(NutrientField::Fat), -0.3),
                (Nutrient(NutrientField::Sugars), -0.3),
                (Nutrient(NutrientField::Proteins), 0.2),
                (FiberBonus, 0.3),
            ]),
            gain_muscle: StrategyWeights::new([
                (Nutrient(NutrientField::Proteins), 0.5),
                (Nutrient(NutrientField::Carbohydrates), 0.2),
                (Nutrient(NutrientField::EnergyKcal), 0.3),
                (Nutrient(NutrientField::Fat), 0.1),
                (BcaaBonus, 0.4),
            ]),
            maintain: StrategyWeights::new([
                (BalanceScore, 0.4),
                (VarietyScore, 0.3),
                (NaturalBonus, 0.3),
            ]),
            general_health: StrategyWeights::new([
                (NutrientDensity, 0.4),
                (NaturalBonus, 0.3),
                (BalanceScore, 0.3),
            ]),
        }
    }
}
