// ABOUTME: User profile, nutrition goal, and allergen models
// ABOUTME: Closed enumerations replace free-form goal and severity strings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Grocery Guardian Contributors

use crate::coercion::{field_or, optional_f64, optional_string, Record};
use crate::errors::AppError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// User-selected dietary objective driving candidate ranking weights
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum NutritionGoal {
    /// Caloric deficit: low energy, fat, and sugar
    LoseWeight,
    /// Caloric surplus: high protein
    GainMuscle,
    /// Balanced everyday eating
    #[default]
    Maintain,
    /// Nutrient-dense, minimally processed food
    GeneralHealth,
}

impl NutritionGoal {
    /// Every goal
    pub const ALL: [Self; 4] = [
        Self::LoseWeight,
        Self::GainMuscle,
        Self::Maintain,
        Self::GeneralHealth,
    ];

    /// Wire name of this goal
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::LoseWeight => "lose_weight",
            Self::GainMuscle => "gain_muscle",
            Self::Maintain => "maintain",
            Self::GeneralHealth => "general_health",
        }
    }
}

impl fmt::Display for NutritionGoal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NutritionGoal {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|goal| goal.as_str() == wanted)
            .ok_or_else(|| {
                AppError::invalid_input(format!(
                    "Unknown nutrition goal '{wanted}' (expected one of lose_weight, gain_muscle, maintain, general_health)"
                ))
            })
    }
}

/// Gender as used by the Mifflin-St Jeor equation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    /// Male (+5 kcal constant)
    Male,
    /// Female (-161 kcal constant)
    Female,
    /// Unspecified; scored with the female constant
    Other,
}

impl Gender {
    /// Parse leniently; anything unrecognised is `Other`
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" => Self::Male,
            "female" | "f" => Self::Female,
            _ => Self::Other,
        }
    }
}

/// Self-reported activity level
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Little or no exercise
    Sedentary,
    /// 1-3 days/week
    Light,
    /// 3-5 days/week
    #[default]
    Moderate,
    /// 6-7 days/week
    Active,
    /// Hard training twice a day
    VeryActive,
}

impl ActivityLevel {
    /// Parse leniently; unknown values fall back to `Moderate`
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "sedentary" => Self::Sedentary,
            "light" => Self::Light,
            "active" => Self::Active,
            "very_active" => Self::VeryActive,
            _ => Self::Moderate,
        }
    }

    /// Whether this level tolerates extra carbohydrates
    #[must_use]
    pub const fn is_high(self) -> bool {
        matches!(self, Self::Active | Self::VeryActive)
    }
}

/// Reported severity of a user's allergy
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AllergenSeverity {
    /// Mild reaction
    Mild,
    /// Moderate reaction
    #[default]
    Moderate,
    /// Severe reaction
    Severe,
}

impl AllergenSeverity {
    /// Parse leniently; unknown values are treated as `Moderate`
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "mild" => Self::Mild,
            "severe" => Self::Severe,
            _ => Self::Moderate,
        }
    }
}

/// How strongly an allergen is associated with a product
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PresenceType {
    /// Declared ingredient
    Contains,
    /// Precautionary labelling
    MayContain,
    /// Trace amounts
    Traces,
}

/// An allergen declared by the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserAllergen {
    /// Allergen name, matched case-insensitively
    pub name: String,
    /// Reaction severity
    #[serde(default)]
    pub severity: AllergenSeverity,
    /// Presence tag carried through from the import layer
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub presence_type: Option<PresenceType>,
}

impl UserAllergen {
    /// Allergen with the default (moderate) severity
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            severity: AllergenSeverity::default(),
            presence_type: None,
        }
    }

    /// Set the severity
    #[must_use]
    pub const fn with_severity(mut self, severity: AllergenSeverity) -> Self {
        self.severity = severity;
        self
    }
}

/// Physiological profile and targets of a user
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Data-layer user identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,
    /// Age in years
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<f64>,
    /// Gender
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    /// Height (cm)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height_cm: Option<f64>,
    /// Weight (kg)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight_kg: Option<f64>,
    /// Activity level
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activity_level: Option<ActivityLevel>,
    /// Nutrition goal
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nutrition_goal: Option<NutritionGoal>,
    /// Daily calorie target (kcal)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub daily_calories_target: Option<f64>,
    /// Daily protein target (g)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub daily_protein_target: Option<f64>,
    /// Daily carbohydrate target (g)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub daily_carb_target: Option<f64>,
    /// Daily fat target (g)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub daily_fat_target: Option<f64>,
    /// Declared allergens
    #[serde(default)]
    pub allergens: Vec<UserAllergen>,
}

impl UserProfile {
    /// Build a profile from a loosely-typed record
    ///
    /// Unknown goal names are dropped, so [`Self::goal`] falls back to
    /// `maintain` for them.
    #[must_use]
    pub fn from_record(record: &Record) -> Self {
        let allergens = record
            .get("allergens")
            .and_then(Value::as_array)
            .map(|items| {
                items
                    .iter()
                    .filter_map(|item| match item {
                        Value::String(name) => Some(UserAllergen::new(name.trim())),
                        Value::Object(obj) => {
                            let name = optional_string(obj, "name")?;
                            let severity = optional_string(obj, "severity_level")
                                .or_else(|| optional_string(obj, "severity"))
                                .map(|s| AllergenSeverity::from_str_lossy(&s))
                                .unwrap_or_default();
                            Some(UserAllergen::new(name).with_severity(severity))
                        }
                        _ => None,
                    })
                    .collect()
            })
            .unwrap_or_default();

        Self {
            user_id: record
                .contains_key("user_id")
                .then(|| field_or(record, "user_id", 0_i64)),
            age: optional_f64(record, "age"),
            gender: optional_string(record, "gender").map(|g| Gender::from_str_lossy(&g)),
            height_cm: optional_f64(record, "height_cm"),
            weight_kg: optional_f64(record, "weight_kg"),
            activity_level: optional_string(record, "activity_level")
                .map(|a| ActivityLevel::from_str_lossy(&a)),
            nutrition_goal: optional_string(record, "nutrition_goal")
                .and_then(|g| g.parse().ok()),
            daily_calories_target: optional_f64(record, "daily_calories_target"),
            daily_protein_target: optional_f64(record, "daily_protein_target"),
            daily_carb_target: optional_f64(record, "daily_carb_target"),
            daily_fat_target: optional_f64(record, "daily_fat_target"),
            allergens,
        }
    }

    /// Nutrition goal, defaulting to `maintain`
    #[must_use]
    pub fn goal(&self) -> NutritionGoal {
        self.nutrition_goal.unwrap_or_default()
    }

    /// Whether the user is female
    #[must_use]
    pub fn is_female(&self) -> bool {
        self.gender == Some(Gender::Female)
    }
}
