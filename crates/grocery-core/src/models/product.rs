// ABOUTME: Product model with per-100g nutrient fields keyed by barcode
// ABOUTME: NutrientField enumerates the scored nutrients and their record keys
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Grocery Guardian Contributors

use crate::coercion::{optional_f64, optional_string, Record};
use crate::constants::record_fields;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Per-100g nutrient fields carried by a [`Product`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NutrientField {
    /// Energy (kcal/100g)
    EnergyKcal,
    /// Protein (g/100g)
    Proteins,
    /// Total fat (g/100g)
    Fat,
    /// Saturated fat (g/100g)
    SaturatedFat,
    /// Carbohydrates (g/100g)
    Carbohydrates,
    /// Sugars (g/100g)
    Sugars,
    /// Dietary fibre (g/100g)
    Fiber,
    /// Sodium (mg/100g)
    Sodium,
}

impl NutrientField {
    /// Every nutrient field, in record order
    pub const ALL: [Self; 8] = [
        Self::EnergyKcal,
        Self::Proteins,
        Self::Fat,
        Self::SaturatedFat,
        Self::Carbohydrates,
        Self::Sugars,
        Self::Fiber,
        Self::Sodium,
    ];

    /// The four fields every usable record must carry
    pub const BASIC: [Self; 4] = [
        Self::EnergyKcal,
        Self::Proteins,
        Self::Fat,
        Self::Carbohydrates,
    ];

    /// Record key for this field
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::EnergyKcal => "energy_kcal_100g",
            Self::Proteins => "proteins_100g",
            Self::Fat => "fat_100g",
            Self::SaturatedFat => "saturated_fat_100g",
            Self::Carbohydrates => "carbohydrates_100g",
            Self::Sugars => "sugars_100g",
            Self::Fiber => "fiber_100g",
            Self::Sodium => "sodium_100g",
        }
    }

    /// Human-readable name
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::EnergyKcal => "Calories",
            Self::Proteins => "Protein",
            Self::Fat => "Fat",
            Self::SaturatedFat => "Saturated fat",
            Self::Carbohydrates => "Carbs",
            Self::Sugars => "Sugar",
            Self::Fiber => "Fiber",
            Self::Sodium => "Sodium",
        }
    }

    /// Measurement unit per 100g
    #[must_use]
    pub const fn unit(self) -> &'static str {
        match self {
            Self::EnergyKcal => "kcal",
            Self::Sodium => "mg",
            _ => "g",
        }
    }

    /// Resolve a record key back into a field
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.key() == key)
    }
}

impl fmt::Display for NutrientField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// A grocery product as seen by the scoring engine
///
/// Nutrient values are `None` when the source record lacked the field (or
/// held `null`) and `Some(finite)` otherwise; malformed values become
/// `Some(0.0)` so presence checks still see them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Record")]
pub struct Product {
    /// Unique product key
    pub barcode: String,
    /// Display name
    pub product_name: String,
    /// Brand name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    /// Category label, compared by exact string match
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Energy (kcal/100g)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub energy_kcal_100g: Option<f64>,
    /// Protein (g/100g)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proteins_100g: Option<f64>,
    /// Fat (g/100g)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fat_100g: Option<f64>,
    /// Saturated fat (g/100g)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub saturated_fat_100g: Option<f64>,
    /// Carbohydrates (g/100g)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub carbohydrates_100g: Option<f64>,
    /// Sugars (g/100g)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sugars_100g: Option<f64>,
    /// Fibre (g/100g)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fiber_100g: Option<f64>,
    /// Sodium (mg/100g)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sodium_100g: Option<f64>,
    /// Free-text ingredient list
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ingredients: Option<String>,
    /// Free-text allergen declaration
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allergens: Option<String>,
}

impl Product {
    /// Build a product from a loosely-typed record, coercing every field
    #[must_use]
    pub fn from_record(record: &Record) -> Self {
        let product_name = optional_string(record, record_fields::PRODUCT_NAME)
            .or_else(|| optional_string(record, record_fields::NAME))
            .unwrap_or_default();

        Self {
            barcode: optional_string(record, record_fields::BARCODE).unwrap_or_default(),
            product_name,
            brand: optional_string(record, record_fields::BRAND),
            category: exact_string(record.get(record_fields::CATEGORY)),
            energy_kcal_100g: optional_f64(record, NutrientField::EnergyKcal.key()),
            proteins_100g: optional_f64(record, NutrientField::Proteins.key()),
            fat_100g: optional_f64(record, NutrientField::Fat.key()),
            saturated_fat_100g: optional_f64(record, NutrientField::SaturatedFat.key()),
            carbohydrates_100g: optional_f64(record, NutrientField::Carbohydrates.key()),
            sugars_100g: optional_f64(record, NutrientField::Sugars.key()),
            fiber_100g: optional_f64(record, NutrientField::Fiber.key()),
            sodium_100g: optional_f64(record, NutrientField::Sodium.key()),
            ingredients: optional_string(record, record_fields::INGREDIENTS),
            allergens: optional_string(record, record_fields::ALLERGENS),
        }
    }

    /// Build a product from any JSON value; non-objects yield an empty product
    #[must_use]
    pub fn from_value(value: &Value) -> Self {
        value
            .as_object()
            .map_or_else(Self::default, Self::from_record)
    }

    /// Raw nutrient value, `None` when absent from the source record
    #[must_use]
    pub const fn nutrient(&self, field: NutrientField) -> Option<f64> {
        match field {
            NutrientField::EnergyKcal => self.energy_kcal_100g,
            NutrientField::Proteins => self.proteins_100g,
            NutrientField::Fat => self.fat_100g,
            NutrientField::SaturatedFat => self.saturated_fat_100g,
            NutrientField::Carbohydrates => self.carbohydrates_100g,
            NutrientField::Sugars => self.sugars_100g,
            NutrientField::Fiber => self.fiber_100g,
            NutrientField::Sodium => self.sodium_100g,
        }
    }

    /// Nutrient value for arithmetic, `0.0` when absent
    #[must_use]
    pub fn value(&self, field: NutrientField) -> f64 {
        self.nutrient(field).unwrap_or(0.0)
    }

    /// Whether the source record carried `field`
    #[must_use]
    pub const fn has(&self, field: NutrientField) -> bool {
        self.nutrient(field).is_some()
    }

    /// Set a nutrient value, discarding non-finite input
    pub fn set_nutrient(&mut self, field: NutrientField, value: Option<f64>) {
        let value = value.map(|v| if v.is_finite() { v } else { 0.0 });
        match field {
            NutrientField::EnergyKcal => self.energy_kcal_100g = value,
            NutrientField::Proteins => self.proteins_100g = value,
            NutrientField::Fat => self.fat_100g = value,
            NutrientField::SaturatedFat => self.saturated_fat_100g = value,
            NutrientField::Carbohydrates => self.carbohydrates_100g = value,
            NutrientField::Sugars => self.sugars_100g = value,
            NutrientField::Fiber => self.fiber_100g = value,
            NutrientField::Sodium => self.sodium_100g = value,
        }
    }

    /// Builder-style nutrient setter
    #[must_use]
    pub fn with_nutrient(mut self, field: NutrientField, value: f64) -> Self {
        self.set_nutrient(field, Some(value));
        self
    }

    /// Lower-cased name and ingredient text, used for keyword heuristics
    #[must_use]
    pub fn searchable_text(&self) -> (String, String) {
        (
            self.product_name.to_lowercase(),
            self.ingredients.as_deref().unwrap_or_default().to_lowercase(),
        )
    }
}

impl From<Record> for Product {
    fn from(record: Record) -> Self {
        Self::from_record(&record)
    }
}

/// Categories compare by exact string, so only non-string values are coerced
fn exact_string(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}
