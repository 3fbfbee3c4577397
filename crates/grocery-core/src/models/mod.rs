// ABOUTME: Domain models for products, users, goals, and allergens
// ABOUTME: Re-exports the model types at a single path
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Grocery Guardian Contributors

/// Product and nutrient field models
pub mod product;

/// User profile, goal, and allergen models
pub mod user;

pub use product::{NutrientField, Product};
pub use user::{
    ActivityLevel, AllergenSeverity, Gender, NutritionGoal, PresenceType, UserAllergen,
    UserProfile,
};
