// ABOUTME: Core types and constants for the Grocery Guardian scoring engine
// ABOUTME: Foundation crate with error handling, domain models, and record coercion
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Grocery Guardian Contributors

#![deny(unsafe_code)]

//! # Grocery Core
//!
//! Foundation crate providing shared types for the Grocery Guardian scoring
//! engine. It changes infrequently, so the main crate recompiles without it.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Record keys and physiological defaults
//! - **coercion**: Lenient extraction of typed values from JSON records
//! - **models**: `Product`, `NutrientField`, `UserProfile`, `NutritionGoal`

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Coerce-with-default extraction from loosely-typed records
pub mod coercion;

/// Core data models
pub mod models;
