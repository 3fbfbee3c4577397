// ABOUTME: Input helpers for grocery-cli
// ABOUTME: Reads products, candidate lists, profiles, and receipts from JSON files
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Grocery Guardian Contributors

use grocery_guardian::coercion::Record;
use grocery_guardian::errors::{AppError, AppResult};
use grocery_guardian::models::{Product, UserProfile};
use serde_json::Value;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Parse a JSON file
pub fn read_json(path: &Path) -> AppResult<Value> {
    let raw = fs::read_to_string(path).map_err(|e| {
        AppError::storage(format!("Cannot read {}", path.display())).with_source(e)
    })?;
    let value = serde_json::from_str(&raw).map_err(|e| {
        AppError::invalid_input(format!("{} is not valid JSON", path.display())).with_source(e)
    })?;
    debug!(path = %path.display(), "Loaded JSON input");
    Ok(value)
}

fn read_object(path: &Path) -> AppResult<Record> {
    match read_json(path)? {
        Value::Object(record) => Ok(record),
        _ => Err(AppError::invalid_input(format!(
            "{} must contain a JSON object",
            path.display()
        ))),
    }
}

/// Read a list of records; non-object entries are skipped
pub fn read_records(path: &Path) -> AppResult<Vec<Record>> {
    match read_json(path)? {
        Value::Array(items) => Ok(items
            .into_iter()
            .filter_map(|item| match item {
                Value::Object(record) => Some(record),
                _ => None,
            })
            .collect()),
        _ => Err(AppError::invalid_input(format!(
            "{} must contain a JSON array",
            path.display()
        ))),
    }
}

/// Read one product
pub fn read_product(path: &Path) -> AppResult<Product> {
    Ok(Product::from_record(&read_object(path)?))
}

/// Read a list of products
pub fn read_products(path: &Path) -> AppResult<Vec<Product>> {
    Ok(read_records(path)?
        .iter()
        .map(Product::from_record)
        .collect())
}

/// Read a profile, or an empty one when no path is given
pub fn read_profile(path: Option<&Path>) -> AppResult<UserProfile> {
    path.map_or_else(
        || Ok(UserProfile::default()),
        |p| Ok(UserProfile::from_record(&read_object(p)?)),
    )
}
