// ABOUTME: Output helpers for grocery-cli
// ABOUTME: Pretty-prints command results as JSON on stdout
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Grocery Guardian Contributors

use grocery_guardian::errors::AppResult;
use serde_json::Value;

/// Print `value` as pretty JSON on stdout
pub fn print_json(value: &Value) -> AppResult<()> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}
