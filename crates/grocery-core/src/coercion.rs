// ABOUTME: Lenient field extraction from loosely-typed product and user records
// ABOUTME: One generic coerce-with-default operation over f64, i64, and String targets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Grocery Guardian Contributors

//! Record coercion.
//!
//! Records arrive from the data-access layer as JSON objects whose values may
//! be numbers, numeric strings, `null`, or garbage. Coercion never fails: a
//! value that cannot be represented in the target type yields the caller's
//! default. Floats must be finite, so `NaN` and infinities also fall back.

use serde_json::{Map, Value};
use tracing::trace;

/// A loosely-typed record as produced by the data-access layer
pub type Record = Map<String, Value>;

/// Target types that a JSON value can be leniently coerced into
pub trait Coerce: Sized {
    /// Attempt the coercion, returning `None` when the value is unusable
    fn coerce(value: &Value) -> Option<Self>;
}

impl Coerce for f64 {
    fn coerce(value: &Value) -> Option<Self> {
        let parsed = match value {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse::<Self>().ok(),
            Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
            Value::Null | Value::Array(_) | Value::Object(_) => None,
        };
        parsed.filter(|v| v.is_finite())
    }
}

impl Coerce for i64 {
    fn coerce(value: &Value) -> Option<Self> {
        match value {
            Value::Number(n) => n.as_i64().or_else(|| {
                n.as_f64()
                    .filter(|v| v.is_finite())
                    .map(|v| v.trunc() as Self)
            }),
            Value::String(s) => s.trim().parse::<Self>().ok(),
            Value::Bool(b) => Some(Self::from(*b)),
            Value::Null | Value::Array(_) | Value::Object(_) => None,
        }
    }
}

impl Coerce for String {
    fn coerce(value: &Value) -> Option<Self> {
        match value {
            Value::Null => None,
            Value::String(s) => Some(s.trim().to_owned()),
            other => Some(other.to_string().trim().to_owned()),
        }
    }
}

/// Coerce an optional JSON value, substituting `default` when absent or unusable
#[must_use]
pub fn coerce_or<T: Coerce>(value: Option<&Value>, default: T) -> T {
    value.and_then(T::coerce).unwrap_or(default)
}

/// Read `field` from `record`, substituting `default` when absent or unusable
#[must_use]
pub fn field_or<T: Coerce>(record: &Record, field: &str, default: T) -> T {
    coerce_or(record.get(field), default)
}

/// Whether `field` is present in `record` with a non-null value
#[must_use]
pub fn is_present(record: &Record, field: &str) -> bool {
    record.get(field).is_some_and(|v| !v.is_null())
}

/// Read an optional float: `None` when absent or null, `Some(0.0)` when present but unusable
///
/// Keeps presence information intact for validation while still guaranteeing
/// a finite number for arithmetic.
#[must_use]
pub fn optional_f64(record: &Record, field: &str) -> Option<f64> {
    let value = record.get(field).filter(|v| !v.is_null())?;
    Some(f64::coerce(value).unwrap_or_else(|| {
        trace!(field, %value, "Unusable numeric value, reading as 0");
        0.0
    }))
}

/// Read an optional string, `None` when absent, null, or empty after trimming
#[must_use]
pub fn optional_string(record: &Record, field: &str) -> Option<String> {
    record
        .get(field)
        .and_then(String::coerce)
        .filter(|s| !s.is_empty())
}
