// ABOUTME: Plausibility checks for user profile measurements and daily targets
// ABOUTME: Absent fields are skipped; present ones must fall inside the configured ranges
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Grocery Guardian Contributors

use crate::config::{UserMetric, UserValidationRanges};
use grocery_core::models::UserProfile;
use serde::Serialize;
use std::collections::BTreeMap;

/// Per-field validity of a user profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserValidation {
    /// Validity of each field the profile carried
    pub flags: BTreeMap<UserMetric, bool>,
    /// Every present field is in range
    pub overall_valid: bool,
}

impl UserValidation {
    /// Flag for `metric`, `None` when the profile did not carry it
    #[must_use]
    pub fn flag(&self, metric: UserMetric) -> Option<bool> {
        self.flags.get(&metric).copied()
    }
}

/// Value of `metric` on `profile`
#[must_use]
pub const fn metric_value(profile: &UserProfile, metric: UserMetric) -> Option<f64> {
    match metric {
        UserMetric::Age => profile.age,
        UserMetric::HeightCm => profile.height_cm,
        UserMetric::WeightKg => profile.weight_kg,
        UserMetric::DailyCaloriesTarget => profile.daily_calories_target,
        UserMetric::DailyProteinTarget => profile.daily_protein_target,
        UserMetric::DailyCarbTarget => profile.daily_carb_target,
        UserMetric::DailyFatTarget => profile.daily_fat_target,
    }
}

/// Check every present profile field against `ranges`
#[must_use]
pub fn validate_user(profile: &UserProfile, ranges: &UserValidationRanges) -> UserValidation {
    let flags: BTreeMap<UserMetric, bool> = UserMetric::ALL
        .into_iter()
        .filter_map(|metric| {
            metric_value(profile, metric)
                .map(|value| (metric, ranges.range_for(metric).contains(value)))
        })
        .collect();
    let overall_valid = flags.values().all(|&ok| ok);

    UserValidation {
        flags,
        overall_valid,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_profile_is_valid() {
        let result = validate_user(&UserProfile::default(), &UserValidationRanges::default());
        assert!(result.flags.is_empty());
        assert!(result.overall_valid);
    }

    #[test]
    fn test_out_of_range_age_fails() {
        let profile = UserProfile {
            age: Some(9.0),
            weight_kg: Some(70.0),
            ..UserProfile::default()
        };
        let result = validate_user(&profile, &UserValidationRanges::default());
        assert_eq!(result.flag(UserMetric::Age), Some(false));
        assert_eq!(result.flag(UserMetric::WeightKg), Some(true));
        assert_eq!(result.flag(UserMetric::HeightCm), None);
        assert!(!result.overall_valid);
    }
}
