// ABOUTME: Common benchmark utilities and product fixtures for performance testing
// ABOUTME: Provides reusable catalog generators for Criterion benchmarks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Grocery Guardian Contributors

//! Common benchmark utilities and product fixtures.

pub mod fixtures;
