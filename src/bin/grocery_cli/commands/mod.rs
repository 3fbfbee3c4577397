// ABOUTME: Command modules for grocery-cli
// ABOUTME: Single-product scoring commands and multi-product ranking commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Grocery Guardian Contributors

pub mod basket;
pub mod product;
