// ABOUTME: Helper modules for grocery-cli
// ABOUTME: JSON input loading and output printing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Grocery Guardian Contributors

pub mod input;
pub mod output;
