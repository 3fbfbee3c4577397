// ABOUTME: Grocery CLI - command-line front end for the Grocery Guardian scoring engine
// ABOUTME: Scores, validates, and ranks products read from JSON files, printing JSON results
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Grocery Guardian Contributors
//!
//! Usage:
//! ```bash
//! # Similarity of two products
//! grocery-cli similarity cola.json diet_cola.json
//!
//! # Nutrition data validation
//! grocery-cli validate cola.json
//!
//! # Strategy weights of a goal
//! grocery-cli weights gain_muscle
//!
//! # Rank alternatives for a weight-loss user allergic to milk
//! grocery-cli rank cola.json candidates.json --goal lose_weight --allergen milk --limit 3
//!
//! # Analyse a scanned receipt
//! grocery-cli receipt receipt.json --profile me.json
//! ```

mod commands;
mod helpers;

use anyhow::Result;
use clap::{Parser, Subcommand};
use grocery_guardian::config::ScoringConfig;
use grocery_guardian::logging::LoggingConfig;
use std::path::PathBuf;
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "grocery-cli",
    about = "Grocery Guardian scoring CLI",
    long_about = "Scores grocery products, validates nutrition data, and ranks healthier alternatives. Inputs are JSON files; output is JSON on stdout."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Similarity of two products in [0, 1]
    Similarity {
        /// First product (JSON object)
        a: PathBuf,
        /// Second product (JSON object)
        b: PathBuf,
    },

    /// Nutrition data completeness and plausibility flags
    Validate {
        /// Product (JSON object)
        product: PathBuf,
    },

    /// Strategy weight table of a nutrition goal
    Weights {
        /// Goal name (lose_weight, gain_muscle, maintain, general_health)
        goal: String,
    },

    /// Rank healthier alternatives for a product
    Rank {
        /// Product being replaced (JSON object)
        original: PathBuf,

        /// Candidate products (JSON array)
        candidates: PathBuf,

        /// User profile (JSON object)
        #[arg(long)]
        profile: Option<PathBuf>,

        /// Nutrition goal, overriding the profile
        #[arg(long)]
        goal: Option<String>,

        /// Allergen to exclude (repeatable)
        #[arg(long = "allergen")]
        allergens: Vec<String>,

        /// Maximum number of alternatives
        #[arg(long)]
        limit: Option<usize>,

        /// Accept candidates from related categories
        #[arg(long)]
        relaxed: bool,
    },

    /// Whole-basket analysis of a receipt
    Receipt {
        /// Receipt lines (JSON array)
        items: PathBuf,

        /// User profile (JSON object)
        #[arg(long)]
        profile: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging.level = "debug".into();
    }
    logging.init()?;

    let config = ScoringConfig::load()?;
    debug!("Scoring configuration loaded");

    let output = match cli.command {
        Command::Similarity { a, b } => commands::product::similarity(&config, &a, &b)?,
        Command::Validate { product } => commands::product::validate(&config, &product)?,
        Command::Weights { goal } => commands::product::weights(&config, &goal)?,
        Command::Rank {
            original,
            candidates,
            profile,
            goal,
            allergens,
            limit,
            relaxed,
        } => commands::basket::rank(
            &config,
            &commands::basket::RankArgs {
                original,
                candidates,
                profile,
                goal,
                allergens,
                limit,
                relaxed,
            },
        )?,
        Command::Receipt { items, profile } => {
            commands::basket::receipt(&items, profile.as_deref())?
        }
    };

    helpers::output::print_json(&output)?;
    Ok(())
}
