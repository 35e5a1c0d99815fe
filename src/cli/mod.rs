// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the fuzzqa command-line interface.
//!
//! Two subcommands: `search` to rank a JSON corpus against a query, and
//! `score` to see how the similarity metric rates two strings. Search flags
//! override values from an optional JSON config file.

pub mod display;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "fuzzqa",
    about = "Fuzzy FAQ search with token-set similarity ranking",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search a JSON corpus of FAQ records
    Search {
        /// Path to a JSON array of FAQ records
        corpus: String,

        /// Search query
        query: String,

        /// Keyspace tag echoed in the response
        #[arg(short, long, default_value = "default")]
        keyspace: String,

        /// Page to return (1-based)
        #[arg(short, long, default_value = "1")]
        page: usize,

        /// Results per page [default: from config, else 30]
        #[arg(long)]
        page_size: Option<usize>,

        /// Weight of title similarity [default: from config, else 0.6]
        #[arg(long)]
        title_weight: Option<f64>,

        /// Weight of description similarity [default: from config, else 0.4]
        #[arg(long)]
        description_weight: Option<f64>,

        /// Minimum composite score to include
        #[arg(short, long)]
        threshold: Option<f64>,

        /// Bonus when the query appears verbatim in title or description
        #[arg(long)]
        boost: Option<f64>,

        /// Maximum ranked results kept before pagination
        #[arg(long)]
        max_results: Option<usize>,

        /// JSON config file with default search settings
        #[arg(short, long)]
        config: Option<String>,

        /// Print the raw JSON response instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Print the token-set similarity of two strings
    Score {
        /// First string
        a: String,

        /// Second string
        b: String,
    },
}
