// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzzy matching: typo and word-order tolerance via edit distance.
//!
//! Two layers here: plain Levenshtein for character-level comparison, and the
//! token-set ratio built on top of it that ignores word order and extra words.

mod levenshtein;
mod token_set;

pub use levenshtein::*;
pub use token_set::*;
