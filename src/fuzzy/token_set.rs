// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Token-set ratio: similarity that shrugs off word order and extra words.
//!
//! Both strings become sorted sets of unique tokens. The shared tokens form a
//! common prefix, and each side's leftovers are appended to it:
//!
//! ```text
//! a = "reset password"               b = "how to reset my password?"
//! S_i  = "reset"
//! S_ia = "reset password"
//! S_ib = "reset how my password? to"
//! score = max(ratio(S_i, S_ia), ratio(S_i, S_ib), ratio(S_ia, S_ib))
//! ```
//!
//! When one side's tokens are a subset of the other's, `S_i` equals that side's
//! string and the score is 100. When nothing is shared, `S_i` is empty and only
//! `ratio(S_ia, S_ib)` is considered.

use crate::fuzzy::ratio;
use crate::utils::token_set;
use std::cmp::Ordering;

/// The three comparison strings a token-set ratio is computed over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenSetStrings {
    /// Shared tokens.
    pub intersection: String,
    /// Shared tokens followed by tokens only in `a`.
    pub with_a: String,
    /// Shared tokens followed by tokens only in `b`.
    pub with_b: String,
}

impl TokenSetStrings {
    /// Split `a` and `b` into their sorted unique tokens and build the
    /// comparison strings. Inputs are expected to be normalized already.
    pub fn new(a: &str, b: &str) -> Self {
        let tokens_a = token_set(a);
        let tokens_b = token_set(b);

        let mut shared = Vec::new();
        let mut only_a = Vec::new();
        let mut only_b = Vec::new();

        // Both sides are sorted and unique, so one merge pass partitions them.
        let (mut i, mut j) = (0, 0);
        while i < tokens_a.len() && j < tokens_b.len() {
            match tokens_a[i].cmp(tokens_b[j]) {
                Ordering::Equal => {
                    shared.push(tokens_a[i]);
                    i += 1;
                    j += 1;
                }
                Ordering::Less => {
                    only_a.push(tokens_a[i]);
                    i += 1;
                }
                Ordering::Greater => {
                    only_b.push(tokens_b[j]);
                    j += 1;
                }
            }
        }
        only_a.extend_from_slice(&tokens_a[i..]);
        only_b.extend_from_slice(&tokens_b[j..]);

        Self {
            intersection: shared.join(" "),
            with_a: join_pair(&shared, &only_a),
            with_b: join_pair(&shared, &only_b),
        }
    }
}

fn join_pair(head: &[&str], tail: &[&str]) -> String {
    head.iter().chain(tail).copied().collect::<Vec<_>>().join(" ")
}

/// Token-set similarity of two normalized strings, in `[0, 100]`.
///
/// Symmetric and deterministic. If either side has no tokens the score is 0,
/// so two blank fields never count as a perfect match.
pub fn token_set_ratio(a: &str, b: &str) -> f64 {
    if a.split_whitespace().next().is_none() || b.split_whitespace().next().is_none() {
        return 0.0;
    }

    let strings = TokenSetStrings::new(a, b);
    let mut best = ratio(&strings.with_a, &strings.with_b);

    if !strings.intersection.is_empty() {
        best = best
            .max(ratio(&strings.intersection, &strings.with_a))
            .max(ratio(&strings.intersection, &strings.with_b));
    }

    best
}
