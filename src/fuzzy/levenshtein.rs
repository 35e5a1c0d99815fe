// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Edit distance and the normalized similarity ratio derived from it.
//!
//! Everything counts Unicode scalar values, not bytes, so "café" and "cafe"
//! are one substitution apart rather than two.

/// Unit-cost Levenshtein distance (insert, delete, substitute).
///
/// Single-row DP, O(min(n, m)) memory. The shorter string indexes the row.
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let (long, short) = if a.len() >= b.len() { (&a, &b) } else { (&b, &a) };

    if short.is_empty() {
        return long.len();
    }

    let mut dp: Vec<usize> = (0..=short.len()).collect();
    for (i, lc) in long.iter().enumerate() {
        let mut prev = dp[0];
        dp[0] = i + 1;
        for (j, sc) in short.iter().enumerate() {
            let temp = dp[j + 1];
            let cost = usize::from(lc != sc);
            dp[j + 1] = (dp[j + 1] + 1).min(dp[j] + 1).min(prev + cost);
            prev = temp;
        }
    }

    dp[short.len()]
}

/// Normalized edit similarity in `[0, 100]`.
///
/// `100 × (1 − distance / max(1, len(x) + len(y)))`. Identical strings score
/// 100; two empty strings are identical. Two non-empty strings with nothing
/// in common still score above zero, so callers that need "no overlap means
/// zero" handle that before calling.
pub fn ratio(x: &str, y: &str) -> f64 {
    let total = x.chars().count() + y.chars().count();
    let distance = levenshtein_distance(x, y);
    let score = 100.0 * (1.0 - distance as f64 / total.max(1) as f64);
    score.clamp(0.0, 100.0)
}
