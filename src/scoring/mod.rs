// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how FAQ entries get their numbers and their order.
//!
//! `core` turns a record into a `ScoreBreakdown`; `ranking` filters, orders and
//! caps the scored corpus. Both are pure: the corpus is borrowed, never written.

mod core;
pub mod ranking;

pub use self::core::*;
pub use ranking::{compare_ranked, rank, RankedResult, Ranking};
