// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search: where the scores become a response.
//!
//! `engine` drives the pipeline. `paginate` cuts pages out of the ranking and
//! `assemble` turns a page into the envelope callers see.

pub mod assemble;
pub mod engine;
pub mod paginate;

pub use engine::{search, FaqSearcher};
pub use paginate::{total_pages, OffsetSlicer, PageSlicer};
