// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Page slicing: the one collaborator the engine calls out to.
//!
//! A slicer knows nothing about scores. It gets an already-ordered slice and
//! returns the window for one page, borrowing from the input.

/// Extracts one page from an ordered sequence.
///
/// Implementations must be side-effect free. `page` is 1-based and both
/// arguments are validated as non-zero before the engine calls in.
pub trait PageSlicer {
    fn slice<'a, T>(&self, items: &'a [T], page: usize, page_size: usize) -> &'a [T];
}

/// `items[(page - 1) * page_size ..][..page_size]`, or empty past the end.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OffsetSlicer;

impl PageSlicer for OffsetSlicer {
    fn slice<'a, T>(&self, items: &'a [T], page: usize, page_size: usize) -> &'a [T] {
        let start = page.saturating_sub(1).saturating_mul(page_size);
        if start >= items.len() {
            return &[];
        }
        let end = start.saturating_add(page_size).min(items.len());
        &items[start..end]
    }
}

/// Number of pages needed for `count` items: `ceil(count / page_size)`.
pub fn total_pages(count: usize, page_size: usize) -> usize {
    if page_size == 0 {
        0
    } else {
        count.div_ceil(page_size)
    }
}
