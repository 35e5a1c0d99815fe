//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical fixtures to avoid duplication.

#![doc(hidden)]

use chrono::{DateTime, TimeZone, Utc};

use crate::types::FaqRecord;

/// Create a record with an integer id, title and description.
pub fn make_record(id: i64, title: &str, description: &str) -> FaqRecord {
    FaqRecord::new(id, title, description)
}

/// Midnight UTC on the given day of January 2023.
pub fn at_day(day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2023, 1, day, 0, 0, 0)
        .single()
        .expect("valid January 2023 date")
}

/// The five-entry support FAQ used throughout the tests.
///
/// Record `n` (1-based id) was last updated on January `n`, 2023.
pub fn sample_faq() -> Vec<FaqRecord> {
    let rows = [
        (
            "General",
            "How to reset my password?",
            "Follow these steps to reset your password.",
        ),
        (
            "Billing",
            "How to update billing information?",
            "You can update your billing information in the account settings.",
        ),
        (
            "Technical",
            "Troubleshooting login issues",
            "If you are unable to log in, try resetting your password or contact support.",
        ),
        (
            "Account",
            "How to delete my account?",
            "To delete your account, go to settings and follow the instructions.",
        ),
        (
            "General",
            "What is the refund policy?",
            "Our refund policy allows refunds within 30 days of purchase.",
        ),
    ];

    rows.iter()
        .enumerate()
        .map(|(i, (category, title, description))| {
            let mut record = make_record(i as i64 + 1, title, description)
                .with_category(category)
                .with_updated(at_day(i as u32 + 1));
            record.comment = Some(String::new());
            record.updated_by = Some("admin".to_string());
            record
        })
        .collect()
}
