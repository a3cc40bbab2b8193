// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Court review model.

use serde::{Deserialize, Serialize};

/// A submitted (or seeded) review for a court.
///
/// Reviews are append-only: created once, never edited or deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Review {
    /// Process-wide monotonic review ID
    pub id: u64,
    /// Author label (submissions through the API are labeled "You")
    pub author: String,
    /// Star rating, 1-5
    pub rating: u8,
    /// Review body, trimmed
    pub text: String,
    /// Submission date (ISO 8601 calendar date, "YYYY-MM-DD")
    pub date: String,
    /// Whether the author would recommend the court to friends
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recommend: Option<bool>,
}

/// Incoming review fields, before validation.
#[derive(Debug, Clone)]
pub struct ReviewDraft {
    pub rating: u8,
    pub text: String,
    pub recommend: Option<bool>,
}

/// Word label for a star rating, as shown in the compose UI.
pub fn rating_label(rating: u8) -> &'static str {
    match rating {
        1 => "Poor",
        2 => "Fair",
        3 => "Good",
        4 => "Very Good",
        _ => "Excellent",
    }
}
