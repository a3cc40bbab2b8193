// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared helpers for date formatting.

use chrono::Utc;

/// Today's UTC calendar date as an ISO 8601 string ("YYYY-MM-DD").
pub fn today_utc_date() -> String {
    Utc::now().date_naive().to_string()
}
