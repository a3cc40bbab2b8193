// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Free-text court matching.

use crate::models::Court;

/// Filter courts by a free-text query.
///
/// Matches case-insensitively against name, location, surface, and
/// amenities. An empty or all-whitespace query returns the input unchanged;
/// relative order is always preserved.
pub fn search_courts(courts: &[Court], query: &str) -> Vec<Court> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return courts.to_vec();
    }

    courts
        .iter()
        .filter(|c| c.matches(&needle))
        .cloned()
        .collect()
}
