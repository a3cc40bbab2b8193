// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Court ranking by a selectable sort key.

use std::cmp::Reverse;
use std::str::FromStr;

use crate::models::Court;

/// Sort criterion for a court listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    /// Descending by aggregate rating
    Rating,
    /// Ascending by parsed price
    Price,
    /// Ascending by distance; courts without a distance sort last
    Distance,
    /// Descending by review count
    Reviews,
}

/// Rejected sort key from the query string.
#[derive(Debug, Clone, thiserror::Error)]
#[error("invalid sort key '{0}' (expected rating, price, distance, or reviews)")]
pub struct InvalidSortKey(pub String);

impl FromStr for SortKey {
    type Err = InvalidSortKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "rating" => Ok(SortKey::Rating),
            "price" => Ok(SortKey::Price),
            "distance" => Ok(SortKey::Distance),
            "reviews" => Ok(SortKey::Reviews),
            other => Err(InvalidSortKey(other.to_string())),
        }
    }
}

/// Order courts by `key`.
///
/// The sort is stable: courts comparing equal on the key keep their relative
/// order from the input.
pub fn rank_courts(mut courts: Vec<Court>, key: SortKey) -> Vec<Court> {
    match key {
        SortKey::Rating => {
            courts.sort_by(|a, b| b.rating.total_cmp(&a.rating));
        }
        SortKey::Reviews => {
            courts.sort_by_key(|c| Reverse(c.review_count));
        }
        SortKey::Price => {
            courts.sort_by(|a, b| parse_price(&a.price).total_cmp(&parse_price(&b.price)));
        }
        SortKey::Distance => {
            courts.sort_by(|a, b| {
                a.distance_miles
                    .unwrap_or(f64::INFINITY)
                    .total_cmp(&b.distance_miles.unwrap_or(f64::INFINITY))
            });
        }
    }
    courts
}

/// Extract the numeric value from a display price string like "$25/hr".
///
/// Strips everything that is not a digit or decimal point before parsing.
/// A string with no parseable number compares as the lowest sortable value
/// rather than failing the whole ranking.
fn parse_price(price: &str) -> f64 {
    let digits: String = price
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    digits.parse().unwrap_or(f64::NEG_INFINITY)
}
