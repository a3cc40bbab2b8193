// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Tennis court model.

use serde::{Deserialize, Serialize};

/// A tennis court in the catalog.
///
/// Everything except `rating` and `review_count` is fixed at seed time;
/// those two are owned by the review store after startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Court {
    /// Stable court ID (also used as the route path parameter)
    pub id: u64,
    /// Court name (e.g., "Sunset Park Tennis Center")
    pub name: String,
    /// Human-readable location (neighborhood, city)
    pub location: String,
    /// Display price string as entered (e.g., "$25/hr")
    pub price: String,
    /// Playing surface
    pub surface: Surface,
    /// Amenity labels, in display order
    pub amenities: Vec<String>,
    /// Free-text description
    pub description: String,
    /// Image URI (opaque, not fetched)
    pub image: String,
    /// Aggregate rating, 0.0-5.0 (full precision; rounded for display)
    pub rating: f64,
    /// Number of reviews behind the aggregate
    pub review_count: u32,
    /// Distance placeholder in miles; no geolocation, may be absent
    #[serde(default)]
    pub distance_miles: Option<f64>,
}

impl Court {
    /// Case-insensitive substring match across the searchable fields.
    ///
    /// `query` must already be lower-cased and non-empty.
    pub fn matches(&self, query: &str) -> bool {
        self.name.to_lowercase().contains(query)
            || self.location.to_lowercase().contains(query)
            || self.surface.label().to_lowercase().contains(query)
            || self
                .amenities
                .iter()
                .any(|a| a.to_lowercase().contains(query))
    }
}

/// Court playing surface (closed set).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Surface {
    Hard,
    Clay,
    Grass,
    Indoor,
}

impl Surface {
    /// Display label, identical to the serialized form.
    pub fn label(&self) -> &'static str {
        match self {
            Surface::Hard => "Hard",
            Surface::Clay => "Clay",
            Surface::Grass => "Grass",
            Surface::Indoor => "Indoor",
        }
    }
}

/// Round a full-precision rating to one decimal place for display.
pub fn display_rating(rating: f64) -> f64 {
    (rating * 10.0).round() / 10.0
}
