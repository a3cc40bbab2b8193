// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Court catalog loading and lookup service.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::models::{Court, Review};

/// The immutable court catalog, seeded once at startup.
///
/// Holds the courts themselves plus the seed review lists that the review
/// store takes ownership of. After construction nothing here changes; live
/// rating/review counts are overlaid from the review store at query time.
#[derive(Debug, Default, Clone)]
pub struct CatalogService {
    courts: Vec<Court>,
    seed_reviews: HashMap<u64, Vec<Review>>,
}

/// On-disk seed file layout.
#[derive(serde::Deserialize)]
struct SeedFile {
    courts: Vec<Court>,
    #[serde(default)]
    reviews: HashMap<u64, Vec<Review>>,
}

impl CatalogService {
    /// Load the catalog from a JSON seed file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let json_data =
            fs::read_to_string(path.as_ref()).map_err(|e| CatalogError::IoError(e.to_string()))?;
        Self::load_from_json(&json_data)
    }

    /// Load the catalog from a JSON string.
    pub fn load_from_json(json_data: &str) -> Result<Self, CatalogError> {
        let seed: SeedFile =
            serde_json::from_str(json_data).map_err(|e| CatalogError::ParseError(e.to_string()))?;

        let mut seen = std::collections::HashSet::new();
        for court in &seed.courts {
            if !seen.insert(court.id) {
                return Err(CatalogError::DuplicateCourtId(court.id));
            }
        }

        let mut seed_reviews = seed.reviews;
        seed_reviews.retain(|&court_id, _| {
            let known = seen.contains(&court_id);
            if !known {
                tracing::warn!(court_id, "Dropping seed reviews for unknown court");
            }
            known
        });

        tracing::info!(count = seed.courts.len(), "Loaded court catalog");
        Ok(Self {
            courts: seed.courts,
            seed_reviews,
        })
    }

    /// Get the full catalog, in seed order.
    pub fn courts(&self) -> &[Court] {
        &self.courts
    }

    /// Look up a court by ID.
    pub fn get(&self, id: u64) -> Option<&Court> {
        self.courts.iter().find(|c| c.id == id)
    }

    /// Seed review lists, keyed by court ID (hand-off to the review store).
    pub fn seed_reviews(&self) -> &HashMap<u64, Vec<Review>> {
        &self.seed_reviews
    }
}

/// Errors from catalog loading.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Failed to read file: {0}")]
    IoError(String),

    #[error("Failed to parse catalog: {0}")]
    ParseError(String),

    #[error("Duplicate court id {0} in seed file")]
    DuplicateCourtId(u64),
}
