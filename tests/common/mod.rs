// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use courtfinder::config::Config;
use courtfinder::routes::create_router;
use courtfinder::services::{CatalogService, ReviewStore};
use courtfinder::AppState;
use std::sync::Arc;

/// Small fixed catalog so ordering assertions stay deterministic.
///
/// Ratings/counts are derived from the seed reviews at startup, so:
/// court 1 -> 4.5 (2 reviews), court 2 -> 3.0 (0 reviews),
/// court 3 -> 5.0 (1 review).
pub const TEST_CATALOG: &str = r#"{
    "courts": [
        {
            "id": 1,
            "name": "Hard Court",
            "location": "Downtown",
            "price": "$10/hr",
            "surface": "Hard",
            "amenities": ["Lights"],
            "description": "Two public hard courts.",
            "image": "https://example.com/hard.jpg",
            "rating": 4.5,
            "review_count": 2,
            "distance_miles": 2.0
        },
        {
            "id": 2,
            "name": "Budget Court",
            "location": "Eastside",
            "price": "$7/hr",
            "surface": "Clay",
            "amenities": ["Practice Wall"],
            "description": "Cheap and cheerful.",
            "image": "https://example.com/budget.jpg",
            "rating": 3.0,
            "review_count": 0
        },
        {
            "id": 3,
            "name": "Premium Club",
            "location": "Hillcrest",
            "price": "$25/hr",
            "surface": "Grass",
            "amenities": ["Coaching", "Clubhouse"],
            "description": "Members-first grass courts.",
            "image": "https://example.com/premium.jpg",
            "rating": 5.0,
            "review_count": 1,
            "distance_miles": 5.0
        }
    ],
    "reviews": {
        "1": [
            {"id": 1, "author": "Tennis Pro", "rating": 5,
             "text": "Excellent courts with great lighting.", "date": "2024-01-15"},
            {"id": 2, "author": "Court Regular", "rating": 4,
             "text": "Good facilities but can get crowded.", "date": "2024-01-10"}
        ],
        "3": [
            {"id": 3, "author": "Weekend Warrior", "rating": 5,
             "text": "Perfect for weekend matches.", "date": "2024-01-08"}
        ]
    }
}"#;

/// Create a test app over the fixture catalog.
/// Returns the router and the shared state.
#[allow(dead_code)]
pub fn create_test_app() -> (axum::Router, Arc<AppState>) {
    let config = Config::test_default();
    let catalog = CatalogService::load_from_json(TEST_CATALOG).expect("test catalog should parse");
    let review_store = ReviewStore::seeded_from(&catalog);

    let state = Arc::new(AppState {
        config,
        catalog,
        review_store,
    });

    (create_router(state.clone()), state)
}

/// Read a JSON response body.
#[allow(dead_code)]
pub async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body should be readable");
    serde_json::from_slice(&bytes).expect("body should be JSON")
}
