// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Review store: per-court review lists and live aggregate ratings.
//!
//! This is the only component that mutates court state after startup. The
//! catalog stays immutable; handlers overlay the live aggregates from here
//! before matching and ranking.

use std::sync::atomic::{AtomicU64, Ordering};

use dashmap::DashMap;

use crate::models::{Court, Review, ReviewDraft};
use crate::services::CatalogService;
use crate::time_utils::today_utc_date;

/// Minimum trimmed review length, in characters.
pub const MIN_REVIEW_CHARS: usize = 10;

/// Author label for reviews submitted through the API.
const SUBMIT_AUTHOR: &str = "You";

/// Per-court review state.
#[derive(Debug, Clone)]
struct CourtReviews {
    /// Newest-first
    reviews: Vec<Review>,
    /// Full-precision running mean; rounded only for display
    rating: f64,
    review_count: u32,
}

/// Owns every court's review list and its derived rating/review count.
pub struct ReviewStore {
    courts: DashMap<u64, CourtReviews>,
    next_review_id: AtomicU64,
}

impl ReviewStore {
    /// Build the store from the seeded catalog.
    ///
    /// For courts with seed reviews the aggregate is derived from the list
    /// itself (count = list length, rating = mean of ratings), so the
    /// rating/count invariant holds from startup regardless of what the seed
    /// file claims. Courts without seed reviews start at count 0 with the
    /// catalog rating as a display placeholder; their first submission sets
    /// the aggregate to exactly that review's rating.
    pub fn seeded_from(catalog: &CatalogService) -> Self {
        let courts = DashMap::new();
        let mut max_review_id = 0;

        for court in catalog.courts() {
            let mut reviews = catalog
                .seed_reviews()
                .get(&court.id)
                .cloned()
                .unwrap_or_default();
            // Newest-first; ids break date ties
            reviews.sort_by(|a, b| b.date.cmp(&a.date).then(b.id.cmp(&a.id)));

            for review in &reviews {
                max_review_id = max_review_id.max(review.id);
            }

            let state = if reviews.is_empty() {
                CourtReviews {
                    reviews,
                    rating: court.rating,
                    review_count: 0,
                }
            } else {
                let sum: u32 = reviews.iter().map(|r| u32::from(r.rating)).sum();
                let count = reviews.len() as u32;
                CourtReviews {
                    rating: f64::from(sum) / f64::from(count),
                    review_count: count,
                    reviews,
                }
            };
            courts.insert(court.id, state);
        }

        Self {
            courts,
            next_review_id: AtomicU64::new(max_review_id + 1),
        }
    }

    /// Reviews for a court, newest-first.
    pub fn list_reviews(&self, court_id: u64) -> Result<Vec<Review>, ReviewError> {
        self.courts
            .get(&court_id)
            .map(|state| state.reviews.clone())
            .ok_or(ReviewError::CourtNotFound(court_id))
    }

    /// Live full-precision rating and review count for a court.
    pub fn aggregates(&self, court_id: u64) -> Option<(f64, u32)> {
        self.courts
            .get(&court_id)
            .map(|state| (state.rating, state.review_count))
    }

    /// Overwrite `rating`/`review_count` on each court with the live values.
    pub fn overlay_aggregates(&self, courts: &mut [Court]) {
        for court in courts {
            if let Some((rating, count)) = self.aggregates(court.id) {
                court.rating = rating;
                court.review_count = count;
            }
        }
    }

    /// Validate and append a review, recomputing the court's aggregate.
    ///
    /// Validation failures mutate nothing. On success the new review is
    /// prepended (newest-first), the count is incremented, and the rating
    /// becomes the running weighted mean
    /// `(old * old_count + rating) / (old_count + 1)`.
    pub fn submit_review(&self, court_id: u64, draft: ReviewDraft) -> Result<Review, ReviewError> {
        let text = draft.text.trim().to_string();
        if text.chars().count() < MIN_REVIEW_CHARS {
            return Err(ValidationError::ReviewTooShort.into());
        }
        if !(1..=5).contains(&draft.rating) {
            return Err(ValidationError::InvalidRating.into());
        }

        // get_mut holds the shard write guard for the whole read-modify-write,
        // so concurrent submissions to the same court serialize here.
        let mut state = self
            .courts
            .get_mut(&court_id)
            .ok_or(ReviewError::CourtNotFound(court_id))?;

        let review = Review {
            id: self.next_review_id.fetch_add(1, Ordering::Relaxed),
            author: SUBMIT_AUTHOR.to_string(),
            rating: draft.rating,
            text,
            date: today_utc_date(),
            recommend: draft.recommend,
        };

        let old_count = f64::from(state.review_count);
        state.rating = (state.rating * old_count + f64::from(draft.rating)) / (old_count + 1.0);
        state.review_count += 1;
        state.reviews.insert(0, review.clone());

        tracing::info!(
            court_id,
            review_id = review.id,
            rating = review.rating,
            new_count = state.review_count,
            "Review submitted"
        );

        Ok(review)
    }
}

/// Review draft rejections (no state is mutated).
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please write at least 10 characters for your review")]
    ReviewTooShort,

    #[error("Rating must be between 1 and 5")]
    InvalidRating,
}

/// Errors from review store operations.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ReviewError {
    #[error("Court {0} not found")]
    CourtNotFound(u64),

    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEED: &str = r#"{
        "courts": [
            {
                "id": 1,
                "name": "Sunset Park",
                "location": "Westside",
                "price": "$25/hr",
                "surface": "Hard",
                "amenities": ["Lights"],
                "description": "",
                "image": "",
                "rating": 4.5,
                "review_count": 3,
                "distance_miles": 2.3
            },
            {
                "id": 2,
                "name": "New Court",
                "location": "Eastside",
                "price": "$10/hr",
                "surface": "Clay",
                "amenities": [],
                "description": "",
                "image": "",
                "rating": 3.0,
                "review_count": 0
            }
        ],
        "reviews": {
            "1": [
                {"id": 1, "author": "Tennis Pro", "rating": 5,
                 "text": "Excellent courts with great lighting.", "date": "2024-01-15"},
                {"id": 2, "author": "Court Regular", "rating": 4,
                 "text": "Good facilities but can get crowded.", "date": "2024-01-10"},
                {"id": 3, "author": "Weekend Warrior", "rating": 5,
                 "text": "Perfect for weekend matches.", "date": "2024-01-08"}
            ]
        }
    }"#;

    fn seeded_store() -> ReviewStore {
        let catalog = CatalogService::load_from_json(SEED).unwrap();
        ReviewStore::seeded_from(&catalog)
    }

    fn draft(rating: u8, text: &str) -> ReviewDraft {
        ReviewDraft {
            rating,
            text: text.to_string(),
            recommend: None,
        }
    }

    #[test]
    fn test_seed_aggregates_derived_from_reviews() {
        let store = seeded_store();

        let (rating, count) = store.aggregates(1).unwrap();
        assert_eq!(count, 3);
        assert!((rating - 14.0 / 3.0).abs() < 1e-9);

        // No seed reviews: catalog rating kept as placeholder, count 0
        assert_eq!(store.aggregates(2), Some((3.0, 0)));
    }

    #[test]
    fn test_list_reviews_newest_first() {
        let store = seeded_store();
        let reviews = store.list_reviews(1).unwrap();
        let dates: Vec<&str> = reviews.iter().map(|r| r.date.as_str()).collect();
        assert_eq!(dates, vec!["2024-01-15", "2024-01-10", "2024-01-08"]);
    }

    #[test]
    fn test_list_reviews_unknown_court() {
        let store = seeded_store();
        let err = store.list_reviews(42).unwrap_err();
        assert!(matches!(err, ReviewError::CourtNotFound(42)));
    }

    #[test]
    fn test_short_review_rejected_without_mutation() {
        let store = seeded_store();
        let before = store.aggregates(1).unwrap();

        let err = store.submit_review(1, draft(5, "short")).unwrap_err();
        assert!(matches!(
            err,
            ReviewError::Invalid(ValidationError::ReviewTooShort)
        ));

        assert_eq!(store.aggregates(1).unwrap(), before);
        assert_eq!(store.list_reviews(1).unwrap().len(), 3);
    }

    #[test]
    fn test_whitespace_padding_does_not_satisfy_minimum() {
        let store = seeded_store();
        let err = store
            .submit_review(1, draft(4, "   hi    \n\t    "))
            .unwrap_err();
        assert!(matches!(
            err,
            ReviewError::Invalid(ValidationError::ReviewTooShort)
        ));
    }

    #[test]
    fn test_out_of_range_rating_rejected() {
        let store = seeded_store();
        for rating in [0, 6, 255] {
            let err = store
                .submit_review(1, draft(rating, "Great experience here"))
                .unwrap_err();
            assert!(matches!(
                err,
                ReviewError::Invalid(ValidationError::InvalidRating)
            ));
        }
        assert_eq!(store.list_reviews(1).unwrap().len(), 3);
    }

    #[test]
    fn test_submit_to_unknown_court() {
        let store = seeded_store();
        let err = store
            .submit_review(42, draft(5, "Great experience here"))
            .unwrap_err();
        assert!(matches!(err, ReviewError::CourtNotFound(42)));
    }

    #[test]
    fn test_successful_submission_updates_everything() {
        let store = seeded_store();
        let (old_rating, old_count) = store.aggregates(1).unwrap();

        let review = store
            .submit_review(1, draft(3, "  Great experience here  "))
            .unwrap();

        assert_eq!(review.author, "You");
        assert_eq!(review.rating, 3);
        assert_eq!(review.text, "Great experience here"); // trimmed

        let reviews = store.list_reviews(1).unwrap();
        assert_eq!(reviews.len(), 4);
        assert_eq!(reviews[0].id, review.id); // newest-first

        let (new_rating, new_count) = store.aggregates(1).unwrap();
        assert_eq!(new_count, old_count + 1);
        let expected = (old_rating * f64::from(old_count) + 3.0) / f64::from(old_count + 1);
        assert!((new_rating - expected).abs() < 1e-9);
    }

    #[test]
    fn test_review_ids_are_monotonic_and_past_seed() {
        let store = seeded_store();
        let first = store
            .submit_review(1, draft(5, "Great experience here"))
            .unwrap();
        let second = store
            .submit_review(2, draft(4, "Solid clay courts overall"))
            .unwrap();

        assert!(first.id > 3); // seed ids are 1..=3
        assert_eq!(second.id, first.id + 1);
    }

    #[test]
    fn test_ten_five_star_reviews_converge_to_five() {
        let store = seeded_store();
        assert_eq!(store.aggregates(2), Some((3.0, 0)));

        for _ in 0..10 {
            store
                .submit_review(2, draft(5, "Great experience here"))
                .unwrap();
        }

        let (rating, count) = store.aggregates(2).unwrap();
        assert_eq!(count, 10);
        assert!((rating - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_overlay_aggregates() {
        let catalog = CatalogService::load_from_json(SEED).unwrap();
        let store = ReviewStore::seeded_from(&catalog);
        store
            .submit_review(2, draft(5, "Great experience here"))
            .unwrap();

        let mut courts = catalog.courts().to_vec();
        store.overlay_aggregates(&mut courts);

        let court2 = courts.iter().find(|c| c.id == 2).unwrap();
        assert_eq!(court2.rating, 5.0);
        assert_eq!(court2.review_count, 1);
    }
}
