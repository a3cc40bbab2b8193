// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Court catalog and review routes.

use crate::error::Result;
use crate::models::{display_rating, rating_label, Court, Review, ReviewDraft};
use crate::services::{rank_courts, search_courts, SortKey};
use crate::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use validator::Validate;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/courts", get(list_courts))
        .route("/api/courts/{id}", get(get_court))
        .route(
            "/api/courts/{id}/reviews",
            get(list_reviews).post(submit_review),
        )
}

// ─── Court Listing ───────────────────────────────────────────

#[derive(Deserialize)]
struct CourtsQuery {
    /// Free-text filter across name, location, surface, and amenities
    query: Option<String>,
    /// Sort key: rating | price | distance | reviews
    sort: Option<String>,
}

/// Court card for the listing response.
#[derive(Serialize, Clone, Debug)]
pub struct CourtSummary {
    pub id: u64,
    pub name: String,
    pub location: String,
    pub price: String,
    pub surface: String,
    pub amenities: Vec<String>,
    /// Display rating, rounded to one decimal place
    pub rating: f64,
    pub review_count: u32,
    pub distance_miles: Option<f64>,
}

impl From<Court> for CourtSummary {
    fn from(court: Court) -> Self {
        Self {
            id: court.id,
            name: court.name,
            location: court.location,
            price: court.price,
            surface: court.surface.label().to_string(),
            amenities: court.amenities,
            rating: display_rating(court.rating),
            review_count: court.review_count,
            distance_miles: court.distance_miles,
        }
    }
}

#[derive(Serialize)]
pub struct CourtsResponse {
    pub courts: Vec<CourtSummary>,
    pub total: u32,
}

/// Parse the optional `sort` query parameter.
///
/// Absent means the default listing order (by rating, as in the original
/// client); anything unrecognized is rejected rather than defaulted.
fn parse_sort(raw: Option<&str>) -> Result<SortKey> {
    match raw {
        Some(value) => Ok(value.parse::<SortKey>()?),
        None => Ok(SortKey::Rating),
    }
}

/// List courts, filtered by `query` and ordered by `sort`.
async fn list_courts(
    State(state): State<Arc<AppState>>,
    Query(params): Query<CourtsQuery>,
) -> Result<Json<CourtsResponse>> {
    let sort_key = parse_sort(params.sort.as_deref())?;
    let query = params.query.unwrap_or_default();

    tracing::debug!(query = %query, sort = ?sort_key, "Listing courts");

    // Overlay live aggregates before matching so rating/reviews sorts see
    // submitted reviews, not the seed values.
    let mut courts = state.catalog.courts().to_vec();
    state.review_store.overlay_aggregates(&mut courts);

    let ranked = rank_courts(search_courts(&courts, &query), sort_key);

    let total = ranked.len() as u32;
    let courts = ranked.into_iter().map(CourtSummary::from).collect();

    Ok(Json(CourtsResponse { courts, total }))
}

// ─── Court Detail ────────────────────────────────────────────

/// Full court record for the detail screen.
#[derive(Serialize)]
pub struct CourtDetailResponse {
    pub id: u64,
    pub name: String,
    pub location: String,
    pub price: String,
    pub surface: String,
    pub amenities: Vec<String>,
    pub description: String,
    pub image: String,
    pub rating: f64,
    pub review_count: u32,
    pub distance_miles: Option<f64>,
}

async fn get_court(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u64>,
) -> Result<Json<CourtDetailResponse>> {
    let court = state
        .catalog
        .get(id)
        .ok_or_else(|| crate::error::AppError::NotFound(format!("Court {} not found", id)))?;

    let (rating, review_count) = state
        .review_store
        .aggregates(id)
        .unwrap_or((court.rating, court.review_count));

    Ok(Json(CourtDetailResponse {
        id: court.id,
        name: court.name.clone(),
        location: court.location.clone(),
        price: court.price.clone(),
        surface: court.surface.label().to_string(),
        amenities: court.amenities.clone(),
        description: court.description.clone(),
        image: court.image.clone(),
        rating: display_rating(rating),
        review_count,
        distance_miles: court.distance_miles,
    }))
}

// ─── Reviews ─────────────────────────────────────────────────

/// Review as returned by the API.
#[derive(Serialize)]
pub struct ReviewResponse {
    pub id: u64,
    pub author: String,
    pub rating: u8,
    pub rating_label: &'static str,
    pub text: String,
    pub date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommend: Option<bool>,
}

impl From<Review> for ReviewResponse {
    fn from(review: Review) -> Self {
        Self {
            id: review.id,
            author: review.author,
            rating: review.rating,
            rating_label: rating_label(review.rating),
            text: review.text,
            date: review.date,
            recommend: review.recommend,
        }
    }
}

#[derive(Serialize)]
pub struct ReviewsResponse {
    pub reviews: Vec<ReviewResponse>,
    pub total: u32,
}

/// List a court's reviews, newest-first.
async fn list_reviews(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u64>,
) -> Result<Json<ReviewsResponse>> {
    let reviews = state.review_store.list_reviews(id)?;

    let total = reviews.len() as u32;
    let reviews = reviews.into_iter().map(ReviewResponse::from).collect();

    Ok(Json(ReviewsResponse { reviews, total }))
}

/// Incoming review draft.
///
/// The range/length bounds here mirror what the original compose UI
/// enforces; the review store re-validates independently.
#[derive(Deserialize, Validate)]
pub struct SubmitReviewRequest {
    #[validate(range(min = 1, max = 5, message = "rating must be between 1 and 5"))]
    pub rating: u8,
    #[validate(length(max = 2000, message = "review text is limited to 2000 characters"))]
    pub text: String,
    pub recommend: Option<bool>,
}

/// Submit a review for a court.
async fn submit_review(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u64>,
    Json(body): Json<SubmitReviewRequest>,
) -> Result<(StatusCode, Json<ReviewResponse>)> {
    body.validate()
        .map_err(|e| crate::error::AppError::BadRequest(e.to_string()))?;

    let draft = ReviewDraft {
        rating: body.rating,
        text: body.text,
        recommend: body.recommend,
    };

    let review = state.review_store.submit_review(id, draft)?;

    Ok((StatusCode::CREATED, Json(ReviewResponse::from(review))))
}
