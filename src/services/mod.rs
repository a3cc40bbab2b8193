// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - business logic layer.

pub mod catalog;
pub mod ranking;
pub mod reviews;
pub mod search;

pub use catalog::{CatalogError, CatalogService};
pub use ranking::{rank_courts, InvalidSortKey, SortKey};
pub use reviews::{ReviewError, ReviewStore, ValidationError};
pub use search::search_courts;
