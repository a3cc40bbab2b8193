// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Courtfinder: browse, search, and review tennis courts
//!
//! This crate provides the backend API over an in-memory court catalog:
//! free-text matching, stable ranking, and review submission with live
//! aggregate ratings.

pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod time_utils;

use config::Config;
use services::{CatalogService, ReviewStore};

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub catalog: CatalogService,
    pub review_store: ReviewStore,
}
