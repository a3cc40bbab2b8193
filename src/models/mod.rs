// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod court;
pub mod review;

pub use court::{display_rating, Court, Surface};
pub use review::{rating_label, Review, ReviewDraft};
