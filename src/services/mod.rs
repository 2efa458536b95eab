// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - API client, OAuth flow, scraping, and export.

pub mod export;
pub mod oauth;
pub mod scraper;
pub mod wahoo;

pub use oauth::TokenResponse;
pub use scraper::DataScraper;
pub use wahoo::{ActivityDetail, WahooClient};
