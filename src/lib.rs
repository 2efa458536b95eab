// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Wahoo-Exporter: scrape and export Wahoo fitness data
//!
//! This crate wraps the Wahoo REST API behind a typed client, scrapes a
//! user's profile, devices, activities, workouts and metrics into one
//! snapshot, and exports the result to JSON and CSV.

pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod time_utils;
