//! # mindful-api
//!
//! Mood-aware wellness content recommendations. A fixed catalog is indexed
//! with TF-IDF over its tag strings; a reported mood is mapped to its
//! emotional complement, combined with the user's free text, and the catalog
//! is ranked by cosine similarity. Satisfaction feedback is recorded in an
//! append-only ledger for aggregate display.

pub mod api;
pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod services;
