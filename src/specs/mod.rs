// src/specs/mod.rs
//! # Scraping “specs” module
//!
//! Page-specific scraping specifications. Each spec focuses on a single
//! page/endpoint and encodes *where the ground truth lives in the page* and
//! *how to extract it robustly*.
//!
//! - **Pure extraction** from remote pages using `core::html` / `core::js`
//!   helpers; tolerant, case-insensitive scanning over brittle selectors.
//! - **Light shaping** of results into small snapshot structs.
//! - **No caching, no persistence, no output formatting** – emission lives in
//!   `metrics`, orchestration in `cli`.
//!
//! Specs should be testable **offline** against captured or synthetic
//! documents; networking enters only in each spec's `fetch()`.
pub mod occupancy;
