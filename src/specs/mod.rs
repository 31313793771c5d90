// src/specs/mod.rs
//! # Scraping "specs" module
//!
//! Page-specific knowledge of supplier sites: *where the ground truth lives in the
//! HTML/URL* and *how to extract it robustly*.
//!
//! ## What lives here
//! - **Pure parsing** of URLs and fetched documents.
//! - **Selection precedence** (e.g. prefer `original_default` renditions over thumbnails).
//!
//! ## What does **not** live here
//! - **Networking** (`core::net`) and **saving files** (`scrape::images`).
//! - **GUI concerns**; frontends only see `Progress` callbacks.
//!
//! ## Testing notes
//! Specs are tested **offline** against inline HTML snippets.
pub mod northfinder;
