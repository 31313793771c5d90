// src/variants/mod.rs
//! # Variant builder
//!
//! Turns a flat product export (one row per product) into an Upgates
//! parent/variant block: row 0 is the synthesized **MAIN** product, rows 1..N are
//! the original rows rewritten as its variants.
//!
//! ## Pipeline (single pass, in memory)
//! ```text
//! headers → columns::ColumnRoles::resolve      (which header plays which role)
//!         → ColumnRoles::resolve_param          (distinguishing PARAMETER column)
//! rows    → common::common_parameter_columns    (needs the whole column)
//!         → records::synthesize_main            (template row + merged images)
//!         → records::synthesize_variant × N     (original code → VARIANT_CODE)
//!         → MAIN followed by variants, header order untouched
//! ```
//!
//! ## What lands where
//! - Shared `[PRODUCT_CODE]` on every row; each variant keeps its old code in `[VARIANT_CODE]`.
//! - Text/SEO/category/manufacturer columns only on MAIN.
//! - PARAMETER columns with one shared value only on MAIN; the distinguishing one only on variants.
//! - `[IMAGES]`: MAIN gets the de-duplicated union, each variant its own first image.
//! - `LABEL_ACTIVE_YN` columns forced to `0` everywhere.
//!
//! No I/O here; see `file` for reading/writing tables.

pub mod builder;
pub mod columns;
pub mod common;
pub mod error;
pub mod images;
pub mod records;

pub use builder::{build_variants, needs_parent_code, VariantBuild};
pub use columns::{ColumnRoles, Role};
pub use error::{Notice, VariantError};
