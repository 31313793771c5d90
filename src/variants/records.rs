// src/variants/records.rs
//
// Row synthesis for MAIN and its variants. Both start from a copy of an
// input row and overwrite only the cells named here; anything not touched
// passes through (prices, non-common parameters, per-variant EAN/stock/weight).

use crate::config::consts::{FLAG_BLANK, FLAG_OFF, FLAG_ON};
use super::columns::{ColumnRoles, Role};
use super::images;

/// Everything row synthesis needs, resolved once per build.
#[derive(Clone, Debug)]
pub struct Plan<'a> {
    pub roles: &'a ColumnRoles,
    pub product_code: usize,
    pub parent_code: &'a str,
    pub param: Option<usize>,
    /// Common parameter columns, distinguishing column already excluded.
    pub common: &'a [usize],
    pub main_only: &'a [usize],
}

impl Plan<'_> {
    #[inline]
    fn set(&self, row: &mut [String], role: Role, value: &str) {
        if let Some(ix) = self.roles.get(role) {
            row[ix] = s!(value);
        }
    }

    fn labels_off(&self, row: &mut [String]) {
        for &ix in &self.roles.labels {
            row[ix] = s!(FLAG_OFF);
        }
    }
}

/// MAIN/parent row from the template row.
///
/// `merged_images` is the union over *all* input rows (see `images::merge_unique`).
/// Main-only and parameter columns keep the template's values, except the
/// distinguishing parameter which is blanked.
pub fn synthesize_main(
    plan: &Plan<'_>,
    template: &[String],
    merged_images: &str,
    title: Option<&str>,
    language: Option<&str>,
) -> Vec<String> {
    let mut row = template.to_vec();

    row[plan.product_code] = s!(plan.parent_code);
    plan.set(&mut row, Role::VariantCode, FLAG_BLANK);
    plan.set(&mut row, Role::VariantYn, FLAG_OFF);
    // MAIN_YN stays blank on the parent, not "0": the importer tells the two apart.
    plan.set(&mut row, Role::MainYn, FLAG_BLANK);
    plan.set(&mut row, Role::ActiveYn, FLAG_ON);
    plan.set(&mut row, Role::ArchivedYn, FLAG_OFF);
    plan.set(&mut row, Role::CanAddToBasketYn, FLAG_ON);
    plan.set(&mut row, Role::IsPricesWithVatYn, FLAG_ON);
    plan.set(&mut row, Role::Ean, FLAG_BLANK);
    plan.set(&mut row, Role::Stock, FLAG_BLANK);
    plan.set(&mut row, Role::Weight, FLAG_BLANK);

    if let Some(ix) = plan.param {
        row[ix] = s!();
    }
    if let Some(lang) = language {
        plan.set(&mut row, Role::Language, lang);
    }
    if let Some(t) = title {
        plan.set(&mut row, Role::Title, t);
    }
    plan.set(&mut row, Role::Images, merged_images);
    plan.labels_off(&mut row);

    row
}

/// One variant row from its original input row.
pub fn synthesize_variant(plan: &Plan<'_>, original: &[String]) -> Vec<String> {
    let mut row = original.to_vec();

    // capture before the shared code is overwritten
    let original_code = original[plan.product_code].clone();

    row[plan.product_code] = s!(plan.parent_code);
    plan.set(&mut row, Role::VariantYn, FLAG_ON);
    plan.set(&mut row, Role::VariantCode, &original_code);
    plan.set(&mut row, Role::MainYn, FLAG_OFF);
    plan.set(&mut row, Role::ActiveYn, FLAG_ON);
    plan.set(&mut row, Role::ArchivedYn, FLAG_BLANK);
    plan.set(&mut row, Role::CanAddToBasketYn, FLAG_BLANK);
    plan.set(&mut row, Role::IsPricesWithVatYn, FLAG_ON);

    for &ix in plan.main_only {
        row[ix] = s!();
    }
    for &ix in plan.common {
        row[ix] = s!();
    }

    if let Some(ix) = plan.roles.get(Role::Images) {
        row[ix] = images::first(&original[ix]);
    }
    plan.labels_off(&mut row);

    row
}
