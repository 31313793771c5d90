// src/variants/columns.rs
//! Column role resolution.
//!
//! Upgates exports name their columns `[PRODUCT_CODE]`, `[TITLE]`, … but hand-edited
//! sheets drop the brackets or add suffixes, so every role is looked up twice:
//! - exact, case-insensitive, against `[KEY]` then `KEY` (trimmed header);
//! - only if that fails, substring containment in the same order.
//!
//! Ties go to the **first column in header order**. That is the whole tie-break;
//! e.g. with no `TITLE` column, `TITLE` resolves to `[SEO_TITLE]` by containment.

use crate::config::consts::{LABEL_MARKER, PARAMETER_MARKER, PRICE_MARKER};
use super::error::{Notice, VariantError};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Role {
    ProductCode,
    VariantYn,
    VariantCode,
    MainYn,
    ActiveYn,
    ArchivedYn,
    CanAddToBasketYn,
    Language,
    Title,
    LongDescription,
    ShortDescription,
    SeoUrl,
    SeoTitle,
    SeoDescription,
    Ean,
    Manufacturer,
    Availability,
    AvailabilityNote,
    Stock,
    Weight,
    Unit,
    ShipmentGroup,
    Vat,
    Categories,
    Images,
    Files,
    IsPricesWithVatYn,
}

impl Role {
    pub const ALL: [Role; 27] = [
        Role::ProductCode, Role::VariantYn, Role::VariantCode, Role::MainYn, Role::ActiveYn,
        Role::ArchivedYn, Role::CanAddToBasketYn, Role::Language, Role::Title,
        Role::LongDescription, Role::ShortDescription, Role::SeoUrl, Role::SeoTitle,
        Role::SeoDescription, Role::Ean, Role::Manufacturer, Role::Availability,
        Role::AvailabilityNote, Role::Stock, Role::Weight, Role::Unit, Role::ShipmentGroup,
        Role::Vat, Role::Categories, Role::Images, Role::Files, Role::IsPricesWithVatYn,
    ];

    /// Parent-level text/SEO/category data: kept on MAIN, blanked on variants.
    pub const MAIN_ONLY: [Role; 12] = [
        Role::Title, Role::LongDescription, Role::ShortDescription, Role::SeoUrl,
        Role::SeoTitle, Role::SeoDescription, Role::Manufacturer, Role::Availability,
        Role::AvailabilityNote, Role::Unit, Role::Vat, Role::Categories,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Role::ProductCode => "PRODUCT_CODE",
            Role::VariantYn => "VARIANT_YN",
            Role::VariantCode => "VARIANT_CODE",
            Role::MainYn => "MAIN_YN",
            Role::ActiveYn => "ACTIVE_YN",
            Role::ArchivedYn => "ARCHIVED_YN",
            Role::CanAddToBasketYn => "CAN_ADD_TO_BASKET_YN",
            Role::Language => "LANGUAGE",
            Role::Title => "TITLE",
            Role::LongDescription => "LONG_DESCRIPTION",
            Role::ShortDescription => "SHORT_DESCRIPTION",
            Role::SeoUrl => "SEO_URL",
            Role::SeoTitle => "SEO_TITLE",
            Role::SeoDescription => "SEO_DESCRIPTION",
            Role::Ean => "EAN",
            Role::Manufacturer => "MANUFACTURER",
            Role::Availability => "AVAILABILITY",
            Role::AvailabilityNote => "AVAILABILITY_NOTE",
            Role::Stock => "STOCK",
            Role::Weight => "WEIGHT",
            Role::Unit => "UNIT",
            Role::ShipmentGroup => "SHIPMENT_GROUP",
            Role::Vat => "VAT",
            Role::Categories => "CATEGORIES",
            Role::Images => "IMAGES",
            Role::Files => "FILES",
            Role::IsPricesWithVatYn => "IS_PRICES_WITH_VAT_YN",
        }
    }

    #[inline]
    fn slot(&self) -> usize {
        *self as usize
    }
}

/// Resolved header indices for one dataset.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ColumnRoles {
    single: [Option<usize>; Role::ALL.len()],
    pub prices: Vec<usize>,
    pub labels: Vec<usize>,
    pub params: Vec<usize>,
}

impl ColumnRoles {
    /// Classify every header. Never fails; see `require` for mandatory roles.
    pub fn resolve(headers: &[String]) -> Self {
        let mut single = [None; Role::ALL.len()];
        for role in Role::ALL {
            let key = role.key();
            let bracketed = join!("[", key, "]");
            single[role.slot()] = find_column(headers, &[bracketed.as_str(), key]);
        }

        let prices = positions(headers, |h| h.to_lowercase().contains(PRICE_MARKER));
        let labels = positions(headers, |h| h.contains(LABEL_MARKER));
        let params = positions(headers, |h| h.to_uppercase().contains(PARAMETER_MARKER));

        Self { single, prices, labels, params }
    }

    #[inline]
    pub fn get(&self, role: Role) -> Option<usize> {
        self.single[role.slot()]
    }

    pub fn require(&self, role: Role) -> Result<usize, VariantError> {
        self.get(role).ok_or(VariantError::MissingRequiredColumn(role.key()))
    }

    /// Resolved main-only columns, in role order, without duplicates.
    ///
    /// A column also claimed by a non-main-only role is left out: with no `[VAT]`
    /// header, `VAT` lands on `[IS_PRICES_WITH_VAT_YN]` by containment, and that
    /// flag must survive on variants.
    pub fn main_only(&self) -> Vec<usize> {
        let claimed: Vec<usize> = Role::ALL
            .iter()
            .filter(|r| !Role::MAIN_ONLY.contains(r))
            .filter_map(|r| self.get(*r))
            .collect();

        let mut out: Vec<usize> = Vec::with_capacity(Role::MAIN_ONLY.len());
        for role in Role::MAIN_ONLY {
            if let Some(ix) = self.get(role) {
                if !out.contains(&ix) && !claimed.contains(&ix) { out.push(ix); }
            }
        }
        out
    }

    /// Pick the distinguishing PARAMETER column for a caller request.
    ///
    /// Exact header match among parameter columns first, then the first parameter
    /// column containing the request (case-insensitive). A blank request means
    /// "none" and is not reported.
    pub fn resolve_param(
        &self,
        headers: &[String],
        requested: Option<&str>,
    ) -> (Option<usize>, Option<Notice>) {
        let Some(req) = requested.filter(|r| !r.trim().is_empty()) else {
            return (None, None);
        };

        if let Some(&ix) = self.params.iter().find(|&&ix| headers[ix] == req) {
            return (Some(ix), None);
        }

        let needle = req.trim().to_lowercase();
        if let Some(&ix) = self.params.iter().find(|&&ix| headers[ix].to_lowercase().contains(&needle)) {
            return (Some(ix), None);
        }

        (None, Some(Notice::UnresolvedParameterColumn { requested: s!(req) }))
    }
}

/// Exact (trimmed, case-insensitive) match over all candidates first, then containment.
fn find_column(headers: &[String], candidates: &[&str]) -> Option<usize> {
    let lowered: Vec<String> = headers.iter().map(|h| h.trim().to_lowercase()).collect();

    for cand in candidates {
        let c = cand.to_lowercase();
        if let Some(ix) = lowered.iter().position(|h| *h == c) {
            return Some(ix);
        }
    }
    for cand in candidates {
        let c = cand.to_lowercase();
        if let Some(ix) = lowered.iter().position(|h| h.contains(&c)) {
            return Some(ix);
        }
    }
    None
}

fn positions(headers: &[String], pred: impl Fn(&str) -> bool) -> Vec<usize> {
    headers
        .iter()
        .enumerate()
        .filter(|(_, h)| pred(h))
        .map(|(i, _)| i)
        .collect()
}
