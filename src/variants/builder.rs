// src/variants/builder.rs
use crate::{
    config::options::VariantOptions,
    data::DataSet,
};
use super::{
    columns::{ColumnRoles, Role},
    common::common_parameter_columns,
    error::{Notice, VariantError},
    images,
    records::{self, Plan},
};

/// Output of one build, plus what was decided along the way (for status lines/logs).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VariantBuild {
    /// Row 0 = MAIN, rows 1..=N = variants in input order.
    pub dataset: DataSet,
    pub parent_code: String,
    /// Header of the distinguishing parameter column, if one was resolved.
    pub param: Option<String>,
    /// Headers of PARAMETER columns promoted to MAIN only.
    pub common: Vec<String>,
    pub notices: Vec<Notice>,
}

impl VariantBuild {
    #[inline] pub fn main_row(&self) -> &[String] { &self.dataset.rows[0] }
    #[inline] pub fn variant_rows(&self) -> &[Vec<String>] { &self.dataset.rows[1..] }
}

/// True when a build would leave `[PRODUCT_CODE]` blank on every row: no parent
/// code was given and the template row's own code is empty. An out-of-range
/// template or a missing code column is left for `build_variants` to report.
pub fn needs_parent_code(ds: &DataSet, opts: &VariantOptions) -> bool {
    if VariantOptions::text(&opts.parent_code).is_some() {
        return false;
    }
    let Some(template) = ds.rows.get(opts.template_index) else { return false };
    ColumnRoles::resolve(&ds.headers)
        .get(Role::ProductCode)
        .is_some_and(|ix| template[ix].trim().is_empty())
}

/// Reshape a flat export into MAIN + variants.
///
/// Single pass, no partial output: either a complete dataset or an error.
pub fn build_variants(ds: &DataSet, opts: &VariantOptions) -> Result<VariantBuild, VariantError> {
    let roles = ColumnRoles::resolve(&ds.headers);
    let product_code = roles.require(Role::ProductCode)?;

    let rows = ds.row_count();
    let template_ix = opts.template_index;
    if template_ix >= rows {
        return Err(VariantError::TemplateOutOfRange { index: template_ix, rows });
    }
    let template = &ds.rows[template_ix];

    let mut notices = Vec::new();
    let (param, notice) = roles.resolve_param(&ds.headers, opts.param.as_deref());
    if let Some(n) = notice {
        logw!("Variants: {}", n);
        notices.push(n);
    }

    // The distinguishing column always stays per-variant, even if its values happen to agree.
    let mut common = common_parameter_columns(ds, &roles.params);
    common.retain(|&c| Some(c) != param);

    let main_only = roles.main_only();

    let parent_code = VariantOptions::text(&opts.parent_code)
        .map(String::from)
        .unwrap_or_else(|| template[product_code].clone());

    logf!(
        "Variants: rows={} parent={} param={:?} params={} common={} main_only={} labels={} prices={}",
        rows,
        parent_code,
        param.map(|ix| ds.headers[ix].as_str()),
        roles.params.len(),
        common.len(),
        main_only.len(),
        roles.labels.len(),
        roles.prices.len(),
    );

    let plan = Plan {
        roles: &roles,
        product_code,
        parent_code: &parent_code,
        param,
        common: &common,
        main_only: &main_only,
    };

    let merged = match roles.get(Role::Images) {
        Some(ix) => images::merge_unique(ds.column(ix)),
        None => s!(),
    };

    let main = records::synthesize_main(
        &plan,
        template,
        &merged,
        VariantOptions::text(&opts.title),
        VariantOptions::text(&opts.language),
    );

    let mut out_rows = Vec::with_capacity(rows + 1);
    out_rows.push(main);
    out_rows.extend(ds.rows.iter().map(|r| records::synthesize_variant(&plan, r)));

    let name = |ix: usize| ds.headers[ix].clone();
    Ok(VariantBuild {
        dataset: DataSet { headers: ds.headers.clone(), rows: out_rows },
        param: param.map(name),
        common: common.iter().copied().map(name).collect(),
        parent_code,
        notices,
    })
}
