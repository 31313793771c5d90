// src/variants/common.rs
use std::collections::HashSet;

use crate::data::DataSet;

/// PARAMETER columns whose non-empty (trimmed) values collapse to at most one
/// distinct value across all rows. "Only one row filled in, rest blank" counts
/// as common on purpose: that value describes the whole product.
///
/// Needs the full column, so it runs once before any row is rewritten.
pub fn common_parameter_columns(ds: &DataSet, params: &[usize]) -> Vec<usize> {
    params
        .iter()
        .copied()
        .filter(|&col| is_common(ds, col))
        .collect()
}

fn is_common(ds: &DataSet, col: usize) -> bool {
    let mut seen: HashSet<&str> = HashSet::new();
    for v in ds.column(col).map(str::trim).filter(|v| !v.is_empty()) {
        seen.insert(v);
        if seen.len() > 1 {
            return false;
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ds(rows: Vec<Vec<String>>) -> DataSet {
        DataSet::new(row!["[PARAMETER „Veľkosť“]", "[PARAMETER „Materiál“]"], rows)
    }

    #[test]
    fn distinct_values_are_not_common() {
        let d = ds(vec![row!["S", "cotton"], row!["M", "cotton"], row!["L", "cotton"]]);
        assert_eq!(common_parameter_columns(&d, &[0, 1]), vec![1]);
    }

    #[test]
    fn single_filled_value_is_common() {
        let d = ds(vec![row!["S", ""], row!["M", " wool "], row!["L", ""]]);
        assert_eq!(common_parameter_columns(&d, &[0, 1]), vec![1]);
    }

    #[test]
    fn all_blank_is_common() {
        let d = ds(vec![row!["S", " "], row!["M", ""]]);
        assert_eq!(common_parameter_columns(&d, &[1]), vec![1]);
    }

    #[test]
    fn whitespace_does_not_make_values_distinct() {
        let d = ds(vec![row!["X ", ""], row![" X", ""]]);
        assert_eq!(common_parameter_columns(&d, &[0]), vec![0]);
    }
}
