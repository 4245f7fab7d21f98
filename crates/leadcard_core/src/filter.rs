use std::collections::BTreeSet;

use crate::BusinessRecord;

/// Sorted distinct non-empty industries across the whole dataset.
pub fn industries(records: &[BusinessRecord]) -> Vec<String> {
    records
        .iter()
        .map(|record| record.industry.as_str())
        .filter(|industry| !industry.is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(ToOwned::to_owned)
        .collect()
}

/// Rows matching `filter` exactly, in source order. `None` keeps every row.
pub fn active_records<'a>(
    records: &'a [BusinessRecord],
    filter: Option<&str>,
) -> Vec<&'a BusinessRecord> {
    match filter {
        Some(industry) => records
            .iter()
            .filter(|record| record.industry == industry)
            .collect(),
        None => records.iter().collect(),
    }
}

/// Treats blank filter values as "no filter".
pub fn normalize_filter(raw: Option<&str>) -> Option<String> {
    raw.map(str::trim)
        .filter(|value| !value.is_empty())
        .map(ToOwned::to_owned)
}
