//! FILENAME: core/dashboard-engine/src/filter.rs
//! Row filtering - a pure pipeline over borrowed rows.
//!
//! Each stage takes the previous row set and returns a new one; the source
//! dataset is never touched. Zero surviving rows is a normal outcome, not an
//! error.

use crate::selection::{DateRange, FilterSelection, GeoSelection};
use dataset::{Dataset, Record};

/// Keeps records whose order date falls inside the inclusive range,
/// preserving original order. An inverted range yields an empty result.
pub fn apply_date_range<'a>(records: &'a [Record], range: &DateRange) -> Vec<&'a Record> {
    records
        .iter()
        .filter(|record| range.contains(record.order_date))
        .collect()
}

/// Keeps rows matching every non-empty geographic set. With all three sets
/// empty this is the identity.
pub fn apply_geo_filter<'a>(rows: &[&'a Record], geo: &GeoSelection) -> Vec<&'a Record> {
    if geo.is_wildcard() {
        return rows.to_vec();
    }
    rows.iter()
        .copied()
        .filter(|record| geo.matches(record))
        .collect()
}

/// The full filter pass: date range first, then the geographic conjunction.
pub fn filter_rows<'a>(dataset: &'a Dataset, selection: &FilterSelection) -> Vec<&'a Record> {
    let dated = apply_date_range(dataset.records(), &selection.dates);
    apply_geo_filter(&dated, &selection.geo)
}
