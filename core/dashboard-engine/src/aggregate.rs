//! FILENAME: core/dashboard-engine/src/aggregate.rs
//! Group-and-sum over filtered rows.
//!
//! Every chart-feeding table is one call to [`aggregate_sum`]: group the
//! rows by a short categorical key, sum one metric per group. Tables are
//! recomputed in full on every selection change; nothing is cached.

use dataset::Record;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Grouping key: one to three categorical labels, outer field first.
pub type GroupKey = SmallVec<[String; 3]>;

// ============================================================================
// DERIVED TABLE
// ============================================================================

/// One aggregated row: the grouping key plus the summed metric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableRow {
    pub key: GroupKey,
    pub value: f64,
}

/// A group-and-sum result, ready for display or CSV export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DerivedTable {
    /// Column names of the grouping key, in key order.
    pub key_fields: SmallVec<[String; 3]>,
    /// Name of the summed metric column.
    pub value_field: String,
    /// One row per distinct key, ascending by key.
    pub rows: Vec<TableRow>,
}

impl DerivedTable {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Sum over all groups. Equals the metric total of the input rows.
    pub fn total(&self) -> f64 {
        self.rows.iter().map(|row| row.value).sum()
    }

    /// Looks up a group by its full key.
    pub fn get(&self, key: &[&str]) -> Option<f64> {
        self.rows
            .iter()
            .find(|row| row.key.iter().map(String::as_str).eq(key.iter().copied()))
            .map(|row| row.value)
    }
}

// ============================================================================
// AGGREGATION
// ============================================================================

/// Groups `rows` by the key produced by `key_fn` and sums `metric_fn` per
/// group. Output rows are sorted ascending by key.
pub fn aggregate_sum<'a>(
    rows: &[&'a Record],
    key_fields: &[&str],
    key_fn: impl Fn(&Record) -> GroupKey,
    value_field: &str,
    metric_fn: impl Fn(&Record) -> f64,
) -> DerivedTable {
    let mut sums: FxHashMap<GroupKey, f64> = FxHashMap::default();
    for record in rows {
        *sums.entry(key_fn(record)).or_insert(0.0) += metric_fn(record);
    }

    let mut out: Vec<TableRow> = sums
        .into_iter()
        .map(|(key, value)| TableRow { key, value })
        .collect();
    out.sort_by(|a, b| a.key.cmp(&b.key));

    DerivedTable {
        key_fields: key_fields.iter().map(|f| f.to_string()).collect(),
        value_field: value_field.to_string(),
        rows: out,
    }
}
