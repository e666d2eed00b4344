//! FILENAME: core/dashboard-engine/src/pivot.rs
//! Sub-Category x month pivot table.
//!
//! Rows are sub-categories, columns are calendar month NAMES: months from
//! different years fold into the same column. Cells with no matching rows
//! are absent, not zero.

use crate::monthly::month_name;
use chrono::Datelike;
use dataset::Record;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// One pivot row: a sub-category and its per-month sales.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthPivotRow {
    pub sub_category: String,
    /// One cell per entry in [`MonthPivot::months`]; `None` where no row
    /// matched the intersection.
    pub cells: Vec<Option<f64>>,
}

/// The full pivot: sub-categories ascending, months in calendar order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MonthPivot {
    /// Calendar month numbers (1-12) present in the input, ascending.
    pub months: Vec<u32>,
    pub rows: Vec<MonthPivotRow>,
}

impl MonthPivot {
    /// Column headers: full month names matching `months`.
    pub fn month_names(&self) -> Vec<&'static str> {
        self.months.iter().map(|&m| month_name(m)).collect()
    }

    pub fn cell(&self, sub_category: &str, month: u32) -> Option<f64> {
        let col = self.months.iter().position(|&m| m == month)?;
        self.rows
            .iter()
            .find(|row| row.sub_category == sub_category)
            .and_then(|row| row.cells[col])
    }

    /// Sum over every present cell.
    pub fn total(&self) -> f64 {
        self.rows
            .iter()
            .flat_map(|row| row.cells.iter().flatten())
            .sum()
    }
}

/// Builds the pivot from the filtered rows.
pub fn sub_category_month_pivot(rows: &[&Record]) -> MonthPivot {
    let mut sums: FxHashMap<(String, u32), f64> = FxHashMap::default();
    for record in rows {
        let key = (record.sub_category.clone(), record.order_date.month());
        *sums.entry(key).or_insert(0.0) += record.sales;
    }

    let mut months: Vec<u32> = sums.keys().map(|(_, month)| *month).collect();
    months.sort_unstable();
    months.dedup();

    let mut sub_categories: Vec<String> = sums.keys().map(|(sub, _)| sub.clone()).collect();
    sub_categories.sort_unstable();
    sub_categories.dedup();

    let rows = sub_categories
        .into_iter()
        .map(|sub_category| {
            let cells = months
                .iter()
                .map(|month| sums.get(&(sub_category.clone(), *month)).copied())
                .collect();
            MonthPivotRow {
                sub_category,
                cells,
            }
        })
        .collect();

    MonthPivot { months, rows }
}
