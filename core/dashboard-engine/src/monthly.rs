//! FILENAME: core/dashboard-engine/src/monthly.rs
//! Month bucketing for the time-series aggregation.
//!
//! Records are bucketed by truncating their order date to the calendar
//! month. The display label is `"YYYY : Mon"`; abbreviated month names do
//! not sort chronologically, so ordering always goes through the underlying
//! `(year, month)` pair and never through the label.

use chrono::{Datelike, NaiveDate};
use dataset::Record;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

const MONTH_ABBREV: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Full name of a calendar month (1-12).
pub fn month_name(month: u32) -> &'static str {
    MONTH_NAMES[(month - 1) as usize]
}

// ============================================================================
// MONTH KEY
// ============================================================================

/// A calendar month. The derived `Ord` is chronological (year first).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct MonthKey {
    pub year: i32,
    pub month: u32,
}

impl MonthKey {
    pub fn of(date: NaiveDate) -> Self {
        MonthKey {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Display label in the dashboard's `"YYYY : Mon"` form.
    pub fn label(&self) -> String {
        format!("{} : {}", self.year, MONTH_ABBREV[(self.month - 1) as usize])
    }

    pub fn month_name(&self) -> &'static str {
        month_name(self.month)
    }
}

// ============================================================================
// TIME SERIES
// ============================================================================

/// One month of summed sales.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSeriesPoint {
    pub month: MonthKey,
    /// Pre-formatted label for the chart axis and the CSV export.
    pub label: String,
    pub sales: f64,
}

/// Monthly sales, chronologically ordered.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TimeSeries {
    pub points: Vec<TimeSeriesPoint>,
}

impl TimeSeries {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn total(&self) -> f64 {
        self.points.iter().map(|point| point.sales).sum()
    }
}

/// Sums sales per calendar month over the filtered rows.
pub fn sales_by_month(rows: &[&Record]) -> TimeSeries {
    let mut sums: FxHashMap<MonthKey, f64> = FxHashMap::default();
    for record in rows {
        *sums.entry(MonthKey::of(record.order_date)).or_insert(0.0) += record.sales;
    }

    let mut buckets: Vec<(MonthKey, f64)> = sums.into_iter().collect();
    buckets.sort_by_key(|(month, _)| *month);

    TimeSeries {
        points: buckets
            .into_iter()
            .map(|(month, sales)| TimeSeriesPoint {
                label: month.label(),
                month,
                sales,
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(date: &str, sales: f64) -> Record {
        Record {
            order_date: date.parse().unwrap(),
            region: "East".to_string(),
            state: "NY".to_string(),
            city: "NYC".to_string(),
            category: "Tech".to_string(),
            sub_category: "Phones".to_string(),
            segment: "Consumer".to_string(),
            sales,
            profit: 0.0,
            quantity: 1,
        }
    }

    #[test]
    fn label_uses_abbreviated_month() {
        let key = MonthKey { year: 2023, month: 1 };
        assert_eq!(key.label(), "2023 : Jan");
        assert_eq!(key.month_name(), "January");
    }

    #[test]
    fn series_is_chronological_even_where_labels_are_not() {
        // "2022 : Dec" < "2023 : Apr" < "2023 : Jan" lexically; the series
        // must come out Dec 2022, Jan 2023, Apr 2023.
        let records = vec![
            record("2023-04-05", 10.0),
            record("2022-12-25", 20.0),
            record("2023-01-15", 30.0),
            record("2023-01-20", 5.0),
        ];
        let rows: Vec<&Record> = records.iter().collect();
        let series = sales_by_month(&rows);

        let labels: Vec<&str> = series.points.iter().map(|p| p.label.as_str()).collect();
        assert_eq!(labels, vec!["2022 : Dec", "2023 : Jan", "2023 : Apr"]);

        let keys: Vec<MonthKey> = series.points.iter().map(|p| p.month).collect();
        assert!(keys.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn months_accumulate_their_rows() {
        let records = vec![record("2023-01-15", 100.0), record("2023-01-31", 30.0)];
        let rows: Vec<&Record> = records.iter().collect();
        let series = sales_by_month(&rows);
        assert_eq!(series.len(), 1);
        assert_eq!(series.points[0].sales, 130.0);
        assert_eq!(series.total(), 130.0);
    }

    #[test]
    fn empty_rows_yield_empty_series() {
        assert!(sales_by_month(&[]).is_empty());
    }
}
