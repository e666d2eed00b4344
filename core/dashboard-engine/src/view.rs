//! FILENAME: core/dashboard-engine/src/view.rs
//! Dashboard View - every derived output for one filter selection.
//!
//! This is what the rendering collaborator consumes verbatim: the fixed
//! sequence of aggregate tables plus the preview slice and the raw scatter
//! triples. Everything is recomputed from scratch on every selection change.

use crate::aggregate::{aggregate_sum, DerivedTable};
use crate::filter::filter_rows;
use crate::monthly::{sales_by_month, TimeSeries};
use crate::pivot::{sub_category_month_pivot, MonthPivot};
use crate::selection::FilterSelection;
use dataset::{columns, Dataset, Record};
use serde::{Deserialize, Serialize};
use smallvec::smallvec;

/// Rows shown in the preview table.
pub const PREVIEW_ROW_LIMIT: usize = 5;

// ============================================================================
// PREVIEW AND SCATTER
// ============================================================================

/// One preview line: the fixed column subset of a record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreviewRow {
    pub region: String,
    pub state: String,
    pub city: String,
    pub category: String,
    pub sales: f64,
    pub profit: f64,
    pub quantity: u32,
}

impl From<&Record> for PreviewRow {
    fn from(record: &Record) -> Self {
        PreviewRow {
            region: record.region.clone(),
            state: record.state.clone(),
            city: record.city.clone(),
            category: record.category.clone(),
            sales: record.sales,
            profit: record.profit,
            quantity: record.quantity,
        }
    }
}

/// First rows of the filtered set; pure slicing, no aggregation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SamplePreview {
    pub rows: Vec<PreviewRow>,
}

/// (Sales, Profit, Quantity) triple for the scatter chart, unaggregated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScatterPoint {
    pub sales: f64,
    pub profit: f64,
    pub quantity: u32,
}

// ============================================================================
// DASHBOARD TABLES
// ============================================================================

/// The fixed collection of derived tables driving the charts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardTables {
    /// Sales by Category (bar chart).
    pub sales_by_category: DerivedTable,
    /// Sales by Region (donut chart).
    pub sales_by_region: DerivedTable,
    /// Monthly sales (line chart), chronological.
    pub sales_over_time: TimeSeries,
    /// Sales by Region > Category > Sub-Category (treemap drill-down).
    pub sales_hierarchy: DerivedTable,
    /// Sales by Segment (pie chart).
    pub sales_by_segment: DerivedTable,
    /// Sales by Category again, for the second pie chart. Same contents as
    /// `sales_by_category`.
    pub category_share: DerivedTable,
    /// Sub-Category x month-name pivot.
    pub sub_category_months: MonthPivot,
    /// First rows of the filtered set for preview display.
    pub preview: SamplePreview,
    /// Raw (Sales, Profit, Quantity) triples of the filtered rows.
    pub scatter: Vec<ScatterPoint>,
}

impl DashboardTables {
    /// Runs the full pipeline: date filter, geographic filter, then every
    /// derived table, in one synchronous pass.
    pub fn compute(dataset: &Dataset, selection: &FilterSelection) -> Self {
        let rows = filter_rows(dataset, selection);
        Self::from_rows(&rows)
    }

    /// Builds all derived tables from an already-filtered row set.
    pub fn from_rows(rows: &[&Record]) -> Self {
        let sales_by_category = aggregate_sum(
            rows,
            &[columns::CATEGORY],
            |r| smallvec![r.category.clone()],
            columns::SALES,
            |r| r.sales,
        );

        let sales_by_region = aggregate_sum(
            rows,
            &[columns::REGION],
            |r| smallvec![r.region.clone()],
            columns::SALES,
            |r| r.sales,
        );

        let sales_hierarchy = aggregate_sum(
            rows,
            &[columns::REGION, columns::CATEGORY, columns::SUB_CATEGORY],
            |r| {
                smallvec![
                    r.region.clone(),
                    r.category.clone(),
                    r.sub_category.clone()
                ]
            },
            columns::SALES,
            |r| r.sales,
        );

        let sales_by_segment = aggregate_sum(
            rows,
            &[columns::SEGMENT],
            |r| smallvec![r.segment.clone()],
            columns::SALES,
            |r| r.sales,
        );

        let category_share = sales_by_category.clone();

        DashboardTables {
            sales_by_category,
            sales_by_region,
            sales_over_time: sales_by_month(rows),
            sales_hierarchy,
            sales_by_segment,
            category_share,
            sub_category_months: sub_category_month_pivot(rows),
            preview: SamplePreview {
                rows: rows
                    .iter()
                    .take(PREVIEW_ROW_LIMIT)
                    .map(|r| PreviewRow::from(*r))
                    .collect(),
            },
            scatter: rows
                .iter()
                .map(|r| ScatterPoint {
                    sales: r.sales,
                    profit: r.profit,
                    quantity: r.quantity,
                })
                .collect(),
        }
    }
}
