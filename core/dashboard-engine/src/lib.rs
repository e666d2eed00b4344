//! FILENAME: core/dashboard-engine/src/lib.rs
//! Filter-and-aggregate subsystem for the sales dashboard.
//!
//! This crate turns the raw dataset plus the operator's filter selections
//! into the derived tables every chart displays. It depends on `dataset`
//! only for the record model.
//!
//! Layers:
//! - `selection`: Serializable user intent (what the filters ARE)
//! - `filter`: Row filtering (WHICH rows survive)
//! - `aggregate`, `monthly`, `pivot`: Calculation (HOW we sum)
//! - `view`: Derived outputs for the rendering collaborator (WHAT we display)
//! - `export`: Named CSV artifacts offered for download

pub mod aggregate;
pub mod export;
pub mod filter;
pub mod monthly;
pub mod pivot;
pub mod selection;
pub mod view;

pub use aggregate::{aggregate_sum, DerivedTable, GroupKey, TableRow};
pub use export::{
    artifacts, dataset_csv, derived_table_csv, time_series_csv, CsvArtifact, CATEGORY_CSV,
    DATA_CSV, REGION_CSV, TIME_SERIES_CSV,
};
pub use filter::{apply_date_range, apply_geo_filter, filter_rows};
pub use monthly::{month_name, sales_by_month, MonthKey, TimeSeries, TimeSeriesPoint};
pub use pivot::{sub_category_month_pivot, MonthPivot, MonthPivotRow};
pub use selection::{DateRange, FilterSelection, GeoSelection};
pub use view::{DashboardTables, PreviewRow, SamplePreview, ScatterPoint, PREVIEW_ROW_LIMIT};
