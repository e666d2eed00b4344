//! FILENAME: core/dashboard-engine/src/export.rs
//! CSV artifacts offered for download.
//!
//! Comma-separated, UTF-8, `\n` line terminators, header row first. Numbers
//! are written with their shortest display form. The month label in the
//! time-series export is plain text.

use crate::aggregate::DerivedTable;
use crate::monthly::TimeSeries;
use crate::view::DashboardTables;
use dataset::{columns, Dataset};
use serde::{Deserialize, Serialize};

pub const CATEGORY_CSV: &str = "Category.csv";
pub const REGION_CSV: &str = "Region.csv";
pub const TIME_SERIES_CSV: &str = "TimeSeries.csv";
pub const DATA_CSV: &str = "Data.csv";

/// A named downloadable CSV payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CsvArtifact {
    pub file_name: &'static str,
    pub bytes: Vec<u8>,
}

/// The four named artifacts the dashboard offers: the category and region
/// tables, the time series, and the full unfiltered dataset.
pub fn artifacts(dataset: &Dataset, tables: &DashboardTables) -> Vec<CsvArtifact> {
    vec![
        CsvArtifact {
            file_name: CATEGORY_CSV,
            bytes: derived_table_csv(&tables.sales_by_category),
        },
        CsvArtifact {
            file_name: REGION_CSV,
            bytes: derived_table_csv(&tables.sales_by_region),
        },
        CsvArtifact {
            file_name: TIME_SERIES_CSV,
            bytes: time_series_csv(&tables.sales_over_time),
        },
        CsvArtifact {
            file_name: DATA_CSV,
            bytes: dataset_csv(dataset),
        },
    ]
}

/// Serializes a group-and-sum table: key columns then the metric column.
pub fn derived_table_csv(table: &DerivedTable) -> Vec<u8> {
    write_derived(table).unwrap_or_default()
}

/// Serializes the time series with the month label stored as plain text.
pub fn time_series_csv(series: &TimeSeries) -> Vec<u8> {
    write_time_series(series).unwrap_or_default()
}

/// Serializes the full dataset, all ten schema columns in schema order.
pub fn dataset_csv(dataset: &Dataset) -> Vec<u8> {
    write_dataset(dataset).unwrap_or_default()
}

fn write_derived(table: &DerivedTable) -> csv::Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    let mut header: Vec<String> = table.key_fields.iter().cloned().collect();
    header.push(table.value_field.clone());
    writer.write_record(&header)?;

    for row in &table.rows {
        let mut fields: Vec<String> = row.key.iter().cloned().collect();
        fields.push(row.value.to_string());
        writer.write_record(&fields)?;
    }

    finish(writer)
}

fn write_time_series(series: &TimeSeries) -> csv::Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(["month_year", columns::SALES])?;
    for point in &series.points {
        let sales = point.sales.to_string();
        writer.write_record([point.label.as_str(), sales.as_str()])?;
    }
    finish(writer)
}

fn write_dataset(dataset: &Dataset) -> csv::Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(columns::ALL)?;
    for record in dataset.records() {
        writer.write_record([
            record.order_date.format("%Y-%m-%d").to_string(),
            record.region.clone(),
            record.state.clone(),
            record.city.clone(),
            record.category.clone(),
            record.sub_category.clone(),
            record.segment.clone(),
            record.sales.to_string(),
            record.profit.to_string(),
            record.quantity.to_string(),
        ])?;
    }
    finish(writer)
}

fn finish(writer: csv::Writer<Vec<u8>>) -> csv::Result<Vec<u8>> {
    writer
        .into_inner()
        .map_err(|e| csv::Error::from(e.into_error()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::TableRow;
    use crate::monthly::{MonthKey, TimeSeriesPoint};
    use dataset::Record;
    use smallvec::smallvec;

    #[test]
    fn derived_table_bytes_are_exact() {
        let table = DerivedTable {
            key_fields: smallvec!["Category".to_string()],
            value_field: "Sales".to_string(),
            rows: vec![
                TableRow {
                    key: smallvec!["Furniture".to_string()],
                    value: 50.0,
                },
                TableRow {
                    key: smallvec!["Tech".to_string()],
                    value: 130.5,
                },
            ],
        };
        let bytes = derived_table_csv(&table);
        assert_eq!(
            String::from_utf8(bytes).unwrap(),
            "Category,Sales\nFurniture,50\nTech,130.5\n"
        );
    }

    #[test]
    fn time_series_header_and_labels() {
        let series = TimeSeries {
            points: vec![
                TimeSeriesPoint {
                    month: MonthKey { year: 2022, month: 12 },
                    label: "2022 : Dec".to_string(),
                    sales: 20.0,
                },
                TimeSeriesPoint {
                    month: MonthKey { year: 2023, month: 1 },
                    label: "2023 : Jan".to_string(),
                    sales: 130.0,
                },
            ],
        };
        let bytes = time_series_csv(&series);
        assert_eq!(
            String::from_utf8(bytes).unwrap(),
            "month_year,Sales\n2022 : Dec,20\n2023 : Jan,130\n"
        );
    }

    #[test]
    fn dataset_export_uses_the_external_schema() {
        let data = Dataset::new(vec![Record {
            order_date: "2023-01-15".parse().unwrap(),
            region: "East".to_string(),
            state: "NY".to_string(),
            city: "NYC".to_string(),
            category: "Tech".to_string(),
            sub_category: "Phones".to_string(),
            segment: "Consumer".to_string(),
            sales: 100.5,
            profit: 12.25,
            quantity: 3,
        }]);
        let text = String::from_utf8(dataset_csv(&data)).unwrap();
        let mut lines = text.lines();
        assert_eq!(
            lines.next().unwrap(),
            "Order Date,Region,State,City,Category,Sub-Category,Segment,Sales,Profit,Quantity"
        );
        assert_eq!(
            lines.next().unwrap(),
            "2023-01-15,East,NY,NYC,Tech,Phones,Consumer,100.5,12.25,3"
        );
        assert!(lines.next().is_none());
    }

    #[test]
    fn fields_containing_commas_are_quoted() {
        let table = DerivedTable {
            key_fields: smallvec!["City".to_string()],
            value_field: "Sales".to_string(),
            rows: vec![TableRow {
                key: smallvec!["Washington, D.C.".to_string()],
                value: 10.0,
            }],
        };
        let text = String::from_utf8(derived_table_csv(&table)).unwrap();
        assert_eq!(text, "City,Sales\n\"Washington, D.C.\",10\n");
    }

    #[test]
    fn artifact_names_are_fixed() {
        let data = Dataset::default();
        let tables = DashboardTables::from_rows(&[]);
        let names: Vec<&str> = artifacts(&data, &tables)
            .iter()
            .map(|a| a.file_name)
            .collect();
        assert_eq!(
            names,
            vec!["Category.csv", "Region.csv", "TimeSeries.csv", "Data.csv"]
        );
    }
}
