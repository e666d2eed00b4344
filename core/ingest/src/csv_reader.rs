//! FILENAME: core/ingest/src/csv_reader.rs
//! CSV loader for the sales record schema.
//!
//! Columns are matched by exact, case-sensitive header name; extra columns
//! are ignored. Loading is fail-fast: the first malformed row aborts the
//! whole load with a line-numbered error.

use crate::dates;
use crate::IngestError;
use chrono::NaiveDate;
use dataset::{columns, Dataset, Record};
use serde::{Deserialize, Deserializer};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Loads a CSV file into a dataset.
pub fn load_csv(path: &Path) -> Result<Dataset, IngestError> {
    let file = File::open(path)?;
    load_csv_from_reader(file)
}

/// Loads CSV content from any byte source.
pub fn load_csv_from_reader<R: Read>(reader: R) -> Result<Dataset, IngestError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    for required in columns::ALL {
        if !headers.iter().any(|h| h == required) {
            return Err(IngestError::MissingColumn(required.to_string()));
        }
    }

    let mut records = Vec::new();
    for row in csv_reader.deserialize() {
        let row: CsvRow = row?;
        records.push(row.into());
    }

    Ok(Dataset::new(records))
}

/// One CSV line in the external schema. Field names bind to the exact
/// column headers; the struct only exists to drive serde.
#[derive(Debug, Deserialize)]
struct CsvRow {
    #[serde(rename = "Order Date", deserialize_with = "de_order_date")]
    order_date: NaiveDate,
    #[serde(rename = "Region")]
    region: String,
    #[serde(rename = "State")]
    state: String,
    #[serde(rename = "City")]
    city: String,
    #[serde(rename = "Category")]
    category: String,
    #[serde(rename = "Sub-Category")]
    sub_category: String,
    #[serde(rename = "Segment")]
    segment: String,
    #[serde(rename = "Sales")]
    sales: f64,
    #[serde(rename = "Profit")]
    profit: f64,
    #[serde(rename = "Quantity")]
    quantity: u32,
}

impl From<CsvRow> for Record {
    fn from(row: CsvRow) -> Self {
        Record {
            order_date: row.order_date,
            region: row.region,
            state: row.state,
            city: row.city,
            category: row.category,
            sub_category: row.sub_category,
            segment: row.segment,
            sales: row.sales,
            profit: row.profit,
            quantity: row.quantity,
        }
    }
}

fn de_order_date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let text = String::deserialize(deserializer)?;
    dates::parse_date(&text).ok_or_else(|| {
        serde::de::Error::custom(format!(
            "unrecognized date '{}' (expected YYYY-MM-DD, M/D/YYYY or D-M-YYYY)",
            text
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = "\
Order Date,Region,State,City,Category,Sub-Category,Segment,Sales,Profit,Quantity
2023-01-15,East,New York,New York City,Technology,Phones,Consumer,100.5,12.25,3
2/10/2023,West,California,Los Angeles,Furniture,Chairs,Corporate,50,5,1
";

    #[test]
    fn loads_rows_in_order() {
        let data = load_csv_from_reader(SAMPLE.as_bytes()).unwrap();
        assert_eq!(data.len(), 2);
        let first = &data.records()[0];
        assert_eq!(first.city, "New York City");
        assert_eq!(first.sales, 100.5);
        let second = &data.records()[1];
        assert_eq!(
            second.order_date,
            NaiveDate::from_ymd_opt(2023, 2, 10).unwrap()
        );
    }

    #[test]
    fn extra_columns_are_ignored() {
        let csv = "\
Row ID,Order Date,Region,State,City,Category,Sub-Category,Segment,Sales,Profit,Quantity
1,2023-01-15,East,New York,Albany,Technology,Phones,Consumer,30,3,1
";
        let data = load_csv_from_reader(csv.as_bytes()).unwrap();
        assert_eq!(data.len(), 1);
        assert_eq!(data.records()[0].city, "Albany");
    }

    #[test]
    fn missing_column_is_reported_by_name() {
        let csv = "Order Date,Region,State,City,Category,Sub-Category,Sales,Profit,Quantity\n";
        let err = load_csv_from_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, IngestError::MissingColumn(c) if c == "Segment"));
    }

    #[test]
    fn bad_date_aborts_the_load() {
        let csv = "\
Order Date,Region,State,City,Category,Sub-Category,Segment,Sales,Profit,Quantity
someday,East,New York,Albany,Technology,Phones,Consumer,30,3,1
";
        let err = load_csv_from_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, IngestError::Csv(_)));
        assert!(err.to_string().contains("unrecognized date"));
    }

    #[test]
    fn loads_from_a_file_on_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();
        let data = load_csv(file.path()).unwrap();
        assert_eq!(data.len(), 2);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = load_csv(Path::new("/definitely/not/here.csv")).unwrap_err();
        assert!(matches!(err, IngestError::Io(_)));
    }
}
