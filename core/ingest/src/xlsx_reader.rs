// FILENAME: core/ingest/src/xlsx_reader.rs

use crate::dates;
use crate::IngestError;
use calamine::{open_workbook, Data, Reader, Xlsx};
use chrono::NaiveDate;
use dataset::{columns, Dataset, Record};
use std::io::{Read, Seek};
use std::path::Path;

/// Loads the first worksheet of an XLSX workbook into a dataset.
pub fn load_xlsx(path: &Path) -> Result<Dataset, IngestError> {
    let mut workbook: Xlsx<_> = open_workbook(path)?;
    read_first_sheet(&mut workbook)
}

/// Same as [`load_xlsx`] but from any seekable byte source (remote
/// downloads, uploads held in memory).
pub fn load_xlsx_from_reader<RS: Read + Seek>(reader: RS) -> Result<Dataset, IngestError> {
    let mut workbook: Xlsx<_> = Xlsx::new(reader)?;
    read_first_sheet(&mut workbook)
}

fn read_first_sheet<RS: Read + Seek>(workbook: &mut Xlsx<RS>) -> Result<Dataset, IngestError> {
    let sheet_names = workbook.sheet_names().to_vec();
    let first_sheet = sheet_names
        .first()
        .ok_or_else(|| IngestError::InvalidFormat("Workbook contains no sheets".to_string()))?;

    let range = workbook.worksheet_range(first_sheet)?;
    let mut rows = range.rows();

    let header = rows
        .next()
        .ok_or_else(|| IngestError::InvalidFormat("Worksheet has no header row".to_string()))?;
    let map = ColumnMap::from_header(header)?;

    let mut records = Vec::new();
    for (i, row) in rows.enumerate() {
        // Spreadsheet row numbers are 1-based and row 1 is the header.
        let row_num = i + 2;
        if row.iter().all(|cell| matches!(cell, Data::Empty)) {
            continue;
        }
        records.push(record_from_row(row, &map, row_num)?);
    }

    Ok(Dataset::new(records))
}

// ============================================================================
// COLUMN MAPPING
// ============================================================================

/// Indices of the required columns within the header row.
/// Extra columns in the source (Row ID, Ship Mode, ...) are ignored.
#[derive(Debug)]
struct ColumnMap {
    order_date: usize,
    region: usize,
    state: usize,
    city: usize,
    category: usize,
    sub_category: usize,
    segment: usize,
    sales: usize,
    profit: usize,
    quantity: usize,
}

impl ColumnMap {
    fn from_header(header: &[Data]) -> Result<Self, IngestError> {
        let find = |name: &str| -> Result<usize, IngestError> {
            header
                .iter()
                .position(|cell| matches!(cell, Data::String(s) if s.trim() == name))
                .ok_or_else(|| IngestError::MissingColumn(name.to_string()))
        };

        Ok(ColumnMap {
            order_date: find(columns::ORDER_DATE)?,
            region: find(columns::REGION)?,
            state: find(columns::STATE)?,
            city: find(columns::CITY)?,
            category: find(columns::CATEGORY)?,
            sub_category: find(columns::SUB_CATEGORY)?,
            segment: find(columns::SEGMENT)?,
            sales: find(columns::SALES)?,
            profit: find(columns::PROFIT)?,
            quantity: find(columns::QUANTITY)?,
        })
    }
}

// ============================================================================
// CELL CONVERSION
// ============================================================================

fn record_from_row(row: &[Data], map: &ColumnMap, row_num: usize) -> Result<Record, IngestError> {
    Ok(Record {
        order_date: date_cell(row, map.order_date, row_num, columns::ORDER_DATE)?,
        region: text_cell(row, map.region, row_num, columns::REGION)?,
        state: text_cell(row, map.state, row_num, columns::STATE)?,
        city: text_cell(row, map.city, row_num, columns::CITY)?,
        category: text_cell(row, map.category, row_num, columns::CATEGORY)?,
        sub_category: text_cell(row, map.sub_category, row_num, columns::SUB_CATEGORY)?,
        segment: text_cell(row, map.segment, row_num, columns::SEGMENT)?,
        sales: number_cell(row, map.sales, row_num, columns::SALES)?,
        profit: number_cell(row, map.profit, row_num, columns::PROFIT)?,
        quantity: quantity_cell(row, map.quantity, row_num, columns::QUANTITY)?,
    })
}

fn invalid(row: usize, column: &str, message: impl Into<String>) -> IngestError {
    IngestError::InvalidCell {
        row,
        column: column.to_string(),
        message: message.into(),
    }
}

fn text_cell(row: &[Data], index: usize, row_num: usize, column: &str) -> Result<String, IngestError> {
    match row.get(index) {
        Some(Data::String(s)) if !s.trim().is_empty() => Ok(s.trim().to_string()),
        Some(Data::Empty) | None => Err(invalid(row_num, column, "empty cell")),
        Some(other) => Err(invalid(
            row_num,
            column,
            format!("expected text, found {:?}", other),
        )),
    }
}

fn number_cell(row: &[Data], index: usize, row_num: usize, column: &str) -> Result<f64, IngestError> {
    match row.get(index) {
        Some(Data::Float(f)) => Ok(*f),
        Some(Data::Int(i)) => Ok(*i as f64),
        Some(Data::String(s)) => s
            .trim()
            .parse()
            .map_err(|_| invalid(row_num, column, format!("'{}' is not a number", s))),
        Some(Data::Empty) | None => Err(invalid(row_num, column, "empty cell")),
        Some(other) => Err(invalid(
            row_num,
            column,
            format!("expected a number, found {:?}", other),
        )),
    }
}

fn quantity_cell(row: &[Data], index: usize, row_num: usize, column: &str) -> Result<u32, IngestError> {
    let n = number_cell(row, index, row_num, column)?;
    if n < 0.0 || n.fract() != 0.0 || n > u32::MAX as f64 {
        return Err(invalid(
            row_num,
            column,
            format!("'{}' is not a non-negative integer", n),
        ));
    }
    Ok(n as u32)
}

fn date_cell(
    row: &[Data],
    index: usize,
    row_num: usize,
    column: &str,
) -> Result<NaiveDate, IngestError> {
    match row.get(index) {
        Some(Data::DateTime(dt)) => dates::date_from_excel_serial(dt.as_f64())
            .ok_or_else(|| invalid(row_num, column, "date serial out of range")),
        Some(Data::Float(f)) => dates::date_from_excel_serial(*f)
            .ok_or_else(|| invalid(row_num, column, "date serial out of range")),
        Some(Data::Int(i)) => dates::date_from_excel_serial(*i as f64)
            .ok_or_else(|| invalid(row_num, column, "date serial out of range")),
        Some(Data::String(s)) => dates::parse_date(s)
            .ok_or_else(|| invalid(row_num, column, format!("unrecognized date '{}'", s))),
        Some(Data::DateTimeIso(s)) => dates::parse_date(s)
            .ok_or_else(|| invalid(row_num, column, format!("unrecognized date '{}'", s))),
        Some(Data::Empty) | None => Err(invalid(row_num, column, "empty cell")),
        Some(other) => Err(invalid(
            row_num,
            column,
            format!("expected a date, found {:?}", other),
        )),
    }
}
