//! FILENAME: core/ingest/src/dates.rs
//! Order-date parsing shared by the XLSX and CSV readers.

use chrono::NaiveDate;

/// Textual formats accepted for order dates, tried in order.
const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%m/%d/%Y", "%d-%m-%Y"];

/// Parses a textual date. Timestamps like `2023-01-15 00:00:00` carry the
/// date in their first token; the time part is discarded.
pub(crate) fn parse_date(text: &str) -> Option<NaiveDate> {
    let date_part = text.trim().split_whitespace().next()?;
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(date_part, format).ok())
}

/// Converts an Excel serial date number to a calendar date.
/// Excel's day 0 is 1899-12-30; fractional time-of-day is discarded.
pub(crate) fn date_from_excel_serial(serial: f64) -> Option<NaiveDate> {
    if !serial.is_finite() {
        return None;
    }
    let epoch = NaiveDate::from_ymd_opt(1899, 12, 30)?;
    epoch.checked_add_signed(chrono::Duration::days(serial.floor() as i64))
}
