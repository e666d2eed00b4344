//! FILENAME: core/ingest/src/error.rs

use thiserror::Error;

#[derive(Error, Debug)]
pub enum IngestError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("XLSX read error: {0}")]
    Xlsx(#[from] calamine::XlsxError),

    #[error("CSV read error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid file format: {0}")]
    InvalidFormat(String),

    #[error("Missing required column: {0}")]
    MissingColumn(String),

    #[error("Invalid value in row {row}, column {column}: {message}")]
    InvalidCell {
        row: usize,
        column: String,
        message: String,
    },
}
