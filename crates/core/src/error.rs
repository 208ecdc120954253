use thiserror::Error;

/// Errors raised while reading disaster rows from CSV.
#[derive(Error, Debug)]
pub enum IngestError {
    /// A non-blank numeric cell could not be parsed.
    #[error("line {line}: invalid {field} value {value:?}")]
    InvalidNumber { line: u64, field: &'static str, value: String },

    /// The CSV itself could not be read (I/O, invalid UTF-8).
    #[error("csv: {0}")]
    Csv(#[from] csv::Error),
}
