//! CSV ingestion of disaster events.
//!
//! Header names are matched case-insensitively, so column order does not
//! matter and extra columns are ignored. Blank numeric cells fall back to
//! zero; anything else that fails to parse, including a non-finite severity,
//! is an error for the whole batch.

use std::io::Read;

use crate::disaster::NewDisaster;
use crate::error::IngestError;

#[derive(Debug, Default, Clone, Copy)]
struct Columns {
    region: Option<usize>,
    date: Option<usize>,
    severity_score: Option<usize>,
    casualties: Option<usize>,
    displaced: Option<usize>,
}

impl Columns {
    fn from_headers(headers: &csv::StringRecord) -> Self {
        let mut columns = Self::default();
        for (idx, name) in headers.iter().enumerate() {
            let slot = match name.trim_start_matches('\u{feff}').trim().to_ascii_lowercase().as_str() {
                "region" => &mut columns.region,
                "date" => &mut columns.date,
                "severity_score" => &mut columns.severity_score,
                "casualties" => &mut columns.casualties,
                "displaced" => &mut columns.displaced,
                _ => continue,
            };
            // Last duplicate header wins.
            *slot = Some(idx);
        }
        columns
    }
}

/// Iterator over the disaster rows of a CSV document.
///
/// Yields one `Result` per data row; callers decide whether to stop at the
/// first error.
pub struct DisasterRows<R> {
    reader: csv::Reader<R>,
    columns: Columns,
    record: csv::StringRecord,
}

impl<R: Read> std::fmt::Debug for DisasterRows<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DisasterRows").field("columns", &self.columns).finish_non_exhaustive()
    }
}

/// Reads the header row of `input` and returns an iterator over its data rows.
///
/// # Errors
/// Returns error if the header row cannot be read.
pub fn read_disasters<R: Read>(input: R) -> Result<DisasterRows<R>, IngestError> {
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(input);
    let columns = Columns::from_headers(reader.headers()?);
    tracing::debug!(?columns, "CSV header mapped");
    Ok(DisasterRows { reader, columns, record: csv::StringRecord::new() })
}

impl<R: Read> DisasterRows<R> {
    fn parse_record(&self) -> Result<NewDisaster, IngestError> {
        let record = &self.record;
        let line = record.position().map_or(0, csv::Position::line);
        let cell = |idx: Option<usize>| idx.and_then(|i| record.get(i));

        Ok(NewDisaster {
            region: cell(self.columns.region).map(str::to_owned),
            date: cell(self.columns.date).map(str::to_owned),
            severity_score: parse_severity(cell(self.columns.severity_score), line)?,
            casualties: parse_or_zero(cell(self.columns.casualties), line, "casualties")?,
            displaced: parse_or_zero(cell(self.columns.displaced), line, "displaced")?,
        })
    }
}

impl<R: Read> Iterator for DisasterRows<R> {
    type Item = Result<NewDisaster, IngestError>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.reader.read_record(&mut self.record) {
            Ok(true) => Some(self.parse_record()),
            Ok(false) => None,
            Err(e) => Some(Err(e.into())),
        }
    }
}

fn parse_or_zero<T>(value: Option<&str>, line: u64, field: &'static str) -> Result<T, IngestError>
where
    T: std::str::FromStr + Default,
{
    let trimmed = value.map(str::trim).unwrap_or_default();
    if trimmed.is_empty() {
        return Ok(T::default());
    }
    trimmed
        .parse()
        .map_err(|_| IngestError::InvalidNumber { line, field, value: trimmed.to_owned() })
}

/// `nan` and `inf` parse as `f64` but would poison every later estimate.
fn parse_severity(value: Option<&str>, line: u64) -> Result<f64, IngestError> {
    let field = "severity_score";
    let severity: f64 = parse_or_zero(value, line, field)?;
    if severity.is_finite() {
        return Ok(severity);
    }
    let value = value.map(str::trim).unwrap_or_default().to_owned();
    Err(IngestError::InvalidNumber { line, field, value })
}
