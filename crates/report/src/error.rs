//! Error types for report construction.

use chrono::NaiveDate;
use thiserror::Error;

/// Errors that can occur while building reports.
#[derive(Error, Debug)]
pub enum ReportError {
    /// Sprint end date precedes the start date.
    #[error("Invalid sprint range: {start} to {end}")]
    InvalidRange { start: NaiveDate, end: NaiveDate },

    /// Sprint start and end are the same day, so the daily burn rate is
    /// undefined.
    #[error("Zero-length sprint starting {0}: cannot compute a daily burn rate")]
    ZeroLengthSprint(NaiveDate),

    /// Total estimated points are zero, so completion percentages are
    /// undefined.
    #[error("Total estimated points are zero: cannot compute completion percentages")]
    ZeroTotalEstimate,

    /// A date could not be parsed.
    #[error("Invalid date '{value}': expected YYYY-MM-DD")]
    DateParse { value: String },

    /// A numeric field could not be parsed.
    #[error("Invalid numeric field '{value}'")]
    NumberParse { value: String },

    /// A report table could not be written or read.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// I/O failure on a report file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
