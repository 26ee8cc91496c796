use thiserror::Error;

/// Errors produced while loading match data or rendering a report.
#[derive(Error, Debug)]
pub enum StatsError {
    #[error("could not read matches file")]
    File(#[from] std::io::Error),

    #[error("could not parse CSV input")]
    Csv(#[from] csv::Error),

    #[error("malformed row at line {line}: {reason}")]
    MalformedRow { line: u64, reason: String },

    #[error("ReportTarget: {0}")]
    Report(String),
}

pub type Result<T> = std::result::Result<T, StatsError>;
