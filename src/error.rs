use std::path::PathBuf;

use thiserror::Error;

/// Every failure that terminates a dashboard load/run.
///
/// Row-level problems (an unparseable date, a missing price) are not
/// represented here: they are handled by dropping the row or omitting the
/// value.
#[derive(Error, Debug)]
pub enum DashboardError {
    #[error("file '{}' not found", .0.display())]
    FileNotFound(PathBuf),

    #[error("dataset is empty: {0}")]
    EmptyDataset(String),

    #[error("date column not found in the data for region {region}")]
    DateColumnNotFound { region: String },

    #[error("row on line {line} has {found} fields but the header has {expected}")]
    RowTooLong {
        line: u64,
        expected: usize,
        found: usize,
    },

    #[error("duplicate column '{0}' after trimming header whitespace")]
    DuplicateColumn(String),

    #[error("no commodity columns recognised in the data")]
    NoCommodityColumns,

    #[error("unknown region '{0}'")]
    UnknownRegion(String),

    #[error("configuration error: {0}")]
    Configuration(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Serde(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, DashboardError>;
