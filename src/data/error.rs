use std::path::PathBuf;

use thiserror::Error;

/// The upload could not be turned into a table.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("No columns to parse from file")]
    Empty,

    #[error("{0}")]
    Csv(#[from] csv::Error),

    #[error("reading {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// The requested scatter axes cannot be plotted.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectionError {
    #[error("Need at least 2 numeric columns for visualization (found {found})")]
    TooFewNumericColumns { found: usize },

    #[error("Column '{column}' is not a numeric column")]
    NotNumeric { column: String },
}
