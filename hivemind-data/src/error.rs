//! Error types produced while reading and writing the CSV tables.

use std::io;

use camino::Utf8PathBuf;
use hivemind_core::{RatingParseError, RatingsTableError};
use thiserror::Error;

/// Errors raised by the tabular readers and writers.
///
/// `origin` names the file being processed, or `<input>`/`<output>` when the
/// caller supplied a reader or writer directly. Line numbers are 1-based and
/// count the header row.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DataError {
    /// An input file could not be opened.
    #[error("failed to open {path}: {source}")]
    Open {
        /// File that failed to open.
        path: Utf8PathBuf,
        /// Underlying IO failure.
        source: io::Error,
    },
    /// The output file could not be created.
    #[error("failed to create {path}: {source}")]
    Create {
        /// File that failed to be created.
        path: Utf8PathBuf,
        /// Underlying IO failure.
        source: io::Error,
    },
    /// The CSV stream could not be decoded.
    #[error("{origin}:{line}: malformed CSV: {source}")]
    Csv {
        /// Input being read.
        origin: String,
        /// Line where decoding failed.
        line: u64,
        /// Decoder failure.
        source: csv::Error,
    },
    /// A required column is absent from the header row.
    #[error("{origin}: missing required column `{column}`")]
    MissingColumn {
        /// Input being read.
        origin: String,
        /// Name of the missing column.
        column: &'static str,
    },
    /// An identifier cell is not an unsigned integer.
    #[error("{origin}:{line}: `{value}` in column `{column}` is not a valid id")]
    MalformedId {
        /// Input being read.
        origin: String,
        /// Offending line.
        line: u64,
        /// Column holding the id.
        column: &'static str,
        /// Raw cell contents.
        value: String,
    },
    /// A rating cell lies outside the scheme.
    #[error("{origin}:{line}: {source}")]
    InvalidRating {
        /// Input being read.
        origin: String,
        /// Offending line.
        line: u64,
        /// Parse failure naming the scheme and value.
        source: RatingParseError,
    },
    /// The parsed rows were rejected by the ratings table.
    #[error("{origin}: {source}")]
    Table {
        /// Input being read.
        origin: String,
        /// Validation failure.
        source: RatingsTableError,
    },
    /// Writing the output table failed.
    #[error("{origin}: failed to write scores: {source}")]
    Write {
        /// Output being written.
        origin: String,
        /// Encoder failure.
        source: csv::Error,
    },
    /// The number of outcomes does not match the number of queries.
    #[error("{queries} queries but {outcomes} outcomes")]
    OutcomeCount {
        /// Number of queries supplied.
        queries: usize,
        /// Number of outcomes supplied.
        outcomes: usize,
    },
}
