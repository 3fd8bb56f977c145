//! Header lookup shared by the readers.

use csv::StringRecord;

use crate::DataError;

/// Column name for user ids.
pub const USER_ID: &str = "user_id";
/// Column name for work ids.
pub const WORK_ID: &str = "work_id";
/// Column name for rating categories.
pub const RATING: &str = "rating";
/// Column name for the predicted score.
pub const PROB_WILLSEE: &str = "prob_willsee";

/// Position of `column` in `headers`, compared after trimming.
pub(crate) fn locate(
    headers: &StringRecord,
    column: &'static str,
    origin: &str,
) -> Result<usize, DataError> {
    headers
        .iter()
        .position(|name| name.trim() == column)
        .ok_or_else(|| DataError::MissingColumn {
            origin: origin.to_owned(),
            column,
        })
}

/// 1-based line of `record`, or `0` when the reader tracked no position.
pub(crate) fn line_of(record: &StringRecord) -> u64 {
    record.position().map_or(0, csv::Position::line)
}

/// Wrap a decoder failure with its origin and line.
pub(crate) fn csv_error(origin: &str, source: csv::Error) -> DataError {
    DataError::Csv {
        origin: origin.to_owned(),
        line: source.position().map_or(0, csv::Position::line),
        source,
    }
}

/// Reader configured for the hivemind tables: header row required, flexible
/// row lengths rejected.
pub(crate) fn csv_reader<R: std::io::Read>(reader: R) -> csv::Reader<R> {
    csv::ReaderBuilder::new().has_headers(true).from_reader(reader)
}

/// Parse the id cell at `index`.
pub(crate) fn parse_id(
    record: &StringRecord,
    index: usize,
    column: &'static str,
    origin: &str,
    line: u64,
) -> Result<u64, DataError> {
    let raw = record.get(index).unwrap_or_default();
    raw.trim().parse().map_err(|_| DataError::MalformedId {
        origin: origin.to_owned(),
        line,
        column,
        value: raw.to_owned(),
    })
}
